// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five-card hand evaluator.
//!
//! A hand is classified into one of nine categories by looking at its suits
//! and at how many times each rank appears. Hands in the same category have
//! the same value, kickers are never compared.
//!
//! A straight is five distinct ranks spanning exactly five values with the Ace
//! always high, so the wheel (As, 2, 3, 4, 5) is not a straight.
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use drawpoker_cards::{Card, CardError};

/// Number of cards in an evaluated hand.
pub const HAND_SIZE: usize = 5;

/// Hand evaluation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The hand doesn't have five cards.
    #[error("invalid hand size {0}, expected 5 cards")]
    InvalidHandSize(usize),
    /// A card couldn't be parsed.
    #[error(transparent)]
    Card(#[from] CardError),
}

/// The hand category, the discriminant is the category strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandRank {
    /// High card.
    HighCard = 1,
    /// One pair.
    OnePair,
    /// Two pairs.
    TwoPair,
    /// Three of a kind.
    ThreeOfAKind,
    /// Straight.
    Straight,
    /// Flush.
    Flush,
    /// Full house.
    FullHouse,
    /// Four of a kind.
    FourOfAKind,
    /// Straight flush, also called a Poker.
    StraightFlush,
}

impl HandRank {
    /// Returns all categories from the weakest to the strongest.
    pub fn ranks() -> impl DoubleEndedIterator<Item = HandRank> {
        use HandRank::*;
        [
            HighCard,
            OnePair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
        ]
        .into_iter()
    }

    /// The category strength from 1 (high card) to 9 (straight flush).
    pub fn strength(&self) -> u8 {
        *self as u8
    }

    /// The category name.
    pub fn name(&self) -> &'static str {
        match self {
            HandRank::HighCard => "High Card",
            HandRank::OnePair => "One Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
        }
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An evaluated hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandValue {
    rank: HandRank,
    hand: [Card; HAND_SIZE],
}

impl HandValue {
    /// Evaluates a 5 cards hand.
    pub fn eval(cards: &[Card]) -> Result<Self, EvalError> {
        let hand = <[Card; HAND_SIZE]>::try_from(cards)
            .map_err(|_| EvalError::InvalidHandSize(cards.len()))?;

        let mut values = hand.map(|c| c.rank().value());
        values.sort_unstable();

        let is_flush = hand.iter().all(|c| c.suit() == hand[0].suit());

        let mut counts = AHashMap::with_capacity(HAND_SIZE);
        for v in values {
            *counts.entry(v).or_insert(0u8) += 1;
        }

        let mut counts = counts.values().copied().collect::<Vec<_>>();
        counts.sort_unstable_by(|a, b| b.cmp(a));

        let is_straight = counts.len() == HAND_SIZE && values[HAND_SIZE - 1] - values[0] == 4;
        let (top, second) = (counts[0], counts.get(1).copied().unwrap_or(0));

        let rank = if is_flush && is_straight {
            HandRank::StraightFlush
        } else if top == 4 {
            HandRank::FourOfAKind
        } else if top == 3 && second == 2 {
            HandRank::FullHouse
        } else if is_flush {
            HandRank::Flush
        } else if is_straight {
            HandRank::Straight
        } else if top == 3 {
            HandRank::ThreeOfAKind
        } else if top == 2 && second == 2 {
            HandRank::TwoPair
        } else if top == 2 {
            HandRank::OnePair
        } else {
            HandRank::HighCard
        };

        Ok(Self { rank, hand })
    }

    /// Parses the cards text and evaluates the hand.
    ///
    /// ```
    /// # use drawpoker_eval::{HandRank, HandValue};
    /// let hv = HandValue::eval_text(&["3 Kier", "3 Pik", "3 Karo", "7 Trefl", "7 Kier"]).unwrap();
    /// assert_eq!(hv.rank(), HandRank::FullHouse);
    /// assert_eq!(hv.strength(), 7);
    /// ```
    pub fn eval_text<S: AsRef<str>>(cards: &[S]) -> Result<Self, EvalError> {
        let cards = cards
            .iter()
            .map(|c| c.as_ref().parse::<Card>())
            .collect::<Result<Vec<_>, _>>()?;
        Self::eval(&cards)
    }

    /// The hand category.
    pub fn rank(&self) -> HandRank {
        self.rank
    }

    /// The hand strength.
    pub fn strength(&self) -> u8 {
        self.rank.strength()
    }

    /// The evaluated cards.
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }
}
