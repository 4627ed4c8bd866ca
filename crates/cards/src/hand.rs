// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Player hand and cards exchange.
use serde::{Deserialize, Serialize};
use std::{collections::BTreeSet, fmt};

use crate::{Card, Deck};

/// The outcome of exchanging a hand position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExchangeEvent {
    /// No positions were given, the hand is unchanged.
    NoExchange,
    /// The card at `position` was replaced with a card from the deck.
    Replaced {
        /// The 1-based hand position.
        position: usize,
        /// The card removed from the hand.
        discarded: Card,
        /// The card drawn from the deck.
        drawn: Card,
    },
    /// The deck ran out of cards, the card at `position` was kept.
    DeckExhausted {
        /// The 1-based hand position.
        position: usize,
    },
    /// The position is not in the hand and was ignored.
    OutOfRange {
        /// The requested 1-based position.
        position: usize,
    },
}

impl fmt::Display for ExchangeEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExchangeEvent::NoExchange => write!(f, "No cards exchanged"),
            ExchangeEvent::Replaced {
                position,
                discarded,
                drawn,
            } => write!(f, "Card {position}: {discarded} replaced with {drawn}"),
            ExchangeEvent::DeckExhausted { position } => {
                write!(f, "Card {position}: no cards left in the deck, card kept")
            }
            ExchangeEvent::OutOfRange { position } => {
                write!(f, "Card {position}: invalid position, ignored")
            }
        }
    }
}

/// A player hand.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a hand with the given cards.
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// The hand cards.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Number of cards in the hand.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Checks if the hand has no cards.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Replaces the cards at the given 1-based positions with cards from the deck.
    ///
    /// Duplicate positions are exchanged once and positions are processed from
    /// the highest to the lowest. A position outside the hand is ignored, and if
    /// the deck runs out of cards the card at that position is kept. Returns an
    /// event for each position so that callers can report what happened.
    pub fn exchange(&mut self, deck: &mut Deck, positions: &[usize]) -> Vec<ExchangeEvent> {
        if positions.is_empty() {
            return vec![ExchangeEvent::NoExchange];
        }

        let positions = positions.iter().copied().collect::<BTreeSet<_>>();
        positions
            .into_iter()
            .rev()
            .map(|position| {
                if position == 0 || position > self.cards.len() {
                    return ExchangeEvent::OutOfRange { position };
                }

                match deck.draw() {
                    Some(drawn) => {
                        let discarded = std::mem::replace(&mut self.cards[position - 1], drawn);
                        ExchangeEvent::Replaced {
                            position,
                            discarded,
                            drawn,
                        }
                    }
                    None => ExchangeEvent::DeckExhausted { position },
                }
            })
            .collect()
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, card) in self.cards.iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }

            write!(f, "{card}")?;
        }

        Ok(())
    }
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self::new(cards)
    }
}
