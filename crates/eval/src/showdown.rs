// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown ranking and winners.
use serde::{Deserialize, Serialize};
use std::fmt;

use drawpoker_cards::Hand;

use crate::{EvalError, HandRank, HandValue};

/// A player identifier, players are numbered from 1 in dealing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(usize);

impl PlayerId {
    /// Creates a player id with the given number.
    pub const fn new(number: usize) -> Self {
        Self(number)
    }

    /// The player number.
    pub fn number(&self) -> usize {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A player hand category at showdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedResult {
    /// The player.
    pub player: PlayerId,
    /// The player hand category.
    pub rank: HandRank,
}

impl RankedResult {
    /// Creates a result for a player.
    pub fn new(player: PlayerId, rank: HandRank) -> Self {
        Self { player, rank }
    }

    /// The player hand strength.
    pub fn strength(&self) -> u8 {
        self.rank.strength()
    }
}

/// The players results sorted from the strongest to the weakest hand.
///
/// Players with the same strength keep the order they were given in, and all
/// players with the highest strength are winners:
///
/// ```
/// # use drawpoker_eval::{HandRank, PlayerId, RankedResult, Showdown};
/// let showdown = Showdown::new([
///     RankedResult::new(PlayerId::new(1), HandRank::OnePair),
///     RankedResult::new(PlayerId::new(2), HandRank::Flush),
///     RankedResult::new(PlayerId::new(3), HandRank::Flush),
/// ]);
/// assert!(showdown.is_tie());
/// assert_eq!(showdown.winners().len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Showdown {
    results: Vec<RankedResult>,
}

impl Showdown {
    /// Ranks the given results.
    pub fn new(results: impl IntoIterator<Item = RankedResult>) -> Self {
        let mut results = results.into_iter().collect::<Vec<_>>();
        // Stable sort, ties keep their relative order.
        results.sort_by(|r1, r2| r2.strength().cmp(&r1.strength()));
        Self { results }
    }

    /// Evaluates and ranks the hands, the first hand is player 1.
    pub fn eval(hands: &[Hand]) -> Result<Self, EvalError> {
        let results = hands
            .iter()
            .enumerate()
            .map(|(idx, hand)| {
                HandValue::eval(hand.cards())
                    .map(|hv| RankedResult::new(PlayerId::new(idx + 1), hv.rank()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(results))
    }

    /// All results from the strongest hand.
    pub fn results(&self) -> &[RankedResult] {
        &self.results
    }

    /// The players with the highest strength, empty if there are no players.
    pub fn winners(&self) -> &[RankedResult] {
        match self.results.first() {
            Some(best) => {
                let n = self
                    .results
                    .partition_point(|r| r.strength() == best.strength());
                &self.results[..n]
            }
            None => &[],
        }
    }

    /// The winning hand category.
    pub fn winning_rank(&self) -> Option<HandRank> {
        self.results.first().map(|r| r.rank)
    }

    /// Checks if more than one player has the winning hand.
    pub fn is_tie(&self) -> bool {
        self.winners().len() > 1
    }
}
