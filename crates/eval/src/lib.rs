// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five-card draw hand evaluator.
//!
//! To use the evaluator create a hand and use [HandValue] to evaluate the hand
//! and get its category and strength:
//!
//! ```
//! # use drawpoker_eval::*;
//! // 2..6 Karo and 7..Jack Karo.
//! let cards = Deck::default().into_iter().take(10).collect::<Vec<_>>();
//! let v1 = HandValue::eval(&cards[0..5]).unwrap();
//! let v2 = HandValue::eval(&cards[5..]).unwrap();
//! assert_eq!(v1.rank(), HandRank::StraightFlush);
//! assert_eq!(v1.strength(), v2.strength());
//! ```
//!
//! A [Showdown] ranks the players hands and finds the winners, hands with the
//! same category are a tie:
//!
//! ```
//! # use drawpoker_eval::*;
//! let mut deck = Deck::new_and_shuffled(&mut rand::rng());
//! let hands = deck.deal_hands(4, DEFAULT_HAND_SIZE).unwrap();
//! let showdown = Showdown::eval(&hands).unwrap();
//! assert_eq!(showdown.results().len(), 4);
//! assert!(!showdown.winners().is_empty());
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{EvalError, HAND_SIZE, HandRank, HandValue};

pub mod showdown;
pub use showdown::{PlayerId, RankedResult, Showdown};

// Reexport cards types.
pub use drawpoker_cards::{
    Card, CardError, DEFAULT_HAND_SIZE, Deck, ExchangeEvent, Hand, Rank, Suit,
};
