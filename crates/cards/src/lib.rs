// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five-card draw cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use drawpoker_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! assert_eq!(ah.to_string(), "As Kier");
//! ```
//!
//! a [Deck] type for shuffling and dealing hands, and a [Hand] type for
//! exchanging cards with the deck.
//!
//! For example to deal 4 hands from a shuffled deck and exchange the first and
//! third card of the first hand:
//!
//! ```
//! # use drawpoker_cards::{Deck, DEFAULT_HAND_SIZE};
//! let mut deck = Deck::new_and_shuffled(&mut rand::rng());
//! let mut hands = deck.deal_hands(4, DEFAULT_HAND_SIZE).unwrap();
//! assert_eq!(deck.count(), 32);
//!
//! let events = hands[0].exchange(&mut deck, &[1, 3]);
//! assert_eq!(events.len(), 2);
//! assert_eq!(deck.count(), 30);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, CardError, DEFAULT_HAND_SIZE, Deck, Rank, Suit};

mod hand;
pub use hand::{ExchangeEvent, Hand};
