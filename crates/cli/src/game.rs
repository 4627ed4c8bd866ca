// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! A single five-card draw round.
use anyhow::{Result, bail};
use log::{debug, warn};
use rand::Rng;

use drawpoker_eval::{
    DEFAULT_HAND_SIZE, Deck, EvalError, ExchangeEvent, Hand, Showdown,
};

/// A round state, the round owns the deck and the players hands.
///
/// The human player is the first player, computer players never exchange
/// cards.
#[derive(Debug)]
pub struct Round {
    deck: Deck,
    hands: Vec<Hand>,
}

impl Round {
    /// Shuffles a new deck and deals a hand to each player.
    pub fn deal<R: Rng + ?Sized>(players: usize, rng: &mut R) -> Result<Self> {
        Self::with_deck(Deck::new_and_shuffled(rng), players)
    }

    /// Deals a hand to each player from the given deck.
    ///
    /// The round needs at least the human player.
    pub fn with_deck(mut deck: Deck, players: usize) -> Result<Self> {
        if players == 0 {
            bail!("a round needs at least one player");
        }

        let hands = deck.deal_hands(players, DEFAULT_HAND_SIZE)?;
        debug!("Dealt {players} hands, {} cards left", deck.count());
        Ok(Self { deck, hands })
    }

    /// All players hands.
    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    /// The human player hand.
    pub fn human_hand(&self) -> &Hand {
        &self.hands[0]
    }

    /// The cards left in the deck.
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Exchanges the human hand cards at the given 1-based positions.
    pub fn exchange(&mut self, positions: &[usize]) -> Vec<ExchangeEvent> {
        let events = self.hands[0].exchange(&mut self.deck, positions);

        for event in &events {
            match event {
                ExchangeEvent::OutOfRange { .. } | ExchangeEvent::DeckExhausted { .. } => {
                    warn!("{event}")
                }
                _ => debug!("{event}"),
            }
        }

        events
    }

    /// Evaluates and ranks all hands.
    pub fn showdown(&self) -> Result<Showdown, EvalError> {
        Showdown::eval(&self.hands)
    }
}
