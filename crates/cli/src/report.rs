// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Round report formatting.
use drawpoker_eval::{Hand, PlayerId, Showdown};

/// Formats the players hands, one line per player.
pub fn hands(hands: &[Hand]) -> Vec<String> {
    hands
        .iter()
        .enumerate()
        .map(|(idx, hand)| format!("{} hand: {hand}", PlayerId::new(idx + 1)))
        .collect()
}

/// Formats the human hand with the card positions used for exchanging.
pub fn human_hand(hand: &Hand) -> Vec<String> {
    hand.cards()
        .iter()
        .enumerate()
        .map(|(idx, card)| format!("  {}) {card}", idx + 1))
        .collect()
}

/// Formats the ranked results, one line per player from the strongest hand.
pub fn results(showdown: &Showdown) -> Vec<String> {
    showdown
        .results()
        .iter()
        .map(|r| format!("{}: {} (Strength: {})", r.player, r.rank, r.strength()))
        .collect()
}

/// Formats the winner or the tie line, `None` if there are no players.
pub fn winners(showdown: &Showdown) -> Option<String> {
    let rank = showdown.winning_rank()?;

    let line = match showdown.winners() {
        [winner] => format!("Winner: {} with the hand: {rank}", winner.player),
        winners => {
            let players = winners
                .iter()
                .map(|w| w.player.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            format!("It's a tie between: {players} with the hand: {rank}")
        }
    };

    Some(line)
}
