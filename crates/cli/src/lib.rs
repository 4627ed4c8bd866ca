// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five-card draw console game.
//!
//! The human player plays against 1 to 3 computer players, after the deal the
//! human can exchange any number of cards once, then all hands are ranked and
//! the winners announced.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use crossterm::style::Stylize;
use log::info;
use rand::{SeedableRng, rngs::StdRng};
use std::io::{self, BufRead, IsTerminal, Write};

pub mod game;
pub mod prompt;
pub mod report;

use game::Round;

/// Number of players in a demo round.
pub const DEMO_PLAYERS: usize = 4;

/// Game configuration.
#[derive(Debug, Default)]
pub struct Config {
    /// Number of computer opponents, asked at the prompt if not set.
    pub opponents: Option<usize>,
    /// Seed for a reproducible deck shuffle.
    pub seed: Option<u64>,
    /// Plays a non-interactive round without exchanges.
    pub demo: bool,
}

/// Plays a round on the terminal.
///
/// The winner line is highlighted only when stdout is a terminal.
pub fn run(config: Config) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    let styled = output.is_terminal();
    play_round(&config, &mut input, &mut output, styled)
}

/// Plays a round reading the human input from `input`, the output is plain
/// text.
pub fn play<R: BufRead, W: Write>(config: &Config, input: &mut R, output: &mut W) -> Result<()> {
    play_round(config, input, output, false)
}

fn play_round<R: BufRead, W: Write>(
    config: &Config,
    input: &mut R,
    output: &mut W,
    styled: bool,
) -> Result<()> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };

    let round = if config.demo {
        Round::deal(DEMO_PLAYERS, &mut rng)?
    } else {
        let opponents = match config.opponents {
            Some(opponents) => prompt::check_opponents(opponents)?,
            None => prompt::read_opponents(input, output)?,
        };

        let mut round = Round::deal(opponents + 1, &mut rng)?;

        writeln!(output, "\nYour hand:")?;
        for line in report::human_hand(round.human_hand()) {
            writeln!(output, "{line}")?;
        }

        let positions = prompt::read_exchange(input, output)?;
        for event in round.exchange(&positions) {
            writeln!(output, "{event}")?;
        }

        round
    };

    writeln!(output)?;
    for line in report::hands(round.hands()) {
        writeln!(output, "{line}")?;
    }

    let showdown = round.showdown()?;

    writeln!(output)?;
    for line in report::results(&showdown) {
        writeln!(output, "{line}")?;
    }

    if let Some(line) = report::winners(&showdown) {
        info!("{line}");
        if styled {
            writeln!(output, "\n{}", line.as_str().bold().green())?;
        } else {
            writeln!(output, "\n{line}")?;
        }
    }

    output.flush()?;

    Ok(())
}
