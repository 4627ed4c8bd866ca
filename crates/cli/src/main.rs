// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five-card draw console game.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use clap::Parser;
use log::error;

#[derive(Debug, Parser)]
struct Cli {
    /// Number of computer opponents, asked at the prompt if not given.
    #[clap(long, short, value_parser = clap::value_parser!(u8).range(1..=3))]
    opponents: Option<u8>,
    /// Seed for a reproducible deck shuffle.
    #[clap(long, short)]
    seed: Option<u64>,
    /// Play a round with 4 players without exchanging cards.
    #[clap(long, conflicts_with = "opponents")]
    demo: bool,
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    let config = drawpoker_cli::Config {
        opponents: cli.opponents.map(usize::from),
        seed: cli.seed,
        demo: cli.demo,
    };

    if let Err(e) = drawpoker_cli::run(config) {
        error!("{e}");
        std::process::exit(1);
    }
}
