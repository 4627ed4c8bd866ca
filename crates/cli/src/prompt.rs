// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Console prompts.
use anyhow::{Result, bail};
use std::io::{BufRead, Write};
use thiserror::Error;

/// Minimum number of computer opponents.
pub const MIN_OPPONENTS: usize = 1;

/// Maximum number of computer opponents.
pub const MAX_OPPONENTS: usize = 3;

/// Invalid prompt input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PromptError {
    /// The input is not a number.
    #[error("'{0}' is not a number")]
    NotANumber(String),
    /// The number of opponents is not in the allowed range.
    #[error("the number of opponents must be between {} and {}", MIN_OPPONENTS, MAX_OPPONENTS)]
    OpponentsOutOfRange(usize),
    /// The exchange positions are not numbers.
    #[error("invalid card positions '{0}'")]
    InvalidPositions(String),
}

/// Parses the number of computer opponents.
pub fn parse_opponents(input: &str) -> Result<usize, PromptError> {
    let input = input.trim();
    let opponents = input
        .parse::<usize>()
        .map_err(|_| PromptError::NotANumber(input.to_string()))?;

    check_opponents(opponents)
}

/// Checks the number of computer opponents is in the allowed range.
pub fn check_opponents(opponents: usize) -> Result<usize, PromptError> {
    if (MIN_OPPONENTS..=MAX_OPPONENTS).contains(&opponents) {
        Ok(opponents)
    } else {
        Err(PromptError::OpponentsOutOfRange(opponents))
    }
}

/// Parses space separated 1-based card positions, blank input keeps all cards.
///
/// Positions are not checked against the hand size, the exchange reports
/// positions outside the hand.
pub fn parse_exchange(input: &str) -> Result<Vec<usize>, PromptError> {
    input
        .split_whitespace()
        .map(|p| p.parse::<usize>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| PromptError::InvalidPositions(input.trim().to_string()))
}

/// Asks for the number of opponents until the input is valid.
pub fn read_opponents<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<usize> {
    loop {
        write!(
            output,
            "Number of computer opponents ({MIN_OPPONENTS}-{MAX_OPPONENTS}): "
        )?;
        output.flush()?;

        let line = read_line(input)?;
        match parse_opponents(&line) {
            Ok(opponents) => return Ok(opponents),
            Err(e) => writeln!(output, "Invalid input, {e}.")?,
        }
    }
}

/// Asks for the card positions to exchange.
///
/// Invalid input keeps all cards and prints a notice.
pub fn read_exchange<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Vec<usize>> {
    write!(
        output,
        "Cards to exchange, space separated positions (blank keeps all): "
    )?;
    output.flush()?;

    let line = read_line(input)?;
    match parse_exchange(&line) {
        Ok(positions) => Ok(positions),
        Err(e) => {
            writeln!(output, "Invalid input, {e}, keeping all cards.")?;
            Ok(Vec::new())
        }
    }
}

fn read_line<R: BufRead>(input: &mut R) -> Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        bail!("Unexpected end of input");
    }

    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn opponents() {
        assert_eq!(parse_opponents("1"), Ok(1));
        assert_eq!(parse_opponents(" 3\n"), Ok(3));
        assert_eq!(parse_opponents("0"), Err(PromptError::OpponentsOutOfRange(0)));
        assert_eq!(parse_opponents("4"), Err(PromptError::OpponentsOutOfRange(4)));
        assert_eq!(
            parse_opponents("two"),
            Err(PromptError::NotANumber("two".to_string()))
        );
        assert_eq!(parse_opponents(""), Err(PromptError::NotANumber("".to_string())));
    }

    #[test]
    fn opponents_range() {
        assert_eq!(check_opponents(MIN_OPPONENTS), Ok(MIN_OPPONENTS));
        assert_eq!(check_opponents(MAX_OPPONENTS), Ok(MAX_OPPONENTS));
        assert_eq!(
            check_opponents(usize::MAX),
            Err(PromptError::OpponentsOutOfRange(usize::MAX))
        );
    }

    #[test]
    fn exchange_positions() {
        assert_eq!(parse_exchange(""), Ok(vec![]));
        assert_eq!(parse_exchange("  \n"), Ok(vec![]));
        assert_eq!(parse_exchange("1 3"), Ok(vec![1, 3]));
        assert_eq!(parse_exchange(" 5  2 2\n"), Ok(vec![5, 2, 2]));
        assert_eq!(parse_exchange("9 0"), Ok(vec![9, 0]));
        assert_eq!(
            parse_exchange("1,3\n"),
            Err(PromptError::InvalidPositions("1,3".to_string()))
        );
        assert_eq!(
            parse_exchange("1 -2"),
            Err(PromptError::InvalidPositions("1 -2".to_string()))
        );
    }

    #[test]
    fn read_opponents_reprompts() {
        let mut input = Cursor::new("abc\n7\n2\n");
        let mut output = Vec::new();

        let opponents = read_opponents(&mut input, &mut output).unwrap();
        assert_eq!(opponents, 2);

        let output = String::from_utf8(output).unwrap();
        assert_eq!(output.matches("Number of computer opponents (1-3): ").count(), 3);
        assert!(output.contains("Invalid input, 'abc' is not a number."));
        assert!(output.contains("Invalid input, the number of opponents must be between 1 and 3."));
    }

    #[test]
    fn read_opponents_end_of_input() {
        let mut input = Cursor::new("9\n");
        let mut output = Vec::new();
        assert!(read_opponents(&mut input, &mut output).is_err());
    }

    #[test]
    fn read_exchange_invalid_keeps_all() {
        let mut input = Cursor::new("x y\n");
        let mut output = Vec::new();

        let positions = read_exchange(&mut input, &mut output).unwrap();
        assert!(positions.is_empty());

        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("Invalid input, invalid card positions 'x y', keeping all cards."));
    }

    #[test]
    fn read_exchange_blank() {
        let mut input = Cursor::new("\n");
        let mut output = Vec::new();
        assert_eq!(read_exchange(&mut input, &mut output).unwrap(), Vec::<usize>::new());
    }
}
