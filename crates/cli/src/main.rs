// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Psychic Poker CLI player.
//!
//! Reads lines of ten card tokens, five hand cards followed by five deck
//! cards, and prints the best hand rank reachable by swapping hand cards
//! for deck draws.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Context, Result, bail};
use clap::Parser;
use log::error;
use std::fs;

use psychic_eval::{Card, Deck, Hand, best_achievable_rank};

#[derive(Debug, Parser)]
struct Cli {
    /// Play a single space separated line of ten cards.
    #[clap(long, short)]
    run: Option<String>,
    /// Name of the file with one play per line.
    #[clap(long, short, default_value = "input.txt")]
    file: String,
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .init();

    let cli = Cli::parse();

    if let Some(line) = &cli.run {
        println!("{}", play(line)?);
        return Ok(());
    }

    let input = fs::read_to_string(&cli.file)
        .with_context(|| format!("reading input file {:?}", cli.file))?;

    // A bad line does not abort the rest of the batch.
    for (lineno, line) in input.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        match play(line) {
            Ok(result) => println!("{result}"),
            Err(e) => error!("line {}: {e}", lineno + 1),
        }
    }

    Ok(())
}

/// Plays one line of five hand cards followed by five deck cards.
fn play(line: &str) -> Result<String> {
    let cards = line
        .split_whitespace()
        .map(|token| token.parse::<Card>().map_err(anyhow::Error::from))
        .collect::<Result<Vec<_>>>()?;

    if cards.len() != Hand::SIZE + Deck::SIZE {
        bail!(
            "expected {} cards, got {}",
            Hand::SIZE + Deck::SIZE,
            cards.len()
        );
    }

    let hand = Hand::try_from(&cards[..Hand::SIZE])?;
    let deck = Deck::try_from(&cards[Hand::SIZE..])?;
    let best = best_achievable_rank(&hand, &deck);

    Ok(format!("Hand: {hand} Deck: {deck} Best hand: {best}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn highest_card() {
        let output = play("3D 5S 2H QD TD 6S KH 9H AD QH").unwrap();
        assert_eq!(
            output,
            "Hand: 3D 5S 2H QD TD Deck: 6S KH 9H AD QH Best hand: highest-card"
        );
    }

    #[test]
    fn one_pair() {
        let output = play("6C 9C 8C 2D 7C 2H TC 4C 9S AH").unwrap();
        assert_eq!(
            output,
            "Hand: 6C 9C 8C 2D 7C Deck: 2H TC 4C 9S AH Best hand: one-pair"
        );
    }

    #[test]
    fn two_pairs() {
        let output = play("AH 2C 9S AD 3C QH KS JS JD KD").unwrap();
        assert_eq!(
            output,
            "Hand: AH 2C 9S AD 3C Deck: QH KS JS JD KD Best hand: two-pairs"
        );
    }

    #[test]
    fn three_of_a_kind() {
        let output = play("KS AH 2H 3C 4H KC 2C TC 2D AS").unwrap();
        assert_eq!(
            output,
            "Hand: KS AH 2H 3C 4H Deck: KC 2C TC 2D AS Best hand: three-of-a-kind"
        );
    }

    #[test]
    fn straight() {
        let output = play("AC 2D 9C 3S KD 5S 4D KS AS 4C").unwrap();
        assert_eq!(
            output,
            "Hand: AC 2D 9C 3S KD Deck: 5S 4D KS AS 4C Best hand: straight"
        );
    }

    #[test]
    fn flush() {
        let output = play("2H AD 5H AC 7H AH 6H 9H 4H 3C").unwrap();
        assert_eq!(
            output,
            "Hand: 2H AD 5H AC 7H Deck: AH 6H 9H 4H 3C Best hand: flush"
        );
    }

    #[test]
    fn full_house() {
        let output = play("2H 2S 3H 3S 3C 2D 9C 3D 6C TH").unwrap();
        assert_eq!(
            output,
            "Hand: 2H 2S 3H 3S 3C Deck: 2D 9C 3D 6C TH Best hand: full-house"
        );
    }

    #[test]
    fn four_of_a_kind() {
        let output = play("2H 2S 3H 3S 3C 2D 3D 6C 9C TH").unwrap();
        assert_eq!(
            output,
            "Hand: 2H 2S 3H 3S 3C Deck: 2D 3D 6C 9C TH Best hand: four-of-a-kind"
        );
    }

    #[test]
    fn straight_flush() {
        let output = play("TH JH QC QD QS QH KH AH 2S 6S").unwrap();
        assert_eq!(
            output,
            "Hand: TH JH QC QD QS Deck: QH KH AH 2S 6S Best hand: straight-flush"
        );
    }

    #[test]
    fn malformed_line() {
        assert!(play("XX 5S 2H QD TD 6S KH 9H AD QH").is_err());
        assert!(play("3D 5S 2H QD TD 6S KH 9H AD").is_err());
        assert!(play("3D 5S 2H QD TD 6S KH 9H AD QH 2C").is_err());
        assert!(play("").is_err());
    }

    #[test]
    fn extra_whitespace() {
        let output = play("  3D 5S  2H QD TD 6S KH 9H AD QH ").unwrap();
        assert_eq!(
            output,
            "Hand: 3D 5S 2H QD TD Deck: 6S KH 9H AD QH Best hand: highest-card"
        );
    }
}
