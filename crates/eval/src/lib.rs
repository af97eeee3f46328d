// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Psychic Poker hand classifier and draw search.
//!
//! The classifier maps a five cards hand to one of nine ordered
//! [HandRank] categories:
//!
//! ```
//! # use psychic_eval::*;
//! let hand = "2H 3H 4H 5H AH".parse::<Hand>().unwrap();
//! assert_eq!(classify(&hand), HandRank::StraightFlush);
//! ```
//!
//! The draw search finds the best rank reachable by swapping any subset of
//! the hand for cards drawn in order from a five cards replacement deck:
//!
//! ```
//! # use psychic_eval::*;
//! let hand = "AC 2D 9C 3S KD".parse::<Hand>().unwrap();
//! let deck = "5S 4D KS AS 4C".parse::<Deck>().unwrap();
//! assert_eq!(best_achievable_rank(&hand, &deck), HandRank::Straight);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{HandRank, classify};

pub mod search;
pub use search::{Replacements, best_achievable_rank, replacements};

// Reexport cards types.
pub use psychic_cards::{
    ArityError, Card, Deck, Hand, ParseCardError, ParseCardsError, Rank, Suit,
};
