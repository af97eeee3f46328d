// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Psychic Poker cards types.
//!
//! This crate defines types to create cards:
//!
//! ```
//! # use psychic_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd = Card::new(Rank::King, Suit::Diamonds);
//! ```
//!
//! to parse them from two character tokens:
//!
//! ```
//! # use psychic_cards::{Card, Rank, Suit};
//! let td = "TD".parse::<Card>().unwrap();
//! assert_eq!(td, Card::new(Rank::Ten, Suit::Diamonds));
//! ```
//!
//! and the fixed size [Hand] and [Deck] used by the draw search, built from
//! card slices with arity checking:
//!
//! ```
//! # use psychic_cards::{Card, Hand};
//! let cards = ["3D", "5S", "2H", "QD", "TD"]
//!     .iter()
//!     .map(|t| t.parse::<Card>().unwrap())
//!     .collect::<Vec<_>>();
//! let hand = Hand::try_from(cards.as_slice()).unwrap();
//! assert_eq!(hand.to_string(), "3D 5S 2H QD TD");
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{ArityError, Card, Deck, Hand, ParseCardError, ParseCardsError, Rank, Suit};
