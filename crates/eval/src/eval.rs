// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand classifier.
//!
//! Maps a five cards hand to one of nine categorical [HandRank] values by
//! checking detection predicates from the strongest category down, so that
//! overlapping predicates never misclassify: a hand that is both a flush and
//! a straight resolves to [HandRank::StraightFlush], a hand with a triple
//! and a pair resolves to [HandRank::FullHouse].
use serde::{Deserialize, Serialize};
use std::fmt;

use psychic_cards::{Hand, Rank};

/// The categorical strength of a five cards hand.
///
/// Categories are totally ordered from weakest to strongest, kickers within
/// a category do not participate in comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandRank {
    /// No other category applies.
    HighestCard = 0,
    /// One rank with exactly two cards.
    OnePair,
    /// Two distinct ranks with exactly two cards each.
    TwoPairs,
    /// One rank with three cards.
    ThreeOfAKind,
    /// Five consecutive rank values, or the ace low wheel.
    Straight,
    /// Five cards of the same suit.
    Flush,
    /// A three of a kind plus a pair.
    FullHouse,
    /// One rank with four cards.
    FourOfAKind,
    /// A straight in a single suit.
    StraightFlush,
}

impl HandRank {
    /// Returns the canonical name used in program output.
    pub fn name(&self) -> &'static str {
        match self {
            HandRank::HighestCard => "highest-card",
            HandRank::OnePair => "one-pair",
            HandRank::TwoPairs => "two-pairs",
            HandRank::ThreeOfAKind => "three-of-a-kind",
            HandRank::Straight => "straight",
            HandRank::Flush => "flush",
            HandRank::FullHouse => "full-house",
            HandRank::FourOfAKind => "four-of-a-kind",
            HandRank::StraightFlush => "straight-flush",
        }
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Classifies a hand into its rank category.
///
/// Total over any five cards, order independent, and side effect free.
pub fn classify(hand: &Hand) -> HandRank {
    let counts = RankCounts::new(hand);
    let straight = is_straight(hand);
    let flush = is_flush(hand);

    // Strongest first, the order is mandatory.
    if straight && flush {
        HandRank::StraightFlush
    } else if counts.contains(4) {
        HandRank::FourOfAKind
    } else if counts.contains(3) && counts.contains(2) {
        HandRank::FullHouse
    } else if flush {
        HandRank::Flush
    } else if straight {
        HandRank::Straight
    } else if counts.contains(3) {
        HandRank::ThreeOfAKind
    } else if counts.pairs() == 2 {
        HandRank::TwoPairs
    } else if counts.contains(2) {
        HandRank::OnePair
    } else {
        HandRank::HighestCard
    }
}

/// Per rank multiplicities of a hand, indexed by rank value.
struct RankCounts([u8; 15]);

impl RankCounts {
    fn new(hand: &Hand) -> Self {
        let mut counts = [0u8; 15];
        for card in hand.iter() {
            counts[card.rank().value() as usize] += 1;
        }

        Self(counts)
    }

    /// Checks if any rank occurs exactly n times.
    fn contains(&self, n: u8) -> bool {
        self.0.contains(&n)
    }

    /// Number of ranks occurring exactly twice.
    fn pairs(&self) -> usize {
        self.0.iter().filter(|&&c| c == 2).count()
    }
}

/// Checks for five consecutive rank values.
///
/// The ace plays high everywhere except in the single hardcoded ace low
/// wheel 2-3-4-5-A, there is no other wraparound.
fn is_straight(hand: &Hand) -> bool {
    let mut values = hand.cards().map(|c| c.rank().value());
    values.sort_unstable();

    values.windows(2).all(|w| w[1] == w[0] + 1)
        || values == [2, 3, 4, 5, Rank::Ace.value()]
}

fn is_flush(hand: &Hand) -> bool {
    let cards = hand.cards();
    cards.iter().all(|c| c.suit() == cards[0].suit())
}
