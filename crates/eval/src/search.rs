// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Replacement draw search.
//!
//! Enumerates every hand reachable by swapping a non empty subset of the
//! hand positions for cards drawn in order from the deck, and returns the
//! best [HandRank] across the original hand and all replacements.
//!
//! For a draw count k the first k deck cards replace every k-subset of the
//! five hand positions, with the i-th deck card landing on the i-th smallest
//! chosen position. Subsets are visited in ascending lexicographic order and
//! every subset of the same size reuses the same deck prefix, so there are
//! 31 replacement hands in total.
use psychic_cards::{Deck, Hand};

use crate::eval::{HandRank, classify};

/// Returns the best rank reachable from a hand with the given deck.
///
/// The original hand is always a candidate so the result is never below
/// `classify(hand)`. Candidates are consumed lazily and the search stops as
/// soon as a straight flush shows up, nothing can beat it.
pub fn best_achievable_rank(hand: &Hand, deck: &Deck) -> HandRank {
    let mut best = classify(hand);

    for candidate in replacements(hand, deck) {
        if best == HandRank::StraightFlush {
            break;
        }
        best = best.max(classify(&candidate));
    }

    best
}

/// Returns an iterator over all replacement hands for a hand and deck.
pub fn replacements<'a>(hand: &'a Hand, deck: &'a Deck) -> Replacements<'a> {
    Replacements {
        hand,
        deck,
        k: 1,
        positions: [0, 1, 2, 3, 4],
    }
}

/// Lazy iterator over the 31 replacement hands.
///
/// Yields draw counts in increasing order and, within a draw count, the
/// position subsets in ascending lexicographic order. Each yielded hand is a
/// fresh copy, the original hand is never touched.
pub struct Replacements<'a> {
    hand: &'a Hand,
    deck: &'a Deck,
    k: usize,
    positions: [usize; Hand::SIZE],
}

impl Replacements<'_> {
    /// Steps to the next position subset, growing the draw count when the
    /// current size is exhausted.
    fn advance(&mut self) {
        let (n, k) = (Hand::SIZE, self.k);

        // Bump the rightmost position that can still move up, and restack
        // the ones after it.
        for i in (0..k).rev() {
            if self.positions[i] < n - (k - i) {
                self.positions[i] += 1;
                for j in i + 1..k {
                    self.positions[j] = self.positions[j - 1] + 1;
                }
                return;
            }
        }

        self.k += 1;
        for (j, p) in self.positions.iter_mut().enumerate() {
            *p = j;
        }
    }
}

impl Iterator for Replacements<'_> {
    type Item = Hand;

    fn next(&mut self) -> Option<Hand> {
        if self.k > Hand::SIZE {
            return None;
        }

        let mut cards = self.hand.cards();
        for (i, &p) in self.positions.iter().take(self.k).enumerate() {
            cards[p] = self.deck.draw(i);
        }

        self.advance();
        Some(Hand::new(cards))
    }
}
