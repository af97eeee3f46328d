// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example classify_all5
// ...
// Total hands      2598960
// Elapsed:         0.062s
// Hands/sec:       41918710
//
// Highest Card:    1302540
// One Pair:        1098240
// Two Pairs:       123552
// Three of a Kind: 54912
// Straight:        10200
// Flush:           5108
// Full House:      3744
// Four of a Kind:  624
// Straight Flush:  40
// ```

use std::time::Instant;

use psychic_eval::*;

#[rustfmt::skip]
fn main() {
    // Classify all C(52, 5) hands from a full deck.
    let cards = Suit::suits()
        .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
        .collect::<Vec<_>>();

    let now = Instant::now();
    let mut counts = [0usize; 9];
    let n = cards.len();

    for c1 in 0..n {
        for c2 in (c1 + 1)..n {
            for c3 in (c2 + 1)..n {
                for c4 in (c3 + 1)..n {
                    for c5 in (c4 + 1)..n {
                        let hand = Hand::new([
                            cards[c1], cards[c2], cards[c3], cards[c4], cards[c5],
                        ]);
                        counts[classify(&hand) as usize] += 1;
                    }
                }
            }
        }
    }

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<usize>();
    println!("Total hands      {total}");
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    println!("Highest Card:    {}", counts[HandRank::HighestCard as usize]);
    println!("One Pair:        {}", counts[HandRank::OnePair as usize]);
    println!("Two Pairs:       {}", counts[HandRank::TwoPairs as usize]);
    println!("Three of a Kind: {}", counts[HandRank::ThreeOfAKind as usize]);
    println!("Straight:        {}", counts[HandRank::Straight as usize]);
    println!("Flush:           {}", counts[HandRank::Flush as usize]);
    println!("Full House:      {}", counts[HandRank::FullHouse as usize]);
    println!("Four of a Kind:  {}", counts[HandRank::FourOfAKind as usize]);
    println!("Straight Flush:  {}", counts[HandRank::StraightFlush as usize]);
}
