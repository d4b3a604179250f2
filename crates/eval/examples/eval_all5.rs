// Copyright (C) 2025 PotOdds Developers
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example eval_all5
// ...
// Total hands      2598960
//
// High Card:       1302540
// One Pair:        1098240
// Two Pair:        123552
// Three of a Kind: 54912
// Straight:        10200
// Flush:           5108
// Full House:      3744
// Four of a Kind:  624
// Straight Flush:  36
// Royal Flush:     4
// ```
use std::time::Instant;

use potodds_eval::*;

fn main() {
    // Evaluate all 2.6M hands.
    let now = Instant::now();
    let mut counts = [0usize; HandCategory::COUNT];

    Deck::default().for_each(5, |hand| {
        counts[best_category(hand).index()] += 1;
    });

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<usize>();
    println!("Total hands      {total}");
    println!("Elapsed:         {elapsed:.3}s");
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    for category in HandCategory::ALL {
        let label = format!("{category}:");
        println!("{label:<17}{}", counts[category.index()]);
    }
}
