// Copyright (C) 2025 PotOdds Developers
// SPDX-License-Identifier: Apache-2.0

//! Best hand category for a set of known cards.
use potodds_cards::{Card, Deck, Rank};

use crate::HandCategory;

/// Returns the best category that can be formed with five of the given cards.
///
/// All the 5-cards subsets are classified and the strongest category is
/// returned, with fewer than 5 cards the hand can only be a [HandCategory::HighCard].
///
/// Only the first [Deck::SIZE] cards are looked at.
pub fn best_category(cards: &[Card]) -> HandCategory {
    const K: u32 = 5;

    let cards = &cards[..cards.len().min(Deck::SIZE)];
    let n = cards.len();

    if n < K as usize {
        return HandCategory::HighCard;
    }

    let limit = 1u64 << n;
    let mut mask = (1u64 << K) - 1;
    let mut best = HandCategory::HighCard;

    while mask < limit {
        let mut five = [cards[0]; 5];
        let mut bits = mask;
        for slot in five.iter_mut() {
            *slot = cards[bits.trailing_zeros() as usize];
            bits &= bits - 1;
        }

        best = best.max(HandCategory::classify(&five));
        if best == HandCategory::RoyalFlush {
            break;
        }

        // Next mask with the same number of bits set (Gosper's hack).
        let low = mask & mask.wrapping_neg();
        let ripple = mask + low;
        mask = (((ripple ^ mask) >> 2) / low) | ripple;
    }

    best
}

/// Checks if at least two of the given cards have the same rank.
pub fn has_at_least_pair(cards: &[Card]) -> bool {
    let mut seen = [false; Rank::Ace as usize + 1];
    cards.iter().any(|c| {
        let v = c.rank().value() as usize;
        std::mem::replace(&mut seen[v], true)
    })
}
