// Copyright (C) 2025 PotOdds Developers
// SPDX-License-Identifier: Apache-2.0

//! Five cards hand categories.
use serde::{Deserialize, Serialize};
use std::fmt;

use potodds_cards::{Card, Rank};

/// A hand category, ordered from the weakest to the strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandCategory {
    /// No other category.
    HighCard = 0,
    /// Two cards of the same rank.
    OnePair,
    /// Two different pairs.
    TwoPair,
    /// Three cards of the same rank.
    ThreeOfAKind,
    /// Five consecutive ranks.
    Straight,
    /// Five cards of the same suit.
    Flush,
    /// Three of a kind and a pair.
    FullHouse,
    /// Four cards of the same rank.
    FourOfAKind,
    /// A straight in one suit.
    StraightFlush,
    /// Ten to ace in one suit.
    RoyalFlush,
}

impl HandCategory {
    /// The number of categories.
    pub const COUNT: usize = 10;

    /// All categories from the weakest to the strongest.
    pub const ALL: [HandCategory; Self::COUNT] = [
        HandCategory::HighCard,
        HandCategory::OnePair,
        HandCategory::TwoPair,
        HandCategory::ThreeOfAKind,
        HandCategory::Straight,
        HandCategory::Flush,
        HandCategory::FullHouse,
        HandCategory::FourOfAKind,
        HandCategory::StraightFlush,
        HandCategory::RoyalFlush,
    ];

    /// The position of this category in [HandCategory::ALL].
    #[inline]
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// The category name.
    pub fn name(&self) -> &'static str {
        match self {
            HandCategory::HighCard => "High Card",
            HandCategory::OnePair => "One Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
            HandCategory::RoyalFlush => "Royal Flush",
        }
    }

    /// Classifies a five cards hand.
    pub fn classify(five: &[Card; 5]) -> HandCategory {
        let flush = five.iter().all(|c| c.suit() == five[0].suit());

        let mut values = five.map(|c| c.rank().value());
        values.sort_unstable();
        let straight = is_straight(&values);

        if flush && straight {
            // An ace-low straight is sorted as 2..5,A so it never matches this.
            return if values == ROYAL_VALUES {
                HandCategory::RoyalFlush
            } else {
                HandCategory::StraightFlush
            };
        }

        let mut counts = [0u8; Rank::Ace as usize + 1];
        for v in values {
            counts[v as usize] += 1;
        }

        // Rank counts in descending order, like [3, 2] for a full house.
        counts.sort_unstable_by(|a, b| b.cmp(a));
        let groups = counts.iter().take_while(|&&n| n > 0).count();

        match &counts[..groups] {
            [4, 1] => HandCategory::FourOfAKind,
            [3, 2] => HandCategory::FullHouse,
            _ if flush => HandCategory::Flush,
            _ if straight => HandCategory::Straight,
            [3, 1, 1] => HandCategory::ThreeOfAKind,
            [2, 2, 1] => HandCategory::TwoPair,
            [2, 1, 1, 1] => HandCategory::OnePair,
            _ => HandCategory::HighCard,
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

const ROYAL_VALUES: [u8; 5] = [10, 11, 12, 13, 14];

/// Checks sorted rank values for five consecutive ranks, an ace can also play
/// as a one only for the A,2,3,4,5 wheel.
fn is_straight(sorted: &[u8; 5]) -> bool {
    if is_consecutive(sorted) {
        return true;
    }

    if sorted[4] != Rank::Ace.value() {
        return false;
    }

    let mut low = sorted.map(|v| if v == Rank::Ace.value() { 1 } else { v });
    low.sort_unstable();
    is_consecutive(&low)
}

fn is_consecutive(sorted: &[u8; 5]) -> bool {
    sorted.windows(2).all(|w| w[1] == w[0] + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use potodds_cards::{Deck, parse_cards};

    fn classify(s: &str) -> HandCategory {
        let cards = parse_cards(s).unwrap();
        let five: [Card; 5] = cards.try_into().unwrap();
        HandCategory::classify(&five)
    }

    #[test]
    fn straights() {
        assert_eq!(classify("AS 2H 3D 4C 5S"), HandCategory::Straight);
        assert_eq!(classify("6S 2H 3D 4C 5S"), HandCategory::Straight);
        assert_eq!(classify("TS JH QD KC AS"), HandCategory::Straight);
        assert_eq!(classify("9S TH JD QC KS"), HandCategory::Straight);

        // The ace doesn't wrap around.
        assert_eq!(classify("QS KH AD 2C 3S"), HandCategory::HighCard);
        assert_eq!(classify("KS AH 2D 3C 4S"), HandCategory::HighCard);

        // Four in a row with a pair.
        assert_eq!(classify("2S 3H 4D 5C 5S"), HandCategory::OnePair);
    }

    #[test]
    fn straight_flushes() {
        assert_eq!(classify("AS 2S 3S 4S 5S"), HandCategory::StraightFlush);
        assert_eq!(classify("9H TH JH QH KH"), HandCategory::StraightFlush);
        assert_eq!(classify("TD JD QD KD AD"), HandCategory::RoyalFlush);
        assert_eq!(classify("AC KC QC JC TC"), HandCategory::RoyalFlush);
    }

    #[test]
    fn rank_groups() {
        assert_eq!(classify("7S 7H 7D 7C 2S"), HandCategory::FourOfAKind);
        assert_eq!(classify("7S 7H 7D 2C 2S"), HandCategory::FullHouse);
        assert_eq!(classify("7S 7H 7D 9C 2S"), HandCategory::ThreeOfAKind);
        assert_eq!(classify("7S 7H 9D 9C 2S"), HandCategory::TwoPair);
        assert_eq!(classify("7S 7H 9D KC 2S"), HandCategory::OnePair);
        assert_eq!(classify("7S 8H 9D KC 2S"), HandCategory::HighCard);
        assert_eq!(classify("7S 8S 9S KS 2S"), HandCategory::Flush);
    }

    #[test]
    fn ordering() {
        assert!(HandCategory::ALL.windows(2).all(|w| w[0] < w[1]));
        for (idx, category) in HandCategory::ALL.iter().enumerate() {
            assert_eq!(category.index(), idx);
        }

        assert_eq!(HandCategory::RoyalFlush.to_string(), "Royal Flush");
    }

    #[test]
    fn all_five_cards_hands() {
        let mut counts = [0usize; HandCategory::COUNT];
        Deck::default().for_each(5, |hand| {
            let five: [Card; 5] = hand.try_into().unwrap();
            counts[HandCategory::classify(&five).index()] += 1;
        });

        assert_eq!(
            counts,
            [
                1_302_540, 1_098_240, 123_552, 54_912, 10_200, 5_108, 3_744, 624, 36, 4
            ]
        );
    }
}
