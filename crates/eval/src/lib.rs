// Copyright (C) 2025 PotOdds Developers
// SPDX-License-Identifier: Apache-2.0

//! PotOdds hand category evaluator.
//!
//! Classifies 5 cards hands into one of the ten [HandCategory] values and finds
//! the best category for hands of 5, 6 or 7 known cards by evaluating all the
//! 5-cards subsets:
//!
//! ```
//! # use potodds_eval::*;
//! let cards = parse_cards("AS KS 2D 3C 4S 5H 9D").unwrap();
//! assert_eq!(best_category(&cards), HandCategory::Straight);
//!
//! // Too few cards to make a hand yet.
//! let cards = parse_cards("AS AH 7C").unwrap();
//! assert_eq!(best_category(&cards), HandCategory::HighCard);
//! assert!(has_at_least_pair(&cards));
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod category;
pub use category::HandCategory;

mod eval;
pub use eval::{best_category, has_at_least_pair};

// Reexport cards types.
pub use potodds_cards::{Card, Deck, ParseCardError, Rank, Suit, parse_cards};
