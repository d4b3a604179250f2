// Copyright (C) 2025 PotOdds Developers
// SPDX-License-Identifier: Apache-2.0

//! PotOdds cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use potodds_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd: Card = "KD".parse().unwrap();
//! assert_eq!(ah.to_string(), "AH");
//! assert_eq!(kd.rank(), Rank::King);
//! ```
//!
//! and a [Deck] type for building the working deck of a hand, shuffling, and
//! iterating k-cards subsets of the deck.
//!
//! For example to build the deck left after dealing a pair of aces and count the
//! possible flops:
//!
//! ```
//! # use potodds_cards::{Card, Deck, Rank, Suit};
//! let hero = [
//!     Card::new(Rank::Ace, Suit::Spades),
//!     Card::new(Rank::Ace, Suit::Hearts),
//! ];
//!
//! let deck = Deck::without(&hero);
//! assert_eq!(deck.count(), 50);
//!
//! let mut flops = 0;
//! deck.for_each(3, |_| flops += 1);
//! assert_eq!(flops, 19_600);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, ParseCardError, Rank, Suit, parse_cards};
