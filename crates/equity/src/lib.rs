// Copyright (C) 2025 PotOdds Developers
// SPDX-License-Identifier: Apache-2.0

//! PotOdds hand prognosis.
//!
//! Estimates the distribution of the final hand category for two hole cards and
//! up to five board cards by dealing the missing board cards many times from the
//! cards left in the deck.
//!
//! The [Strategy] picks the number of iterations and the randomness source for a
//! [simulate] run, and [aggregate] turns the categories counts into the most
//! likely outcomes and the chance of improving the current hand:
//!
//! ```
//! # use potodds_equity::*;
//! let hero = parse_cards("AS AH").unwrap();
//! let board = parse_cards("KD 7C 2S").unwrap();
//!
//! let result = Strategy::ExactOddsApprox.simulate(&hero, &board, 1, 1_000);
//! assert_eq!(result.iterations(), EXACT_ODDS_MIN_ITERATIONS);
//!
//! let prognosis = aggregate(&result, true, board.len());
//! assert!(prognosis.items.len() <= 4);
//! assert!(prognosis.improvement_chance > 0.0);
//! ```
//!
//! In an application use a [Prognosticator] to run requests as the player
//! selects cards, it runs simulations on the tokio blocking pool and keeps only
//! the result of the latest request.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod config;
pub use config::PrognosisConfig;

pub mod dispatcher;
pub use dispatcher::{Applied, Prognosticator, Ticket, run_simulation};

pub mod hand;
pub use hand::{HandClass, HandState, Outs, Street};

pub mod prognosis;
pub use prognosis::{Prognosis, PrognosisItem, aggregate};

pub mod simulator;
pub use simulator::{SimulationResult, simulate};

pub mod strategy;
pub use strategy::{EXACT_ODDS_MIN_ITERATIONS, EXACT_ODDS_SEED, ParseStrategyError, Strategy};

// Reexport evaluator types.
pub use potodds_eval::{
    Card, Deck, HandCategory, Rank, Suit, best_category, has_at_least_pair, parse_cards,
};
