// Copyright (C) 2025 PotOdds Developers
// SPDX-License-Identifier: Apache-2.0

//! Simulation strategies.
//!
//! All strategies run the same [simulate] loop, they only differ in the
//! number of iterations and in the randomness source.
use rand::{SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

use potodds_eval::Card;

use crate::simulator::{SimulationResult, simulate};

/// The minimum number of iterations for a [Strategy::Heuristic] run.
pub const HEURISTIC_MIN_ITERATIONS: u32 = 1_000;

/// The minimum number of iterations for a [Strategy::ExactOddsApprox] run.
pub const EXACT_ODDS_MIN_ITERATIONS: u32 = 50_000;

/// The seed used by [Strategy::ExactOddsApprox] runs.
pub const EXACT_ODDS_SEED: u64 = 0x5EED_0DD5;

/// A simulation strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Strategy {
    /// Random simulation with the requested number of iterations.
    #[default]
    MonteCarlo,
    /// Random simulation with a fifth of the requested iterations.
    Heuristic,
    /// Seeded simulation with a large sample.
    ///
    /// This is not an exhaustive enumeration of the remaining cards, it uses a
    /// fixed seed and at least [EXACT_ODDS_MIN_ITERATIONS] iterations so that
    /// results are repeatable and have a low variance.
    #[serde(rename = "exactOdds")]
    ExactOddsApprox,
}

impl Strategy {
    /// All the strategies.
    pub const ALL: [Strategy; 3] = [
        Strategy::MonteCarlo,
        Strategy::Heuristic,
        Strategy::ExactOddsApprox,
    ];

    /// The strategy identifier used by settings.
    pub fn id(&self) -> &'static str {
        match self {
            Strategy::MonteCarlo => "monteCarlo",
            Strategy::Heuristic => "heuristic",
            Strategy::ExactOddsApprox => "exactOdds",
        }
    }

    /// The strategy name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Strategy::MonteCarlo => "Monte Carlo",
            Strategy::Heuristic => "Heuristic",
            Strategy::ExactOddsApprox => "Exact Odds",
        }
    }

    /// The number of iterations this strategy runs for a requested budget.
    pub fn iterations(&self, requested: u32) -> u32 {
        match self {
            Strategy::MonteCarlo => requested,
            Strategy::Heuristic => (requested / 5).max(HEURISTIC_MIN_ITERATIONS),
            Strategy::ExactOddsApprox => requested.max(EXACT_ODDS_MIN_ITERATIONS),
        }
    }

    /// Checks if runs with the same inputs give the same result.
    pub fn is_deterministic(&self) -> bool {
        matches!(self, Strategy::ExactOddsApprox)
    }

    /// Runs a simulation with this strategy parameters.
    pub fn simulate(
        &self,
        hero: &[Card],
        board: &[Card],
        live_opponents: usize,
        requested: u32,
    ) -> SimulationResult {
        let iterations = self.iterations(requested);
        if self.is_deterministic() {
            let mut rng = StdRng::seed_from_u64(EXACT_ODDS_SEED);
            simulate(hero, board, live_opponents, iterations, &mut rng)
        } else {
            simulate(hero, board, live_opponents, iterations, &mut rand::rng())
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Error returned when parsing an unknown strategy identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown strategy '{0}', expected one of monteCarlo, heuristic, exactOdds")]
pub struct ParseStrategyError(String);

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strategy::ALL
            .into_iter()
            .find(|st| st.id().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseStrategyError(s.to_string()))
    }
}
