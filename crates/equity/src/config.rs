// Copyright (C) 2025 PotOdds Developers
// SPDX-License-Identifier: Apache-2.0

//! Prognosis configuration.
use serde::{Deserialize, Serialize};

use crate::{hand::HandState, strategy::Strategy};

/// Settings that drive a prognosis request.
///
/// Storing and restoring the selected strategy is up to the settings layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrognosisConfig {
    /// The selected simulation strategy.
    pub strategy: Strategy,
    /// Requested iterations, if not set the budget depends on the street.
    pub iterations: Option<u32>,
}

impl PrognosisConfig {
    /// Creates a config for a strategy with the street iteration budget.
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            iterations: None,
        }
    }

    /// The iterations requested for a hand.
    pub fn iterations_for(&self, state: &HandState) -> u32 {
        self.iterations
            .unwrap_or_else(|| state.street().iteration_budget())
    }
}
