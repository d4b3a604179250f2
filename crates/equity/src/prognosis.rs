// Copyright (C) 2025 PotOdds Developers
// SPDX-License-Identifier: Apache-2.0

//! Simulation results aggregation.
use serde::Serialize;

use potodds_eval::HandCategory;

use crate::simulator::{BOARD_SIZE, SimulationResult};

/// The maximum number of items in a prognosis.
pub const MAX_ITEMS: usize = 4;

/// The chance of ending the hand with a category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrognosisItem {
    /// The hand category.
    pub category: HandCategory,
    /// The percentage of simulated hands ending with this category.
    pub percent: f64,
    /// Opaque tag used by the presentation layer to style this item.
    pub tag: &'static str,
}

impl PrognosisItem {
    /// The category label.
    pub fn label(&self) -> &'static str {
        self.category.name()
    }

    /// The percentage rounded to one decimal.
    pub fn rounded_percent(&self) -> f64 {
        (self.percent * 10.0).round() / 10.0
    }
}

/// The aggregated simulation outcome shown to the player.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Prognosis {
    /// The most likely final categories, most likely first.
    pub items: Vec<PrognosisItem>,
    /// The percentage of hands that end better than the current hand.
    pub improvement_chance: f64,
}

/// The display tag for a category.
pub fn display_tag(category: HandCategory) -> &'static str {
    match category {
        HandCategory::RoyalFlush => "red",
        HandCategory::StraightFlush => "orange",
        HandCategory::FourOfAKind => "yellow",
        HandCategory::FullHouse => "green",
        HandCategory::Flush => "blue",
        HandCategory::Straight => "purple",
        HandCategory::ThreeOfAKind => "pink",
        HandCategory::TwoPair => "gray",
        HandCategory::OnePair => "brown",
        HandCategory::HighCard => "black",
    }
}

/// Converts a simulation result into a prognosis.
///
/// The improvement chance counts every category from one pair up, or from two
/// pair up if the player already holds a pair, and it is zero once all the
/// [BOARD_SIZE] board cards are known.
pub fn aggregate(
    result: &SimulationResult,
    currently_has_at_least_pair: bool,
    known_board: usize,
) -> Prognosis {
    let total = f64::from(result.iterations().max(1));
    let percent = |category: HandCategory| 100.0 * f64::from(result.count(category)) / total;

    // Strongest first so that the stable sort keeps ties in that order.
    let mut items = HandCategory::ALL
        .into_iter()
        .rev()
        .map(|category| PrognosisItem {
            category,
            percent: percent(category),
            tag: display_tag(category),
        })
        .filter(|item| item.percent > 0.0)
        .collect::<Vec<_>>();

    items.sort_by(|a, b| b.percent.total_cmp(&a.percent));
    items.truncate(MAX_ITEMS);

    let improvement_chance = if known_board >= BOARD_SIZE {
        0.0
    } else {
        let threshold = if currently_has_at_least_pair {
            HandCategory::TwoPair
        } else {
            HandCategory::OnePair
        };

        HandCategory::ALL
            .into_iter()
            .filter(|c| *c >= threshold)
            .map(percent)
            .sum::<f64>()
    };

    Prognosis {
        items,
        improvement_chance,
    }
}
