// Copyright (C) 2025 PotOdds Developers
// SPDX-License-Identifier: Apache-2.0

//! Asynchronous prognosis requests.
//!
//! Simulations run on the tokio blocking pool so that they never stall the
//! task that collects the player input. A new request can be issued while an
//! older one is still running, each request gets a [Ticket] and only the
//! completion of the latest issued ticket is applied, older completions are
//! dropped.
use anyhow::Result;
use log::{debug, info};
use parking_lot::Mutex;
use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

use potodds_eval::Card;

use crate::{
    config::PrognosisConfig,
    hand::HandState,
    prognosis::{Prognosis, aggregate},
    simulator::SimulationResult,
    strategy::Strategy,
};

/// Runs a simulation on the blocking pool.
pub async fn run_simulation(
    hero: Vec<Card>,
    board: Vec<Card>,
    live_opponents: usize,
    iterations: u32,
    strategy: Strategy,
) -> Result<SimulationResult> {
    let result = tokio::task::spawn_blocking(move || {
        strategy.simulate(&hero, &board, live_opponents, iterations)
    })
    .await?;

    Ok(result)
}

/// Identifies a prognosis request, later requests have greater tickets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

/// The outcome of a request completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// The prognosis is now the latest one.
    Accepted,
    /// A newer request was issued and the prognosis was dropped.
    Stale,
}

/// Runs prognosis requests and keeps the latest accepted prognosis.
#[derive(Debug, Clone, Default)]
pub struct Prognosticator(Arc<Shared>);

#[derive(Debug, Default)]
struct Shared {
    /// The last issued ticket number.
    issued: AtomicU64,
    /// The latest accepted state, written only by the latest ticket.
    slot: Mutex<Slot>,
}

#[derive(Debug, Default)]
struct Slot {
    accepted: u64,
    prognosis: Option<Prognosis>,
}

impl Prognosticator {
    /// Creates a prognosticator with no data.
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs a prognosis for a hand and applies it if no newer request was issued.
    ///
    /// A hand without both hero cards clears the prognosis, and so does a
    /// request that fails or is dropped before it completes.
    pub async fn request(&self, state: &HandState, config: &PrognosisConfig) -> Result<Applied> {
        let pending = Pending::new(self);
        let ticket = pending.ticket;

        if !state.is_ready() {
            return Ok(pending.complete(None));
        }

        let hero = state.known_hero();
        let board = state.known_board();
        let known_board = board.len();
        let has_pair = state.has_at_least_pair();
        let iterations = config.iterations_for(state);

        debug!(
            "Request {} {} simulation with {iterations} iterations on the {}",
            ticket.0,
            config.strategy,
            state.street()
        );

        let result = run_simulation(
            hero,
            board,
            state.active_opponents(),
            iterations,
            config.strategy,
        )
        .await?;

        let prognosis = if result.is_empty() {
            None
        } else {
            Some(aggregate(&result, has_pair, known_board))
        };

        Ok(pending.complete(prognosis))
    }

    /// Issues a ticket for a new request, superseding all the previous ones.
    pub fn issue(&self) -> Ticket {
        Ticket(self.0.issued.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Completes a request, the prognosis is applied only if the ticket is the
    /// latest issued one.
    pub fn complete(&self, ticket: Ticket, prognosis: Option<Prognosis>) -> Applied {
        let mut slot = self.0.slot.lock();

        let latest = self.0.issued.load(Ordering::SeqCst);
        if ticket.0 != latest || ticket.0 <= slot.accepted {
            debug!("Dropping stale request {} (latest {latest})", ticket.0);
            return Applied::Stale;
        }

        if let Some(p) = &prognosis {
            info!(
                "Request {} accepted with {} items and {:.1}% improvement chance",
                ticket.0,
                p.items.len(),
                p.improvement_chance
            );
        }

        slot.accepted = ticket.0;
        slot.prognosis = prognosis;
        Applied::Accepted
    }

    /// The latest accepted prognosis, `None` if there is no data yet.
    pub fn latest(&self) -> Option<Prognosis> {
        self.0.slot.lock().prognosis.clone()
    }

    /// Checks if the latest issued request hasn't completed yet.
    pub fn is_busy(&self) -> bool {
        let slot = self.0.slot.lock();
        self.0.issued.load(Ordering::SeqCst) != slot.accepted
    }

    /// Drops the current prognosis and supersedes any running request.
    pub fn clear(&self) {
        let ticket = self.issue();
        self.complete(ticket, None);
    }
}

/// Completes an issued ticket with no data if the request doesn't get to it.
struct Pending<'a> {
    prognosticator: &'a Prognosticator,
    ticket: Ticket,
    done: bool,
}

impl<'a> Pending<'a> {
    fn new(prognosticator: &'a Prognosticator) -> Self {
        Self {
            prognosticator,
            ticket: prognosticator.issue(),
            done: false,
        }
    }

    fn complete(mut self, prognosis: Option<Prognosis>) -> Applied {
        self.done = true;
        self.prognosticator.complete(self.ticket, prognosis)
    }
}

impl Drop for Pending<'_> {
    fn drop(&mut self) {
        if !self.done {
            debug!("Request {} didn't complete", self.ticket.0);
            self.prognosticator.complete(self.ticket, None);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use potodds_eval::{HandCategory, parse_cards};

    fn state(hero: &str, board: &str) -> HandState {
        HandState::with_cards(&parse_cards(hero).unwrap(), &parse_cards(board).unwrap())
    }

    fn prognosis(improvement_chance: f64) -> Prognosis {
        Prognosis {
            items: vec![],
            improvement_chance,
        }
    }

    #[test]
    fn stale_completions_are_dropped() {
        let p = Prognosticator::new();
        assert!(p.latest().is_none());
        assert!(!p.is_busy());

        let t1 = p.issue();
        let t2 = p.issue();
        assert!(t2 > t1);
        assert!(p.is_busy());

        // The older request completes first but a newer one was issued.
        assert_eq!(p.complete(t1, Some(prognosis(1.0))), Applied::Stale);
        assert!(p.latest().is_none());
        assert!(p.is_busy());

        assert_eq!(p.complete(t2, Some(prognosis(2.0))), Applied::Accepted);
        assert_eq!(p.latest(), Some(prognosis(2.0)));
        assert!(!p.is_busy());

        // The same ticket can't be applied twice.
        assert_eq!(p.complete(t2, Some(prognosis(3.0))), Applied::Stale);
        assert_eq!(p.latest(), Some(prognosis(2.0)));
    }

    #[test]
    fn newer_completion_wins() {
        let p = Prognosticator::new();
        let t1 = p.issue();
        let t2 = p.issue();

        assert_eq!(p.complete(t2, Some(prognosis(2.0))), Applied::Accepted);
        assert_eq!(p.complete(t1, Some(prognosis(1.0))), Applied::Stale);
        assert_eq!(p.latest(), Some(prognosis(2.0)));

        p.clear();
        assert!(p.latest().is_none());
        assert!(!p.is_busy());
    }

    #[tokio::test]
    async fn run_simulation_on_blocking_pool() {
        let hero = parse_cards("AS AH").unwrap();
        let result = run_simulation(hero, vec![], 0, 2_000, Strategy::MonteCarlo)
            .await
            .unwrap();

        assert_eq!(result.iterations(), 2_000);
        assert_eq!(result.count(HandCategory::HighCard), 0);
    }

    #[tokio::test]
    async fn request_prognosis() {
        let p = Prognosticator::new();
        let config = PrognosisConfig {
            strategy: Strategy::MonteCarlo,
            iterations: Some(2_000),
        };

        let applied = p.request(&state("AS AH", "KD 7C 2S"), &config).await.unwrap();
        assert_eq!(applied, Applied::Accepted);
        assert!(!p.is_busy());

        let latest = p.latest().unwrap();
        assert!(!latest.items.is_empty());
        assert!(latest.items.len() <= 4);
        assert!(latest.improvement_chance > 0.0 && latest.improvement_chance < 100.0);

        // A partial hand has no data.
        let applied = p.request(&state("AS", "KD 7C 2S"), &config).await.unwrap();
        assert_eq!(applied, Applied::Accepted);
        assert!(p.latest().is_none());

        // The river has no improvement chance.
        p.request(&state("AS AH", "KD 7C 2S 3H 9D"), &config)
            .await
            .unwrap();
        assert_eq!(p.latest().unwrap().improvement_chance, 0.0);
    }

    #[tokio::test]
    async fn dropped_request_is_not_busy() {
        let p = Prognosticator::new();
        let config = PrognosisConfig {
            strategy: Strategy::MonteCarlo,
            iterations: Some(200_000),
        };

        let timeout = std::time::Duration::from_millis(1);
        let res = tokio::time::timeout(timeout, p.request(&state("AS AH", ""), &config)).await;
        assert!(res.is_err());
        assert!(!p.is_busy());
        assert!(p.latest().is_none());

        // A dropped older request doesn't clear a newer prognosis.
        let older = p.issue();
        let config = PrognosisConfig {
            strategy: Strategy::MonteCarlo,
            iterations: Some(1_000),
        };
        p.request(&state("AS AH", "KD 7C 2S"), &config)
            .await
            .unwrap();
        assert_eq!(p.complete(older, None), Applied::Stale);
        assert!(p.latest().is_some());
        assert!(!p.is_busy());
    }

    #[tokio::test]
    async fn concurrent_requests_apply_latest() {
        let p = Prognosticator::new();
        let config = PrognosisConfig::new(Strategy::ExactOddsApprox);

        let preflop = state("AS AH", "");
        let river = state("7C 2D", "KH 9S 4D JC 3S");

        // Both requests are issued before either completes, the first one
        // must be dropped no matter which finishes first.
        let (r1, r2) = tokio::join!(p.request(&preflop, &config), p.request(&river, &config));
        assert_eq!(r1.unwrap(), Applied::Stale);
        assert_eq!(r2.unwrap(), Applied::Accepted);

        let hero = river.known_hero();
        let board = river.known_board();
        let result = Strategy::ExactOddsApprox.simulate(&hero, &board, 1, 4_000);
        let expected = aggregate(&result, false, 5);
        assert_eq!(p.latest(), Some(expected));
    }
}
