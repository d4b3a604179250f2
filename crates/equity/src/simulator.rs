// Copyright (C) 2025 PotOdds Developers
// SPDX-License-Identifier: Apache-2.0

//! Monte Carlo simulation of the final hand category.
use ahash::AHashSet;
use log::{debug, warn};
use rand::Rng;
use serde::{Deserialize, Serialize};

use potodds_eval::{Card, Deck, HandCategory, best_category};

/// The number of board cards at showdown.
pub const BOARD_SIZE: usize = 5;

/// The number of hero hole cards.
pub const HERO_SIZE: usize = 2;

/// The categories counts collected by a simulation run.
///
/// The counts always sum up to the number of iterations, a rejected run has no
/// iterations and all zero counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationResult {
    counts: [u32; HandCategory::COUNT],
    iterations: u32,
}

impl SimulationResult {
    /// The number of simulated hands.
    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    /// The number of hands that ended with the given category.
    pub fn count(&self, category: HandCategory) -> u32 {
        self.counts[category.index()]
    }

    /// Checks if this result has no data.
    pub fn is_empty(&self) -> bool {
        self.iterations == 0
    }

    /// The fraction of hands that ended with the given category.
    pub fn frequency(&self, category: HandCategory) -> f64 {
        f64::from(self.count(category)) / f64::from(self.iterations.max(1))
    }

    /// Iterates the categories with a non zero count, weakest first.
    pub fn iter(&self) -> impl Iterator<Item = (HandCategory, u32)> + '_ {
        HandCategory::ALL
            .into_iter()
            .map(|c| (c, self.count(c)))
            .filter(|(_, n)| *n > 0)
    }

    fn record(&mut self, category: HandCategory) {
        self.counts[category.index()] += 1;
        self.iterations += 1;
    }
}

/// Simulates `iterations` completions of the board and counts the hero final
/// hand categories.
///
/// Each iteration shuffles a copy of the working deck, sets aside two cards for
/// each live opponent, and deals the missing board cards from the cards that
/// follow. The opponents cards are never looked at, they are only removed from
/// the cards available to the board.
///
/// Returns an empty result if the hero doesn't have two cards, the board has
/// more than five cards, or a card is known twice.
pub fn simulate<R>(
    hero: &[Card],
    board: &[Card],
    live_opponents: usize,
    iterations: u32,
    rng: &mut R,
) -> SimulationResult
where
    R: Rng + ?Sized,
{
    if hero.len() != HERO_SIZE || board.len() > BOARD_SIZE {
        debug!(
            "Skipping simulation with {} hero and {} board cards",
            hero.len(),
            board.len()
        );
        return SimulationResult::default();
    }

    let known = hero.iter().chain(board).copied().collect::<AHashSet<_>>();
    if known.len() != hero.len() + board.len() {
        debug!("Skipping simulation with duplicated cards {hero:?} {board:?}");
        return SimulationResult::default();
    }

    let dealer = Dealer::new(&known, board.len(), live_opponents);

    // The hero cards and the known board stay in place, the dealt cards go at the end.
    let mut hand = [hero[0]; HERO_SIZE + BOARD_SIZE];
    hand[..HERO_SIZE].copy_from_slice(hero);
    hand[HERO_SIZE..HERO_SIZE + board.len()].copy_from_slice(board);
    let dealt_start = HERO_SIZE + board.len();

    let mut result = SimulationResult::default();
    for _ in 0..iterations {
        dealer.deal(rng, &mut hand[dealt_start..]);
        result.record(best_category(&hand));
    }

    debug!(
        "Simulated {} hands with hero {hero:?} board {board:?} and {live_opponents} opponents",
        result.iterations
    );

    result
}

/// Deals the missing board cards from the working deck.
#[derive(Debug)]
struct Dealer {
    /// The cards that are not known to the hero.
    deck: Deck,
    /// Cards set aside for the opponents at the top of the shuffled deck.
    reserved: usize,
    /// Board cards still to come.
    missing: usize,
}

impl Dealer {
    fn new(known: &AHashSet<Card>, known_board: usize, live_opponents: usize) -> Self {
        let deck = Deck::without(known.iter());
        let missing = BOARD_SIZE - known_board;

        // Opponents can only hold the cards the board doesn't need.
        let max_reserved = deck.count() - missing;
        let mut reserved = live_opponents.saturating_mul(2);
        if reserved > max_reserved {
            warn!("Not enough cards for {live_opponents} opponents, reserving {max_reserved} cards");
            reserved = max_reserved;
        }

        Self {
            deck,
            reserved,
            missing,
        }
    }

    /// Shuffles a copy of the deck and copies the board cards that follow the
    /// opponents cards into `dealt`.
    fn deal<R>(&self, rng: &mut R, dealt: &mut [Card])
    where
        R: Rng + ?Sized,
    {
        let mut shuffled = self.deck.clone();
        shuffled.shuffle(rng);
        dealt.copy_from_slice(&shuffled.cards()[self.reserved..self.reserved + self.missing]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use potodds_eval::{Rank, Suit, parse_cards};
    use rand::{SeedableRng, rngs::StdRng};

    fn cards(s: &str) -> Vec<Card> {
        parse_cards(s).unwrap()
    }

    fn run(hero: &str, board: &str, opponents: usize, iterations: u32) -> SimulationResult {
        let mut rng = StdRng::seed_from_u64(7);
        simulate(&cards(hero), &cards(board), opponents, iterations, &mut rng)
    }

    fn total(result: &SimulationResult) -> u32 {
        HandCategory::ALL.iter().map(|c| result.count(*c)).sum()
    }

    #[test]
    fn pocket_aces_preflop() {
        let result = run("AS AH", "", 0, 5_000);
        assert_eq!(result.iterations(), 5_000);
        assert_eq!(total(&result), 5_000);

        // Holding a pair the hand can never end as a high card.
        assert_eq!(result.count(HandCategory::HighCard), 0);

        let pair_or_better = HandCategory::ALL
            .iter()
            .filter(|c| **c >= HandCategory::OnePair)
            .map(|c| result.count(*c))
            .sum::<u32>();
        assert_eq!(pair_or_better, 5_000);

        // About 40% of the time the aces improve to two pair.
        let two_pair = result.frequency(HandCategory::TwoPair);
        assert!(two_pair > 0.3 && two_pair < 0.5, "{two_pair}");
    }

    #[test]
    fn opponents_take_cards() {
        let result = run("AS AH", "KD QC JH", 5, 2_000);
        assert_eq!(result.iterations(), 2_000);
        assert_eq!(total(&result), 2_000);

        // Too many opponents for the deck are clamped.
        let result = run("AS AH", "KD QC JH", 100, 200);
        assert_eq!(result.iterations(), 200);
        assert_eq!(total(&result), 200);
    }

    #[test]
    fn river_is_fixed() {
        let result = run("AS KS", "QS JS TS 2D 3C", 3, 500);
        assert_eq!(result.iterations(), 500);
        assert_eq!(result.count(HandCategory::RoyalFlush), 500);
        assert_eq!(result.iter().collect::<Vec<_>>(), vec![(HandCategory::RoyalFlush, 500)]);
        assert_eq!(result.frequency(HandCategory::RoyalFlush), 1.0);
    }

    fn dealer(hero: &str, board: &str, opponents: usize) -> (Dealer, AHashSet<Card>) {
        let board = cards(board);
        let known = cards(hero).into_iter().chain(board.iter().copied()).collect();
        (Dealer::new(&known, board.len(), opponents), known)
    }

    #[test]
    fn dealt_cards_are_not_known_cards() {
        let (dealer, known) = dealer("AS 2S", "7S 8S KD", 0);
        assert_eq!(dealer.deck.count(), 47);
        assert_eq!(dealer.missing, 2);

        let mut rng = StdRng::seed_from_u64(11);
        let mut dealt = [Card::new(Rank::Ace, Suit::Spades); 2];
        for _ in 0..2_000 {
            dealer.deal(&mut rng, &mut dealt);
            assert!(dealt.iter().all(|c| !known.contains(c)), "{dealt:?}");
            assert_ne!(dealt[0], dealt[1]);
        }
    }

    #[test]
    fn board_follows_opponents_cards() {
        let (dealer, _) = dealer("9H 8H", "2H 3C 4D", 3);
        assert_eq!(dealer.reserved, 6);

        // The board cards are never given to the opponents.
        let (clamped, _) = self::dealer("9H 8H", "2H 3C 4D", 100);
        assert_eq!(clamped.reserved, 45);

        let mut skipped_differ = false;
        for seed in 0..50 {
            let mut dealt = [Card::new(Rank::Ace, Suit::Spades); 2];
            dealer.deal(&mut StdRng::seed_from_u64(seed), &mut dealt);

            // Replay the same shuffle on the working deck.
            let mut shuffled = dealer.deck.clone();
            shuffled.shuffle(&mut StdRng::seed_from_u64(seed));
            assert_eq!(dealt, shuffled.cards()[6..8]);
            skipped_differ |= dealt != shuffled.cards()[..2];
        }
        assert!(skipped_differ);

        // With the same seed the opponents change the dealt boards.
        assert_ne!(run("9H 8H", "2H 3C 4D", 0, 1_000), run("9H 8H", "2H 3C 4D", 3, 1_000));
    }

    #[test]
    fn flush_draw_on_the_flop() {
        // Nine spades are left for the two missing board cards.
        let result = run("AS 2S", "7S 8S KD", 0, 3_000);
        let flush = result.frequency(HandCategory::Flush)
            + result.frequency(HandCategory::StraightFlush);
        assert!(flush > 0.25 && flush < 0.45, "{flush}");
    }

    #[test]
    fn invalid_input() {
        let result = run("AS", "", 0, 1_000);
        assert!(result.is_empty());
        assert_eq!(result.iterations(), 0);
        assert_eq!(result.iter().count(), 0);

        let result = run("AS KS QS", "", 0, 1_000);
        assert!(result.is_empty());

        let result = run("AS KS", "2D 3D 4D 5D 6D 7D", 0, 1_000);
        assert!(result.is_empty());

        // Same card in hand and on board.
        let result = run("AS KS", "AS 3D 4D", 0, 1_000);
        assert!(result.is_empty());

        assert_eq!(result.frequency(HandCategory::HighCard), 0.0);
    }

    #[test]
    fn seeded_runs_repeat() {
        assert_eq!(run("9H 8H", "2H", 2, 1_000), run("9H 8H", "2H", 2, 1_000));
    }
}
