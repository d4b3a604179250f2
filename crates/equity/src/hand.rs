// Copyright (C) 2025 PotOdds Developers
// SPDX-License-Identifier: Apache-2.0

//! The player hand as it is being selected.
use ahash::AHashSet;
use serde::{Deserialize, Serialize};
use std::fmt;

use potodds_eval::{Card, Rank, Suit, has_at_least_pair};

use crate::simulator::{BOARD_SIZE, HERO_SIZE};

/// The hero and board cards, each card may still be unknown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandState {
    /// The hero hole cards.
    pub hero: [Option<Card>; HERO_SIZE],
    /// The board cards.
    pub board: [Option<Card>; BOARD_SIZE],
    /// The number of opponents at the table.
    pub opponents: usize,
    /// The number of opponents that folded.
    pub folded_opponents: usize,
}

impl Default for HandState {
    fn default() -> Self {
        Self {
            hero: [None; HERO_SIZE],
            board: [None; BOARD_SIZE],
            opponents: 1,
            folded_opponents: 0,
        }
    }
}

impl HandState {
    /// Creates a state with the given known cards.
    ///
    /// Cards past the hero or board sizes are ignored.
    pub fn with_cards(hero: &[Card], board: &[Card]) -> Self {
        let mut state = Self::default();
        for (slot, card) in state.hero.iter_mut().zip(hero) {
            *slot = Some(*card);
        }

        for (slot, card) in state.board.iter_mut().zip(board) {
            *slot = Some(*card);
        }

        state
    }

    /// Sets the number of opponents and how many of them folded.
    pub fn with_opponents(mut self, opponents: usize, folded: usize) -> Self {
        self.opponents = opponents;
        self.folded_opponents = folded;
        self
    }

    /// The known hero cards.
    pub fn known_hero(&self) -> Vec<Card> {
        self.hero.iter().flatten().copied().collect()
    }

    /// The known board cards.
    pub fn known_board(&self) -> Vec<Card> {
        self.board.iter().flatten().copied().collect()
    }

    /// The known hero and board cards.
    pub fn known_cards(&self) -> Vec<Card> {
        self.hero.iter().chain(&self.board).flatten().copied().collect()
    }

    /// Checks if both hero cards are known.
    pub fn is_ready(&self) -> bool {
        self.hero.iter().all(Option::is_some)
    }

    /// The opponents still in the hand, there is always at least one.
    pub fn active_opponents(&self) -> usize {
        self.opponents.saturating_sub(self.folded_opponents).max(1)
    }

    /// The current street.
    pub fn street(&self) -> Street {
        Street::from_board(self.board.iter().flatten().count())
    }

    /// Checks if the known cards already make a pair.
    pub fn has_at_least_pair(&self) -> bool {
        has_at_least_pair(&self.known_cards())
    }

    /// The preflop class of the hero hand adjusted for the active opponents.
    pub fn hand_class(&self) -> Option<HandClass> {
        let [Some(c1), Some(c2)] = self.hero else {
            return None;
        };

        let base = HandClass::of(c1, c2);
        let opponents = self.active_opponents().clamp(1, 8);
        let adjusted = if opponents >= 6 {
            base.shift(-1)
        } else if opponents <= 2 {
            base.shift(1)
        } else {
            base
        };

        Some(adjusted)
    }

    /// The outs for pairing a hole card with the next card.
    ///
    /// Outs already visible in the known cards are dead, and so are the
    /// `manual_dead` outs the player knows are gone.
    pub fn outs(&self, manual_dead: usize) -> Option<Outs> {
        let [Some(c1), Some(c2)] = self.hero else {
            return None;
        };

        let baseline = if c1.rank() == c2.rank() { 2 } else { 6 };

        let known = self.known_cards();
        let auto_dead = Suit::suits()
            .flat_map(|s| [Card::new(c1.rank(), s), Card::new(c2.rank(), s)])
            .filter(|c| *c != c1 && *c != c2)
            .collect::<AHashSet<_>>()
            .into_iter()
            .filter(|c| known.contains(c))
            .count();

        let dead = auto_dead.saturating_add(manual_dead);
        Some(Outs {
            baseline,
            available: baseline.saturating_sub(dead),
            dead,
        })
    }
}

/// The betting round given by the number of known board cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Street {
    /// No board cards.
    Preflop,
    /// Up to three board cards.
    Flop,
    /// Four board cards.
    Turn,
    /// All the board cards.
    River,
}

impl Street {
    /// The street for a number of known board cards.
    pub fn from_board(known: usize) -> Street {
        match known {
            0 => Street::Preflop,
            1..=3 => Street::Flop,
            4 => Street::Turn,
            _ => Street::River,
        }
    }

    /// The default number of iterations for a simulation on this street.
    pub fn iteration_budget(&self) -> u32 {
        match self {
            Street::Preflop => 10_000,
            Street::Flop => 8_000,
            Street::Turn => 6_000,
            Street::River => 4_000,
        }
    }
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Street::Preflop => "Preflop",
            Street::Flop => "Flop",
            Street::Turn => "Turn",
            Street::River => "River",
        };

        write!(f, "{s}")
    }
}

/// Starting hand class, from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HandClass {
    /// Fold most of the time.
    Weak,
    /// Medium pairs, suited connectors, suited aces.
    Playable,
    /// Jacks, tens, big suited cards, ace king.
    Strong,
    /// Aces, kings, queens, ace king suited.
    Premium,
}

impl HandClass {
    const ORDER: [HandClass; 4] = [
        HandClass::Weak,
        HandClass::Playable,
        HandClass::Strong,
        HandClass::Premium,
    ];

    /// Classifies two hole cards.
    pub fn of(c1: Card, c2: Card) -> HandClass {
        let (r1, r2) = (c1.rank(), c2.rank());
        let (lo, hi) = (r1.min(r2), r1.max(r2));
        let suited = c1.suit() == c2.suit();
        let pair = r1 == r2;
        let ace_king = lo == Rank::King && hi == Rank::Ace;
        let gap = hi.value() - lo.value();

        if (pair && lo >= Rank::Queen) || (suited && ace_king) {
            HandClass::Premium
        } else if (pair && lo >= Rank::Ten)
            || (suited && lo >= Rank::Ten && hi >= Rank::Queen)
            || ace_king
        {
            HandClass::Strong
        } else if (pair && lo >= Rank::Six)
            || (suited && gap <= 2 && hi >= Rank::Nine)
            || (suited && hi == Rank::Ace)
        {
            HandClass::Playable
        } else {
            HandClass::Weak
        }
    }

    fn shift(self, delta: isize) -> HandClass {
        let idx = (self as isize + delta).clamp(0, Self::ORDER.len() as isize - 1);
        Self::ORDER[idx as usize]
    }
}

impl fmt::Display for HandClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            HandClass::Weak => "Weak",
            HandClass::Playable => "Playable",
            HandClass::Strong => "Strong",
            HandClass::Premium => "Premium",
        };

        write!(f, "{s}")
    }
}

/// Next card outs for pairing a hole card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outs {
    /// The outs with no known cards.
    pub baseline: usize,
    /// The outs still live.
    pub available: usize,
    /// The outs known to be gone.
    pub dead: usize,
}
