//! The sixteen movement cards of the base game.
//!
//! Offsets are `(dx, dy)` seen from Blue's side of the table: `dy > 0` points
//! north, towards Red. Move generation flips `dy` for Red.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NotationError;

/// Two-colour mark printed on each card. Only used to decide who moves first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stamp {
    Blue,
    Red,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Card {
    Tiger,
    Dragon,
    Frog,
    Rabbit,
    Crab,
    Elephant,
    Goose,
    Rooster,
    Monkey,
    Mantis,
    Horse,
    Ox,
    Crane,
    Boar,
    Eel,
    Cobra,
}

impl Card {
    pub const ALL: [Card; 16] = [
        Card::Tiger,
        Card::Dragon,
        Card::Frog,
        Card::Rabbit,
        Card::Crab,
        Card::Elephant,
        Card::Goose,
        Card::Rooster,
        Card::Monkey,
        Card::Mantis,
        Card::Horse,
        Card::Ox,
        Card::Crane,
        Card::Boar,
        Card::Eel,
        Card::Cobra,
    ];

    /// Dense index in `0..16`, stable across builds.
    pub fn idx(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Card::Tiger => "Tiger",
            Card::Dragon => "Dragon",
            Card::Frog => "Frog",
            Card::Rabbit => "Rabbit",
            Card::Crab => "Crab",
            Card::Elephant => "Elephant",
            Card::Goose => "Goose",
            Card::Rooster => "Rooster",
            Card::Monkey => "Monkey",
            Card::Mantis => "Mantis",
            Card::Horse => "Horse",
            Card::Ox => "Ox",
            Card::Crane => "Crane",
            Card::Boar => "Boar",
            Card::Eel => "Eel",
            Card::Cobra => "Cobra",
        }
    }

    /// Lowercase name used in move notation.
    pub fn key(self) -> &'static str {
        match self {
            Card::Tiger => "tiger",
            Card::Dragon => "dragon",
            Card::Frog => "frog",
            Card::Rabbit => "rabbit",
            Card::Crab => "crab",
            Card::Elephant => "elephant",
            Card::Goose => "goose",
            Card::Rooster => "rooster",
            Card::Monkey => "monkey",
            Card::Mantis => "mantis",
            Card::Horse => "horse",
            Card::Ox => "ox",
            Card::Crane => "crane",
            Card::Boar => "boar",
            Card::Eel => "eel",
            Card::Cobra => "cobra",
        }
    }

    pub fn stamp(self) -> Stamp {
        match self {
            Card::Tiger
            | Card::Rabbit
            | Card::Crab
            | Card::Goose
            | Card::Monkey
            | Card::Ox
            | Card::Crane
            | Card::Eel => Stamp::Blue,
            Card::Dragon
            | Card::Frog
            | Card::Elephant
            | Card::Rooster
            | Card::Mantis
            | Card::Horse
            | Card::Boar
            | Card::Cobra => Stamp::Red,
        }
    }

    /// Offsets in declaration order. Move generation iterates them in this order.
    pub fn offsets(self) -> &'static [(i8, i8)] {
        match self {
            Card::Tiger => &[(0, 2), (0, -1)],
            Card::Dragon => &[(-2, 1), (-1, -1), (1, -1), (2, 1)],
            Card::Frog => &[(-2, 0), (-1, 1), (1, -1)],
            Card::Rabbit => &[(2, 0), (1, 1), (-1, -1)],
            Card::Crab => &[(-2, 0), (0, 1), (2, 0)],
            Card::Elephant => &[(-1, 0), (-1, 1), (1, 0), (1, 1)],
            Card::Goose => &[(-1, 0), (-1, 1), (1, 0), (1, -1)],
            Card::Rooster => &[(-1, 0), (-1, -1), (1, 0), (1, 1)],
            Card::Monkey => &[(-1, 1), (-1, -1), (1, 1), (1, -1)],
            Card::Mantis => &[(-1, 1), (0, -1), (1, 1)],
            Card::Horse => &[(-1, 0), (0, 1), (0, -1)],
            Card::Ox => &[(1, 0), (0, 1), (0, -1)],
            Card::Crane => &[(0, 1), (-1, -1), (1, -1)],
            Card::Boar => &[(-1, 0), (0, 1), (1, 0)],
            Card::Eel => &[(-1, 1), (1, 0), (-1, -1)],
            Card::Cobra => &[(1, 1), (-1, 0), (1, -1)],
        }
    }

    pub fn from_idx(idx: usize) -> Option<Card> {
        Card::ALL.get(idx).copied()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Card {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Card::ALL
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| NotationError::UnknownCard(s.to_string()))
    }
}

#[cfg(test)]
#[path = "cards_tests.rs"]
mod cards_tests;
