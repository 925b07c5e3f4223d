//! Game and match outcomes

use onitama_core::{Player, WinReason};
use serde::{Deserialize, Serialize};

/// Result of a single game from one engine's side.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameResult {
    Win,
    Loss,
    Draw,
}

impl GameResult {
    /// The same game seen from the opponent's side.
    pub fn flip(self) -> Self {
        match self {
            GameResult::Win => GameResult::Loss,
            GameResult::Loss => GameResult::Win,
            GameResult::Draw => GameResult::Draw,
        }
    }

    pub fn notation(self) -> &'static str {
        match self {
            GameResult::Win => "1-0",
            GameResult::Loss => "0-1",
            GameResult::Draw => "1/2",
        }
    }
}

/// How a game stopped.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Termination {
    /// Decided on the board.
    Rules(WinReason),
    /// The side to move returned a move that is not legal and lost.
    Forfeit,
    /// The ply cap was reached; scored as a draw.
    MaxPlies,
}

/// Everything worth keeping about one played game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRecord {
    /// Seed the cards were dealt from.
    pub deal_seed: u64,
    pub blue: String,
    pub red: String,
    pub winner: Option<Player>,
    pub termination: Termination,
    pub plies: u32,
    /// Moves in `card:fromto` notation.
    pub moves: Vec<String>,
}

impl GameRecord {
    pub fn result_for(&self, player: Player) -> GameResult {
        match self.winner {
            Some(w) if w == player => GameResult::Win,
            Some(_) => GameResult::Loss,
            None => GameResult::Draw,
        }
    }
}

/// Result of a match (multiple games), counted from engine 1's side.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchResult {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl MatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, result: GameResult) {
        match result {
            GameResult::Win => self.wins += 1,
            GameResult::Loss => self.losses += 1,
            GameResult::Draw => self.draws += 1,
        }
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Score from engine1's perspective (1 for win, 0.5 for draw, 0 for loss)
    pub fn score(&self) -> f64 {
        let total = self.total_games() as f64;
        if total == 0.0 {
            return 0.5;
        }
        (self.wins as f64 + 0.5 * self.draws as f64) / total
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod record_tests;
