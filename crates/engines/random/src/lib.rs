//! Random Move Onitama Engine
//!
//! A simple engine that selects moves uniformly at random from all legal moves.
//! Useful for:
//! - Smoke-testing the match runner
//! - Baseline comparisons (any real engine should easily beat this)
//! - Stress testing move generation

use onitama_core::{all_legal_moves, Engine, GameState, SearchLimits, SearchResult};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};


/// An Onitama engine that plays random legal moves.
///
/// There is no evaluation: every legal action, passes included, is equally
/// likely. Seed it to make a game reproducible.
#[derive(Debug, Clone)]
pub struct RandomEngine {
    rng: StdRng,
    nodes: u64,
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            nodes: 0,
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            nodes: 0,
        }
    }
}

impl Engine for RandomEngine {
    fn search(&mut self, state: &GameState, _limits: SearchLimits) -> SearchResult {
        let moves = all_legal_moves(state, state.side_to_move);
        self.nodes = 1;

        // Never empty: a side without placements gets its two passes.
        let best_move = moves[self.rng.gen_range(0..moves.len())];

        SearchResult {
            best_move,
            score: 0,
            depth: 1,
            nodes: self.nodes,
            stopped: false,
        }
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }

    fn default_limits(&self) -> SearchLimits {
        SearchLimits::depth(1)
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
