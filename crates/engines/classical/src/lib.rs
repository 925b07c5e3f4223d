//! Classical Onitama Engine
//!
//! Iterative-deepening negamax with alpha-beta pruning over a hand-tuned
//! evaluation. The strongest engine in the arena and the one the difficulty
//! levels are built on.

pub mod config;
mod eval;
mod ordering;
mod search;
mod tt;

use onitama_core::{Engine, GameState, Player, SearchLimits, SearchResult};
use tracing::debug;

pub use config::{EngineProfile, EvalConfig, EvalWeights, ProfileError, SearchConfig};
pub use eval::{evaluate, WIN, WIN_THRESHOLD};
pub use ordering::{move_score, order_moves};
pub use search::{pick_best_move, Aborted, SearchOutcome, Searcher, INF};
pub use tt::{Bound, TranspositionTable, TtEntry};

/// Classical Onitama engine using negamax with alpha-beta pruning.
///
/// This engine uses:
/// - Negamax search with alpha-beta pruning and a transposition table
/// - Capture-only quiescence at the horizon
/// - Iterative deepening with optional aspiration windows
/// - A configurable evaluation (see [`EngineProfile`])
///
/// The transposition table lives as long as the engine. It is cleared on
/// [`Engine::new_game`] and whenever the profile changes.
#[derive(Debug, Default)]
pub struct ClassicalEngine {
    profile: EngineProfile,
    tt: TranspositionTable,
    /// Node counter for statistics
    nodes: u64,
}

impl ClassicalEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine playing at one of the built-in levels.
    pub fn with_level(level: u8) -> Self {
        Self::with_profile(EngineProfile::level(level))
    }

    pub fn with_profile(profile: EngineProfile) -> Self {
        Self {
            profile,
            tt: TranspositionTable::new(),
            nodes: 0,
        }
    }

    pub fn profile(&self) -> &EngineProfile {
        &self.profile
    }

    pub fn set_profile(&mut self, profile: EngineProfile) {
        if profile != self.profile {
            self.profile = profile;
            self.tt.clear();
        }
    }

    /// Nodes visited by the last decision.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Positions currently remembered by the transposition table.
    pub fn tt_len(&self) -> usize {
        self.tt.len()
    }

    /// Chooses a move for the side to move, evaluating from `pov`.
    ///
    /// `limits.depth` caps the deepening and the limits' time control is
    /// started here. Always returns a legal action for the side to move.
    pub fn choose_move(
        &mut self,
        state: &GameState,
        pov: Player,
        mut limits: SearchLimits,
    ) -> SearchResult {
        limits.start();
        let outcome = pick_best_move(
            state,
            pov,
            limits.depth,
            &self.profile.search,
            &mut self.tt,
            &limits.time_control,
        );
        self.nodes = outcome.nodes;
        debug!(
            best = %outcome.best_move,
            score = outcome.score,
            depth = outcome.depth,
            nodes = outcome.nodes,
            tt_hits = self.tt.hits(),
            tt_len = self.tt.len(),
            "decision"
        );

        SearchResult {
            best_move: outcome.best_move,
            score: outcome.score,
            depth: outcome.depth,
            nodes: outcome.nodes,
            stopped: outcome.stopped,
        }
    }
}

impl Engine for ClassicalEngine {
    fn search(&mut self, state: &GameState, limits: SearchLimits) -> SearchResult {
        self.choose_move(state, state.side_to_move, limits)
    }

    fn name(&self) -> &str {
        "Classical v1.0"
    }

    fn default_limits(&self) -> SearchLimits {
        self.profile.limits()
    }

    fn new_game(&mut self) {
        self.nodes = 0;
        self.tt.clear();
    }

    fn set_option(&mut self, name: &str, value: &str) -> bool {
        let mut profile = self.profile;
        let value = value.trim();
        match name {
            "level" => match value.parse() {
                Ok(level) => profile = EngineProfile::level(level),
                Err(_) => return false,
            },
            "max_depth" => match value.parse() {
                Ok(depth) => profile.max_depth = depth,
                Err(_) => return false,
            },
            "move_time_ms" => match value.parse() {
                Ok(ms) => profile.move_time_ms = ms,
                Err(_) => return false,
            },
            "quiescence_depth" => match value.parse() {
                Ok(q) => profile.search.quiescence_depth = q,
                Err(_) => return false,
            },
            "aspiration_window" => match value {
                "off" | "none" | "0" => profile.search.aspiration_window = None,
                _ => match value.parse::<i32>() {
                    Ok(w) if w > 0 => profile.search.aspiration_window = Some(w),
                    _ => return false,
                },
            },
            _ => return false,
        }
        self.set_profile(profile);
        true
    }
}
