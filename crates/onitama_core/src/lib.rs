pub mod board;
pub mod cards;
pub mod error;
pub mod key;
pub mod movegen;
pub mod notation;
pub mod perft;
pub mod time_control;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use cards::*;
pub use error::*;
pub use key::StateKey;
pub use movegen::*;
pub use notation::*;
pub use perft::perft;
pub use time_control::*;
pub use types::*;

// =============================================================================
// Engine trait — implemented by all Onitama engines (classical, random, etc.)
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The move to play. Every position offers at least a pass, so there is
    /// always one.
    pub best_move: Move,
    /// Evaluation score from the searching side's point of view
    pub score: i32,
    /// Deepest fully completed iteration (0 if none completed)
    pub depth: u8,
    /// Number of nodes searched (optional, for stats)
    pub nodes: u64,
    /// Whether search was stopped early due to time limit
    pub stopped: bool,
}

/// Trait that all Onitama engines must implement.
///
/// Lets the match runner pit alpha-beta engines, random baselines and any
/// future engine against each other through one interface.
pub trait Engine: Send {
    /// Search the position with the given search limits and pick a move for
    /// the side to move.
    ///
    /// # Arguments
    /// * `state` - The current position to analyze
    /// * `limits` - Search limits (depth, time, etc.)
    fn search(&mut self, state: &GameState, limits: SearchLimits) -> SearchResult;

    /// Returns the engine's display name
    fn name(&self) -> &str;

    /// Returns the engine's author
    fn author(&self) -> &str {
        "onitama-arena"
    }

    /// Limits to use when the caller has no preference.
    fn default_limits(&self) -> SearchLimits {
        SearchLimits::default()
    }

    /// Reset internal state for a new game (clear hash tables, etc.)
    fn new_game(&mut self) {}

    /// Optional: set a named option. Returns true if the option was recognized.
    fn set_option(&mut self, _name: &str, _value: &str) -> bool {
        false
    }
}
