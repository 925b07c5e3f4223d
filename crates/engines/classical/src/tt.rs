//! Transposition table keyed by the exact state encoding.
//!
//! Because [`StateKey`] is a collision-free packing of the position rather
//! than a hash, a hit is always the same position and its bounds are always
//! safe to reuse. Entries are never evicted; callers clear the table between
//! games.

use std::collections::HashMap;

use onitama_core::{Move, StateKey};

/// How a stored score relates to the true value of the position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// The search completed inside the window.
    Exact,
    /// Failed high: true score >= stored score.
    Lower,
    /// Failed low: true score <= stored score.
    Upper,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TtEntry {
    pub depth: u8,
    pub score: i32,
    pub bound: Bound,
    pub best: Option<Move>,
}

/// Result of a probe that could not end the node outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Probe {
    /// Stored bounds settle the node at this score.
    Cutoff { score: i32, best: Option<Move> },
    /// Keep searching with the (possibly narrowed) window and this hint.
    Continue {
        alpha: i32,
        beta: i32,
        hint: Option<Move>,
    },
}

#[derive(Debug, Default)]
pub struct TranspositionTable {
    entries: HashMap<StateKey, TtEntry>,
    hits: u64,
}

impl TranspositionTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: StateKey) -> Option<&TtEntry> {
        self.entries.get(&key)
    }

    /// Applies a stored entry to the window `[alpha, beta]` of a search at
    /// `depth`.
    ///
    /// Entries from shallower searches only contribute their best move.
    pub fn probe(&mut self, key: StateKey, depth: u8, mut alpha: i32, mut beta: i32) -> Probe {
        let Some(entry) = self.entries.get(&key) else {
            return Probe::Continue {
                alpha,
                beta,
                hint: None,
            };
        };

        if entry.depth >= depth {
            match entry.bound {
                Bound::Exact => {
                    self.hits += 1;
                    return Probe::Cutoff {
                        score: entry.score,
                        best: entry.best,
                    };
                }
                Bound::Lower => alpha = alpha.max(entry.score),
                Bound::Upper => beta = beta.min(entry.score),
            }
            if alpha >= beta {
                self.hits += 1;
                return Probe::Cutoff {
                    score: entry.score,
                    best: entry.best,
                };
            }
        }

        Probe::Continue {
            alpha,
            beta,
            hint: entry.best,
        }
    }

    /// Records a search result, replacing whatever was stored for `key`.
    pub fn store(&mut self, key: StateKey, entry: TtEntry) {
        self.entries.insert(key, entry);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.hits = 0;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Probes that ended a node without searching it.
    pub fn hits(&self) -> u64 {
        self.hits
    }
}

/// Bound flag for a node that searched with original lower bound
/// `alpha_orig` and upper bound `beta` and found `best_score`.
pub fn bound_for(best_score: i32, alpha_orig: i32, beta: i32) -> Bound {
    if best_score <= alpha_orig {
        Bound::Upper
    } else if best_score >= beta {
        Bound::Lower
    } else {
        Bound::Exact
    }
}

#[cfg(test)]
#[path = "tt_tests.rs"]
mod tt_tests;
