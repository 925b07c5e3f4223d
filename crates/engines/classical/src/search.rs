//! Negamax search with alpha-beta pruning, a transposition table and
//! capture-only quiescence, driven by iterative deepening.

use onitama_core::{
    all_legal_moves, capture_moves, GameState, Move, Player, StateKey, TimeControl,
};
use tracing::{debug, trace};

use crate::config::SearchConfig;
use crate::eval::{evaluate, WIN, WIN_THRESHOLD};
use crate::ordering::order_moves;
use crate::tt::{bound_for, Probe, TranspositionTable, TtEntry};

/// Wider than any score, so a full window never cuts a real result.
pub const INF: i32 = WIN + 1;

/// The deadline passed or a stop was requested. Whatever the aborted
/// subtree computed is discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Aborted;

/// Result of one decision.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Best move of the deepest completed iteration, or the first legal
    /// move when no iteration completed.
    pub best_move: Move,
    /// Score of `best_move` for the side to move.
    pub score: i32,
    /// Deepest completed iteration.
    pub depth: u8,
    pub nodes: u64,
    /// True if the deadline cut the search short.
    pub stopped: bool,
}

/// State of one search call: the evaluation point of view, the knobs and the
/// shared table.
pub struct Searcher<'a> {
    pov: Player,
    cfg: &'a SearchConfig,
    tt: &'a mut TranspositionTable,
    tc: &'a TimeControl,
    nodes: u64,
}

impl<'a> Searcher<'a> {
    pub fn new(
        pov: Player,
        cfg: &'a SearchConfig,
        tt: &'a mut TranspositionTable,
        tc: &'a TimeControl,
    ) -> Self {
        Self {
            pov,
            cfg,
            tt,
            tc,
            nodes: 0,
        }
    }

    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    fn static_eval(&self, state: &GameState, color: i32) -> i32 {
        color * evaluate(state, self.pov, &self.cfg.eval)
    }

    /// Negamax over `state` to `depth` plies inside `[alpha, beta]`.
    ///
    /// `color` is +1 when the side to move is the point of view, -1 otherwise,
    /// so the returned score is always from the mover's side. Also returns the
    /// best move found at this node.
    pub fn negamax(
        &mut self,
        state: &GameState,
        depth: u8,
        alpha: i32,
        beta: i32,
        color: i32,
    ) -> Result<(i32, Option<Move>), Aborted> {
        self.nodes += 1;
        if self.tc.check_time() {
            return Err(Aborted);
        }

        if state.is_terminal() {
            return Ok((self.static_eval(state, color), None));
        }
        if depth == 0 {
            let score = match self.cfg.quiescence_depth {
                0 => self.static_eval(state, color),
                qdepth => self.quiesce(state, alpha, beta, color, qdepth)?,
            };
            return Ok((score, None));
        }

        let key = StateKey::of(state);
        let (mut alpha, beta, hint) = match self.tt.probe(key, depth, alpha, beta) {
            Probe::Cutoff { score, best } => return Ok((score, best)),
            Probe::Continue { alpha, beta, hint } => (alpha, beta, hint),
        };
        let alpha_orig = alpha;

        let mut moves = all_legal_moves(state, state.side_to_move);
        order_moves(state, &mut moves, hint);

        let mut best_score = -INF;
        let mut best_move = None;
        for mv in moves {
            let Ok(child) = state.apply(mv) else {
                continue;
            };
            let (child_score, _) = self.negamax(&child, depth - 1, -beta, -alpha, -color)?;
            let score = -child_score;

            if score > best_score {
                best_score = score;
                best_move = Some(mv);
            }
            alpha = alpha.max(score);
            if alpha >= beta {
                break;
            }
        }

        self.tt.store(
            key,
            TtEntry {
                depth,
                score: best_score,
                bound: bound_for(best_score, alpha_orig, beta),
                best: best_move,
            },
        );
        Ok((best_score, best_move))
    }

    /// Resolves pending captures past the horizon. Standing pat is always
    /// allowed, so the result never drops below the static score.
    fn quiesce(
        &mut self,
        state: &GameState,
        mut alpha: i32,
        beta: i32,
        color: i32,
        qdepth: u8,
    ) -> Result<i32, Aborted> {
        self.nodes += 1;
        if self.tc.check_time() {
            return Err(Aborted);
        }

        let stand_pat = self.static_eval(state, color);
        if stand_pat >= beta || qdepth == 0 || state.is_terminal() {
            return Ok(stand_pat);
        }
        alpha = alpha.max(stand_pat);

        let mut captures = capture_moves(state);
        if captures.is_empty() {
            return Ok(stand_pat);
        }
        order_moves(state, &mut captures, None);

        let mut best = stand_pat;
        for mv in captures {
            let Ok(child) = state.apply(mv) else {
                continue;
            };
            let score = -self.quiesce(&child, -beta, -alpha, -color, qdepth - 1)?;
            best = best.max(score);
            alpha = alpha.max(score);
            if alpha >= beta {
                break;
            }
        }
        Ok(best)
    }

    /// One iteration at `depth`. With an aspiration window and a previous
    /// score the window is narrowed first and re-opened on failure.
    fn search_root(
        &mut self,
        state: &GameState,
        depth: u8,
        color: i32,
        prev_score: Option<i32>,
    ) -> Result<(i32, Option<Move>), Aborted> {
        let window = match (self.cfg.aspiration_window, prev_score) {
            (Some(w), Some(prev)) if depth > 1 => Some((
                prev.saturating_sub(w).max(-INF),
                prev.saturating_add(w).min(INF),
            )),
            _ => None,
        };

        let Some((alpha, beta)) = window else {
            return self.negamax(state, depth, -INF, INF, color);
        };

        let (score, best) = self.negamax(state, depth, alpha, beta, color)?;
        if score > alpha && score < beta {
            return Ok((score, best));
        }
        trace!(depth, score, alpha, beta, "aspiration window failed, re-searching");
        self.negamax(state, depth, -INF, INF, color)
    }
}

/// Picks a move for the side to move in `state` by iterative deepening from
/// depth 1 to `max_depth`.
///
/// A depth cut off by the deadline is discarded and the previous depth's move
/// kept. Deepening stops early once a forced win or loss shows up. If no depth
/// completes, the first legal move is returned.
pub fn pick_best_move(
    state: &GameState,
    pov: Player,
    max_depth: u8,
    cfg: &SearchConfig,
    tt: &mut TranspositionTable,
    tc: &TimeControl,
) -> SearchOutcome {
    let root_color = if state.side_to_move == pov { 1 } else { -1 };
    let mut searcher = Searcher::new(pov, cfg, tt, tc);

    let mut best: Option<Move> = None;
    let mut best_score: Option<i32> = None;
    let mut completed = 0u8;
    let mut stopped = false;

    for depth in 1..=max_depth {
        match searcher.search_root(state, depth, root_color, best_score) {
            Ok((score, mv)) => {
                if mv.is_some() {
                    best = mv;
                }
                best_score = Some(score);
                completed = depth;
                debug!(
                    depth,
                    score,
                    nodes = searcher.nodes(),
                    elapsed_ms = tc.elapsed().as_millis() as u64,
                    best = ?best.map(|m| m.to_string()),
                    "depth completed"
                );
                if score.abs() > WIN_THRESHOLD {
                    break;
                }
            }
            Err(Aborted) => {
                debug!(depth, nodes = searcher.nodes(), "deadline reached, keeping previous depth");
                stopped = true;
                break;
            }
        }
    }

    // A side without placements still has its two passes.
    let best_move = best.unwrap_or_else(|| all_legal_moves(state, state.side_to_move)[0]);

    SearchOutcome {
        best_move,
        score: best_score.unwrap_or(0),
        depth: completed,
        nodes: searcher.nodes(),
        stopped,
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
