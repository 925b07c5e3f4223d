//! Static position evaluation

use onitama_core::{can_capture_master, count_placements, GameState, PieceKind, Player, Square};

use crate::config::EvalConfig;

/// Score of a decided game. Larger than any sum of heuristic terms.
pub const WIN: i32 = 1_000_000_000;

/// Scores beyond this magnitude mean a forced win or loss was found.
pub const WIN_THRESHOLD: i32 = 500_000_000;

/// Master distance used when the master is gone. Only reachable in
/// positions that are already decided.
const NO_MASTER_DISTANCE: i32 = 99;

/// Heuristic scores stay below the forced-win band whatever the weights.
const HEURISTIC_LIMIT: i64 = WIN_THRESHOLD as i64 - 1;

/// Evaluates `state` from `pov`'s point of view.
///
/// Decided positions score `WIN` or `-WIN`. Otherwise the terms are summed
/// for Blue and the total negated for Red, so
/// `evaluate(s, Blue, c) == -evaluate(s, Red, c)` always holds for open games.
pub fn evaluate(state: &GameState, pov: Player, cfg: &EvalConfig) -> i32 {
    if let Some(outcome) = state.outcome() {
        return if outcome.winner == pov { WIN } else { -WIN };
    }

    let score = score_for_blue(state, cfg);
    match pov {
        Player::Blue => score,
        Player::Red => -score,
    }
}

fn score_for_blue(state: &GameState, cfg: &EvalConfig) -> i32 {
    let w = &cfg.weights;
    let board = &state.board;

    // Weights come from user profiles, so terms are summed wide and saturate.
    let term = |weight: i32, diff: i64| i64::from(weight).saturating_mul(diff);
    let count = |owner: Player, kind: PieceKind| board.count(owner, kind) as i64;
    let arch_distance = |owner: Player| {
        board
            .master_sq(owner)
            .map(|sq| sq.manhattan(owner.target_arch()))
            .unwrap_or(NO_MASTER_DISTANCE) as i64
    };

    let mut score = term(
        w.student,
        count(Player::Blue, PieceKind::Student) - count(Player::Red, PieceKind::Student),
    )
    .saturating_add(term(
        w.master,
        count(Player::Blue, PieceKind::Master) - count(Player::Red, PieceKind::Master),
    ))
    .saturating_add(term(w.arch, arch_distance(Player::Red) - arch_distance(Player::Blue)));

    if cfg.use_mobility {
        let blue = count_placements(state, Player::Blue) as i64;
        let red = count_placements(state, Player::Red) as i64;
        score = score.saturating_add(term(w.mobility, blue - red));
    }
    if cfg.use_center {
        let diff = center(state, Player::Blue, cfg) - center(state, Player::Red, cfg);
        score = score.saturating_add(term(w.center, diff));
    }
    if cfg.use_advancement {
        let diff = advancement(state, Player::Blue) - advancement(state, Player::Red);
        score = score.saturating_add(term(w.advance, diff));
    }
    if cfg.use_master_safety {
        let diff = safety(state, Player::Blue) - safety(state, Player::Red);
        score = score.saturating_add(term(w.safety, diff));
    }
    if cfg.use_tempo {
        let sign = match state.side_to_move {
            Player::Blue => 1,
            Player::Red => -1,
        };
        score = score.saturating_add(term(w.tempo, sign));
    }

    score.clamp(-HEURISTIC_LIMIT, HEURISTIC_LIMIT) as i32
}

/// Pieces near the middle of the board, masters counting more.
fn center(state: &GameState, owner: Player, cfg: &EvalConfig) -> i64 {
    state
        .board
        .pieces()
        .filter(|(_, pc)| pc.owner == owner)
        .map(|(sq, pc)| {
            let factor = if pc.is_master() {
                cfg.weights.center_master
            } else {
                cfg.weights.center_student
            };
            i64::from(factor) * i64::from(4 - sq.manhattan(Square::CENTER))
        })
        .sum()
}

/// Rows each student has travelled away from its own home row.
fn advancement(state: &GameState, owner: Player) -> i64 {
    state
        .board
        .pieces()
        .filter(|(_, pc)| pc.owner == owner && !pc.is_master())
        .map(|(sq, _)| match owner {
            Player::Blue => 4 - sq.y() as i64,
            Player::Red => sq.y() as i64,
        })
        .sum()
}

/// +1 if `owner` threatens the enemy master, -1 if its own master is threatened.
fn safety(state: &GameState, owner: Player) -> i64 {
    let mut sc = 0;
    if can_capture_master(state, owner) {
        sc += 1;
    }
    if can_capture_master(state, owner.other()) {
        sc -= 1;
    }
    sc
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
