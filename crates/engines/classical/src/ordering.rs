//! Move ordering for alpha-beta pruning
//!
//! Tries the moves most likely to cause a cutoff first: the hint from the
//! transposition table, master captures, student captures, master moves
//! towards the arch. Passes go last.

use std::cmp::Reverse;

use onitama_core::{GameState, Move};

const HINT_BONUS: i32 = 5_000_000;
const HITS_ENEMY_MASTER: i32 = 999_999;
const CAPTURE_MASTER: i32 = 500_000;
const CAPTURE_STUDENT: i32 = 20_000;
const MASTER_MOVE: i32 = 2_000;
const ARCH_STEP: i32 = 500;
const PASS: i32 = -1_000_000;

/// Priority of `mv` in `state`. Pure: depends only on its arguments.
pub fn move_score(state: &GameState, mv: Move, hint: Option<Move>) -> i32 {
    let (from, to) = match mv {
        Move::Pass { .. } => return PASS,
        Move::Place { from, to, .. } => (from, to),
    };

    let mut score = 0;
    if hint == Some(mv) {
        score += HINT_BONUS;
    }
    if let Some(target) = state.piece_at(to) {
        score += if target.is_master() {
            CAPTURE_MASTER
        } else {
            CAPTURE_STUDENT
        };
    }
    if let Some(piece) = state.piece_at(from) {
        if piece.is_master() {
            let arch = piece.owner.target_arch();
            score += MASTER_MOVE;
            score += (from.manhattan(arch) - to.manhattan(arch)) * ARCH_STEP;
        }
    }
    let enemy_master = state.board.master_sq(state.side_to_move.other());
    if enemy_master == Some(to) {
        score += HITS_ENEMY_MASTER;
    }
    score
}

/// Sorts `moves` best first. Equal scores keep generation order.
pub fn order_moves(state: &GameState, moves: &mut [Move], hint: Option<Move>) {
    if state.is_terminal() {
        return;
    }
    moves.sort_by_cached_key(|&mv| Reverse(move_score(state, mv, hint)));
}

#[cfg(test)]
#[path = "ordering_tests.rs"]
mod ordering_tests;
