//! Exact position keys for transposition tables.
//!
//! Unlike a Zobrist hash the key is a lossless packing of the position, so two
//! states share a key only if they are the same position:
//! - 25 cells x 3 bits (empty, or one of four owner/kind pairs) = 75 bits
//! - each hand as two 4-bit card indices, smaller first = 16 bits
//! - mid card = 4 bits
//! - side to move = 1 bit
//!
//! 96 bits in total, stored in a `u128`. The ply counter is not part of the key.

use crate::board::GameState;
use crate::types::{Piece, PieceKind, Player, Square};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateKey(u128);

impl StateKey {
    pub fn of(state: &GameState) -> Self {
        let mut k: u128 = 0;
        for sq in Square::all() {
            k = (k << 3) | cell_code(state.board.get(sq));
        }
        for owner in Player::BOTH {
            let [a, b] = state.hand(owner);
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            k = (k << 4) | lo.idx() as u128;
            k = (k << 4) | hi.idx() as u128;
        }
        k = (k << 4) | state.mid.idx() as u128;
        k = (k << 1) | state.side_to_move.idx() as u128;
        StateKey(k)
    }

    pub fn raw(self) -> u128 {
        self.0
    }
}

fn cell_code(cell: Option<Piece>) -> u128 {
    match cell {
        None => 0,
        Some(pc) => match (pc.owner, pc.kind) {
            (Player::Blue, PieceKind::Student) => 1,
            (Player::Blue, PieceKind::Master) => 2,
            (Player::Red, PieceKind::Student) => 3,
            (Player::Red, PieceKind::Master) => 4,
        },
    }
}

#[cfg(test)]
#[path = "key_tests.rs"]
mod key_tests;
