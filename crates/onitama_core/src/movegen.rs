use crate::{board::GameState, cards::Card, types::*};

/// Placement moves `owner` can make with `card`, returning a fresh vector.
pub fn legal_moves(state: &GameState, owner: Player, card: Card) -> Vec<Move> {
    let mut out = Vec::with_capacity(20);
    legal_moves_into(state, owner, card, &mut out);
    out
}

/// Appends the placement moves for `card` to `out`.
///
/// Order is fixed: board squares row-major, then the card's offsets in
/// declaration order. Passes are never produced here.
pub fn legal_moves_into(state: &GameState, owner: Player, card: Card, out: &mut Vec<Move>) {
    let forward = owner.forward();
    for (from, pc) in state.board.pieces() {
        if pc.owner != owner {
            continue;
        }
        for &(dx, dy) in card.offsets() {
            // dy > 0 means towards the opponent; for Blue that is decreasing y
            let Some(to) = from.offset(dx, -dy * forward) else {
                continue;
            };
            if let Some(target) = state.board.get(to)
                && target.owner == owner
            {
                continue;
            }
            out.push(Move::Place { from, to, card });
        }
    }
}

/// Every action available to `owner`: placements with both hand cards, or
/// exactly one pass per hand card when no placement exists.
pub fn all_legal_moves(state: &GameState, owner: Player) -> Vec<Move> {
    let mut out = Vec::with_capacity(40);
    all_legal_moves_into(state, owner, &mut out);
    out
}

pub fn all_legal_moves_into(state: &GameState, owner: Player, out: &mut Vec<Move>) {
    out.clear();
    let hand = state.hand(owner);
    for card in hand {
        legal_moves_into(state, owner, card, out);
    }
    if out.is_empty() {
        out.extend(hand.into_iter().map(|card| Move::Pass { card }));
    }
}

/// Actions for the side to move.
pub fn moves_for_side_to_move(state: &GameState) -> Vec<Move> {
    all_legal_moves(state, state.side_to_move)
}

/// Placement moves of the side to move that land on an enemy piece.
pub fn capture_moves(state: &GameState) -> Vec<Move> {
    let owner = state.side_to_move;
    let mut out = Vec::with_capacity(8);
    for card in state.hand(owner) {
        legal_moves_into(state, owner, card, &mut out);
    }
    out.retain(|mv| is_capture(state, *mv));
    out
}

pub fn is_capture(state: &GameState, mv: Move) -> bool {
    mv.to().and_then(|to| state.piece_at(to)).is_some()
}

/// Number of placement moves `owner` has with its hand (passes excluded).
pub fn count_placements(state: &GameState, owner: Player) -> usize {
    let mut buf = Vec::with_capacity(40);
    for card in state.hand(owner) {
        legal_moves_into(state, owner, card, &mut buf);
    }
    buf.len()
}

/// Whether `attacker` could take the enemy master if it were on move.
/// A board already missing that master counts as captured.
pub fn can_capture_master(state: &GameState, attacker: Player) -> bool {
    let Some(target) = state.board.master_sq(attacker.other()) else {
        return true;
    };
    let mut buf = Vec::with_capacity(40);
    for card in state.hand(attacker) {
        legal_moves_into(state, attacker, card, &mut buf);
    }
    buf.iter().any(|mv| mv.to() == Some(target))
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
