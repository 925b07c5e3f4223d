//! Plain-text move notation: `tiger:a1a3` for a placement, `tiger:pass` for a pass.

use crate::{
    board::GameState, cards::Card, error::NotationError, movegen::moves_for_side_to_move,
    types::*,
};

pub fn move_to_text(mv: Move) -> String {
    mv.to_string()
}

/// Parses `txt` and matches it against the legal moves of the side to move,
/// so the returned move is always playable in `state`.
pub fn parse_move(state: &GameState, txt: &str) -> Result<Move, NotationError> {
    let malformed = || NotationError::MalformedMove(txt.to_string());

    let (card_txt, rest) = txt.trim().split_once(':').ok_or_else(malformed)?;
    let card: Card = card_txt.parse()?;
    let rest = rest.trim();

    let wanted = if rest.eq_ignore_ascii_case("pass") {
        Move::Pass { card }
    } else {
        if rest.len() != 4 || !rest.is_ascii() {
            return Err(malformed());
        }
        let from = Square::parse(&rest[0..2]).ok_or_else(malformed)?;
        let to = Square::parse(&rest[2..4]).ok_or_else(malformed)?;
        Move::Place { from, to, card }
    };

    moves_for_side_to_move(state)
        .into_iter()
        .find(|&m| m == wanted)
        .ok_or_else(|| NotationError::IllegalMove(txt.to_string()))
}

/// Replays a whitespace-separated move list from `state`.
pub fn play_line(state: &GameState, line: &str) -> Result<GameState, NotationError> {
    let mut cur = *state;
    for txt in line.split_whitespace() {
        let mv = parse_move(&cur, txt)?;
        cur = cur
            .apply(mv)
            .map_err(|_| NotationError::IllegalMove(txt.to_string()))?;
    }
    Ok(cur)
}

#[cfg(test)]
#[path = "notation_tests.rs"]
mod notation_tests;
