//! Error types for rule violations and text parsing.

use thiserror::Error;

use crate::cards::Card;
use crate::types::{Player, Square};

/// A move that `GameState::apply` refuses to play.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidMove {
    #[error("no piece on source square {0}")]
    EmptySource(Square),

    #[error("piece on {square} belongs to {owner}, who is not on move")]
    ForeignPiece { square: Square, owner: Player },

    #[error("destination {0} holds a piece of the moving side")]
    FriendlyCapture(Square),

    #[error("{card} is not in {player}'s hand")]
    CardNotInHand { card: Card, player: Player },
}

/// Failures while reading cards, squares, moves or board diagrams from text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    #[error("unknown card: {0}")]
    UnknownCard(String),

    #[error("malformed move text: {0}")]
    MalformedMove(String),

    #[error("move {0} is not legal in this position")]
    IllegalMove(String),

    #[error("board diagram: {0}")]
    BadDiagram(String),

    #[error("card {0} is dealt more than once")]
    DuplicateCard(Card),
}
