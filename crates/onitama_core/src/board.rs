use std::fmt;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, Stamp};
use crate::error::{InvalidMove, NotationError};
use crate::types::*;

/// 5x5 grid stored row-major, north row first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Option<Piece>; 25],
}

impl Board {
    pub fn empty() -> Self {
        Self { cells: [None; 25] }
    }

    /// Both armies on their home rows, masters in the middle column.
    pub fn start() -> Self {
        let mut b = Board::empty();
        for (owner, y) in [(Player::Red, 0), (Player::Blue, 4)] {
            for x in 0..BOARD_SIZE {
                let piece = if x == 2 {
                    Piece::master(owner)
                } else {
                    Piece::student(owner)
                };
                if let Some(sq) = Square::new(x, y) {
                    b.set(sq, Some(piece));
                }
            }
        }
        b
    }

    pub fn get(&self, sq: Square) -> Option<Piece> {
        self.cells[sq.index()]
    }

    pub fn set(&mut self, sq: Square, pc: Option<Piece>) {
        self.cells[sq.index()] = pc;
    }

    /// Occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.get(sq).map(|pc| (sq, pc)))
    }

    pub fn master_sq(&self, owner: Player) -> Option<Square> {
        self.pieces()
            .find(|(_, pc)| pc.owner == owner && pc.is_master())
            .map(|(sq, _)| sq)
    }

    pub fn count(&self, owner: Player, kind: PieceKind) -> usize {
        self.pieces()
            .filter(|(_, pc)| pc.owner == owner && pc.kind == kind)
            .count()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WinReason {
    /// The opposing master was captured.
    Stone,
    /// A master reached its target arch.
    Stream,
}

impl fmt::Display for WinReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WinReason::Stone => f.write_str("Way of the Stone"),
            WinReason::Stream => f.write_str("Way of the Stream"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub winner: Player,
    pub reason: WinReason,
}

/// Everything needed to continue a game. `Copy`, so every derived state is an
/// independent value and search branches can never observe each other.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GameState {
    pub board: Board,
    pub hands: [[Card; 2]; 2],
    pub mid: Card,
    pub side_to_move: Player,
    pub ply: u32,
}

impl GameState {
    /// Standard opening layout with a fixed deal. The first player is the one
    /// whose colour matches the stamp on the mid card.
    pub fn with_cards(hands: [[Card; 2]; 2], mid: Card) -> Result<Self, NotationError> {
        let state = GameState {
            board: Board::start(),
            hands,
            mid,
            side_to_move: first_player(mid),
            ply: 0,
        };
        state.check_cards()?;
        Ok(state)
    }

    /// Shuffles the catalog and deals two cards to each player plus the mid card.
    pub fn deal<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Card::ALL;
        deck.shuffle(rng);
        let mid = deck[4];
        GameState {
            board: Board::start(),
            hands: [[deck[0], deck[1]], [deck[2], deck[3]]],
            mid,
            side_to_move: first_player(mid),
            ply: 0,
        }
    }

    /// Builds an arbitrary position from five rows, north row first.
    /// `S`/`M` are Blue pieces, `s`/`m` Red ones, `.` an empty cell.
    pub fn from_diagram(
        rows: &str,
        hands: [[Card; 2]; 2],
        mid: Card,
        side_to_move: Player,
    ) -> Result<Self, NotationError> {
        let lines: Vec<&str> = rows
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        if lines.len() != 5 {
            return Err(NotationError::BadDiagram(format!(
                "expected 5 rows, got {}",
                lines.len()
            )));
        }

        let mut board = Board::empty();
        for (y, line) in lines.iter().enumerate() {
            let cells: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if cells.len() != 5 {
                return Err(NotationError::BadDiagram(format!(
                    "row {} has {} cells",
                    y + 1,
                    cells.len()
                )));
            }
            for (x, ch) in cells.into_iter().enumerate() {
                if ch == '.' {
                    continue;
                }
                let pc = Piece::from_symbol(ch).ok_or_else(|| {
                    NotationError::BadDiagram(format!("unexpected character '{ch}'"))
                })?;
                if let Some(sq) = Square::new(x as i8, y as i8) {
                    board.set(sq, Some(pc));
                }
            }
        }

        for owner in Player::BOTH {
            if board.count(owner, PieceKind::Master) > 1 {
                return Err(NotationError::BadDiagram(format!("{owner} has two masters")));
            }
        }

        let state = GameState {
            board,
            hands,
            mid,
            side_to_move,
            ply: 0,
        };
        state.check_cards()?;
        Ok(state)
    }

    fn check_cards(&self) -> Result<(), NotationError> {
        let cards = self.cards();
        for (i, c) in cards.iter().enumerate() {
            if cards[i + 1..].contains(c) {
                return Err(NotationError::DuplicateCard(*c));
            }
        }
        Ok(())
    }

    /// The five cards in play: Blue's hand, the mid card, Red's hand.
    pub fn cards(&self) -> [Card; 5] {
        [
            self.hands[0][0],
            self.hands[0][1],
            self.mid,
            self.hands[1][0],
            self.hands[1][1],
        ]
    }

    pub fn hand(&self, owner: Player) -> [Card; 2] {
        self.hands[owner.idx()]
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.board.get(sq)
    }

    /// Win detection, checked fresh on every state. Stone is checked before
    /// Stream for both players.
    pub fn outcome(&self) -> Option<Outcome> {
        let blue = self.board.master_sq(Player::Blue);
        let red = self.board.master_sq(Player::Red);

        let Some(blue) = blue else {
            return Some(Outcome {
                winner: Player::Red,
                reason: WinReason::Stone,
            });
        };
        let Some(red) = red else {
            return Some(Outcome {
                winner: Player::Blue,
                reason: WinReason::Stone,
            });
        };

        for (owner, sq) in [(Player::Blue, blue), (Player::Red, red)] {
            if sq == owner.target_arch() {
                return Some(Outcome {
                    winner: owner,
                    reason: WinReason::Stream,
                });
            }
        }
        None
    }

    pub fn is_terminal(&self) -> bool {
        self.outcome().is_some()
    }

    /// Plays `mv` for the side to move and returns the resulting state.
    ///
    /// The used card goes to the mid slot and the old mid card takes its place
    /// in the mover's hand, for passes as well as real moves.
    pub fn apply(&self, mv: Move) -> Result<GameState, InvalidMove> {
        let mover = self.side_to_move;
        let mut next = *self;

        if let Move::Place { from, to, .. } = mv {
            let piece = self.board.get(from).ok_or(InvalidMove::EmptySource(from))?;
            if piece.owner != mover {
                return Err(InvalidMove::ForeignPiece {
                    square: from,
                    owner: piece.owner,
                });
            }
            if let Some(target) = self.board.get(to)
                && target.owner == mover
            {
                return Err(InvalidMove::FriendlyCapture(to));
            }
            next.board.set(from, None);
            next.board.set(to, Some(piece));
        }

        let card = mv.card();
        let slot = self.hands[mover.idx()]
            .iter()
            .position(|&c| c == card)
            .ok_or(InvalidMove::CardNotInHand {
                card,
                player: mover,
            })?;
        next.hands[mover.idx()][slot] = self.mid;
        next.mid = card;

        next.side_to_move = mover.other();
        next.ply += 1;
        Ok(next)
    }
}

fn first_player(mid: Card) -> Player {
    match mid.stamp() {
        Stamp::Blue => Player::Blue,
        Stamp::Red => Player::Red,
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..BOARD_SIZE {
            for x in 0..BOARD_SIZE {
                let c = Square::new(x, y)
                    .and_then(|sq| self.board.get(sq))
                    .map_or('.', Piece::symbol);
                write!(f, "{c}")?;
            }
            writeln!(f, "  {}", 5 - y)?;
        }
        writeln!(f, "abcde")?;
        writeln!(f, "red:  {} {}", self.hands[1][0], self.hands[1][1])?;
        writeln!(f, "mid:  {}", self.mid)?;
        writeln!(f, "blue: {} {}", self.hands[0][0], self.hands[0][1])?;
        write!(f, "{} to move, ply {}", self.side_to_move, self.ply)
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
