use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Width and height of the board.
pub const BOARD_SIZE: i8 = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Player {
    /// Player 0, home row on the south edge (y = 4).
    Blue,
    /// Player 1, home row on the north edge (y = 0).
    Red,
}

impl Player {
    pub const BOTH: [Player; 2] = [Player::Blue, Player::Red];

    pub fn other(self) -> Player {
        match self {
            Player::Blue => Player::Red,
            Player::Red => Player::Blue,
        }
    }

    pub fn idx(self) -> usize {
        match self {
            Player::Blue => 0,
            Player::Red => 1,
        }
    }

    /// Multiplier applied to a card's dy so offsets written from Blue's side
    /// point the right way for either player.
    pub fn forward(self) -> i8 {
        match self {
            Player::Blue => 1,
            Player::Red => -1,
        }
    }

    /// The arch this player's master must reach to win by Way of the Stream.
    pub fn target_arch(self) -> Square {
        match self {
            Player::Blue => Square::ARCH_NORTH,
            Player::Red => Square::ARCH_SOUTH,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Blue => f.write_str("blue"),
            Player::Red => f.write_str("red"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Master,
    Student,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub owner: Player,
    pub kind: PieceKind,
}

impl Piece {
    pub fn master(owner: Player) -> Self {
        Self {
            owner,
            kind: PieceKind::Master,
        }
    }

    pub fn student(owner: Player) -> Self {
        Self {
            owner,
            kind: PieceKind::Student,
        }
    }

    pub fn is_master(self) -> bool {
        self.kind == PieceKind::Master
    }

    /// Diagram character: uppercase for Blue, lowercase for Red.
    pub fn symbol(self) -> char {
        let c = match self.kind {
            PieceKind::Master => 'm',
            PieceKind::Student => 's',
        };
        match self.owner {
            Player::Blue => c.to_ascii_uppercase(),
            Player::Red => c,
        }
    }

    pub fn from_symbol(c: char) -> Option<Self> {
        let owner = if c.is_ascii_uppercase() {
            Player::Blue
        } else {
            Player::Red
        };
        let kind = match c.to_ascii_lowercase() {
            'm' => PieceKind::Master,
            's' => PieceKind::Student,
            _ => return None,
        };
        Some(Self { owner, kind })
    }
}

/// A board cell. `y = 0` is the north edge (Red's home row), `y = 4` the south edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    x: u8,
    y: u8,
}

impl Square {
    pub const ARCH_NORTH: Square = Square { x: 2, y: 0 };
    pub const ARCH_SOUTH: Square = Square { x: 2, y: 4 };
    pub const CENTER: Square = Square { x: 2, y: 2 };

    pub fn new(x: i8, y: i8) -> Option<Self> {
        if (0..BOARD_SIZE).contains(&x) && (0..BOARD_SIZE).contains(&y) {
            Some(Self {
                x: x as u8,
                y: y as u8,
            })
        } else {
            None
        }
    }

    /// Row-major index into a 25-cell array.
    pub fn from_index(idx: usize) -> Option<Self> {
        if idx < 25 {
            Some(Self {
                x: (idx % 5) as u8,
                y: (idx / 5) as u8,
            })
        } else {
            None
        }
    }

    pub fn x(self) -> i8 {
        self.x as i8
    }

    pub fn y(self) -> i8 {
        self.y as i8
    }

    pub fn index(self) -> usize {
        self.y as usize * 5 + self.x as usize
    }

    pub fn offset(self, dx: i8, dy: i8) -> Option<Self> {
        Square::new(self.x() + dx, self.y() + dy)
    }

    pub fn manhattan(self, other: Square) -> i32 {
        ((self.x() - other.x()).abs() + (self.y() - other.y()).abs()) as i32
    }

    /// Every square in row-major order (north row first).
    pub fn all() -> impl Iterator<Item = Square> {
        (0..25).filter_map(Square::from_index)
    }

    /// Parses `a1`..`e5`: file `a` is x = 0, rank 1 is the south row.
    pub fn parse(txt: &str) -> Option<Self> {
        let b = txt.as_bytes();
        if b.len() != 2 {
            return None;
        }
        let (f, r) = (b[0].to_ascii_lowercase(), b[1]);
        if !(b'a'..=b'e').contains(&f) || !(b'1'..=b'5').contains(&r) {
            return None;
        }
        Square::new((f - b'a') as i8, (b'5' - r) as i8)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.x) as char;
        let rank = (b'5' - self.y) as char;
        write!(f, "{file}{rank}")
    }
}

/// An action: move one piece with a card, or burn a card when nothing can move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    Place { from: Square, to: Square, card: Card },
    Pass { card: Card },
}

impl Move {
    pub fn card(self) -> Card {
        match self {
            Move::Place { card, .. } | Move::Pass { card } => card,
        }
    }

    pub fn is_pass(self) -> bool {
        matches!(self, Move::Pass { .. })
    }

    pub fn from(self) -> Option<Square> {
        match self {
            Move::Place { from, .. } => Some(from),
            Move::Pass { .. } => None,
        }
    }

    pub fn to(self) -> Option<Square> {
        match self {
            Move::Place { to, .. } => Some(to),
            Move::Pass { .. } => None,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Place { from, to, card } => write!(f, "{}:{from}{to}", card.key()),
            Move::Pass { card } => write!(f, "{}:pass", card.key()),
        }
    }
}
