use serde::{Deserialize, Serialize};

/// One of the two sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    Black,
    White,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Self::Black => Self::White,
            Self::White => Self::Black,
        }
    }

    /// Wire code shared by the matrix export and the binary save format.
    pub fn code(self) -> u8 {
        match self {
            Self::Black => 1,
            Self::White => 2,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::Black),
            2 => Some(Self::White),
            _ => None,
        }
    }
}

/// Content of one playable board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Owned(Player),
}

impl Cell {
    /// 0=empty, 1=black, 2=white.
    pub fn code(self) -> u8 {
        match self {
            Self::Empty => 0,
            Self::Owned(player) => player.code(),
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Empty),
            other => Player::from_code(other).map(Self::Owned),
        }
    }

    pub fn is_owned_by(self, player: Player) -> bool {
        self == Self::Owned(player)
    }
}

/// A cell as seen through a footprint window, which may hang over the border.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Square {
    Inside(Cell),
    OutOfBounds,
}

impl Square {
    pub fn is_owned_by(self, player: Player) -> bool {
        matches!(self, Self::Inside(cell) if cell.is_owned_by(player))
    }

    pub fn is_stone(self) -> bool {
        matches!(self, Self::Inside(Cell::Owned(_)))
    }
}

/// Lifecycle of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameState {
    #[serde(rename = "UNFINISHED")]
    InProgress,
    BlackWon,
    WhiteWon,
}

impl GameState {
    pub fn won_by(player: Player) -> Self {
        match player {
            Player::Black => Self::BlackWon,
            Player::White => Self::WhiteWon,
        }
    }

    pub fn is_over(self) -> bool {
        self != Self::InProgress
    }

    pub fn code(self) -> u8 {
        match self {
            Self::InProgress => 0,
            Self::BlackWon => 1,
            Self::WhiteWon => 2,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::InProgress),
            1 => Some(Self::BlackWon),
            2 => Some(Self::WhiteWon),
            _ => None,
        }
    }
}

/// Public game state handed to front ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// 18 rows of 18 cells, row 2 first, column `b` first.
    /// 0=empty, 1=black, 2=white.
    pub board: Vec<Vec<u8>>,
    pub current_turn: Player,
    pub state: GameState,
    pub black_rings: Vec<String>,
    pub white_rings: Vec<String>,
}
