use crate::board::Board;
use crate::coord::Coordinate;
use crate::error::GessError;
use crate::types::{Player, Square};

/// Column/row offsets of a 3x3 window, south-west corner first.
pub const OFFSETS: [(i32, i32); 9] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (0, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Movement capability granted by one stone of a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
    /// Centre stone: unlimited distance along the other available directions.
    Center,
}

impl Direction {
    pub const COMPASS: [Direction; 8] = [
        Direction::N,
        Direction::NE,
        Direction::E,
        Direction::SE,
        Direction::S,
        Direction::SW,
        Direction::W,
        Direction::NW,
    ];

    /// Maps a window offset to the direction a stone there grants.
    pub fn from_offset(d_col: i32, d_row: i32) -> Option<Self> {
        Some(match (d_col, d_row) {
            (0, 1) => Self::N,
            (1, 1) => Self::NE,
            (1, 0) => Self::E,
            (1, -1) => Self::SE,
            (0, -1) => Self::S,
            (-1, -1) => Self::SW,
            (-1, 0) => Self::W,
            (-1, 1) => Self::NW,
            (0, 0) => Self::Center,
            _ => return None,
        })
    }

    /// Unit step `(d_col, d_row)`; `(0, 0)` for `Center`.
    pub fn step(self) -> (i32, i32) {
        match self {
            Self::N => (0, 1),
            Self::NE => (1, 1),
            Self::E => (1, 0),
            Self::SE => (1, -1),
            Self::S => (0, -1),
            Self::SW => (-1, -1),
            Self::W => (-1, 0),
            Self::NW => (-1, 1),
            Self::Center => (0, 0),
        }
    }

    fn bit(self) -> u16 {
        1 << self as u16
    }
}

/// A set of [`Direction`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DirectionSet(u16);

impl DirectionSet {
    pub fn insert(&mut self, direction: Direction) {
        self.0 |= direction.bit();
    }

    pub fn contains(self, direction: Direction) -> bool {
        self.0 & direction.bit() != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Compass directions in the set, `Center` excluded.
    pub fn compass(self) -> impl Iterator<Item = Direction> {
        Direction::COMPASS.into_iter().filter(move |&d| self.contains(d))
    }
}

impl FromIterator<Direction> for DirectionSet {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        let mut set = Self::default();
        for direction in iter {
            set.insert(direction);
        }
        set
    }
}

/// The 3x3 window of squares around a centre. Derived from a board on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Footprint {
    center: Coordinate,
    squares: [Square; 9],
}

impl Footprint {
    /// Fails with `OutOfBounds` when `center` lies on the border.
    pub fn around(board: &Board, center: Coordinate) -> Result<Self, GessError> {
        if center.is_border() {
            return Err(GessError::OutOfBounds(center.to_string()));
        }

        let mut squares = [Square::OutOfBounds; 9];
        for (square, (d_col, d_row)) in squares.iter_mut().zip(OFFSETS) {
            // A non-border centre keeps every neighbour on the grid.
            if let Some(coord) = center.offset(d_col, d_row) {
                *square = board.get(coord);
            }
        }
        Ok(Self { center, squares })
    }

    pub fn center(&self) -> Coordinate {
        self.center
    }

    /// Square at offset `(d_col, d_row)`; `None` unless both lie in `-1..=1`.
    pub fn at(&self, d_col: i32, d_row: i32) -> Option<Square> {
        if !(-1..=1).contains(&d_col) || !(-1..=1).contains(&d_row) {
            return None;
        }
        Some(self.squares[((d_row + 1) * 3 + d_col + 1) as usize])
    }

    /// Offsets paired with their squares, in [`OFFSETS`] order.
    pub fn squares(&self) -> impl Iterator<Item = ((i32, i32), Square)> + '_ {
        OFFSETS.into_iter().zip(self.squares.iter().copied())
    }

    pub fn contains_stone_of(&self, player: Player) -> bool {
        self.squares.iter().any(|square| square.is_owned_by(player))
    }
}

/// Directions granted to `owner` by the stones it holds in `footprint`.
pub fn classify_directions(footprint: &Footprint, owner: Player) -> DirectionSet {
    footprint
        .squares()
        .filter(|(_, square)| square.is_owned_by(owner))
        .filter_map(|((d_col, d_row), _)| Direction::from_offset(d_col, d_row))
        .collect()
}
