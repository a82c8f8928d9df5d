use std::fmt;
use std::str::FromStr;

use crate::error::GessError;

/// Width and height of the full grid, border included.
pub const GRID_SIZE: usize = 20;
/// Width and height of the area inside the border.
pub const PLAYABLE_SIZE: usize = GRID_SIZE - 2;

const COLUMN_LABELS: &[u8; GRID_SIZE] = b"abcdefghijklmnopqrst";

/// A cell on the 20x20 grid. `col` 0 is column `a`, `row` 0 is row `1`.
///
/// Rows grow northwards, so a larger row index is further north.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    row: u8,
    col: u8,
}

impl Coordinate {
    /// Returns `None` when `(col, row)` lies off the grid.
    pub fn new(col: usize, row: usize) -> Option<Self> {
        if col < GRID_SIZE && row < GRID_SIZE {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    pub fn col(self) -> usize {
        self.col as usize
    }

    pub fn row(self) -> usize {
        self.row as usize
    }

    /// Border cells are always empty and can never be the centre of a piece.
    pub fn is_border(self) -> bool {
        let last = (GRID_SIZE - 1) as u8;
        self.col == 0 || self.row == 0 || self.col == last || self.row == last
    }

    /// Index into a row-major `PLAYABLE_SIZE x PLAYABLE_SIZE` array.
    pub(crate) fn playable_index(self) -> Option<(usize, usize)> {
        if self.is_border() {
            None
        } else {
            Some((self.row() - 1, self.col() - 1))
        }
    }

    /// Coordinate shifted by `(d_col, d_row)`, or `None` if it leaves the grid.
    pub fn offset(self, d_col: i32, d_row: i32) -> Option<Self> {
        let col = self.col as i32 + d_col;
        let row = self.row as i32 + d_row;
        if col < 0 || row < 0 {
            return None;
        }
        Self::new(col as usize, row as usize)
    }

    /// Every non-border coordinate, south to north, west to east.
    pub fn playable() -> impl Iterator<Item = Self> {
        (1..GRID_SIZE - 1)
            .flat_map(|row| (1..GRID_SIZE - 1).map(move |col| Self { row: row as u8, col: col as u8 }))
    }
}

impl FromStr for Coordinate {
    type Err = GessError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let invalid = || GessError::OutOfBounds(text.to_string());

        let mut chars = text.chars();
        let letter = chars.next().ok_or_else(invalid)?;
        let col = COLUMN_LABELS
            .iter()
            .position(|&label| label as char == letter)
            .ok_or_else(invalid)?;

        let digits = chars.as_str();
        if digits.is_empty() || digits.starts_with('0') || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let row: usize = digits.parse().map_err(|_| invalid())?;
        if row == 0 {
            return Err(invalid());
        }

        Self::new(col, row - 1).ok_or_else(invalid)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", COLUMN_LABELS[self.col()] as char, self.row() + 1)
    }
}
