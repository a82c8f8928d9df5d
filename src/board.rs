use once_cell::sync::Lazy;

use crate::coord::{Coordinate, PLAYABLE_SIZE};
use crate::error::GessError;
use crate::footprint::Footprint;
use crate::types::{Cell, Player, Square};

/// Stone columns of the two edge rows of the opening block (rows 2/4 and 17/19).
const EDGE_ROW: &str = "c e g h i j k l m n p r";
/// Stone columns of the middle row of the opening block (rows 3 and 18).
const MIDDLE_ROW: &str = "b c d f h i j k m o q r s";
/// Stone columns of the advanced row (rows 7 and 14).
const FRONT_ROW: &str = "c f i l o r";

static STARTING_BOARD: Lazy<Board> = Lazy::new(Board::build_starting);

/// Gess board: the 18x18 cells inside the permanently empty border.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; PLAYABLE_SIZE]; PLAYABLE_SIZE],
}

impl Board {
    /// Creates the standard opening position:
    /// black on rows 2-4 and 7, white mirrored on rows 17-19 and 14.
    pub fn new() -> Self {
        *STARTING_BOARD
    }

    pub fn empty() -> Self {
        Self {
            cells: [[Cell::Empty; PLAYABLE_SIZE]; PLAYABLE_SIZE],
        }
    }

    fn build_starting() -> Self {
        let mut board = Self::empty();
        for (player, rows) in [
            (Player::Black, [(2, EDGE_ROW), (3, MIDDLE_ROW), (4, EDGE_ROW), (7, FRONT_ROW)]),
            (Player::White, [(19, EDGE_ROW), (18, MIDDLE_ROW), (17, EDGE_ROW), (14, FRONT_ROW)]),
        ] {
            for (row, columns) in rows {
                for column in columns.split_whitespace() {
                    if let Ok(coord) = format!("{column}{row}").parse::<Coordinate>() {
                        board.set(coord, Cell::Owned(player));
                    }
                }
            }
        }
        board
    }

    /// Reads one cell; border cells read as `OutOfBounds`.
    pub fn get(&self, coord: Coordinate) -> Square {
        match coord.playable_index() {
            Some((row, col)) => Square::Inside(self.cells[row][col]),
            None => Square::OutOfBounds,
        }
    }

    /// Writes one cell. Writes to the border are dropped, which keeps it empty.
    /// Returns whether the write landed.
    pub fn set(&mut self, coord: Coordinate, cell: Cell) -> bool {
        match coord.playable_index() {
            Some((row, col)) => {
                self.cells[row][col] = cell;
                true
            }
            None => false,
        }
    }

    /// The 3x3 window around `center`.
    pub fn footprint(&self, center: Coordinate) -> Result<Footprint, GessError> {
        Footprint::around(self, center)
    }

    /// Returns `(black_count, white_count)`.
    pub fn count(&self) -> (usize, usize) {
        self.cells
            .iter()
            .flatten()
            .fold((0, 0), |(black, white), cell| match cell {
                Cell::Owned(Player::Black) => (black + 1, white),
                Cell::Owned(Player::White) => (black, white + 1),
                Cell::Empty => (black, white),
            })
    }

    /// Converts board to an 18x18 matrix where 0=empty, 1=black, 2=white.
    /// Row 2 comes first, column `b` first.
    pub fn to_matrix(&self) -> [[u8; PLAYABLE_SIZE]; PLAYABLE_SIZE] {
        let mut matrix = [[0u8; PLAYABLE_SIZE]; PLAYABLE_SIZE];
        for (out_row, row) in matrix.iter_mut().zip(self.cells.iter()) {
            for (out, cell) in out_row.iter_mut().zip(row.iter()) {
                *out = cell.code();
            }
        }
        matrix
    }

    /// Inverse of [`Board::to_matrix`]; `None` on an unknown cell code.
    pub fn from_matrix(matrix: &[[u8; PLAYABLE_SIZE]; PLAYABLE_SIZE]) -> Option<Self> {
        let mut board = Self::empty();
        for (row, codes) in board.cells.iter_mut().zip(matrix.iter()) {
            for (cell, &code) in row.iter_mut().zip(codes.iter()) {
                *cell = Cell::from_code(code)?;
            }
        }
        Some(board)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
