//! Move legality, move execution and ring detection.

pub mod execute;
pub mod rings;
pub mod validate;

pub use execute::execute;
pub use rings::{Rings, compute_rings};
pub use validate::{LIMITED_DISTANCE, ValidatedMove, line_between, validate};

use crate::board::Board;
use crate::coord::{Coordinate, PLAYABLE_SIZE};
use crate::error::{GessError, IllegalMove};
use crate::footprint::{Direction, classify_directions};
use crate::types::Player;

/// Every `(source, destination)` pair `mover` may legally play on `board`.
pub fn legal_moves(board: &Board, mover: Player) -> Vec<(Coordinate, Coordinate)> {
    let mut moves = Vec::new();

    for source in Coordinate::playable() {
        let Ok(footprint) = board.footprint(source) else {
            continue;
        };
        if footprint.contains_stone_of(mover.opponent()) || !footprint.contains_stone_of(mover) {
            continue;
        }

        let available = classify_directions(&footprint, mover);
        let reach = if available.contains(Direction::Center) {
            PLAYABLE_SIZE
        } else {
            LIMITED_DISTANCE
        };

        for direction in available.compass() {
            let (step_col, step_row) = direction.step();
            for distance in 1..=reach as i32 {
                let Some(destination) = source.offset(step_col * distance, step_row * distance) else {
                    break;
                };
                if destination.is_border() {
                    break;
                }
                match validate(board, mover, source, destination) {
                    Ok(_) => moves.push((source, destination)),
                    Err(GessError::IllegalMove(IllegalMove::Blocked)) => break,
                    Err(_) => {}
                }
            }
        }
    }

    moves
}
