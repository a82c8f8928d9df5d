use std::collections::BTreeSet;

use crate::board::Board;
use crate::coord::Coordinate;
use crate::footprint::OFFSETS;
use crate::types::{Cell, Player, Square};

/// Ring locations of both players, recomputed from a board.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rings {
    pub black: BTreeSet<Coordinate>,
    pub white: BTreeSet<Coordinate>,
}

impl Rings {
    pub fn of(&self, player: Player) -> &BTreeSet<Coordinate> {
        match player {
            Player::Black => &self.black,
            Player::White => &self.white,
        }
    }

    pub fn has_ring(&self, player: Player) -> bool {
        !self.of(player).is_empty()
    }
}

/// Scans every empty playable cell for eight same-owner neighbours.
pub fn compute_rings(board: &Board) -> Rings {
    let mut rings = Rings::default();
    for center in Coordinate::playable() {
        if board.get(center) != Square::Inside(Cell::Empty) {
            continue;
        }
        match ring_owner(board, center) {
            Some(Player::Black) => rings.black.insert(center),
            Some(Player::White) => rings.white.insert(center),
            None => false,
        };
    }
    rings
}

fn ring_owner(board: &Board, center: Coordinate) -> Option<Player> {
    let mut owner = None;
    for (d_col, d_row) in OFFSETS {
        if (d_col, d_row) == (0, 0) {
            continue;
        }
        let square = board.get(center.offset(d_col, d_row)?);
        let Square::Inside(Cell::Owned(player)) = square else {
            return None;
        };
        match owner {
            None => owner = Some(player),
            Some(first) if first != player => return None,
            Some(_) => {}
        }
    }
    owner
}
