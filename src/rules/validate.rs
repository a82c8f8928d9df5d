use crate::board::Board;
use crate::coord::Coordinate;
use crate::error::{GessError, IllegalMove};
use crate::footprint::{Direction, Footprint, OFFSETS, classify_directions};
use crate::rules::execute::execute;
use crate::rules::rings::compute_rings;
use crate::types::Player;

/// Farthest a piece without a centre stone may travel.
pub const LIMITED_DISTANCE: usize = 3;

/// A move that passed every rule check against a specific board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedMove {
    pub mover: Player,
    pub source: Footprint,
    pub destination: Footprint,
    pub direction: Direction,
    pub distance: usize,
}

/// Checks a move of the piece centred on `source` to `destination` for
/// `mover`. Never mutates `board`.
pub fn validate(
    board: &Board,
    mover: Player,
    source: Coordinate,
    destination: Coordinate,
) -> Result<ValidatedMove, GessError> {
    let source_fp = board.footprint(source)?;
    let destination_fp = board.footprint(destination)?;

    if source_fp.contains_stone_of(mover.opponent()) {
        return Err(IllegalMove::NotOwned.into());
    }
    if !source_fp.contains_stone_of(mover) {
        return Err(IllegalMove::EmptyStone.into());
    }

    let (direction, distance) = line_between(source, destination).ok_or(IllegalMove::NotAligned)?;

    let available = classify_directions(&source_fp, mover);
    if !available.contains(direction) {
        return Err(IllegalMove::DirectionNotAvailable.into());
    }
    if !available.contains(Direction::Center) && distance > LIMITED_DISTANCE {
        return Err(IllegalMove::TooFar.into());
    }

    check_path(board, mover, source, direction, distance)?;

    let mv = ValidatedMove {
        mover,
        source: source_fp,
        destination: destination_fp,
        direction,
        distance,
    };

    let mut scratch = *board;
    execute(&mut scratch, &mv);
    if !compute_rings(&scratch).has_ring(mover) {
        return Err(IllegalMove::SelfElimination.into());
    }

    Ok(mv)
}

/// Direction and step count of a straight or diagonal line; `None` otherwise
/// or when both ends coincide.
pub fn line_between(source: Coordinate, destination: Coordinate) -> Option<(Direction, usize)> {
    let d_col = destination.col() as i32 - source.col() as i32;
    let d_row = destination.row() as i32 - source.row() as i32;
    if (d_col, d_row) == (0, 0) {
        return None;
    }
    if d_col != 0 && d_row != 0 && d_col.abs() != d_row.abs() {
        return None;
    }

    let direction = Direction::from_offset(d_col.signum(), d_row.signum())?;
    let distance = d_col.abs().max(d_row.abs()) as usize;
    Some((direction, distance))
}

/// Every footprint strictly between source and destination must be free of
/// opponent stones. The mover's own stones never block.
fn check_path(
    board: &Board,
    mover: Player,
    source: Coordinate,
    direction: Direction,
    distance: usize,
) -> Result<(), IllegalMove> {
    let (step_col, step_row) = direction.step();
    for step in 1..distance as i32 {
        let Some(center) = source.offset(step_col * step, step_row * step) else {
            return Err(IllegalMove::Blocked);
        };
        for (d_col, d_row) in OFFSETS {
            let Some(cell) = center.offset(d_col, d_row) else {
                continue;
            };
            if board.get(cell).is_owned_by(mover.opponent()) {
                return Err(IllegalMove::Blocked);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Cell;

    fn at(text: &str) -> Coordinate {
        text.parse().unwrap()
    }

    fn ring(board: &mut Board, center: &str, player: Player) {
        let center = at(center);
        for (d_col, d_row) in OFFSETS {
            if (d_col, d_row) != (0, 0) {
                board.set(center.offset(d_col, d_row).unwrap(), Cell::Owned(player));
            }
        }
    }

    fn board_with(black: &[&str], white: &[&str]) -> Board {
        let mut board = Board::empty();
        ring(&mut board, "l3", Player::Black);
        ring(&mut board, "l18", Player::White);
        for c in black {
            board.set(at(c), Cell::Owned(Player::Black));
        }
        for c in white {
            board.set(at(c), Cell::Owned(Player::White));
        }
        board
    }

    fn rejection(board: &Board, from: &str, to: &str) -> GessError {
        validate(board, Player::Black, at(from), at(to)).unwrap_err()
    }

    #[test]
    fn line_between_resolves_compass_lines() {
        assert_eq!(line_between(at("e5"), at("e9")), Some((Direction::N, 4)));
        assert_eq!(line_between(at("e5"), at("b2")), Some((Direction::SW, 3)));
        assert_eq!(line_between(at("e5"), at("h2")), Some((Direction::SE, 3)));
        assert_eq!(line_between(at("e5"), at("c5")), Some((Direction::W, 2)));
        assert_eq!(line_between(at("e5"), at("f7")), None);
        assert_eq!(line_between(at("e5"), at("e5")), None);
    }

    #[test]
    fn accepts_short_move_along_available_direction() {
        let board = board_with(&["h9"], &[]);
        let mv = validate(&board, Player::Black, at("g8"), at("j11")).unwrap();

        assert_eq!(mv.direction, Direction::NE);
        assert_eq!(mv.distance, 3);
    }

    #[test]
    fn empty_center_piece_can_move() {
        let board = board_with(&["f8", "h8"], &[]);
        assert!(validate(&board, Player::Black, at("g8"), at("j8")).is_ok());
    }

    #[test]
    fn border_centers_are_out_of_bounds() {
        let board = board_with(&["b9"], &[]);

        assert!(matches!(rejection(&board, "a9", "b9"), GessError::OutOfBounds(_)));
        assert!(matches!(rejection(&board, "c9", "a9"), GessError::OutOfBounds(_)));
    }

    #[test]
    fn piece_with_opponent_stone_is_not_owned() {
        let board = board_with(&["g8"], &["h9"]);
        assert_eq!(rejection(&board, "g8", "g9"), GessError::from(IllegalMove::NotOwned));
    }

    #[test]
    fn piece_without_own_stones_is_empty() {
        let board = board_with(&[], &[]);
        assert_eq!(rejection(&board, "g8", "g9"), GessError::from(IllegalMove::EmptyStone));
    }

    #[test]
    fn off_line_or_null_moves_are_not_aligned() {
        let board = board_with(&["g8", "g9"], &[]);

        assert_eq!(rejection(&board, "g8", "h10"), GessError::from(IllegalMove::NotAligned));
        assert_eq!(rejection(&board, "g8", "g8"), GessError::from(IllegalMove::NotAligned));
    }

    #[test]
    fn missing_direction_stone_is_rejected() {
        let board = board_with(&["g9"], &[]);
        assert_eq!(rejection(&board, "g8", "g7"), GessError::from(IllegalMove::DirectionNotAvailable));
    }

    #[test]
    fn limited_piece_cannot_move_four() {
        let board = board_with(&["g9"], &[]);

        assert!(validate(&board, Player::Black, at("g8"), at("g11")).is_ok());
        assert_eq!(rejection(&board, "g8", "g12"), GessError::from(IllegalMove::TooFar));
    }

    #[test]
    fn center_stone_unlocks_unlimited_distance() {
        let board = board_with(&["g8", "g9"], &[]);
        assert!(validate(&board, Player::Black, at("g8"), at("g16")).is_ok());
    }

    #[test]
    fn opponent_stone_on_the_path_blocks() {
        let board = board_with(&["g8", "g9"], &["h13"]);
        assert_eq!(rejection(&board, "g8", "g14"), GessError::from(IllegalMove::Blocked));
    }

    #[test]
    fn own_stone_on_the_path_does_not_block() {
        let board = board_with(&["g8", "g9", "f12"], &[]);
        let mv = validate(&board, Player::Black, at("g8"), at("g14")).unwrap();

        assert_eq!(mv.direction, Direction::N);
        assert_eq!(mv.distance, 6);
    }

    #[test]
    fn stone_at_destination_is_not_blocking() {
        let board = board_with(&["g8", "g9"], &["h13"]);
        // The first window touching h13 is centred on g12.
        assert!(validate(&board, Player::Black, at("g8"), at("g12")).is_ok());
    }

    #[test]
    fn own_vacated_cells_do_not_block() {
        let board = board_with(&["f7", "g9", "h9"], &[]);
        assert!(validate(&board, Player::Black, at("g8"), at("g10")).is_ok());
    }

    #[test]
    fn breaking_own_last_ring_is_self_elimination() {
        // The piece at l5 holds the top row of the ring; stepping it south
        // fills the ring's centre.
        let board = board_with(&[], &[]);
        assert_eq!(rejection(&board, "l5", "l4"), GessError::from(IllegalMove::SelfElimination));
    }

    #[test]
    fn validation_never_mutates_the_board() {
        let board = board_with(&["g8", "g9"], &["h13"]);
        let before = board;

        let _ = validate(&board, Player::Black, at("g8"), at("g14"));
        let _ = validate(&board, Player::Black, at("g8"), at("g12"));

        assert_eq!(board, before);
    }
}
