use crate::board::Board;
use crate::rules::validate::ValidatedMove;
use crate::types::Cell;

/// Applies a validated move and returns how many opponent stones it removed.
///
/// The moving pattern is read from the source footprint first, so a piece
/// whose destination overlaps its source keeps its shape. Destination cells
/// outside the pattern are cleared, and anything stamped onto the border is
/// dropped.
pub fn execute(board: &mut Board, mv: &ValidatedMove) -> usize {
    let mover = mv.mover;
    let pattern: Vec<((i32, i32), bool)> = mv
        .source
        .squares()
        .map(|(offset, square)| (offset, square.is_owned_by(mover)))
        .collect();

    let source = mv.source.center();
    for &((d_col, d_row), _) in &pattern {
        if let Some(coord) = source.offset(d_col, d_row) {
            board.set(coord, Cell::Empty);
        }
    }

    let destination = mv.destination.center();
    let mut captured = 0;
    for &((d_col, d_row), owned) in &pattern {
        let Some(coord) = destination.offset(d_col, d_row) else {
            continue;
        };
        if board.get(coord).is_owned_by(mover.opponent()) {
            captured += 1;
        }
        board.set(coord, if owned { Cell::Owned(mover) } else { Cell::Empty });
    }
    captured
}
