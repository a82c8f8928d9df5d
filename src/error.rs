use thiserror::Error;

/// Why a move was refused by the rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum IllegalMove {
    #[error("the piece contains opponent stones")]
    NotOwned,
    #[error("the piece contains none of the mover's stones")]
    EmptyStone,
    #[error("destination is not on a straight or diagonal line from the source")]
    NotAligned,
    #[error("the piece has no stone pointing in that direction")]
    DirectionNotAvailable,
    #[error("the piece cannot move that far without its centre stone")]
    TooFar,
    #[error("another stone is in the way")]
    Blocked,
    #[error("the move would leave the mover without a ring")]
    SelfElimination,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GessError {
    #[error("illegal move: {0}")]
    IllegalMove(#[from] IllegalMove),
    #[error("{0:?} is not a playable square")]
    OutOfBounds(String),
    #[error("game is already over")]
    GameOver,
    #[error("invalid snapshot: {0}")]
    Snapshot(String),
}
