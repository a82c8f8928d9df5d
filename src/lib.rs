use wasm_bindgen::prelude::*;

pub mod board;
pub mod coord;
pub mod error;
pub mod footprint;
pub mod game;
pub mod rules;
pub mod snapshot;
pub mod types;
pub mod wasm;

pub use board::Board;
pub use coord::Coordinate;
pub use error::{GessError, IllegalMove};
pub use game::{GameSession, MoveResult};
pub use types::{Cell, GameSnapshot, GameState, Player, Square};

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}
