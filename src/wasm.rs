use wasm_bindgen::prelude::*;

use crate::game::GameSession;
use crate::snapshot;
use crate::types::Player;

/// JavaScript handle on one game.
#[wasm_bindgen]
pub struct GessGame {
    session: GameSession,
}

#[wasm_bindgen]
impl GessGame {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            session: GameSession::new(),
        }
    }

    /// Plays a move and returns the new state; throws the rejection reason.
    pub fn make_move(&mut self, from: &str, to: &str) -> Result<JsValue, JsError> {
        self.session.make_move(from, to)?;
        self.get_state()
    }

    pub fn resign(&mut self) -> Result<(), JsError> {
        self.session.resign()?;
        Ok(())
    }

    pub fn get_state(&self) -> Result<JsValue, JsError> {
        Ok(serde_wasm_bindgen::to_value(&self.session.snapshot())?)
    }

    pub fn current_turn(&self) -> String {
        match self.session.current_turn() {
            Player::Black => "black".to_string(),
            Player::White => "white".to_string(),
        }
    }

    pub fn save(&self) -> Vec<u8> {
        snapshot::to_bytes(&self.session)
    }

    pub fn load(bytes: &[u8]) -> Result<GessGame, JsError> {
        Ok(Self {
            session: snapshot::from_bytes(bytes)?,
        })
    }
}

impl Default for GessGame {
    fn default() -> Self {
        Self::new()
    }
}
