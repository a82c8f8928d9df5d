use crate::board::Board;
use crate::coord::PLAYABLE_SIZE;
use crate::error::GessError;
use crate::game::GameSession;
use crate::rules::compute_rings;
use crate::types::{GameState, Player};

const MAGIC: &[u8; 4] = b"GESS";
const VERSION: u32 = 1;
const HEADER_SIZE: usize = 12;
const BOARD_CELLS: usize = PLAYABLE_SIZE * PLAYABLE_SIZE;
const PAYLOAD_SIZE: usize = BOARD_CELLS + 2;

/// Serializes a session to the `GESS` save format.
pub fn to_bytes(session: &GameSession) -> Vec<u8> {
    let mut payload = Vec::with_capacity(PAYLOAD_SIZE);
    for row in session.board().to_matrix() {
        payload.extend_from_slice(&row);
    }
    payload.push(session.current_turn().code());
    payload.push(session.current_state().code());

    let mut out = Vec::with_capacity(HEADER_SIZE + PAYLOAD_SIZE);
    out.extend_from_slice(MAGIC);
    out.extend_from_slice(&VERSION.to_le_bytes());
    out.extend_from_slice(&crc32fast::hash(&payload).to_le_bytes());
    out.extend_from_slice(&payload);
    out
}

/// Restores a session written by [`to_bytes`].
pub fn from_bytes(data: &[u8]) -> Result<GameSession, GessError> {
    if data.len() < HEADER_SIZE {
        return Err(invalid(format!(
            "data too short: expected at least {HEADER_SIZE} bytes, got {}",
            data.len()
        )));
    }

    if &data[0..4] != MAGIC {
        return Err(invalid("bad magic (expected GESS)".to_string()));
    }

    let version = read_u32_le(data, 4)?;
    if version != VERSION {
        return Err(invalid(format!(
            "unsupported version: expected {VERSION}, got {version}"
        )));
    }

    let expected_crc = read_u32_le(data, 8)?;
    let payload = &data[HEADER_SIZE..];
    let actual_crc = crc32fast::hash(payload);
    if actual_crc != expected_crc {
        return Err(invalid(format!(
            "CRC32 mismatch: expected {expected_crc:#010x}, got {actual_crc:#010x}"
        )));
    }

    if payload.len() != PAYLOAD_SIZE {
        return Err(invalid(format!(
            "payload must be {PAYLOAD_SIZE} bytes, got {}",
            payload.len()
        )));
    }

    let mut matrix = [[0u8; PLAYABLE_SIZE]; PLAYABLE_SIZE];
    for (row, chunk) in matrix.iter_mut().zip(payload[..BOARD_CELLS].chunks_exact(PLAYABLE_SIZE)) {
        row.copy_from_slice(chunk);
    }
    let board = Board::from_matrix(&matrix).ok_or_else(|| invalid("unknown cell code".to_string()))?;

    let turn = Player::from_code(payload[BOARD_CELLS])
        .ok_or_else(|| invalid(format!("unknown turn code {}", payload[BOARD_CELLS])))?;
    let state = GameState::from_code(payload[BOARD_CELLS + 1])
        .ok_or_else(|| invalid(format!("unknown state code {}", payload[BOARD_CELLS + 1])))?;

    // The winner always keeps a ring; a resigned loser may keep theirs too.
    let rings = compute_rings(&board);
    let consistent = match state {
        GameState::InProgress => rings.has_ring(Player::Black) && rings.has_ring(Player::White),
        GameState::BlackWon => rings.has_ring(Player::Black),
        GameState::WhiteWon => rings.has_ring(Player::White),
    };
    if !consistent {
        return Err(invalid(format!("state {state:?} contradicts the rings on the board")));
    }

    Ok(GameSession::from_parts(board, turn, state))
}

fn invalid(reason: String) -> GessError {
    GessError::Snapshot(reason)
}

fn read_u32_le(data: &[u8], offset: usize) -> Result<u32, GessError> {
    if offset + 4 > data.len() {
        return Err(invalid("unexpected EOF while reading u32".to_string()));
    }
    let mut bytes = [0u8; 4];
    bytes.copy_from_slice(&data[offset..offset + 4]);
    Ok(u32::from_le_bytes(bytes))
}
