use tracing::debug;

use crate::board::Board;
use crate::coord::Coordinate;
use crate::error::GessError;
use crate::rules::{self, Rings};
use crate::types::{GameSnapshot, GameState, Player};

/// `Ok` carries the state after an accepted move; `Err` is the rejection.
pub type MoveResult = Result<GameState, GessError>;

/// One game of Gess: the board, the side to move and the lifecycle state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    board: Board,
    turn: Player,
    state: GameState,
}

impl GameSession {
    /// Standard opening with black to move.
    pub fn new() -> Self {
        Self::from_position(Board::new(), Player::Black)
    }

    /// Starts from an arbitrary position. A side already without a ring has lost.
    pub fn from_position(board: Board, turn: Player) -> Self {
        let rings = rules::compute_rings(&board);
        let state = match (rings.has_ring(Player::Black), rings.has_ring(Player::White)) {
            (true, false) => GameState::BlackWon,
            (false, true) => GameState::WhiteWon,
            _ => GameState::InProgress,
        };
        Self { board, turn, state }
    }

    pub(crate) fn from_parts(board: Board, turn: Player, state: GameState) -> Self {
        Self { board, turn, state }
    }

    /// Moves the piece centred on `source` to `destination` for the side to move.
    /// A rejected move leaves the session untouched.
    pub fn attempt_move(&mut self, source: Coordinate, destination: Coordinate) -> MoveResult {
        if self.state.is_over() {
            return Err(GessError::GameOver);
        }

        let mover = self.turn;
        let mv = rules::validate(&self.board, mover, source, destination).inspect_err(|err| {
            debug!(?mover, %source, %destination, %err, "move rejected");
        })?;

        let captured = rules::execute(&mut self.board, &mv);
        let rings = rules::compute_rings(&self.board);
        debug!(?mover, %source, %destination, captured, "move accepted");

        if rings.has_ring(mover.opponent()) {
            self.turn = mover.opponent();
        } else {
            self.state = GameState::won_by(mover);
            debug!(winner = ?mover, "last opponent ring destroyed");
        }
        Ok(self.state)
    }

    /// Parses both coordinates, then behaves like [`GameSession::attempt_move`].
    pub fn make_move(&mut self, source: &str, destination: &str) -> MoveResult {
        let source: Coordinate = source.parse()?;
        let destination: Coordinate = destination.parse()?;
        self.attempt_move(source, destination)
    }

    /// The side to move concedes.
    pub fn resign(&mut self) -> Result<(), GessError> {
        if self.state.is_over() {
            return Err(GessError::GameOver);
        }
        self.state = GameState::won_by(self.turn.opponent());
        debug!(loser = ?self.turn, "resigned");
        Ok(())
    }

    pub fn current_state(&self) -> GameState {
        self.state
    }

    /// Meaningless once the game is over.
    pub fn current_turn(&self) -> Player {
        self.turn
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn rings(&self) -> Rings {
        rules::compute_rings(&self.board)
    }

    /// Legal moves for the side to move; empty once the game is over.
    pub fn legal_moves(&self) -> Vec<(Coordinate, Coordinate)> {
        if self.state.is_over() {
            return Vec::new();
        }
        rules::legal_moves(&self.board, self.turn)
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let rings = self.rings();
        let labels = |player: Player| -> Vec<String> {
            rings.of(player).iter().map(ToString::to_string).collect()
        };
        GameSnapshot {
            board: self.board.to_matrix().iter().map(|row| row.to_vec()).collect(),
            current_turn: self.turn,
            state: self.state,
            black_rings: labels(Player::Black),
            white_rings: labels(Player::White),
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IllegalMove;
    use crate::types::Cell;

    fn at(text: &str) -> Coordinate {
        text.parse().unwrap()
    }

    fn ring(board: &mut Board, center: &str, player: Player) {
        let center = at(center);
        for d_col in -1..=1 {
            for d_row in -1..=1 {
                if (d_col, d_row) != (0, 0) {
                    board.set(center.offset(d_col, d_row).unwrap(), Cell::Owned(player));
                }
            }
        }
    }

    #[test]
    fn s1_opening_has_one_ring_each_and_is_unfinished() {
        let game = GameSession::new();
        let rings = game.rings();

        assert_eq!(game.current_state(), GameState::InProgress);
        assert_eq!(game.current_turn(), Player::Black);
        assert_eq!(rings.black.iter().copied().collect::<Vec<_>>(), vec![at("l3")]);
        assert_eq!(rings.white.iter().copied().collect::<Vec<_>>(), vec![at("l18")]);
    }

    #[test]
    fn s2_limited_piece_moving_four_is_too_far() {
        let mut game = GameSession::new();
        let before = game.clone();

        // c7 is a lone stone; the piece at c6 sees it only to the north.
        let err = game.make_move("c6", "c10").unwrap_err();

        assert_eq!(err, GessError::IllegalMove(IllegalMove::TooFar));
        assert_eq!(game, before);
    }

    #[test]
    fn s3_overwriting_the_last_ring_wins() {
        let mut board = Board::empty();
        ring(&mut board, "l3", Player::Black);
        ring(&mut board, "h12", Player::White);
        // A full 3x3 black block; its destination window covers the ring's
        // southern row.
        for d_col in -1..=1 {
            for d_row in -1..=1 {
                board.set(at("h8").offset(d_col, d_row).unwrap(), Cell::Owned(Player::Black));
            }
        }
        let mut game = GameSession::from_position(board, Player::Black);
        assert_eq!(game.current_state(), GameState::InProgress);

        let state = game.make_move("h8", "h10").unwrap();

        assert_eq!(state, GameState::BlackWon);
        assert_eq!(game.current_state(), GameState::BlackWon);
        assert!(game.rings().white.is_empty());
        assert_eq!(game.board().count(), (8 + 9, 8 - 3));
        assert_eq!(game.make_move("l4", "l5"), Err(GessError::GameOver));
    }

    #[test]
    fn s4_resign_hands_the_win_to_the_opponent() {
        let mut game = GameSession::new();
        assert_eq!(game.current_turn(), Player::Black);

        game.resign().unwrap();

        assert_eq!(game.current_state(), GameState::WhiteWon);
        assert_eq!(game.make_move("c3", "c4"), Err(GessError::GameOver));
        assert_eq!(game.resign(), Err(GessError::GameOver));
        assert!(game.legal_moves().is_empty());
    }

    #[test]
    fn s5_moving_an_opponent_piece_is_not_owned() {
        let mut game = GameSession::new();
        let before = game.board().to_matrix();

        let err = game.make_move("l17", "l16").unwrap_err();

        assert_eq!(err, GessError::IllegalMove(IllegalMove::NotOwned));
        assert_eq!(game.board().to_matrix(), before);
        assert_eq!(game.current_turn(), Player::Black);
        assert_eq!(game.current_state(), GameState::InProgress);
    }

    #[test]
    fn accepted_moves_alternate_turns() {
        let mut game = GameSession::new();

        assert_eq!(game.make_move("c3", "c6"), Ok(GameState::InProgress));
        assert_eq!(game.current_turn(), Player::White);
        assert_eq!(game.make_move("c18", "c15"), Ok(GameState::InProgress));
        assert_eq!(game.current_turn(), Player::Black);
    }

    #[test]
    fn white_resigning_gives_black_the_win() {
        let mut game = GameSession::new();
        game.make_move("c3", "c6").unwrap();

        game.resign().unwrap();

        assert_eq!(game.current_state(), GameState::BlackWon);
    }

    #[test]
    fn bad_text_is_rejected_before_the_rules() {
        let mut game = GameSession::new();

        assert_eq!(game.make_move("zz", "c4"), Err(GessError::OutOfBounds("zz".to_string())));
        assert_eq!(game.make_move("c3", "c04"), Err(GessError::OutOfBounds("c04".to_string())));
        assert!(matches!(game.make_move("a3", "c4"), Err(GessError::OutOfBounds(_))));
        assert_eq!(game, GameSession::new());
    }

    #[test]
    fn self_elimination_matches_ring_simulation() {
        let mut game = GameSession::new();
        let before = game.clone();

        // Pulling the top row of the ring south fills its centre.
        assert_eq!(
            game.make_move("l5", "l4"),
            Err(GessError::IllegalMove(IllegalMove::SelfElimination))
        );
        assert_eq!(game, before);
    }

    #[test]
    fn position_without_a_ring_is_already_decided() {
        let mut board = Board::empty();
        ring(&mut board, "e5", Player::White);

        let game = GameSession::from_position(board, Player::Black);

        assert_eq!(game.current_state(), GameState::WhiteWon);
    }

    #[test]
    fn snapshot_lists_rings_and_matrix() {
        let snapshot = GameSession::new().snapshot();

        assert_eq!(snapshot.board.len(), 18);
        assert!(snapshot.board.iter().all(|row| row.len() == 18));
        assert_eq!(snapshot.black_rings, vec!["l3".to_string()]);
        assert_eq!(snapshot.white_rings, vec!["l18".to_string()]);
        assert_eq!(snapshot.current_turn, Player::Black);
        assert_eq!(snapshot.state, GameState::InProgress);
    }
}
