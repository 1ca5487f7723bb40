use std::fmt;

use crate::session_rng::SessionRng;
use super::board::Board;
use super::bot_controller::{MoveDecision, select_move};
use super::mode::SearchMode;
use super::types::{Mark, Outcome, Position, TurnOwner};
use super::win_detector::evaluate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    GameOver,
    NotYourTurn,
    OutOfBounds(Position),
    CellOccupied(Position),
    GameInProgress,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::GameOver => write!(f, "Game is already over"),
            GameError::NotYourTurn => write!(f, "Not your turn"),
            GameError::OutOfBounds(pos) => write!(f, "Position {} is out of bounds", pos),
            GameError::CellOccupied(pos) => write!(f, "Cell {} is already marked", pos),
            GameError::GameInProgress => write!(f, "Game is still in progress"),
        }
    }
}

impl std::error::Error for GameError {}

/// One human-versus-computer session. Survives rematches; each rematch swaps
/// which side opens.
pub struct TicTacToeGameState {
    board: Board,
    mode: SearchMode,
    starting_turn: TurnOwner,
    turn: TurnOwner,
    outcome: Outcome,
    last_move: Option<Position>,
    rng: SessionRng,
}

impl TicTacToeGameState {
    pub fn new(mode: SearchMode, computer_first: bool, rng: SessionRng) -> Self {
        let starting_turn = TurnOwner::starting(computer_first);
        Self {
            board: Board::new(),
            mode,
            starting_turn,
            turn: starting_turn,
            outcome: Outcome::Ongoing,
            last_move: None,
            rng,
        }
    }

    #[cfg(test)]
    fn from_board(board: Board, mode: SearchMode, turn: TurnOwner) -> Self {
        Self {
            board,
            mode,
            starting_turn: turn,
            turn,
            outcome: evaluate(&board),
            last_move: None,
            rng: SessionRng::new(0),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    pub fn turn(&self) -> TurnOwner {
        self.turn
    }

    pub fn starting_turn(&self) -> TurnOwner {
        self.starting_turn
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn place_player_mark(&mut self, pos: Position) -> Result<Outcome, GameError> {
        match self.turn {
            TurnOwner::GameOver => return Err(GameError::GameOver),
            TurnOwner::ComputerTurn => return Err(GameError::NotYourTurn),
            TurnOwner::PlayerTurn => {}
        }

        if !pos.is_on_board() {
            return Err(GameError::OutOfBounds(pos));
        }

        if !self.board.is_empty_at(pos) {
            return Err(GameError::CellOccupied(pos));
        }

        self.board.set(pos, Mark::Player);
        self.last_move = Some(pos);
        self.finish_turn(TurnOwner::ComputerTurn);

        Ok(self.outcome)
    }

    pub fn play_computer_turn(&mut self) -> Result<MoveDecision, GameError> {
        match self.turn {
            TurnOwner::GameOver => return Err(GameError::GameOver),
            TurnOwner::PlayerTurn => return Err(GameError::NotYourTurn),
            TurnOwner::ComputerTurn => {}
        }

        let decision = select_move(&mut self.board, self.mode, &mut self.rng);
        self.last_move = Some(decision.position);
        self.finish_turn(TurnOwner::PlayerTurn);

        Ok(decision)
    }

    /// Clears the board after a finished game and hands the opening move to
    /// the side that did not open the last one.
    pub fn restart(&mut self) -> Result<TurnOwner, GameError> {
        if self.turn != TurnOwner::GameOver {
            return Err(GameError::GameInProgress);
        }

        self.starting_turn = match self.starting_turn {
            TurnOwner::PlayerTurn => TurnOwner::ComputerTurn,
            _ => TurnOwner::PlayerTurn,
        };
        self.board = Board::new();
        self.turn = self.starting_turn;
        self.outcome = Outcome::Ongoing;
        self.last_move = None;

        Ok(self.turn)
    }

    fn finish_turn(&mut self, next: TurnOwner) {
        self.outcome = evaluate(&self.board);
        self.turn = if self.outcome.is_terminal() {
            TurnOwner::GameOver
        } else {
            next
        };
    }
}
