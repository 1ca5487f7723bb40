mod board;
mod bot_controller;
mod game_state;
mod mode;
mod search;
mod types;
mod win_detector;

pub use board::{Board, get_available_moves};
pub use bot_controller::{
    MoveDecision, calculate_move, calculate_random_move, calculate_search_move, select_move,
};
pub use game_state::{GameError, TicTacToeGameState};
pub use mode::{SearchMode, SearchModeError};
pub use search::{SearchAlgorithm, Searcher};
pub use types::{BOARD_SIZE, CELL_COUNT, Mark, Outcome, Position, TurnOwner, WinningLine};
pub use win_detector::{check_win, check_win_with_line, evaluate};
