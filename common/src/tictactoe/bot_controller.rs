use crate::session_rng::SessionRng;
use super::board::{Board, get_available_moves};
use super::mode::SearchMode;
use super::search::{SearchAlgorithm, Searcher};
use super::types::{Mark, Position};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveDecision {
    pub position: Position,
    /// Computer-side score of the chosen move. `None` for random play.
    pub score: Option<f64>,
    pub nodes_visited: u64,
}

/// Chooses the computer's move without touching `board`.
pub fn calculate_move(mode: SearchMode, board: &Board, rng: &mut SessionRng) -> MoveDecision {
    match mode.algorithm() {
        None => MoveDecision {
            position: calculate_random_move(board, rng),
            score: None,
            nodes_visited: 0,
        },
        Some(algorithm) => calculate_search_move(algorithm, board),
    }
}

/// Chooses the computer's move and places it on `board`.
pub fn select_move(board: &mut Board, mode: SearchMode, rng: &mut SessionRng) -> MoveDecision {
    let decision = calculate_move(mode, board, rng);
    board.set(decision.position, Mark::Computer);
    decision
}

pub fn calculate_random_move(board: &Board, rng: &mut SessionRng) -> Position {
    let available_moves = get_available_moves(board);
    assert!(
        !available_moves.is_empty(),
        "computer asked to move on a full board"
    );
    available_moves[rng.random_index(available_moves.len())]
}

/// Highest-scoring move; on equal scores the earliest in row-major order wins.
pub fn calculate_search_move(algorithm: SearchAlgorithm, board: &Board) -> MoveDecision {
    let mut searcher = Searcher::new();
    let scored_moves = searcher.score_moves(algorithm, board);
    assert!(
        !scored_moves.is_empty(),
        "computer asked to move on a full board"
    );

    let (mut best_move, mut best_score) = scored_moves[0];
    for &(position, score) in &scored_moves[1..] {
        if score > best_score {
            best_score = score;
            best_move = position;
        }
    }

    MoveDecision {
        position: best_move,
        score: Some(best_score),
        nodes_visited: searcher.nodes_visited(),
    }
}
