//! Exhaustive game-tree search over a single board with place/undo discipline.
//!
//! Terminal positions score `outcome / depth`, where depth 1 is the candidate
//! move the driver already placed. Dividing by the ply count prefers quicker
//! wins and later losses among lines with the same outcome.

use super::board::{Board, get_available_moves};
use super::types::{Mark, Position};
use super::win_detector::evaluate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchAlgorithm {
    Minimax,
    AlphaBeta,
    Negamax,
}

/// Runs the recursive searches and counts every node it visits.
#[derive(Debug, Default)]
pub struct Searcher {
    nodes_visited: u64,
}

impl Searcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn nodes_visited(&self) -> u64 {
        self.nodes_visited
    }

    /// Scores every legal computer move on a private copy of `board`, in
    /// row-major order. Each score is from the computer's side.
    pub fn score_moves(
        &mut self,
        algorithm: SearchAlgorithm,
        board: &Board,
    ) -> Vec<(Position, f64)> {
        let mut scratch = *board;
        get_available_moves(&scratch)
            .into_iter()
            .map(|pos| {
                let score = scratch.with_mark(pos, Mark::Computer, |b| match algorithm {
                    SearchAlgorithm::Minimax => self.minimax(1, b, false),
                    SearchAlgorithm::AlphaBeta => {
                        self.alpha_beta(1, f64::NEG_INFINITY, f64::INFINITY, b, false)
                    }
                    SearchAlgorithm::Negamax => -self.negamax(1, b, -1),
                });
                (pos, score)
            })
            .collect()
    }

    fn terminal_score(&mut self, depth: u32, board: &Board) -> Option<f64> {
        self.nodes_visited += 1;
        evaluate(board)
            .value()
            .map(|value| f64::from(value) / f64::from(depth))
    }

    /// `maximizing` is true when the computer places the next mark.
    pub fn minimax(&mut self, depth: u32, board: &mut Board, maximizing: bool) -> f64 {
        if let Some(score) = self.terminal_score(depth, board) {
            return score;
        }

        let moves = get_available_moves(board);

        if maximizing {
            let mut max_score = f64::NEG_INFINITY;
            for pos in moves {
                let score =
                    board.with_mark(pos, Mark::Computer, |b| self.minimax(depth + 1, b, false));
                max_score = max_score.max(score);
            }
            max_score
        } else {
            let mut min_score = f64::INFINITY;
            for pos in moves {
                let score =
                    board.with_mark(pos, Mark::Player, |b| self.minimax(depth + 1, b, true));
                min_score = min_score.min(score);
            }
            min_score
        }
    }

    pub fn alpha_beta(
        &mut self,
        depth: u32,
        mut alpha: f64,
        mut beta: f64,
        board: &mut Board,
        maximizing: bool,
    ) -> f64 {
        if let Some(score) = self.terminal_score(depth, board) {
            return score;
        }

        let moves = get_available_moves(board);

        if maximizing {
            let mut max_score = f64::NEG_INFINITY;
            for pos in moves {
                let score = board.with_mark(pos, Mark::Computer, |b| {
                    self.alpha_beta(depth + 1, alpha, beta, b, false)
                });
                max_score = max_score.max(score);
                alpha = alpha.max(score);
                if beta <= alpha {
                    break;
                }
            }
            max_score
        } else {
            let mut min_score = f64::INFINITY;
            for pos in moves {
                let score = board.with_mark(pos, Mark::Player, |b| {
                    self.alpha_beta(depth + 1, alpha, beta, b, true)
                });
                min_score = min_score.min(score);
                beta = beta.min(score);
                if beta <= alpha {
                    break;
                }
            }
            min_score
        }
    }

    /// `color` is +1 when the computer moves next and -1 when the player does.
    pub fn negamax(&mut self, depth: u32, board: &mut Board, color: i32) -> f64 {
        if let Some(score) = self.terminal_score(depth, board) {
            return score * f64::from(color);
        }

        let mark = if color == 1 { Mark::Computer } else { Mark::Player };

        let mut max_score = f64::NEG_INFINITY;
        for pos in get_available_moves(board) {
            let score = board.with_mark(pos, mark, |b| -self.negamax(depth + 1, b, -color));
            max_score = max_score.max(score);
        }
        max_score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(rows: [&str; 3]) -> Board {
        Board::from_rows(rows).unwrap()
    }

    #[test]
    fn test_terminal_score_is_divided_by_depth() {
        let mut b = board(["OOO", "XX.", "X.."]);
        let mut searcher = Searcher::new();
        assert_eq!(searcher.minimax(4, &mut b, true), 0.25);
        assert_eq!(searcher.negamax(4, &mut b, -1), -0.25);
        assert_eq!(searcher.nodes_visited(), 2);
    }

    #[test]
    fn test_minimax_prefers_faster_win() {
        // Computer to move: (0,2) wins now, anything else only wins later.
        let mut b = board(["OO.", "XX.", "X.."]);
        let before = b;
        let mut searcher = Searcher::new();
        let score = searcher.minimax(1, &mut b, true);
        assert_eq!(score, 0.5);
        assert_eq!(b, before);
    }

    #[test]
    fn test_searches_agree_on_midgame_position() {
        let start = board(["X..", ".O.", "..X"]);
        for maximizing in [true, false] {
            let mut b = start;
            let minimax = Searcher::new().minimax(1, &mut b, maximizing);
            let alpha_beta = Searcher::new().alpha_beta(
                1,
                f64::NEG_INFINITY,
                f64::INFINITY,
                &mut b,
                maximizing,
            );
            let color = if maximizing { 1 } else { -1 };
            let negamax = color as f64 * Searcher::new().negamax(1, &mut b, color);
            assert_eq!(minimax, alpha_beta);
            assert_eq!(minimax, negamax);
            assert_eq!(b, start);
        }
    }

    #[test]
    fn test_score_moves_leaves_board_untouched() {
        let b = board(["X..", "...", "..."]);
        let scores = Searcher::new().score_moves(SearchAlgorithm::AlphaBeta, &b);
        assert_eq!(scores.len(), 8);
        assert_eq!(scores[0].0, Position::new(0, 1));
        assert_eq!(b, board(["X..", "...", "..."]));
    }

    #[test]
    fn test_alpha_beta_visits_fewer_nodes() {
        let mut b = Board::new();
        let mut full = Searcher::new();
        let mut pruned = Searcher::new();
        full.minimax(1, &mut b, true);
        pruned.alpha_beta(1, f64::NEG_INFINITY, f64::INFINITY, &mut b, true);
        assert!(pruned.nodes_visited() < full.nodes_visited());
        assert_eq!(b, Board::new());
    }
}
