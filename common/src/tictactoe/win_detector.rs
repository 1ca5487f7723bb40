use super::board::Board;
use super::types::{Mark, Outcome, Position, WinningLine};

const LINES: [[(usize, usize); 3]; 8] = [
    // rows
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // columns
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// First completed line in row, column, diagonal order.
pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    for [a, b, c] in LINES {
        let (a, b, c) = (
            Position::new(a.0, a.1),
            Position::new(b.0, b.1),
            Position::new(c.0, c.1),
        );
        let mark = board.get(a);
        if mark != Mark::Empty && mark == board.get(b) && mark == board.get(c) {
            return Some(WinningLine::new(mark, a, c));
        }
    }
    None
}

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|line| line.mark)
}

pub fn evaluate(board: &Board) -> Outcome {
    match check_win(board) {
        Some(Mark::Player) => Outcome::PlayerWon,
        Some(Mark::Computer) => Outcome::ComputerWon,
        Some(Mark::Empty) => unreachable!(),
        None if board.is_full() => Outcome::Tie,
        None => Outcome::Ongoing,
    }
}
