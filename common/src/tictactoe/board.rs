use std::fmt;

use super::types::{BOARD_SIZE, CELL_COUNT, Mark, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [[Mark; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from three rows of `X`, `O` and `.` characters.
    pub fn from_rows(rows: [&str; BOARD_SIZE]) -> Result<Self, String> {
        let mut board = Self::new();
        for (row, line) in rows.iter().enumerate() {
            let symbols: Vec<char> = line.chars().collect();
            if symbols.len() != BOARD_SIZE {
                return Err(format!(
                    "Row {} must have {} cells, got {}",
                    row,
                    BOARD_SIZE,
                    symbols.len()
                ));
            }
            for (col, &symbol) in symbols.iter().enumerate() {
                let mark = Mark::from_symbol(symbol)
                    .ok_or_else(|| format!("Unknown cell symbol '{}'", symbol))?;
                board.cells[row][col] = mark;
            }
        }
        Ok(board)
    }

    pub fn rows(&self) -> &[[Mark; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    pub fn get(&self, pos: Position) -> Mark {
        self.cells[pos.row][pos.col]
    }

    pub fn set(&mut self, pos: Position, mark: Mark) {
        self.cells[pos.row][pos.col] = mark;
    }

    pub fn is_empty_at(&self, pos: Position) -> bool {
        self.get(pos) == Mark::Empty
    }

    /// Places `mark` at `pos`, runs `f`, and clears the cell again before returning.
    ///
    /// The cell must be empty; search uses this so that every simulated
    /// placement is undone on every return path.
    pub fn with_mark<R>(
        &mut self,
        pos: Position,
        mark: Mark,
        f: impl FnOnce(&mut Board) -> R,
    ) -> R {
        debug_assert!(self.is_empty_at(pos), "simulated move on occupied cell {}", pos);
        self.set(pos, mark);
        let result = f(self);
        self.set(pos, Mark::Empty);
        result
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .map(|row| row.iter().filter(|&&cell| cell == mark).count())
            .sum()
    }

    pub fn marks_placed(&self) -> usize {
        CELL_COUNT - self.count(Mark::Empty)
    }

    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&cell| cell != Mark::Empty))
    }

    /// Marks alternate, so the two counts never differ by more than one.
    pub fn is_consistent(&self) -> bool {
        self.count(Mark::Player).abs_diff(self.count(Mark::Computer)) <= 1
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell)?;
            }
        }
        Ok(())
    }
}

/// Empty cells in row-major order. Search tie-breaks depend on this order.
pub fn get_available_moves(board: &Board) -> Vec<Position> {
    let mut moves = Vec::with_capacity(CELL_COUNT);
    for (row, cells) in board.rows().iter().enumerate() {
        for (col, &cell) in cells.iter().enumerate() {
            if cell == Mark::Empty {
                moves.push(Position::new(row, col));
            }
        }
    }
    moves
}
