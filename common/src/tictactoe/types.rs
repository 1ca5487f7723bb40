use std::fmt;

pub const BOARD_SIZE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mark {
    #[default]
    Empty,
    Player,
    Computer,
}

impl Mark {
    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::Player => Some(Mark::Computer),
            Mark::Computer => Some(Mark::Player),
            Mark::Empty => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Mark::Empty => '.',
            Mark::Player => 'X',
            Mark::Computer => 'O',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Mark> {
        match symbol {
            '.' | ' ' | '_' => Some(Mark::Empty),
            'X' | 'x' => Some(Mark::Player),
            'O' | 'o' => Some(Mark::Computer),
            _ => None,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A cell coordinate, row-major, both components in `0..BOARD_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        if index >= CELL_COUNT {
            return None;
        }
        Some(Self::new(index / BOARD_SIZE, index % BOARD_SIZE))
    }

    pub fn to_index(&self) -> usize {
        self.row * BOARD_SIZE + self.col
    }

    pub fn is_on_board(&self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub mark: Mark,
    pub start: Position,
    pub end: Position,
}

impl WinningLine {
    pub fn new(mark: Mark, start: Position, end: Position) -> Self {
        Self { mark, start, end }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Ongoing,
    Tie,
    PlayerWon,
    ComputerWon,
}

impl Outcome {
    /// Signed value from the computer's side. `None` while the game is running.
    pub fn value(&self) -> Option<i32> {
        match self {
            Outcome::Ongoing => None,
            Outcome::Tie => Some(0),
            Outcome::PlayerWon => Some(-1),
            Outcome::ComputerWon => Some(1),
        }
    }

    pub fn is_terminal(&self) -> bool {
        *self != Outcome::Ongoing
    }

    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::PlayerWon => Some(Mark::Player),
            Outcome::ComputerWon => Some(Mark::Computer),
            _ => None,
        }
    }

    /// End-of-game text from the human's point of view.
    pub fn banner(&self) -> &'static str {
        match self {
            Outcome::PlayerWon => "You Won!",
            Outcome::Tie => "It's a Tie!",
            Outcome::ComputerWon => "You Lost!",
            Outcome::Ongoing => "Game in progress",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOwner {
    PlayerTurn,
    ComputerTurn,
    GameOver,
}

impl TurnOwner {
    pub fn starting(computer_first: bool) -> Self {
        if computer_first {
            TurnOwner::ComputerTurn
        } else {
            TurnOwner::PlayerTurn
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_index_is_row_major() {
        assert_eq!(Position::new(0, 0).to_index(), 0);
        assert_eq!(Position::new(1, 2).to_index(), 5);
        assert_eq!(Position::from_index(7), Some(Position::new(2, 1)));
        assert_eq!(Position::from_index(9), None);
    }

    #[test]
    fn test_outcome_values_are_signed_from_computer_side() {
        assert_eq!(Outcome::Tie.value(), Some(0));
        assert_eq!(Outcome::PlayerWon.value(), Some(-1));
        assert_eq!(Outcome::ComputerWon.value(), Some(1));
        assert_eq!(Outcome::Ongoing.value(), None);
        assert!(!Outcome::Ongoing.is_terminal());
    }

    #[test]
    fn test_mark_opponent() {
        assert_eq!(Mark::Player.opponent(), Some(Mark::Computer));
        assert_eq!(Mark::Computer.opponent(), Some(Mark::Player));
        assert_eq!(Mark::Empty.opponent(), None);
    }

    #[test]
    fn test_banner_is_from_human_side() {
        assert_eq!(Outcome::PlayerWon.banner(), "You Won!");
        assert_eq!(Outcome::ComputerWon.banner(), "You Lost!");
        assert_eq!(Outcome::Tie.banner(), "It's a Tie!");
    }

    #[test]
    fn test_outcomes_can_be_collected_into_a_set() {
        let outcomes: std::collections::HashSet<Outcome> =
            [Outcome::Tie, Outcome::ComputerWon, Outcome::Tie].into_iter().collect();
        assert_eq!(outcomes.len(), 2);
        assert!(outcomes.contains(&Outcome::Tie));
        assert!(!outcomes.contains(&Outcome::PlayerWon));
    }
}
