use std::io::{self, BufRead, Write};

use tictactoe_common::log;
use tictactoe_common::tictactoe::{
    BOARD_SIZE, Board, Position, TicTacToeGameState, TurnOwner, check_win_with_line,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Place(Position),
    Quit,
}

/// Accepts `row col` (0-based), a single cell number 1-9, or `q`/`quit`.
pub fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();
    if line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit") {
        return Ok(Command::Quit);
    }

    let parts: Vec<&str> = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .collect();

    match parts.as_slice() {
        [cell] => {
            let number: usize = cell
                .parse()
                .map_err(|_| format!("Not a cell number: {}", cell))?;
            number
                .checked_sub(1)
                .and_then(Position::from_index)
                .map(Command::Place)
                .ok_or_else(|| format!("Cell number must be between 1 and 9, got {}", number))
        }
        [row, col] => {
            let row: usize = row.parse().map_err(|_| format!("Not a row: {}", row))?;
            let col: usize = col.parse().map_err(|_| format!("Not a column: {}", col))?;
            let pos = Position::new(row, col);
            if !pos.is_on_board() {
                return Err(format!(
                    "Row and column must be between 0 and {}",
                    BOARD_SIZE - 1
                ));
            }
            Ok(Command::Place(pos))
        }
        _ => Err("Enter a move as `row col`, a cell number 1-9, or q to quit".to_string()),
    }
}

pub fn render_board(board: &Board) -> String {
    let mut out = String::from("  0 1 2\n");
    for (row, cells) in board.rows().iter().enumerate() {
        out.push_str(&row.to_string());
        for cell in cells {
            out.push(' ');
            out.push(cell.symbol());
        }
        out.push('\n');
    }
    out
}

/// Plays games until the player quits or `input` runs out.
pub fn run_session(
    game: &mut TicTacToeGameState,
    mut input: impl BufRead,
    mut output: impl Write,
) -> io::Result<()> {
    let mut line = String::new();

    loop {
        match game.turn() {
            TurnOwner::ComputerTurn => {
                let decision = match game.play_computer_turn() {
                    Ok(decision) => decision,
                    Err(e) => {
                        writeln!(output, "{}", e)?;
                        return Ok(());
                    }
                };
                match decision.score {
                    Some(score) => log!(
                        "Computer ({}) plays {} with score {:.4} after {} nodes",
                        game.mode(),
                        decision.position,
                        score,
                        decision.nodes_visited
                    ),
                    None => log!("Computer ({}) plays {}", game.mode(), decision.position),
                }
            }
            TurnOwner::PlayerTurn => {
                write!(output, "\n{}Your move (row col, 1-9, q): ", render_board(game.board()))?;
                output.flush()?;

                line.clear();
                if input.read_line(&mut line)? == 0 {
                    return Ok(());
                }

                match parse_command(&line) {
                    Ok(Command::Quit) => return Ok(()),
                    Ok(Command::Place(pos)) => {
                        if let Err(e) = game.place_player_mark(pos) {
                            writeln!(output, "{}", e)?;
                        }
                    }
                    Err(e) => writeln!(output, "{}", e)?,
                }
            }
            TurnOwner::GameOver => {
                writeln!(output, "\n{}", render_board(game.board()))?;
                if let Some(winning_line) = check_win_with_line(game.board()) {
                    writeln!(
                        output,
                        "{} wins from {} to {}",
                        winning_line.mark, winning_line.start, winning_line.end
                    )?;
                }
                writeln!(output, "{}", game.outcome().banner())?;
                log!("Game over: {:?}", game.outcome());

                loop {
                    write!(output, "Press Enter to play again, q to quit: ")?;
                    output.flush()?;

                    line.clear();
                    if input.read_line(&mut line)? == 0 {
                        return Ok(());
                    }
                    match parse_rematch(&line) {
                        Some(true) => break,
                        Some(false) => return Ok(()),
                        None => {}
                    }
                }

                if let Ok(first) = game.restart() {
                    log!("New game, {:?} opens", first);
                }
            }
        }
    }
}

/// `Some(true)` to play again, `Some(false)` to quit, `None` to ask again.
fn parse_rematch(line: &str) -> Option<bool> {
    let line = line.trim();
    if line.is_empty() || line.eq_ignore_ascii_case("y") || line.eq_ignore_ascii_case("yes") {
        Some(true)
    } else if matches!(parse_command(line), Ok(Command::Quit)) {
        Some(false)
    } else {
        None
    }
}
