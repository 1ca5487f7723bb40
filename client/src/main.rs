mod config;
mod terminal;

use std::path::PathBuf;

use clap::Parser;
use tictactoe_common::config::Validate;
use tictactoe_common::tictactoe::{SearchMode, TicTacToeGameState};
use tictactoe_common::{SessionRng, log, logger};

use config::{ConfigOverrides, apply_overrides, get_config_manager};

#[derive(Parser)]
#[command(name = "tictactoe", about = "Play tic-tac-toe against the computer")]
struct Args {
    /// Let the computer make the first move instead of the player.
    #[arg(short = 'c', long = "computer", conflicts_with = "player_first")]
    computer_first: bool,

    /// Let the player open even if the config file says the computer opens.
    #[arg(long)]
    player_first: bool,

    /// Computer strategy: random, minimax, minimax-ab or negamax.
    #[arg(short, long)]
    mode: Option<SearchMode>,

    /// Seed for random play, to replay a session exactly.
    #[arg(long)]
    seed: Option<u64>,

    /// Config file to read instead of the one next to the executable.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    use_log_prefix: bool,

    /// Write the effective settings back to the config file.
    #[arg(long)]
    save_config: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_manager = get_config_manager(args.config.as_deref());
    let file_config = config_manager.get_config()?;

    let overrides = ConfigOverrides {
        mode: args.mode,
        computer_first: match (args.computer_first, args.player_first) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        },
        seed: args.seed,
        log_prefix: args.use_log_prefix.then(|| "Game".to_string()),
    };
    let config = apply_overrides(file_config, overrides);
    config.validate()?;

    logger::init_logger(config.log_prefix.clone());

    let rng = match config.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!(
        "Mode {}, {} opens, seed {}",
        config.mode,
        if config.computer_first { "computer" } else { "player" },
        rng.seed()
    );

    if args.save_config {
        config_manager.set_config(&config)?;
        log!("Saved settings to the config file");
    }

    let mut game = TicTacToeGameState::new(config.mode, config.computer_first, rng);
    terminal::run_session(&mut game, std::io::stdin().lock(), std::io::stdout())?;

    log!("Session over");
    Ok(())
}
