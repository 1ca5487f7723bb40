pub mod config;
pub mod logger;
pub mod session_rng;
pub mod settings;
pub mod tictactoe;

pub use session_rng::SessionRng;
pub use settings::GameConfig;
