use serde::{Deserialize, Serialize};

use crate::config::Validate;
use crate::tictactoe::SearchMode;

/// Session settings chosen once before the first game.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct GameConfig {
    #[serde(default)]
    pub mode: SearchMode,
    #[serde(default)]
    pub computer_first: bool,
    /// Fixed seed for random play. A fresh seed is drawn when absent.
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub log_prefix: Option<String>,
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        if let Some(prefix) = &self.log_prefix {
            if prefix.trim().is_empty() {
                return Err("log_prefix must not be blank".to_string());
            }
            if prefix.contains('\n') {
                return Err("log_prefix must be a single line".to_string());
            }
        }
        Ok(())
    }
}
