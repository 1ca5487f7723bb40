use std::path::{Path, PathBuf};

use tictactoe_common::GameConfig;
use tictactoe_common::config::{ConfigManager, FileContentConfigProvider, YamlConfigSerializer};
use tictactoe_common::tictactoe::SearchMode;

const CONFIG_FILE_NAME: &str = "tictactoe_config.yaml";

pub type GameConfigManager =
    ConfigManager<FileContentConfigProvider, GameConfig, YamlConfigSerializer>;

fn get_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn get_config_manager(path: Option<&Path>) -> GameConfigManager {
    match path {
        Some(path) => ConfigManager::from_yaml_file(path),
        None => ConfigManager::from_yaml_file(get_config_path()),
    }
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    pub mode: Option<SearchMode>,
    /// `Some` when `--computer` or `--player-first` was given.
    pub computer_first: Option<bool>,
    pub seed: Option<u64>,
    pub log_prefix: Option<String>,
}

pub fn apply_overrides(config: GameConfig, overrides: ConfigOverrides) -> GameConfig {
    GameConfig {
        mode: overrides.mode.unwrap_or(config.mode),
        computer_first: overrides.computer_first.unwrap_or(config.computer_first),
        seed: overrides.seed.or(config.seed),
        log_prefix: overrides.log_prefix.or(config.log_prefix),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_file_values() {
        let file_config = GameConfig {
            mode: SearchMode::Minimax,
            computer_first: false,
            seed: Some(1),
            log_prefix: None,
        };
        let overrides = ConfigOverrides {
            mode: Some(SearchMode::Negamax),
            computer_first: Some(true),
            seed: None,
            log_prefix: Some("Game".to_string()),
        };

        let merged = apply_overrides(file_config, overrides);
        assert_eq!(merged.mode, SearchMode::Negamax);
        assert!(merged.computer_first);
        assert_eq!(merged.seed, Some(1));
        assert_eq!(merged.log_prefix.as_deref(), Some("Game"));
    }

    #[test]
    fn test_player_first_flag_overrides_computer_first_in_file() {
        let file_config = GameConfig {
            computer_first: true,
            ..GameConfig::default()
        };
        let overrides = ConfigOverrides {
            computer_first: Some(false),
            ..ConfigOverrides::default()
        };

        let merged = apply_overrides(file_config, overrides);
        assert!(!merged.computer_first);
    }

    #[test]
    fn test_no_flags_keep_file_values() {
        let file_config = GameConfig {
            mode: SearchMode::Random,
            computer_first: true,
            seed: Some(8),
            log_prefix: None,
        };
        let merged = apply_overrides(file_config.clone(), ConfigOverrides::default());
        assert_eq!(merged, file_config);
    }

    #[test]
    fn test_explicit_config_path_is_used() {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_tictactoe_client_config_{}.yaml", random_number));
        std::fs::write(&path, "mode: negamax\ncomputer_first: true\n").unwrap();

        let config = get_config_manager(Some(path.as_path())).get_config().unwrap();
        assert_eq!(config.mode, SearchMode::Negamax);
        assert!(config.computer_first);

        let _ = std::fs::remove_file(path);
    }
}
