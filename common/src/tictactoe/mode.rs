use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::search::SearchAlgorithm;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchMode {
    Random,
    Minimax,
    #[default]
    #[serde(rename = "minimax-ab", alias = "alpha-beta")]
    AlphaBeta,
    Negamax,
}

impl SearchMode {
    pub const ALL: [SearchMode; 4] = [
        SearchMode::Random,
        SearchMode::Minimax,
        SearchMode::AlphaBeta,
        SearchMode::Negamax,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SearchMode::Random => "random",
            SearchMode::Minimax => "minimax",
            SearchMode::AlphaBeta => "minimax-ab",
            SearchMode::Negamax => "negamax",
        }
    }

    pub fn code(&self) -> i64 {
        match self {
            SearchMode::Random => 0,
            SearchMode::Minimax => 1,
            SearchMode::Negamax => 2,
            SearchMode::AlphaBeta => 3,
        }
    }

    /// The tree search behind this mode. `None` for random play.
    pub fn algorithm(&self) -> Option<SearchAlgorithm> {
        match self {
            SearchMode::Random => None,
            SearchMode::Minimax => Some(SearchAlgorithm::Minimax),
            SearchMode::AlphaBeta => Some(SearchAlgorithm::AlphaBeta),
            SearchMode::Negamax => Some(SearchAlgorithm::Negamax),
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchModeError {
    UnknownName(String),
    InvalidCode(i64),
}

impl fmt::Display for SearchModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let valid = SearchMode::ALL.map(|mode| mode.name()).join(", ");
        match self {
            SearchModeError::UnknownName(name) => {
                write!(f, "Invalid mode: {} (expected one of: {})", name, valid)
            }
            SearchModeError::InvalidCode(code) => {
                write!(f, "Invalid mode code: {} (expected 0 to 3)", code)
            }
        }
    }
}

impl std::error::Error for SearchModeError {}

impl FromStr for SearchMode {
    type Err = SearchModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "random" => Ok(SearchMode::Random),
            "minimax" => Ok(SearchMode::Minimax),
            "minimax-ab" => Ok(SearchMode::AlphaBeta),
            "negamax" => Ok(SearchMode::Negamax),
            _ => Err(SearchModeError::UnknownName(s.to_string())),
        }
    }
}

impl TryFrom<i64> for SearchMode {
    type Error = SearchModeError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        SearchMode::ALL
            .into_iter()
            .find(|mode| mode.code() == code)
            .ok_or(SearchModeError::InvalidCode(code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("MiniMax".parse::<SearchMode>(), Ok(SearchMode::Minimax));
        assert_eq!("minimax-ab".parse::<SearchMode>(), Ok(SearchMode::AlphaBeta));
        assert_eq!(" NEGAMAX ".parse::<SearchMode>(), Ok(SearchMode::Negamax));
        assert_eq!("random".parse::<SearchMode>(), Ok(SearchMode::Random));
    }

    #[test]
    fn test_parse_unknown_name_fails() {
        let err = "expectimax".parse::<SearchMode>().unwrap_err();
        assert_eq!(err, SearchModeError::UnknownName("expectimax".to_string()));
        assert!(err.to_string().contains("minimax-ab"));
    }

    #[test]
    fn test_codes_round_trip() {
        for mode in SearchMode::ALL {
            assert_eq!(SearchMode::try_from(mode.code()), Ok(mode));
            assert_eq!(mode.name().parse::<SearchMode>(), Ok(mode));
        }
        assert_eq!(SearchMode::try_from(2), Ok(SearchMode::Negamax));
        assert_eq!(SearchMode::try_from(4), Err(SearchModeError::InvalidCode(4)));
        assert_eq!(SearchMode::try_from(-1), Err(SearchModeError::InvalidCode(-1)));
    }

    #[test]
    fn test_default_is_alpha_beta() {
        assert_eq!(SearchMode::default(), SearchMode::AlphaBeta);
    }
}
