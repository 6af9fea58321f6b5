//! Game configuration.
//!
//! A `GameConfig` is fixed for the lifetime of one game. It can be built
//! from defaults, deserialized from JSON, or assembled from the host's
//! `setoption` name/value pairs.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::board::{Role, DEFAULT_GRID_SIZE, MAX_GRID_SIZE};

/// Default number of rounds the evader must survive.
pub const DEFAULT_ROUND_LIMIT: u32 = 11;

/// Errors that can occur while building or validating a configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("grid size must be an odd number between 3 and 99, got {0}")]
    InvalidGridSize(i32),

    #[error("round limit must be at least 1")]
    InvalidRoundLimit,

    #[error("searcher stride must be 1 or 2, got {0}")]
    InvalidStride(u8),

    #[error("unknown option: '{0}'")]
    UnknownOption(String),

    #[error("invalid value '{value}' for option '{name}'")]
    InvalidValue { name: String, value: String },

    #[error("malformed config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Who drives the evader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Controller {
    Human,
    Computer,
}

/// Which strides a searcher move may cover.
///
/// `Hop` allows only stride-2 moves over one intermediate cell. `Step` is
/// the fine-grained repositioning rule and additionally allows stride 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum SearcherStride {
    Step,
    Hop,
}

impl SearcherStride {
    /// Returns true if an orthogonal move of `stride` cells is permitted.
    pub const fn allows(self, stride: i32) -> bool {
        match self {
            SearcherStride::Step => stride == 1 || stride == 2,
            SearcherStride::Hop => stride == 2,
        }
    }

    /// The strides to try when enumerating moves.
    pub const fn strides(self) -> &'static [i32] {
        match self {
            SearcherStride::Step => &[1, 2],
            SearcherStride::Hop => &[2],
        }
    }
}

impl TryFrom<u8> for SearcherStride {
    type Error = ConfigError;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            1 => Ok(SearcherStride::Step),
            2 => Ok(SearcherStride::Hop),
            other => Err(ConfigError::InvalidStride(other)),
        }
    }
}

impl From<SearcherStride> for u8 {
    fn from(s: SearcherStride) -> u8 {
        match s {
            SearcherStride::Step => 1,
            SearcherStride::Hop => 2,
        }
    }
}

/// Whether searcher units must be placed in index order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlacementOrder {
    Sequential,
    Free,
}

/// Start-of-game parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub evader_controller: Controller,
    /// Role holding the first turn. `Searchers` opens with unit placement.
    pub first_mover: Role,
    pub searcher_stride: SearcherStride,
    pub placement_order: PlacementOrder,
    pub grid_size: i32,
    pub round_limit: u32,
    /// Seed for the computer evader. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            evader_controller: Controller::Human,
            first_mover: Role::Searchers,
            searcher_stride: SearcherStride::Hop,
            placement_order: PlacementOrder::Sequential,
            grid_size: DEFAULT_GRID_SIZE,
            round_limit: DEFAULT_ROUND_LIMIT,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Checks the numeric parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(3..=MAX_GRID_SIZE).contains(&self.grid_size) || self.grid_size % 2 == 0 {
            return Err(ConfigError::InvalidGridSize(self.grid_size));
        }
        if self.round_limit == 0 {
            return Err(ConfigError::InvalidRoundLimit);
        }
        Ok(())
    }

    /// Parses and validates a JSON config. Missing fields take defaults.
    pub fn from_json(s: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Builds a config from host option pairs, starting from defaults.
    ///
    /// Host-only options (`RevealDelay`) are skipped.
    pub fn from_options(options: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let mut config = GameConfig::default();
        for (name, value) in options {
            config.apply_option(name, value)?;
        }
        config.validate()?;
        Ok(config)
    }

    fn apply_option(&mut self, name: &str, value: &str) -> Result<(), ConfigError> {
        let invalid = || ConfigError::InvalidValue {
            name: name.to_string(),
            value: value.to_string(),
        };
        match name {
            "EvaderController" => {
                self.evader_controller = match value {
                    "human" => Controller::Human,
                    "computer" => Controller::Computer,
                    _ => return Err(invalid()),
                };
            }
            "FirstMover" => {
                self.first_mover = Role::from_name(value).ok_or_else(invalid)?;
            }
            "SearcherStride" => {
                let raw: u8 = value.parse().map_err(|_| invalid())?;
                self.searcher_stride = SearcherStride::try_from(raw)?;
            }
            "PlacementOrder" => {
                self.placement_order = match value {
                    "sequential" => PlacementOrder::Sequential,
                    "free" => PlacementOrder::Free,
                    _ => return Err(invalid()),
                };
            }
            "GridSize" => {
                self.grid_size = value.parse().map_err(|_| invalid())?;
            }
            "RoundLimit" => {
                self.round_limit = value.parse().map_err(|_| invalid())?;
            }
            "Seed" => {
                self.seed = Some(value.parse().map_err(|_| invalid())?);
            }
            "RevealDelay" => {}
            other => return Err(ConfigError::UnknownOption(other.to_string())),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.grid_size, 9);
        assert_eq!(config.round_limit, 11);
        assert_eq!(config.first_mover, Role::Searchers);
    }

    #[test]
    fn rejects_even_tiny_or_oversized_grid() {
        for size in [8, 1, -3, 101, i32::MAX] {
            let config = GameConfig {
                grid_size: size,
                ..GameConfig::default()
            };
            assert!(matches!(config.validate(), Err(ConfigError::InvalidGridSize(_))));
        }
    }

    #[test]
    fn largest_grid_is_accepted() {
        let config = GameConfig {
            grid_size: MAX_GRID_SIZE,
            ..GameConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_zero_round_limit() {
        let config = GameConfig {
            round_limit: 0,
            ..GameConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidRoundLimit)));
    }

    #[test]
    fn stride_rules() {
        assert!(SearcherStride::Hop.allows(2));
        assert!(!SearcherStride::Hop.allows(1));
        assert!(SearcherStride::Step.allows(1));
        assert!(SearcherStride::Step.allows(2));
        assert!(!SearcherStride::Step.allows(3));
    }

    #[test]
    fn json_partial_config_uses_defaults() {
        let json = r#"{
            "evader_controller": "computer",
            "first_mover": "evader",
            "searcher_stride": 1,
            "seed": 7
        }"#;
        let config = GameConfig::from_json(json).unwrap();
        assert_eq!(config.evader_controller, Controller::Computer);
        assert_eq!(config.first_mover, Role::Evader);
        assert_eq!(config.searcher_stride, SearcherStride::Step);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.grid_size, 9);
    }

    #[test]
    fn json_rejects_bad_stride() {
        assert!(GameConfig::from_json(r#"{"searcher_stride":3}"#).is_err());
    }

    #[test]
    fn options_map() {
        let mut options = HashMap::new();
        options.insert("EvaderController".to_string(), "computer".to_string());
        options.insert("SearcherStride".to_string(), "1".to_string());
        options.insert("RoundLimit".to_string(), "5".to_string());
        options.insert("RevealDelay".to_string(), "250".to_string());
        let config = GameConfig::from_options(&options).unwrap();
        assert_eq!(config.evader_controller, Controller::Computer);
        assert_eq!(config.searcher_stride, SearcherStride::Step);
        assert_eq!(config.round_limit, 5);
    }

    #[test]
    fn options_map_rejects_unknown() {
        let mut options = HashMap::new();
        options.insert("Threads".to_string(), "8".to_string());
        assert!(matches!(
            GameConfig::from_options(&options),
            Err(ConfigError::UnknownOption(_))
        ));
    }
}
