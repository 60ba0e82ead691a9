//! Game configuration, YAML-loadable.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::category::NUM_CATS;

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid config: {msg}")]
    Invalid { msg: &'static str },
}

/// Rules parameters. Defaults are standard Yahtzee; every field is optional
/// in the YAML file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Rolls allowed per round.
    #[serde(default = "default_rolls_per_round")]
    pub rolls_per_round: u8,
    /// Rounds per game (one commit each).
    #[serde(default = "default_rounds")]
    pub rounds: u8,
    /// Upper-section sum at which the bonus triggers.
    #[serde(default = "default_upper_bonus_threshold")]
    pub upper_bonus_threshold: i32,
    /// One-time bonus points.
    #[serde(default = "default_upper_bonus_points")]
    pub upper_bonus_points: i32,
}

fn default_rolls_per_round() -> u8 {
    3
}

fn default_rounds() -> u8 {
    NUM_CATS as u8
}

fn default_upper_bonus_threshold() -> i32 {
    63
}

fn default_upper_bonus_points() -> i32 {
    35
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rolls_per_round: default_rolls_per_round(),
            rounds: default_rounds(),
            upper_bonus_threshold: default_upper_bonus_threshold(),
            upper_bonus_points: default_upper_bonus_points(),
        }
    }
}

impl GameConfig {
    pub fn load_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        let cfg: GameConfig = serde_yaml::from_str(&text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn to_yaml_string(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rolls_per_round == 0 {
            return Err(ConfigError::Invalid {
                msg: "rolls_per_round must be at least 1",
            });
        }
        if self.rounds == 0 {
            return Err(ConfigError::Invalid {
                msg: "rounds must be at least 1",
            });
        }
        if self.rounds as usize > NUM_CATS {
            return Err(ConfigError::Invalid {
                msg: "rounds cannot exceed the number of categories",
            });
        }
        if self.upper_bonus_threshold < 0 || self.upper_bonus_points < 0 {
            return Err(ConfigError::Invalid {
                msg: "bonus threshold and points must be non-negative",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_standard_yahtzee() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.rolls_per_round, 3);
        assert_eq!(cfg.rounds, 13);
        assert_eq!(cfg.upper_bonus_threshold, 63);
        assert_eq!(cfg.upper_bonus_points, 35);
        cfg.validate().unwrap();
    }

    #[test]
    fn empty_yaml_yields_defaults() {
        let cfg: GameConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(cfg, GameConfig::default());
    }

    #[test]
    fn partial_yaml_overrides_one_field() {
        let cfg: GameConfig = serde_yaml::from_str("rolls_per_round: 2\n").unwrap();
        assert_eq!(cfg.rolls_per_round, 2);
        assert_eq!(cfg.rounds, 13);
    }

    #[test]
    fn yaml_roundtrip() {
        let cfg = GameConfig::default();
        let text = cfg.to_yaml_string().unwrap();
        let back: GameConfig = serde_yaml::from_str(&text).unwrap();
        assert_eq!(back, cfg);
    }

    #[test]
    fn validate_rejects_zero_rolls() {
        let cfg = GameConfig {
            rolls_per_round: 0,
            ..GameConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::Invalid { .. })
        ));
    }

    #[test]
    fn load_path_reads_yaml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game.yaml");
        std::fs::write(&path, "rounds: 5\n").unwrap();
        let cfg = GameConfig::load_path(&path).unwrap();
        assert_eq!(cfg.rounds, 5);
    }
}
