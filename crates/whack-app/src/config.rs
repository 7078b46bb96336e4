//! Application configuration, optionally loaded from a TOML file.
//!
//! ```toml
//! store_path = "whack-settings.json"
//! tick_rate_hz = 30
//!
//! [game]
//! seed = 7
//! level_duration_secs = 30
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use whack_core::error::GameError;
use whack_sim::config::GameConfig;

/// Default driver tick rate (Hz).
pub const TICK_RATE: u32 = 30;

/// Default settings file.
pub const DEFAULT_STORE_PATH: &str = "whack-settings.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    /// Where the high score is kept.
    pub store_path: PathBuf,
    /// How often the driver advances the engine.
    pub tick_rate_hz: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            store_path: PathBuf::from(DEFAULT_STORE_PATH),
            tick_rate_hz: TICK_RATE,
        }
    }
}

impl AppConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, GameError> {
        toml::from_str(text).map_err(|e| GameError::Config(e.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self, GameError> {
        let text = fs::read_to_string(path)
            .map_err(|e| GameError::Config(format!("failed to read {}: {e}", path.display())))?;
        Self::from_toml_str(&text)
    }

    /// Wall-clock duration of one driver tick.
    pub fn tick_duration(&self) -> Duration {
        Duration::from_nanos(1_000_000_000 / u64::from(self.tick_rate_hz.max(1)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(AppConfig::from_toml_str("").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = AppConfig::from_toml_str(
            r#"
            tick_rate_hz = 60

            [game]
            seed = 7
            "#,
        )
        .unwrap();
        assert_eq!(config.tick_rate_hz, 60);
        assert_eq!(config.game.seed, Some(7));
        assert_eq!(config.game.level_duration_secs, 30);
        assert_eq!(config.store_path, PathBuf::from(DEFAULT_STORE_PATH));
    }

    #[test]
    fn test_bad_file_is_config_error() {
        let err = AppConfig::from_toml_str("tick_rate_hz = \"fast\"").unwrap_err();
        assert!(matches!(err, GameError::Config(_)));
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let path = std::env::temp_dir().join("whack_test_no_such_config.toml");
        let _ = fs::remove_file(&path);
        assert!(matches!(AppConfig::load(&path), Err(GameError::Config(_))));
    }

    #[test]
    fn test_tick_duration() {
        let config = AppConfig::default();
        assert_eq!(config.tick_duration().as_nanos(), 1_000_000_000u128 / 30);

        let zero = AppConfig {
            tick_rate_hz: 0,
            ..Default::default()
        };
        assert_eq!(zero.tick_duration(), Duration::from_secs(1));
    }
}
