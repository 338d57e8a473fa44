//! # Configuration
//!
//! Swapquest reads an optional TOML file. Every section has defaults, so an empty
//! file (or no file at all) yields the stock sample session.
//!
//! ## Sections
//!
//! - [`AppConfig`] - display name and greeting
//! - [`ProgressionConfig`] - starting level/xp, xp per level, level-up policy
//! - [`DelayConfig`] - simulated network waits and the prediction tick
//! - [`SwapConfig`] - xp rate and default slippage
//! - [`LoggingConfig`] - log level and optional log file
//!
//! ## Usage
//!
//! ```rust,no_run
//! use swapquest::config::Config;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load("swapquest.toml").await?;
//!     println!("XP per level: {}", config.progression.max_xp);
//!     Config::create_default("swapquest.example.toml").await?;
//!     Ok(())
//! }
//! ```
//!
//! ## File format
//!
//! ```toml
//! [progression]
//! starting_xp = 150
//! max_xp = 500
//! level_up_policy = "single_step"   # or "multi_step"
//!
//! [delays]
//! swap_submit_ms = 1500
//! ```

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tokio::fs;

use crate::game::seed;
use crate::game::LevelUpPolicy;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub app: AppConfig,
    #[serde(default)]
    pub progression: ProgressionConfig,
    #[serde(default)]
    pub delays: DelayConfig,
    #[serde(default)]
    pub swap: SwapConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub name: String,
    pub greeting: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: "SwapQuest".to_string(),
            greeting: "Swap tokens, earn XP, climb the guild ranks.".to_string(),
        }
    }
}

/// Starting values for a fresh session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressionConfig {
    pub starting_level: u32,
    pub starting_xp: i64,
    /// XP needed per level. Values below 1 are treated as 1.
    pub max_xp: i64,
    pub starting_swaps: u64,
    pub starting_volume: f64,
    /// Guild shown on the profile and leaderboard. An empty string means none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guild: Option<String>,
    pub level_up_policy: LevelUpPolicy,
}

impl Default for ProgressionConfig {
    fn default() -> Self {
        Self {
            starting_level: seed::DEFAULT_LEVEL,
            starting_xp: seed::DEFAULT_XP,
            max_xp: seed::DEFAULT_MAX_XP,
            starting_swaps: seed::DEFAULT_TOTAL_SWAPS,
            starting_volume: seed::DEFAULT_TOTAL_VOLUME,
            guild: Some(seed::DEFAULT_GUILD.to_string()),
            level_up_policy: LevelUpPolicy::SingleStep,
        }
    }
}

/// Simulated waits, in milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DelayConfig {
    pub wallet_connect_ms: u64,
    pub swap_submit_ms: u64,
    pub lootbox_open_ms: u64,
    /// Countdown tick for prediction rounds. 0 freezes the countdown.
    pub prediction_tick_ms: u64,
}

impl Default for DelayConfig {
    fn default() -> Self {
        Self {
            wallet_connect_ms: 1000,
            swap_submit_ms: 1500,
            lootbox_open_ms: 2000,
            prediction_tick_ms: 1000,
        }
    }
}

impl DelayConfig {
    pub fn wallet_connect(&self) -> Duration {
        Duration::from_millis(self.wallet_connect_ms)
    }

    pub fn swap_submit(&self) -> Duration {
        Duration::from_millis(self.swap_submit_ms)
    }

    pub fn lootbox_open(&self) -> Duration {
        Duration::from_millis(self.lootbox_open_ms)
    }

    pub fn prediction_tick(&self) -> Option<Duration> {
        (self.prediction_tick_ms > 0).then(|| Duration::from_millis(self.prediction_tick_ms))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SwapConfig {
    /// XP per USD swapped.
    pub xp_rate: f64,
    /// One of 0.1, 0.5, 1.0, 3.0 (percent). Anything else falls back to 0.5.
    pub default_slippage: String,
}

impl Default for SwapConfig {
    fn default() -> Self {
        Self {
            xp_rate: 0.1,
            default_slippage: "0.5".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Parsed level; unknown strings fall back to `Info`.
    pub fn level_filter(&self) -> log::LevelFilter {
        self.level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

impl Config {
    /// Read and parse a TOML file. Keys left out of the file keep their defaults.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .await
            .map_err(|e| anyhow!("Failed to read config file {}: {}", path.display(), e))?;
        Self::from_toml(&text)
            .map_err(|e| anyhow!("Failed to parse config file {}: {}", path.display(), e))
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| anyhow!("Failed to serialize config: {}", e))
    }

    /// Write the stock configuration to `path`, replacing any existing file.
    pub async fn create_default(path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let text = Config::default().to_toml()?;
        fs::write(path, text)
            .await
            .map_err(|e| anyhow!("Failed to write config file {}: {}", path.display(), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.progression.starting_xp, 150);
        assert_eq!(config.progression.max_xp, 500);
        assert_eq!(config.progression.level_up_policy, LevelUpPolicy::SingleStep);
        assert_eq!(config.delays.swap_submit_ms, 1500);
        assert_eq!(config.swap.default_slippage, "0.5");
    }

    #[test]
    fn partial_section_overrides() {
        let config = Config::from_toml(
            "[progression]\nstarting_level = 3\nstarting_xp = 0\nmax_xp = 1000\nstarting_swaps = 0\nstarting_volume = 0.0\nlevel_up_policy = \"multi_step\"\n",
        )
        .unwrap();
        assert_eq!(config.progression.starting_level, 3);
        assert_eq!(config.progression.level_up_policy, LevelUpPolicy::MultiStep);
        assert_eq!(config.progression.guild.as_deref(), Some("Jupiter Traders"));
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn sections_accept_a_subset_of_keys() {
        let config = Config::from_toml(
            "[progression]\nstarting_xp = 150\nmax_xp = 500\nlevel_up_policy = \"single_step\"\n\n[delays]\nswap_submit_ms = 1500\n",
        )
        .unwrap();
        assert_eq!(config.progression.starting_level, 1);
        assert_eq!(config.progression.starting_swaps, 7);
        assert_eq!(config.delays.swap_submit_ms, 1500);
        assert_eq!(config.delays.wallet_connect_ms, 1000);

        let config = Config::from_toml("[swap]\nxp_rate = 0.5\n\n[logging]\nfile = \"sq.log\"\n").unwrap();
        assert_eq!(config.swap.xp_rate, 0.5);
        assert_eq!(config.swap.default_slippage, "0.5");
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.file.as_deref(), Some("sq.log"));
    }

    #[test]
    fn zero_tick_disables_countdown() {
        let mut delays = DelayConfig::default();
        assert_eq!(delays.prediction_tick(), Some(Duration::from_secs(1)));
        delays.prediction_tick_ms = 0;
        assert_eq!(delays.prediction_tick(), None);
    }

    #[test]
    fn logging_level_parses_leniently() {
        let mut logging = LoggingConfig::default();
        logging.level = "debug".into();
        assert_eq!(logging.level_filter(), log::LevelFilter::Debug);
        logging.level = "loud".into();
        assert_eq!(logging.level_filter(), log::LevelFilter::Info);
    }

    #[test]
    fn default_round_trips_through_toml() {
        let text = toml::to_string_pretty(&Config::default()).unwrap();
        let back = Config::from_toml(&text).unwrap();
        assert_eq!(back.progression.guild.as_deref(), Some("Jupiter Traders"));
        assert_eq!(back.delays.lootbox_open_ms, 2000);
    }
}
