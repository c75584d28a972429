//! Configuration loading and management
//!
//! Handles parsing of `taskflow.toml` configuration files.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::store::{DEFAULT_MAX_DELAY_MS, DEFAULT_MIN_DELAY_MS};

pub const CONFIG_FILE: &str = "taskflow.toml";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Simulated store latency
    #[serde(default)]
    pub latency: LatencyConfig,

    /// Seed fixture overrides
    #[serde(default)]
    pub seed: SeedConfig,

    /// Board view configuration
    #[serde(default)]
    pub board: BoardConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            latency: LatencyConfig::default(),
            seed: SeedConfig::default(),
            board: BoardConfig::default(),
        }
    }
}

/// Simulated latency configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LatencyConfig {
    /// Sleep before every store operation
    #[serde(default = "default_latency_enabled")]
    pub enabled: bool,

    /// Lower bound of the uniform delay, milliseconds
    #[serde(default = "default_min_delay_ms")]
    pub min_ms: u64,

    /// Upper bound of the uniform delay, milliseconds
    #[serde(default = "default_max_delay_ms")]
    pub max_ms: u64,
}

fn default_latency_enabled() -> bool {
    true
}

fn default_min_delay_ms() -> u64 {
    DEFAULT_MIN_DELAY_MS
}

fn default_max_delay_ms() -> u64 {
    DEFAULT_MAX_DELAY_MS
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            enabled: default_latency_enabled(),
            min_ms: default_min_delay_ms(),
            max_ms: default_max_delay_ms(),
        }
    }
}

/// Seed fixture configuration. When a path is unset the embedded fixture is
/// used.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Path to a tasks JSON file replacing the embedded fixture
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tasks: Option<PathBuf>,

    /// Path to a categories JSON file replacing the embedded fixture
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<PathBuf>,
}

/// Board view configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardConfig {
    /// View opened by default: "board" or "today"
    #[serde(default = "default_view")]
    pub default_view: String,
}

fn default_view() -> String {
    "board".to_string()
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            default_view: default_view(),
        }
    }
}

impl Config {
    /// Load configuration from a `taskflow.toml` file
    pub fn load(path: &Path) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a directory, or return defaults
    pub fn load_from_dir(dir: &Path) -> Self {
        let config_path = dir.join(CONFIG_FILE);
        if config_path.exists() {
            Self::load(&config_path).unwrap_or_default()
        } else {
            Self::default()
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> crate::error::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    fn validate(&self) -> crate::error::Result<()> {
        self.latency.validate()?;
        self.board.validate()?;
        Ok(())
    }
}

impl LatencyConfig {
    fn validate(&self) -> crate::error::Result<()> {
        if self.min_ms > self.max_ms {
            return Err(crate::error::Error::InvalidConfig(format!(
                "latency.min_ms ({}) must be <= latency.max_ms ({})",
                self.min_ms, self.max_ms
            )));
        }
        Ok(())
    }

    /// The latency policy this configuration describes.
    pub fn latency(&self) -> crate::store::Latency {
        if self.enabled {
            crate::store::Latency::uniform(self.min_ms, self.max_ms)
        } else {
            crate::store::Latency::none()
        }
    }
}

impl BoardConfig {
    fn validate(&self) -> crate::error::Result<()> {
        match self.default_view.trim() {
            "board" | "today" => Ok(()),
            other => Err(crate::error::Error::InvalidConfig(format!(
                "board.default_view: invalid view '{other}' (expected board|today)"
            ))),
        }
    }

    /// The configured default view as a typed mode.
    pub fn default_view_mode(&self) -> crate::error::Result<crate::view::ViewMode> {
        self.default_view.parse()
    }
}
