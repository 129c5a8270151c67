//! Application configuration stored in `{data_dir}/config.yaml`.

use std::fs;
use std::path::{Path, PathBuf};

use gridlist_core::EngineConfig;
use serde::{Deserialize, Serialize};

/// Terminal cells are this many layout units wide.
pub const CELL_WIDTH: f32 = 8.0;
/// Terminal cells are this many layout units tall.
pub const CELL_HEIGHT: f32 = 16.0;

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    Io(String),
    Parse(String),
    Serialize(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(msg) => write!(f, "IO error: {}", msg),
            ConfigError::Parse(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::Serialize(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Root of `config.yaml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Milliseconds between list updates
    pub tick_rate_ms: u64,
    pub layout: LayoutConfig,
    pub engine: EngineConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 33,
            layout: LayoutConfig::default(),
            engine: EngineConfig::default(),
        }
    }
}

/// How the demo grid is laid out on screen.
///
/// `spacing` and `padding` are in layout units (see [`CELL_WIDTH`] and
/// [`CELL_HEIGHT`]); `item_rows` is in terminal rows. A held press nudges the
/// cursor only on the padding strip, so a padding of zero disables nudging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub columns: usize,
    pub item_rows: u16,
    pub spacing: f32,
    pub padding: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            columns: 4,
            item_rows: 1,
            spacing: 16.0,
            padding: 16.0,
        }
    }
}

impl LayoutConfig {
    /// Item height in layout units.
    pub fn item_height(&self) -> f32 {
        f32::from(self.item_rows.max(1)) * CELL_HEIGHT
    }
}

impl AppConfig {
    pub fn path(data_dir: &Path) -> PathBuf {
        data_dir.join("config.yaml")
    }

    pub fn load(data_dir: &Path) -> Result<Self, ConfigError> {
        let path = Self::path(data_dir);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| ConfigError::Io(format!("Failed to read config: {}", e)))?;
        serde_saphyr::from_str(&content)
            .map_err(|e| ConfigError::Parse(format!("Failed to parse config: {}", e)))
    }

    /// Load the config, using defaults when it is unreadable.
    pub fn load_or_default(data_dir: &Path) -> Self {
        match Self::load(data_dir) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(%err, "falling back to default config");
                Self::default()
            }
        }
    }

    pub fn save(&self, data_dir: &Path) -> Result<(), ConfigError> {
        fs::create_dir_all(data_dir)
            .map_err(|e| ConfigError::Io(format!("Failed to create data directory: {}", e)))?;
        let yaml = serde_saphyr::to_string(self)
            .map_err(|e| ConfigError::Serialize(format!("Failed to serialize config: {}", e)))?;
        fs::write(Self::path(data_dir), yaml)
            .map_err(|e| ConfigError::Io(format!("Failed to write config: {}", e)))
    }
}
