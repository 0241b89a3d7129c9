//! Configuration data model.

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

use super::defaults::DEFAULT_DISPLAY_COLOR;

/// Top-level runtime configuration.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub network: NetworkConfig,
    pub display: DisplayConfig,
}

/// Network policy for fetching remote themes.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct NetworkConfig {
    /// Whole-request timeout. Absent means wait indefinitely.
    pub timeout_secs: Option<u64>,
}

impl NetworkConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

/// Display / rendering preferences.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    /// Color swatches in `--preview` output.
    pub color: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color: DEFAULT_DISPLAY_COLOR,
        }
    }
}

/// Where the effective config text came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Config loaded from explicit `--config` path.
    Explicit(PathBuf),
    /// Config loaded from `./themeport.toml`.
    Local(PathBuf),
    /// Config loaded from the per-user config directory.
    Global(PathBuf),
    /// No file found; built-in defaults were used.
    BuiltInDefaults,
}

impl ConfigSource {
    /// Path of the file that was read, if any.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::Explicit(path) | Self::Local(path) | Self::Global(path) => Some(path),
            Self::BuiltInDefaults => None,
        }
    }
}

/// Configuration payload plus the source it was read from.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub source: ConfigSource,
}
