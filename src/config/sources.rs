//! Config-file source discovery.
//!
//! Source order implements the precedence contract:
//! explicit path > local file > global file > built-in defaults.

use std::path::{Path, PathBuf};

use crate::error::ConfigError;

use super::defaults::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use super::ConfigSource;

/// Read config text from the highest-precedence available source.
pub(super) fn read_config_text_with_sources<FRead, FRoot>(
    path_override: Option<&str>,
    read_file: &FRead,
    config_root: &FRoot,
) -> Result<(String, ConfigSource), ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FRoot: Fn() -> Option<PathBuf>,
{
    // 1) Explicit override path from CLI takes absolute precedence; a missing
    //    file is an error rather than a silent fallback.
    if let Some(p) = path_override {
        let path = PathBuf::from(p);
        let text = read_file(&path)?;
        return Ok((text, ConfigSource::Explicit(path)));
    }

    // 2) Local config in the working directory.
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if let Ok(text) = read_file(&local) {
        return Ok((text, ConfigSource::Local(local)));
    }

    // 3) Global per-user config.
    if let Some(dir) = config_root() {
        let global = dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME);
        if let Ok(text) = read_file(&global) {
            return Ok((text, ConfigSource::Global(global)));
        }
    }

    // 4) Nothing found; caller will parse empty config into defaults.
    Ok((String::new(), ConfigSource::BuiltInDefaults))
}

/// Resolve the base config directory from env/home conventions.
pub fn config_root_dir() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("XDG_CONFIG_HOME") {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return Some(PathBuf::from(trimmed));
        }
    }
    dirs::home_dir()
        .map(|home| home.join(".config"))
        .or_else(dirs::config_dir)
}
