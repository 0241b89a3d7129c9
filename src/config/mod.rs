//! Configuration loading from TOML files and environment variables.
//!
//! Config is loaded in this order of precedence (highest wins):
//! 1. Environment variables (`THEMEPORT_TIMEOUT_SECS`, `THEMEPORT_COLOR`)
//! 2. TOML file specified via --config CLI flag
//! 3. ./themeport.toml in the current directory
//! 4. $XDG_CONFIG_HOME/themeport/themeport.toml (or
//!    ~/.config/themeport/themeport.toml)
//! 5. Built-in defaults

mod defaults;
mod env;
mod loader;
mod sources;
mod types;

pub use loader::{load_config, load_config_with_source};
pub use sources::config_root_dir;
pub use types::{Config, ConfigSource, DisplayConfig, LoadedConfig, NetworkConfig};
