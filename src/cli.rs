//! CLI argument parsing via clap.

use clap::Parser;

use themeport::build_info;

/// Convert a VS Code color theme into a terminal palette.
#[derive(Debug, Parser)]
#[command(name = "themeport", version, long_version = build_info::LONG_VERSION)]
pub struct Args {
    /// Theme JSON to convert: a local path, a file:// URL, or an http(s) URL.
    pub source: String,

    /// Path to config file (default: ./themeport.toml or ~/.config/themeport/themeport.toml).
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// Print an aligned table with color swatches instead of config lines.
    #[arg(long = "preview")]
    pub preview: bool,

    /// Disable color output.
    #[arg(long = "no-color")]
    pub no_color: bool,
}
