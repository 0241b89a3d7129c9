//! Themeport converts VS Code color themes into terminal palettes.
//!
//! A theme document (local file or http(s) URL) is decoded into its
//! `colors` table, each terminal palette slot is resolved from an ordered
//! list of theme keys, translucent colors are flattened onto the theme
//! background, and the result is written as `key #rrggbb` lines.
//!
//! # Quick start
//!
//! ```no_run
//! use themeport::config::load_config;
//! use themeport::render::{OutputStyle, Renderer};
//!
//! # async fn example() -> Result<(), themeport::error::AppError> {
//! let config = load_config(None)?;
//! let renderer = Renderer::new(config.display.color);
//! let mut stdout = std::io::stdout().lock();
//! themeport::run("dark-plus.json", &config, &renderer, OutputStyle::Plain, &mut stdout).await?;
//! # Ok(())
//! # }
//! ```

pub mod build_info;
pub mod color;
pub mod config;
pub mod error;
pub mod logging;
pub mod palette;
pub mod render;
pub mod source;
#[cfg(test)]
pub mod testsupport;
pub mod theme;

use std::io::Write;

use crate::config::Config;
use crate::error::AppError;
use crate::palette::{resolve_palette, PaletteMapping};
use crate::render::{OutputStyle, Renderer};
use crate::source::{ThemeLoader, ThemeSource};

/// Load the theme at `source`, resolve the terminal palette and write it.
///
/// Nothing is written unless every slot resolves.
pub async fn run<W: Write>(
    source: &str,
    config: &Config,
    renderer: &Renderer,
    style: OutputStyle,
    out: &mut W,
) -> Result<(), AppError> {
    let source = ThemeSource::parse(source)?;
    let loader = ThemeLoader::new(&config.network)?;
    let theme = loader.load(&source).await?;
    let mapping = PaletteMapping::kitty();
    let resolved = resolve_palette(&theme, &mapping)?;
    renderer.palette(out, &resolved, style)?;
    Ok(())
}
