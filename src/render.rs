//! Palette output and terminal diagnostics.
//!
//! Palette lines go to stdout in the `key #hex` form terminal configs
//! include directly. `--preview` adds aligned keys and a color swatch.
//! Diagnostics go to stderr.

use std::io::{self, Write};

use crossterm::style::{Color as TermColor, Stylize};

use crate::color::Color;
use crate::palette::ResolvedColor;

const LABEL_ERROR: &str = "error:";
const LABEL_FATAL: &str = "fatal:";
/// Blank cells painted with the resolved color in preview mode.
const SWATCH: &str = "      ";
/// Width of the key column in preview mode.
const PREVIEW_KEY_WIDTH: usize = 22;

/// Plain config lines or a human-oriented preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputStyle {
    Plain,
    Preview,
}

/// Writes palette output and diagnostics.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    color: bool,
}

impl Renderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Write every resolved color in order.
    pub fn palette<W: Write>(
        &self,
        out: &mut W,
        resolved: &[ResolvedColor<'_>],
        style: OutputStyle,
    ) -> io::Result<()> {
        for entry in resolved {
            match style {
                OutputStyle::Plain => writeln!(out, "{}", palette_line(entry))?,
                OutputStyle::Preview => writeln!(out, "{}", self.preview_line(entry))?,
            }
        }
        out.flush()
    }

    fn preview_line(&self, entry: &ResolvedColor<'_>) -> String {
        let key = format!("{:<width$}", entry.output_key, width = PREVIEW_KEY_WIDTH);
        let hex = entry.color.to_hex_string();
        if self.color {
            let swatch = SWATCH.on(term_color(entry.color));
            format!("{swatch} {key} {hex}")
        } else {
            format!("{key} {hex}")
        }
    }

    /// Print a reported error (to stderr).
    pub fn error(&self, msg: &str) {
        eprintln!("{}", self.labelled(LABEL_ERROR, TermColor::Red, msg));
    }

    /// Print a data-integrity failure (to stderr).
    pub fn fatal(&self, msg: &str) {
        eprintln!("{}", self.labelled(LABEL_FATAL, TermColor::DarkRed, msg));
    }

    fn labelled(&self, label: &str, tint: TermColor, msg: &str) -> String {
        if self.color {
            format!("{} {msg}", label.with(tint).bold())
        } else {
            format!("{label} {msg}")
        }
    }
}

/// `key #hex` line for one resolved color.
pub fn palette_line(entry: &ResolvedColor<'_>) -> String {
    format!("{} {}", entry.output_key, entry.color.to_hex_string())
}

fn term_color(color: Color) -> TermColor {
    let [r, g, b, _] = color.to_rgba8();
    TermColor::Rgb { r, g, b }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<ResolvedColor<'static>> {
        vec![
            ResolvedColor {
                output_key: "foreground",
                color: Color::from_rgba8(0xd4, 0xd4, 0xd4, 0xff),
            },
            ResolvedColor {
                output_key: "color1",
                color: Color::from_rgba8(0xff, 0x00, 0x00, 0xff),
            },
        ]
    }

    fn render(renderer: Renderer, style: OutputStyle) -> String {
        let mut out = Vec::new();
        renderer
            .palette(&mut out, &sample(), style)
            .expect("write to vec");
        String::from_utf8(out).expect("utf8")
    }

    #[test]
    fn plain_output_is_key_space_hex() {
        let text = render(Renderer::new(true), OutputStyle::Plain);
        assert_eq!(text, "foreground #d4d4d4\ncolor1 #ff0000\n");
    }

    #[test]
    fn plain_output_ignores_color_setting() {
        assert_eq!(
            render(Renderer::new(true), OutputStyle::Plain),
            render(Renderer::new(false), OutputStyle::Plain)
        );
    }

    #[test]
    fn preview_without_color_aligns_keys() {
        let text = render(Renderer::new(false), OutputStyle::Preview);
        let first = text.lines().next().expect("line");
        assert_eq!(first, format!("{:<22} #d4d4d4", "foreground"));
        assert!(!text.contains('\u{1b}'));
    }

    #[test]
    fn preview_with_color_paints_swatch() {
        let text = render(Renderer::new(true), OutputStyle::Preview);
        assert!(text.contains("#ff0000"));
        // crossterm suppresses escapes under NO_COLOR.
        if std::env::var_os("NO_COLOR").is_none() {
            assert!(text.contains('\u{1b}'), "expected ANSI escapes: {text:?}");
        }
    }

    #[test]
    fn term_color_drops_alpha() {
        assert_eq!(
            term_color(Color::new(1.0, 0.0, 0.0, 0.5)),
            TermColor::Rgb { r: 255, g: 0, b: 0 }
        );
    }
}
