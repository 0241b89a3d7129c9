//! Candidate resolution, alpha compositing and transform application.

use tracing::debug;

use super::{PaletteEntry, PaletteMapping};
use crate::color::Color;
use crate::error::PaletteError;
use crate::theme::Theme;

/// Nesting limit for backdrop lookups.
///
/// A translucent backdrop is composited over opaque black instead of over
/// itself.
const BACKDROP_DEPTH_LIMIT: usize = 1;

/// One output key with its final color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedColor<'a> {
    pub output_key: &'a str,
    pub color: Color,
}

/// Resolves palette candidates against one theme.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    theme: &'a Theme,
    backdrop: &'a [PaletteEntry],
}

impl<'a> Resolver<'a> {
    pub fn new(theme: &'a Theme, mapping: &'a PaletteMapping) -> Self {
        Self {
            theme,
            backdrop: mapping.background(),
        }
    }

    /// Resolve the first candidate present in the theme.
    ///
    /// Returns `(color, true)` for a hit and `(Color::BLACK, false)` when no
    /// candidate key exists, leaving the default to the consumer. A present
    /// value that does not parse is an error.
    ///
    /// The backdrop candidates themselves always composite over opaque
    /// black, so a resolved background equals the backdrop every other
    /// slot was blended against.
    pub fn resolve(&self, candidates: &[PaletteEntry]) -> Result<(Color, bool), PaletteError> {
        let depth = if candidates == self.backdrop {
            BACKDROP_DEPTH_LIMIT
        } else {
            0
        };
        self.resolve_at_depth(candidates, depth)
    }

    fn resolve_at_depth(
        &self,
        candidates: &[PaletteEntry],
        depth: usize,
    ) -> Result<(Color, bool), PaletteError> {
        for entry in candidates {
            let Some(raw) = self.theme.get(&entry.source_key) else {
                continue;
            };
            let mut color = Color::parse(raw).map_err(|source| PaletteError::InvalidColor {
                key: entry.source_key.clone(),
                value: raw.to_string(),
                source,
            })?;

            if !color.is_opaque() {
                let backdrop = self.backdrop_color(depth)?;
                debug!(
                    key = %entry.source_key,
                    alpha = color.a,
                    backdrop = %backdrop,
                    "compositing translucent color"
                );
                color = composite(color, backdrop);
            }

            let color = entry.apply_transforms(color);
            debug!(key = %entry.source_key, color = %color, "resolved candidate");
            return Ok((color, true));
        }
        Ok((Color::BLACK, false))
    }

    fn backdrop_color(&self, depth: usize) -> Result<Color, PaletteError> {
        if depth >= BACKDROP_DEPTH_LIMIT {
            return Ok(Color::BLACK);
        }
        let (color, _) = self.resolve_at_depth(self.backdrop, depth + 1)?;
        Ok(color)
    }
}

/// Blend a translucent color over an opaque backdrop.
///
/// Green and blue are scaled by the already-blended red channel, not by the
/// foreground alpha. Output must stay identical to palettes generated with
/// this formula.
fn composite(fg: Color, bg: Color) -> Color {
    let remaining = 1.0 - fg.a;
    let r = fg.r * fg.a + bg.r * remaining;
    let g = r * fg.g + bg.g * remaining;
    let b = r * fg.b + bg.b * remaining;
    Color::new(r, g, b, 1.0)
}

/// Resolve every slot of `mapping`, keeping only keys found in the theme.
pub fn resolve_palette<'a>(
    theme: &Theme,
    mapping: &'a PaletteMapping,
) -> Result<Vec<ResolvedColor<'a>>, PaletteError> {
    let resolver = Resolver::new(theme, mapping);
    let mut resolved = Vec::with_capacity(mapping.slots().len());
    for slot in mapping.slots() {
        let (color, found) = resolver.resolve(&slot.candidates)?;
        if found {
            resolved.push(ResolvedColor {
                output_key: &slot.output_key,
                color,
            });
        } else {
            debug!(key = %slot.output_key, "no candidate present; leaving default");
        }
    }
    Ok(resolved)
}
