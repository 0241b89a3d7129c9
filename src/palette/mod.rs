//! Terminal palette mapping and resolution.
//!
//! A [`PaletteMapping`] lists, for every output key of the terminal palette,
//! the theme keys to try in priority order. [`Resolver`] walks those
//! candidates against a loaded [`Theme`](crate::theme::Theme), compositing
//! translucent colors over the theme background and applying per-candidate
//! transforms.

mod mapping;
mod resolve;

use crate::color::Color;

pub use resolve::{resolve_palette, ResolvedColor, Resolver};

/// Pure color transform attached to a palette candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    /// Flip the red, green and blue channels.
    Invert,
}

impl Transform {
    pub fn apply(self, color: Color) -> Color {
        match self {
            Self::Invert => color.inverted(),
        }
    }
}

/// One candidate source for an output color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteEntry {
    pub source_key: String,
    pub transforms: Vec<Transform>,
}

impl PaletteEntry {
    pub fn new(source_key: impl Into<String>) -> Self {
        Self {
            source_key: source_key.into(),
            transforms: Vec::new(),
        }
    }

    /// Append a transform, applied after any already attached.
    pub fn with(mut self, transform: Transform) -> Self {
        self.transforms.push(transform);
        self
    }

    fn apply_transforms(&self, color: Color) -> Color {
        self.transforms
            .iter()
            .fold(color, |color, transform| transform.apply(color))
    }
}

/// Output key plus its candidates in fallback order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteSlot {
    pub output_key: String,
    pub candidates: Vec<PaletteEntry>,
}

impl PaletteSlot {
    pub fn new(output_key: impl Into<String>, candidates: Vec<PaletteEntry>) -> Self {
        Self {
            output_key: output_key.into(),
            candidates,
        }
    }
}

/// Ordered output table plus the backdrop used for alpha compositing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteMapping {
    slots: Vec<PaletteSlot>,
    background: Vec<PaletteEntry>,
}

impl PaletteMapping {
    pub fn new(slots: Vec<PaletteSlot>, background: Vec<PaletteEntry>) -> Self {
        Self { slots, background }
    }

    /// The kitty color table built from VS Code workbench color keys.
    pub fn kitty() -> Self {
        mapping::kitty_mapping()
    }

    /// Output slots in emission order.
    pub fn slots(&self) -> &[PaletteSlot] {
        &self.slots
    }

    /// Candidates for the compositing backdrop.
    pub fn background(&self) -> &[PaletteEntry] {
        &self.background
    }

    /// Look up one slot by output key.
    pub fn slot(&self, output_key: &str) -> Option<&PaletteSlot> {
        self.slots.iter().find(|slot| slot.output_key == output_key)
    }
}
