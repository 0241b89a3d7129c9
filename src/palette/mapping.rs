//! Built-in kitty palette table.

use super::{PaletteEntry, PaletteMapping, PaletteSlot, Transform};

/// Theme keys tried, in order, for the terminal background.
const BACKGROUND_KEYS: [&str; 2] = ["terminal.background", "editor.background"];

/// `colorN` keys and their ANSI source keys, N = index.
const ANSI_KEYS: [&str; 16] = [
    "terminal.ansiBlack",
    "terminal.ansiRed",
    "terminal.ansiGreen",
    "terminal.ansiYellow",
    "terminal.ansiBlue",
    "terminal.ansiMagenta",
    "terminal.ansiCyan",
    "terminal.ansiWhite",
    "terminal.ansiBrightBlack",
    "terminal.ansiBrightRed",
    "terminal.ansiBrightGreen",
    "terminal.ansiBrightYellow",
    "terminal.ansiBrightBlue",
    "terminal.ansiBrightMagenta",
    "terminal.ansiBrightCyan",
    "terminal.ansiBrightWhite",
];

fn background_entries() -> Vec<PaletteEntry> {
    BACKGROUND_KEYS.iter().copied().map(PaletteEntry::new).collect()
}

fn single(output_key: &str, source_key: &str) -> PaletteSlot {
    PaletteSlot::new(output_key, vec![PaletteEntry::new(source_key)])
}

pub(super) fn kitty_mapping() -> PaletteMapping {
    let mut slots = vec![
        single("foreground", "terminal.foreground"),
        PaletteSlot::new("background", background_entries()),
        // Without an explicit selection foreground, invert the selection background.
        PaletteSlot::new(
            "selection_foreground",
            vec![
                PaletteEntry::new("terminal.selectionForeground"),
                PaletteEntry::new("terminal.selectionBackground").with(Transform::Invert),
            ],
        ),
        single("selection_background", "terminal.selectionBackground"),
        single("cursor", "terminalCursor.foreground"),
        single("cursor_text_color", "editorCursor.foreground"),
    ];
    slots.extend(
        ANSI_KEYS
            .iter()
            .enumerate()
            .map(|(index, source_key)| single(&format!("color{index}"), source_key)),
    );

    PaletteMapping::new(slots, background_entries())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kitty_table_has_fixed_keys_in_order() {
        let mapping = kitty_mapping();
        let keys: Vec<&str> = mapping
            .slots()
            .iter()
            .map(|slot| slot.output_key.as_str())
            .collect();
        let mut expected = vec![
            "foreground".to_string(),
            "background".to_string(),
            "selection_foreground".to_string(),
            "selection_background".to_string(),
            "cursor".to_string(),
            "cursor_text_color".to_string(),
        ];
        expected.extend((0..16).map(|n| format!("color{n}")));
        assert_eq!(keys, expected);
        assert_eq!(keys.len(), 22);
    }

    #[test]
    fn background_slot_matches_backdrop() {
        let mapping = kitty_mapping();
        let slot = mapping.slot("background").expect("background slot");
        assert_eq!(slot.candidates, mapping.background());
    }

    #[test]
    fn selection_foreground_falls_back_to_inverted_background() {
        let mapping = kitty_mapping();
        let slot = mapping.slot("selection_foreground").expect("slot");
        assert_eq!(slot.candidates.len(), 2);
        assert!(slot.candidates[0].transforms.is_empty());
        assert_eq!(slot.candidates[1].source_key, "terminal.selectionBackground");
        assert_eq!(slot.candidates[1].transforms, vec![Transform::Invert]);
    }

    #[test]
    fn ansi_slots_use_matching_source_keys() {
        let mapping = kitty_mapping();
        let red = mapping.slot("color1").expect("color1");
        assert_eq!(red.candidates, vec![PaletteEntry::new("terminal.ansiRed")]);
        let bright_white = mapping.slot("color15").expect("color15");
        assert_eq!(
            bright_white.candidates,
            vec![PaletteEntry::new("terminal.ansiBrightWhite")]
        );
    }
}
