//! Decoded theme document.
//!
//! Only the `colors` object of a VS Code color theme matters here. Values are
//! kept as raw strings; they are parsed lazily when a palette slot needs them.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::error::SourceError;

/// Flat mapping from theme color key to raw color string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Theme {
    colors: BTreeMap<String, String>,
}

#[derive(Deserialize)]
struct ThemeDocument {
    #[serde(default)]
    colors: Option<BTreeMap<String, Value>>,
}

impl Theme {
    /// Decode a theme from JSON text.
    ///
    /// A missing or `null` `colors` object yields an empty theme. Non-string color
    /// values are skipped with a warning.
    pub fn from_json_str(text: &str) -> Result<Self, SourceError> {
        let document: ThemeDocument = serde_json::from_str(text)?;
        let colors = document
            .colors
            .unwrap_or_default()
            .into_iter()
            .filter_map(|(key, value)| match value {
                Value::String(raw) => Some((key, raw)),
                other => {
                    warn!(key = %key, value = %other, "ignoring non-string theme color");
                    None
                }
            })
            .collect();
        Ok(Self { colors })
    }

    /// Raw color string stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.colors.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl FromIterator<(String, String)> for Theme {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            colors: iter.into_iter().collect(),
        }
    }
}

impl<const N: usize> From<[(&str, &str); N]> for Theme {
    fn from(pairs: [(&str, &str); N]) -> Self {
        pairs
            .into_iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_colors_object() {
        let theme = Theme::from_json_str(
            r##"{"name": "Demo", "type": "dark", "colors": {"terminal.ansiRed": "#ff0000"}}"##,
        )
        .expect("decode");
        assert_eq!(theme.get("terminal.ansiRed"), Some("#ff0000"));
        assert_eq!(theme.len(), 1);
    }

    #[test]
    fn missing_colors_object_is_empty() {
        let theme = Theme::from_json_str(r#"{"tokenColors": []}"#).expect("decode");
        assert!(theme.is_empty());
    }

    #[test]
    fn null_colors_object_is_empty() {
        let theme = Theme::from_json_str(r#"{"colors": null}"#).expect("decode");
        assert!(theme.is_empty());
    }

    #[test]
    fn non_string_values_are_skipped() {
        let theme = Theme::from_json_str(
            r##"{"colors": {"a": "#010203", "b": null, "c": 7, "d": {"nested": true}}}"##,
        )
        .expect("decode");
        assert_eq!(theme.len(), 1);
        assert_eq!(theme.get("a"), Some("#010203"));
        assert_eq!(theme.get("b"), None);
    }

    #[test]
    fn rejects_non_json_documents() {
        let err = Theme::from_json_str("colors = 1").expect_err("must fail");
        assert!(matches!(err, SourceError::Decode(_)));
        assert!(Theme::from_json_str("[1, 2]").is_err());
    }

    #[test]
    fn builds_from_pairs() {
        let theme = Theme::from([("editor.background", "#101010")]);
        assert_eq!(theme.get("editor.background"), Some("#101010"));
        assert_eq!(theme.get("terminal.background"), None);
    }
}
