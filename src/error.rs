//! Unified error types for themeport.

use std::fmt;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// ColorParseError
// ---------------------------------------------------------------------------

/// A color string that is not valid CSS color syntax.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorParseError {
    pub message: String,
}

impl ColorParseError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ColorParseError {}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Errors when loading or parsing configuration.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Toml(toml::de::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Toml(e) => write!(f, "toml: {e}"),
            Self::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Toml(e)
    }
}

// ---------------------------------------------------------------------------
// SourceError
// ---------------------------------------------------------------------------

/// Errors while locating, fetching or decoding a theme document.
#[derive(Debug)]
pub enum SourceError {
    /// The source argument is not a usable path or URL.
    InvalidSource(String),
    /// The URL scheme is neither `http`, `https` nor `file`.
    UnsupportedScheme(String),
    /// The local theme file could not be read.
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Network / reqwest-level error.
    Http(reqwest::Error),
    /// Non-2xx status from the theme server.
    Status(u16, String),
    /// The document is not a JSON theme object.
    Decode(serde_json::Error),
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSource(msg) => write!(f, "failed to parse source: {msg}"),
            Self::UnsupportedScheme(scheme) => {
                write!(f, "unsupported source scheme `{scheme}` (expected http, https or file)")
            }
            Self::Open { path, source } => {
                write!(f, "failed to open '{}': {source}", path.display())
            }
            Self::Http(e) => write!(f, "failed to get: {e}"),
            Self::Status(code, body) => write!(f, "failed to get: status {code}: {body}"),
            Self::Decode(e) => write!(f, "failed to decode theme: {e}"),
        }
    }
}

impl std::error::Error for SourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Open { source, .. } => Some(source),
            Self::Http(e) => Some(e),
            Self::Decode(e) => Some(e),
            Self::InvalidSource(_) | Self::UnsupportedScheme(_) | Self::Status(..) => None,
        }
    }
}

impl From<reqwest::Error> for SourceError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e)
    }
}

impl From<serde_json::Error> for SourceError {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(e)
    }
}

// ---------------------------------------------------------------------------
// PaletteError
// ---------------------------------------------------------------------------

/// Errors while resolving palette colors from a loaded theme.
#[derive(Debug)]
pub enum PaletteError {
    /// A theme key holds a value that is not a color.
    InvalidColor {
        key: String,
        value: String,
        source: ColorParseError,
    },
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidColor { key, value, source } => {
                write!(f, "failed to parse {key} = `{value}`: {source}")
            }
        }
    }
}

impl std::error::Error for PaletteError {}

// ---------------------------------------------------------------------------
// AppError (top-level)
// ---------------------------------------------------------------------------

/// Top-level error type for one themeport run.
#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Source(SourceError),
    Palette(PaletteError),
    /// Writing the palette to stdout failed.
    Output(std::io::Error),
}

impl AppError {
    /// Process exit code for this failure.
    ///
    /// Unparseable stored colors exit with 2, everything else with 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) | Self::Source(_) | Self::Output(_) => 1,
            Self::Palette(_) => 2,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Source(e) => write!(f, "{e}"),
            Self::Palette(e) => write!(f, "{e}"),
            Self::Output(e) => write!(f, "failed to write palette: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<ConfigError> for AppError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<SourceError> for AppError {
    fn from(e: SourceError) -> Self {
        Self::Source(e)
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        Self::Output(e)
    }
}

impl From<PaletteError> for AppError {
    fn from(e: PaletteError) -> Self {
        Self::Palette(e)
    }
}
