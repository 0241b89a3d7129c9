//! Normalized RGBA color model and CSS color-string parsing.
//!
//! Theme documents store colors in any CSS syntax editors accept. Everything
//! is parsed into four `f64` channels in `[0, 1]` so blending and inversion
//! work on one representation, and converted back to hex only for output.
//!
//! Supported input forms:
//!
//! - Hex: `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa` (the `#` is optional)
//! - `rgb()` / `rgba()` with numbers or percentages and an optional alpha;
//!   commas, slashes and spaces are interchangeable separators
//! - `hsl()`, `hsv()` and `hwb()` (plus `a` variants) with `deg`, `rad`,
//!   `grad` or `turn` hues and percentage or fractional components
//! - CSS named colors and `transparent`

mod named;

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use crate::error::ColorParseError;

/// Color with normalized red, green, blue and alpha channels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl Color {
    /// Opaque black, the fallback for anything unresolved.
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);

    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Build a color from 8-bit channels.
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(
            f64::from(r) / 255.0,
            f64::from(g) / 255.0,
            f64::from(b) / 255.0,
            f64::from(a) / 255.0,
        )
    }

    /// True when the color needs no compositing.
    pub fn is_opaque(&self) -> bool {
        self.a >= 1.0
    }

    /// Flip every color channel, keeping alpha.
    pub fn inverted(self) -> Self {
        Self {
            r: 1.0 - self.r,
            g: 1.0 - self.g,
            b: 1.0 - self.b,
            a: self.a,
        }
    }

    /// Quantize to 8-bit channels, clamping out-of-range values.
    pub fn to_rgba8(&self) -> [u8; 4] {
        [
            channel_to_u8(self.r),
            channel_to_u8(self.g),
            channel_to_u8(self.b),
            channel_to_u8(self.a),
        ]
    }

    /// Lowercase `#rrggbb`, or `#rrggbbaa` when the color is not opaque.
    pub fn to_hex_string(&self) -> String {
        let [r, g, b, a] = self.to_rgba8();
        if a == u8::MAX {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }

    /// Parse any supported CSS color string.
    pub fn parse(input: &str) -> Result<Self, ColorParseError> {
        let lower = input.trim().to_ascii_lowercase();
        if lower.is_empty() {
            return Err(ColorParseError::new("empty color string"));
        }
        if lower == "transparent" {
            return Ok(Self::new(0.0, 0.0, 0.0, 0.0));
        }
        if let Some(hex) = lower.strip_prefix('#') {
            return parse_hex(hex);
        }
        if let Some(open) = lower.find('(') {
            let name = lower[..open].trim();
            let body = lower[open + 1..].trim_end().strip_suffix(')').ok_or_else(|| {
                ColorParseError::new(format!("missing ')' in {name}() color `{input}`"))
            })?;
            return parse_function(name, body).map(Self::clamped);
        }
        if let Some((r, g, b)) = named::lookup(&lower) {
            return Ok(Self::from_rgba8(r, g, b, u8::MAX));
        }
        // Bare hex digits without the leading `#`.
        if lower.bytes().all(|byte| byte.is_ascii_hexdigit()) {
            return parse_hex(&lower);
        }
        Err(ColorParseError::new(format!("unknown color `{input}`")))
    }

    fn clamped(self) -> Self {
        Self {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
            a: self.a.clamp(0.0, 1.0),
        }
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_string())
    }
}

fn channel_to_u8(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

fn parse_hex(hex: &str) -> Result<Color, ColorParseError> {
    let digits = hex
        .chars()
        .map(|c| c.to_digit(16).map(|d| d as u8))
        .collect::<Option<Vec<u8>>>()
        .ok_or_else(|| ColorParseError::new(format!("invalid hex digit in `#{hex}`")))?;

    let color = match digits.as_slice() {
        &[r, g, b] => Color::from_rgba8(r * 17, g * 17, b * 17, u8::MAX),
        &[r, g, b, a] => Color::from_rgba8(r * 17, g * 17, b * 17, a * 17),
        &[r1, r2, g1, g2, b1, b2] => {
            Color::from_rgba8(r1 * 16 + r2, g1 * 16 + g2, b1 * 16 + b2, u8::MAX)
        }
        &[r1, r2, g1, g2, b1, b2, a1, a2] => Color::from_rgba8(
            r1 * 16 + r2,
            g1 * 16 + g2,
            b1 * 16 + b2,
            a1 * 16 + a2,
        ),
        _ => {
            return Err(ColorParseError::new(format!(
                "invalid hex color length {} in `#{hex}`",
                digits.len()
            )))
        }
    };
    Ok(color)
}

fn parse_function(name: &str, body: &str) -> Result<Color, ColorParseError> {
    let ([x, y, z], alpha) = split_arguments(name, body)?;
    let alpha = match alpha {
        Some(raw) => parse_fraction(raw)?,
        None => 1.0,
    };

    let (r, g, b) = match name {
        "rgb" | "rgba" => (
            parse_rgb_channel(x)?,
            parse_rgb_channel(y)?,
            parse_rgb_channel(z)?,
        ),
        "hsl" | "hsla" => hsl_to_rgb(parse_hue(x)?, parse_fraction(y)?, parse_fraction(z)?),
        "hsv" | "hsva" => hsv_to_rgb(parse_hue(x)?, parse_fraction(y)?, parse_fraction(z)?),
        "hwb" | "hwba" => hwb_to_rgb(parse_hue(x)?, parse_fraction(y)?, parse_fraction(z)?),
        _ => {
            return Err(ColorParseError::new(format!(
                "unsupported color function `{name}()`"
            )))
        }
    };
    Ok(Color::new(r, g, b, alpha))
}

/// Split function arguments into three channels plus optional alpha.
///
/// Commas, slashes and whitespace all separate arguments, so legacy comma
/// syntax, modern `/ alpha` syntax and mixtures of the two are accepted.
fn split_arguments<'a>(
    name: &str,
    body: &'a str,
) -> Result<([&'a str; 3], Option<&'a str>), ColorParseError> {
    let params: Vec<&str> = body
        .split(|c: char| c == ',' || c == '/' || c.is_whitespace())
        .filter(|param| !param.is_empty())
        .collect();

    match params.as_slice() {
        &[x, y, z] => Ok(([x, y, z], None)),
        &[x, y, z, alpha] => Ok(([x, y, z], Some(alpha))),
        other => Err(ColorParseError::new(format!(
            "{name}() expects 3 or 4 arguments, found {}",
            other.len()
        ))),
    }
}

fn parse_number(raw: &str) -> Result<f64, ColorParseError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| ColorParseError::new(format!("invalid number `{raw}`")))
}

fn parse_rgb_channel(raw: &str) -> Result<f64, ColorParseError> {
    match raw.strip_suffix('%') {
        Some(percent) => Ok(parse_number(percent)? / 100.0),
        None => Ok(parse_number(raw)? / 255.0),
    }
}

/// `50%` or `0.5`.
fn parse_fraction(raw: &str) -> Result<f64, ColorParseError> {
    match raw.strip_suffix('%') {
        Some(percent) => Ok(parse_number(percent)? / 100.0),
        None => parse_number(raw),
    }
}

/// Parse a hue angle into degrees in `[0, 360)`.
fn parse_hue(raw: &str) -> Result<f64, ColorParseError> {
    // `grad` must be checked before `rad`.
    let (value, scale) = if let Some(value) = raw.strip_suffix("deg") {
        (value, 1.0)
    } else if let Some(value) = raw.strip_suffix("grad") {
        (value, 0.9)
    } else if let Some(value) = raw.strip_suffix("rad") {
        (value, 180.0 / PI)
    } else if let Some(value) = raw.strip_suffix("turn") {
        (value, 360.0)
    } else {
        (raw, 1.0)
    };
    Ok((parse_number(value)? * scale).rem_euclid(360.0))
}

fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> (f64, f64, f64) {
    let s = saturation.clamp(0.0, 1.0);
    let l = lightness.clamp(0.0, 1.0);
    if s == 0.0 {
        return (l, l, l);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    let h = hue / 360.0;
    (
        hue_to_channel(p, q, h + 1.0 / 3.0),
        hue_to_channel(p, q, h),
        hue_to_channel(p, q, h - 1.0 / 3.0),
    )
}

fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 1.0 / 2.0 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
    }
    p
}

fn hsv_to_rgb(hue: f64, saturation: f64, value: f64) -> (f64, f64, f64) {
    let s = saturation.clamp(0.0, 1.0);
    let v = value.clamp(0.0, 1.0);
    let l = v * (1.0 - s / 2.0);
    let hsl_saturation = if l <= 0.0 || l >= 1.0 {
        0.0
    } else {
        (v - l) / l.min(1.0 - l)
    };
    hsl_to_rgb(hue, hsl_saturation, l)
}

fn hwb_to_rgb(hue: f64, whiteness: f64, blackness: f64) -> (f64, f64, f64) {
    let w = whiteness.clamp(0.0, 1.0);
    let k = blackness.clamp(0.0, 1.0);
    if w + k >= 1.0 {
        let gray = w / (w + k);
        return (gray, gray, gray);
    }
    let (r, g, b) = hsl_to_rgb(hue, 1.0, 0.5);
    let scale = 1.0 - w - k;
    (r * scale + w, g * scale + w, b * scale + w)
}
