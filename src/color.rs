//! Hex → rgba conversion for circle border colors.

use std::fmt;

/// An rgba color produced from a `#RRGGBB` string.
///
/// Channels that could not be parsed are `None`. They are rendered as `NaN`
/// in CSS form, which render backends treat as an invalid color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RgbaColor {
    pub r: Option<u8>,
    pub g: Option<u8>,
    pub b: Option<u8>,
    pub alpha: f64,
}

impl RgbaColor {
    /// True when all three channels parsed.
    pub fn is_complete(&self) -> bool {
        self.r.is_some() && self.g.is_some() && self.b.is_some()
    }

    /// Normalised floats [0..1], or `None` for a malformed color.
    pub fn to_unit(&self) -> Option<(f64, f64, f64, f64)> {
        Some((
            self.r? as f64 / 255.0,
            self.g? as f64 / 255.0,
            self.b? as f64 / 255.0,
            self.alpha,
        ))
    }

    /// CSS `rgba(r, g, b, a)` string.
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for RgbaColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn css(c: Option<u8>) -> String {
            c.map_or_else(|| "NaN".to_string(), |v| v.to_string())
        }
        write!(
            f,
            "rgba({}, {}, {}, {})",
            css(self.r),
            css(self.g),
            css(self.b),
            self.alpha
        )
    }
}

/// Convert `#RRGGBB` into an rgba color with a fixed alpha.
///
/// The first character is skipped whatever it is and the next six are read as
/// three hex pairs. A pair cut short by the end of the string is read as far
/// as it goes, and each pair is read up to its first non-hex digit, so `#abc`
/// gives `rgba(171, 12, NaN, a)`. Never fails: a pair with no leading hex
/// digit yields a missing channel.
pub fn hex_to_rgba(hex: &str, alpha: f64) -> RgbaColor {
    RgbaColor {
        r: channel(hex, 1),
        g: channel(hex, 3),
        b: channel(hex, 5),
        alpha,
    }
}

fn channel(hex: &str, start: usize) -> Option<u8> {
    let end = (start + 2).min(hex.len());
    let pair = hex.get(start.min(end)..end)?;
    let digits = match pair.find(|c: char| !c.is_ascii_hexdigit()) {
        Some(i) => &pair[..i],
        None => pair,
    };
    if digits.is_empty() {
        return None;
    }
    u8::from_str_radix(digits, 16).ok()
}
