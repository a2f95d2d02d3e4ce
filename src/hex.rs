//! Hexadecimal color strings.
//!
//! Two parsers live here.  [`hex_to_rgb`] never fails: a channel it
//! cannot read becomes NaN, and the NaN flows through every later
//! computation.  [`parse_hex`] is strict and reports why a string is
//! not a color.

use rgb::{RGB, RGB8};
use crate::error::{ParseHexError, Result};

/// Read the channel whose two hex digits start at byte `offset` (0 for
/// red, 2 for green, 4 for blue).
///
/// Returns NaN if fewer than two characters are available at `offset`
/// or if one of them is not a hexadecimal digit.
///
/// ```
/// use cie_color::hex::hex_to_channel;
/// assert_eq!(hex_to_channel("12ab34", 2), 171.);
/// assert!(hex_to_channel("12ab34", 5).is_nan());
/// ```
pub fn hex_to_channel(hex: &str, offset: usize) -> f64 {
    match hex.get(offset ..).and_then(|s| s.get(.. 2)) {
        Some(pair) if pair.bytes().all(|b| b.is_ascii_hexdigit()) =>
            u8::from_str_radix(pair, 16).map_or(f64::NAN, f64::from),
        _ => f64::NAN,
    }
}

/// Split a 6-digit hex string (no leading `#`) into its red, green
/// and blue channels, in \[0, 255\].  Malformed channels are NaN.
pub fn hex_to_rgb(hex: &str) -> RGB<f64> {
    let rgb = RGB { r: hex_to_channel(hex, 0),
                    g: hex_to_channel(hex, 2),
                    b: hex_to_channel(hex, 4) };
    if rgb.r.is_nan() || rgb.g.is_nan() || rgb.b.is_nan() {
        log::debug!("malformed hex color {hex:?} parsed as {rgb:?}");
    }
    rgb
}

/// Parse `#rrggbb` or `rrggbb` (case insensitive).
///
/// Error positions count characters of `s`, including the `#`.
///
/// ```
/// use cie_color::hex::parse_hex;
/// use rgb::RGB8;
/// assert_eq!(parse_hex("#1e293b"), Ok(RGB8::new(30, 41, 59)));
/// assert!(parse_hex("#1e29").is_err());
/// ```
pub fn parse_hex(s: &str) -> Result<RGB8> {
    let (skip, digits) = match s.strip_prefix('#') {
        Some(d) => (1, d),
        None => (0, s) };
    if digits.is_empty() { return Err(ParseHexError::Empty) }
    let len = digits.chars().count();
    if len != 6 { return Err(ParseHexError::InvalidLength(len)) }
    if let Some(i) = digits.chars().position(|c| !c.is_ascii_hexdigit()) {
        return Err(ParseHexError::InvalidDigit { position: skip + i })
    }
    // Only ASCII digits remain, byte offsets are character offsets.
    let channel = |i: usize| {
        u8::from_str_radix(&digits[i .. i + 2], 16)
            .map_err(|_| ParseHexError::InvalidDigit { position: skip + i })
    };
    Ok(RGB8 { r: channel(0)?, g: channel(2)?, b: channel(4)? })
}
