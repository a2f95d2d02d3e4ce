//! Approximate CIE 1931 coordinates of hex and RGB colors.
//!
//! - [`hex_to_cie1931`]
//! - [`rgb_to_cie1931`]
//! - [`get_cie_color`]
//!
//! Colors of the [`rgb`] crate implement [`CieColor`].
//!
//! Channels are linearized with the sRGB transfer function, then
//! projected with the X and Y rows of the sRGB → XYZ matrix.  The
//! result is *not* divided by X + Y + Z, so it only approximates the
//! chromaticity; use [`Xyz::chromaticity`] for the normalized value.
//!
//! Malformed hex strings are not rejected by these functions: the
//! unreadable channels become NaN and so do the coordinates.  Use
//! [`try_hex_to_cie1931`] to get a [`ParseHexError`] instead.

use rand::Rng;
use rgb::{RGB, RGB8, RGBA8};

pub mod error;
pub mod hex;
pub mod srgb;
pub mod xyz;

pub use error::{ParseHexError, Result};
use hex::{hex_to_rgb, parse_hex};
use srgb::{linearize, linearize_u8};
pub use xyz::{rgb_to_xyz, Xyz};

/// Project linear sRGB onto the (unnormalized) x, y pair.
#[inline]
fn linear_to_cie1931(r: f64, g: f64, b: f64) -> [f64; 2] {
    let x = r * 0.4124 + g * 0.3576 + b * 0.1805;
    let y = r * 0.2126 + g * 0.7152 + b * 0.0722;
    [x, y]
}

/// Approximate CIE 1931 `[x, y]` of the color with red, green and
/// blue in \[0, 255\].
///
/// Values are not clamped.
///
/// # Example
///
/// ```
/// use cie_color::rgb_to_cie1931;
/// assert_eq!(rgb_to_cie1931(0., 0., 0.), [0., 0.]);
/// let [x, y] = rgb_to_cie1931(255., 255., 255.);
/// assert!((x - 0.9505).abs() < 1e-6 && (y - 1.).abs() < 1e-6);
/// ```
pub fn rgb_to_cie1931(red: f64, green: f64, blue: f64) -> [f64; 2] {
    linear_to_cie1931(linearize(red), linearize(green), linearize(blue))
}

/// Approximate CIE 1931 `[x, y]` of a 6-digit hex color such as
/// `"FF8000"` (no leading `#`).
///
/// Channels that cannot be read make the result NaN.
pub fn hex_to_cie1931(hex: &str) -> [f64; 2] {
    let RGB { r, g, b } = hex_to_rgb(hex);
    rgb_to_cie1931(r, g, b)
}

/// Same as [`hex_to_cie1931`] but `hex` must be `rrggbb` or
/// `#rrggbb`.
///
/// # Example
///
/// ```
/// use cie_color::{hex_to_cie1931, try_hex_to_cie1931, ParseHexError};
/// assert_eq!(try_hex_to_cie1931("#00ff00"), Ok(hex_to_cie1931("00ff00")));
/// assert_eq!(try_hex_to_cie1931("#0f0"), Err(ParseHexError::InvalidLength(3)));
/// ```
pub fn try_hex_to_cie1931(hex: &str) -> Result<[f64; 2]> {
    Ok(parse_hex(hex)?.cie1931())
}

/// A color whose channels are uniformly drawn in \[0, 255\].
pub fn random_rgb() -> RGB8 {
    let mut rng = rand::thread_rng();
    RGB8 { r: rng.gen_range(0 ..= 255),
           g: rng.gen_range(0 ..= 255),
           b: rng.gen_range(0 ..= 255) }
}

/// Approximate CIE 1931 `[x, y]` of `hex_color`, or of a random color
/// if `hex_color` is `None` or empty.
///
/// # Example
///
/// ```
/// use cie_color::{get_cie_color, hex_to_cie1931};
/// assert_eq!(get_cie_color(Some("00FF00")), hex_to_cie1931("00FF00"));
/// let [x, y] = get_cie_color(None);
/// assert!(x.is_finite() && y.is_finite());
/// ```
pub fn get_cie_color(hex_color: Option<&str>) -> [f64; 2] {
    match hex_color {
        Some(hex) if !hex.is_empty() => hex_to_cie1931(hex),
        _ => {
            let c = random_rgb();
            log::trace!("no hex color given, using random {c:?}");
            rgb_to_cie1931(c.r as f64, c.g as f64, c.b as f64)
        }
    }
}

/// Colors that can be placed in the CIE 1931 diagram.
pub trait CieColor {
    /// Return the red, green and blue components of the color (in
    /// \[0, 255\]).
    fn channels(&self) -> RGB<f64>;

    /// Approximate CIE 1931 `[x, y]`, see [`rgb_to_cie1931`].
    ///
    /// # Example
    ///
    /// ```
    /// use rgb::RGB8;
    /// use cie_color::{CieColor, rgb_to_cie1931};
    /// let orange = RGB8::new(255, 128, 0);
    /// assert_eq!(orange.cie1931(), rgb_to_cie1931(255., 128., 0.));
    /// ```
    fn cie1931(&self) -> [f64; 2] {
        let RGB { r, g, b } = self.channels();
        rgb_to_cie1931(r, g, b)
    }

    /// XYZ tristimulus values of the color.
    fn xyz(&self) -> Xyz {
        let RGB { r, g, b } = self.channels();
        rgb_to_xyz(r, g, b)
    }
}

impl CieColor for RGB<f64> {
    #[inline]
    fn channels(&self) -> RGB<f64> { *self }
}

impl CieColor for RGB8 {
    #[inline]
    fn channels(&self) -> RGB<f64> {
        RGB { r: self.r as f64, g: self.g as f64, b: self.b as f64 }
    }

    #[inline]
    fn cie1931(&self) -> [f64; 2] {
        linear_to_cie1931(linearize_u8(self.r), linearize_u8(self.g),
                          linearize_u8(self.b))
    }
}

/// The alpha channel is ignored.
impl CieColor for RGBA8 {
    #[inline]
    fn channels(&self) -> RGB<f64> {
        RGB { r: self.r as f64, g: self.g as f64, b: self.b as f64 }
    }

    #[inline]
    fn cie1931(&self) -> [f64; 2] { RGB8::new(self.r, self.g, self.b).cie1931() }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn black_and_white() {
        assert_eq!(rgb_to_cie1931(0., 0., 0.), [0., 0.]);
        let [x, y] = rgb_to_cie1931(255., 255., 255.);
        assert!((x - 0.9505).abs() <= 1e-6, "{} ≉ 0.9505", x);
        assert!((y - 1.).abs() <= 1e-6, "{} ≉ 1", y);
    }

    #[test]
    fn hex_matches_rgb() {
        assert_eq!(hex_to_cie1931("FF0000"), rgb_to_cie1931(255., 0., 0.));
        assert_eq!(hex_to_cie1931("1e293b"), rgb_to_cie1931(30., 41., 59.));
    }

    #[test]
    fn table_path_is_exact() {
        for v in 0 ..= 255u8 {
            let c = RGB8::new(v, 255 - v, v / 2);
            let [x0, y0] = c.cie1931();
            let [x1, y1] = c.channels().cie1931();
            assert_eq!((x0.to_bits(), y0.to_bits()), (x1.to_bits(), y1.to_bits()));
        }
    }

    #[test]
    fn alpha_ignored() {
        let c = RGBA8::new(10, 200, 30, 0);
        assert_eq!(c.cie1931(), RGB8::new(10, 200, 30).cie1931());
        assert_eq!(c.xyz(), rgb_to_xyz(10., 200., 30.));
    }

    #[test]
    fn empty_is_random() {
        for _ in 0 .. 100 {
            let [x, y] = get_cie_color(Some(""));
            assert!((0. ..= 0.9505 + 1e-9).contains(&x), "x = {}", x);
            assert!((0. ..= 1. + 1e-9).contains(&y), "y = {}", y);
        }
    }

    #[test]
    fn malformed_is_nan() {
        let [x, y] = get_cie_color(Some("ZZ0000"));
        assert!(x.is_nan() && y.is_nan());
    }
}
