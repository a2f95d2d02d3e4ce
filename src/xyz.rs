//! CIE 1931 XYZ tristimulus values of sRGB colors.
//!
//! [`rgb_to_cie1931`](crate::rgb_to_cie1931) stops after the X and Y
//! rows of the sRGB matrix and does not normalize.  [`Xyz`] carries
//! all three rows, so that [`Xyz::chromaticity`] can return proper
//! chromaticity coordinates when those are needed.

use crate::srgb::linearize;

/// CIE 1931 XYZ color (D65 reference white, Y = 1 for sRGB white).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Xyz {
    pub x: f64,
    /// Luminance.
    pub y: f64,
    pub z: f64,
}

impl Xyz {
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self { Self { x, y, z } }

    #[inline]
    pub const fn to_array(&self) -> [f64; 3] { [self.x, self.y, self.z] }

    /// Build from linear sRGB components in \[0, 1\].
    pub fn from_linear(r: f64, g: f64, b: f64) -> Self {
        Self { x: 0.4124 * r + 0.3576 * g + 0.1805 * b,
               y: 0.2126 * r + 0.7152 * g + 0.0722 * b,
               z: 0.0193 * r + 0.1192 * g + 0.9505 * b }
    }

    /// The chromaticity `[X / (X+Y+Z), Y / (X+Y+Z)]`.
    ///
    /// Black has no chromaticity, `[0., 0.]` is returned for it.
    pub fn chromaticity(&self) -> [f64; 2] {
        let sum = self.x + self.y + self.z;
        if sum == 0. { [0., 0.] }
        else { [self.x / sum, self.y / sum] }
    }
}

/// XYZ of the sRGB color with channels in \[0, 255\].
///
/// ```
/// let [x, y] = cie_color::rgb_to_xyz(255., 255., 255.).chromaticity();
/// assert!((x - 0.3127).abs() < 1e-4 && (y - 0.3290).abs() < 1e-4);
/// ```
pub fn rgb_to_xyz(red: f64, green: f64, blue: f64) -> Xyz {
    Xyz::from_linear(linearize(red), linearize(green), linearize(blue))
}
