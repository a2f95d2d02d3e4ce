//! sRGB transfer function.

use lazy_static::lazy_static;

/// Convert a gamma-encoded channel value in \[0, 255\] to linear
/// light in \[0, 1\] (IEC 61966-2-1 decoding curve).
///
/// Values outside \[0, 255\] go through the same formula, NaN stays
/// NaN.
#[inline]
pub fn linearize(channel: f64) -> f64 {
    let v = channel / 255.0;
    if v > 0.04045 {
        ((v + 0.055) / 1.055).powf(2.4)
    } else {
        v / 12.92
    }
}

lazy_static! {
    /// [`linearize`] of every 8-bit channel value.
    static ref LINEAR_U8: [f64; 256] = {
        let mut t = [0.; 256];
        for (i, v) in t.iter_mut().enumerate() { *v = linearize(i as f64) }
        t
    };
}

/// Same as [`linearize`] for 8-bit channels, read from a table.
#[inline]
pub fn linearize_u8(channel: u8) -> f64 { LINEAR_U8[channel as usize] }
