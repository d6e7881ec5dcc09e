//! Color to luminance reduction.
//!
//! Uses the ITU-R 601-2 luma transform (the same weights the reference
//! imaging library applies when converting to its grayscale mode):
//! `L = 0.299 R + 0.587 G + 0.114 B`.

use crate::buffer::{GrayBuffer, RgbBuffer};

// ITU-R 601-2 weights in 16.16 fixed point. They sum to exactly 65536,
// so the result never leaves 0..=255 and needs no clamp.
const LUMA_R: u32 = 19595;
const LUMA_G: u32 = 38470;
const LUMA_B: u32 = 7471;

// Half a unit in 16.16, added before the shift so truncation rounds to
// the nearest integer instead of toward zero.
const ROUND_HALF: u32 = 1 << 15;

/// Reduce an RGB image to 8-bit perceptual luminance.
///
/// Each output value is the weighted sum of the pixel's channels, rounded
/// to the nearest integer. Pure function: the input buffer is untouched
/// and a fresh gray buffer of the same dimensions is returned.
pub fn to_gray(image: &RgbBuffer) -> GrayBuffer {
    let mut gray = Vec::with_capacity(image.width() * image.height());
    for rgb in image.data().chunks_exact(3) {
        let weighted = LUMA_R * rgb[0] as u32 + LUMA_G * rgb[1] as u32 + LUMA_B * rgb[2] as u32;
        gray.push(((weighted + ROUND_HALF) >> 16) as u8);
    }
    GrayBuffer::from_raw(image.width(), image.height(), gray)
}
