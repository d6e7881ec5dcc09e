//! The stippling conversion pipeline.

use crate::buffer::RgbBuffer;
use crate::dither::dither;
use crate::luma::to_gray;

/// Convert an RGB image to a stippled pure black-and-white RGB image.
///
/// Runs the three stages in strict sequence: luminance reduction, then
/// Floyd-Steinberg error diffusion, then channel expansion. Each stage
/// consumes the previous stage's output and allocates its own; nothing
/// is shared between calls, so conversions can run concurrently without
/// coordination.
///
/// The output has the input's dimensions and every pixel is exactly
/// (0, 0, 0) or (255, 255, 255).
pub fn stipple(image: &RgbBuffer) -> RgbBuffer {
    let gray = to_gray(image);
    let stippled = dither(&gray);
    stippled.to_rgb()
}
