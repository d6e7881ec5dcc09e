//! Floyd-Steinberg error diffusion to one bit per pixel.
//!
//! Each pixel is thresholded against 128 and the quantization error is
//! distributed to its unvisited neighbors, so the average of the binary
//! output over any neighborhood tracks the average gray input there.
//! This is what separates error diffusion from naive per-pixel
//! thresholding, which flattens all tonal information into hard bands.

use crate::buffer::GrayBuffer;
use crate::output::StippledImage;

/// Quantization threshold: accumulated values at or above this become white.
const THRESHOLD: f32 = 128.0;

/// Floyd-Steinberg diffusion kernel: `(dx, dy, weight)` with weights in
/// sixteenths of the quantization error.
///
/// ```text
///        X   7
///    3   5   1
/// ```
const KERNEL: [(i32, usize, f32); 4] = [
    (1, 0, 7.0),  // east
    (-1, 1, 3.0), // southwest
    (0, 1, 5.0),  // south
    (1, 1, 1.0),  // southeast
];

/// Total divisor for the kernel weights.
const KERNEL_DIVISOR: f32 = 16.0;

/// Rows ahead of the scan the kernel can reach; the error buffer holds
/// one more row than this.
const KERNEL_MAX_DY: usize = 1;

/// Rolling error rows for the diffusion scan.
///
/// Holds only the rows the kernel can reach: `rows[0]` is the row being
/// scanned, `rows[1]` the one below. Allocated when a dither pass starts,
/// dropped when it ends, never visible to callers.
struct ErrorBuffer {
    rows: Vec<Vec<f32>>,
    width: usize,
}

impl ErrorBuffer {
    fn new(width: usize, row_depth: usize) -> Self {
        Self {
            rows: (0..row_depth).map(|_| vec![0.0; width]).collect(),
            width,
        }
    }

    /// Error diffused into column `x` of the current row so far.
    #[inline]
    fn accumulated(&self, x: usize) -> f32 {
        self.rows[0][x]
    }

    /// Add error to a not-yet-visited pixel. Out-of-range targets are
    /// ignored: error falling off the image is dropped, not redistributed.
    #[inline]
    fn add(&mut self, x: usize, row_offset: usize, error: f32) {
        if x < self.width && row_offset < self.rows.len() {
            self.rows[row_offset][x] += error;
        }
    }

    /// Rotate to the next row. The finished row is cleared and becomes
    /// the farthest-ahead row.
    fn advance_row(&mut self) {
        self.rows.rotate_left(1);
        if let Some(last) = self.rows.last_mut() {
            last.fill(0.0);
        }
    }
}

/// Dither a grayscale image to one bit per pixel.
///
/// Pixels are scanned left-to-right, top-to-bottom. For each pixel the
/// accumulated value (original gray plus diffused error) is compared
/// unclamped against the threshold: at or above 128 the output bit is
/// white, below it black. The residual error is spread over the four
/// Floyd-Steinberg neighbors in sixteenths (7 east, 3 southwest, 5 south,
/// 1 southeast); neighbors outside the image are skipped.
///
/// Fully deterministic: the same input always yields bit-identical output.
pub fn dither(gray: &GrayBuffer) -> StippledImage {
    let width = gray.width();
    let height = gray.height();

    let mut output = StippledImage::black(width, height);
    let mut errors = ErrorBuffer::new(width, KERNEL_MAX_DY + 1);

    for y in 0..height {
        for x in 0..width {
            // Accumulated values may transiently leave 0..=255; the
            // threshold comparison is intentionally unclamped.
            let value = gray.get(x, y) as f32 + errors.accumulated(x);

            let white = value >= THRESHOLD;
            if white {
                output.set_white(x, y);
            }
            let error = value - if white { 255.0 } else { 0.0 };

            for (dx, dy, weight) in KERNEL {
                let nx = x as i64 + dx as i64;
                if nx < 0 || nx as usize >= width || y + dy >= height {
                    continue;
                }
                errors.add(nx as usize, dy, error * weight / KERNEL_DIVISOR);
            }
        }
        errors.advance_row();
    }

    output
}
