//! mono-dither: stippling conversion to pure black and white
//!
//! This library converts continuous-tone RGB images into 1-bit
//! black-and-white renditions that approximate tone through spatial dot
//! patterns (classic halftoning). Quantization error from each pixel is
//! diffused to its unvisited neighbors, so the local density of white
//! dots tracks the local brightness of the source.
//!
//! # Pipeline
//!
//! Three stages, run in strict sequence; each is a pure function of its
//! input buffer and allocates a fresh output:
//!
//! ```text
//! RgbBuffer                 (decoded source pixels)
//!     |
//!     v
//! to_gray                   (ITU-R 601-2 luma, rounded to nearest)
//!     |
//!     v
//! GrayBuffer                (8-bit luminance)
//!     |
//!     v
//! dither                    (Floyd-Steinberg error diffusion, threshold 128)
//!     |
//!     v
//! StippledImage             (1 bit per pixel, packed rows)
//!     |
//!     v
//! StippledImage::to_rgb     (bit replicated to all three channels)
//!     |
//!     v
//! RgbBuffer                 (pure black/white pixels, encoder-ready)
//! ```
//!
//! [`stipple`] runs the whole pipeline in one call.
//!
//! # Quick Start
//!
//! ```
//! use mono_dither::{stipple, RgbBuffer};
//!
//! // A 2x2 mid-gray image.
//! let image = RgbBuffer::from_raw(2, 2, vec![128; 12]);
//! let result = stipple(&image);
//!
//! assert_eq!(result.width(), 2);
//! assert_eq!(result.height(), 2);
//! // Every output pixel is pure black or pure white.
//! for pixel in result.data().chunks_exact(3) {
//!     assert!(pixel == [0, 0, 0] || pixel == [255, 255, 255]);
//! }
//! ```
//!
//! # Determinism
//!
//! The pipeline holds no state between calls, uses no randomness, and
//! scans in fixed left-to-right raster order, so identical input buffers
//! always produce bit-identical output. Concurrent conversions need no
//! coordination.

pub mod buffer;
pub mod dither;
pub mod luma;
pub mod output;
pub mod pipeline;


pub use buffer::{GrayBuffer, RgbBuffer};
pub use dither::dither;
pub use luma::to_gray;
pub use output::StippledImage;
pub use pipeline::stipple;
