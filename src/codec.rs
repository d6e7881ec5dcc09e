//! Image decode and encode collaborators around the conversion pipeline.
//!
//! The pipeline consumes and produces decoded pixel buffers; this module
//! owns the container formats on either side. Decoding accepts the formats
//! the service advertises (JPEG, PNG, BMP, TIFF, WebP) and normalizes
//! everything to RGB, so the pipeline never sees alpha or exotic channel
//! layouts. Encoding always produces PNG.

use std::io::Cursor;

use mono_dither::RgbBuffer;

use crate::error::CodecError;

/// Decode compressed image bytes into an RGB pixel buffer.
///
/// The container format is detected from the byte content, not from any
/// declared MIME type. RGBA, grayscale and palette sources are flattened
/// to plain RGB here.
pub fn decode_rgb(bytes: &[u8]) -> Result<RgbBuffer, CodecError> {
    let decoded = image::load_from_memory(bytes).map_err(|e| CodecError::Decode(e.to_string()))?;
    let rgb = decoded.to_rgb8();
    let width = rgb.width() as usize;
    let height = rgb.height() as usize;
    Ok(RgbBuffer::from_raw(width, height, rgb.into_raw()))
}

/// Encode an RGB pixel buffer as PNG.
///
/// Encodes with fast settings, then re-compresses with oxipng so the
/// response is close to what an optimizing encoder would produce. If
/// optimization fails the fast encode is returned as-is.
pub fn encode_png(image: &RgbBuffer) -> Result<Vec<u8>, CodecError> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder =
            png::Encoder::new(&mut buf, image.width() as u32, image.height() as u32);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::Fast);
        encoder.set_filter(png::FilterType::NoFilter);
        let mut writer = encoder
            .write_header()
            .map_err(|e| CodecError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(image.data())
            .map_err(|e| CodecError::PngEncode(e.to_string()))?;
    }
    let png_bytes = buf.into_inner();

    let optimized = oxipng::optimize_from_memory(
        &png_bytes,
        &oxipng::Options {
            strip: oxipng::StripChunks::Safe,
            optimize_alpha: false,
            ..Default::default()
        },
    )
    .unwrap_or(png_bytes);

    Ok(optimized)
}
