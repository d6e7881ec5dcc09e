//! Image fixtures for integration tests.

use std::io::Cursor;

/// Encode raw interleaved RGB pixels as a PNG.
pub fn rgb_png(width: u32, height: u32, data: &[u8]) -> Vec<u8> {
    assert_eq!(data.len() as u32, width * height * 3);

    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header().expect("PNG header");
        writer.write_image_data(data).expect("PNG data");
    }
    buf.into_inner()
}

/// A solid-color RGB PNG.
pub fn solid_png(width: u32, height: u32, rgb: [u8; 3]) -> Vec<u8> {
    let mut data = Vec::with_capacity((width * height * 3) as usize);
    for _ in 0..width * height {
        data.extend_from_slice(&rgb);
    }
    rgb_png(width, height, &data)
}

/// A horizontal black-to-white gradient PNG.
pub fn gradient_png(width: u32, height: u32) -> Vec<u8> {
    let mut data = Vec::with_capacity((width * height * 3) as usize);
    for _ in 0..height {
        for x in 0..width {
            let v = (x * 255 / (width - 1).max(1)) as u8;
            data.extend_from_slice(&[v, v, v]);
        }
    }
    rgb_png(width, height, &data)
}
