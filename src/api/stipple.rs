use axum::{
    body::Bytes,
    extract::{Multipart, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use utoipa::ToSchema;

use crate::codec;
use crate::error::ApiError;
use crate::server::AppState;

/// Content types accepted for upload.
pub const SUPPORTED_FORMATS: [&str; 6] = [
    "image/jpeg",
    "image/jpg",
    "image/png",
    "image/bmp",
    "image/tiff",
    "image/webp",
];

/// Multipart form for the /stipple endpoint (OpenAPI schema only).
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct StippleForm {
    /// Image file to convert (JPEG, PNG, BMP, TIFF or WebP)
    #[schema(value_type = String, format = Binary)]
    pub file: String,
}

/// Convert an uploaded image to stippled black-and-white art
///
/// Accepts a multipart upload, reduces it to grayscale, applies
/// Floyd-Steinberg dithering to pure black and white, and returns the
/// result as a PNG attachment.
#[utoipa::path(
    post,
    path = "/stipple",
    request_body(content = StippleForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Stippled image", body = Vec<u8>, content_type = "image/png"),
        (status = 400, description = "Unsupported format or invalid image file"),
        (status = 413, description = "Image exceeds the configured pixel limit"),
        (status = 500, description = "Internal error while encoding the result"),
    ),
    tag = "Stipple"
)]
pub async fn handle_stipple(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response, ApiError> {
    let upload = read_file_field(&mut multipart).await?;

    if !SUPPORTED_FORMATS.contains(&upload.content_type.as_str()) {
        tracing::info!(
            content_type = %upload.content_type,
            "Rejected upload with unsupported content type"
        );
        return Err(ApiError::UnsupportedFormat(SUPPORTED_FORMATS.join(", ")));
    }

    tracing::info!(
        filename = %upload.filename,
        size_bytes = upload.bytes.len(),
        "Processing upload"
    );

    let source = codec::decode_rgb(&upload.bytes)?;

    let pixels = source.width() as u64 * source.height() as u64;
    if pixels > state.config.max_pixels {
        return Err(ApiError::ImageTooLarge {
            pixels,
            max: state.config.max_pixels,
        });
    }

    let stippled = mono_dither::stipple(&source);
    let png_bytes = codec::encode_png(&stippled)?;

    tracing::info!(
        width = stippled.width(),
        height = stippled.height(),
        size_bytes = png_bytes.len(),
        "Image stippled successfully"
    );

    let disposition = format!(
        "attachment; filename={}",
        output_filename(&upload.filename)
    );

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "image/png"),
            (header::CONTENT_DISPOSITION, disposition.as_str()),
        ],
        Bytes::from(png_bytes),
    )
        .into_response())
}

/// The file part of a multipart upload.
struct Upload {
    filename: String,
    content_type: String,
    bytes: Bytes,
}

/// Pull the `file` field out of the multipart stream. Other fields are
/// skipped rather than rejected.
async fn read_file_field(multipart: &mut Multipart) -> Result<Upload, ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::Multipart(e.to_string()))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().unwrap_or("image").to_string();
        let content_type = field.content_type().unwrap_or("").to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::Multipart(e.to_string()))?;

        return Ok(Upload {
            filename,
            content_type,
            bytes,
        });
    }

    Err(ApiError::MissingField("file"))
}

/// Derive the download name from the uploaded name: everything up to the
/// first dot, with the stippled_ prefix and a .png extension.
fn output_filename(uploaded: &str) -> String {
    let stem = uploaded.split('.').next().filter(|s| !s.is_empty());
    format!("stippled_{}.png", stem.unwrap_or("image"))
}
