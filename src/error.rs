use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Missing multipart field: {0}")]
    MissingField(&'static str),

    #[error("Unsupported file format. Supported formats: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid multipart request: {0}")]
    Multipart(String),

    #[error("Image too large: {pixels} pixels (max {max})")]
    ImageTooLarge { pixels: u64, max: u64 },

    #[error("Codec error: {0}")]
    Codec(#[from] CodecError),

    #[error("Internal error: {0}")]
    Internal(String),
}

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("Invalid image file: {0}")]
    Decode(String),

    #[error("PNG encode error: {0}")]
    PngEncode(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::MissingField(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            ApiError::UnsupportedFormat(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            ApiError::Multipart(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            ApiError::ImageTooLarge { .. } => (StatusCode::PAYLOAD_TOO_LARGE, self.to_string()),
            // Undecodable uploads are a client problem; encode failures are ours.
            ApiError::Codec(CodecError::Decode(_)) => (StatusCode::BAD_REQUEST, self.to_string()),
            ApiError::Codec(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };

        let body = Json(json!({
            "status": status.as_u16(),
            "error": message,
        }));

        (status, body).into_response()
    }
}
