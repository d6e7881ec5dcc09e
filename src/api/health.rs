use axum::response::{IntoResponse, Json};
use serde::Serialize;
use utoipa::ToSchema;

/// Response from the service root endpoint
#[derive(Debug, Serialize, ToSchema)]
pub struct RootResponse {
    /// Service name
    pub message: String,
    /// Service health status
    pub status: String,
    /// Available operations
    pub endpoints: EndpointList,
}

/// Summary of the conversion endpoints
#[derive(Debug, Serialize, ToSchema)]
pub struct EndpointList {
    /// The image conversion endpoint
    pub stipple: String,
}

/// Response from the health endpoint
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Health status ("healthy" when the service is up)
    pub status: String,
}

/// Service information
///
/// Returns the service name and a summary of the available endpoints.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service information", body = RootResponse),
    ),
    tag = "Service"
)]
pub async fn handle_root() -> impl IntoResponse {
    Json(RootResponse {
        message: "Stippling Image Generator API".to_string(),
        status: "healthy".to_string(),
        endpoints: EndpointList {
            stipple: "POST /stipple - Upload an image to convert to stippled art".to_string(),
        },
    })
}

/// Health check
///
/// Lightweight liveness probe for deployment platforms.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
    ),
    tag = "Service"
)]
pub async fn handle_health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".to_string(),
    })
}
