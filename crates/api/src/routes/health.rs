//! Health check endpoint.

use axum::Json;
use common::Response;

pub const HEALTHY_MESSAGE: &str = "Server is healthy";
pub const HEALTHY_STATUS: &str = "ok";

/// ANY /api/health — returns system health status.
pub async fn check() -> Json<Response> {
    Json(Response::new(HEALTHY_MESSAGE, HEALTHY_STATUS))
}
