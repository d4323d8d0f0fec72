//! Welcome endpoint.

use axum::Json;
use common::Response;

pub const WELCOME_MESSAGE: &str = "Welcome to Go API Server";
pub const WELCOME_STATUS: &str = "success";

/// ANY / — returns the welcome message.
pub async fn get() -> Json<Response> {
    Json(Response::new(WELCOME_MESSAGE, WELCOME_STATUS))
}
