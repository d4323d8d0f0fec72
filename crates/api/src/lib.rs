//! HTTP API server exposing a welcome message and a health check.
//!
//! Both endpoints return a fixed [`common::Response`] as JSON, with
//! structured request logging through `tracing`.

pub mod config;
pub mod error;
pub mod routes;
pub mod server;

use axum::Router;
use axum::routing::any;
use tower_http::trace::TraceLayer;

pub use config::Config;
pub use error::ServerError;

/// Path of the welcome endpoint.
pub const ROOT_PATH: &str = "/";
/// Path of the health check endpoint.
pub const HEALTH_PATH: &str = "/api/health";

/// Creates the Axum application router.
///
/// Routes accept any HTTP method. Unknown paths get axum's default 404.
pub fn create_app() -> Router {
    Router::new()
        .route(ROOT_PATH, any(routes::root::get))
        .route(HEALTH_PATH, any(routes::health::check))
        .layer(TraceLayer::new_for_http())
}
