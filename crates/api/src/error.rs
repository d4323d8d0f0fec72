//! Server error types.

use thiserror::Error;

/// Errors that stop the server from listening.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The listener could not bind its address (port in use, permission denied).
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// The accept loop stopped with an I/O error.
    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Result type for server operations.
pub type Result<T> = std::result::Result<T, ServerError>;
