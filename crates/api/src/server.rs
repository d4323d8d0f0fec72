//! TCP listener setup and the serve loop.

use axum::Router;
use tokio::net::TcpListener;

use crate::config::Config;
use crate::error::{Result, ServerError};

/// Binds a TCP listener on the configured address.
pub async fn bind(config: &Config) -> Result<TcpListener> {
    let addr = config.addr();
    TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })
}

/// Serves `app` on `listener`. Each connection runs on its own task.
///
/// Only returns if the accept loop fails.
pub async fn serve(listener: TcpListener, app: Router) -> Result<()> {
    if let Ok(local) = listener.local_addr() {
        tracing::info!(addr = %local, "listening");
    }
    axum::serve(listener, app).await?;
    Ok(())
}

/// Binds the configured address and serves `app` on it.
pub async fn run(config: &Config, app: Router) -> Result<()> {
    let listener = bind(config).await?;
    serve(listener, app).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn bind_reports_address_on_failure() {
        let held = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = held.local_addr().unwrap().port();
        let config = Config {
            host: "127.0.0.1".to_string(),
            port,
            ..Config::default()
        };

        let err = bind(&config).await.unwrap_err();
        match err {
            ServerError::Bind { addr, source } => {
                assert_eq!(addr, format!("127.0.0.1:{port}"));
                assert_eq!(source.kind(), std::io::ErrorKind::AddrInUse);
            }
            other => panic!("expected bind error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn bind_accepts_ephemeral_port() {
        let config = Config {
            host: "127.0.0.1".to_string(),
            port: 0,
            ..Config::default()
        };
        let listener = bind(&config).await.unwrap();
        assert_ne!(listener.local_addr().unwrap().port(), 0);
    }
}
