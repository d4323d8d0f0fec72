//! API server entry point.

use std::process::ExitCode;

use api::Config;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> ExitCode {
    let config = Config::from_env();

    // 1. Initialize tracing; stdout is reserved for the startup line
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // 2. Build the application
    let app = api::create_app();

    // 3. Start server
    println!("Server starting on {}", config.display_addr());
    tracing::info!(addr = %config.addr(), "starting API server");

    match api::server::run(&config, app).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "server failed");
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
