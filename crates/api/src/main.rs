//! PulseCheck server entry point.

use std::process::ExitCode;

use api::config::Config;
use api::error::ServerError;

#[tokio::main]
async fn main() -> ExitCode {
    // 1. Load configuration (tracing is not installed yet)
    let config = match Config::from_env().map_err(ServerError::from) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("pulsecheck: {err}");
            return ExitCode::FAILURE;
        }
    };

    // 2. Initialize tracing
    api::init_tracing(&config);
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "pulsecheck starting");

    // 3. Serve until SIGINT/SIGTERM
    match api::run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "server exited with error");
            ExitCode::FAILURE
        }
    }
}
