//! Invest API Sample Binary
//!
//! Runs the sample sequence once and exits.
//!
//! # Usage
//!
//! ```bash
//! INVEST_TOKEN=t.xxx cargo run --bin invest-api-sample
//! ```
//!
//! # Environment Variables
//!
//! ## Required
//! - `INVEST_TOKEN`: API token
//!
//! ## Optional
//! - `INVEST_ENV`: sandbox | production (default: sandbox)
//! - `INVEST_ENDPOINT`: Override the environment's endpoint
//! - `INVEST_APP_NAME`: Value of the `x-app-name` header (default: invest-api-rust-sample)
//! - `INVEST_INSTRUMENT_UID`: Instrument for the trading status sample
//! - `INVEST_OPERATIONS_LOOKBACK_DAYS`: Operations window (default: 30)
//! - `INVEST_CONNECT_TIMEOUT_SECS`: Connect timeout (default: 10)
//! - `INVEST_REQUEST_TIMEOUT_SECS`: Per-request timeout (default: 30)
//! - `OTEL_ENABLED`: Export spans over OTLP (default: false)
//! - `OTEL_EXPORTER_OTLP_ENDPOINT`: OTLP endpoint (default: <http://localhost:4318>)
//! - `OTEL_SERVICE_NAME`: Service name (default: invest-api-sample)
//! - `RUST_LOG`: Log level (default: info)

use std::sync::Arc;

use invest_api_sample::infrastructure::telemetry;
use invest_api_sample::{GrpcInvestApi, SampleConfig, SampleRunner, describe_metrics};
use tokio::signal;
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if rustls::crypto::ring::default_provider()
        .install_default()
        .is_err()
    {
        eprintln!("rustls crypto provider already installed");
    }

    load_dotenv();

    let telemetry_guard = telemetry::init()?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        otlp_export = telemetry_guard.is_exporting(),
        "Starting Invest API sample"
    );

    describe_metrics();

    let config = SampleConfig::from_env()?;
    log_config(&config);

    let shutdown_token = CancellationToken::new();
    tokio::spawn(await_shutdown(shutdown_token.clone()));

    let api = GrpcInvestApi::connect(&config, shutdown_token.clone()).await?;
    let runner = SampleRunner::new(
        Arc::new(api),
        config.runner_settings(),
        shutdown_token.clone(),
    );

    let result = runner.run().await;

    // Releases the signal watcher.
    shutdown_token.cancel();

    result?;
    tracing::info!("Invest API sample finished");
    Ok(())
}

/// Load .env file from current or ancestor directories.
fn load_dotenv() {
    if dotenvy::dotenv().is_ok() {
        return;
    }

    if let Ok(cwd) = std::env::current_dir() {
        let mut dir = cwd.as_path();
        while let Some(parent) = dir.parent() {
            let env_path = parent.join(".env");
            if env_path.exists() {
                let _ = dotenvy::from_path(&env_path);
                return;
            }
            dir = parent;
        }
    }
}

/// Log the parsed configuration.
fn log_config(config: &SampleConfig) {
    tracing::info!(
        environment = config.environment.as_str(),
        endpoint = %config.endpoint,
        app_name = %config.app_name,
        "Configuration loaded"
    );
    tracing::debug!(
        instrument_uid = %config.instrument_uid,
        operations_lookback_days = config.operations_lookback_days,
        connect_timeout = ?config.connection.connect_timeout,
        request_timeout = ?config.connection.request_timeout,
        "Sample settings"
    );
}

/// Cancel the token on SIGTERM or SIGINT.
///
/// Returns without cancelling when the token is cancelled elsewhere first.
async fn await_shutdown(shutdown_token: CancellationToken) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::warn!(error = %e, "Ctrl+C handler unavailable");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "SIGTERM handler unavailable");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C, stopping samples");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, stopping samples");
        }
        () = shutdown_token.cancelled() => return,
    }

    shutdown_token.cancel();
}
