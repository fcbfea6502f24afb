#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::too_many_lines,
        clippy::needless_pass_by_value,
        clippy::items_after_statements
    )
)]

//! Invest API Sample - Brokerage API Walkthrough
//!
//! Runs a fixed sequence of calls against the brokerage gRPC API and logs a
//! human-readable description of every response.
//!
//! # Layers (inside → outside)
//!
//! - **Domain**: Read-only views of API responses
//!   - `users`, `instruments`, `operations`, `market`: response records
//!   - `money`: `units`/`nano` fixed-point values as decimals
//!   - `formatting`: response-to-text formatters
//!
//! - **Application**: Samples and the port they drive
//!   - `ports`: `InvestApiPort`, the calls the samples need
//!   - `services`: one sample per API domain
//!   - `runner`: fixed-order execution with shutdown checks
//!
//! - **Infrastructure**: Adapters and process concerns
//!   - `invest_api`: tonic clients, auth metadata, protobuf mapping
//!   - `config`: environment configuration
//!   - `telemetry`: tracing subscriber, optional OTLP export
//!   - `metrics`: per-call counters and latency histograms
//!
//! # Sample Order
//!
//! ```text
//! Users ──► Instruments ──► Operations ──► MarketData
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Module Declarations
// =============================================================================

/// Domain layer - Response records and formatters with no transport concerns.
pub mod domain;

/// Application layer - Samples, runner and port definitions.
pub mod application;

/// Infrastructure layer - Adapters and external integrations.
pub mod infrastructure;

/// Error types of a sample run.
pub mod error;

// =============================================================================
// Re-exports
// =============================================================================

// Application
pub use application::ports::{InvestApiError, InvestApiPort};
pub use application::runner::{RunnerSettings, SampleRunner, SampleStep};

// Errors
pub use error::SampleError;

// Infrastructure config
pub use infrastructure::config::{
    ConfigError, ConnectionSettings, Credentials, Environment, SampleConfig,
};

// gRPC adapter
pub use infrastructure::invest_api::{AuthInterceptor, GrpcInvestApi};

// Metrics
pub use infrastructure::metrics::describe_metrics;

// Telemetry
pub use infrastructure::telemetry::{
    TelemetryConfig, TelemetryError, TelemetryGuard, init as init_telemetry,
};
