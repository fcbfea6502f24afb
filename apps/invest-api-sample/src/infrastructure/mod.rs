//! Infrastructure Layer - Adapters and external integrations.
//!
//! Concrete implementations of the ports defined in the application layer,
//! plus process-level concerns (configuration, telemetry, metrics).

/// gRPC adapter for the brokerage API.
pub mod invest_api;

/// Configuration loaded from the environment.
pub mod config;

/// Per-call metrics instrumentation.
pub mod metrics;

/// Tracing subscriber and OpenTelemetry integration.
pub mod telemetry;
