//! API Call Metrics
//!
//! Counters and latency histograms per API method, recorded through the
//! `metrics` facade. The sample installs no exporter of its own; a host
//! embedding the library can install any recorder to collect them.
//!
//! # Metrics
//!
//! - `invest_api_requests_total{method, outcome}`
//! - `invest_api_request_duration_seconds{method}`

use std::time::Duration;

use metrics::{counter, describe_counter, describe_histogram, histogram};

/// Register metric descriptions with the installed recorder.
pub fn describe_metrics() {
    describe_counter!(
        "invest_api_requests_total",
        "Total API requests by method and outcome"
    );
    describe_histogram!(
        "invest_api_request_duration_seconds",
        "API request latency by method"
    );
}

/// Result of an API request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Response received.
    Ok,
    /// Server or transport error.
    Error,
    /// Abandoned on shutdown.
    Cancelled,
}

impl Outcome {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Error => "error",
            Self::Cancelled => "cancelled",
        }
    }
}

/// Record a finished API request.
pub fn record_request(method: &'static str, outcome: Outcome, duration: Duration) {
    counter!(
        "invest_api_requests_total",
        "method" => method,
        "outcome" => outcome.as_str()
    )
    .increment(1);

    if outcome != Outcome::Cancelled {
        histogram!(
            "invest_api_request_duration_seconds",
            "method" => method
        )
        .record(duration.as_secs_f64());
    }
}
