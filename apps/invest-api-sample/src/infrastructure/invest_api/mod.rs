//! Brokerage API gRPC Adapter
//!
//! Implements [`InvestApiPort`](crate::application::ports::InvestApiPort)
//! over tonic clients.
//!
//! # Request Flow
//!
//! 1. `AuthInterceptor` attaches the bearer token and application name
//! 2. The tonic client sends the request over the shared TLS channel
//! 3. The call races the shutdown token; cancellation abandons it
//! 4. The response (or status) is mapped into domain types (or `InvestApiError`)

pub mod client;
pub mod interceptor;
mod mapping;

// Allow clippy warnings and missing docs in generated code
#[allow(
    missing_docs,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::unwrap_used,
    clippy::expect_used
)]
pub mod proto;

pub use client::{GrpcInvestApi, InvestChannel};
pub use interceptor::AuthInterceptor;
