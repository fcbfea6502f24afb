//! Domain Layer - Read-only views of API responses and their formatting.
//!
//! Types here carry no transport concerns. The gRPC adapter maps protobuf
//! messages into them; the samples hand them to the formatters.

/// Accounts, user info and tariff limits.
pub mod users;

/// Instrument listings.
pub mod instruments;

/// Portfolio, positions and operations.
pub mod operations;

/// Trading statuses.
pub mod market;

/// Fixed-point money and quotation values.
pub mod money;

/// Response-to-text formatters.
pub mod formatting;
