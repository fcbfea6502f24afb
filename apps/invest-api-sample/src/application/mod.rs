//! Application Layer - Samples and the API port they drive.

/// Port interfaces for the brokerage API.
pub mod ports;

/// Per-domain samples.
pub mod services;

/// Fixed-order sample runner.
pub mod runner;
