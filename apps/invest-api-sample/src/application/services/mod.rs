//! Samples
//!
//! One sample per API domain. Each calls the port and turns the results
//! into a description string; errors propagate unchanged.

mod instruments;
mod market_data;
mod operations;
mod users;

pub use instruments::InstrumentsSample;
pub use market_data::MarketDataSample;
pub use operations::{DEFAULT_OPERATIONS_LOOKBACK_DAYS, OperationsSample};
pub use users::UsersSample;
