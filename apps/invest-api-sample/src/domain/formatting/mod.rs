//! Response Formatters
//!
//! Pure functions turning domain values into the multi-line descriptions
//! the samples log. Every description starts with a blank line and a
//! header so it reads as a block after the log prefix.

mod instruments;
mod operations;
mod trading_status;
mod users;

pub use instruments::{INSTRUMENT_PREVIEW_LIMIT, InstrumentGroup, format_instruments};
pub use operations::{OperationsReport, format_operations};
pub use trading_status::{NO_TRADING_STATUSES, format_trading_statuses};
pub use users::{NO_ACCOUNTS, format_user_info};
