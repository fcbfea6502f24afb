use std::fmt::{Display, Write};

/// Description used when the response holds no statuses.
pub const NO_TRADING_STATUSES: &str = "No trading statuses exists in response";

/// Render trading statuses as `\nTradingStatuses:\n[a][b]...`.
#[must_use]
pub fn format_trading_statuses<T: Display>(statuses: &[T]) -> String {
    if statuses.is_empty() {
        return NO_TRADING_STATUSES.to_string();
    }

    let mut out = String::from("\nTradingStatuses:\n");
    for status in statuses {
        let _ = write!(out, "[{status}]");
    }
    out
}
