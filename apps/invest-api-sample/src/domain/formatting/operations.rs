use std::fmt::Write;

use chrono::{DateTime, Utc};

use super::users::NO_ACCOUNTS;
use crate::domain::operations::{Operation, Portfolio, Positions};
use crate::domain::users::Account;

/// Everything the operations sample fetched for one account.
#[derive(Debug, Clone)]
pub struct OperationsReport {
    /// Account the data belongs to.
    pub account: Account,
    /// Portfolio.
    pub portfolio: Portfolio,
    /// Balances.
    pub positions: Positions,
    /// Start of the operations window.
    pub from: DateTime<Utc>,
    /// End of the operations window.
    pub to: DateTime<Utc>,
    /// Operations in the window.
    pub operations: Vec<Operation>,
}

/// Render portfolio, balances and operations of an account.
///
/// `None` means the user has no accounts at all.
#[must_use]
pub fn format_operations(report: Option<&OperationsReport>) -> String {
    let Some(report) = report else {
        return NO_ACCOUNTS.to_string();
    };

    let mut out = format!("\nAccount {}:", report.account);

    out.push_str("\n\nPortfolio:");
    for (label, money) in report.portfolio.totals.labelled() {
        let _ = write!(out, "\n{label}: {money}");
    }
    if let Some(expected_yield) = report.portfolio.expected_yield {
        let _ = write!(out, "\nexpected yield: {}%", expected_yield.normalize());
    }
    for position in &report.portfolio.positions {
        let _ = write!(out, "\n  {position}");
    }

    out.push_str("\n\nPositions:");
    for money in &report.positions.money {
        let _ = write!(out, "\nmoney: {money}");
    }
    for money in report.positions.blocked.iter().filter(|m| !m.is_zero()) {
        let _ = write!(out, "\nblocked: {money}");
    }
    for security in &report.positions.securities {
        let _ = write!(out, "\n  {security}");
    }

    let _ = write!(
        out,
        "\n\nOperations {} - {}:",
        report.from.format("%Y-%m-%d"),
        report.to.format("%Y-%m-%d")
    );
    if report.operations.is_empty() {
        out.push_str("\nNo operations exists in response");
    }
    for operation in &report.operations {
        let _ = write!(out, "\n{operation}");
    }

    out
}
