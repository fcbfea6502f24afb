//! Operations sample: portfolio, balances and recent operations of an account.

use chrono::{DateTime, TimeDelta, Utc};

use crate::application::ports::{InvestApiError, InvestApiPort};
use crate::domain::formatting::{OperationsReport, format_operations};
use crate::domain::users::Account;

/// Default operations window, in days.
pub const DEFAULT_OPERATIONS_LOOKBACK_DAYS: u32 = 30;

/// Describes the state of one account.
pub struct OperationsSample<'a> {
    api: &'a dyn InvestApiPort,
    lookback: TimeDelta,
}

impl<'a> OperationsSample<'a> {
    /// Create the sample over an API port.
    #[must_use]
    pub fn new(api: &'a dyn InvestApiPort, lookback: TimeDelta) -> Self {
        Self { api, lookback }
    }

    /// Describe the first open account as of now.
    pub async fn describe(&self) -> Result<String, InvestApiError> {
        self.describe_at(Utc::now()).await
    }

    /// Describe the first open account, with the operations window ending at `now`.
    pub async fn describe_at(&self, now: DateTime<Utc>) -> Result<String, InvestApiError> {
        let accounts = self.api.get_accounts().await?;
        let Some(account) = pick_account(accounts) else {
            return Ok(format_operations(None));
        };

        let portfolio = self.api.get_portfolio(&account.id).await?;
        let positions = self.api.get_positions(&account.id).await?;

        let from = window_start(now, self.lookback);
        let operations = self.api.get_operations(&account.id, from, now).await?;

        tracing::debug!(
            account_id = %account.id,
            positions = portfolio.positions.len(),
            operations = operations.len(),
            "Account state loaded"
        );

        let report = OperationsReport {
            account,
            portfolio,
            positions,
            from,
            to: now,
            operations,
        };
        Ok(format_operations(Some(&report)))
    }
}

/// Start of the operations window, clamped to the Unix epoch.
fn window_start(now: DateTime<Utc>, lookback: TimeDelta) -> DateTime<Utc> {
    now.checked_sub_signed(lookback)
        .filter(|from| *from >= DateTime::<Utc>::UNIX_EPOCH)
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}

/// First open account, otherwise the first one listed.
fn pick_account(accounts: Vec<Account>) -> Option<Account> {
    let open = accounts.iter().position(|a| a.status.is_open());
    accounts.into_iter().nth(open.unwrap_or(0))
}
