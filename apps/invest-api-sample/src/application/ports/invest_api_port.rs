//! Invest API Port (Driven Port)
//!
//! The subset of the brokerage API the samples call, expressed in domain
//! types. The gRPC adapter implements it; tests substitute mocks.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::instruments::{InstrumentKind, InstrumentSummary};
use crate::domain::market::InstrumentTradingStatus;
use crate::domain::operations::{Operation, Portfolio, Positions};
use crate::domain::users::{Account, UserInfo, UserTariff};

/// Error returned by API calls.
#[derive(Debug, Clone, thiserror::Error)]
pub enum InvestApiError {
    /// The server answered with a non-OK status.
    #[error("{method} failed ({code:?}): {message}{}", tracking_suffix(.tracking_id.as_deref()))]
    Rpc {
        /// Method name (e.g. `UsersService/GetAccounts`).
        method: &'static str,
        /// gRPC status code.
        code: tonic::Code,
        /// Status message.
        message: String,
        /// Server-side request id, when the server sent one.
        tracking_id: Option<String>,
    },

    /// The call was abandoned because shutdown was requested.
    #[error("{method} cancelled by shutdown")]
    Cancelled {
        /// Method name.
        method: &'static str,
    },
}

fn tracking_suffix(tracking_id: Option<&str>) -> String {
    tracking_id.map_or_else(String::new, |id| format!(" [tracking id {id}]"))
}

impl InvestApiError {
    /// Check if the error came from a shutdown request.
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled { .. })
    }
}

/// Brokerage API calls used by the samples.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InvestApiPort: Send + Sync {
    /// List the user's accounts.
    async fn get_accounts(&self) -> Result<Vec<Account>, InvestApiError>;

    /// Fetch profile flags of the token owner.
    async fn get_info(&self) -> Result<UserInfo, InvestApiError>;

    /// Fetch rate limits of the current tariff.
    async fn get_user_tariff(&self) -> Result<UserTariff, InvestApiError>;

    /// List tradable instruments of one class.
    async fn list_instruments(
        &self,
        kind: InstrumentKind,
    ) -> Result<Vec<InstrumentSummary>, InvestApiError>;

    /// Fetch the portfolio of an account.
    async fn get_portfolio(&self, account_id: &str) -> Result<Portfolio, InvestApiError>;

    /// Fetch money and securities balances of an account.
    async fn get_positions(&self, account_id: &str) -> Result<Positions, InvestApiError>;

    /// List operations of an account within `[from, to]`.
    async fn get_operations(
        &self,
        account_id: &str,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<Operation>, InvestApiError>;

    /// Fetch trading statuses of the given instruments (uid or FIGI).
    async fn get_trading_statuses(
        &self,
        instrument_ids: &[String],
    ) -> Result<Vec<InstrumentTradingStatus>, InvestApiError>;
}
