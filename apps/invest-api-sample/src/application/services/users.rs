//! Users sample: accounts, profile and tariff.

use crate::application::ports::{InvestApiError, InvestApiPort};
use crate::domain::formatting::format_user_info;

/// Describes the token owner.
pub struct UsersSample<'a> {
    api: &'a dyn InvestApiPort,
}

impl<'a> UsersSample<'a> {
    /// Create the sample over an API port.
    #[must_use]
    pub fn new(api: &'a dyn InvestApiPort) -> Self {
        Self { api }
    }

    /// Fetch accounts, user info and tariff, and describe them.
    pub async fn describe(&self) -> Result<String, InvestApiError> {
        let accounts = self.api.get_accounts().await?;
        let info = self.api.get_info().await?;
        let tariff = self.api.get_user_tariff().await?;

        tracing::debug!(accounts = accounts.len(), "User info loaded");

        Ok(format_user_info(&accounts, &info, &tariff))
    }
}
