//! Market data sample: trading statuses of an instrument.

use crate::application::ports::{InvestApiError, InvestApiPort};
use crate::domain::formatting::format_trading_statuses;

/// Describes trading statuses.
pub struct MarketDataSample<'a> {
    api: &'a dyn InvestApiPort,
}

impl<'a> MarketDataSample<'a> {
    /// Create the sample over an API port.
    #[must_use]
    pub fn new(api: &'a dyn InvestApiPort) -> Self {
        Self { api }
    }

    /// Fetch and describe the trading status of one instrument.
    pub async fn trading_statuses(&self, instrument_uid: &str) -> Result<String, InvestApiError> {
        let statuses = self
            .api
            .get_trading_statuses(&[instrument_uid.to_string()])
            .await?;

        Ok(format_trading_statuses(&statuses))
    }
}
