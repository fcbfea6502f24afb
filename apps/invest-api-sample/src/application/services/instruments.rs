//! Instruments sample: listing of every instrument class.

use crate::application::ports::{InvestApiError, InvestApiPort};
use crate::domain::formatting::{InstrumentGroup, format_instruments};
use crate::domain::instruments::InstrumentKind;

/// Describes the tradable instruments.
pub struct InstrumentsSample<'a> {
    api: &'a dyn InvestApiPort,
}

impl<'a> InstrumentsSample<'a> {
    /// Create the sample over an API port.
    #[must_use]
    pub fn new(api: &'a dyn InvestApiPort) -> Self {
        Self { api }
    }

    /// List every instrument class in [`InstrumentKind::ALL`] order.
    pub async fn describe(&self) -> Result<String, InvestApiError> {
        let mut groups = Vec::with_capacity(InstrumentKind::ALL.len());
        for kind in InstrumentKind::ALL {
            let instruments = self.api.list_instruments(kind).await?;
            tracing::debug!(kind = kind.heading(), count = instruments.len(), "Instruments loaded");
            groups.push(InstrumentGroup { kind, instruments });
        }

        Ok(format_instruments(&groups))
    }
}
