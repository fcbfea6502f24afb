//! Sample Runner
//!
//! Runs the samples one after another in a fixed order and logs every
//! description. Nothing runs concurrently; each call completes before
//! the next one starts.

use std::sync::Arc;

use chrono::TimeDelta;
use tokio_util::sync::CancellationToken;

use super::ports::InvestApiPort;
use super::services::{InstrumentsSample, MarketDataSample, OperationsSample, UsersSample};
use crate::error::SampleError;

/// Sample steps in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleStep {
    /// Accounts, user info, tariff.
    Users,
    /// Instrument listings.
    Instruments,
    /// Portfolio, positions, operations.
    Operations,
    /// Trading statuses.
    MarketData,
}

impl SampleStep {
    /// Every step, in execution order.
    pub const ALL: [Self; 4] = [
        Self::Users,
        Self::Instruments,
        Self::Operations,
        Self::MarketData,
    ];

    /// Step name used in logs.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Users => "users",
            Self::Instruments => "instruments",
            Self::Operations => "operations",
            Self::MarketData => "market_data",
        }
    }
}

/// Inputs of the samples.
#[derive(Debug, Clone)]
pub struct RunnerSettings {
    /// Instrument whose trading status is requested.
    pub instrument_uid: String,
    /// Operations window.
    pub operations_lookback: TimeDelta,
}

/// Runs every sample once.
pub struct SampleRunner {
    api: Arc<dyn InvestApiPort>,
    settings: RunnerSettings,
    shutdown: CancellationToken,
}

impl SampleRunner {
    /// Create a runner.
    #[must_use]
    pub fn new(
        api: Arc<dyn InvestApiPort>,
        settings: RunnerSettings,
        shutdown: CancellationToken,
    ) -> Self {
        Self {
            api,
            settings,
            shutdown,
        }
    }

    /// Run all steps in order, logging each description.
    ///
    /// # Errors
    ///
    /// Returns the first API error, or [`SampleError::Cancelled`] when
    /// shutdown is requested between steps.
    pub async fn run(&self) -> Result<(), SampleError> {
        for step in SampleStep::ALL {
            if self.shutdown.is_cancelled() {
                tracing::warn!(step = step.as_str(), "Shutdown requested, skipping remaining samples");
                return Err(SampleError::Cancelled);
            }

            let description = self.run_step(step).await?;
            tracing::info!(sample = step.as_str(), "{description}");
        }

        tracing::info!("All samples completed");
        Ok(())
    }

    /// Run a single step and return its description.
    ///
    /// # Errors
    ///
    /// Returns the API error raised by the step.
    pub async fn run_step(&self, step: SampleStep) -> Result<String, SampleError> {
        let api = self.api.as_ref();
        let description = match step {
            SampleStep::Users => UsersSample::new(api).describe().await?,
            SampleStep::Instruments => InstrumentsSample::new(api).describe().await?,
            SampleStep::Operations => {
                OperationsSample::new(api, self.settings.operations_lookback)
                    .describe()
                    .await?
            }
            SampleStep::MarketData => {
                MarketDataSample::new(api)
                    .trading_statuses(&self.settings.instrument_uid)
                    .await?
            }
        };
        Ok(description)
    }
}
