//! Error types for the sample binary.

use thiserror::Error;

use crate::application::ports::InvestApiError;
use crate::infrastructure::config::ConfigError;

/// Anything that stops a sample run.
#[derive(Debug, Error)]
pub enum SampleError {
    /// Invalid or missing configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The gRPC channel could not be built or connected.
    #[error("failed to connect to {endpoint}: {source}")]
    Transport {
        /// Endpoint being connected to.
        endpoint: String,
        /// Underlying transport error.
        #[source]
        source: tonic::transport::Error,
    },

    /// An API call failed.
    #[error(transparent)]
    Api(InvestApiError),

    /// Shutdown was requested before the run finished.
    #[error("sample run cancelled")]
    Cancelled,
}

impl From<InvestApiError> for SampleError {
    fn from(err: InvestApiError) -> Self {
        if err.is_cancelled() {
            Self::Cancelled
        } else {
            Self::Api(err)
        }
    }
}
