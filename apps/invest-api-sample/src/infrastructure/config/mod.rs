//! Configuration Module
//!
//! Configuration loading for the sample run.

mod settings;

pub use settings::{
    ConfigError, ConnectionSettings, Credentials, DEFAULT_APP_NAME, DEFAULT_INSTRUMENT_UID,
    Environment, SampleConfig,
};
