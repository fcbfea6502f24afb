//! Port Interfaces
//!
//! ## Driven Ports (Outbound)
//!
//! - `InvestApiPort`: calls into the brokerage API used by the samples

mod invest_api_port;

#[cfg(test)]
pub use invest_api_port::MockInvestApiPort;
pub use invest_api_port::{InvestApiError, InvestApiPort};
