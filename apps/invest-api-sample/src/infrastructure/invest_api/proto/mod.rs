//! Protobuf messages and clients of the `tinkoff.public.invest.api.contract.v1`
//! package, limited to the methods the samples call.
//!
//! Fields the samples never read are left out; prost skips unknown tags
//! when decoding, so responses from the full contract decode cleanly.

mod common;
mod instruments;
mod marketdata;
mod operations;
mod users;

pub use common::*;
pub use instruments::*;
pub use marketdata::*;
pub use operations::*;
pub use users::*;
