//! Types shared by requests and responses.

pub mod common;
pub mod serde_helpers;

pub use common::*;
pub use serde_helpers::parse_decimal;
