//! Core types used across the Express Checkout flow.

mod amount;
mod common;
mod custom;
mod records;
mod status;

pub use amount::*;
pub use common::*;
pub use custom::*;
pub use records::*;
pub use status::*;
