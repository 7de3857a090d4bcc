//! Application configuration.
//!
//! Environment-driven settings plus the constants shared by the
//! reimbursement resource (header names, error keys, defaults).

mod constants;
mod settings;

pub use constants::*;
pub use settings::Config;
