//! Reimbursement API
//!
//! A single REST resource, the reimbursement record, with CRUD operations
//! gated by the permission level of the calling account.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Reimbursement, account and the permission rules
//! - **services**: Use cases applying the permission rules
//! - **infra**: Database, migrations and repositories
//! - **api**: HTTP handlers, middleware, extractors and routes
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//!
//! # Issue a token for an existing account login
//! cargo run -- token maria
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Account, PermissionLevel, Reimbursement, ReimbursementStatus};
pub use errors::{AppError, AppResult};
