//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connection and migrations
//! - Account and reimbursement repositories

pub mod db;
pub mod repositories;

pub use db::{Database, Migrator};
pub use repositories::{
    AccountRepository, AccountStore, ReimbursementRepository, ReimbursementStore,
};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{MockAccountRepository, MockReimbursementRepository};
