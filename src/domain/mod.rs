//! Domain layer - Core business entities and access rules
//!
//! Contains the reimbursement record, the account making requests, and the
//! permission table deciding what each account may do. No infrastructure
//! dependencies live here.

pub mod account;
pub mod permission;
pub mod reimbursement;

pub use account::Account;
pub use permission::{ListScope, PermissionLevel, ReimbursementAction};
pub use reimbursement::{Reimbursement, ReimbursementStatus};
