//! Application services layer - Use cases and business logic.
//!
//! Services apply the reimbursement access rules and delegate storage to
//! repositories. They depend on repository traits, so tests can swap in
//! mocks or in-memory stores.

mod account_service;
mod auth_service;
pub mod container;
mod reimbursement_service;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use account_service::{AccountManager, AccountService};
pub use auth_service::{AuthService, Authenticator, Claims, TokenResponse};
pub use reimbursement_service::{ReimbursementManager, ReimbursementService};
