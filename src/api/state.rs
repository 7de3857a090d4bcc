//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and infrastructure.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::Database;
use crate::services::{
    AccountService, AuthService, ReimbursementService, ServiceContainer, Services,
};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// Bearer token verification
    pub auth_service: Arc<dyn AuthService>,
    /// Current account lookup
    pub account_service: Arc<dyn AccountService>,
    /// Reimbursement operations
    pub reimbursement_service: Arc<dyn ReimbursementService>,
    /// Database connection
    pub database: Arc<Database>,
}

impl AppState {
    /// Create application state from database connection and config.
    pub fn from_config(database: Arc<Database>, config: Config) -> Self {
        let container = Services::from_connection(database.get_connection(), config);

        Self {
            auth_service: container.auth(),
            account_service: container.accounts(),
            reimbursement_service: container.reimbursements(),
            database,
        }
    }

    /// Create new application state with manually injected services.
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        account_service: Arc<dyn AccountService>,
        reimbursement_service: Arc<dyn ReimbursementService>,
        database: Arc<Database>,
    ) -> Self {
        Self {
            auth_service,
            account_service,
            reimbursement_service,
            database,
        }
    }
}
