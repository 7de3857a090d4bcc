//! Service Container - Centralized service access.
//!
//! Wires repositories into services once at startup and hands out shared
//! `Arc` handles to the HTTP layer.

use std::sync::Arc;

use super::{
    AccountManager, AccountService, AuthService, Authenticator, ReimbursementManager,
    ReimbursementService,
};
use crate::config::Config;
use crate::infra::{AccountStore, ReimbursementStore};

/// Service container trait for dependency injection.
pub trait ServiceContainer: Send + Sync {
    /// Get authentication service
    fn auth(&self) -> Arc<dyn AuthService>;

    /// Get account service
    fn accounts(&self) -> Arc<dyn AccountService>;

    /// Get reimbursement service
    fn reimbursements(&self) -> Arc<dyn ReimbursementService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    auth_service: Arc<dyn AuthService>,
    account_service: Arc<dyn AccountService>,
    reimbursement_service: Arc<dyn ReimbursementService>,
}

impl Services {
    /// Create a new service container from already built services
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        account_service: Arc<dyn AccountService>,
        reimbursement_service: Arc<dyn ReimbursementService>,
    ) -> Self {
        Self {
            auth_service,
            account_service,
            reimbursement_service,
        }
    }

    /// Create service container from database connection and config
    pub fn from_connection(db: sea_orm::DatabaseConnection, config: Config) -> Self {
        let accounts = Arc::new(AccountStore::new(db.clone()));
        let reimbursements = Arc::new(ReimbursementStore::new(db));
        let list_scope = config.list_scope;

        Self {
            auth_service: Arc::new(Authenticator::new(config)),
            account_service: Arc::new(AccountManager::new(accounts)),
            reimbursement_service: Arc::new(ReimbursementManager::new(reimbursements, list_scope)),
        }
    }
}

impl ServiceContainer for Services {
    fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }

    fn accounts(&self) -> Arc<dyn AccountService> {
        self.account_service.clone()
    }

    fn reimbursements(&self) -> Arc<dyn ReimbursementService> {
        self.reimbursement_service.clone()
    }
}
