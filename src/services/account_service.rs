//! Account service - Resolves the account behind the current session.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::Account;
use crate::errors::{AppError, AppResult};
use crate::infra::AccountRepository;

/// Account service trait for dependency injection.
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Account of the authenticated user `login`.
    ///
    /// Fails with a 403 alert when the login has no account.
    async fn current_account(&self, login: &str) -> AppResult<Account>;
}

/// Concrete implementation of AccountService using repository.
pub struct AccountManager {
    repo: Arc<dyn AccountRepository>,
}

impl AccountManager {
    pub fn new(repo: Arc<dyn AccountRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl AccountService for AccountManager {
    async fn current_account(&self, login: &str) -> AppResult<Account> {
        match self.repo.find_by_login(login).await? {
            Some(account) => Ok(account),
            None => {
                tracing::warn!("No account linked to login '{}'", login);
                Err(AppError::missing_account())
            }
        }
    }
}
