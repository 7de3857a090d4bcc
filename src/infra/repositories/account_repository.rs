//! Account repository implementation.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use super::entities::account::{self, Entity as AccountEntity};
use crate::domain::Account;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Account repository trait for dependency injection.
///
/// Accounts are maintained elsewhere; this service only reads them.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Find the account linked to a user login
    async fn find_by_login(&self, login: &str) -> AppResult<Option<Account>>;
}

/// Concrete implementation of AccountRepository
pub struct AccountStore {
    db: DatabaseConnection,
}

impl AccountStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AccountRepository for AccountStore {
    async fn find_by_login(&self, login: &str) -> AppResult<Option<Account>> {
        let result = AccountEntity::find()
            .filter(account::Column::Login.eq(login))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Account::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    use crate::domain::PermissionLevel;

    #[tokio::test]
    async fn find_by_login_maps_stored_permission() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![account::Model {
                id: 8,
                login: "maria".to_string(),
                permission: "OPERATOR".to_string(),
            }]])
            .into_connection();
        let store = AccountStore::new(db);

        let found = store.find_by_login("maria").await.unwrap().unwrap();

        assert_eq!(found.id, 8);
        assert_eq!(found.permission, PermissionLevel::Operator);
    }

    #[tokio::test]
    async fn unknown_login_is_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<account::Model>::new()])
            .into_connection();
        let store = AccountStore::new(db);

        assert!(store.find_by_login("ghost").await.unwrap().is_none());
    }
}
