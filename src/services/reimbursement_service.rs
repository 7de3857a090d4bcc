//! Reimbursement service - Permission-gated CRUD over the reimbursement store.
//!
//! Every operation takes the caller's [`Account`] explicitly. The rules:
//!
//! | operation | allowed                                   |
//! |-----------|-------------------------------------------|
//! | create    | ADMIN, OPERATOR (id must be absent)       |
//! | update    | ADMIN only (id must be present)           |
//! | list      | anyone, see [`ListScope`]                 |
//! | get       | owner, ADMIN, OPERATOR                    |
//! | delete    | ADMIN only, missing ids are a no-op       |

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::{ENTITY_REIMBURSEMENT, ERROR_KEY_ID_EXISTS, ERROR_KEY_ID_NULL};
use crate::domain::{Account, ListScope, Reimbursement, ReimbursementAction};
use crate::errors::{AppError, AppResult};
use crate::infra::ReimbursementRepository;

/// Reimbursement service trait for dependency injection.
#[async_trait]
pub trait ReimbursementService: Send + Sync {
    /// Persist a new record; the store assigns its id
    async fn create(&self, current: &Account, record: Reimbursement) -> AppResult<Reimbursement>;

    /// Replace an existing record
    async fn update(&self, current: &Account, record: Reimbursement) -> AppResult<Reimbursement>;

    /// List records visible to the caller
    async fn list(&self, current: &Account) -> AppResult<Vec<Reimbursement>>;

    /// Get one record; `None` when the id is unknown
    async fn get(&self, current: &Account, id: i64) -> AppResult<Option<Reimbursement>>;

    /// Delete by id
    async fn delete(&self, current: &Account, id: i64) -> AppResult<()>;
}

/// Concrete implementation of ReimbursementService using repository.
pub struct ReimbursementManager {
    repo: Arc<dyn ReimbursementRepository>,
    list_scope: ListScope,
}

impl ReimbursementManager {
    pub fn new(repo: Arc<dyn ReimbursementRepository>, list_scope: ListScope) -> Self {
        Self { repo, list_scope }
    }
}

fn require(current: &Account, action: ReimbursementAction) -> AppResult<()> {
    if current.can(action) {
        Ok(())
    } else {
        tracing::warn!(
            "Account {} ({}) denied {:?} on {}",
            current.id,
            current.permission,
            action,
            ENTITY_REIMBURSEMENT
        );
        Err(AppError::missing_permission())
    }
}

#[async_trait]
impl ReimbursementService for ReimbursementManager {
    async fn create(&self, current: &Account, record: Reimbursement) -> AppResult<Reimbursement> {
        if record.id.is_some() {
            return Err(AppError::bad_request_alert(
                "A new reimbursement cannot already have an ID",
                ENTITY_REIMBURSEMENT,
                ERROR_KEY_ID_EXISTS,
            ));
        }
        require(current, ReimbursementAction::Create)?;

        self.repo.save(record).await
    }

    async fn update(&self, current: &Account, record: Reimbursement) -> AppResult<Reimbursement> {
        if record.id.is_none() {
            return Err(AppError::bad_request_alert(
                "Invalid id",
                ENTITY_REIMBURSEMENT,
                ERROR_KEY_ID_NULL,
            ));
        }
        require(current, ReimbursementAction::Update)?;

        self.repo.save(record).await
    }

    async fn list(&self, current: &Account) -> AppResult<Vec<Reimbursement>> {
        if current.can(ReimbursementAction::ListAll) {
            return self.repo.find_all().await;
        }

        match self.list_scope {
            ListScope::All => {
                tracing::debug!(
                    "Account {} lacks list-all permission, returning every record",
                    current.id
                );
                self.repo.find_all().await
            }
            ListScope::Owned => self.repo.find_by_account(current.id).await,
        }
    }

    async fn get(&self, current: &Account, id: i64) -> AppResult<Option<Reimbursement>> {
        let Some(record) = self.repo.find_by_id(id).await? else {
            return Ok(None);
        };

        if !record.is_owned_by(current) {
            require(current, ReimbursementAction::ViewAny)?;
        }

        Ok(Some(record))
    }

    async fn delete(&self, current: &Account, id: i64) -> AppResult<()> {
        require(current, ReimbursementAction::Delete)?;

        self.repo.delete_by_id(id).await
    }
}
