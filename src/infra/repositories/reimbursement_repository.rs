//! Reimbursement repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use super::entities::reimbursement::{self, ActiveModel, Entity as ReimbursementEntity};
use crate::domain::Reimbursement;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Reimbursement repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ReimbursementRepository: Send + Sync {
    /// Insert when `id` is absent, otherwise replace the stored record
    async fn save(&self, record: Reimbursement) -> AppResult<Reimbursement>;

    /// Every stored record, ordered by id
    async fn find_all(&self) -> AppResult<Vec<Reimbursement>>;

    /// Records owned by one account, ordered by id
    async fn find_by_account(&self, account_id: i64) -> AppResult<Vec<Reimbursement>>;

    /// Find record by ID
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Reimbursement>>;

    /// Delete record by ID; a missing record is not an error
    async fn delete_by_id(&self, id: i64) -> AppResult<()>;
}

/// Concrete implementation of ReimbursementRepository
pub struct ReimbursementStore {
    db: DatabaseConnection,
}

impl ReimbursementStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ReimbursementRepository for ReimbursementStore {
    async fn save(&self, record: Reimbursement) -> AppResult<Reimbursement> {
        let is_new = record.id.is_none();
        let active: ActiveModel = record.into();

        let model = if is_new {
            active.insert(&self.db).await?
        } else {
            active.update(&self.db).await.map_err(|e| match e {
                DbErr::RecordNotUpdated => AppError::NotFound,
                other => AppError::from(other),
            })?
        };

        Ok(Reimbursement::from(model))
    }

    async fn find_all(&self) -> AppResult<Vec<Reimbursement>> {
        let models = ReimbursementEntity::find()
            .order_by_asc(reimbursement::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Reimbursement::from).collect())
    }

    async fn find_by_account(&self, account_id: i64) -> AppResult<Vec<Reimbursement>> {
        let models = ReimbursementEntity::find()
            .filter(reimbursement::Column::AccountId.eq(account_id))
            .order_by_asc(reimbursement::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Reimbursement::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Reimbursement>> {
        let result = ReimbursementEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Reimbursement::from))
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<()> {
        let result = ReimbursementEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            tracing::debug!("Delete of reimbursement {} matched no rows", id);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    use crate::domain::ReimbursementStatus;

    fn row(id: i64, account_id: i64) -> reimbursement::Model {
        reimbursement::Model {
            id,
            account_id,
            description: Some("Parking".to_string()),
            amount: Decimal::new(1250, 2),
            date: NaiveDate::from_ymd_opt(2024, 2, 9).unwrap(),
            status: "APPROVED".to_string(),
        }
    }

    fn record(id: Option<i64>, account_id: i64) -> Reimbursement {
        Reimbursement {
            id,
            account_id,
            description: Some("Parking".to_string()),
            amount: Decimal::new(1250, 2),
            date: NaiveDate::from_ymd_opt(2024, 2, 9).unwrap(),
            status: ReimbursementStatus::Approved,
        }
    }

    #[tokio::test]
    async fn save_without_id_inserts_and_returns_assigned_id() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row(7, 2)]])
            .into_connection();
        let store = ReimbursementStore::new(db.clone());

        let saved = store.save(record(None, 2)).await.unwrap();

        assert_eq!(saved.id, Some(7));
        assert_eq!(saved.status, ReimbursementStatus::Approved);
        let log = db.into_transaction_log();
        assert!(log[0].statements()[0].sql.starts_with("INSERT INTO \"reimbursements\""));
    }

    #[tokio::test]
    async fn save_with_id_updates_existing_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row(3, 2)]])
            .into_connection();
        let store = ReimbursementStore::new(db.clone());

        let saved = store.save(record(Some(3), 2)).await.unwrap();

        assert_eq!(saved.id, Some(3));
        let log = db.into_transaction_log();
        assert!(log[0].statements()[0].sql.starts_with("UPDATE \"reimbursements\""));
    }

    #[tokio::test]
    async fn save_with_unknown_id_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<reimbursement::Model>::new()])
            .into_connection();
        let store = ReimbursementStore::new(db);

        let result = store.save(record(Some(99), 2)).await;

        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn find_by_account_filters_on_owner() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row(1, 4), row(5, 4)]])
            .into_connection();
        let store = ReimbursementStore::new(db.clone());

        let found = store.find_by_account(4).await.unwrap();

        assert_eq!(found.len(), 2);
        let log = db.into_transaction_log();
        let sql = &log[0].statements()[0].sql;
        assert!(sql.contains("\"reimbursements\".\"account_id\" = $1"), "{}", sql);
        assert!(sql.contains("ORDER BY \"reimbursements\".\"id\" ASC"), "{}", sql);
    }

    #[tokio::test]
    async fn find_by_id_of_missing_row_is_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<reimbursement::Model>::new()])
            .into_connection();
        let store = ReimbursementStore::new(db);

        assert!(store.find_by_id(12).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn delete_of_missing_row_succeeds() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();
        let store = ReimbursementStore::new(db);

        assert!(store.delete_by_id(404).await.is_ok());
    }
}
