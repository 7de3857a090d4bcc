//! Reimbursement database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set};

use crate::domain::{Reimbursement, ReimbursementStatus};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "reimbursements")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub account_id: i64,
    pub description: Option<String>,
    #[sea_orm(column_type = "Decimal(Some((12, 2)))")]
    pub amount: Decimal,
    pub date: Date,
    pub status: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::account::Entity",
        from = "Column::AccountId",
        to = "super::account::Column::Id"
    )]
    Account,
}

impl Related<super::account::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Account.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Reimbursement {
    fn from(model: Model) -> Self {
        Reimbursement {
            id: Some(model.id),
            account_id: model.account_id,
            description: model.description,
            amount: model.amount,
            date: model.date,
            status: ReimbursementStatus::from(model.status.as_str()),
        }
    }
}

/// Full-replacement active model; the primary key stays unset for new records.
impl From<Reimbursement> for ActiveModel {
    fn from(record: Reimbursement) -> Self {
        ActiveModel {
            id: match record.id {
                Some(id) => Set(id),
                None => NotSet,
            },
            account_id: Set(record.account_id),
            description: Set(record.description),
            amount: Set(record.amount),
            date: Set(record.date),
            status: Set(record.status.as_str().to_string()),
        }
    }
}
