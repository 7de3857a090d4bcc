//! Account database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::{Account, PermissionLevel};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "accounts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub login: String,
    pub permission: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::reimbursement::Entity")]
    Reimbursement,
}

impl Related<super::reimbursement::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reimbursement.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Account {
    fn from(model: Model) -> Self {
        Account {
            id: model.id,
            login: model.login,
            permission: PermissionLevel::from(model.permission.as_str()),
        }
    }
}
