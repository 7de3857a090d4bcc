//! Migration: Create reimbursements table owned by accounts.

use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_accounts_table::Accounts;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reimbursements::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Reimbursements::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Reimbursements::AccountId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Reimbursements::Description).string_len(255).null())
                    .col(
                        ColumnDef::new(Reimbursements::Amount)
                            .decimal_len(12, 2)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Reimbursements::Date).date().not_null())
                    .col(
                        ColumnDef::new(Reimbursements::Status)
                            .string_len(16)
                            .not_null()
                            .default("PENDING"),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reimbursements_account_id")
                            .from(Reimbursements::Table, Reimbursements::AccountId)
                            .to(Accounts::Table, Accounts::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // Owner lookups back the owned-only listing scope
        manager
            .create_index(
                Index::create()
                    .name("idx_reimbursements_account_id")
                    .table(Reimbursements::Table)
                    .col(Reimbursements::AccountId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_reimbursements_account_id")
                    .table(Reimbursements::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Reimbursements::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Reimbursements {
    Table,
    Id,
    AccountId,
    Description,
    Amount,
    Date,
    Status,
}
