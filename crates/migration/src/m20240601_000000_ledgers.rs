//! Initial schema migration - creates both ledgers.
//!
//! - `expenses`: money going out, classified by category/subcategory
//! - `income`: money coming in, classified by source
//!
//! Ids are `AUTOINCREMENT` so a deleted id is never handed out again. Dates
//! are stored as `YYYY-MM-DD` text and compared as strings.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

// ─────────────────────────────────────────────────────────────────────────────
// Table identifiers
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Iden)]
enum Expenses {
    Table,
    Id,
    Date,
    Amount,
    Category,
    Subcategory,
    Note,
}

#[derive(Iden)]
enum Income {
    Table,
    Id,
    Date,
    Amount,
    Source,
    Note,
}

// ─────────────────────────────────────────────────────────────────────────────
// Migration implementation
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // ───────────────────────────────────────────────────────────────────
        // 1. Expenses
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(Expenses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Expenses::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Expenses::Date).text().not_null())
                    .col(ColumnDef::new(Expenses::Amount).double().not_null())
                    .col(ColumnDef::new(Expenses::Category).text().not_null())
                    .col(
                        ColumnDef::new(Expenses::Subcategory)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(Expenses::Note).text().not_null().default(""))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx-expenses-date")
                    .table(Expenses::Table)
                    .col(Expenses::Date)
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 2. Income
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(Income::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Income::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Income::Date).text().not_null())
                    .col(ColumnDef::new(Income::Amount).double().not_null())
                    .col(ColumnDef::new(Income::Source).text().not_null())
                    .col(ColumnDef::new(Income::Note).text().not_null().default(""))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx-income-date")
                    .table(Income::Table)
                    .col(Income::Date)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Income::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Expenses::Table).if_exists().to_owned())
            .await
    }
}
