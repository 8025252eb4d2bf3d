//! Create `city` table.
//!
//! Root entity; attractions and city/category association rows reference it.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(City::Table)
                    .if_not_exists()
                    .col(pk_auto(City::CityId))
                    .col(string_len_null(City::CityName, 128))
                    .col(string_len_null(City::Country, 128))
                    .col(string_len_null(City::Language, 64))
                    .col(string_len_null(City::Currency, 64))
                    .col(string_len_null(City::SafetyLevel, 64))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(City::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum City { Table, CityId, CityName, Country, Language, Currency, SafetyLevel }
