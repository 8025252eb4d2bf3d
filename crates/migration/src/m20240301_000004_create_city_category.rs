//! Create `city_category` join table.
//!
//! The composite primary key keeps each (city, category) pair unique.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CityCategory::Table)
                    .if_not_exists()
                    .col(integer(CityCategory::CityId).not_null())
                    .col(integer(CityCategory::CategoryId).not_null())
                    .primary_key(
                        Index::create()
                            .name("pk_city_category")
                            .col(CityCategory::CityId)
                            .col(CityCategory::CategoryId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_city_category_city")
                            .from(CityCategory::Table, CityCategory::CityId)
                            .to(City::Table, City::CityId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_city_category_category")
                            .from(CityCategory::Table, CityCategory::CategoryId)
                            .to(Category::Table, Category::CategoryId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(CityCategory::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum CityCategory { Table, CityId, CategoryId }

#[derive(DeriveIden)]
enum City { Table, CityId }

#[derive(DeriveIden)]
enum Category { Table, CategoryId }
