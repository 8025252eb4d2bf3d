use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Attraction: lookups of a city's attractions
        manager
            .create_index(
                Index::create()
                    .name("idx_attraction_city")
                    .table(Attraction::Table)
                    .col(Attraction::CityId)
                    .to_owned(),
            )
            .await?;

        // CityCategory: reverse lookups from a category to its cities
        manager
            .create_index(
                Index::create()
                    .name("idx_city_category_category")
                    .table(CityCategory::Table)
                    .col(CityCategory::CategoryId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_city_category_category").table(CityCategory::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_attraction_city").table(Attraction::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Attraction { Table, CityId }

#[derive(DeriveIden)]
enum CityCategory { Table, CategoryId }
