//! Create `attraction` table, owned by `city` through a non-null foreign key.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Attraction::Table)
                    .if_not_exists()
                    .col(pk_auto(Attraction::AttractionId))
                    .col(integer(Attraction::CityId).not_null())
                    .col(string_len_null(Attraction::AttractionName, 128))
                    .col(text_null(Attraction::Description))
                    .col(string_len_null(Attraction::TicketPrice, 64))
                    .col(string_len_null(Attraction::VisitorsYearly, 64))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_attraction_city")
                            .from(Attraction::Table, Attraction::CityId)
                            .to(City::Table, City::CityId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Attraction::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Attraction {
    Table,
    AttractionId,
    CityId,
    AttractionName,
    Description,
    TicketPrice,
    VisitorsYearly,
}

#[derive(DeriveIden)]
enum City { Table, CityId }
