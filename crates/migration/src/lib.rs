//! Migrator registering entity-specific migrations in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240301_000001_create_city;
mod m20240301_000002_create_attraction;
mod m20240301_000003_create_category;
mod m20240301_000004_create_city_category;
mod m20240301_000005_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240301_000001_create_city::Migration),
            Box::new(m20240301_000002_create_attraction::Migration),
            Box::new(m20240301_000003_create_category::Migration),
            Box::new(m20240301_000004_create_city_category::Migration),
            // Indexes should always be applied last
            Box::new(m20240301_000005_add_indexes::Migration),
        ]
    }
}
