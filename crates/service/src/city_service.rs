use sea_orm::{
    AccessMode, ConnectionTrait, DatabaseConnection, DatabaseTransaction, DbBackend, LoaderTrait, Set,
    TransactionTrait,
};
use tracing::{info, instrument, warn};

use models::{attraction, category, city, city_category};

use crate::domain::{CityAttraction, CityCategory, CityData};
use crate::errors::ServiceError;

/// Application service for cities and the attractions and categories that
/// hang off them.
///
/// Each public method runs in its own transaction: writes commit on success,
/// and an early `?` return drops the transaction, which rolls it back. Every
/// existence check happens before the first write.
#[derive(Clone)]
pub struct CityService {
    db: DatabaseConnection,
}

impl CityService {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }

    async fn begin_read(&self) -> Result<DatabaseTransaction, ServiceError> {
        // SQLite has no per-transaction access mode
        let access_mode = match self.db.get_database_backend() {
            DbBackend::Postgres => Some(AccessMode::ReadOnly),
            _ => None,
        };
        Ok(self.db.begin_with_config(None, access_mode).await?)
    }

    async fn begin_write(&self) -> Result<DatabaseTransaction, ServiceError> {
        Ok(self.db.begin().await?)
    }

    /// Create a city when `data.city_id` is `None`, otherwise overwrite every
    /// scalar field of the existing city. Collections in `data` are ignored.
    #[instrument(skip(self, data), fields(city_id = ?data.city_id))]
    pub async fn upsert_city(&self, data: CityData) -> Result<CityData, ServiceError> {
        let txn = self.begin_write().await?;
        let saved = match data.city_id {
            None => {
                let mut am = city::ActiveModel::default();
                copy_city_fields(&mut am, &data);
                city::create(&txn, am).await?
            }
            Some(id) => {
                let mut am: city::ActiveModel = find_city(&txn, id).await?.into();
                copy_city_fields(&mut am, &data);
                city::save(&txn, am).await?
            }
        };
        let out = load_city_data(&txn, vec![saved]).await?.pop();
        txn.commit().await?;
        let out = out.ok_or_else(|| ServiceError::Db("saved city could not be reloaded".into()))?;
        info!(city_id = ?out.city_id, "city_saved");
        Ok(out)
    }

    /// Every city with its attractions and categories, ordered by id.
    pub async fn list_cities(&self) -> Result<Vec<CityData>, ServiceError> {
        let txn = self.begin_read().await?;
        let cities = city::find_all(&txn).await?;
        let out = load_city_data(&txn, cities).await?;
        txn.commit().await?;
        info!(count = out.len(), "cities_listed");
        Ok(out)
    }

    #[instrument(skip(self))]
    pub async fn get_city(&self, city_id: i32) -> Result<CityData, ServiceError> {
        let txn = self.begin_read().await?;
        let found = find_city(&txn, city_id).await?;
        let out = load_city_data(&txn, vec![found]).await?.pop();
        txn.commit().await?;
        out.ok_or_else(|| ServiceError::city_not_found(city_id))
    }

    /// Delete a city together with its attractions and its category links.
    /// The categories themselves are kept.
    #[instrument(skip(self))]
    pub async fn delete_city(&self, city_id: i32) -> Result<(), ServiceError> {
        let txn = self.begin_write().await?;
        find_city(&txn, city_id).await?;
        let links = city_category::unlink_city(&txn, city_id).await?;
        let attractions = attraction::delete_by_city(&txn, city_id).await?;
        city::delete(&txn, city_id).await?;
        txn.commit().await?;
        info!(city_id, attractions, links, "city_deleted");
        Ok(())
    }

    /// Bulk deletion is permanently disabled, whatever the store holds.
    pub async fn delete_all_cities(&self) -> Result<(), ServiceError> {
        warn!("attempt to delete all cities rejected");
        Err(ServiceError::Unsupported("All cities cannot be deleted.".into()))
    }

    /// Create or overwrite an attraction and (re)attach it to `city_id`.
    /// Passing another city's id with an existing attraction id moves it.
    #[instrument(skip(self, data), fields(attraction_id = ?data.attraction_id))]
    pub async fn upsert_attraction(&self, city_id: i32, data: CityAttraction) -> Result<CityAttraction, ServiceError> {
        let txn = self.begin_write().await?;
        find_city(&txn, city_id).await?;
        let saved = match data.attraction_id {
            None => {
                let mut am = attraction::ActiveModel::default();
                copy_attraction_fields(&mut am, city_id, &data);
                attraction::create(&txn, am).await?
            }
            Some(id) => {
                let mut am: attraction::ActiveModel = find_attraction(&txn, id).await?.into();
                copy_attraction_fields(&mut am, city_id, &data);
                attraction::save(&txn, am).await?
            }
        };
        txn.commit().await?;
        info!(city_id, attraction_id = saved.attraction_id, "attraction_saved");
        Ok(CityAttraction::from(saved))
    }

    /// Fetch an attraction, checking it belongs to `city_id`.
    #[instrument(skip(self))]
    pub async fn get_attraction(&self, city_id: i32, attraction_id: i32) -> Result<CityAttraction, ServiceError> {
        let txn = self.begin_read().await?;
        let found = find_attraction(&txn, attraction_id).await?;
        txn.commit().await?;
        if found.city_id != city_id {
            return Err(ServiceError::Conflict(format!(
                "Attraction with ID={} is not in the city with ID={}",
                attraction_id, city_id
            )));
        }
        Ok(CityAttraction::from(found))
    }

    #[instrument(skip(self))]
    pub async fn delete_attraction(&self, attraction_id: i32) -> Result<(), ServiceError> {
        let txn = self.begin_write().await?;
        find_attraction(&txn, attraction_id).await?;
        attraction::delete(&txn, attraction_id).await?;
        txn.commit().await?;
        info!(attraction_id, "attraction_deleted");
        Ok(())
    }

    /// Create or rename a category and link it to `city_id`. Linking a pair
    /// that is already linked changes nothing.
    #[instrument(skip(self, data), fields(category_id = ?data.category_id))]
    pub async fn upsert_category(&self, city_id: i32, data: CityCategory) -> Result<CityCategory, ServiceError> {
        let txn = self.begin_write().await?;
        find_city(&txn, city_id).await?;
        let saved = match data.category_id {
            None => {
                let am = category::ActiveModel { category_name: Set(data.category_name.clone()), ..Default::default() };
                category::create(&txn, am).await?
            }
            Some(id) => {
                let mut am: category::ActiveModel = find_category(&txn, id).await?.into();
                am.category_name = Set(data.category_name.clone());
                category::save(&txn, am).await?
            }
        };
        let linked = city_category::link(&txn, city_id, saved.category_id).await?;
        txn.commit().await?;
        info!(city_id, category_id = saved.category_id, linked, "category_saved");
        Ok(CityCategory::from(saved))
    }

    /// Cities linked to a category, scalar fields only.
    #[instrument(skip(self))]
    pub async fn list_cities_in_category(&self, category_id: i32) -> Result<Vec<CityData>, ServiceError> {
        let txn = self.begin_read().await?;
        let found = find_category(&txn, category_id).await?;
        let cities = category::cities(&txn, &found).await?;
        txn.commit().await?;
        Ok(cities.into_iter().map(CityData::from).collect())
    }
}

async fn find_city<C: ConnectionTrait>(db: &C, id: i32) -> Result<city::Model, ServiceError> {
    city::find_by_id(db, id).await?.ok_or_else(|| ServiceError::city_not_found(id))
}

async fn find_attraction<C: ConnectionTrait>(db: &C, id: i32) -> Result<attraction::Model, ServiceError> {
    attraction::find_by_id(db, id).await?.ok_or_else(|| ServiceError::attraction_not_found(id))
}

async fn find_category<C: ConnectionTrait>(db: &C, id: i32) -> Result<category::Model, ServiceError> {
    category::find_by_id(db, id).await?.ok_or_else(|| ServiceError::category_not_found(id))
}

fn copy_city_fields(am: &mut city::ActiveModel, data: &CityData) {
    am.city_name = Set(data.city_name.clone());
    am.country = Set(data.country.clone());
    am.language = Set(data.language.clone());
    am.currency = Set(data.currency.clone());
    am.safety_level = Set(data.safety_level.clone());
}

fn copy_attraction_fields(am: &mut attraction::ActiveModel, city_id: i32, data: &CityAttraction) {
    am.city_id = Set(city_id);
    am.attraction_name = Set(data.attraction_name.clone());
    am.description = Set(data.description.clone());
    am.ticket_price = Set(data.ticket_price.clone());
    am.visitors_yearly = Set(data.visitors_yearly.clone());
}

/// Attach attractions and categories to each city, preserving input order.
async fn load_city_data<C: ConnectionTrait>(db: &C, cities: Vec<city::Model>) -> Result<Vec<CityData>, ServiceError> {
    if cities.is_empty() {
        return Ok(Vec::new());
    }
    let attractions = cities.load_many(attraction::Entity, db).await?;
    let categories = cities.load_many_to_many(category::Entity, city_category::Entity, db).await?;
    Ok(cities
        .into_iter()
        .zip(attractions)
        .zip(categories)
        .map(|((c, a), k)| CityData::from_parts(c, a, k))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    fn city_named(name: &str) -> CityData {
        CityData { city_name: Some(name.into()), country: Some("Somewhere".into()), ..Default::default() }
    }

    fn attraction_named(name: &str) -> CityAttraction {
        CityAttraction { attraction_name: Some(name.into()), ..Default::default() }
    }

    fn category_named(name: &str) -> CityCategory {
        CityCategory { category_name: Some(name.into()), ..Default::default() }
    }

    async fn service() -> anyhow::Result<CityService> {
        Ok(CityService::new(get_db().await?))
    }

    #[tokio::test]
    async fn create_assigns_fresh_ids_and_update_keeps_them() -> Result<(), anyhow::Error> {
        let svc = service().await?;

        let paris = svc.upsert_city(city_named("Paris")).await?;
        let rome = svc.upsert_city(city_named("Rome")).await?;
        let paris_id = paris.city_id.unwrap();
        assert_ne!(paris.city_id, rome.city_id);

        let updated = svc
            .upsert_city(CityData { city_id: Some(paris_id), city_name: Some("Paris".into()), currency: Some("EUR".into()), ..Default::default() })
            .await?;
        assert_eq!(updated.city_id, Some(paris_id));
        assert_eq!(updated.currency.as_deref(), Some("EUR"));
        // every scalar field is rewritten, including ones left out
        assert_eq!(updated.country, None);
        assert_eq!(svc.list_cities().await?.len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn update_of_unknown_city_is_not_found() -> Result<(), anyhow::Error> {
        let svc = service().await?;
        let err = svc.upsert_city(CityData { city_id: Some(99), ..city_named("Ghost") }).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
        assert_eq!(err.detail(), "City with ID=99 was not found.");
        assert!(svc.list_cities().await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn upsert_city_returns_current_children() -> Result<(), anyhow::Error> {
        let svc = service().await?;
        let id = svc.upsert_city(city_named("Paris")).await?.city_id.unwrap();
        svc.upsert_attraction(id, attraction_named("Louvre")).await?;
        svc.upsert_category(id, category_named("Museums")).await?;

        let renamed = svc.upsert_city(CityData { city_id: Some(id), ..city_named("Paris, France") }).await?;
        assert_eq!(renamed.attractions.len(), 1);
        assert_eq!(renamed.categories.len(), 1);

        let fetched = svc.get_city(id).await?;
        assert_eq!(fetched, renamed);
        Ok(())
    }

    #[tokio::test]
    async fn deleted_city_is_gone_with_its_attractions_but_categories_stay() -> Result<(), anyhow::Error> {
        let svc = service().await?;
        let id = svc.upsert_city(city_named("Paris")).await?.city_id.unwrap();
        let tower = svc.upsert_attraction(id, attraction_named("Eiffel Tower")).await?;
        let cat = svc.upsert_category(id, category_named("Landmarks")).await?;

        svc.delete_city(id).await?;

        assert!(matches!(svc.get_city(id).await, Err(ServiceError::NotFound(_))));
        let err = svc.get_attraction(id, tower.attraction_id.unwrap()).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
        let cities = svc.list_cities_in_category(cat.category_id.unwrap()).await?;
        assert!(cities.is_empty());
        assert!(matches!(svc.delete_city(id).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn delete_all_cities_always_fails() -> Result<(), anyhow::Error> {
        let svc = service().await?;
        assert!(matches!(svc.delete_all_cities().await, Err(ServiceError::Unsupported(_))));

        svc.upsert_city(city_named("Paris")).await?;
        assert!(matches!(svc.delete_all_cities().await, Err(ServiceError::Unsupported(_))));
        assert_eq!(svc.list_cities().await?.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn attraction_under_wrong_city_is_conflict() -> Result<(), anyhow::Error> {
        let svc = service().await?;
        let a = svc.upsert_city(city_named("A")).await?.city_id.unwrap();
        let b = svc.upsert_city(city_named("B")).await?.city_id.unwrap();
        let attr = svc.upsert_attraction(a, attraction_named("Museum")).await?;
        let attr_id = attr.attraction_id.unwrap();

        assert_eq!(svc.get_attraction(a, attr_id).await?, attr);
        let err = svc.get_attraction(b, attr_id).await.unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));
        assert_eq!(err.detail(), format!("Attraction with ID={} is not in the city with ID={}", attr_id, b));
        Ok(())
    }

    #[tokio::test]
    async fn attraction_can_move_between_cities() -> Result<(), anyhow::Error> {
        let svc = service().await?;
        let a = svc.upsert_city(city_named("A")).await?.city_id.unwrap();
        let b = svc.upsert_city(city_named("B")).await?.city_id.unwrap();
        let attr = svc.upsert_attraction(a, attraction_named("Statue")).await?;

        let moved = svc
            .upsert_attraction(b, CityAttraction { attraction_id: attr.attraction_id, ..attraction_named("Statue") })
            .await?;
        assert_eq!(moved.attraction_id, attr.attraction_id);
        assert!(svc.get_attraction(b, moved.attraction_id.unwrap()).await.is_ok());
        assert!(svc.get_city(a).await?.attractions.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn attraction_needs_existing_city_and_id() -> Result<(), anyhow::Error> {
        let svc = service().await?;
        let err = svc.upsert_attraction(7, attraction_named("Orphan")).await.unwrap_err();
        assert_eq!(err.detail(), "City with ID=7 was not found.");

        let city = svc.upsert_city(city_named("A")).await?.city_id.unwrap();
        let err = svc
            .upsert_attraction(city, CityAttraction { attraction_id: Some(55), ..attraction_named("Ghost") })
            .await
            .unwrap_err();
        assert_eq!(err.detail(), "Attraction with ID=55 does not exist.");
        assert!(matches!(svc.delete_attraction(55).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn deleting_attraction_leaves_city() -> Result<(), anyhow::Error> {
        let svc = service().await?;
        let city = svc.upsert_city(city_named("A")).await?.city_id.unwrap();
        let attr = svc.upsert_attraction(city, attraction_named("Gate")).await?.attraction_id.unwrap();

        svc.delete_attraction(attr).await?;
        assert!(matches!(svc.get_attraction(city, attr).await, Err(ServiceError::NotFound(_))));
        assert!(svc.get_city(city).await?.attractions.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn shared_category_lists_both_cities_without_children() -> Result<(), anyhow::Error> {
        let svc = service().await?;
        let a = svc.upsert_city(city_named("Kyoto")).await?.city_id.unwrap();
        let b = svc.upsert_city(city_named("Nara")).await?.city_id.unwrap();
        svc.upsert_attraction(a, attraction_named("Fushimi Inari")).await?;

        let cat = svc.upsert_category(a, category_named("Temples")).await?;
        let cat_id = cat.category_id.unwrap();
        let attached = svc
            .upsert_category(b, CityCategory { category_id: Some(cat_id), ..category_named("Temples") })
            .await?;
        assert_eq!(attached.category_id, Some(cat_id));
        // attaching twice adds nothing
        svc.upsert_category(b, CityCategory { category_id: Some(cat_id), ..category_named("Temples") }).await?;

        let cities = svc.list_cities_in_category(cat_id).await?;
        let ids: Vec<_> = cities.iter().map(|c| c.city_id).collect();
        assert_eq!(ids, vec![Some(a), Some(b)]);
        assert!(cities.iter().all(|c| c.attractions.is_empty() && c.categories.is_empty()));
        assert_eq!(svc.get_city(b).await?.categories.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn category_errors_are_not_found() -> Result<(), anyhow::Error> {
        let svc = service().await?;
        assert!(matches!(svc.upsert_category(1, category_named("X")).await, Err(ServiceError::NotFound(_))));
        let city = svc.upsert_city(city_named("A")).await?.city_id.unwrap();
        let err = svc
            .upsert_category(city, CityCategory { category_id: Some(8), ..category_named("X") })
            .await
            .unwrap_err();
        assert_eq!(err.detail(), "Category with ID=8 does not exist.");
        let err = svc.list_cities_in_category(8).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
        Ok(())
    }

    #[tokio::test]
    async fn renaming_category_through_any_city_updates_it() -> Result<(), anyhow::Error> {
        let svc = service().await?;
        let city = svc.upsert_city(city_named("A")).await?.city_id.unwrap();
        let cat = svc.upsert_category(city, category_named("Parks")).await?;
        let renamed = svc
            .upsert_category(city, CityCategory { category_id: cat.category_id, category_name: Some("Gardens".into()) })
            .await?;
        assert_eq!(renamed.category_name.as_deref(), Some("Gardens"));
        let listed = svc.get_city(city).await?;
        assert_eq!(listed.categories, vec![renamed]);
        Ok(())
    }

    #[tokio::test]
    async fn oversized_field_is_validation_error_and_nothing_is_written() -> Result<(), anyhow::Error> {
        let svc = service().await?;
        let err = svc.upsert_city(city_named(&"n".repeat(200))).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
        assert!(svc.list_cities().await?.is_empty());
        Ok(())
    }
}
