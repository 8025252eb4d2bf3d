use sea_orm::{entity::prelude::*, ActiveModelTrait, ConnectionTrait, EntityTrait, QueryOrder};
use serde::{Deserialize, Serialize};

use crate::errors::{validate_len, ModelError};
use crate::{attraction, category, city_category};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "city")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub city_id: i32,
    pub city_name: Option<String>,
    pub country: Option<String>,
    pub language: Option<String>,
    pub currency: Option<String>,
    pub safety_level: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Attraction, CityCategory }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Attraction => Entity::has_many(attraction::Entity).into(),
            Relation::CityCategory => Entity::has_many(city_category::Entity).into(),
        }
    }
}

impl Related<attraction::Entity> for Entity {
    fn to() -> RelationDef { Relation::Attraction.def() }
}

impl Related<city_category::Entity> for Entity {
    fn to() -> RelationDef { Relation::CityCategory.def() }
}

impl Related<category::Entity> for Entity {
    fn to() -> RelationDef { city_category::Relation::Category.def() }

    fn via() -> Option<RelationDef> { Some(city_category::Relation::City.def().rev()) }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate(am: &ActiveModel) -> Result<(), ModelError> {
    validate_len("cityName", set_str(&am.city_name), 128)?;
    validate_len("country", set_str(&am.country), 128)?;
    validate_len("language", set_str(&am.language), 64)?;
    validate_len("currency", set_str(&am.currency), 64)?;
    validate_len("safetyLevel", set_str(&am.safety_level), 64)?;
    Ok(())
}

fn set_str(v: &sea_orm::ActiveValue<Option<String>>) -> Option<&str> {
    match v {
        sea_orm::ActiveValue::Set(s) | sea_orm::ActiveValue::Unchanged(s) => s.as_deref(),
        sea_orm::ActiveValue::NotSet => None,
    }
}

/// Insert a new city; the id is assigned by the store.
pub async fn create<C: ConnectionTrait>(db: &C, am: ActiveModel) -> Result<Model, ModelError> {
    validate(&am)?;
    am.insert(db).await.map_err(ModelError::db)
}

pub async fn find_by_id<C: ConnectionTrait>(db: &C, id: i32) -> Result<Option<Model>, ModelError> {
    Entity::find_by_id(id).one(db).await.map_err(ModelError::db)
}

/// Every city, ordered by id.
pub async fn find_all<C: ConnectionTrait>(db: &C) -> Result<Vec<Model>, ModelError> {
    Entity::find()
        .order_by_asc(Column::CityId)
        .all(db)
        .await
        .map_err(ModelError::db)
}

/// Write back an existing city.
pub async fn save<C: ConnectionTrait>(db: &C, am: ActiveModel) -> Result<Model, ModelError> {
    validate(&am)?;
    am.update(db).await.map_err(ModelError::db)
}

/// Delete the city row only; returns true if a row was removed.
pub async fn delete<C: ConnectionTrait>(db: &C, id: i32) -> Result<bool, ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await.map_err(ModelError::db)?;
    Ok(res.rows_affected > 0)
}
