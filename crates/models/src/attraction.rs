use sea_orm::{entity::prelude::*, ActiveModelTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};
use serde::{Deserialize, Serialize};

use crate::city;
use crate::errors::{validate_len, ModelError};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "attraction")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub attraction_id: i32,
    pub city_id: i32,
    pub attraction_name: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub ticket_price: Option<String>,
    pub visitors_yearly: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { City }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::City => Entity::belongs_to(city::Entity)
                .from(Column::CityId)
                .to(city::Column::CityId)
                .into(),
        }
    }
}

impl Related<city::Entity> for Entity {
    fn to() -> RelationDef { Relation::City.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate(am: &ActiveModel) -> Result<(), ModelError> {
    if let sea_orm::ActiveValue::Set(Some(name)) = &am.attraction_name {
        validate_len("attractionName", Some(name), 128)?;
    }
    if let sea_orm::ActiveValue::Set(Some(price)) = &am.ticket_price {
        validate_len("ticketPrice", Some(price), 64)?;
    }
    if let sea_orm::ActiveValue::Set(Some(visitors)) = &am.visitors_yearly {
        validate_len("visitorsYearly", Some(visitors), 64)?;
    }
    Ok(())
}

pub async fn create<C: ConnectionTrait>(db: &C, am: ActiveModel) -> Result<Model, ModelError> {
    validate(&am)?;
    am.insert(db).await.map_err(ModelError::db)
}

pub async fn find_by_id<C: ConnectionTrait>(db: &C, id: i32) -> Result<Option<Model>, ModelError> {
    Entity::find_by_id(id).one(db).await.map_err(ModelError::db)
}

pub async fn find_all<C: ConnectionTrait>(db: &C) -> Result<Vec<Model>, ModelError> {
    Entity::find()
        .order_by_asc(Column::AttractionId)
        .all(db)
        .await
        .map_err(ModelError::db)
}

pub async fn find_by_city<C: ConnectionTrait>(db: &C, city_id: i32) -> Result<Vec<Model>, ModelError> {
    Entity::find()
        .filter(Column::CityId.eq(city_id))
        .order_by_asc(Column::AttractionId)
        .all(db)
        .await
        .map_err(ModelError::db)
}

pub async fn save<C: ConnectionTrait>(db: &C, am: ActiveModel) -> Result<Model, ModelError> {
    validate(&am)?;
    am.update(db).await.map_err(ModelError::db)
}

pub async fn delete<C: ConnectionTrait>(db: &C, id: i32) -> Result<bool, ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await.map_err(ModelError::db)?;
    Ok(res.rows_affected > 0)
}

/// Remove every attraction owned by a city; returns the number removed.
pub async fn delete_by_city<C: ConnectionTrait>(db: &C, city_id: i32) -> Result<u64, ModelError> {
    let res = Entity::delete_many()
        .filter(Column::CityId.eq(city_id))
        .exec(db)
        .await
        .map_err(ModelError::db)?;
    Ok(res.rows_affected)
}
