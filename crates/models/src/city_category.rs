//! Association rows between cities and categories.
//!
//! Neither side owns the other: removing a row never removes a city or a
//! category.
use sea_orm::{entity::prelude::*, ActiveModelTrait, ConnectionTrait, EntityTrait, QueryFilter, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::{category, city};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "city_category")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub city_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub category_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { City, Category }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::City => Entity::belongs_to(city::Entity)
                .from(Column::CityId)
                .to(city::Column::CityId)
                .on_delete(ForeignKeyAction::Cascade)
                .into(),
            Relation::Category => Entity::belongs_to(category::Entity)
                .from(Column::CategoryId)
                .to(category::Column::CategoryId)
                .on_delete(ForeignKeyAction::Cascade)
                .into(),
        }
    }
}

impl Related<city::Entity> for Entity {
    fn to() -> RelationDef { Relation::City.def() }
}

impl Related<category::Entity> for Entity {
    fn to() -> RelationDef { Relation::Category.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn exists<C: ConnectionTrait>(db: &C, city_id: i32, category_id: i32) -> Result<bool, ModelError> {
    let found = Entity::find_by_id((city_id, category_id)).one(db).await.map_err(ModelError::db)?;
    Ok(found.is_some())
}

/// Associate a city with a category. Linking an already linked pair is a
/// no-op; returns true only when a new row was written.
pub async fn link<C: ConnectionTrait>(db: &C, city_id: i32, category_id: i32) -> Result<bool, ModelError> {
    if exists(db, city_id, category_id).await? {
        return Ok(false);
    }
    let am = ActiveModel { city_id: Set(city_id), category_id: Set(category_id) };
    am.insert(db).await.map_err(ModelError::db)?;
    Ok(true)
}

/// Drop every association row of a city; returns the number removed.
pub async fn unlink_city<C: ConnectionTrait>(db: &C, city_id: i32) -> Result<u64, ModelError> {
    let res = Entity::delete_many()
        .filter(Column::CityId.eq(city_id))
        .exec(db)
        .await
        .map_err(ModelError::db)?;
    Ok(res.rows_affected)
}

pub async fn find_by_city<C: ConnectionTrait>(db: &C, city_id: i32) -> Result<Vec<Model>, ModelError> {
    Entity::find()
        .filter(Column::CityId.eq(city_id))
        .all(db)
        .await
        .map_err(ModelError::db)
}
