use sea_orm::{entity::prelude::*, ActiveModelTrait, ConnectionTrait, EntityTrait, QueryOrder};
use serde::{Deserialize, Serialize};

use crate::errors::{validate_len, ModelError};
use crate::{city, city_category};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "category")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub category_id: i32,
    pub category_name: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { CityCategory }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::CityCategory => Entity::has_many(city_category::Entity).into(),
        }
    }
}

impl Related<city_category::Entity> for Entity {
    fn to() -> RelationDef { Relation::CityCategory.def() }
}

impl Related<city::Entity> for Entity {
    fn to() -> RelationDef { city_category::Relation::City.def() }

    fn via() -> Option<RelationDef> { Some(city_category::Relation::Category.def().rev()) }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn create<C: ConnectionTrait>(db: &C, am: ActiveModel) -> Result<Model, ModelError> {
    if let sea_orm::ActiveValue::Set(name) = &am.category_name {
        validate_len("categoryName", name.as_deref(), 128)?;
    }
    am.insert(db).await.map_err(ModelError::db)
}

pub async fn find_by_id<C: ConnectionTrait>(db: &C, id: i32) -> Result<Option<Model>, ModelError> {
    Entity::find_by_id(id).one(db).await.map_err(ModelError::db)
}

pub async fn find_all<C: ConnectionTrait>(db: &C) -> Result<Vec<Model>, ModelError> {
    Entity::find()
        .order_by_asc(Column::CategoryId)
        .all(db)
        .await
        .map_err(ModelError::db)
}

pub async fn save<C: ConnectionTrait>(db: &C, am: ActiveModel) -> Result<Model, ModelError> {
    if let sea_orm::ActiveValue::Set(name) = &am.category_name {
        validate_len("categoryName", name.as_deref(), 128)?;
    }
    am.update(db).await.map_err(ModelError::db)
}

/// Cities linked to this category through `city_category`, ordered by id.
pub async fn cities<C: ConnectionTrait>(db: &C, category: &Model) -> Result<Vec<city::Model>, ModelError> {
    category
        .find_related(city::Entity)
        .order_by_asc(city::Column::CityId)
        .all(db)
        .await
        .map_err(ModelError::db)
}
