use sea_orm::DbErr;
use thiserror::Error;

use models::errors::ModelError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    /// The entity exists but not under the parent named in the request.
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("unsupported operation: {0}")]
    Unsupported(String),
    #[error("database error: {0}")]
    Db(String),
}

impl ServiceError {
    pub fn city_not_found(id: i32) -> Self {
        Self::NotFound(format!("City with ID={} was not found.", id))
    }

    pub fn attraction_not_found(id: i32) -> Self {
        Self::NotFound(format!("Attraction with ID={} does not exist.", id))
    }

    pub fn category_not_found(id: i32) -> Self {
        Self::NotFound(format!("Category with ID={} does not exist.", id))
    }

    /// Message without the variant prefix, for response bodies.
    pub fn detail(&self) -> &str {
        match self {
            Self::Validation(m)
            | Self::NotFound(m)
            | Self::Conflict(m)
            | Self::Unsupported(m)
            | Self::Db(m) => m,
        }
    }
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Validation(m) => Self::Validation(m),
            ModelError::Db(m) => Self::Db(m),
        }
    }
}

impl From<DbErr> for ServiceError {
    fn from(e: DbErr) -> Self { Self::Db(e.to_string()) }
}
