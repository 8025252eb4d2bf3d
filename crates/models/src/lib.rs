//! SeaORM entities for cities, attractions, categories and their association
//! rows, plus the per-entity repository functions the service layer calls.
//!
//! Every repository function is generic over `ConnectionTrait`, so it runs the
//! same on a pooled `DatabaseConnection` or inside a `DatabaseTransaction`.

pub mod errors;
pub mod db;
pub mod city;
pub mod attraction;
pub mod category;
pub mod city_category;

#[cfg(test)]
mod tests;
