//! Service layer providing the city, attraction and category operations on
//! top of `models`.
//! - Owns transaction boundaries; repositories only see a connection.
//! - Maps persisted rows to and from the JSON transport objects in `domain`.
//! - Reports failures through `ServiceError`.

pub mod errors;
pub mod domain;
pub mod city_service;
#[cfg(test)]
pub mod test_support;

pub use city_service::CityService;
