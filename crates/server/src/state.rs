use sea_orm::DatabaseConnection;
use service::CityService;

/// Shared handler state; cloning is cheap (pool handle inside).
#[derive(Clone)]
pub struct ServerState {
    pub city_svc: CityService,
}

impl ServerState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { city_svc: CityService::new(db) }
    }
}
