use std::{env, net::SocketAddr};

use axum::Router;
use common::utils::logging::init_logging_from_env;
use dotenvy::dotenv;
use migration::MigratorTrait;
use models::db::{connect_with_config, DatabaseConfig};
use sea_orm::DatabaseConnection;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::errors::StartupError;
use crate::routes;
use crate::state::ServerState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Everything `run` needs before touching the network.
#[derive(Debug, Clone)]
pub struct Settings {
    pub addr: SocketAddr,
    pub database: DatabaseConfig,
    pub run_migrations: bool,
}

/// Read `config.toml` (or `CONFIG_PATH`); without a usable file fall back to
/// `SERVER_HOST`, `SERVER_PORT` and `DATABASE_URL`.
pub fn load_settings() -> Result<Settings, StartupError> {
    match configs::AppConfig::load_and_validate() {
        Ok(cfg) => {
            let addr = parse_addr(&cfg.server.host, cfg.server.port)?;
            Ok(Settings {
                addr,
                database: DatabaseConfig::from(&cfg.database),
                run_migrations: cfg.database.run_migrations,
            })
        }
        Err(e) => {
            warn!(error = %e, "config file unavailable, using environment");
            let host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
            let port = env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(8080);
            Ok(Settings {
                addr: parse_addr(&host, port)?,
                database: DatabaseConfig::from_env(),
                run_migrations: true,
            })
        }
    }
}

fn parse_addr(host: &str, port: u16) -> Result<SocketAddr, StartupError> {
    format!("{}:{}", host, port)
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("bind address {}:{}: {}", host, port, e)))
}

/// Apply pending migrations.
pub async fn migrate(db: &DatabaseConnection) -> Result<(), StartupError> {
    migration::Migrator::up(db, None)
        .await
        .map_err(|e| StartupError::Migration(e.to_string()))?;
    info!("migrations applied");
    Ok(())
}

/// Router over an already connected (and migrated) database.
pub fn build_app(db: DatabaseConnection) -> Router {
    routes::build_router(ServerState::new(db), build_cors())
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging_from_env();

    let settings = load_settings()?;
    let db = connect_with_config(&settings.database).await?;
    if settings.run_migrations {
        migrate(&db).await?;
    }

    let app = build_app(db);

    let listener = tokio::net::TcpListener::bind(settings.addr).await?;
    info!(addr = %settings.addr, "starting world-attractions server");
    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_host_is_invalid_config() {
        let err = parse_addr("not a host", 8080).unwrap_err();
        assert!(matches!(err, StartupError::InvalidConfig(_)));
        assert_eq!(parse_addr("0.0.0.0", 9000).unwrap().port(), 9000);
    }
}
