use std::{env, net::SocketAddr, sync::Arc};

use axum::Router;
use common::utils::logging::init_logging_default;
use dotenvy::dotenv;
use migration::MigratorTrait;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::routes::{self, user::ServerState};
use service::password::PasswordEncryptor;
use service::registration::repo::seaorm::SeaOrmUserRepository;
use service::registration::RegistrationService;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load bind address and hashing cost from configs, falling back to env vars.
fn load_runtime_settings() -> anyhow::Result<(SocketAddr, u32)> {
    let (host, port, cost) = match configs::AppConfig::load_and_validate() {
        Ok(cfg) => (cfg.server.host, cfg.server.port, cfg.hashing.cost),
        Err(e) => {
            warn!(error = %e, "config file missing or invalid; using env/default settings");
            let host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
            let port = env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(8080);
            let cost = env::var("HASH_COST")
                .ok()
                .and_then(|c| c.parse::<u32>().ok())
                .unwrap_or(configs::DEFAULT_HASH_COST);
            (host, port, cost)
        }
    };
    Ok((format!("{}:{}", host, port).parse()?, cost))
}

/// Public entry: connect the database, run migrations, build the app and
/// serve it.
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging_default();

    let (addr, hash_cost) = load_runtime_settings()?;

    let db = models::db::connect().await?;
    migration::Migrator::up(&db, None).await?;

    let repo = Arc::new(SeaOrmUserRepository { db });
    let registration = Arc::new(RegistrationService::new(
        repo,
        PasswordEncryptor::new(hash_cost),
    ));
    let state = ServerState { registration };

    let app: Router = routes::build_router(build_cors(), state);

    info!(%addr, "starting to-do list API");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_config_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join("todo_api_invalid_config.toml");
        std::fs::write(&path, "[server]\nhost = \"127.0.0.1\"\nport = 0\n").unwrap();
        std::env::set_var("CONFIG_PATH", &path);
        std::env::remove_var("SERVER_HOST");
        std::env::remove_var("SERVER_PORT");
        std::env::remove_var("HASH_COST");

        let (addr, cost) = load_runtime_settings().unwrap();
        assert_eq!(addr.port(), 8080);
        assert_eq!(cost, configs::DEFAULT_HASH_COST);

        std::env::remove_var("CONFIG_PATH");
        let _ = std::fs::remove_file(&path);
    }
}
