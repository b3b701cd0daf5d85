use actix_cors::Cors;
use anyhow::Context;
use migration::Migrator;
use migration::MigratorTrait;
use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::OnceLock;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{redact_database_url, AppConfig};
use crate::store::Store;

static DOTENV_INIT: OnceLock<()> = OnceLock::new();
static TRACING_INIT: OnceLock<()> = OnceLock::new();

/// Load environment variables from .env file exactly once
pub fn load_dotenv() {
    DOTENV_INIT.get_or_init(|| {
        dotenv::dotenv().ok();
    });
}

/// Initialize tracing exactly once
pub fn init_tracing() {
    TRACING_INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("info,actix_web=info,sea_orm=info"));

        let is_production =
            env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string()) == "production";

        if is_production {
            // JSON formatter for production
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        } else {
            // Pretty formatter for development
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
    });
}

/// Connect to the configured database, bring the schema up to date and hand
/// back the store the handlers share.
pub async fn connect_and_migrate(config: &AppConfig) -> anyhow::Result<Store> {
    info!("Database URL: {}", redact_database_url(&config.database_url));

    let mut options = ConnectOptions::new(config.database_url.clone());
    if let Some(max) = config.max_connections {
        options.max_connections(max);
    }

    let db = Database::connect(options)
        .await
        .context("Failed to connect to database")?;

    info!("Connected to database successfully!");

    Migrator::up(&db, None)
        .await
        .context("Failed to run migrations")?;

    info!("Database migrations completed successfully!");

    Ok(Store::new(db))
}

/// CORS policy for the API. Without a configured origin every origin is allowed.
pub fn cors(config: &AppConfig) -> Cors {
    let cors = match &config.cors_allowed_origin {
        Some(origin) => Cors::default().allowed_origin(origin),
        None => Cors::default().allow_any_origin(),
    };

    cors.allowed_methods(vec!["GET", "POST", "PATCH", "DELETE", "OPTIONS"])
        .allowed_headers(vec![http::header::AUTHORIZATION, http::header::ACCEPT])
        .allowed_header(http::header::CONTENT_TYPE)
        .max_age(3600)
}
