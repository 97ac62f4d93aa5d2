/**
 * Server Configuration
 *
 * Configuration is loaded from environment variables once at startup
 * into an `AppConfig`; nothing reads the environment per request.
 *
 * # Variables
 *
 * - `DATABASE_URL` (required) - Postgres connection string
 * - `JWT_SECRET` (required) - token signing secret
 * - `TOKEN_TTL_SECS` (optional) - session token lifetime, default 30 days
 * - `SERVER_PORT` (optional) - listen port, default 3000
 *
 * Unlike optional integrations, the document store and the signing
 * secret are hard requirements: startup fails without them.
 */

use sqlx::PgPool;
use thiserror::Error;

use crate::store::PgStore;

const DEFAULT_TOKEN_TTL_SECS: i64 = 30 * 24 * 60 * 60;
const DEFAULT_PORT: u16 = 3000;

/// Errors raised while loading configuration or connecting the store
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),

    #[error("invalid value for {name}: {value}")]
    InvalidVar { name: &'static str, value: String },

    #[error("failed to connect to database: {0}")]
    Connect(#[source] sqlx::Error),

    #[error("failed to run database migrations: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

/// Process-wide configuration, loaded once at startup
#[derive(Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub jwt_secret: String,
    pub token_ttl_secs: i64,
    pub port: u16,
}

impl AppConfig {
    /// Load configuration from the environment
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url =
            std::env::var("DATABASE_URL").map_err(|_| ConfigError::MissingVar("DATABASE_URL"))?;
        let jwt_secret =
            std::env::var("JWT_SECRET").map_err(|_| ConfigError::MissingVar("JWT_SECRET"))?;

        let token_ttl_secs = match std::env::var("TOKEN_TTL_SECS") {
            Ok(raw) => raw
                .parse::<i64>()
                .map_err(|_| ConfigError::InvalidVar { name: "TOKEN_TTL_SECS", value: raw })?,
            Err(_) => DEFAULT_TOKEN_TTL_SECS,
        };

        let port = match std::env::var("SERVER_PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidVar { name: "SERVER_PORT", value: raw })?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self { database_url, jwt_secret, token_ttl_secs, port })
    }
}

/// Connect the Postgres-backed document store and run migrations
pub async fn connect_store(config: &AppConfig) -> Result<PgStore, ConfigError> {
    tracing::info!("connecting to database");
    let pool = PgPool::connect(&config.database_url).await.map_err(ConfigError::Connect)?;

    tracing::info!("running database migrations");
    sqlx::migrate!().run(&pool).await?;

    Ok(PgStore::new(pool))
}
