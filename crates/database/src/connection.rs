use crate::error::DbError;
use configuration::Settings;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};
use sqlx::PgPool;
use std::time::Duration;

/// Establishes a connection pool to the PostgreSQL database.
///
/// This function builds the connection options from the environment-sourced
/// [`Settings`], creates a connection pool with robust settings, and verifies
/// liveness with a round-trip query before handing the pool out. A failure
/// here is fatal to the caller: there is no retry and no degraded mode.
pub async fn connect(settings: &Settings) -> Result<PgPool, DbError> {
    let port = settings
        .database_port()
        .map_err(|e| DbError::ConnectionConfigError(e.to_string()))?;

    let options = PgConnectOptions::new()
        .host(&settings.db_host)
        .port(port)
        .username(&settings.db_user)
        .password(&settings.db_password)
        .database(&settings.db_name)
        .ssl_mode(PgSslMode::Disable);

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(5))
        .connect_with(options)
        .await?;

    // One round trip to prove the connection is live, not just configured.
    sqlx::query("SELECT 1").execute(&pool).await?;

    tracing::info!("Connected to database");

    Ok(pool)
}
