//! PostgreSQL connection setup
//!
//! The generator holds exactly one connection for the whole run. There is
//! no pool: the connection is opened at startup, used for the two catalog
//! queries and closed before the process exits.

use sqlx::postgres::{PgConnectOptions, PgConnection};
use sqlx::ConnectOptions;
use std::str::FromStr;

use crate::config::DatabaseConfig;
use crate::db::CatalogError;

/// Build connection options for the named database.
///
/// Starts from `config.url` when set, otherwise from the libpq environment
/// (`PGHOST`, `PGPORT`, `PGUSER`, `PGPASSWORD`). The database name always
/// comes from the caller.
pub fn connect_options(
    config: &DatabaseConfig,
    database: &str,
) -> Result<PgConnectOptions, CatalogError> {
    let base = match &config.url {
        Some(url) => PgConnectOptions::from_str(url)
            .map_err(|e| CatalogError::connection(database, e))?,
        None => PgConnectOptions::new(),
    };

    Ok(base
        .database(database)
        .application_name(&config.application_name))
}

/// Open the single connection used for a run.
pub async fn connect(
    config: &DatabaseConfig,
    database: &str,
) -> Result<PgConnection, CatalogError> {
    let options = connect_options(config, database)?;

    tracing::debug!(
        "Connecting to {}:{} database {}",
        options.get_host(),
        options.get_port(),
        database
    );

    options
        .connect()
        .await
        .map_err(|e| CatalogError::connection(database, e))
}
