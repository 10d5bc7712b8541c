//! Function catalog repository
//!
//! Reads stored function metadata from `pg_proc`, joined with the comments
//! in `pg_description`.
//!
//! This module provides:
//! - `CatalogRepository` trait defining the interface for catalog access
//! - `PgCatalogRepository` implementing the trait over one PostgreSQL connection

use async_trait::async_trait;
use sqlx::postgres::{PgConnection, PgRow};
use sqlx::{Connection, Row};

use crate::config::DatabaseConfig;
use crate::db::{connection, CatalogError};
use crate::models::FunctionDescriptor;
use crate::services::pattern::resolve_pattern;

/// Catalog repository trait
#[async_trait]
pub trait CatalogRepository: Send {
    /// Fetch every function whose name matches `pattern`.
    ///
    /// `pattern` uses `LIKE` wildcards with backslash as the escape
    /// character. Results are ordered by name, then by argument list.
    async fn fetch_functions(
        &mut self,
        pattern: &str,
    ) -> Result<Vec<FunctionDescriptor>, CatalogError>;
}

const FETCH_FUNCTIONS_SQL: &str = r#"
    SELECT proc.proname::text AS name,
           pg_get_function_identity_arguments(proc.oid) AS args,
           pg_get_function_result(proc.oid) AS result,
           dsc.description AS description
    FROM pg_proc proc
    LEFT JOIN pg_description dsc
           ON dsc.objoid = proc.oid
          AND dsc.classoid = 'pg_proc'::regclass
          AND dsc.objsubid = 0
    WHERE proc.proname LIKE $1 ESCAPE '\'
    ORDER BY proc.proname, args
"#;

/// SQLx-based catalog repository owning a single PostgreSQL connection
pub struct PgCatalogRepository {
    conn: PgConnection,
}

impl PgCatalogRepository {
    /// Wrap an already open connection
    pub fn new(conn: PgConnection) -> Self {
        Self { conn }
    }

    /// Open a connection to `database` and wrap it
    pub async fn connect(config: &DatabaseConfig, database: &str) -> Result<Self, CatalogError> {
        let conn = connection::connect(config, database).await?;
        tracing::info!("Connected to database {}", database);
        Ok(Self::new(conn))
    }

    /// Close the connection gracefully
    pub async fn close(self) {
        if let Err(e) = self.conn.close().await {
            tracing::warn!("Failed to close database connection: {}", e);
        }
    }
}

#[async_trait]
impl CatalogRepository for PgCatalogRepository {
    async fn fetch_functions(
        &mut self,
        pattern: &str,
    ) -> Result<Vec<FunctionDescriptor>, CatalogError> {
        let pattern = resolve_pattern(Some(pattern));

        let rows = sqlx::query(FETCH_FUNCTIONS_SQL)
            .bind(pattern)
            .fetch_all(&mut self.conn)
            .await
            .map_err(|e| CatalogError::query(pattern, e))?;

        let mut functions = Vec::with_capacity(rows.len());
        for row in &rows {
            functions.push(row_to_descriptor(row).map_err(|e| CatalogError::query(pattern, e))?);
        }

        tracing::debug!("Pattern {} matched {} functions", pattern, functions.len());
        Ok(functions)
    }
}

/// Convert a catalog row to a FunctionDescriptor
fn row_to_descriptor(row: &PgRow) -> Result<FunctionDescriptor, sqlx::Error> {
    Ok(FunctionDescriptor::new(
        row.try_get::<String, _>("name")?,
        row.try_get::<Option<String>, _>("args")?.unwrap_or_default(),
        row.try_get::<Option<String>, _>("result")?.unwrap_or_default(),
        row.try_get::<Option<String>, _>("description")?,
    ))
}
