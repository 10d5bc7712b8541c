//! Database layer
//!
//! This module provides read-only access to the PostgreSQL function catalog.
//!
//! # Architecture
//!
//! The generator never touches a connection directly. It is handed a
//! [`CatalogRepository`], which is either a [`PgCatalogRepository`] owning
//! one `PgConnection`, or an [`InMemoryCatalogRepository`] used in tests.
//!
//! # Usage
//!
//! ```ignore
//! use pgh3_docgen::config::DatabaseConfig;
//! use pgh3_docgen::db::{CatalogRepository, PgCatalogRepository};
//!
//! let mut catalog = PgCatalogRepository::connect(&DatabaseConfig::default(), "h3").await?;
//! let functions = catalog.fetch_functions("h3\\_%").await?;
//! catalog.close().await;
//! ```

pub mod connection;
pub mod error;
pub mod repositories;

pub use error::CatalogError;
pub use repositories::{CatalogRepository, InMemoryCatalogRepository, PgCatalogRepository};
