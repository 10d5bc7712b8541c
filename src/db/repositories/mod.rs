//! Database repositories
//!
//! Repository pattern implementations for catalog access. The
//! [`CatalogRepository`] trait is the explicit handle the generator is given;
//! the in-memory implementation stands in for a database in tests.

pub mod catalog;
pub mod memory;

pub use catalog::{CatalogRepository, PgCatalogRepository};
pub use memory::InMemoryCatalogRepository;
