//! In-memory catalog repository
//!
//! Serves a fixed set of descriptors with the same filtering and ordering
//! rules as the PostgreSQL catalog query. Used to exercise the generator
//! without a database.

use async_trait::async_trait;

use crate::db::repositories::CatalogRepository;
use crate::db::CatalogError;
use crate::models::FunctionDescriptor;
use crate::services::pattern::{resolve_pattern, LikePattern};

/// Catalog backed by a list of descriptors
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalogRepository {
    functions: Vec<FunctionDescriptor>,
    queries: Vec<String>,
}

impl InMemoryCatalogRepository {
    /// Create a catalog holding `functions`
    pub fn new(functions: Vec<FunctionDescriptor>) -> Self {
        Self {
            functions,
            queries: Vec::new(),
        }
    }

    /// Load a catalog from a JSON array of descriptors
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    /// Patterns queried so far, in order
    pub fn queries(&self) -> &[String] {
        &self.queries
    }
}

#[async_trait]
impl CatalogRepository for InMemoryCatalogRepository {
    async fn fetch_functions(
        &mut self,
        pattern: &str,
    ) -> Result<Vec<FunctionDescriptor>, CatalogError> {
        let pattern = resolve_pattern(Some(pattern));
        self.queries.push(pattern.to_string());

        let like = LikePattern::parse(pattern).map_err(|e| CatalogError::query(pattern, e))?;

        let mut functions: Vec<FunctionDescriptor> = self
            .functions
            .iter()
            .filter(|f| like.matches(&f.name))
            .cloned()
            .collect();
        // Byte order, matching the "C" collation of `pg_proc.proname`
        functions.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.arguments.cmp(&b.arguments)));

        Ok(functions)
    }
}
