//! Reference document generation
//!
//! Runs the two catalog queries against one [`CatalogRepository`] and
//! composes the document. Nothing is written until both queries have
//! succeeded, so a failed run leaves the output untouched.

use std::io::Write;

use anyhow::{Context, Result};

use crate::config::{CatalogConfig, DocumentConfig};
use crate::db::{CatalogError, CatalogRepository};
use crate::services::document::{
    compose_document, render, FUNCTIONS_SECTION, INTERNAL_FUNCTIONS_SECTION,
};

/// Document generator
#[derive(Debug, Clone, Default)]
pub struct DocumentGenerator {
    catalog: CatalogConfig,
    document: DocumentConfig,
}

impl DocumentGenerator {
    /// Create a new generator
    pub fn new(catalog: CatalogConfig, document: DocumentConfig) -> Self {
        Self { catalog, document }
    }

    /// Query both sections and return the complete document.
    pub async fn generate<R>(&self, repo: &mut R) -> Result<String, CatalogError>
    where
        R: CatalogRepository + ?Sized,
    {
        let primary = repo.fetch_functions(&self.catalog.primary_pattern).await?;
        tracing::info!(
            "Found {} functions matching {}",
            primary.len(),
            self.catalog.primary_pattern
        );
        let primary = render(&primary, &FUNCTIONS_SECTION);

        let internal = repo.fetch_functions(&self.catalog.internal_pattern).await?;
        tracing::info!(
            "Found {} internal functions matching {}",
            internal.len(),
            self.catalog.internal_pattern
        );
        let internal = render(&internal, &INTERNAL_FUNCTIONS_SECTION);

        Ok(compose_document(&self.document, &primary, &internal))
    }

    /// Generate the document and write it to `out` in one go.
    pub async fn write_to<R, W>(&self, repo: &mut R, out: &mut W) -> Result<usize>
    where
        R: CatalogRepository + ?Sized,
        W: Write,
    {
        let doc = self.generate(repo).await?;
        out.write_all(doc.as_bytes())
            .context("Failed to write document")?;
        out.flush().context("Failed to flush document")?;
        Ok(doc.len())
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use crate::db::InMemoryCatalogRepository;
    use crate::models::FunctionDescriptor;
    use proptest::prelude::*;

    fn catalog_strategy() -> impl Strategy<Value = Vec<FunctionDescriptor>> {
        proptest::collection::vec(
            ("_?h3_[a-z]{1,8}", "[a-z ]{0,10}")
                .prop_map(|(name, args)| FunctionDescriptor::new(name, args, "void", None)),
            0..10,
        )
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(30))]

        #[test]
        fn generation_is_deterministic(functions in catalog_strategy()) {
            let generator = DocumentGenerator::default();

            let mut shuffled = functions.clone();
            shuffled.reverse();

            let first = tokio_test::block_on(
                generator.generate(&mut InMemoryCatalogRepository::new(functions)),
            ).unwrap();
            let second = tokio_test::block_on(
                generator.generate(&mut InMemoryCatalogRepository::new(shuffled)),
            ).unwrap();

            prop_assert_eq!(first, second);
        }
    }
}
