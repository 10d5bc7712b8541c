//! Configuration management
//!
//! This module handles loading configuration for the documentation generator.
//! Configuration can be loaded from:
//! - a YAML file passed with `--config`
//! - Environment variables (override file settings)
//!
//! Missing optional values are filled with defaults that reproduce the
//! reference document of the PostgreSQL H3 extension.

use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Database connection configuration
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Catalog query configuration
    #[serde(default)]
    pub catalog: CatalogConfig,
    /// Document header configuration
    #[serde(default)]
    pub document: DocumentConfig,
}

/// Database connection configuration
///
/// Host, port, user and password default to the libpq environment
/// (`PGHOST`, `PGPORT`, `PGUSER`, `PGPASSWORD`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Base connection URL; the database name from the command line replaces its path
    #[serde(default)]
    pub url: Option<String>,
    /// `application_name` reported to the server
    #[serde(default = "default_application_name")]
    pub application_name: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            application_name: default_application_name(),
        }
    }
}

fn default_application_name() -> String {
    "pgh3-docgen".to_string()
}

/// Catalog query configuration
///
/// Patterns use SQL `LIKE` syntax with backslash as the escape character.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Pattern selecting the documented public functions
    #[serde(default = "default_primary_pattern")]
    pub primary_pattern: String,
    /// Pattern selecting the internal functions
    #[serde(default = "default_internal_pattern")]
    pub internal_pattern: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            primary_pattern: default_primary_pattern(),
            internal_pattern: default_internal_pattern(),
        }
    }
}

/// Default pattern for the "Functions" section
pub const DEFAULT_PRIMARY_PATTERN: &str = "h3\\_%";

/// Default pattern for the "Internal functions" section
pub const DEFAULT_INTERNAL_PATTERN: &str = "\\_h3\\_%";

fn default_primary_pattern() -> String {
    DEFAULT_PRIMARY_PATTERN.to_string()
}

fn default_internal_pattern() -> String {
    DEFAULT_INTERNAL_PATTERN.to_string()
}

/// Document header configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentConfig {
    /// Product name used as the level-1 heading
    #[serde(default = "default_title")]
    pub title: String,
    /// One-line description, followed by the source-project link
    #[serde(default = "default_description")]
    pub description: String,
    /// Text of the source-project link
    #[serde(default = "default_link_text")]
    pub link_text: String,
    /// Target of the source-project link
    #[serde(default = "default_link_url")]
    pub link_url: String,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            description: default_description(),
            link_text: default_link_text(),
            link_url: default_link_url(),
        }
    }
}

fn default_title() -> String {
    "PostgreSQL H3 extension".to_string()
}

fn default_description() -> String {
    "Postgresql extension to wrap the hexagonal hierarchical geospatial indexing system of"
        .to_string()
}

fn default_link_text() -> String {
    "h3 library".to_string()
}

fn default_link_url() -> String {
    "https://github.com/uber/h3".to_string()
}

/// Error type for configuration parsing
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    FileRead {
        path: String,
        source: std::io::Error,
    },
    #[error("Failed to parse config file '{path}': {message}")]
    ParseError {
        path: String,
        message: String,
    },
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

impl Config {
    /// Load configuration from file
    ///
    /// The file must exist; an empty file yields the defaults.
    /// If the file is invalid YAML, returns an error with details.
    pub fn load(path: &std::path::Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.display().to_string(),
            source: e,
        })?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(&content).map_err(|e| {
            ConfigError::ParseError {
                path: path.display().to_string(),
                message: format_yaml_error(&e),
            }
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from file with environment variable overrides
    ///
    /// Environment variables follow the pattern:
    /// - PGH3DOC_DATABASE_URL
    /// - PGH3DOC_APPLICATION_NAME
    /// - PGH3DOC_PRIMARY_PATTERN
    /// - PGH3DOC_INTERNAL_PATTERN
    /// - PGH3DOC_DOCUMENT_TITLE
    pub fn load_with_env(path: &std::path::Path) -> anyhow::Result<Self> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Default configuration with environment variable overrides
    pub fn from_env() -> anyhow::Result<Self> {
        let mut config = Self::default();
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Apply environment variable overrides to the configuration
    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("PGH3DOC_DATABASE_URL") {
            self.database.url = Some(url);
        }
        if let Ok(name) = std::env::var("PGH3DOC_APPLICATION_NAME") {
            self.database.application_name = name;
        }

        if let Ok(pattern) = std::env::var("PGH3DOC_PRIMARY_PATTERN") {
            self.catalog.primary_pattern = pattern;
        }
        if let Ok(pattern) = std::env::var("PGH3DOC_INTERNAL_PATTERN") {
            self.catalog.internal_pattern = pattern;
        }

        if let Ok(title) = std::env::var("PGH3DOC_DOCUMENT_TITLE") {
            self.document.title = title;
        }
    }

    /// Reject configurations that would issue a catalog query with an empty pattern
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.catalog.primary_pattern.is_empty() {
            return Err(ConfigError::ValidationError(
                "catalog.primary_pattern must not be empty".to_string(),
            ));
        }
        if self.catalog.internal_pattern.is_empty() {
            return Err(ConfigError::ValidationError(
                "catalog.internal_pattern must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Format YAML parsing error with location and context
fn format_yaml_error(e: &serde_yaml::Error) -> String {
    if let Some(location) = e.location() {
        format!(
            "at line {}, column {}: {}",
            location.line(),
            location.column(),
            e
        )
    } else {
        e.to_string()
    }
}

// Shared by every test that touches PGH3DOC_* variables.
#[cfg(test)]
static CONFIG_ENV_MUTEX: std::sync::Mutex<()> = std::sync::Mutex::new(());
