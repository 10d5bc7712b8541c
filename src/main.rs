//! pgh3-docgen - writes the H3 extension function reference to stdout

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pgh3_docgen::{config::Config, db::PgCatalogRepository, services::DocumentGenerator};

#[derive(Parser, Debug)]
#[command(name = "pgh3-docgen")]
#[command(about = "Generate Markdown documentation for the PostgreSQL H3 extension functions", long_about = None)]
#[command(version)]
struct Cli {
    /// Name of the database to read the function catalog from
    dbname: String,

    /// YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// LIKE pattern for the "Functions" section (backslash escapes)
    #[arg(long)]
    primary_pattern: Option<String>,

    /// LIKE pattern for the "Internal functions" section (backslash escapes)
    #[arg(long)]
    internal_pattern: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // stdout carries the document, so logs go to stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pgh3_docgen=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    let mut stdout = std::io::stdout().lock();
    run(&cli.dbname, config, &mut stdout).await
}

/// Resolve configuration: CLI flag > environment > file > default.
fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => Config::from_env()?,
    };
    if let Some(pattern) = &cli.primary_pattern {
        config.catalog.primary_pattern = pattern.clone();
    }
    if let Some(pattern) = &cli.internal_pattern {
        config.catalog.internal_pattern = pattern.clone();
    }
    config.validate()?;
    Ok(config)
}

/// Connect, generate and write the document to `out`.
///
/// `out` is untouched unless both catalog queries succeed.
async fn run<W: Write>(dbname: &str, config: Config, out: &mut W) -> Result<()> {
    let mut catalog = PgCatalogRepository::connect(&config.database, dbname).await?;

    let generator = DocumentGenerator::new(config.catalog, config.document);
    let written = generator.write_to(&mut catalog, out).await;
    catalog.close().await;
    let written = written?;

    tracing::info!("Wrote {} bytes", written);
    Ok(())
}
