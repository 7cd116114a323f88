//! CLI execution context.

use std::path::Path;

use anyhow::{Context as _, Result};
use turbo_variants::{Catalog, SimpleProduct, VariantResolver};

use crate::config::CliConfig;
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
}

impl Context {
    /// Load context from an explicit config file, or the nearest one.
    pub fn load(config_path: Option<&Path>, output: Output) -> Result<Self> {
        let config = match config_path {
            Some(path) => CliConfig::load(path)?,
            None => {
                let cwd = std::env::current_dir().context("Failed to get current directory")?;
                CliConfig::discover(&cwd).unwrap_or_default()
            }
        };

        Ok(Self { config, output })
    }

    /// Build a resolver from a catalog or simple-product file.
    pub fn load_resolver(&self, path: &Path, simple: bool) -> Result<VariantResolver> {
        let resolver = match read_product(path, simple)? {
            ProductFile::Catalog(catalog) => VariantResolver::from_catalog(catalog),
            ProductFile::Simple(product) => VariantResolver::from_simple_product(&product),
        };
        Ok(resolver.with_config(self.config.resolver))
    }
}

/// A product file in either supported shape.
pub enum ProductFile {
    Catalog(Catalog),
    Simple(SimpleProduct),
}

/// Read a product file. A top-level `options` key marks a full catalog;
/// anything else is read as a simple product unless `simple` forces it.
pub fn read_product(path: &Path, simple: bool) -> Result<ProductFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read product file: {}", path.display()))?;
    let value: serde_json::Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse JSON: {}", path.display()))?;

    let is_catalog = !simple && value.get("options").is_some();
    tracing::debug!(path = %path.display(), is_catalog, "loaded product file");

    if is_catalog {
        let catalog = serde_json::from_value(value)
            .with_context(|| format!("Invalid catalog: {}", path.display()))?;
        Ok(ProductFile::Catalog(catalog))
    } else {
        let product = serde_json::from_value(value)
            .with_context(|| format!("Invalid simple product: {}", path.display()))?;
        Ok(ProductFile::Simple(product))
    }
}
