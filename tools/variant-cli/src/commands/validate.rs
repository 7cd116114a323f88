//! Validate a product file.

use anyhow::{Context as _, Result};
use turbo_variants::{adapt_simple_product, Catalog};

use super::ValidateArgs;
use crate::context::{read_product, Context, ProductFile};

/// Run the validate command.
pub fn run(args: ValidateArgs, ctx: &Context) -> Result<()> {
    let catalog = match read_product(&args.product, args.simple)? {
        ProductFile::Catalog(catalog) => catalog,
        ProductFile::Simple(product) => {
            let adapted = adapt_simple_product(&product);
            Catalog::new(adapted.options, adapted.variants)
        }
    };

    catalog
        .validate()
        .with_context(|| format!("{} is not a valid catalog", args.product.display()))?;

    let sold_out = catalog.variants.iter().filter(|v| !v.is_in_stock()).count();
    if !catalog.variants.is_empty() && sold_out == catalog.variants.len() {
        ctx.output.warn("Every variant is out of stock");
    }

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "valid": true,
            "options": catalog.options.len(),
            "variants": catalog.variants.len(),
            "out_of_stock": sold_out,
        }));
    } else {
        ctx.output.success(&format!(
            "{} options, {} variants ({} out of stock)",
            catalog.options.len(),
            catalog.variants.len(),
            sold_out
        ));
    }
    Ok(())
}
