//! Convert a simple product to options and variants.

use anyhow::{bail, Result};
use turbo_variants::adapt_simple_product;

use super::AdaptArgs;
use crate::context::{read_product, Context, ProductFile};

/// Run the adapt command. Always prints JSON.
pub fn run(args: AdaptArgs, ctx: &Context) -> Result<()> {
    let product = match read_product(&args.product, true)? {
        ProductFile::Simple(product) => product,
        ProductFile::Catalog(_) => bail!("Expected a simple product"),
    };

    let adapted = adapt_simple_product(&product);
    if adapted.options.is_empty() {
        ctx.output.warn("Product has no sizes or colors");
    }
    ctx.output.json(&adapted);
    Ok(())
}
