//! Resolve a selection against a product file.

use anyhow::Result;
use serde::Serialize;
use turbo_variants::{Resolution, Selection};

use super::ResolveArgs;
use crate::context::Context;

#[derive(Serialize)]
struct ResolveReport<'a> {
    selection: &'a Selection,
    #[serde(flatten)]
    resolution: &'a Resolution,
}

/// Run the resolve command.
pub fn run(args: ResolveArgs, ctx: &Context) -> Result<()> {
    let mut resolver = ctx.load_resolver(&args.product, args.simple)?;
    if let Some(threshold) = args.threshold {
        let config = resolver.config().with_low_stock_threshold(threshold);
        resolver = resolver.with_config(config);
    }

    let selection = if args.initial {
        resolver.initial_selection()
    } else {
        parse_selection(&args.selections)?
    };

    let resolution = resolver.resolve(&selection);

    if ctx.output.is_json() {
        ctx.output.json(&ResolveReport {
            selection: &selection,
            resolution: &resolution,
        });
        return Ok(());
    }

    for (title, _) in selection.iter() {
        if !resolver.options().iter().any(|o| o.title == title) {
            ctx.output
                .warn(&format!("'{}' is not an option of this product", title));
        }
    }

    ctx.output.header("Options");
    for option in resolver.options() {
        ctx.output.kv(&option.title, selection.get(&option.title).unwrap_or("-"));
        for value in option.value_strings() {
            ctx.output.option_value(
                value,
                resolution.availability.is_available(&option.title, value),
                selection.get(&option.title) == Some(value),
            );
        }
    }

    ctx.output.header("Variant");
    match &resolution.variant {
        Some(variant) => {
            let title = if variant.title.is_empty() {
                variant.build_title()
            } else {
                variant.title.clone()
            };
            ctx.output.kv("Id", variant.id.as_str());
            ctx.output.kv("Title", &title);
        }
        None if resolution.complete => ctx.output.kv("Id", "no variant with this combination"),
        None => ctx.output.kv("Id", "selection incomplete"),
    }

    ctx.output.kv("Stock", &resolution.stock.message);
    if let Some(price) = resolution.price {
        ctx.output.kv("Price", &price.display());
    }
    if let Some(variant) = resolution.variant.as_ref().filter(|v| v.is_on_sale()) {
        if let (Some(cap), Some(pct)) = (variant.compare_at_price, variant.discount_percentage()) {
            ctx.output
                .kv("Was", &format!("{} ({:.0}% off)", cap.display(), pct));
        }
    }

    Ok(())
}

/// Parse repeated `Title=Value` arguments.
fn parse_selection(pairs: &[String]) -> Result<Selection> {
    let mut selection = Selection::new();
    for pair in pairs {
        let (title, value) = Selection::parse_pair(pair)?;
        selection = selection.with(title, value);
    }
    Ok(selection)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_selection() {
        let pairs = vec!["Size=M".to_string(), "Color=Navy Blue".to_string()];
        let selection = parse_selection(&pairs).unwrap();
        assert_eq!(selection.get("Size"), Some("M"));
        assert_eq!(selection.get("Color"), Some("Navy Blue"));
    }

    #[test]
    fn test_parse_selection_later_wins() {
        let pairs = vec!["Size=M".to_string(), "Size=L".to_string()];
        assert_eq!(parse_selection(&pairs).unwrap().get("Size"), Some("L"));
    }

    #[test]
    fn test_parse_selection_rejects_bare_title() {
        let err = parse_selection(&["Size".to_string()]).unwrap_err();
        assert!(err.to_string().contains("Invalid selection"));
    }
}
