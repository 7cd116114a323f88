//! End-to-end variant resolution through the public API.

use std::collections::BTreeSet;
use std::sync::Arc;

use serde_json::json;
use turbo_variants::prelude::*;

fn catalog() -> Catalog {
    let value = json!({
        "options": [
            {
                "id": "size-option",
                "title": "Size",
                "values": [
                    {"id": "size-0", "value": "S", "option_id": "size-option"},
                    {"id": "size-1", "value": "M", "option_id": "size-option"},
                    {"id": "size-2", "value": "L", "option_id": "size-option"}
                ]
            },
            {
                "id": "color-option",
                "title": "Color",
                "values": [
                    {"id": "color-0", "value": "Red", "option_id": "color-option",
                     "metadata": {"hex": "#ff0000"}},
                    {"id": "color-1", "value": "Blue", "option_id": "color-option",
                     "metadata": {"hex": "#0000ff"}}
                ]
            }
        ],
        "variants": [
            {"id": "v1", "title": "S / Blue",
             "options": [{"name": "Size", "value": "S"}, {"name": "Color", "value": "Blue"}],
             "price": {"amount_cents": 2500, "currency": "USD"},
             "inventory_quantity": 10},
            {"id": "v2", "title": "M / Blue",
             "options": [{"name": "Size", "value": "M"}, {"name": "Color", "value": "Blue"}],
             "price": {"amount_cents": 2500, "currency": "USD"},
             "compare_at_price": {"amount_cents": 3000, "currency": "USD"},
             "inventory_quantity": 5},
            {"id": "v3", "title": "S / Red",
             "options": [{"name": "Size", "value": "S"}, {"name": "Color", "value": "Red"}],
             "price": {"amount_cents": 2500, "currency": "USD"},
             "inventory_quantity": 0},
            {"id": "v4", "title": "L / Red",
             "options": [{"name": "Size", "value": "L"}, {"name": "Color", "value": "Red"}],
             "price": {"amount_cents": 2700, "currency": "USD"}}
        ]
    });
    serde_json::from_value(value).expect("fixture parses")
}

fn set(values: &[&str]) -> BTreeSet<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[test]
fn fixture_is_valid() {
    assert!(catalog().validate().is_ok());
}

#[test]
fn matcher_returns_input_element_or_none() {
    let catalog = catalog();
    let selections = [
        Selection::new(),
        Selection::new().with("Size", "S"),
        Selection::new().with("Size", "S").with("Color", "Blue"),
        Selection::new().with("Size", "XL").with("Color", "Blue"),
        Selection::new()
            .with("Size", "S")
            .with("Color", "Blue")
            .with("Fit", "Slim"),
    ];

    for selection in &selections {
        if let Some(found) = find_matching_variant(&catalog.variants, selection) {
            assert!(catalog.variants.iter().any(|v| std::ptr::eq(v, found)));
        }
    }
}

#[test]
fn matcher_requires_every_axis() {
    let catalog = catalog();
    let selection = Selection::new().with("Size", "S");
    assert!(find_matching_variant(&catalog.variants, &selection).is_none());
}

#[test]
fn matcher_exactness() {
    let catalog = catalog();
    let hit = find_matching_variant(
        &catalog.variants,
        &Selection::new().with("Size", "S").with("Color", "Blue"),
    );
    assert_eq!(hit.map(|v| v.id.as_str()), Some("v1"));

    let miss = find_matching_variant(
        &catalog.variants,
        &Selection::new().with("Size", "L").with("Color", "Green"),
    );
    assert!(miss.is_none());
}

#[test]
fn availability_excludes_sold_out_and_untracked() {
    let catalog = catalog();
    let available = compute_available_options(&catalog.options, &catalog.variants, &Selection::new());

    assert_eq!(available.values("Color"), Some(&set(&["Blue"])));
    assert_eq!(available.values("Size"), Some(&set(&["S", "M"])));
}

#[test]
fn availability_follows_other_axes() {
    let catalog = catalog();
    let available = compute_available_options(
        &catalog.options,
        &catalog.variants,
        &Selection::new().with("Color", "Blue"),
    );
    assert_eq!(available.values("Size"), Some(&set(&["S", "M"])));

    let available = compute_available_options(
        &catalog.options,
        &catalog.variants,
        &Selection::new().with("Color", "Red"),
    );
    assert_eq!(available.values("Size"), Some(&BTreeSet::new()));
    assert_eq!(available.values("Color"), Some(&BTreeSet::new()));
}

#[test]
fn stock_classification_for_matched_variants() {
    let catalog = catalog();
    let stock = |size: &str, color: &str| {
        let selection = Selection::new().with("Size", size).with("Color", color);
        variant_stock_status(find_matching_variant(&catalog.variants, &selection), 5)
    };

    let info = stock("S", "Blue");
    assert_eq!(info.status, StockStatus::InStock);
    assert_eq!(info.message, "In Stock");

    let info = stock("M", "Blue");
    assert_eq!(info.status, StockStatus::LowStock);
    assert_eq!(info.message, "Only 5 left in stock");

    assert_eq!(stock("S", "Red").status, StockStatus::OutOfStock);
    assert_eq!(stock("L", "Red").status, StockStatus::OutOfStock);
    assert_eq!(stock("XL", "Red").message, "Out of Stock");
}

#[test]
fn cache_returns_same_instance_for_equal_selections() {
    let catalog = catalog();
    let mut cache = AvailabilityCache::new();

    let first_selection = Selection::new().with("Color", "Blue");
    let second_selection = Selection::new().with("Color", "Blue");

    let first = cache.compute(&catalog.options, &catalog.variants, &first_selection);
    let second = cache.compute(&catalog.options, &catalog.variants, &second_selection);

    assert_eq!(*first, *second);
    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn adapter_feeds_resolution() {
    let product: SimpleProduct = serde_json::from_value(json!({
        "id": "tee-1",
        "sizes": ["S", "M"],
        "colors": ["Blue", "Red"],
        "colorSwatches": [{"name": "Navy", "hex": "#001f3f"}],
        "variants": [
            {"id": "tee-s-navy",
             "options": [{"name": "Size", "value": "S"}, {"name": "Color", "value": "Navy"}],
             "price": {"amount_cents": 1500},
             "inventory_quantity": 7}
        ]
    }))
    .unwrap();

    let adapted = adapt_simple_product(&product);
    let colors: Vec<_> = adapted.options[1].value_strings().collect();
    assert_eq!(colors, ["Navy"]);
    assert_eq!(adapted.options[1].values[0].hex(), Some("#001f3f"));

    let mut resolver = VariantResolver::from_simple_product(&product);
    let selection = resolver.initial_selection();
    let resolution = resolver.resolve(&selection);

    assert!(resolution.complete);
    assert_eq!(
        resolution.variant.map(|v| v.id.into_inner()),
        Some("tee-s-navy".to_string())
    );
    assert_eq!(resolution.stock.status, StockStatus::InStock);
    assert!(resolution.availability.is_available("Size", "S"));
    assert!(!resolution.availability.is_available("Size", "M"));
}

#[test]
fn resolution_serializes_for_the_page() {
    let mut resolver = VariantResolver::from_catalog(catalog());
    let resolution = resolver.resolve(&Selection::new().with("Size", "M").with("Color", "Blue"));
    let value = serde_json::to_value(&resolution).unwrap();

    assert_eq!(value["stock"]["status"], "low-stock");
    assert_eq!(value["variant"]["id"], "v2");
    assert_eq!(value["compare_at_price"]["amount_cents"], 3000);
    assert_eq!(value["availability"]["Size"], json!(["M"]));
    assert_eq!(value["availability"]["Color"], json!(["Blue"]));
}
