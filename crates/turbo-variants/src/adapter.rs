//! Simple-product adapter.
//!
//! Some catalog entries only describe flat `sizes` / `colors` lists rather
//! than a real option/variant matrix. [`adapt_simple_product`] turns those
//! into the [`ProductOption`] shape the resolution functions expect.

use crate::catalog::{OptionValue, ProductOption, ProductVariant};
use crate::ids::{OptionId, ProductId};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const SIZE_OPTION_ID: &str = "size-option";
pub const COLOR_OPTION_ID: &str = "color-option";
pub const SIZE_TITLE: &str = "Size";
pub const COLOR_TITLE: &str = "Color";

/// Swatch color used when a plain color name carries no hex code.
pub const PLACEHOLDER_HEX: &str = "#000000";

/// A color with its display hex.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ColorSwatch {
    pub name: String,
    pub hex: String,
}

impl ColorSwatch {
    pub fn new(name: impl Into<String>, hex: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hex: hex.into(),
        }
    }
}

/// A product described by flat size and color lists.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SimpleProduct {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ProductId>,
    #[serde(default)]
    pub sizes: Vec<String>,
    #[serde(default)]
    pub colors: Vec<String>,
    /// Takes precedence over `colors` when non-empty.
    #[serde(default)]
    pub color_swatches: Vec<ColorSwatch>,
    /// Real variant data, passed through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variants: Option<Vec<ProductVariant>>,
}

/// Options and variants produced by the adapter.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AdaptedProduct {
    pub options: Vec<ProductOption>,
    pub variants: Vec<ProductVariant>,
}

/// Convert a [`SimpleProduct`] to options and variants.
///
/// Sizes become a `Size` option, then swatches (or, failing that, plain
/// colors with a placeholder hex) become a `Color` option. Value IDs are
/// positional (`size-0`, `color-0`, ...). No variants are synthesized: a
/// product without real `variants` has options but nothing purchasable.
pub fn adapt_simple_product(product: &SimpleProduct) -> AdaptedProduct {
    let mut options = Vec::new();

    if !product.sizes.is_empty() {
        let values = product
            .sizes
            .iter()
            .enumerate()
            .map(|(i, size)| OptionValue::new(format!("size-{}", i), size.as_str(), SIZE_OPTION_ID))
            .collect();
        options.push(ProductOption {
            id: OptionId::new(SIZE_OPTION_ID),
            title: SIZE_TITLE.to_string(),
            values,
        });
    }

    let colors: Vec<(&str, &str)> = if !product.color_swatches.is_empty() {
        product
            .color_swatches
            .iter()
            .map(|s| (s.name.as_str(), s.hex.as_str()))
            .collect()
    } else {
        product
            .colors
            .iter()
            .map(|c| (c.as_str(), PLACEHOLDER_HEX))
            .collect()
    };

    if !colors.is_empty() {
        let values = colors
            .into_iter()
            .enumerate()
            .map(|(i, (name, hex))| {
                OptionValue::new(format!("color-{}", i), name, COLOR_OPTION_ID).with_hex(hex)
            })
            .collect();
        options.push(ProductOption {
            id: OptionId::new(COLOR_OPTION_ID),
            title: COLOR_TITLE.to_string(),
            values,
        });
    }

    let variants = product.variants.clone().unwrap_or_default();

    debug!(
        product = product.id.as_ref().map(ProductId::as_str).unwrap_or("-"),
        options = options.len(),
        variants = variants.len(),
        "adapted simple product"
    );

    AdaptedProduct { options, variants }
}
