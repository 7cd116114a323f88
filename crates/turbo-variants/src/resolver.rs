//! Product-detail resolution in one call.
//!
//! [`VariantResolver`] owns one product's options and variants for the
//! lifetime of a product view and runs the whole flow per selection change:
//! availability for the option controls, then the exact match, its stock
//! status and its price.

use std::sync::Arc;

use crate::adapter::{adapt_simple_product, SimpleProduct};
use crate::catalog::{Catalog, ProductOption, ProductVariant, Selection};
use crate::config::ResolverConfig;
use crate::money::Money;
use crate::resolve::{
    find_matching_variant, variant_satisfies, variant_stock_status, AvailabilityCache,
    AvailableOptions, StockInfo,
};
use serde::Serialize;
use tracing::debug;

/// Everything a product page needs to render for one selection.
#[derive(Debug, Clone, Serialize)]
pub struct Resolution {
    /// Choosable values per axis. Identity-stable across equal results.
    pub availability: Arc<AvailableOptions>,
    /// The exactly matching variant, if the selection resolves.
    pub variant: Option<ProductVariant>,
    pub stock: StockInfo,
    pub price: Option<Money>,
    pub compare_at_price: Option<Money>,
    /// Every option axis has a selected value.
    pub complete: bool,
}

/// Stateful resolution for one product view.
#[derive(Debug)]
pub struct VariantResolver {
    options: Vec<ProductOption>,
    variants: Vec<ProductVariant>,
    config: ResolverConfig,
    cache: AvailabilityCache,
}

impl VariantResolver {
    pub fn new(options: Vec<ProductOption>, variants: Vec<ProductVariant>) -> Self {
        Self {
            options,
            variants,
            config: ResolverConfig::default(),
            cache: AvailabilityCache::new(),
        }
    }

    pub fn from_catalog(catalog: Catalog) -> Self {
        Self::new(catalog.options, catalog.variants)
    }

    /// Build from a flat sizes/colors product.
    pub fn from_simple_product(product: &SimpleProduct) -> Self {
        let adapted = adapt_simple_product(product);
        Self::new(adapted.options, adapted.variants)
    }

    pub fn with_config(mut self, config: ResolverConfig) -> Self {
        self.config = config;
        self
    }

    pub fn options(&self) -> &[ProductOption] {
        &self.options
    }

    pub fn variants(&self) -> &[ProductVariant] {
        &self.variants
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Replace the variant list, e.g. after an inventory refresh. The
    /// availability cache is kept so unchanged results keep their identity.
    pub fn set_variants(&mut self, variants: Vec<ProductVariant>) {
        self.variants = variants;
    }

    /// Resolve a selection.
    pub fn resolve(&mut self, selection: &Selection) -> Resolution {
        let availability = self
            .cache
            .compute(&self.options, &self.variants, selection);

        let variant = find_matching_variant(&self.variants, selection).cloned();
        let stock = variant_stock_status(variant.as_ref(), self.config.low_stock_threshold);

        debug!(
            selected = selection.len(),
            matched = variant.as_ref().map(|v| v.id.as_str()).unwrap_or("-"),
            status = stock.status.as_str(),
            "resolved selection"
        );

        Resolution {
            price: variant.as_ref().map(|v| v.price),
            compare_at_price: variant.as_ref().and_then(|v| v.compare_at_price),
            complete: self.is_complete(selection),
            availability,
            variant,
            stock,
        }
    }

    /// Whether every option axis has a selected value.
    pub fn is_complete(&self, selection: &Selection) -> bool {
        !self.options.is_empty() && self.options.iter().all(|o| selection.contains(&o.title))
    }

    /// Preselect the first in-stock variant, falling back to the first
    /// variant. Empty when there are no variants.
    pub fn initial_selection(&self) -> Selection {
        self.variants
            .iter()
            .find(|v| v.is_in_stock())
            .or_else(|| self.variants.first())
            .map(|v| {
                v.options
                    .iter()
                    .map(|o| (o.name.as_str(), o.value.as_str()))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Apply one choice to a selection.
    ///
    /// If the new combination has no in-stock variant but the chosen value
    /// does, choices on other axes that conflict with the first such variant
    /// are dropped so the shopper lands on something purchasable. The choice
    /// just made is always kept.
    pub fn select(&self, selection: &Selection, title: &str, value: &str) -> Selection {
        let next = selection.with(title, value);

        let reachable = self
            .variants
            .iter()
            .any(|v| v.is_in_stock() && variant_satisfies(v, &next));
        if reachable {
            return next;
        }

        let pivot = self
            .variants
            .iter()
            .find(|v| v.is_in_stock() && v.value_for(title) == Some(value));

        match pivot {
            Some(pivot) => next
                .iter()
                .filter(|(t, v)| *t == title || pivot.value_for(t) == Some(*v))
                .collect(),
            None => next,
        }
    }
}
