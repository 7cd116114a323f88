//! Per-axis availability given a partial selection.

use std::collections::{BTreeMap, BTreeSet};

use crate::catalog::{ProductOption, ProductVariant, Selection};
use serde::Serialize;
use tracing::debug;

use super::matcher::variant_satisfies;

/// Option title to the set of values still choosable.
///
/// Every axis of the option set is present, possibly with an empty set.
/// Equality is structural: same axis keys and same values per axis.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AvailableOptions(BTreeMap<String, BTreeSet<String>>);

impl AvailableOptions {
    /// Values still choosable on `title`. `None` if the axis is unknown.
    pub fn values(&self, title: &str) -> Option<&BTreeSet<String>> {
        self.0.get(title)
    }

    /// Whether `value` can still be picked on `title`.
    pub fn is_available(&self, title: &str, value: &str) -> bool {
        self.0.get(title).is_some_and(|set| set.contains(value))
    }

    /// Iterate axes in title order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of axes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Compute which values remain pickable on every axis.
///
/// A variant contributes its values when it agrees with every entry of
/// `selection` and has stock. The filter uses the whole selection, including
/// the axis being populated, so "is Small pickable" means "is there an
/// in-stock Small consistent with everything chosen so far".
///
/// Variant axes missing from `options` are ignored.
pub fn compute_available_options(
    options: &[ProductOption],
    variants: &[ProductVariant],
    selection: &Selection,
) -> AvailableOptions {
    let mut available: BTreeMap<String, BTreeSet<String>> = options
        .iter()
        .map(|o| (o.title.clone(), BTreeSet::new()))
        .collect();

    let mut contributing = 0usize;
    for variant in variants
        .iter()
        .filter(|v| v.is_in_stock() && variant_satisfies(v, selection))
    {
        contributing += 1;
        for option in &variant.options {
            if let Some(values) = available.get_mut(&option.name) {
                values.insert(option.value.clone());
            }
        }
    }

    debug!(
        axes = available.len(),
        variants = variants.len(),
        contributing,
        "computed available options"
    );

    AvailableOptions(available)
}
