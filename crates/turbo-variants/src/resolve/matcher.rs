//! Exact variant matching.

use crate::catalog::{ProductVariant, Selection};
use tracing::trace;

/// Whether `variant` carries every value named in `selection`.
///
/// Axes the selection leaves open impose no constraint. This is the subset
/// test shared by matching and availability.
pub fn variant_satisfies(variant: &ProductVariant, selection: &Selection) -> bool {
    selection
        .iter()
        .all(|(title, value)| variant.value_for(title) == Some(value))
}

/// Whether `selection` names every axis `variant` defines.
fn selection_covers(variant: &ProductVariant, selection: &Selection) -> bool {
    variant.options.iter().all(|o| selection.contains(&o.name))
}

/// Resolve a selection to the variant with exactly that combination.
///
/// A variant matches when the selection names every one of its axes and
/// every selected value agrees with it. Partial selections never match, and
/// neither do selections carrying a key the variant lacks: a stray extra
/// axis makes the whole selection unresolvable. The first match in input
/// order wins.
pub fn find_matching_variant<'a>(
    variants: &'a [ProductVariant],
    selection: &Selection,
) -> Option<&'a ProductVariant> {
    if selection.is_empty() {
        return None;
    }

    let found = variants
        .iter()
        .find(|v| selection_covers(v, selection) && variant_satisfies(v, selection));

    match found {
        Some(v) => trace!(variant = %v.id, "selection resolved"),
        None => trace!(axes = selection.len(), "no variant matches selection"),
    }
    found
}
