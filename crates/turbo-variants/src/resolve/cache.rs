//! Identity-stable availability results.
//!
//! Reactive UI layers memoize on object identity. Recomputing availability
//! after an unrelated change (a new selection map with the same content, a
//! refetched variant list) yields an equal but distinct value and would
//! re-render every option control. [`AvailabilityCache`] keeps the previous
//! result and hands it back whenever the new one is structurally equal.

use std::sync::Arc;

use crate::catalog::{ProductOption, ProductVariant, Selection};
use tracing::trace;

use super::availability::{compute_available_options, AvailableOptions};

/// Single-entry cache keyed on the structure of the previous result.
#[derive(Debug, Default)]
pub struct AvailabilityCache {
    last: Option<Arc<AvailableOptions>>,
    hits: u64,
    misses: u64,
}

impl AvailabilityCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compute availability, reusing the previous `Arc` when the result is
    /// unchanged.
    pub fn compute(
        &mut self,
        options: &[ProductOption],
        variants: &[ProductVariant],
        selection: &Selection,
    ) -> Arc<AvailableOptions> {
        let fresh = compute_available_options(options, variants, selection);
        self.store(fresh)
    }

    /// Offer a freshly computed result. Returns the cached instance if it is
    /// structurally equal, otherwise caches and returns the new one.
    pub fn store(&mut self, fresh: AvailableOptions) -> Arc<AvailableOptions> {
        if let Some(last) = &self.last {
            if **last == fresh {
                self.hits += 1;
                trace!(hits = self.hits, "availability unchanged, reusing cached result");
                return Arc::clone(last);
            }
        }

        self.misses += 1;
        trace!(misses = self.misses, "availability changed");
        let fresh = Arc::new(fresh);
        self.last = Some(Arc::clone(&fresh));
        fresh
    }

    /// The most recently returned result.
    pub fn last(&self) -> Option<&Arc<AvailableOptions>> {
        self.last.as_ref()
    }

    /// Drop the cached entry, e.g. when switching products.
    pub fn clear(&mut self) {
        self.last = None;
    }

    /// Calls that returned the cached instance.
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Calls that produced a new instance.
    pub fn misses(&self) -> u64 {
        self.misses
    }
}

/// A memoized availability function for callers that want a plain closure
/// rather than a cache object.
pub fn memoized_availability(
) -> impl FnMut(&[ProductOption], &[ProductVariant], &Selection) -> Arc<AvailableOptions> {
    let mut cache = AvailabilityCache::new();
    move |options: &[ProductOption], variants: &[ProductVariant], selection: &Selection| {
        cache.compute(options, variants, selection)
    }
}
