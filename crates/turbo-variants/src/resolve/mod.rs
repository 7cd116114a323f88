//! Variant resolution.
//!
//! Pure functions over catalog data: exact matching, per-axis availability
//! and stock classification, plus the identity-stable availability cache.

mod availability;
mod cache;
mod matcher;
mod stock;

pub use availability::{compute_available_options, AvailableOptions};
pub use cache::{memoized_availability, AvailabilityCache};
pub use matcher::{find_matching_variant, variant_satisfies};
pub use stock::{
    default_stock_status, variant_stock_status, StockInfo, StockStatus,
    DEFAULT_LOW_STOCK_THRESHOLD,
};
