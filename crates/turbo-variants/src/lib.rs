//! Product variant resolution for TurboCommerce storefronts.
//!
//! Given a product's option axes (Size, Color, ...) and its purchasable
//! variants, this crate answers the questions a product detail page asks on
//! every selection change:
//!
//! - **Matching**: which variant, if any, has exactly the selected values
//! - **Availability**: which values on each axis still lead to stock
//! - **Stock**: out of stock, low stock or in stock, with a display message
//! - **Adapter**: flat `sizes` / `colors` products as option axes
//!
//! Everything is a pure function of its inputs. [`AvailabilityCache`] adds
//! identity-stable results for reactive UIs.
//!
//! # Example
//!
//! ```rust
//! use turbo_variants::prelude::*;
//!
//! let options = vec![
//!     ProductOption::new("size-option", "Size").with_value("s", "S").with_value("m", "M"),
//!     ProductOption::new("color-option", "Color").with_value("blue", "Blue"),
//! ];
//! let variants = vec![
//!     ProductVariant::new("v1", Money::new(2999, Currency::USD))
//!         .with_option("Size", "S")
//!         .with_option("Color", "Blue")
//!         .with_inventory(3),
//! ];
//!
//! let selection = Selection::new().with("Color", "Blue");
//! let available = compute_available_options(&options, &variants, &selection);
//! assert!(available.is_available("Size", "S"));
//! assert!(!available.is_available("Size", "M"));
//!
//! let selection = selection.with("Size", "S");
//! let variant = find_matching_variant(&variants, &selection);
//! let stock = default_stock_status(variant);
//! assert_eq!(stock.message, "Only 3 left in stock");
//! ```

pub mod adapter;
pub mod catalog;
pub mod config;
pub mod error;
pub mod ids;
pub mod money;
pub mod resolve;
pub mod resolver;

pub use adapter::{adapt_simple_product, AdaptedProduct, ColorSwatch, SimpleProduct};
pub use catalog::{Catalog, OptionValue, ProductOption, ProductVariant, Selection, VariantOption};
pub use config::ResolverConfig;
pub use error::VariantError;
pub use ids::*;
pub use money::{Currency, Money};
pub use resolve::{
    compute_available_options, default_stock_status, find_matching_variant,
    memoized_availability, variant_satisfies, variant_stock_status, AvailabilityCache,
    AvailableOptions, StockInfo, StockStatus, DEFAULT_LOW_STOCK_THRESHOLD,
};
pub use resolver::{Resolution, VariantResolver};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::VariantError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{
        Catalog, OptionValue, ProductOption, ProductVariant, Selection, VariantOption,
    };

    // Resolution
    pub use crate::resolve::{
        compute_available_options, default_stock_status, find_matching_variant,
        memoized_availability, variant_stock_status, AvailabilityCache, AvailableOptions,
        StockInfo, StockStatus,
    };
    pub use crate::resolver::{Resolution, VariantResolver};

    // Adapter
    pub use crate::adapter::{adapt_simple_product, ColorSwatch, SimpleProduct};
    pub use crate::config::ResolverConfig;
}
