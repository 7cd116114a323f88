//! Purchasable variants.

use crate::ids::VariantId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// One concrete, purchasable combination of option values.
///
/// A well-formed variant carries exactly one [`VariantOption`] per axis of
/// its product's option set. That is not asserted here: matching is driven
/// by the selection, so short or long variants are still matched
/// structurally.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductVariant {
    /// Unique variant identifier.
    pub id: VariantId,
    /// Display title (e.g., "Large / Blue").
    #[serde(default)]
    pub title: String,
    /// One `(option title, value)` pair per axis.
    pub options: Vec<VariantOption>,
    /// Precomputed price.
    pub price: Money,
    /// Compare-at price (original price for showing discounts).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compare_at_price: Option<Money>,
    /// Units in stock. Absent means none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inventory_quantity: Option<u32>,
}

impl ProductVariant {
    /// Create a variant with no options and no inventory.
    pub fn new(id: impl Into<VariantId>, price: Money) -> Self {
        Self {
            id: id.into(),
            title: String::new(),
            options: Vec::new(),
            price,
            compare_at_price: None,
            inventory_quantity: None,
        }
    }

    /// Add an option value for the given axis title.
    pub fn with_option(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.push(VariantOption::new(name, value));
        self
    }

    /// Set the inventory quantity.
    pub fn with_inventory(mut self, quantity: u32) -> Self {
        self.inventory_quantity = Some(quantity);
        self
    }

    /// Set the display title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Units in stock, treating an absent count as zero.
    pub fn quantity(&self) -> u32 {
        self.inventory_quantity.unwrap_or(0)
    }

    pub fn is_in_stock(&self) -> bool {
        self.quantity() > 0
    }

    /// This variant's value on the named axis.
    pub fn value_for(&self, option_title: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|o| o.name == option_title)
            .map(|o| o.value.as_str())
    }

    /// Check if this variant is on sale (has a higher compare-at price).
    pub fn is_on_sale(&self) -> bool {
        self.compare_at_price
            .map(|cap| cap.amount_cents > self.price.amount_cents)
            .unwrap_or(false)
    }

    /// Discount percentage relative to the compare-at price, if on sale.
    pub fn discount_percentage(&self) -> Option<f64> {
        self.compare_at_price.and_then(|cap| {
            if cap.amount_cents > self.price.amount_cents {
                let savings = cap.amount_cents - self.price.amount_cents;
                Some((savings as f64 / cap.amount_cents as f64) * 100.0)
            } else {
                None
            }
        })
    }

    /// Build a title from the option values.
    pub fn build_title(&self) -> String {
        if self.options.is_empty() {
            "Default".to_string()
        } else {
            self.options
                .iter()
                .map(|o| o.value.as_str())
                .collect::<Vec<_>>()
                .join(" / ")
        }
    }
}

/// A variant's value on one axis (e.g., Size: Large).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct VariantOption {
    /// Owning option title (e.g., "Size", "Color").
    pub name: String,
    /// Option value (e.g., "Large", "Blue").
    pub value: String,
}

impl VariantOption {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}
