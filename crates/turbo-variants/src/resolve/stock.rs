//! Stock status for a resolved variant.

use crate::catalog::ProductVariant;
use serde::{Deserialize, Serialize};

/// Low-stock threshold used when none is configured.
pub const DEFAULT_LOW_STOCK_THRESHOLD: u32 = 5;

/// Tri-state stock classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StockStatus {
    OutOfStock,
    LowStock,
    InStock,
}

impl StockStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StockStatus::OutOfStock => "out-of-stock",
            StockStatus::LowStock => "low-stock",
            StockStatus::InStock => "in-stock",
        }
    }

    /// Whether the variant can be added to a cart.
    pub fn is_purchasable(&self) -> bool {
        !matches!(self, StockStatus::OutOfStock)
    }
}

/// Stock status plus the message shown next to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockInfo {
    pub status: StockStatus,
    /// Remaining units, only reported for low stock.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    pub message: String,
}

impl StockInfo {
    fn out_of_stock() -> Self {
        Self {
            status: StockStatus::OutOfStock,
            quantity: None,
            message: "Out of Stock".to_string(),
        }
    }
}

/// Classify a variant's inventory.
///
/// The threshold is inclusive: with a threshold of 5, five units left is
/// low stock and six is in stock. No variant counts as out of stock.
pub fn variant_stock_status(
    variant: Option<&ProductVariant>,
    low_stock_threshold: u32,
) -> StockInfo {
    let quantity = match variant {
        Some(v) => v.quantity(),
        None => return StockInfo::out_of_stock(),
    };

    if quantity == 0 {
        StockInfo::out_of_stock()
    } else if quantity <= low_stock_threshold {
        StockInfo {
            status: StockStatus::LowStock,
            quantity: Some(quantity),
            message: format!("Only {} left in stock", quantity),
        }
    } else {
        StockInfo {
            status: StockStatus::InStock,
            quantity: None,
            message: "In Stock".to_string(),
        }
    }
}

/// [`variant_stock_status`] with [`DEFAULT_LOW_STOCK_THRESHOLD`].
pub fn default_stock_status(variant: Option<&ProductVariant>) -> StockInfo {
    variant_stock_status(variant, DEFAULT_LOW_STOCK_THRESHOLD)
}
