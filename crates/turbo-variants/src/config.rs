//! Resolver configuration.

use serde::{Deserialize, Serialize};

use crate::resolve::DEFAULT_LOW_STOCK_THRESHOLD;

/// Tunables for variant resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Quantities at or below this are reported as low stock.
    #[serde(default = "default_low_stock_threshold")]
    pub low_stock_threshold: u32,
}

fn default_low_stock_threshold() -> u32 {
    DEFAULT_LOW_STOCK_THRESHOLD
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
        }
    }
}

impl ResolverConfig {
    pub fn with_low_stock_threshold(mut self, threshold: u32) -> Self {
        self.low_stock_threshold = threshold;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_threshold() {
        assert_eq!(ResolverConfig::default().low_stock_threshold, 5);
    }

    #[test]
    fn test_missing_field_uses_default() {
        let config: ResolverConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ResolverConfig::default());

        let config: ResolverConfig =
            serde_json::from_str(r#"{"low_stock_threshold": 2}"#).unwrap();
        assert_eq!(config.low_stock_threshold, 2);
    }
}
