//! Product catalog module.
//!
//! Contains the option/variant data model and the selection type the
//! resolution functions operate on.

mod option;
mod selection;
mod variant;

use std::collections::HashSet;

use crate::error::VariantError;
use serde::{Deserialize, Serialize};

pub use option::{OptionValue, ProductOption, HEX_METADATA_KEY};
pub use selection::Selection;
pub use variant::{ProductVariant, VariantOption};

/// One product's option set and variant list as delivered by the catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Catalog {
    #[serde(default)]
    pub options: Vec<ProductOption>,
    #[serde(default)]
    pub variants: Vec<ProductVariant>,
}

impl Catalog {
    pub fn new(options: Vec<ProductOption>, variants: Vec<ProductVariant>) -> Self {
        Self { options, variants }
    }

    /// Parse a catalog from JSON.
    pub fn from_json(json: &str) -> Result<Self, VariantError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Check catalog integrity.
    ///
    /// Resolution never calls this. Malformed data there just reduces
    /// availability; this is for loaders that want to reject it up front.
    pub fn validate(&self) -> Result<(), VariantError> {
        let mut titles = HashSet::new();
        for option in &self.options {
            if !titles.insert(option.title.as_str()) {
                return Err(VariantError::DuplicateOption(option.title.clone()));
            }
        }

        for variant in &self.variants {
            if let Some(unknown) = variant
                .options
                .iter()
                .find(|o| !titles.contains(o.name.as_str()))
            {
                return Err(VariantError::UnknownAxis {
                    variant: variant.id.to_string(),
                    axis: unknown.name.clone(),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn size_option() -> ProductOption {
        ProductOption::new("size-option", "Size").with_value("s", "S")
    }

    #[test]
    fn test_validate_ok() {
        let catalog = Catalog::new(
            vec![size_option()],
            vec![ProductVariant::new("v1", Money::default()).with_option("Size", "S")],
        );
        assert!(catalog.validate().is_ok());
    }

    #[test]
    fn test_validate_duplicate_title() {
        let catalog = Catalog::new(vec![size_option(), size_option()], Vec::new());
        assert!(matches!(
            catalog.validate(),
            Err(VariantError::DuplicateOption(t)) if t == "Size"
        ));
    }

    #[test]
    fn test_validate_unknown_axis() {
        let catalog = Catalog::new(
            vec![size_option()],
            vec![ProductVariant::new("v1", Money::default()).with_option("Material", "Wool")],
        );
        match catalog.validate() {
            Err(VariantError::UnknownAxis { variant, axis }) => {
                assert_eq!(variant, "v1");
                assert_eq!(axis, "Material");
            }
            other => panic!("expected UnknownAxis, got {:?}", other),
        }
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(
            Catalog::from_json("{not json"),
            Err(VariantError::Serialization(_))
        ));
    }
}
