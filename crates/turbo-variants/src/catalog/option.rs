//! Option axes and their legal values.

use std::collections::BTreeMap;

use crate::ids::{OptionId, OptionValueId};
use serde::{Deserialize, Serialize};

/// Metadata key carrying a swatch color on Color axes.
pub const HEX_METADATA_KEY: &str = "hex";

/// An axis of variation (e.g., "Size").
///
/// `title` doubles as the selection key, so titles must be unique within
/// one product's option set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductOption {
    /// Stable option identifier.
    pub id: OptionId,
    /// Display title, also the lookup key for selections.
    pub title: String,
    /// Legal values, in display order.
    #[serde(default)]
    pub values: Vec<OptionValue>,
}

impl ProductOption {
    pub fn new(id: impl Into<OptionId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            values: Vec::new(),
        }
    }

    /// Append a value owned by this option.
    pub fn with_value(mut self, id: impl Into<OptionValueId>, value: impl Into<String>) -> Self {
        let value = OptionValue::new(id, value, self.id.clone());
        self.values.push(value);
        self
    }

    /// Look up a value by its exact string.
    pub fn value(&self, value: &str) -> Option<&OptionValue> {
        self.values.iter().find(|v| v.value == value)
    }

    /// Iterate the value strings in display order.
    pub fn value_strings(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(|v| v.value.as_str())
    }
}

/// One legal value on an axis (e.g., "Medium").
///
/// Values are compared by exact string equality. No case folding or
/// whitespace trimming is applied anywhere.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OptionValue {
    /// Stable value identifier.
    pub id: OptionValueId,
    /// The value string.
    pub value: String,
    /// Owning option.
    pub option_id: OptionId,
    /// Display metadata, e.g. `hex` for color swatches.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<BTreeMap<String, String>>,
}

impl OptionValue {
    pub fn new(
        id: impl Into<OptionValueId>,
        value: impl Into<String>,
        option_id: impl Into<OptionId>,
    ) -> Self {
        Self {
            id: id.into(),
            value: value.into(),
            option_id: option_id.into(),
            metadata: None,
        }
    }

    /// Attach a swatch color.
    pub fn with_hex(mut self, hex: impl Into<String>) -> Self {
        self.metadata
            .get_or_insert_with(BTreeMap::new)
            .insert(HEX_METADATA_KEY.to_string(), hex.into());
        self
    }

    /// Swatch color, if this value carries one.
    pub fn hex(&self) -> Option<&str> {
        self.metadata
            .as_ref()
            .and_then(|m| m.get(HEX_METADATA_KEY))
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_builder_sets_owner() {
        let option = ProductOption::new("size-option", "Size")
            .with_value("s", "Small")
            .with_value("m", "Medium");

        assert_eq!(option.values.len(), 2);
        assert!(option.values.iter().all(|v| v.option_id == option.id));
        assert_eq!(option.value_strings().collect::<Vec<_>>(), ["Small", "Medium"]);
    }

    #[test]
    fn test_value_lookup_is_exact() {
        let option = ProductOption::new("size-option", "Size").with_value("m", "Medium");
        assert!(option.value("Medium").is_some());
        assert!(option.value("medium").is_none());
        assert!(option.value("Medium ").is_none());
    }

    #[test]
    fn test_hex_metadata() {
        let plain = OptionValue::new("c0", "Blue", "color-option");
        assert_eq!(plain.hex(), None);

        let swatch = plain.with_hex("#0000ff");
        assert_eq!(swatch.hex(), Some("#0000ff"));
    }

    #[test]
    fn test_metadata_omitted_when_absent() {
        let value = OptionValue::new("s", "Small", "size-option");
        let json = serde_json::to_value(&value).unwrap();
        assert!(json.get("metadata").is_none());
    }
}
