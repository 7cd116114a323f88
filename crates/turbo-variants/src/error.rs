//! Variant catalog error types.
//!
//! The resolution functions themselves are total; these errors only come
//! out of catalog parsing and opt-in validation.

use thiserror::Error;

/// Errors raised while loading or validating catalog data.
#[derive(Error, Debug)]
pub enum VariantError {
    /// Two options share a title, so selections would be ambiguous.
    #[error("Duplicate option title: {0}")]
    DuplicateOption(String),

    /// A variant carries a value for an axis the option set does not define.
    #[error("Variant {variant} references unknown option: {axis}")]
    UnknownAxis { variant: String, axis: String },

    /// A selection could not be parsed.
    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for VariantError {
    fn from(e: serde_json::Error) -> Self {
        VariantError::Serialization(e.to_string())
    }
}
