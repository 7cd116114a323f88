//! The shopper's in-progress option choices.

use std::collections::BTreeMap;

use crate::error::VariantError;
use serde::{Deserialize, Serialize};

/// Option title to chosen value.
///
/// Updates never mutate in place: [`Selection::with`] and
/// [`Selection::without`] return a new selection and leave the receiver
/// untouched, so a UI can keep the previous one around for comparison.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selection(BTreeMap<String, String>);

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy of this selection with `title` set to `value`.
    #[must_use]
    pub fn with(&self, title: impl Into<String>, value: impl Into<String>) -> Self {
        let mut next = self.0.clone();
        next.insert(title.into(), value.into());
        Self(next)
    }

    /// A copy of this selection with `title` cleared.
    #[must_use]
    pub fn without(&self, title: &str) -> Self {
        let mut next = self.0.clone();
        next.remove(title);
        Self(next)
    }

    pub fn get(&self, title: &str) -> Option<&str> {
        self.0.get(title).map(String::as_str)
    }

    pub fn contains(&self, title: &str) -> bool {
        self.0.contains_key(title)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate `(title, value)` pairs in title order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Parse a `Title=Value` pair. Only the first `=` splits; the value may
    /// contain further `=` characters.
    pub fn parse_pair(pair: &str) -> Result<(String, String), VariantError> {
        match pair.split_once('=') {
            Some((title, value)) if !title.is_empty() => {
                Ok((title.to_string(), value.to_string()))
            }
            _ => Err(VariantError::InvalidSelection(pair.to_string())),
        }
    }
}

impl<K, V> FromIterator<(K, V)> for Selection
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
