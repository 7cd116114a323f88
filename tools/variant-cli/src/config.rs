//! CLI configuration.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use turbo_variants::ResolverConfig;

/// Config file names searched from the working directory upwards.
pub const CONFIG_FILE_NAMES: [&str; 3] =
    ["turbo-variants.toml", ".turbo-variants.toml", "turbo-variants.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Tracing filter directive (e.g. "turbo_variants=debug").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,

    /// Resolution settings.
    #[serde(default)]
    pub resolver: ResolverConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content, path)
    }

    fn parse(content: &str, path: &Path) -> Result<Self> {
        if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }

    /// Find and load the nearest config file, walking up from `start`.
    pub fn discover(start: &Path) -> Option<Self> {
        start.ancestors().find_map(|dir| {
            CONFIG_FILE_NAMES
                .iter()
                .map(|name| dir.join(name))
                .find(|path| path.exists())
                .and_then(|path| Self::load(&path).ok())
        })
    }

    /// Serialize as TOML.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_toml() {
        let config = CliConfig::parse(
            "log_level = \"debug\"\n\n[resolver]\nlow_stock_threshold = 3\n",
            Path::new("turbo-variants.toml"),
        )
        .unwrap();
        assert_eq!(config.resolver.low_stock_threshold, 3);
        assert_eq!(config.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_parse_empty_uses_defaults() {
        let config = CliConfig::parse("", Path::new("turbo-variants.toml")).unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.resolver.low_stock_threshold, 5);
    }

    #[test]
    fn test_parse_json() {
        let config = CliConfig::parse(
            r#"{"resolver": {"low_stock_threshold": 9}}"#,
            Path::new("turbo-variants.json"),
        )
        .unwrap();
        assert_eq!(config.resolver.low_stock_threshold, 9);
    }

    #[test]
    fn test_parse_error_names_file() {
        let err = CliConfig::parse("resolver = 3", Path::new("bad.toml")).unwrap_err();
        assert!(format!("{:#}", err).contains("bad.toml"));
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = CliConfig {
            resolver: ResolverConfig::default().with_low_stock_threshold(2),
            log_level: None,
        };
        let text = config.to_toml().unwrap();
        let back = CliConfig::parse(&text, Path::new("x.toml")).unwrap();
        assert_eq!(back, config);
    }
}
