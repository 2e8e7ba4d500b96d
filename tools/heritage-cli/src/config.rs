//! CLI configuration.

use std::path::Path;

use anyhow::{Context, Result};
use heritage_commerce::search::{
    CategoryMatch, PriceRange, DEFAULT_PRICE_MAX_KWD, DEFAULT_PRICE_MIN_KWD,
};
use heritage_commerce::StorefrontSettings;
use heritage_i18n::Language;
use serde::{Deserialize, Serialize};

/// Config file names searched for, in order.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["heritage.toml", ".heritage.toml", "heritage.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HeritageConfig {
    /// Where session state is kept.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Storefront defaults.
    #[serde(default)]
    pub storefront: StorefrontConfig,
}

impl HeritageConfig {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if is_json(path) {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }

    /// Validate the storefront section and convert it for the core.
    pub fn storefront_settings(&self) -> Result<StorefrontSettings> {
        let section = &self.storefront;
        let default_language: Language = section
            .default_language
            .parse()
            .context("Invalid storefront.default_language")?;
        let category_match: CategoryMatch = section
            .category_match
            .parse()
            .context("Invalid storefront.category_match")?;

        Ok(StorefrontSettings {
            default_language,
            price_range: PriceRange::kwd(section.price_min, section.price_max),
            category_match,
        })
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

/// Storage configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the saved cart and preferences, relative to the
    /// working directory unless absolute.
    #[serde(default = "default_storage_dir")]
    pub dir: String,
}

fn default_storage_dir() -> String {
    ".heritage".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: default_storage_dir(),
        }
    }
}

/// Storefront defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// Language used until one is chosen with `heritage lang`.
    #[serde(default = "default_language")]
    pub default_language: String,

    /// Price slider lower bound, in KWD.
    #[serde(default = "default_price_min")]
    pub price_min: i64,

    /// Price slider upper bound, in KWD.
    #[serde(default = "default_price_max")]
    pub price_max: i64,

    /// `substring` or `exact`.
    #[serde(default = "default_category_match")]
    pub category_match: String,
}

fn default_language() -> String {
    Language::En.code().to_string()
}

fn default_price_min() -> i64 {
    DEFAULT_PRICE_MIN_KWD
}

fn default_price_max() -> i64 {
    DEFAULT_PRICE_MAX_KWD
}

fn default_category_match() -> String {
    CategoryMatch::Substring.as_str().to_string()
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            default_language: default_language(),
            price_min: default_price_min(),
            price_max: default_price_max(),
            category_match: default_category_match(),
        }
    }
}

/// Generate a default heritage.toml config file.
pub fn generate_default_config() -> String {
    format!(
        r#"# Heritage storefront configuration

[storage]
dir = "{dir}"

[storefront]
default_language = "{language}"
price_min = {min}
price_max = {max}
# "substring" matches category labels loosely, "exact" matches category ids
category_match = "{category_match}"
"#,
        dir = default_storage_dir(),
        language = default_language(),
        min = DEFAULT_PRICE_MIN_KWD,
        max = DEFAULT_PRICE_MAX_KWD,
        category_match = default_category_match(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_config_parses_to_defaults() {
        let config: HeritageConfig = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config, HeritageConfig::default());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: HeritageConfig = toml::from_str("[storefront]\ndefault_language = \"ar\"\n").unwrap();
        assert_eq!(config.storage.dir, ".heritage");
        assert_eq!(config.storefront.price_max, 1500);

        let settings = config.storefront_settings().unwrap();
        assert_eq!(settings.default_language, Language::Ar);
        assert_eq!(settings.category_match, CategoryMatch::Substring);
    }

    #[test]
    fn test_invalid_settings_are_rejected() {
        let mut config = HeritageConfig::default();
        config.storefront.category_match = "fuzzy".into();
        assert!(config.storefront_settings().is_err());

        let mut config = HeritageConfig::default();
        config.storefront.default_language = "fr".into();
        assert!(config.storefront_settings().is_err());
    }

    #[test]
    fn test_load_json_and_toml() {
        let dir = tempfile::tempdir().unwrap();

        let json_path = dir.path().join("heritage.json");
        std::fs::write(&json_path, r#"{"storefront": {"category_match": "exact"}}"#).unwrap();
        let config = HeritageConfig::load(&json_path).unwrap();
        assert_eq!(config.storefront.category_match, "exact");
        assert_eq!(config.storefront.default_language, "en");

        let toml_path = dir.path().join("heritage.toml");
        std::fs::write(&toml_path, "[storage]\ndir = \"/tmp/shop\"\n").unwrap();
        assert_eq!(HeritageConfig::load(&toml_path).unwrap().storage.dir, "/tmp/shop");
    }
}
