use config::{Config, ConfigError, Environment, File};
use log::warn;
use serde::Deserialize;

use crate::error::CatalogError;
use crate::scale::Scale;
use crate::sort::SortKey;

/// Catalog viewer configuration
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct CatalogConfig {
    /// Base URL or local directory of the static site
    pub source: Option<String>,
    /// Directory holding the index and recipe files, relative to the source
    pub recipes_path: String,
    /// Name of the index file inside `recipes_path`
    pub index_file: String,
    /// Request timeout in seconds; requests wait indefinitely if unset
    pub timeout: Option<u64>,
    /// Sort applied when the session starts; catalog order if unset or unknown
    pub default_sort: Option<String>,
    /// Scale multiplier applied when the session starts
    pub default_scale: f64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            source: None,
            recipes_path: default_recipes_path(),
            index_file: default_index_file(),
            timeout: None,
            default_sort: None,
            default_scale: 1.0,
        }
    }
}

fn default_recipes_path() -> String {
    "recipes".to_string()
}

fn default_index_file() -> String {
    "index.json".to_string()
}

impl CatalogConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_CATALOG__ prefix
    /// 2. catalog.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_CATALOG__DEFAULT_SORT
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }

    /// The configured sort key. Unknown keys keep catalog order.
    pub fn initial_sort(&self) -> Option<SortKey> {
        let key = self.default_sort.as_deref()?;
        match key.parse() {
            Ok(key) => Some(key),
            Err(e) => {
                warn!("Ignoring default_sort: {}", e);
                None
            }
        }
    }

    pub fn initial_scale(&self) -> Result<Scale, CatalogError> {
        Scale::try_from(self.default_scale)
    }
}

/// Load configuration from file and environment variables
pub fn load_config() -> Result<CatalogConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("catalog").required(false))
        .add_source(
            Environment::with_prefix("RECIPE_CATALOG")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
