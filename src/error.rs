use thiserror::Error;

/// Errors that can occur while loading or working with the recipe catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Failed to fetch a resource over HTTP
    #[error("Failed to fetch URL: {0}")]
    FetchError(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("Request for {url} failed with status {status}")]
    HttpStatus { url: String, status: u16 },

    /// Failed to read a resource from disk
    #[error("Failed to read {path}: {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Index or recipe file is not valid JSON for its schema
    #[error("Failed to parse {file}: {source}")]
    ParseError {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    /// Scale multiplier outside the allowed set
    #[error("Invalid scale {0}; expected one of 0.5, 1, 2, 3, 4")]
    InvalidScale(f64),

    /// Sort key not offered by the sort selector
    #[error("Unknown sort key '{0}'; expected name-asc, name-desc, time-asc or time-desc")]
    InvalidSortKey(String),

    /// Index entry that is not a plain file name
    #[error("Invalid index entry '{0}': expected a file name")]
    InvalidIndexEntry(String),

    /// No recipe with this id in the catalog
    #[error("Recipe not found: {0}")]
    RecipeNotFound(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}
