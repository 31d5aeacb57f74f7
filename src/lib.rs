pub mod compose;
pub mod config;
pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
pub mod render;
pub mod scale;
pub mod session;
pub mod sort;

pub use compose::{
    compose, initial_selections, select, Composition, SectionIngredient, Selection, Selections,
    StepEntry,
};
pub use config::CatalogConfig;
pub use error::CatalogError;
pub use filter::{all_tags, filter};
pub use loader::{load_catalog, source_for, Catalog, DirSource, HttpSource, RecipeSource};
pub use model::{Assembly, Component, ComponentOption, Ingredient, Recipe};
pub use scale::{scale_amount, scale_servings, Scale, Tenths};
pub use session::SessionState;
pub use sort::{sort, sort_by_name, SortKey};

/// Load the catalog from a base URL or local directory using default settings
///
/// # Example
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let catalog = recipe_catalog::load_from("https://recipes.example.com").await?;
/// println!("{} recipes", catalog.len());
/// # Ok(())
/// # }
/// ```
pub async fn load_from(location: &str) -> Result<Catalog, CatalogError> {
    load_from_with_config(location, &CatalogConfig::default()).await
}

/// Load the catalog from a base URL or local directory
pub async fn load_from_with_config(
    location: &str,
    config: &CatalogConfig,
) -> Result<Catalog, CatalogError> {
    let source = source_for(location, config)?;
    load_catalog(source.as_ref()).await
}
