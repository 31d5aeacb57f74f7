mod dir;
mod http;

pub use dir::DirSource;
pub use http::HttpSource;

use async_trait::async_trait;
use futures::future::try_join_all;
use log::{debug, info};
use std::path::{Component as PathComponent, Path};

use crate::config::CatalogConfig;
use crate::error::CatalogError;
use crate::filter::all_tags;
use crate::model::Recipe;

/// Where the recipe index and recipe files are read from
#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// Short description used in log messages
    fn describe(&self) -> String;

    /// Reads the index: the list of recipe file names
    async fn fetch_index(&self) -> Result<Vec<String>, CatalogError>;

    /// Reads one recipe file named in the index
    async fn fetch_recipe(&self, file: &str) -> Result<Recipe, CatalogError>;
}

/// The loaded recipe collection. Never mutated after loading.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    recipes: Vec<Recipe>,
}

impl Catalog {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|recipe| recipe.id == id)
    }

    pub fn get(&self, id: &str) -> Result<&Recipe, CatalogError> {
        self.find(id)
            .ok_or_else(|| CatalogError::RecipeNotFound(id.to_string()))
    }

    /// Sorted unique tags, for the tag filter bar
    pub fn all_tags(&self) -> Vec<String> {
        all_tags(&self.recipes)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Recipe;
    type IntoIter = std::slice::Iter<'a, Recipe>;

    fn into_iter(self) -> Self::IntoIter {
        self.recipes.iter()
    }
}

/// Loads the index, then every recipe it names concurrently.
///
/// Recipes keep index order. The first failing fetch or parse fails the
/// whole load; there is no partial catalog and no retry.
pub async fn load_catalog(source: &dyn RecipeSource) -> Result<Catalog, CatalogError> {
    info!("Loading recipe catalog from {}", source.describe());
    let files = source.fetch_index().await?;
    debug!("Index lists {} recipe files", files.len());

    let recipes = try_join_all(files.iter().map(|file| source.fetch_recipe(file))).await?;

    info!("Loaded {} recipes", recipes.len());
    Ok(Catalog::new(recipes))
}

/// Index entries must be bare file names inside the recipes directory.
pub(crate) fn check_index_entry(file: &str) -> Result<(), CatalogError> {
    let mut components = Path::new(file).components();
    match (components.next(), components.next()) {
        (Some(PathComponent::Normal(_)), None) => Ok(()),
        _ => Err(CatalogError::InvalidIndexEntry(file.to_string())),
    }
}

/// Picks an HTTP source for `http(s)://` locations and a directory source otherwise.
pub fn source_for(location: &str, config: &CatalogConfig) -> Result<Box<dyn RecipeSource>, CatalogError> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Ok(Box::new(HttpSource::new(location, config)?))
    } else {
        Ok(Box::new(DirSource::new(location, config)))
    }
}
