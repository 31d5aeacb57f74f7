use async_trait::async_trait;
use log::debug;
use serde::de::DeserializeOwned;
use std::path::PathBuf;
use tokio::fs;

use super::{check_index_entry, RecipeSource};
use crate::config::CatalogConfig;
use crate::error::CatalogError;
use crate::model::Recipe;

/// Reads the catalog from a local checkout of the static site
pub struct DirSource {
    recipes_dir: PathBuf,
    index_file: String,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>, config: &CatalogConfig) -> Self {
        Self {
            recipes_dir: root.into().join(&config.recipes_path),
            index_file: config.index_file.clone(),
        }
    }

    async fn read_json<T: DeserializeOwned>(&self, file: &str) -> Result<T, CatalogError> {
        let path = self.recipes_dir.join(file);
        debug!("Reading {}", path.display());

        let body = fs::read_to_string(&path)
            .await
            .map_err(|source| CatalogError::IoError {
                path: path.display().to_string(),
                source,
            })?;
        serde_json::from_str(&body).map_err(|source| CatalogError::ParseError {
            file: file.to_string(),
            source,
        })
    }
}

#[async_trait]
impl RecipeSource for DirSource {
    fn describe(&self) -> String {
        self.recipes_dir.join(&self.index_file).display().to_string()
    }

    async fn fetch_index(&self) -> Result<Vec<String>, CatalogError> {
        self.read_json(&self.index_file).await
    }

    async fn fetch_recipe(&self, file: &str) -> Result<Recipe, CatalogError> {
        check_index_entry(file)?;
        self.read_json(file).await
    }
}
