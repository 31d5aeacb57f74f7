use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

use super::{check_index_entry, RecipeSource};
use crate::config::CatalogConfig;
use crate::error::CatalogError;
use crate::model::Recipe;

/// Reads the catalog from a static web server
pub struct HttpSource {
    client: Client,
    base_url: String,
    recipes_path: String,
    index_file: String,
}

impl HttpSource {
    pub fn new(base_url: &str, config: &CatalogConfig) -> Result<Self, CatalogError> {
        let mut builder =
            Client::builder().user_agent(concat!("recipe-catalog/", env!("CARGO_PKG_VERSION")));
        if let Some(seconds) = config.timeout {
            builder = builder.timeout(Duration::from_secs(seconds));
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            recipes_path: config.recipes_path.trim_matches('/').to_string(),
            index_file: config.index_file.clone(),
        })
    }

    fn url_for(&self, file: &str) -> String {
        if self.recipes_path.is_empty() {
            format!("{}/{}", self.base_url, file)
        } else {
            format!("{}/{}/{}", self.base_url, self.recipes_path, file)
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, file: &str) -> Result<T, CatalogError> {
        let url = self.url_for(file);
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::HttpStatus {
                url,
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|source| CatalogError::ParseError {
            file: file.to_string(),
            source,
        })
    }
}

#[async_trait]
impl RecipeSource for HttpSource {
    fn describe(&self) -> String {
        self.url_for(&self.index_file)
    }

    async fn fetch_index(&self) -> Result<Vec<String>, CatalogError> {
        self.get_json(&self.index_file).await
    }

    async fn fetch_recipe(&self, file: &str) -> Result<Recipe, CatalogError> {
        check_index_entry(file)?;
        self.get_json(file).await
    }
}
