use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::api::RecipeSource;
use crate::config::ApiConfig;
use crate::error::ScoutError;
use crate::model::{Recipe, RecipeId};

/// Wire shape of a search response
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<Recipe>,
}

/// Client for the Spoonacular recipe API
pub struct SpoonacularClient {
    client: Client,
    api_key: String,
    base_url: String,
    page_size: u32,
}

impl SpoonacularClient {
    /// Create a client from configuration
    pub fn new(config: &ApiConfig) -> Result<Self, ScoutError> {
        let api_key = config.resolve_api_key()?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()?;

        Ok(SpoonacularClient {
            client,
            api_key,
            base_url: config.base_url.clone(),
            page_size: config.page_size,
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        SpoonacularClient {
            client: Client::new(),
            api_key,
            base_url,
            page_size: 12,
        }
    }
}

#[async_trait]
impl RecipeSource for SpoonacularClient {
    async fn search(
        &self,
        query: &str,
        cuisine: Option<&str>,
        diet: Option<&str>,
    ) -> Result<Vec<Recipe>, ScoutError> {
        let mut params = vec![
            ("apiKey", self.api_key.clone()),
            ("query", query.to_string()),
            ("addRecipeInformation", "true".to_string()),
            ("number", self.page_size.to_string()),
        ];
        if let Some(cuisine) = cuisine {
            params.push(("cuisine", cuisine.to_string()));
        }
        if let Some(diet) = diet {
            params.push(("diet", diet.to_string()));
        }

        let response = self
            .client
            .get(format!("{}/complexSearch", self.base_url))
            .query(&params)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ScoutError::ApiStatus(response.status()));
        }

        let body: SearchResponse = response.json().await?;
        debug!("search for {:?} returned {} results", query, body.results.len());
        Ok(body.results)
    }

    async fn get_details(&self, id: RecipeId) -> Result<Recipe, ScoutError> {
        let response = self
            .client
            .get(format!("{}/{}/information", self.base_url, id))
            .query(&[("apiKey", &self.api_key)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ScoutError::ApiStatus(response.status()));
        }

        let recipe: Recipe = response.json().await?;
        debug!("fetched details for recipe {}", recipe.id);
        Ok(recipe)
    }
}
