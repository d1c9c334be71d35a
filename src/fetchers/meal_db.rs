use log::{debug, info};
use reqwest::Client;
use std::time::Duration;

use super::RecipeSource;
use crate::config::ApiConfig;
use crate::error::ScalerError;
use crate::model::{Meal, SearchResponse};

/// HTTP client for TheMealDB search endpoint.
pub struct MealDbClient {
    client: Client,
    base_url: String,
    default_query: String,
}

impl MealDbClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ScalerError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .user_agent("Mozilla/5.0 (compatible; RecipeScaler/0.1)")
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            default_query: config.default_query.clone(),
        })
    }

    /// Term actually sent for `query`: blank queries use the default.
    pub fn effective_query<'a>(&'a self, query: &'a str) -> &'a str {
        let query = query.trim();
        if query.is_empty() {
            &self.default_query
        } else {
            query
        }
    }
}

#[async_trait::async_trait]
impl RecipeSource for MealDbClient {
    async fn search(&self, query: &str) -> Result<Vec<Meal>, ScalerError> {
        let query = self.effective_query(query);
        let url = format!("{}/search.php", self.base_url);
        debug!("Searching {} for {:?}", url, query);

        let response: SearchResponse = self
            .client
            .get(&url)
            .query(&[("s", query)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let meals = response.meals.unwrap_or_default();
        info!("Found {} recipes for {:?}", meals.len(), query);
        Ok(meals)
    }
}
