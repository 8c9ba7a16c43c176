//! # Foodpad API Client
//!
//! HTTP implementation of the [`CatalogApi`] seam. Posts the wire-format
//! food-item record as JSON to the remote catalog service and maps transport
//! and response failures into [`CatalogError`]. No retry; callers decide what
//! a failure means.

use async_trait::async_trait;
use foodpad_core::{CatalogApi, CatalogError};
use foodpad_types::FoodItemRecord;
use reqwest::{Client, ClientBuilder};
use std::time::Duration;
use url::Url;

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default connection timeout in seconds
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Path of the create-food-item operation, relative to the base URL.
const FOOD_ITEMS_PATH: &str = "food-items";

/// Reqwest-backed catalog client.
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    endpoint: Url,
    client: Client,
}

impl HttpCatalog {
    /// Creates a client for the catalog at `base_url` with default timeouts.
    pub fn new(base_url: Url) -> Result<Self, CatalogError> {
        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self::with_client(base_url, client)
    }

    /// Creates a client reusing an existing connection pool.
    pub fn with_client(base_url: Url, client: Client) -> Result<Self, CatalogError> {
        let endpoint = join_endpoint(&base_url)?;
        Ok(Self { endpoint, client })
    }

    /// The resolved create-food-item endpoint.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

fn join_endpoint(base_url: &Url) -> Result<Url, CatalogError> {
    // Keep any base path: "http://host/api" + "food-items" = "/api/food-items".
    let mut base = base_url.clone();
    let path = base.path().to_owned();
    if !path.ends_with('/') {
        base.set_path(&format!("{path}/"));
    }
    base.join(FOOD_ITEMS_PATH)
        .map_err(|e| CatalogError::Transport(format!("invalid catalog base URL: {e}")))
}

#[async_trait]
impl CatalogApi for HttpCatalog {
    async fn create_food_item(&self, record: &FoodItemRecord) -> Result<(), CatalogError> {
        tracing::debug!(endpoint = %self.endpoint, "submitting food item");

        let body = serde_json::to_vec(record).map_err(CatalogError::Serialization)?;

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| CatalogError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "catalog rejected food item");
            return Err(CatalogError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_onto_bare_host() {
        let base: Url = "http://localhost:8080".parse().expect("parse url");
        let catalog = HttpCatalog::new(base).expect("build client");
        assert_eq!(catalog.endpoint().as_str(), "http://localhost:8080/food-items");
    }

    #[test]
    fn endpoint_preserves_base_path() {
        let base: Url = "https://catalog.example/api/v1".parse().expect("parse url");
        let catalog = HttpCatalog::new(base).expect("build client");
        assert_eq!(
            catalog.endpoint().as_str(),
            "https://catalog.example/api/v1/food-items"
        );
    }
}
