use crate::clients::traits::ListingApi;
use crate::clients::types::ClientError;
use crate::models::ListingResponse;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};

/// Listing API client over HTTP
pub struct HttpListingApi {
    client: Client,
    base_url: String,
}

impl HttpListingApi {
    /// Create a client for the API rooted at `base_url` (e.g. `http://host/api/v1`)
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("listing-detail/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn listing_url(&self, id: &str) -> String {
        format!("{}/listings/{}", self.base_url, id)
    }
}

#[async_trait]
impl ListingApi for HttpListingApi {
    async fn get_listing_by_id(&self, id: &str) -> Result<ListingResponse> {
        let url = self.listing_url(id);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to reach listing API")?;

        if !response.status().is_success() {
            return Err(ClientError::from_response(response).await.into());
        }

        let body = response
            .text()
            .await
            .context("Failed to read listing response")?;
        let listing: ListingResponse = serde_json::from_str(&body).map_err(ClientError::from)?;

        info!("Fetched listing {} ({})", listing.id, listing.title);
        Ok(listing)
    }
}
