use crate::clients::traits::{AuthClient, BookingStore};
use crate::clients::types::ClientError;
use crate::models::{BookingRequest, User};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use std::time::Duration;
use tracing::{debug, info, warn};

const BOOKINGS_TABLE: &str = "bookings";

/// Client for the hosted auth + database service.
///
/// Talks to the GoTrue (`/auth/v1`) and PostgREST (`/rest/v1`) endpoints
/// directly. Requests are authorized with the project's anon key and, when
/// a session exists, the user's access token.
pub struct SupabaseClient {
    client: Client,
    url: String,
    anon_key: String,
    access_token: Option<String>,
}

impl SupabaseClient {
    pub fn new(
        url: impl Into<String>,
        anon_key: impl Into<String>,
        access_token: Option<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("listing-detail/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            url: url.into().trim_end_matches('/').to_string(),
            anon_key: anon_key.into(),
            access_token,
        })
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        let bearer = self.access_token.as_deref().unwrap_or(&self.anon_key);
        request
            .header("apikey", &self.anon_key)
            .bearer_auth(bearer)
    }
}

#[async_trait]
impl AuthClient for SupabaseClient {
    async fn get_user(&self) -> Result<Option<User>> {
        if self.access_token.is_none() {
            debug!("No access token, treating session as signed out");
            return Ok(None);
        }

        let url = format!("{}/auth/v1/user", self.url);
        let response = self
            .authorized(self.client.get(&url))
            .send()
            .await
            .context("Failed to reach auth service")?;

        match response.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                warn!("Access token rejected by auth service");
                Ok(None)
            }
            status if status.is_success() => {
                let user: User = response
                    .json()
                    .await
                    .context("Failed to decode user")?;
                debug!("Signed in as {}", user.id);
                Ok(Some(user))
            }
            _ => Err(ClientError::from_response(response).await.into()),
        }
    }
}

#[async_trait]
impl BookingStore for SupabaseClient {
    async fn insert_booking(&self, booking: &BookingRequest) -> Result<()> {
        let url = format!("{}/rest/v1/{}", self.url, BOOKINGS_TABLE);
        let response = self
            .authorized(self.client.post(&url))
            .header("Prefer", "return=minimal")
            .json(booking)
            .send()
            .await
            .context("Failed to reach database")?;

        if !response.status().is_success() {
            return Err(ClientError::from_response(response).await.into());
        }

        info!(
            "Inserted booking for listing {} ({} to {})",
            booking.listing_id, booking.start_date, booking.end_date
        );
        Ok(())
    }
}
