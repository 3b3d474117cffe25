use crate::models::{BookingRequest, ListingResponse, User};
use anyhow::Result;
use async_trait::async_trait;

/// Read access to the listing API
#[async_trait]
pub trait ListingApi: Send + Sync {
    /// Fetch a single listing by its identifier
    async fn get_listing_by_id(&self, id: &str) -> Result<ListingResponse>;
}

/// Session lookup against the auth service
#[async_trait]
pub trait AuthClient: Send + Sync {
    /// Currently signed-in user, `None` when there is no session
    async fn get_user(&self) -> Result<Option<User>>;
}

/// Write access to the `bookings` table
#[async_trait]
pub trait BookingStore: Send + Sync {
    async fn insert_booking(&self, booking: &BookingRequest) -> Result<()>;
}
