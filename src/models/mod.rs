pub mod booking;

pub use booking::{BookingRequest, BookingStatus, User};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Image shown when a listing was posted without photos
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// Billing unit of a listing's price
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Hour,
    #[default]
    Day,
    Week,
    Month,
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let word = match self {
            Period::Hour => "hour",
            Period::Day => "day",
            Period::Week => "week",
            Period::Month => "month",
        };
        f.write_str(word)
    }
}

/// Listing as returned by `GET /listings/{id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingResponse {
    pub id: String,
    #[serde(default)]
    pub owner_id: Option<String>,
    #[serde(default)]
    pub owner_name: Option<String>,
    #[serde(rename = "type")]
    pub listing_type: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub period: Period,
    #[serde(default)]
    pub price_per_hour: Option<f64>,
    #[serde(default)]
    pub price_per_day: Option<f64>,
    #[serde(default)]
    pub price_per_week: Option<f64>,
    #[serde(default)]
    pub price_per_month: Option<f64>,
    pub location: String,
    #[serde(default)]
    pub pincode: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub condition: Option<String>,
    #[serde(default)]
    pub area: Option<f64>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default = "default_available")]
    pub available: bool,
}

fn default_available() -> bool {
    true
}

impl ListingResponse {
    /// Price for the listing's own billing period, falling back to whichever
    /// column the owner did fill in.
    pub fn effective_price(&self) -> f64 {
        let own = match self.period {
            Period::Hour => self.price_per_hour,
            Period::Day => self.price_per_day,
            Period::Week => self.price_per_week,
            Period::Month => self.price_per_month,
        };

        own.or(self.price_per_day)
            .or(self.price_per_hour)
            .or(self.price_per_week)
            .or(self.price_per_month)
            .unwrap_or(0.0)
    }
}

/// Listing as displayed on the detail page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Listing {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub listing_type: String,
    pub location: String,
    pub owner_id: Option<String>,
    pub owner_name: String,
    pub area: Option<f64>,
    pub condition: Option<String>,
    pub price: f64,
    pub period: Period,
    pub available: bool,
}

impl From<ListingResponse> for Listing {
    fn from(response: ListingResponse) -> Self {
        let price = response.effective_price();
        let image = response
            .images
            .first()
            .cloned()
            .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());

        Self {
            id: response.id,
            title: response.title,
            description: response.description.unwrap_or_default(),
            image,
            listing_type: response.listing_type,
            location: response.location,
            owner_id: response.owner_id,
            owner_name: response.owner_name.unwrap_or_else(|| "Unknown".to_string()),
            area: response.area,
            condition: response.condition,
            price,
            period: response.period,
            available: response.available,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tractor_json() -> serde_json::Value {
        json!({
            "id": "L1",
            "owner_id": "O1",
            "owner_name": "Ravi",
            "type": "equipment",
            "title": "Mahindra 575 tractor",
            "description": "Well maintained, 45 HP",
            "period": "week",
            "price_per_day": 500.0,
            "price_per_week": 3000.0,
            "location": "Nashik",
            "condition": "good",
            "images": ["https://cdn.example.com/a.jpg", "https://cdn.example.com/b.jpg"],
            "available": true
        })
    }

    #[test]
    fn test_mapping_uses_period_price_and_first_image() {
        let response: ListingResponse = serde_json::from_value(tractor_json()).unwrap();
        let listing = Listing::from(response);

        assert_eq!(listing.price, 3000.0);
        assert_eq!(listing.period, Period::Week);
        assert_eq!(listing.image, "https://cdn.example.com/a.jpg");
        assert_eq!(listing.listing_type, "equipment");
        assert_eq!(listing.owner_id.as_deref(), Some("O1"));
        assert_eq!(listing.condition.as_deref(), Some("good"));
        assert!(listing.area.is_none());
    }

    #[test]
    fn test_mapping_defaults_for_sparse_listing() {
        let response: ListingResponse = serde_json::from_value(json!({
            "id": "L2",
            "type": "land",
            "title": "2 acre plot",
            "period": "month",
            "price_per_day": 120.0,
            "location": "Pune",
            "area": 2.5
        }))
        .unwrap();
        let listing = Listing::from(response);

        // no monthly price set, day price is the fallback
        assert_eq!(listing.price, 120.0);
        assert_eq!(listing.image, PLACEHOLDER_IMAGE);
        assert_eq!(listing.description, "");
        assert_eq!(listing.owner_name, "Unknown");
        assert!(listing.owner_id.is_none());
        assert_eq!(listing.area, Some(2.5));
        assert!(listing.available);
    }

    #[test]
    fn test_price_without_any_column_is_zero() {
        let response: ListingResponse = serde_json::from_value(json!({
            "id": "L3",
            "type": "land",
            "title": "Unpriced",
            "location": "Satara"
        }))
        .unwrap();

        assert_eq!(response.period, Period::Day);
        assert_eq!(response.effective_price(), 0.0);
    }

    #[test]
    fn test_period_display() {
        assert_eq!(Period::Hour.to_string(), "hour");
        assert_eq!(Period::Month.to_string(), "month");
    }
}
