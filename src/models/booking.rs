use super::Listing;
use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Length of a booking made from the detail page, in milliseconds
const BOOKING_WINDOW_MS: i64 = 86_400_000;

/// Signed-in user as reported by the auth service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Bookings created from the detail page always start out pending; the owner
/// moves them on from the bookings screen.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
}

/// Row inserted into the `bookings` table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookingRequest {
    pub listing_id: String,
    pub renter_id: String,
    pub owner_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_price: f64,
    pub status: BookingStatus,
}

impl BookingRequest {
    /// One-day pending booking of `listing` by `renter`, starting on the UTC
    /// date of `now`.
    pub fn one_day(listing: &Listing, renter: &User, now: DateTime<Utc>) -> Self {
        let end = now + Duration::milliseconds(BOOKING_WINDOW_MS);

        Self {
            listing_id: listing.id.clone(),
            renter_id: renter.id.clone(),
            owner_id: listing
                .owner_id
                .clone()
                // listings without a recorded owner are booked against the nil UUID
                .unwrap_or_else(|| Uuid::nil().to_string()),
            start_date: now.date_naive(),
            end_date: end.date_naive(),
            total_price: listing.price,
            status: BookingStatus::Pending,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Period;
    use chrono::TimeZone;
    use serde_json::json;

    fn listing(owner: Option<&str>) -> Listing {
        Listing {
            id: "L1".to_string(),
            title: "Rotavator".to_string(),
            description: String::new(),
            image: String::new(),
            listing_type: "equipment".to_string(),
            location: "Nashik".to_string(),
            owner_id: owner.map(str::to_string),
            owner_name: "Ravi".to_string(),
            area: None,
            condition: None,
            price: 500.0,
            period: Period::Day,
            available: true,
        }
    }

    fn renter() -> User {
        User {
            id: "U1".to_string(),
            email: None,
        }
    }

    #[test]
    fn test_one_day_booking_fields() {
        let now = Utc.with_ymd_and_hms(2024, 3, 10, 9, 30, 0).unwrap();
        let request = BookingRequest::one_day(&listing(Some("O1")), &renter(), now);

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "listing_id": "L1",
                "renter_id": "U1",
                "owner_id": "O1",
                "start_date": "2024-03-10",
                "end_date": "2024-03-11",
                "total_price": 500.0,
                "status": "pending"
            })
        );
    }

    #[test]
    fn test_missing_owner_falls_back_to_sentinel() {
        let now = Utc.with_ymd_and_hms(2024, 3, 10, 9, 30, 0).unwrap();
        let request = BookingRequest::one_day(&listing(None), &renter(), now);

        assert_eq!(request.owner_id, "00000000-0000-0000-0000-000000000000");
        assert_eq!(request.owner_id, Uuid::nil().to_string());
    }

    #[test]
    fn test_window_crosses_month_and_year_end() {
        let now = Utc.with_ymd_and_hms(2023, 12, 31, 23, 59, 59).unwrap();
        let request = BookingRequest::one_day(&listing(Some("O1")), &renter(), now);

        assert_eq!(request.start_date, NaiveDate::from_ymd_opt(2023, 12, 31).unwrap());
        assert_eq!(request.end_date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    }
}
