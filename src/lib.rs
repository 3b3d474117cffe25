//! Listing detail page for the farm equipment and land marketplace.
//!
//! [`page::ListingDetailPage`] loads a listing through [`clients::ListingApi`],
//! books it through [`clients::AuthClient`] and [`clients::BookingStore`], and
//! exposes a [`page::View`] for whatever draws the page.

pub mod clients;
pub mod config;
pub mod models;
pub mod page;
