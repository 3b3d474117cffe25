pub mod api;
pub mod supabase;
pub mod traits;
pub mod types;

#[cfg(test)]
pub(crate) mod test_server;

pub use api::HttpListingApi;
pub use supabase::SupabaseClient;
pub use traits::{AuthClient, BookingStore, ListingApi};
