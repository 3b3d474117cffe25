use crate::models::Listing;

pub const MISSING_ID_ERROR: &str = "Missing listing ID.";
pub const LOAD_FAILED_FALLBACK: &str = "Failed to load listing.";

/// Route parameters handed to the page by the router
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams {
    pub id: Option<String>,
}

/// A load that has been started and is waiting for the API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingLoad {
    pub generation: u64,
    pub id: String,
}

/// Local state of the listing detail page
#[derive(Debug, Clone)]
pub struct PageState {
    pub listing: Option<Listing>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub chat_open: bool,
    pub booking_in_flight: bool,
    route_id: Option<String>,
    mounted: bool,
    generation: u64,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            listing: None,
            is_loading: true,
            error: None,
            chat_open: false,
            booking_in_flight: false,
            route_id: None,
            mounted: false,
            generation: 0,
        }
    }
}

impl PageState {
    pub fn route_id(&self) -> Option<&str> {
        self.route_id.as_deref()
    }

    /// True when `id` is already the identifier the page was loaded for
    pub fn is_current_route(&self, id: Option<&str>) -> bool {
        self.mounted && self.route_id.as_deref() == id
    }

    /// Start loading for a new route identifier.
    ///
    /// Discards the previous listing and error. Returns the load to run, or
    /// `None` when the identifier is missing, in which case the page settles
    /// on the missing-id error straight away.
    pub fn begin_load(&mut self, id: Option<String>) -> Option<PendingLoad> {
        self.mounted = true;
        self.generation += 1;
        self.route_id = id.clone();
        self.listing = None;
        self.error = None;

        match id {
            None => {
                self.error = Some(MISSING_ID_ERROR.to_string());
                self.is_loading = false;
                None
            }
            Some(id) => {
                self.is_loading = true;
                Some(PendingLoad {
                    generation: self.generation,
                    id,
                })
            }
        }
    }

    /// Apply the result of a load. Results of superseded loads are dropped;
    /// returns whether the result was applied.
    pub fn finish_load(&mut self, generation: u64, result: Result<Listing, String>) -> bool {
        if generation != self.generation {
            return false;
        }

        match result {
            Ok(listing) => {
                self.listing = Some(listing);
                self.error = None;
            }
            Err(message) if message.trim().is_empty() => {
                self.error = Some(LOAD_FAILED_FALLBACK.to_string());
            }
            Err(message) => {
                self.error = Some(message);
            }
        }
        self.is_loading = false;
        true
    }
}
