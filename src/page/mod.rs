pub mod effects;
pub mod state;
pub mod view;

pub use effects::{Clock, LogNotifier, Navigator, Notifier, Route, SystemClock};
pub use state::{PageState, RouteParams};
pub use view::{ChatDialogProps, View};

use crate::clients::{AuthClient, BookingStore, ListingApi};
use crate::models::{BookingRequest, Listing};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, error, info, warn};

pub const SIGN_IN_REQUIRED: &str = "Please sign in to book.";
pub const BOOKING_FAILED: &str = "Failed to create booking.";
pub const BOOKING_SENT: &str = "Booking request sent.";

/// External services the page talks to
#[derive(Clone)]
pub struct Services {
    pub api: Arc<dyn ListingApi>,
    pub auth: Arc<dyn AuthClient>,
    pub bookings: Arc<dyn BookingStore>,
    pub navigator: Arc<dyn Navigator>,
    pub notifier: Arc<dyn Notifier>,
    pub clock: Arc<dyn Clock>,
}

/// What happened when the user pressed "Book Now"
#[derive(Debug, Clone, PartialEq)]
pub enum BookingOutcome {
    /// Nothing loaded yet
    NoListing,
    /// The listing is not available, the control is disabled
    Unavailable,
    /// Another booking from this page has not finished yet
    InFlight,
    /// No signed-in user, nothing was written
    SignInRequired,
    /// The insert was rejected or never reached the store
    Failed,
    /// The booking row was written
    Requested(BookingRequest),
}

/// Controller for the listing detail page.
///
/// Cheap to clone; clones share the same page state so a load and a booking
/// can be driven from separate tasks.
#[derive(Clone)]
pub struct ListingDetailPage {
    services: Services,
    state: Arc<Mutex<PageState>>,
}

impl ListingDetailPage {
    pub fn new(services: Services) -> Self {
        Self {
            services,
            state: Arc::new(Mutex::new(PageState::default())),
        }
    }

    fn state(&self) -> MutexGuard<'_, PageState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Copy of the current page state
    pub fn snapshot(&self) -> PageState {
        self.state().clone()
    }

    pub fn view(&self) -> View {
        view::render(&self.state())
    }

    /// First load of the page for the given route
    pub async fn mount(&self, params: RouteParams) {
        self.load(params.id).await;
    }

    /// Route parameters changed. Reloads only when the identifier differs
    /// from the one already shown.
    pub async fn set_route(&self, params: RouteParams) {
        if self.state().is_current_route(params.id.as_deref()) {
            debug!("Route unchanged, keeping current listing");
            return;
        }
        self.load(params.id).await;
    }

    async fn load(&self, id: Option<String>) {
        let pending = self.state().begin_load(id);
        let Some(pending) = pending else {
            warn!("No listing id in route");
            return;
        };

        info!("Loading listing {}", pending.id);
        let result = self
            .services
            .api
            .get_listing_by_id(&pending.id)
            .await
            .map(Listing::from)
            .map_err(|err| {
                warn!("Failed to load listing {}: {:#}", pending.id, err);
                err.to_string()
            });

        if !self.state().finish_load(pending.generation, result) {
            debug!("Dropping stale result for listing {}", pending.id);
        }
    }

    /// Request a one-day booking of the loaded listing.
    pub async fn book(&self) -> BookingOutcome {
        let listing = {
            let mut state = self.state();
            let Some(listing) = state.listing.clone() else {
                return BookingOutcome::NoListing;
            };
            if !listing.available {
                return BookingOutcome::Unavailable;
            }
            if state.booking_in_flight {
                debug!("Booking already in flight for {}", listing.id);
                return BookingOutcome::InFlight;
            }
            state.booking_in_flight = true;
            listing
        };

        let _guard = InFlightGuard {
            state: &self.state,
        };
        self.submit_booking(&listing).await
    }

    async fn submit_booking(&self, listing: &Listing) -> BookingOutcome {
        let Services {
            auth,
            bookings,
            navigator,
            notifier,
            clock,
            ..
        } = &self.services;

        let user = match auth.get_user().await {
            Ok(Some(user)) => user,
            Ok(None) => {
                notifier.error(SIGN_IN_REQUIRED);
                return BookingOutcome::SignInRequired;
            }
            Err(err) => {
                warn!("Could not look up current user: {:#}", err);
                notifier.error(SIGN_IN_REQUIRED);
                return BookingOutcome::SignInRequired;
            }
        };

        let request = BookingRequest::one_day(listing, &user, clock.now());
        if let Err(err) = bookings.insert_booking(&request).await {
            error!("Failed to create booking for {}: {:#}", listing.id, err);
            notifier.error(BOOKING_FAILED);
            return BookingOutcome::Failed;
        }

        info!("Booking requested for listing {} by {}", listing.id, user.id);
        notifier.success(BOOKING_SENT);
        navigator.navigate(Route::Bookings);
        BookingOutcome::Requested(request)
    }

    /// Back control of both the loaded and the unavailable view
    pub fn back_to_browse(&self) {
        self.services.navigator.navigate(Route::Browse);
    }

    pub fn open_chat(&self) {
        self.set_chat_open(true);
    }

    pub fn close_chat(&self) {
        self.set_chat_open(false);
    }

    /// Open state reported back by the chat dialog
    pub fn set_chat_open(&self, open: bool) {
        self.state().chat_open = open;
    }

    /// Props for the chat dialog, once a listing with an owner is loaded
    pub fn chat_dialog(&self) -> Option<ChatDialogProps> {
        let state = self.state();
        let listing = state.listing.as_ref()?;
        ChatDialogProps::for_listing(listing, state.chat_open)
    }
}

/// Clears the in-flight flag even if the booking future is dropped midway
struct InFlightGuard<'a> {
    state: &'a Mutex<PageState>,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .booking_in_flight = false;
    }
}
