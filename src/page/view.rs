use crate::models::Listing;
use crate::page::effects::Route;
use crate::page::state::PageState;
use std::fmt;

const NOT_FOUND_MESSAGE: &str = "Unable to find listing";

/// Props forwarded to the chat dialog
#[derive(Debug, Clone, PartialEq)]
pub struct ChatDialogProps {
    pub open: bool,
    pub listing_id: String,
    pub receiver_id: String,
    pub receiver_name: String,
}

impl ChatDialogProps {
    /// Dialog props for chatting with the owner of `listing`. There is nobody
    /// to chat with when the listing has no owner id.
    pub fn for_listing(listing: &Listing, open: bool) -> Option<Self> {
        let receiver_id = listing.owner_id.clone()?;
        Some(Self {
            open,
            listing_id: listing.id.clone(),
            receiver_id,
            receiver_name: listing.owner_name.clone(),
        })
    }
}

/// Everything the loaded layout shows
#[derive(Debug, Clone, PartialEq)]
pub struct ListingView {
    pub image: String,
    pub image_alt: String,
    pub badge: String,
    pub title: String,
    pub location: String,
    pub owner_name: String,
    pub area_label: Option<String>,
    pub condition: Option<String>,
    pub description: String,
    pub price_label: String,
    pub period_label: String,
    pub book_enabled: bool,
    pub chat: Option<ChatDialogProps>,
    pub back_route: Route,
}

#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Loading,
    Unavailable { message: String, back_route: Route },
    Loaded(ListingView),
}

/// Pick the view for the current page state.
pub fn render(state: &PageState) -> View {
    if state.is_loading {
        return View::Loading;
    }

    let listing = match (&state.error, &state.listing) {
        (None, Some(listing)) => listing,
        (error, _) => {
            return View::Unavailable {
                message: error.clone().unwrap_or_else(|| NOT_FOUND_MESSAGE.to_string()),
                back_route: Route::Browse,
            }
        }
    };

    View::Loaded(ListingView {
        image: listing.image.clone(),
        image_alt: listing.title.clone(),
        badge: listing.listing_type.clone(),
        title: listing.title.clone(),
        location: listing.location.clone(),
        owner_name: listing.owner_name.clone(),
        area_label: listing
            .area
            .filter(|area| *area != 0.0)
            .map(|area| format!("{} acres", area)),
        condition: listing.condition.clone().filter(|c| !c.trim().is_empty()),
        description: listing.description.clone(),
        price_label: format!("₹{}", format_number(listing.price)),
        period_label: format!("per {}", listing.period),
        book_enabled: listing.available,
        chat: ChatDialogProps::for_listing(listing, state.chat_open),
        back_route: Route::Browse,
    })
}

/// Format a number with Indian digit grouping (`1,50,000`), keeping up to
/// three fraction digits.
pub fn format_number(value: f64) -> String {
    let thousandths = (value.abs() * 1000.0).round() as u64;
    let whole = thousandths / 1000;
    let fraction = thousandths % 1000;

    let digits = whole.to_string();
    let mut grouped = String::new();
    if digits.len() > 3 {
        let (head, tail) = digits.split_at(digits.len() - 3);
        let offset = head.len() % 2;
        for (i, ch) in head.chars().enumerate() {
            if i > 0 && (i + 2 - offset) % 2 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }
        grouped.push(',');
        grouped.push_str(tail);
    } else {
        grouped.push_str(&digits);
    }

    if fraction > 0 {
        let fraction = format!("{:03}", fraction);
        grouped.push('.');
        grouped.push_str(fraction.trim_end_matches('0'));
    }

    if value < 0.0 && thousandths > 0 {
        grouped.insert(0, '-');
    }
    grouped
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            View::Loading => writeln!(f, "Loading..."),
            View::Unavailable {
                message,
                back_route,
            } => {
                writeln!(f, "Listing unavailable")?;
                writeln!(f, "{}", message)?;
                writeln!(f, "[Back to Browse → {}]", back_route)
            }
            View::Loaded(view) => {
                writeln!(f, "[{}]", view.badge)?;
                writeln!(f, "{}", view.title)?;
                writeln!(f, "   Image: {}", view.image)?;
                writeln!(f, "   Location: {}", view.location)?;
                writeln!(f, "   Owner: {}", view.owner_name)?;
                if let Some(area) = &view.area_label {
                    writeln!(f, "   Area: {}", area)?;
                }
                if let Some(condition) = &view.condition {
                    writeln!(f, "   Condition: {}", condition)?;
                }
                writeln!(f)?;
                writeln!(f, "Description")?;
                writeln!(f, "{}", view.description)?;
                writeln!(f)?;
                writeln!(f, "{} {}", view.price_label, view.period_label)?;
                match &view.chat {
                    Some(chat) if chat.open => writeln!(f, "[Chat with Seller: open]")?,
                    Some(_) => writeln!(f, "[Chat with Seller]")?,
                    None => {}
                }
                if view.book_enabled {
                    writeln!(f, "[Book Now]")
                } else {
                    writeln!(f, "[Book Now (unavailable)]")
                }
            }
        }
    }
}
