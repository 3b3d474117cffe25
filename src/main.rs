use listing_detail::clients::{HttpListingApi, SupabaseClient};
use listing_detail::config::Config;
use listing_detail::page::view::format_number;
use listing_detail::page::{
    BookingOutcome, ListingDetailPage, LogNotifier, Navigator, Route, RouteParams, Services,
    SystemClock, View,
};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Navigator for the terminal: there is no next page, so just report it
struct LogNavigator;

impl Navigator for LogNavigator {
    fn navigate(&self, route: Route) {
        info!("➡️  Navigating to {}", route);
    }
}

fn print_page(page: &ListingDetailPage) {
    println!();
    print!("{}", page.view());
    println!();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("🌾 Listing Detail");
    info!("=================");

    let backend = Arc::new(SupabaseClient::new(
        &config.supabase_url,
        &config.supabase_anon_key,
        config.access_token.clone(),
        config.timeout(),
    )?);

    let page = ListingDetailPage::new(Services {
        api: Arc::new(HttpListingApi::new(&config.api_url, config.timeout())?),
        auth: backend.clone(),
        bookings: backend,
        navigator: Arc::new(LogNavigator),
        notifier: Arc::new(LogNotifier),
        clock: Arc::new(SystemClock),
    });

    let mut ids = config.listing_ids.iter();
    let first = ids.next().cloned();
    if let Some(id) = &first {
        info!("Opening {}", Route::Listing(id.clone()));
    }
    page.mount(RouteParams { id: first }).await;
    print_page(&page);

    // Remaining ids behave like in-app navigation between listings
    for id in ids {
        info!("Opening {}", Route::Listing(id.clone()));
        page.set_route(RouteParams {
            id: Some(id.clone()),
        })
        .await;
        print_page(&page);
    }

    if let Some(id) = page.snapshot().route_id() {
        info!("Current listing: {}", id);
    }

    if config.chat {
        page.open_chat();
        match page.chat_dialog() {
            Some(chat) => info!(
                "💬 Chat with {} ({}) about listing {}",
                chat.receiver_name, chat.receiver_id, chat.listing_id
            ),
            None => info!("💬 This listing has no owner to chat with"),
        }
        page.close_chat();
    }

    if let View::Unavailable { .. } = page.view() {
        page.back_to_browse();
        return Ok(());
    }

    if config.book {
        match page.book().await {
            BookingOutcome::Requested(request) => {
                println!(
                    "Booked {} from {} to {} for ₹{}",
                    request.listing_id,
                    request.start_date,
                    request.end_date,
                    format_number(request.total_price)
                );
            }
            BookingOutcome::NoListing => println!("Nothing to book"),
            BookingOutcome::Unavailable => println!("This listing is not available for booking"),
            BookingOutcome::InFlight => println!("A booking is already being submitted"),
            BookingOutcome::SignInRequired | BookingOutcome::Failed => {}
        }
    }

    Ok(())
}
