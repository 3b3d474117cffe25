use clap::Parser;
use std::time::Duration;

/// Open a marketplace listing, optionally book it or start a chat with the owner
#[derive(Debug, Clone, Parser)]
#[command(name = "listing-detail", version)]
pub struct Config {
    /// Listing identifiers from the route (`/listing/{id}`). The page is
    /// mounted with the first and navigated through the rest in order.
    pub listing_ids: Vec<String>,

    /// Request a one-day booking once the listing is loaded
    #[arg(long)]
    pub book: bool,

    /// Open the chat dialog with the listing owner
    #[arg(long)]
    pub chat: bool,

    /// Base URL of the listing API
    #[arg(long, env = "LISTING_API_URL", default_value = "http://localhost:8000/api/v1")]
    pub api_url: String,

    /// Project URL of the auth/database service
    #[arg(long, env = "SUPABASE_URL", default_value = "http://localhost:54321")]
    pub supabase_url: String,

    #[arg(long, env = "SUPABASE_ANON_KEY", default_value = "", hide_env_values = true)]
    pub supabase_anon_key: String,

    /// Access token of the signed-in user; without it the session is signed out
    #[arg(long, env = "SUPABASE_ACCESS_TOKEN", hide_env_values = true)]
    pub access_token: Option<String>,

    /// Request timeout for both services, in seconds
    #[arg(long, env = "HTTP_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout_secs: u64,
}

impl Config {
    /// Parse from the command line, after loading `.env` into the environment
    pub fn load() -> Self {
        dotenv::dotenv().ok();
        Self::parse()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
