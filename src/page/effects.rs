use chrono::{DateTime, Utc};
use std::fmt;
use tracing::{error, info};

/// Routes the detail page can send the user to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Browse,
    Bookings,
    Listing(String),
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Browse => "/browse".to_string(),
            Route::Bookings => "/bookings".to_string(),
            Route::Listing(id) => format!("/listing/{}", id),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}

/// Transient toast messages
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Notifier that writes toasts to the log
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn success(&self, message: &str) {
        info!("✅ {}", message);
    }

    fn error(&self, message: &str) {
        error!("❌ {}", message);
    }
}
