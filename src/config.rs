use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose navigation traces when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub const ROUTER_BASENAME: &str = "/faircut-demo";

// How long a programmatic section scroll holds the navigation lock
pub const SETTLE_DELAY_MS: u32 = 800;

pub const DEFAULT_VISIBILITY_THRESHOLD: f64 = 0.5;
pub const STRATEGY_VISIBILITY_THRESHOLD: f64 = 0.6;
pub const STRATEGY_OBSERVER_DELAY_MS: u32 = 500;
pub const SCROLL_RESET_RETRY_MS: u32 = 100;

pub const CONTACT_EMAIL: &str = "hello@faircut.com";
pub const ACCESS_REQUEST_SUBJECT: &str = "Early Access Request";

pub fn access_request_href() -> String {
    format!(
        "mailto:{}?subject={}",
        CONTACT_EMAIL,
        urlencoding::encode(ACCESS_REQUEST_SUBJECT)
    )
}
