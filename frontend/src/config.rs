use log::Level;

pub const BRAND: &str = "Scalix.";
pub const COMPANY: &str = "Scalix Studios";

pub const PHONE_HREF: &str = "tel:01234567890";
pub const PHONE_DISPLAY: &str = "01234 567 890";

/// Vertical offset in pixels past which the header switches to its solid style.
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

// Negative root margins, i.e. how far inside the viewport an element must be
// before its entry animation fires.
pub const SERVICES_REVEAL_MARGIN_PX: u32 = 80;
pub const RESULTS_REVEAL_MARGIN_PX: u32 = 60;
pub const CONTACT_REVEAL_MARGIN_PX: u32 = 60;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
