use log::Level;

/// Scroll offset (px) past which the nav bar switches to its compact style.
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

/// Height kept clear above a section when scrolling to it, so the fixed nav
/// bar does not cover the heading.
pub const HEADER_CLEARANCE_PX: f64 = 80.0;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose logging when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

