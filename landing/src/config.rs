// Site-wide settings (single source of truth)

use std::time::Duration;

use tracing::Level;

pub const BRAND: &str = "DemoByKishan";
pub const COPYRIGHT_HOLDER: &str = "Kishan";

/// Shrinks the observer's root to the horizontal line at 50% viewport
/// height, so a section counts as in view the moment it crosses the middle.
pub const CENTER_BAND_MARGIN: &str = "-50% 0px -50% 0px";
pub const CENTER_BAND_THRESHOLD: f64 = 0.0;

/// Simulated round trip of the contact form.
pub const SUBMIT_DELAY: Duration = Duration::from_millis(2000);
/// How long a success or error message stays up.
pub const STATUS_RESET: Duration = Duration::from_millis(5000);

pub const LOG_LEVEL: Level = if cfg!(debug_assertions) {
    Level::DEBUG
} else {
    Level::INFO
};
