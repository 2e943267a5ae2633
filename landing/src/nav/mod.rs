//! Section navigation: which part of the page is in view, and how to get
//! to another part.
//!
//! - `registry` - the fixed list of page sections and their region handles
//! - `state` - the active section and menu overlay cells
//! - `tracker` - center-band observation feeding the active section
//! - `navigator` - smooth scrolling to a section
//!
//! The browser is reached only through the [`Viewport`] and
//! [`RegionHandle`] traits; `dom` provides the real implementations.

mod context;
mod dom;
mod error;
mod navigator;
mod registry;
mod state;
mod tracker;
mod viewport;

#[cfg(test)]
pub(crate) mod testing;

pub use context::{Navigation, track_sections, use_navigation};
pub use dom::SectionRef;
pub use error::NavError;
pub use navigator::ScrollNavigator;
pub use registry::{RegionHandle, Section, SectionId, SectionRegistry, register};
pub use state::{ActiveSection, BandCrossing, MenuOverlay};
pub use tracker::{TrackerSubscription, ViewportTracker};
pub use viewport::{CenterBandObserver, Viewport};
