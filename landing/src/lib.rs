//! # demoland-landing
//!
//! Single-page product landing site built with Leptos 0.8 (CSR).
//!
//! - [`nav`] - section registry, active-section tracking and scroll navigation
//! - [`sections`] - the page's presentational sections
//! - [`app`] - the page root wiring the two together
//! - [`config`] / [`telemetry`] - site settings and browser logging

pub mod app;
pub mod config;
pub mod nav;
pub mod sections;
pub mod telemetry;

pub use app::App;
