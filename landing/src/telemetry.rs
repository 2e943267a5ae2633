//! `tracing` output for the browser: the fmt subscriber writes through
//! `tracing-web`, which sends each event to the matching `console` method.

use tracing::{Level, Subscriber};
use tracing_web::MakeWebConsoleWriter;
use wasm_bindgen::JsValue;

/// Wasm has no clock or terminal, so timestamps and ANSI colors are off.
fn subscriber(level: Level) -> impl Subscriber + Send + Sync + 'static {
    tracing_subscriber::fmt()
        .with_writer(MakeWebConsoleWriter::new())
        .with_max_level(level)
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .finish()
}

/// Install the global subscriber.
pub fn init(level: Level) {
    if let Err(err) = tracing::subscriber::set_global_default(subscriber(level)) {
        web_sys::console::warn_1(&JsValue::from_str(&format!(
            "tracing subscriber not installed: {err}"
        )));
    }
}
