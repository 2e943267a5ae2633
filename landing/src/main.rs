// DemoByKishan Landing Page: Leptos 0.8 Edition

use demoland_landing::{App, config, telemetry};

fn main() {
    console_error_panic_hook::set_once();
    telemetry::init(config::LOG_LEVEL);
    tracing::info!(brand = config::BRAND, "mounting landing page");
    leptos::mount::mount_to_body(App);
}
