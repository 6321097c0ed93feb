use dioxus::prelude::*;

mod config;
mod routes;
use routes::Route;

const THEME_BASE: Asset = asset!("/assets/theme-base.css");

fn main() {
    let settings = config::load_config();

    let level = config::log_level(&settings.logging.level);
    if let Err(e) = dioxus::logger::init(level) {
        eprintln!("[logging] logger init failed: {e}");
    }
    config::report_load_problem();

    dioxus::launch(App);
}

/// Detect the client platform from compile-time feature flags.
pub fn client_platform() -> &'static str {
    if cfg!(feature = "web") {
        "web"
    } else if cfg!(feature = "desktop") {
        "desktop"
    } else if cfg!(feature = "mobile") {
        "mobile"
    } else {
        "unknown"
    }
}

#[component]
fn App() -> Element {
    // Form presentation settings for every assignments component below
    use_context_provider(|| config::config().assignments);

    use_hook(|| tracing::info!(platform = client_platform(), "classroom started"));

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_BASE }
        Router::<Route> {}
    }
}
