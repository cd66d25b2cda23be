//! Focus Dashboard Frontend Entry Point

mod app;
mod clock;
mod components;
mod config;
mod error;
mod storage;
mod tasks;

use config::DashboardConfig;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("no document; dashboard not started");
        return;
    };
    let config = DashboardConfig::from_page(&document);
    app::start(&document, &config);
}
