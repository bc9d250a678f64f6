mod app;
mod auth_bridge;
mod core;
mod features;
mod pages;

use leptos::prelude::*;

use crate::app::App;
use crate::core::config::AppConfig;

fn main() {
    console_error_panic_hook::set_once();

    let (config, problem) = AppConfig::load();
    init_logging(&config);
    if let Some(e) = problem {
        log::warn!("Falling back to default configuration: {}", e);
    }

    mount_to_body(move || view! { <App config=config /> });
}

fn init_logging(config: &AppConfig) {
    let filter = config.level_filter().unwrap_or(log::LevelFilter::Info);
    if let Some(level) = filter.to_level() {
        if let Err(e) = console_log::init_with_level(level) {
            web_sys::console::error_1(&format!("Failed to initialise logging: {}", e).into());
        }
    }
    log::set_max_level(filter);
}
