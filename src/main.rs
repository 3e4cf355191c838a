//! Admin Post Summary Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod dates;
mod dialogs;
mod error;
mod logger;
mod models;
mod routes;
mod sanitize;
mod services;
mod store;
mod workflow;

use app::App;
use config::AdminConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = AdminConfig::load();
    if let Err(e) = logger::init(config.log_level) {
        web_sys::console::error_1(&format!("Logger init failed: {}", e).into());
    }
    if let Some(e) = config_error {
        log::warn!("{}", e);
    }

    mount_to_body(move || view! { <App config=config.clone() /> });
}
