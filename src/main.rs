//! Todo Frontend Entry Point

mod app;
mod commands;
mod components;
mod config;
mod context;
mod filter;
mod generation;
mod loading;
mod logging;
mod models;
mod preferences;
mod store;

use app::App;
use config::UiConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = UiConfig::default();
    logging::init(config.log_level);
    log::info!("[APP] starting todo-ui");

    mount_to_body(move || view! { <App config=config /> });
}
