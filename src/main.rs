//! Glas Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod guard;
mod markdown;
mod models;
mod pages;
mod query;
mod router;
mod session;
mod store;
mod validation;

#[cfg(test)]
mod test_support;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_build_env();
    if let Err(err) = rolling_logger::init(config.log_capacity, config.log_level) {
        web_sys::console::warn_1(&format!("logger already initialised: {err}").into());
    }
    tracing::info!(api = %config.api_base_url, "starting frontend");

    mount_to_body(move || view! { <App config=config.clone() /> });
}
