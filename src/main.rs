#![allow(warnings)]
//! TodoMatic Frontend Entry Point

mod models;
mod tasks;
mod lagged;
mod row_state;
mod config;
mod store;
mod components;
mod app;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::bundled().unwrap_or_else(|err| {
        let _ = console_logger::init(log::LevelFilter::Info);
        log::error!("[APP] {}; using defaults", err);
        AppConfig::default()
    });
    if let Err(err) = console_logger::init(config.log_level) {
        web_sys::console::error_1(&format!("[APP] logger init failed: {}", err).into());
    }

    let AppConfig { title, tasks, .. } = config;
    mount_to_body(move || view! { <App tasks=tasks title=title /> });
}
