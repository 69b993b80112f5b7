//! Task Board Frontend Entry Point

mod api;
mod app;
mod board;
mod components;
mod config;
mod context;
mod dialog;
mod logger;
mod models;
mod session;
mod store;
mod view;

#[cfg(test)]
mod testing;

use app::App;
use config::ClientConfig;
use leptos::prelude::*;
use log::LevelFilter;

fn main() {
    console_error_panic_hook::set_once();

    let (config, problem) = match ClientConfig::from_window() {
        Ok(config) => (config, None),
        Err(err) => (ClientConfig::default(), Some(err)),
    };
    logger::init(config.level_filter().unwrap_or(LevelFilter::Info));
    if let Some(err) = problem {
        log::warn!("[APP] {}; using default config", err);
    }

    mount_to_body(move || view! { <App config=config /> });
}
