#![allow(warnings)]
//! CampusFind Frontend Entry Point

mod app;
mod board;
mod components;
mod config;
mod context;
mod models;
mod pages;
mod query;
mod report;
mod seed;
mod store;

use app::App;
use config::BoardConfig;
use leptos::prelude::*;
use log::LevelFilter;

/// Records kept in the in-memory log buffer
const LOG_CAPACITY: usize = 512;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = ring_logger::init(LOG_CAPACITY, LevelFilter::Info) {
        web_sys::console::error_1(&format!("logger init failed: {}", e).into());
    }

    let config = BoardConfig::load();
    log::set_max_level(config.log_level());
    log::info!("starting CampusFind ({:?})", config);

    mount_to_body(move || view! { <App config=config /> });
}
