//! Project Launcher Frontend Entry Point

mod app;
mod commands;
mod components;
mod config;
mod context;
mod logging;
mod store;

use app::App;
use leptos::prelude::*;
use log::LevelFilter;

fn main() {
    console_error_panic_hook::set_once();
    logging::init(LevelFilter::Info);

    let config = config::load_config();
    logging::init(config.level_filter());

    mount_to_body(move || view! { <App config=config /> });
}
