//! User Manager Frontend Entry Point

mod app;
mod commands;
mod components;
mod config;
mod logging;
mod storage;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init(&config::app_config().log_level);
    mount_to_body(App);
}
