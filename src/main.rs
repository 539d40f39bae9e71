mod app;
mod components;
mod config;
mod core;
mod models;
mod utils;

use app::App;
use leptos::prelude::*;
use log::{Level, info};
use wasm_bindgen::JsCast;

fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) {
        Level::Debug
    } else {
        Level::Info
    };
    if console_log::init_with_level(level).is_err() {
        web_sys::console::warn_1(&"logger already initialized".into());
    }
    info!("starting {} v{}", config::BRAND_PRIMARY, config::APP_VERSION);

    let root = document()
        .get_element_by_id("app")
        .expect("Failed to find #app element")
        .unchecked_into::<web_sys::HtmlElement>();

    mount_to(root, App).forget();
}
