//! List Example Frontend Entry Point

mod models;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    web_sys::console::log_1(&format!("[APP] Mounting with {} items", models::ITEMS.len()).into());
    mount_to_body(App);
}
