#![allow(warnings)]
//! Portfolio Frontend Entry Point

mod models;
mod error;
mod catalog;
mod routes;
mod context;
mod components;
mod views;
mod app;
mod markdown;
mod media;

use app::App;
use catalog::Catalog;
use leptos::prelude::*;
use leptos_routes::Router;

fn main() {
    console_error_panic_hook::set_once();

    let catalog = match Catalog::load() {
        Ok(catalog) => catalog,
        Err(e) => fail_startup(&e.to_string()),
    };
    let table = match routes::route_table() {
        Ok(table) => table,
        Err(e) => fail_startup(&e.to_string()),
    };
    web_sys::console::log_1(&format!("[APP] Loaded {} projects", catalog.len()).into());

    let router = Router::new(table);
    mount_to_body(move || view! { <App catalog=catalog router=router /> });
}

fn fail_startup(msg: &str) -> ! {
    web_sys::console::error_1(&format!("[APP] Startup failed: {}", msg).into());
    wasm_bindgen::throw_str(msg)
}
