//! Todo Web Frontend Entry Point
//!
//! Picks the page from the URL path and mounts it.

mod actions;
mod api;
mod app;
mod auth;
mod components;
mod config;
mod context;
mod error;
mod models;
mod session;
mod store;
mod view;

#[cfg(test)]
mod testing;

use app::App;
use components::{LandingPage, LoginPage, RegisterPage};
use leptos::prelude::*;
use wasm_bindgen::prelude::wasm_bindgen;

/// Page served at a given path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Page {
    Landing,
    Login,
    Register,
    App,
}

impl Page {
    fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "/login" => Page::Login,
            "/register" => Page::Register,
            "/app" => Page::App,
            _ => Page::Landing,
        }
    }
}

/// Devtools hook: `wasm_bindgen.dumpLogs()` returns the buffered log tail
#[wasm_bindgen(js_name = dumpLogs)]
pub fn dump_logs() -> String {
    rolling_logger::dump()
}

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = rolling_logger::init(log::LevelFilter::Debug) {
        web_sys::console::error_1(&format!("Logger init failed: {}", e).into());
    }

    let path = web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default();
    let page = Page::from_path(&path);
    log::info!("Mounting {:?} for {}", page, path);

    match page {
        Page::Landing => mount_to_body(LandingPage),
        Page::Login => mount_to_body(LoginPage),
        Page::Register => mount_to_body(RegisterPage),
        Page::App => mount_to_body(App),
    }
}
