use std::rc::Rc;

mod api;
mod app;
mod browser_storage;
mod components;
mod config;
mod notifications;
mod pages;
mod progress;
mod router;
mod session;

use app::{App, AppProps};

fn main() {
    wasm_logger::init(wasm_logger::Config::new(config::log_level()));
    match router::navigation_guard() {
        Ok(guard) => {
            log::info!("Starting movie review SPA, api={}", config::API_BASE_URL);
            yew::Renderer::<App>::with_props(AppProps {
                guard: Rc::new(guard),
            })
            .render();
        }
        Err(error) => log::error!("Invalid route configuration, refusing to start: {error}"),
    }
}
