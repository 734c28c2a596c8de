/// Tab Scratchpad - browser extension popup for collecting and reopening tab URLs
/// Built with Rust + WASM + Yew

pub mod config;
pub mod controller;
pub mod error;
pub mod host;
pub mod scratchpad;
pub mod tab_data;
pub mod ui;

use std::rc::Rc;

use wasm_bindgen::prelude::*;

use crate::config::PopupConfig;
use crate::controller::PopupController;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(config::log_level()));
}

// Re-export the URL extraction for JavaScript access
#[wasm_bindgen]
pub fn extract_urls(scratchpad: &str) -> Vec<String> {
    scratchpad::extract_urls(scratchpad)
}

// Start the Yew app for the popup
#[wasm_bindgen]
pub fn start_popup() -> Result<(), JsValue> {
    let config = PopupConfig::from_user_agent(&host::userAgent());
    match config.host {
        Some(kind) => log::info!("Starting popup on {:?}", kind),
        None => log::error!("Unsupported host, tab operations will fail"),
    }

    let root = ui::mount_point()?;
    let controller = Rc::new(PopupController::new(host::select(config.host)));

    yew::Renderer::<ui::popup::App>::with_root_and_props(root, ui::popup::AppProps { controller })
        .render();

    Ok(())
}
