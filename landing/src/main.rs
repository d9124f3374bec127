// SAINI COLLECTION landing page, Leptos 0.8 CSR

use leptos::prelude::*;
use saini_landing::{App, config::SiteConfig, logging};
use wasm_bindgen::JsValue;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_err) = SiteConfig::load();
    if let Err(e) = logging::init(&config.logging.level) {
        web_sys::console::error_1(&JsValue::from_str(&e.to_string()));
    }
    if let Some(e) = config_err {
        tracing::warn!(error = %e, "falling back to default site config");
    }

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "mounting landing page");
    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}
