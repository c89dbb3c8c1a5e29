//! Browser side of the folio portfolio page
//!
//! Loaded as a WASM module by the static site. Fills the footer year,
//! restores the light/dark theme, and renders the project catalog into
//! `#projects-container`.

mod config;
mod dom;
mod network;
mod projects;
mod theme;

pub use config::SiteConfig;

use std::fmt::Display;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::Document;

#[wasm_bindgen(start)]
pub fn main_js() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    let doc = dom::get_document().ok_or("No document")?;
    let ready_doc = doc.clone();
    when_ready(&ready_doc, move || start(doc))
}

fn start(doc: Document) {
    let config = SiteConfig::from_document(&doc);
    dom::stamp_year(&doc, &config.year_id);

    let project_doc = doc.clone();
    let project_config = config.clone();
    start_components(
        || {
            theme::init_theme(&doc, &config.theme_toggle_id, &config.theme_key)
                .map_err(|e| network::describe_js_error(&e))
        },
        move || {
            spawn_local(async move {
                projects::load_and_render(&project_doc, &project_config).await;
            });
        },
    );
}

/// Theme setup failures are logged; the project list starts regardless
fn start_components<E, T, P>(init_theme: T, render_projects: P)
where
    E: Display,
    T: FnOnce() -> Result<(), E>,
    P: FnOnce(),
{
    if let Err(err) = init_theme() {
        tracing::error!(error = %err, "theme setup failed");
    }
    render_projects();
}

/// Run `f` now if the DOM is parsed, otherwise on `DOMContentLoaded`
fn when_ready<F>(doc: &Document, f: F) -> Result<(), JsValue>
where
    F: FnOnce() + 'static,
{
    if doc.ready_state() != "loading" {
        f();
        return Ok(());
    }

    let callback = Closure::once(Box::new(f) as Box<dyn FnOnce()>);
    doc.add_event_listener_with_callback("DOMContentLoaded", callback.as_ref().unchecked_ref())?;
    callback.forget();
    Ok(())
}
