use std::cell::RefCell;
use std::rc::Rc;

use folio_core::theme::DARK_CLASS;
use folio_core::{ThemeController, ThemePreference, ThemeStore};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, Document, Element, Storage};

use crate::network::describe_js_error;

/// Theme flag kept in `localStorage`
pub struct LocalStorageStore {
    key: String,
}

impl LocalStorageStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok().flatten()
}

impl ThemeStore for LocalStorageStore {
    fn load(&self) -> Option<String> {
        local_storage()?.get_item(&self.key).ok().flatten()
    }

    fn save(&mut self, value: &str) {
        let Some(storage) = local_storage() else {
            tracing::warn!(key = %self.key, "localStorage unavailable, theme not saved");
            return;
        };
        if let Err(e) = storage.set_item(&self.key, value) {
            tracing::warn!(key = %self.key, error = %describe_js_error(&e), "failed to save theme");
        }
    }
}

/// Apply the stored theme and wire the toggle control, if present
pub fn init_theme(doc: &Document, toggle_id: &str, storage_key: &str) -> Result<(), JsValue> {
    let toggle = doc.get_element_by_id(toggle_id);
    let mut controller = ThemeController::new(LocalStorageStore::new(storage_key));
    paint(doc, toggle.as_ref(), controller.apply_stored());

    let Some(toggle) = toggle else {
        return Ok(());
    };

    let controller = Rc::new(RefCell::new(controller));
    let doc_clone = doc.clone();
    let toggle_clone = toggle.clone();
    let on_click = Closure::wrap(Box::new(move || {
        let theme = controller.borrow_mut().toggle();
        paint(&doc_clone, Some(&toggle_clone), theme);
    }) as Box<dyn FnMut()>);
    toggle.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();

    Ok(())
}

/// Sync `<body>` class and toggle glyph with `theme`
fn paint(doc: &Document, toggle: Option<&Element>, theme: ThemePreference) {
    if let Some(body) = doc.body() {
        let classes = body.class_list();
        let result = if theme.is_dark() {
            classes.add_1(DARK_CLASS)
        } else {
            classes.remove_1(DARK_CLASS)
        };
        if let Err(e) = result {
            tracing::warn!(error = %describe_js_error(&e), "failed to update body class");
        }
    }
    if let Some(toggle) = toggle {
        toggle.set_text_content(Some(theme.glyph()));
    }
}
