use wasm_bindgen::prelude::*;
use web_sys::{window, Document, Element};

/// Get document helper
pub fn get_document() -> Option<Document> {
    window().and_then(|w| w.document())
}

/// Create `<tag class="class">`
pub fn create_with_class(doc: &Document, tag: &str, class: &str) -> Result<Element, JsValue> {
    let el = doc.create_element(tag)?;
    el.set_class_name(class);
    Ok(el)
}

/// Create `<tag class="class">text</tag>`
pub fn create_with_text(
    doc: &Document,
    tag: &str,
    class: &str,
    text: &str,
) -> Result<Element, JsValue> {
    let el = create_with_class(doc, tag, class)?;
    el.set_text_content(Some(text));
    Ok(el)
}

/// Write the current year into the footer element, if the page has one
pub fn stamp_year(doc: &Document, year_id: &str) {
    if let Some(el) = doc.get_element_by_id(year_id) {
        let year = js_sys::Date::new_0().get_full_year();
        el.set_text_content(Some(&year.to_string()));
    }
}
