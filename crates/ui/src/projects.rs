//! Project list: catalog fetch, group sections and cards
//!
//! Cards are inserted as soon as the catalog arrives. Each card then loads
//! its own description in a separate task, so a slow or missing `info.txt`
//! only ever affects that card.

use std::cell::Cell;
use std::rc::Rc;

use folio_core::{
    catalog_from_fetch, ActionLink, CardView, Catalog, CatalogError, Description, GroupToggle,
    SectionView,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, HtmlElement};

use crate::config::SiteConfig;
use crate::dom::{create_with_class, create_with_text};
use crate::network::{describe_js_error, fetch_text};

/// Fetch the catalog and fill the container, or leave an error message in it
pub async fn load_and_render(doc: &Document, config: &SiteConfig) {
    let Some(container) = doc.get_element_by_id(&config.container_id) else {
        tracing::debug!(id = %config.container_id, "no project container on this page");
        return;
    };

    let result = match load_catalog(&config.catalog_url).await {
        Ok(catalog) => {
            let sections = config.layout.sections(&catalog);
            render_sections(doc, &container, &sections)
                .map_err(|e| CatalogError::Render(describe_js_error(&e)))
        }
        Err(err) => Err(err),
    };

    if let Err(err) = result {
        match &err {
            CatalogError::Status(_) | CatalogError::InvalidShape => {
                tracing::warn!(url = %config.catalog_url, error = %err, "project catalog rejected");
            }
            _ => tracing::error!(url = %config.catalog_url, error = %err, "project catalog failed"),
        }
        container.set_text_content(Some(err.user_message()));
    }
}

async fn load_catalog(url: &str) -> Result<Catalog, CatalogError> {
    let catalog = catalog_from_fetch(fetch_text(url).await)?;
    tracing::info!(
        groups = catalog.groups.len(),
        projects = catalog.project_count(),
        "project catalog loaded"
    );
    Ok(catalog)
}

fn render_sections(
    doc: &Document,
    container: &Element,
    sections: &[SectionView],
) -> Result<(), JsValue> {
    for section in sections {
        container.append_child(build_section(doc, section)?.as_ref())?;
    }
    Ok(())
}

fn build_section(doc: &Document, view: &SectionView) -> Result<Element, JsValue> {
    let section = create_with_class(doc, "section", "project-group")?;
    let state = GroupToggle::default();

    // Header
    let header = create_with_class(doc, "button", "project-group__header")?;
    header.set_attribute("type", "button")?;
    header.set_attribute("aria-expanded", state.aria_expanded())?;
    let title = create_with_text(doc, "span", "project-group__title", &view.title)?;
    let icon = create_with_text(doc, "span", "project-group__icon", state.glyph())?;
    header.append_child(&title)?;
    header.append_child(&icon)?;

    // Body
    let body: HtmlElement = create_with_class(doc, "div", "project-group__body")?.dyn_into()?;
    if let Some(description) = &view.description {
        let desc = create_with_text(doc, "p", "project-group__description", description)?;
        body.append_child(&desc)?;
    }
    let list = create_with_class(doc, "div", "project-list")?;
    for card in &view.cards {
        list.append_child(build_card(doc, card)?.as_ref())?;
    }
    body.append_child(&list)?;

    bind_group_toggle(&header, icon, body.clone(), state)?;

    section.append_child(&header)?;
    section.append_child(&body)?;
    Ok(section)
}

fn bind_group_toggle(
    header: &Element,
    icon: Element,
    body: HtmlElement,
    initial: GroupToggle,
) -> Result<(), JsValue> {
    let state = Rc::new(Cell::new(initial));
    let header_clone = header.clone();
    let on_click = Closure::wrap(Box::new(move || {
        let next = state.get().toggled();
        state.set(next);
        let _ = body.style().set_property("display", next.display());
        icon.set_text_content(Some(next.glyph()));
        let _ = header_clone.set_attribute("aria-expanded", next.aria_expanded());
    }) as Box<dyn FnMut()>);
    header.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();
    Ok(())
}

fn build_card(doc: &Document, view: &CardView) -> Result<Element, JsValue> {
    let card = create_with_class(doc, "article", "project-card")?;

    if let Some(thumb) = &view.thumbnail {
        let img = create_with_class(doc, "img", "project-card__thumb")?;
        img.set_attribute("src", &thumb.src)?;
        img.set_attribute("alt", &thumb.alt)?;
        card.append_child(&img)?;
    }

    let name = create_with_text(doc, "h3", "project-card__name", &view.name)?;
    let meta = create_with_text(doc, "p", "project-card__meta", &view.meta)?;
    let desc = create_with_text(doc, "p", "project-card__desc", Description::Loading.text())?;
    card.append_child(&name)?;
    card.append_child(&meta)?;
    card.append_child(&desc)?;

    if !view.tags.is_empty() {
        let tags = create_with_class(doc, "div", "project-card__tags")?;
        for tag in &view.tags {
            tags.append_child(create_with_text(doc, "span", "project-tag", tag)?.as_ref())?;
        }
        card.append_child(&tags)?;
    }

    let links = create_with_class(doc, "div", "project-card__link-group")?;
    if let Some(action) = &view.action {
        links.append_child(build_link(doc, action)?.as_ref())?;
    }
    card.append_child(&links)?;

    spawn_local(load_description(desc, view.info_url.clone()));

    Ok(card)
}

fn build_link(doc: &Document, action: &ActionLink) -> Result<Element, JsValue> {
    let link = create_with_text(doc, "a", "project-card__link", action.label)?;
    link.set_attribute("href", &action.href)?;
    if action.opens_new_tab() {
        link.set_attribute("target", "_blank")?;
        link.set_attribute("rel", folio_core::card::NEW_TAB_REL)?;
    }
    if action.forces_download() {
        link.set_attribute("download", "")?;
    }
    Ok(link)
}

async fn load_description(target: Element, url: String) {
    let fetched = fetch_text(&url).await;
    if let Err(err) = &fetched {
        tracing::debug!(url = %url, error = %err, "description unavailable");
    }
    target.set_text_content(Some(Description::from_fetch(fetched).text()));
}
