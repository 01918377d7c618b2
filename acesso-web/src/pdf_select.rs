//! PDF selector binding: a `<select>` drives a viewer frame and an
//! optional download link.
//!
//! Configuration rides on the select element itself: `data-pdf-viewer`
//! (CSS selector for the viewer target), `data-pdf-link` (CSS selector
//! for a download link, optional), `data-pdf-base` (path prefix, empty
//! default). A selector whose viewer cannot be resolved is skipped
//! entirely; nothing here validates that the computed path exists.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, HtmlElement, HtmlSelectElement};

use acesso_core::pdf::document_path;

/// Fixed id of the ancestor container shown and hidden with the viewer.
pub const VIEWER_CONTAINER_ID: &str = "pdfViewerContainer";

fn set_container_visible(viewer: &Element, visible: bool) {
    let selector = format!("#{VIEWER_CONTAINER_ID}");
    let Ok(Some(container)) = viewer.closest(&selector) else {
        return;
    };
    if let Some(el) = container.dyn_ref::<HtmlElement>() {
        let _ = el
            .style()
            .set_property("display", if visible { "block" } else { "none" });
    }
}

/// Map the current selection onto the viewer and link. Pure DOM
/// attribute writes; re-runnable at any time.
fn update_viewer(select: &HtmlSelectElement, viewer: &Element, link: Option<&Element>, base: &str) {
    let value = select.value();
    if value.is_empty() {
        set_container_visible(viewer, false);
        let _ = viewer.set_attribute("src", "");
        return;
    }
    let path = document_path(base, &value);
    let _ = viewer.set_attribute("src", &path);
    if let Some(link) = link {
        let _ = link.set_attribute("href", &path);
    }
    set_container_visible(viewer, true);
}

fn bind_selector(document: &Document, select: &HtmlSelectElement) {
    let viewer = select
        .get_attribute("data-pdf-viewer")
        .and_then(|sel| document.query_selector(&sel).ok().flatten());
    let Some(viewer) = viewer else {
        return;
    };
    let link = select
        .get_attribute("data-pdf-link")
        .and_then(|sel| document.query_selector(&sel).ok().flatten());
    let base = select.get_attribute("data-pdf-base").unwrap_or_default();

    let callback = {
        let select = select.clone();
        let viewer = viewer.clone();
        let link = link.clone();
        let base = base.clone();
        Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| {
            update_viewer(&select, &viewer, link.as_ref(), &base);
        })
    };
    let _ = select.add_event_listener_with_callback("change", callback.as_ref().unchecked_ref());
    callback.forget();

    // Reflect the initial selection eagerly when there is one.
    if select.length() > 0 {
        update_viewer(select, &viewer, link.as_ref(), &base);
    }
}

/// Bind every `[data-pdf-select]` element on the page.
pub fn init(document: &Document) {
    let Ok(nodes) = document.query_selector_all("[data-pdf-select]") else {
        return;
    };
    for index in 0..nodes.length() {
        if let Some(select) = nodes
            .item(index)
            .and_then(|node| node.dyn_into::<HtmlSelectElement>().ok())
        {
            bind_selector(document, &select);
        }
    }
}
