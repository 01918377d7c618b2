#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, HtmlElement};

use acesso_core::{AccessibilityPrefs, MemoryStore, PrefsStore};
use acesso_web::storage::{LocalStore, STORAGE_KEY};
use acesso_web::{dom, panel};

wasm_bindgen_test_configure!(run_in_browser);

fn doc() -> Document {
    dom::document()
}

/// Drop fixture elements and page side effects left by a previous test.
fn reset_page(ids: &[&str]) {
    let document = doc();
    for id in ids {
        if let Some(el) = document.get_element_by_id(id) {
            el.remove();
        }
    }
    if let Some(body) = document.body() {
        for class in acesso_core::MARKER_CLASSES {
            let _ = body.class_list().remove_1(class);
        }
        let _ = body.style().set_property("filter", "none");
    }
    if let Ok(storage) = dom::local_storage() {
        let _ = storage.remove_item(STORAGE_KEY);
    }
}

fn append_element(tag: &str, id: &str) -> HtmlElement {
    let document = doc();
    let el = document
        .create_element(tag)
        .expect("create element")
        .dyn_into::<HtmlElement>()
        .expect("html element");
    el.set_id(id);
    document
        .body()
        .expect("document body")
        .append_child(&el)
        .expect("append fixture");
    el
}

#[wasm_bindgen_test]
fn menu_toggle_flips_visibility_and_aria_in_lockstep() {
    reset_page(&[panel::MENU_ID, panel::TOGGLE_BUTTON_ID]);
    let menu = append_element("div", panel::MENU_ID);
    let button = append_element("button", panel::TOGGLE_BUTTON_ID);

    panel::init(&doc(), MemoryStore::new());

    // startup seeds the closed state
    assert_eq!(menu.get_attribute("aria-hidden").as_deref(), Some("true"));
    assert_eq!(
        button.get_attribute("aria-expanded").as_deref(),
        Some("false")
    );
    assert_eq!(
        button.get_attribute("aria-controls").as_deref(),
        Some(panel::MENU_ID)
    );

    button.click();
    assert_eq!(menu.style().get_property_value("display").unwrap(), "block");
    assert_eq!(menu.get_attribute("aria-hidden").as_deref(), Some("false"));
    assert_eq!(
        button.get_attribute("aria-expanded").as_deref(),
        Some("true")
    );

    button.click();
    assert_eq!(menu.style().get_property_value("display").unwrap(), "none");
    assert_eq!(menu.get_attribute("aria-hidden").as_deref(), Some("true"));
    assert_eq!(
        button.get_attribute("aria-expanded").as_deref(),
        Some("false")
    );
}

#[wasm_bindgen_test]
fn outside_click_closes_menu_but_inside_click_does_not() {
    reset_page(&[panel::MENU_ID, panel::TOGGLE_BUTTON_ID]);
    let menu = append_element("div", panel::MENU_ID);
    let button = append_element("button", panel::TOGGLE_BUTTON_ID);
    let inner = doc().create_element("span").expect("create span");
    menu.append_child(&inner).expect("append inner");

    panel::init(&doc(), MemoryStore::new());
    button.click();
    assert_eq!(menu.style().get_property_value("display").unwrap(), "block");

    // A click inside the open menu leaves it open.
    inner
        .dyn_ref::<HtmlElement>()
        .expect("inner html element")
        .click();
    assert_eq!(menu.style().get_property_value("display").unwrap(), "block");
    assert_eq!(menu.get_attribute("aria-hidden").as_deref(), Some("false"));

    // A click anywhere else closes it and resets the ARIA state.
    doc().body().expect("body").click();
    assert_eq!(menu.style().get_property_value("display").unwrap(), "none");
    assert_eq!(menu.get_attribute("aria-hidden").as_deref(), Some("true"));
    assert_eq!(
        button.get_attribute("aria-expanded").as_deref(),
        Some("false")
    );
}

#[wasm_bindgen_test]
fn control_clicks_drive_state_indicators_and_body_effects() {
    reset_page(&["acess-night", "acess-contrast", "acess-reset"]);
    let night = append_element("button", "acess-night");
    let contrast = append_element("button", "acess-contrast");
    let reset = append_element("button", "acess-reset");

    panel::init(&doc(), MemoryStore::new());
    let body = doc().body().expect("body");

    // initial sync marks everything inactive
    assert_eq!(night.get_attribute("aria-pressed").as_deref(), Some("false"));
    assert!(!body.class_list().contains("acess-night"));

    night.click();
    assert!(night.class_list().contains("is-active"));
    assert_eq!(night.get_attribute("aria-pressed").as_deref(), Some("true"));
    assert!(body.class_list().contains("acess-night"));
    assert_eq!(body.style().get_property_value("filter").unwrap(), "none");

    contrast.click();
    assert_eq!(
        body.style().get_property_value("filter").unwrap(),
        "contrast(1.35)"
    );

    reset.click();
    assert!(!night.class_list().contains("is-active"));
    assert_eq!(night.get_attribute("aria-pressed").as_deref(), Some("false"));
    assert!(!body.class_list().contains("acess-night"));
    assert_eq!(body.style().get_property_value("filter").unwrap(), "none");
}

#[wasm_bindgen_test]
fn dalton_indicators_are_mutually_exclusive() {
    reset_page(&["dalton-prot", "dalton-deut", "dalton-trit", "dalton-off"]);
    let prot = append_element("button", "dalton-prot");
    let deut = append_element("button", "dalton-deut");
    let trit = append_element("button", "dalton-trit");
    let off = append_element("button", "dalton-off");

    panel::init(&doc(), MemoryStore::new());

    let active = |el: &HtmlElement| {
        el.class_list().contains("is-active")
            && el.get_attribute("aria-pressed").as_deref() == Some("true")
    };

    // default record: only the off control reads active
    assert!(active(&off));
    assert!(!active(&prot) && !active(&deut) && !active(&trit));

    prot.click();
    assert!(active(&prot));
    assert!(!active(&deut) && !active(&trit) && !active(&off));
    assert_eq!(
        doc()
            .body()
            .expect("body")
            .style()
            .get_property_value("filter")
            .unwrap(),
        "hue-rotate(25deg) saturate(1.2)"
    );

    trit.click();
    assert!(active(&trit));
    assert!(!active(&prot) && !active(&deut) && !active(&off));

    off.click();
    assert!(active(&off));
    assert!(!active(&prot) && !active(&deut) && !active(&trit));

    reset_page(&["dalton-prot", "dalton-deut", "dalton-trit", "dalton-off"]);
}

#[wasm_bindgen_test]
fn current_year_is_stamped_on_first_marked_element_only() {
    reset_page(&["year-a", "year-b"]);
    let first = append_element("span", "year-a");
    first
        .set_attribute("data-current-year", "")
        .expect("mark first");
    let second = append_element("span", "year-b");
    second
        .set_attribute("data-current-year", "")
        .expect("mark second");

    dom::stamp_current_year(&doc());

    let year = js_sys::Date::new_0().get_full_year().to_string();
    assert_eq!(first.text_content().as_deref(), Some(year.as_str()));
    assert_eq!(second.text_content().as_deref(), Some(""));

    reset_page(&["year-a", "year-b"]);
}

#[wasm_bindgen_test]
fn persisted_record_is_applied_at_startup() {
    reset_page(&[]);
    let store = MemoryStore::with_payload(r#"{"night":true,"fontScale":2}"#);

    panel::init(&doc(), store);

    let body = doc().body().expect("body");
    assert!(body.class_list().contains("acess-night"));
    let root = doc()
        .document_element()
        .expect("document element")
        .dyn_into::<HtmlElement>()
        .expect("html root");
    assert_eq!(root.style().get_property_value("font-size").unwrap(), "120%");

    // restore the neutral font size for the rest of the suite
    let _ = root.style().set_property("font-size", "100%");
    reset_page(&[]);
}

#[wasm_bindgen_test]
fn local_store_round_trips_and_discards_corrupt_payloads() {
    reset_page(&[]);
    let store = LocalStore;
    let mut prefs = AccessibilityPrefs::default();
    prefs.contrast = true;
    prefs.font_scale = -1;

    store.save(&prefs).expect("save");
    assert_eq!(store.load().as_ref(), Some(&prefs));

    let storage = dom::local_storage().expect("localStorage");
    storage
        .set_item(STORAGE_KEY, "{broken")
        .expect("seed corrupt payload");
    assert!(store.load().is_none());
    let _ = storage.remove_item(STORAGE_KEY);
}
