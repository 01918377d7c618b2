//! Accessibility panel: menu toggle, control wiring, and the DOM side of
//! the preference state machine.
//!
//! All mutation flows through [`Panel::dispatch`]: merge the action into
//! the record, persist, re-apply visual effects, re-sync the control
//! indicators. Every DOM collaborator is optional; a page that carries
//! only some of the controls still works, control by control.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, HtmlElement, Node};

use acesso_core::{AccessibilityPrefs, Action, Dalton, PrefsStore, effects, load_or_default};

use crate::dom;

/// Fixed id of the accessibility menu panel.
pub const MENU_ID: &str = "acessibilidadeMenu";
/// Fixed id of the button that opens and closes the menu.
pub const TOGGLE_BUTTON_ID: &str = "acess-open-btn";

/// Page controls and the action each one dispatches.
const CONTROL_ACTIONS: [(&str, Action); 15] = [
    ("acess-contrast", Action::ToggleContrast),
    ("acess-night", Action::ToggleNight),
    ("acess-grayscale", Action::ToggleGrayscale),
    ("font-dec", Action::FontDecrease),
    ("font-reset", Action::FontReset),
    ("font-inc", Action::FontIncrease),
    ("dalton-prot", Action::SetDalton(Dalton::Prot)),
    ("dalton-deut", Action::SetDalton(Dalton::Deut)),
    ("dalton-trit", Action::SetDalton(Dalton::Trit)),
    ("dalton-off", Action::SetDalton(Dalton::None)),
    ("acess-dislexia", Action::ToggleDyslexia),
    ("acess-reading", Action::ToggleReading),
    ("acess-links", Action::ToggleLinks),
    ("reduce-motion", Action::ToggleReduceMotion),
    ("acess-reset", Action::Reset),
];

/// The single owned panel context: the in-memory record plus its store.
pub struct Panel<S: PrefsStore> {
    prefs: AccessibilityPrefs,
    store: S,
}

impl<S: PrefsStore> Panel<S> {
    /// Build the panel from whatever the store holds, default-filling on
    /// missing or unparsable persisted data.
    #[must_use]
    pub fn new(store: S) -> Self {
        let prefs = load_or_default(&store);
        Self { prefs, store }
    }

    #[must_use]
    pub fn prefs(&self) -> &AccessibilityPrefs {
        &self.prefs
    }

    /// Apply one action: merge, persist, re-apply effects, re-sync
    /// indicators. A failed write is logged and dropped; the in-memory
    /// state still takes effect for the session.
    pub fn dispatch(&mut self, action: Action) {
        self.prefs.apply(action);
        if let Err(err) = self.store.save(&self.prefs) {
            log::debug!("preference save failed: {err}");
        }
        self.refresh();
    }

    /// Re-run all visual side effects and indicator sync for the current
    /// record. Idempotent; safe to call unconditionally.
    pub fn refresh(&self) {
        let document = dom::document();
        apply_effects(&document, &self.prefs);
        sync_controls(&document, &self.prefs);
    }
}

/// Apply the record to the page: marker classes and filter on the body,
/// font-size on the document root.
pub fn apply_effects(document: &Document, prefs: &AccessibilityPrefs) {
    let Some(body) = document.body() else {
        return;
    };
    for (class, enabled) in effects::marker_classes(prefs) {
        let _ = body.class_list().toggle_with_force(class, enabled);
    }
    let _ = body
        .style()
        .set_property("filter", &effects::filter_chain(prefs));

    if let Some(root) = document
        .document_element()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    {
        let _ = root
            .style()
            .set_property("font-size", &format!("{}%", effects::font_size_pct(prefs)));
    }
}

/// Whether a control's indicator should read active for the record.
/// Font-step and reset buttons are momentary and carry no indicator.
fn indicator_state(prefs: &AccessibilityPrefs, action: Action) -> Option<bool> {
    match action {
        Action::ToggleContrast => Some(prefs.contrast),
        Action::ToggleNight => Some(prefs.night),
        Action::ToggleGrayscale => Some(prefs.grayscale),
        Action::ToggleDyslexia => Some(prefs.dyslexia),
        Action::ToggleReading => Some(prefs.reading),
        Action::ToggleLinks => Some(prefs.links),
        Action::ToggleReduceMotion => Some(prefs.reduce_motion),
        Action::SetDalton(mode) => Some(prefs.dalton == mode),
        Action::FontDecrease | Action::FontIncrease | Action::FontReset | Action::Reset => None,
    }
}

/// Bring every present control's `is-active` class and `aria-pressed`
/// attribute in line with the record.
pub fn sync_controls(document: &Document, prefs: &AccessibilityPrefs) {
    for (id, action) in CONTROL_ACTIONS {
        let Some(enabled) = indicator_state(prefs, action) else {
            continue;
        };
        let Some(control) = document.get_element_by_id(id) else {
            continue;
        };
        let _ = control.class_list().toggle_with_force("is-active", enabled);
        let _ = control.set_attribute("aria-pressed", if enabled { "true" } else { "false" });
    }
}

fn menu_is_open(menu: &Element) -> bool {
    menu.dyn_ref::<HtmlElement>().is_some_and(|el| {
        el.style()
            .get_property_value("display")
            .ok()
            .is_some_and(|display| display == "block")
    })
}

/// Move the menu into the open or closed state, keeping visibility and
/// the ARIA expanded/hidden attributes in lockstep.
pub fn set_menu_open(document: &Document, open: bool) {
    let Some(menu) = document.get_element_by_id(MENU_ID) else {
        return;
    };
    if let Some(el) = menu.dyn_ref::<HtmlElement>() {
        let _ = el
            .style()
            .set_property("display", if open { "block" } else { "none" });
    }
    let _ = menu.set_attribute("aria-hidden", if open { "false" } else { "true" });
    if let Some(button) = document.get_element_by_id(TOGGLE_BUTTON_ID) {
        let _ = button.set_attribute("aria-expanded", if open { "true" } else { "false" });
    }
}

/// Seed the closed ARIA state the menu starts in.
fn seed_menu_aria(document: &Document) {
    if let Some(menu) = document.get_element_by_id(MENU_ID) {
        let _ = menu.set_attribute("aria-hidden", "true");
    }
    if let Some(button) = document.get_element_by_id(TOGGLE_BUTTON_ID) {
        let _ = button.set_attribute("aria-expanded", "false");
        let _ = button.set_attribute("aria-controls", MENU_ID);
    }
}

fn bind_menu_toggle(document: &Document) {
    let Some(button) = document.get_element_by_id(TOGGLE_BUTTON_ID) else {
        return;
    };
    let callback = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
        event.stop_propagation();
        let document = dom::document();
        let Some(menu) = document.get_element_by_id(MENU_ID) else {
            return;
        };
        let open = menu_is_open(&menu);
        set_menu_open(&document, !open);
    });
    let _ = button.add_event_listener_with_callback("click", callback.as_ref().unchecked_ref());
    callback.forget();
}

fn bind_outside_click(document: &Document) {
    let callback = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
        let document = dom::document();
        let (Some(menu), Some(button)) = (
            document.get_element_by_id(MENU_ID),
            document.get_element_by_id(TOGGLE_BUTTON_ID),
        ) else {
            return;
        };
        let Some(target) = event.target().and_then(|t| t.dyn_into::<Node>().ok()) else {
            return;
        };
        if !menu.contains(Some(&target)) && !button.contains(Some(&target)) {
            set_menu_open(&document, false);
        }
    });
    let _ = document.add_event_listener_with_callback("click", callback.as_ref().unchecked_ref());
    callback.forget();
}

/// Wire the whole panel: menu toggle, outside-click closing, one click
/// closure per present control, then one initial effects/indicator pass
/// so the page reflects the persisted record immediately.
pub fn init<S: PrefsStore + 'static>(document: &Document, store: S) {
    seed_menu_aria(document);
    bind_menu_toggle(document);
    bind_outside_click(document);

    let panel = Rc::new(RefCell::new(Panel::new(store)));
    for (id, action) in CONTROL_ACTIONS {
        let Some(control) = document.get_element_by_id(id) else {
            continue;
        };
        let panel = Rc::clone(&panel);
        let callback = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| {
            panel.borrow_mut().dispatch(action);
        });
        let _ =
            control.add_event_listener_with_callback("click", callback.as_ref().unchecked_ref());
        callback.forget();
    }
    panel.borrow().refresh();
}
