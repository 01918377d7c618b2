#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod dom;
pub mod panel;
pub mod pdf_select;
pub mod storage;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    let document = dom::document();
    // Both features initialize independently; neither depends on the other.
    dom::stamp_current_year(&document);
    pdf_select::init(&document);
    panel::init(&document, storage::LocalStore);
}
