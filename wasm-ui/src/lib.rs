//! Browser entry point for formset-rows.
//!
//! Binds the diagnosis form set's container, add button and TOTAL_FORMS
//! input once the page has loaded, then appends a row on every click.

mod dom;

pub use dom::{WebHost, wire};

use formset_rows::{BindingIds, RowTemplate};
use gloo::events::EventListener;
use wasm_bindgen::prelude::*;
use web_sys::Document;

/// Entry point for the WASM module.
#[wasm_bindgen(start)]
pub fn run_app() {
    // Initialize panic hook for better error messages
    console_error_panic_hook::set_once();

    let document = gloo::utils::document();
    if let Some(listener) = mount(
        &document,
        BindingIds::diagnosticos(),
        RowTemplate::diagnosticos(),
    ) {
        listener.forget();
    }
}

/// Wire the form set now, or on `DOMContentLoaded` while the document is
/// still loading.
///
/// Returns the listener that must stay alive: the click handler when wired
/// immediately, the load handler when deferred. Returns `None` when a binding
/// is missing; the error goes to the console.
pub fn mount(
    document: &Document,
    ids: BindingIds,
    template: RowTemplate,
) -> Option<EventListener> {
    if document.ready_state() == "loading" {
        let target = document.clone();
        let listener = EventListener::once(document, "DOMContentLoaded", move |_| {
            if let Some(click) = wire_or_log(&target, &ids, template) {
                click.forget();
            }
        });
        Some(listener)
    } else {
        wire_or_log(document, &ids, template)
    }
}

fn wire_or_log(
    document: &Document,
    ids: &BindingIds,
    template: RowTemplate,
) -> Option<EventListener> {
    match wire(document, ids, template) {
        Ok(listener) => Some(listener),
        Err(e) => {
            web_sys::console::error_1(&format!("formset-rows: {e}").into());
            None
        }
    }
}
