//! Outside Click Detection
//!
//! Document-level mousedown listener that closes the open row menu when the
//! interaction lands outside the menu region.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::context::AppContext;

/// Region that keeps the menu open when clicked: the trigger plus dropdown
const MENU_REGION_SELECTOR: &str = ".row-menu";

/// Register a document-scope mousedown listener for the component's
/// lifetime. The listener is deregistered and dropped on teardown so it
/// cannot leak across remounts.
pub fn bind_outside_mousedown(ctx: AppContext) {
    let on_mousedown = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        if ctx.open_menu_id.get_untracked().is_none() {
            return;
        }
        let inside_menu = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            .and_then(|el| el.closest(MENU_REGION_SELECTOR).ok().flatten())
            .is_some();
        if !inside_menu {
            ctx.close_menu();
        }
    });

    if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
        let _ = doc.add_event_listener_with_callback("mousedown", on_mousedown.as_ref().unchecked_ref());
        on_cleanup(move || {
            let _ = doc.remove_event_listener_with_callback("mousedown", on_mousedown.as_ref().unchecked_ref());
        });
    }
}
