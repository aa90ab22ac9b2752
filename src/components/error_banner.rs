//! Error Banner Component
//!
//! Shows the latest error until it is overwritten or dismissed.

use leptos::prelude::*;

use crate::context::AppContext;

/// Dismissible banner for the current error, if any
#[component]
pub fn ErrorBanner() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        {move || ctx.error.get().map(|e| view! {
            <div class="error-banner">
                <span class="error-text">{e.to_string()}</span>
                <button
                    class="error-dismiss"
                    title="Descartar"
                    on:click=move |_| ctx.set_error.set(None)
                >
                    "×"
                </button>
            </div>
        })}
    }
}
