//! Registro de Nombres App
//!
//! Root component: shared state, fetch/resync effect, layout.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{ErrorBanner, RecordForm, RecordTable};
use crate::context::AppContext;
use crate::outside_click::bind_outside_mousedown;

#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();

    // Provide context to all children
    provide_context(ctx);

    // Initial load, re-run after every successful mutation via reload()
    Effect::new(move |_| {
        let trigger = ctx.reload_trigger.get();
        ctx.set_loading.set(true);
        ctx.set_error.set(None);
        spawn_local(async move {
            match api::fetch_all().await {
                Ok(records) => {
                    web_sys::console::log_1(
                        &format!("[APP] Loaded {} records, trigger={}", records.len(), trigger).into(),
                    );
                    ctx.set_records.set(records);
                }
                // Keep the previous collection on a failed fetch
                Err(e) => ctx.set_error.set(Some(e)),
            }
            ctx.set_loading.set(false);
        });
    });

    // Close the open row menu on any interaction outside it
    bind_outside_mousedown(ctx);

    view! {
        <div class="app">
            <header class="app-header">
                <h1>"Registro de Nombres"</h1>
                <p class="app-subtitle">"Agrega, edita y elimina registros"</p>
            </header>

            <RecordForm />

            <ErrorBanner />

            <RecordTable />
        </div>
    }
}
