//! Row Menu Component
//!
//! Per-row "⋮" trigger and its Editar/Eliminar dropdown. At most one menu
//! is open at a time, tracked by the shared `open_menu_id`.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::AppContext;
use crate::models::Record;

/// Action menu for one record row
#[component]
pub fn RowMenu(record: Record) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let id = record.id;
    let record = StoredValue::new(record);

    let on_delete = move |_| {
        // The menu closes as part of handling the action, whatever the outcome
        ctx.close_menu();
        if ctx.saving.get() {
            return;
        }
        ctx.set_error.set(None);
        ctx.set_saving.set(true);
        spawn_local(async move {
            match api::delete(id).await {
                Ok(()) => {
                    // Deleting the record being edited also clears the form
                    if ctx.editing_id.get_untracked() == Some(id) {
                        ctx.cancel_edit();
                    }
                    ctx.reload();
                }
                Err(e) => ctx.set_error.set(Some(e)),
            }
            ctx.set_saving.set(false);
        });
    };

    view! {
        <div class="row-menu">
            <button
                class="row-menu-trigger"
                on:click=move |_| ctx.toggle_menu(id)
            >
                "⋮"
            </button>

            <Show when=move || ctx.open_menu_id.get() == Some(id)>
                <div class="row-menu-dropdown">
                    <button
                        class="menu-item"
                        on:click=move |_| record.with_value(|r| ctx.begin_edit(r))
                    >
                        "Editar"
                    </button>
                    <button
                        class="menu-item danger"
                        on:click=on_delete
                    >
                        "Eliminar"
                    </button>
                </div>
            </Show>
        </div>
    }
}
