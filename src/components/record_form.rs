//! Record Form Component
//!
//! Input form for creating records and saving edits.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::AppContext;
use crate::validate::{validate_name, MAX_NAME_LEN};

/// Form for creating a record or saving the one being edited
#[component]
pub fn RecordForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let trimmed = ctx.name.get().trim().to_string();
        if trimmed.is_empty() {
            return;
        }
        // One mutation in flight at a time
        if ctx.saving.get() {
            return;
        }
        ctx.set_error.set(None);
        if let Err(e) = validate_name(&trimmed) {
            // Input keeps its value so the user can correct it
            ctx.set_error.set(Some(e.into()));
            return;
        }
        let editing = ctx.editing_id.get();
        ctx.set_saving.set(true);
        spawn_local(async move {
            let result = match editing {
                Some(id) => api::update(id, &trimmed).await,
                None => api::create(&trimmed).await,
            };
            match result {
                Ok(()) => {
                    if editing.is_some() {
                        ctx.set_editing_id.set(None);
                    }
                    ctx.set_name("");
                    ctx.reload();
                    ctx.focus_input();
                }
                // Name and edit state stay untouched so the same submit can be retried
                Err(e) => ctx.set_error.set(Some(e)),
            }
            ctx.set_saving.set(false);
        });
    };

    view! {
        <form class="record-form" on:submit=on_submit>
            <div class="record-input-wrap">
                <input
                    type="text"
                    node_ref=ctx.input_ref
                    placeholder="Escribe un nombre..."
                    maxlength=MAX_NAME_LEN.to_string()
                    prop:value=move || ctx.name.get()
                    on:input=move |ev| ctx.set_name(&event_target_value(&ev))
                />
                {move || ctx.editing_id.get().map(|_| view! {
                    <button
                        type="button"
                        class="cancel-edit-btn"
                        title="Cancelar edición"
                        on:click=move |_| ctx.cancel_edit()
                    >
                        "×"
                    </button>
                })}
            </div>
            <button
                type="submit"
                class=move || {
                    if ctx.editing_id.get().is_some() { "submit-btn editing" } else { "submit-btn" }
                }
                disabled=move || ctx.saving.get()
            >
                {move || if ctx.editing_id.get().is_some() { "Guardar" } else { "Agregar" }}
            </button>
        </form>
    }
}
