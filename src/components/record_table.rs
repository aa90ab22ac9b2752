//! Record Table Component
//!
//! Renders the record collection: loading state, empty state, or one row
//! per record with a trailing count footer.

use leptos::prelude::*;

use crate::components::RowMenu;
use crate::context::AppContext;
use crate::models::Record;

/// Pluralized count footer text
pub fn count_label(count: usize) -> String {
    format!("{} registro{}", count, if count == 1 { "" } else { "s" })
}

/// Table of records with per-row action menus
#[component]
pub fn RecordTable() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <div class="record-table">
            <div class="record-table-header">
                <span>"#"</span>
                <span>"Nombre"</span>
                <span></span>
            </div>

            {move || {
                if ctx.loading.get() {
                    view! {
                        <div class="table-state">
                            <p>"Cargando registros..."</p>
                        </div>
                    }.into_any()
                } else if ctx.records.get().is_empty() {
                    view! {
                        <div class="table-state">
                            <p>"No hay registros aún"</p>
                            <p class="table-state-hint">"Agrega un nombre para comenzar"</p>
                        </div>
                    }.into_any()
                } else {
                    view! {
                        <div class="record-rows">
                            {ctx.records.get().into_iter().enumerate().map(|(index, record)| {
                                view! { <RecordRow index=index record=record /> }
                            }).collect_view()}
                        </div>
                    }.into_any()
                }
            }}

            <Show when=move || !ctx.loading.get() && !ctx.records.get().is_empty()>
                <div class="record-table-footer">
                    {move || count_label(ctx.records.get().len())}
                </div>
            </Show>
        </div>
    }
}

/// One table row: 1-based position, name, action menu
#[component]
fn RecordRow(index: usize, record: Record) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let id = record.id;

    let row_class = move || {
        if ctx.editing_id.get() == Some(id) { "record-row editing" } else { "record-row" }
    };

    view! {
        <div class=row_class>
            <span class="row-index">{index + 1}</span>
            <span class="row-name">{record.name.clone()}</span>
            <RowMenu record=record />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_label_singular() {
        assert_eq!(count_label(1), "1 registro");
    }

    #[test]
    fn count_label_plural() {
        assert_eq!(count_label(0), "0 registros");
        assert_eq!(count_label(5), "5 registros");
    }
}
