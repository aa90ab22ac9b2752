//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::html;
use leptos::prelude::*;

use crate::error::AppError;
use crate::models::Record;
use crate::validate::clamp_name;

/// Menu toggle transition: same id closes, different id switches
pub fn toggle_menu_id(open: Option<i64>, id: i64) -> Option<i64> {
    if open == Some(id) {
        None
    } else {
        Some(id)
    }
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Record collection mirrored from the server - read
    pub records: ReadSignal<Vec<Record>>,
    /// Record collection mirrored from the server - write
    pub set_records: WriteSignal<Vec<Record>>,
    /// Current form input value - read
    pub name: ReadSignal<String>,
    set_name: WriteSignal<String>,
    /// Id of the record being edited (None = creating) - read
    pub editing_id: ReadSignal<Option<i64>>,
    pub set_editing_id: WriteSignal<Option<i64>>,
    /// Id of the row whose action menu is open - read
    pub open_menu_id: ReadSignal<Option<i64>>,
    set_open_menu_id: WriteSignal<Option<i64>>,
    /// True while a fetch of the collection is outstanding
    pub loading: ReadSignal<bool>,
    pub set_loading: WriteSignal<bool>,
    /// True while a create/update/delete is outstanding (submit guard)
    pub saving: ReadSignal<bool>,
    pub set_saving: WriteSignal<bool>,
    /// Latest error, shown in the banner until overwritten or dismissed
    pub error: ReadSignal<Option<AppError>>,
    pub set_error: WriteSignal<Option<AppError>>,
    /// Trigger to reload records from the server - read
    pub reload_trigger: ReadSignal<u32>,
    set_reload_trigger: WriteSignal<u32>,
    /// Form input element, for focus management
    pub input_ref: NodeRef<html::Input>,
}

impl AppContext {
    pub fn new() -> Self {
        let (records, set_records) = signal(Vec::<Record>::new());
        let (name, set_name) = signal(String::new());
        let (editing_id, set_editing_id) = signal(None::<i64>);
        let (open_menu_id, set_open_menu_id) = signal(None::<i64>);
        let (loading, set_loading) = signal(false);
        let (saving, set_saving) = signal(false);
        let (error, set_error) = signal(None::<AppError>);
        let (reload_trigger, set_reload_trigger) = signal(0u32);

        Self {
            records,
            set_records,
            name,
            set_name,
            editing_id,
            set_editing_id,
            open_menu_id,
            set_open_menu_id,
            loading,
            set_loading,
            saving,
            set_saving,
            error,
            set_error,
            reload_trigger,
            set_reload_trigger,
            input_ref: NodeRef::new(),
        }
    }

    /// Trigger a reload of records from the server
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Set the form input, clamped to the maximum name length
    pub fn set_name(&self, value: &str) {
        self.set_name.set(clamp_name(value));
    }

    /// Enter edit mode for a record: prefill the input, close any open menu
    pub fn begin_edit(&self, record: &Record) {
        self.set_name.set(record.name.clone());
        self.set_editing_id.set(Some(record.id));
        self.set_open_menu_id.set(None);
        self.focus_input();
    }

    /// Leave edit mode and clear the input. Purely local, no server effect.
    pub fn cancel_edit(&self) {
        self.set_editing_id.set(None);
        self.set_name.set(String::new());
        self.focus_input();
    }

    /// Toggle the action menu for a row. At most one menu is open at a time.
    pub fn toggle_menu(&self, id: i64) {
        self.set_open_menu_id.update(|open| *open = toggle_menu_id(*open, id));
    }

    /// Close the open action menu, if any
    pub fn close_menu(&self) {
        self.set_open_menu_id.set(None);
    }

    /// Return keyboard focus to the form input
    pub fn focus_input(&self) {
        if let Some(input) = self.input_ref.get() {
            let _ = input.focus();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_opens_when_closed() {
        assert_eq!(toggle_menu_id(None, 3), Some(3));
    }

    #[test]
    fn toggle_closes_same_id() {
        assert_eq!(toggle_menu_id(Some(3), 3), None);
    }

    #[test]
    fn toggle_switches_to_other_id() {
        // Opening a second row's menu closes the first
        assert_eq!(toggle_menu_id(Some(3), 5), Some(5));
    }
}
