//! UI Components
//!
//! Reusable Leptos components.

mod error_banner;
mod record_form;
mod record_table;
mod row_menu;

pub use error_banner::ErrorBanner;
pub use record_form::RecordForm;
pub use record_table::RecordTable;
pub use row_menu::RowMenu;
