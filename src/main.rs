//! Registro de Nombres Frontend Entry Point

mod models;
mod error;
mod validate;
mod api;
mod context;
mod outside_click;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
