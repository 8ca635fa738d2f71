#![allow(warnings)]
//! Expense Tracker Frontend Entry Point

mod models;
mod remote;
mod ledger;
mod components;
#[cfg(target_arch = "wasm32")]
mod app;

#[cfg(target_arch = "wasm32")]
fn main() {
    use leptos::prelude::*;

    console_error_panic_hook::set_once();
    mount_to_body(app::App);
}

// The app only runs in the browser; native builds exist for unit tests.
#[cfg(not(target_arch = "wasm32"))]
fn main() {}
