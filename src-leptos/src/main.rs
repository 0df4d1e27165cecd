//! Plan Am Well Admin - Leptos Frontend
//!
//! Client-side rendered admin dashboard for the Plan Am Well platform.
//! All data comes from the REST backend via the authenticated API client.

// Dependencies used in lib.rs submodules, acknowledged here for bin target
use amwell_types as _;
use chrono as _;
use leptos_meta as _;
use leptos_router as _;
use serde as _;
use serde_json as _;
use serde_wasm_bindgen as _;
use wasm_bindgen as _;
use wasm_bindgen_futures as _;
use web_sys as _;

use amwell_leptos::app::App;
use leptos::prelude::*;

fn main() {
    // Initialize panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging (ignore error if already initialized)
    drop(console_log::init_with_level(log::Level::Debug));

    log::info!("Plan Am Well Admin starting...");

    // Mount the app
    mount_to_body(App);
}
