//! WasteWatch Dashboard
//!
//! Dry/wet waste dashboard built with Leptos (WASM).
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. The host page injects the waste totals as JSON into the
//! mount element's `data-totals` attribute; the bootstrap validates them
//! once per page load and either renders the chart or logs a diagnostic
//! and renders the empty shell.

use leptos::*;
use wasm_bindgen::JsCast;

mod app;
mod chart;
mod components;
mod inject;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    let Some(mount) = mount_element() else {
        web_sys::console::error_1(&format!("Mount element #{} not found", inject::MOUNT_ID).into());
        return;
    };

    let totals = match inject::read_injected_totals(&mount) {
        Ok(totals) => Some(totals),
        Err(err) => {
            // Diagnostic-only failure path: no retry, no on-page message.
            web_sys::console::error_1(&err.to_string().into());
            None
        }
    };

    mount_to(mount, move || {
        state::provide_dashboard_state(totals);
        view! { <app::App /> }
    });
}

fn mount_element() -> Option<web_sys::HtmlElement> {
    web_sys::window()?
        .document()?
        .get_element_by_id(inject::MOUNT_ID)?
        .dyn_into::<web_sys::HtmlElement>()
        .ok()
}
