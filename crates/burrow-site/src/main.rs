//! WASM entry point for the browser build
//!
//! Trunk compiles this with `--no-default-features --features csr` and it
//! mounts the page onto the document body.

use burrow_site::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    mount_to_body(|| {
        view! {
            <App />
        }
    });
}
