//! Browser-side smoke tests for the wasm surface.
//!
//! Run with `wasm-pack test --headless --chrome crates/nocturne-backdrop
//! -- --features wasm`. Headless runners usually expose no GPU, so these
//! tests pin down the degraded path: attach must not throw, the handle
//! must report its state honestly, and detach must always be safe.

#![cfg(all(target_arch = "wasm32", feature = "wasm"))]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

use nocturne_backdrop::SmokeBackdrop;

wasm_bindgen_test_configure!(run_in_browser);

fn make_canvas() -> web_sys::HtmlCanvasElement {
    let document = web_sys::window().unwrap().document().unwrap();
    document
        .create_element("canvas")
        .unwrap()
        .dyn_into()
        .unwrap()
}

#[wasm_bindgen_test]
async fn attach_never_throws_and_detach_is_idempotent() {
    let backdrop = SmokeBackdrop::attach(make_canvas()).await;

    // With or without a GPU, stats are always serializable.
    let stats = backdrop.stats_json();
    assert!(stats.starts_with('{'));

    backdrop.detach();
    assert!(!backdrop.is_active());
    let frames = backdrop.frame_count();

    // Detaching twice and sampling later must not change the counter.
    backdrop.detach();
    assert_eq!(backdrop.frame_count(), frames);
}
