//! Browser-only tests for the `localStorage` snapshot adapter.
#![cfg(target_arch = "wasm32")]

use gelos::core::persistence::{LocalStoragePort, PersistencePort};
use gelos::core::{WindowHost, WindowManager};
use gelos::models::WindowId;
use gelos::utils::dom;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn fresh_port(key: &str) -> LocalStoragePort {
    if let Some(storage) = dom::local_storage() {
        let _ = storage.remove_item(key);
    }
    LocalStoragePort::with_key(key)
}

#[wasm_bindgen_test]
fn load_without_saved_state() {
    let port = fresh_port("gelos_test_empty");
    assert!(port.load().unwrap().is_none());
}

#[wasm_bindgen_test]
fn save_then_load() {
    let port = fresh_port("gelos_test_round_trip");
    let mut wm = WindowManager::new();
    wm.open_window(&WindowId::new("readme"), None);
    wm.toggle_effect("matrix");

    port.save(&wm.snapshot()).unwrap();
    let loaded = port.load().unwrap().unwrap();

    let mut restored = WindowManager::new();
    restored.restore(&loaded);
    assert!(restored.is_open(&WindowId::new("readme")));
    assert!(restored.effect_active("matrix"));
}

#[wasm_bindgen_test]
fn corrupt_value_is_reported() {
    let port = fresh_port("gelos_test_corrupt");
    let storage = dom::local_storage().unwrap();
    storage.set_item(port.key(), "{oops").unwrap();
    assert!(port.load().is_err());
}
