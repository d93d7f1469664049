use gelos::app::App;
use leptos::prelude::*;
use log::LevelFilter;
use wasm_bindgen::JsCast;

fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    if gelos::utils::logger::init(level).is_err() {
        web_sys::console::warn_1(&"logger already initialized".into());
    }

    let Some(root) = document().get_element_by_id("app") else {
        log::error!("failed to find #app element");
        return;
    };

    mount_to(root.unchecked_into::<web_sys::HtmlElement>(), App).forget();
}
