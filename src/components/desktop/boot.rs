//! Boot screen shown before the desktop.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::config::{BOOT_LINES, boot_delays};

stylance::import_crate_style!(css, "src/components/desktop/boot.module.css");

const OK_TAG: &str = "[OK]";

/// Pause before the next boot line.
fn line_delay() -> u32 {
    boot_delays::LINE_MIN + (js_sys::Math::random() * f64::from(boot_delays::LINE_JITTER)) as u32
}

/// One boot line with its `[OK]` tag highlighted.
fn boot_line(text: &'static str) -> impl IntoView {
    match text.split_once(OK_TAG) {
        Some((before, after)) => view! {
            <div>
                {before}
                <span class=css::ok>{OK_TAG}</span>
                {after}
            </div>
        }
        .into_any(),
        None => view! { <div>{text}</div> }.into_any(),
    }
}

/// Prints [`BOOT_LINES`] one by one, then calls `on_done`.
#[component]
pub fn BootScreen(on_done: Callback<()>) -> impl IntoView {
    let shown = RwSignal::new(0usize);
    let screen_ref = NodeRef::<leptos::html::Div>::new();

    let started = StoredValue::new(false);
    Effect::new(move || {
        if started.get_value() {
            return;
        }
        started.set_value(true);
        spawn_local(async move {
            for _ in BOOT_LINES {
                shown.update(|n| *n += 1);
                TimeoutFuture::new(line_delay()).await;
            }
            TimeoutFuture::new(boot_delays::FINISH).await;
            on_done.run(());
        });
    });

    Effect::new(move || {
        shown.track();
        if let Some(el) = screen_ref.get() {
            el.set_scroll_top(el.scroll_height());
        }
    });

    view! {
        <div node_ref=screen_ref class=css::screen>
            {move || {
                BOOT_LINES[..shown.get()]
                    .iter()
                    .copied()
                    .map(boot_line)
                    .collect_view()
            }}
        </div>
    }
}
