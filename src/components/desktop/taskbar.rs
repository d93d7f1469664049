//! Taskbar: start button, one tab per open window, clock.

use gloo_timers::callback::Interval;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::{APP_NAME, TERMINAL_WINDOW};
use crate::models::WindowId;

stylance::import_crate_style!(css, "src/components/desktop/taskbar.module.css");

const CLOCK_TICK_MS: u32 = 1000;

fn now() -> String {
    js_sys::Date::new_0()
        .to_locale_time_string("en-US")
        .into()
}

#[component]
pub fn Taskbar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let clock = RwSignal::new(now());
    let ticker = StoredValue::new_local(Some(Interval::new(CLOCK_TICK_MS, move || {
        clock.set(now())
    })));
    on_cleanup(move || ticker.set_value(None));

    let tabs = move || {
        ctx.windows.with(|wm| {
            let focused = wm.focused().map(|w| w.id.clone());
            wm.open_windows()
                .map(|w| (w.id.clone(), w.title.clone(), Some(&w.id) == focused.as_ref()))
                .collect::<Vec<_>>()
        })
    };

    view! {
        <footer class=css::bar>
            <button
                class=css::start
                title="Open terminal"
                on:click=move |_| {
                    ctx.click();
                    ctx.open_window(&WindowId::new(TERMINAL_WINDOW));
                }
            >
                <Icon icon=ic::START />
                <span>{APP_NAME}</span>
            </button>
            <div class=css::tabs>
                <For
                    each=tabs
                    key=|(id, _, focused)| (id.clone(), *focused)
                    children=move |(id, title, focused)| {
                        let class = if focused {
                            format!("{} {}", css::tab, css::tabActive)
                        } else {
                            css::tab.to_string()
                        };
                        let icon = ic::window_icon(&id);
                        view! {
                            <button
                                class=class
                                on:click=move |_| {
                                    ctx.click();
                                    ctx.focus_window(&id);
                                }
                            >
                                <Icon icon=icon />
                                <span class=css::tabTitle>{title}</span>
                            </button>
                        }
                    }
                />
            </div>
            <span class=css::clock>{clock}</span>
        </footer>
    }
}
