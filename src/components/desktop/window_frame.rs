//! Chrome around a desktop window: title bar, controls, body.

use leptos::prelude::*;
use leptos_icons::Icon;

use super::apps::window_body;
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::WindowId;

stylance::import_crate_style!(css, "src/components/desktop/window_frame.module.css");

/// One desktop window. Hidden while closed; raised on any mouse-down.
#[component]
pub fn WindowFrame(id: WindowId, title: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let state = {
        let id = id.clone();
        Memo::new(move |_| {
            ctx.windows.with(|wm| {
                wm.get(&id)
                    .map(|w| (w.is_open, w.is_maximized, w.z_index))
                    .unwrap_or_default()
            })
        })
    };

    let class = move || {
        let (_, maximized, _) = state.get();
        if maximized {
            format!("{} {}", css::window, css::maximized)
        } else {
            css::window.to_string()
        }
    };
    let style = move || format!("z-index: {};", state.get().2);

    let focus_id = id.clone();
    let maximize_id = id.clone();
    let close_id = id.clone();
    let body_id = id.clone();

    view! {
        <Show when=move || state.get().0>
            <section
                class=class
                style=style
                on:mousedown={
                    let focus_id = focus_id.clone();
                    move |_| ctx.focus_window(&focus_id)
                }
            >
                <header class=css::titleBar>
                    <span class=css::titleIcon><Icon icon=ic::window_icon(&id) /></span>
                    <span class=css::title>{title.clone()}</span>
                    <div class=css::controls>
                        <button
                            class=css::control
                            title="Maximize"
                            on:click={
                                let maximize_id = maximize_id.clone();
                                move |_| {
                                    ctx.click();
                                    ctx.toggle_maximize(&maximize_id);
                                }
                            }
                        >
                            {move || {
                                let icon = if state.get().1 { ic::RESTORE } else { ic::MAXIMIZE };
                                view! { <Icon icon=icon /> }
                            }}
                        </button>
                        <button
                            class=format!("{} {}", css::control, css::close)
                            title="Close"
                            on:click={
                                let close_id = close_id.clone();
                                move |_| {
                                    ctx.click();
                                    ctx.close_window(&close_id);
                                }
                            }
                        >
                            <Icon icon=ic::CLOSE />
                        </button>
                    </div>
                </header>
                <div class=css::body>{window_body(body_id.clone())}</div>
            </section>
        </Show>
    }
}
