//! Terminal view component.
//!
//! The terminal interface with output history and command input.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::components::terminal::{Input, Output};
use crate::core::AutocompleteResult;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/terminal/terminal.module.css");

// ============================================================================
// Effect Setup Functions
// ============================================================================

/// Auto-scroll output to bottom when the log changes.
fn setup_autoscroll_effect(ctx: AppContext, output_ref: NodeRef<leptos::html::Div>) {
    Effect::new(move || {
        ctx.shell.track();
        if let Some(el) = output_ref.get() {
            el.set_scroll_top(el.scroll_height());
        }
    });
}

// ============================================================================
// Terminal Component
// ============================================================================

#[component]
pub fn Terminal() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let output_ref = NodeRef::<leptos::html::Div>::new();

    let prompt = Signal::derive(move || ctx.prompt());

    let on_submit = create_submit_callback(ctx);
    let on_history_nav = create_history_nav_callback(ctx);
    let on_autocomplete = create_autocomplete_callback(ctx);

    setup_autoscroll_effect(ctx, output_ref);

    view! {
        <div
            class=css::container
            on:click=move |_| dom::focus_terminal_input()
            on:keydown=move |_| ctx.keypress()
        >
            <div node_ref=output_ref class=css::output>
                <For
                    each=move || ctx.shell.with(|shell| shell.output().to_vec())
                    key=|line| line.id
                    children=|line| view! { <Output line=line /> }
                />
            </div>
            <div class=css::inputArea>
                <Input
                    prompt=prompt
                    on_submit=on_submit
                    on_history_nav=on_history_nav
                    on_autocomplete=on_autocomplete
                />
            </div>
        </div>
    }
}

// ============================================================================
// Callback Factories
// ============================================================================

fn create_submit_callback(ctx: AppContext) -> Callback<String> {
    Callback::new(move |input: String| ctx.submit(&input))
}

fn create_history_nav_callback(ctx: AppContext) -> Callback<i32, Option<String>> {
    Callback::new(move |direction: i32| ctx.navigate_history(direction))
}

fn create_autocomplete_callback(ctx: AppContext) -> Callback<String, AutocompleteResult> {
    Callback::new(move |input: String| ctx.complete(&input))
}
