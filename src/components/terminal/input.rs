//! Terminal input line with Tab completion and history navigation.

use leptos::prelude::CollectView;
use leptos::{ev, prelude::*};
use wasm_bindgen::JsCast;

use crate::core::AutocompleteResult;

stylance::import_crate_style!(css, "src/components/terminal/input.module.css");

/// Terminal input field.
///
/// Keys:
/// - `Enter` submits the buffer and empties it
/// - `Tab` completes the last token when there is exactly one match;
///   several matches are listed under the line and the buffer is kept
/// - `ArrowUp` / `ArrowDown` walk the input history
/// - `Ctrl+L` clears the screen, `Ctrl+C` drops the buffer
#[component]
pub fn Input(
    #[prop(into)] prompt: Signal<String>,
    on_submit: Callback<String>,
    on_history_nav: Callback<i32, Option<String>>,
    on_autocomplete: Callback<String, AutocompleteResult>,
) -> impl IntoView {
    let input_ref = NodeRef::<leptos::html::Input>::new();
    let (input_value, set_input_value) = signal(String::new());
    let suggestions = RwSignal::new(Vec::<String>::new());

    // Focus input on mount
    Effect::new(move || {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    let move_cursor_to_end = move || {
        if let Some(input) = input_ref.get() {
            let len = input.value().len() as u32;
            let _ = input.set_selection_range(len, len);
        }
    };

    let handle_tab = move |value: String| -> Option<String> {
        match on_autocomplete.run(value) {
            AutocompleteResult::Single(completed) => {
                suggestions.set(vec![]);
                Some(completed)
            }
            AutocompleteResult::Multiple(matches) => {
                suggestions.set(matches);
                None
            }
            AutocompleteResult::None => {
                suggestions.set(vec![]);
                None
            }
        }
    };

    let handle_keydown = move |ev: ev::KeyboardEvent| match ev.key().as_str() {
        "Tab" => {
            ev.prevent_default();
            if let Some(completed) = handle_tab(input_value.get()) {
                set_input_value.set(completed);
                move_cursor_to_end();
            }
        }
        "Enter" => {
            suggestions.set(vec![]);
            on_submit.run(input_value.get());
            set_input_value.set(String::new());
        }
        "ArrowUp" => {
            ev.prevent_default();
            suggestions.set(vec![]);
            if let Some(cmd) = on_history_nav.run(-1) {
                set_input_value.set(cmd);
                move_cursor_to_end();
            }
        }
        "ArrowDown" => {
            ev.prevent_default();
            suggestions.set(vec![]);
            set_input_value.set(on_history_nav.run(1).unwrap_or_default());
        }
        "c" if ev.ctrl_key() => {
            suggestions.set(vec![]);
            set_input_value.set(String::new());
        }
        "l" if ev.ctrl_key() => {
            ev.prevent_default();
            suggestions.set(vec![]);
            on_submit.run("clear".to_string());
        }
        _ => {}
    };

    let handle_input = move |ev: ev::Event| {
        let Some(target) = ev.target() else { return };
        let input = target.unchecked_into::<web_sys::HtmlInputElement>();
        set_input_value.set(input.value());
        suggestions.set(vec![]);
    };

    let suggestions_view = move || {
        let matches = suggestions.get();
        (!matches.is_empty()).then(|| {
            view! {
                <div class=css::suggestions>
                    {matches
                        .into_iter()
                        .map(|s| view! { <span class=css::suggestion>{s}</span> })
                        .collect_view()}
                </div>
            }
        })
    };

    view! {
        <div class=css::inputWrapper>
            <div class=css::line>
                <span class=css::prompt>{prompt}</span>
                <span class=css::separator>"$ "</span>
                <input
                    id="terminal-input"
                    node_ref=input_ref
                    type="text"
                    class=css::input
                    autocomplete="off"
                    spellcheck="false"
                    prop:value=input_value
                    on:input=handle_input
                    on:keydown=handle_keydown
                />
            </div>
            {suggestions_view}
        </div>
    }
}
