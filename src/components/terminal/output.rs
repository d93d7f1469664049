use leptos::prelude::*;

use crate::models::{EntryStyle, ListEntry, OutputLine, OutputLineData};

stylance::import_crate_style!(css, "src/components/terminal/output.module.css");

/// CSS class for an `ls` entry.
fn entry_class(style: EntryStyle) -> String {
    match style {
        EntryStyle::Directory => format!("{} {}", css::textBlue, css::fontBold),
        EntryStyle::Shortcut | EntryStyle::Executable => css::textGreen.to_string(),
        EntryStyle::Pdf => css::textRed.to_string(),
        EntryStyle::Image => css::textPurple.to_string(),
        EntryStyle::File => css::textFg.to_string(),
    }
}

fn listing_view(entries: Vec<ListEntry>) -> impl IntoView {
    view! {
        <div class=css::listing>
            {entries
                .into_iter()
                .map(|entry| {
                    let class = entry_class(entry.style);
                    view! { <span class=class>{entry.display_name()}</span> }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn Output(line: OutputLine) -> impl IntoView {
    match line.data {
        OutputLineData::Command { prompt, input } => view! {
            <div class=css::command>
                <span class=css::textGreen>{prompt}</span>
                <span class=css::textDim>"$ "</span>
                <span class=css::textFg>{input}</span>
            </div>
        }
        .into_any(),
        OutputLineData::Text(text) => view! {
            <div class=format!("{} {}", css::line, css::textFg)>{text}</div>
        }
        .into_any(),
        OutputLineData::Muted(text) => view! {
            <div class=format!("{} {}", css::line, css::textDim)>{text}</div>
        }
        .into_any(),
        OutputLineData::Error(text) => view! {
            <div class=format!("{} {}", css::line, css::textRed)>{text}</div>
        }
        .into_any(),
        OutputLineData::Warning(text) => view! {
            <div class=format!("{} {}", css::line, css::textYellow)>{text}</div>
        }
        .into_any(),
        OutputLineData::Success(text) => view! {
            <div class=format!("{} {}", css::line, css::textGreen)>{text}</div>
        }
        .into_any(),
        // Documentation blocks are compiled-in assets, never user input.
        OutputLineData::Rich(markup) => view! {
            <div class=css::rich inner_html=markup />
        }
        .into_any(),
        OutputLineData::Listing(entries) => listing_view(entries).into_any(),
    }
}
