//! Window bodies for the built-in desktop apps.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::components::terminal::Terminal;
use crate::config::{MATRIX_EFFECT, doc_page};
use crate::models::{EntryStyle, Location, WindowId};

stylance::import_crate_style!(css, "src/components/desktop/apps.module.css");

/// Folders offered in the explorer sidebar.
const EXPLORER_FOLDERS: &[&str] = &["documents", "pictures", "desktop"];

/// Body of the window `id`.
pub fn window_body(id: WindowId) -> AnyView {
    match id.as_str() {
        "terminal" => view! { <Terminal /> }.into_any(),
        "files" => view! { <FileExplorer /> }.into_any(),
        "readme" => view! { <DocPage key="whoami" /> }.into_any(),
        "features" => view! { <DocPage key="ac" /> }.into_any(),
        "settings" => view! { <SettingsPanel /> }.into_any(),
        "pdf" | "image" => view! { <Viewer id=id /> }.into_any(),
        _ => view! { <Offline id=id /> }.into_any(),
    }
}

/// Static documentation block rendered as markup.
#[component]
fn DocPage(key: &'static str) -> impl IntoView {
    let markup = doc_page(key).unwrap_or_default();
    view! { <div class=css::doc inner_html=markup /> }
}

/// PDF or image viewer showing the last payload handed to its window.
#[component]
fn Viewer(id: WindowId) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let is_pdf = id == "pdf";
    let payload = Memo::new(move |_| {
        ctx.windows
            .with(|wm| wm.get(&id).and_then(|w| w.payload.clone()))
    });

    move || match payload.get() {
        Some(p) if is_pdf => view! {
            <iframe class=css::pdf src=p.content_ref title=p.title />
        }
        .into_any(),
        Some(p) => view! {
            <div class=css::imageFrame>
                <img class=css::image src=p.content_ref alt=p.title />
            </div>
        }
        .into_any(),
        None => view! { <div class=css::empty>"Nothing to show."</div> }.into_any(),
    }
}

/// Folder sidebar plus a grid of the selected folder's entries.
#[component]
fn FileExplorer() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let folder = RwSignal::new(EXPLORER_FOLDERS[0]);

    let entries = move || {
        let name = folder.get();
        ctx.list_dir(&Location::from_segments([name]))
            .into_iter()
            .map(|entry| {
                let path = format!("/{}/{}", name, entry.name);
                let is_dir = entry.style == EntryStyle::Directory;
                view! {
                    <button
                        class=css::entry
                        on:dblclick=move |_| {
                            ctx.click();
                            if !is_dir {
                                ctx.open_path(&path);
                            }
                        }
                    >
                        <Icon icon=ic::entry_icon(entry.style) />
                        <span class=css::entryName>{entry.name.clone()}</span>
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <div class=css::explorer>
            <nav class=css::sidebar>
                {EXPLORER_FOLDERS
                    .iter()
                    .map(|name| {
                        let name = *name;
                        let class = move || {
                            if folder.get() == name {
                                format!("{} {}", css::sidebarItem, css::sidebarActive)
                            } else {
                                css::sidebarItem.to_string()
                            }
                        };
                        view! {
                            <button
                                class=class
                                on:click=move |_| {
                                    ctx.click();
                                    folder.set(name);
                                }
                            >
                                <Icon icon=ic::FOLDER />
                                <span>{name}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
            <div class=css::grid>{entries}</div>
        </div>
    }
}

/// Sound and matrix switches.
#[component]
fn SettingsPanel() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let sound = Memo::new(move |_| ctx.windows.with(|wm| wm.sound_enabled()));
    let matrix = Memo::new(move |_| ctx.effect_active(MATRIX_EFFECT));

    view! {
        <div class=css::settings>
            <label class=css::setting>
                <input
                    type="checkbox"
                    prop:checked=sound
                    on:change=move |_| ctx.set_sound_enabled(!sound.get_untracked())
                />
                "Sound effects"
            </label>
            <label class=css::setting>
                <input
                    type="checkbox"
                    prop:checked=matrix
                    on:change=move |_| ctx.toggle_effect(MATRIX_EFFECT)
                />
                "Matrix protocol"
            </label>
        </div>
    }
}

/// Placeholder for apps that have no body in this build.
#[component]
fn Offline(id: WindowId) -> impl IntoView {
    view! {
        <div class=css::empty>
            {format!("{}: service offline.", id)}
        </div>
    }
}
