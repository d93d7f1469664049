//! Desktop surface: icons, windows, taskbar, effects.

use leptos::prelude::*;
use leptos_icons::Icon;

use super::boot::BootScreen;
use super::matrix::MatrixRain;
use super::taskbar::Taskbar;
use super::window_frame::WindowFrame;
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::{BOOT_WINDOW, MATRIX_EFFECT};
use crate::models::{Location, WindowId};

stylance::import_crate_style!(css, "src/components/desktop/desktop.module.css");

/// Directory whose shortcuts become desktop icons.
const DESKTOP_DIR: &str = "desktop";

/// Icon label: the shortcut name without its `.lnk` suffix.
fn icon_label(name: &str) -> &str {
    name.strip_suffix(".lnk").unwrap_or(name)
}

#[component]
fn DesktopIcons() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let entries = ctx.list_dir(&Location::from_segments([DESKTOP_DIR]));

    view! {
        <div class=css::icons>
            {entries
                .into_iter()
                .map(|entry| {
                    let path = format!("/{}/{}", DESKTOP_DIR, entry.name);
                    let label = icon_label(&entry.name).to_string();
                    let icon = ic::window_icon(&WindowId::new(label.as_str()));
                    view! {
                        <button
                            class=css::icon
                            on:dblclick=move |_| {
                                ctx.click();
                                ctx.open_path(&path);
                            }
                        >
                            <span class=css::iconGlyph><Icon icon=icon /></span>
                            <span class=css::iconLabel>{label}</span>
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// The whole desktop, preceded by the boot screen.
///
/// After boot the README window opens unless a restored session already
/// has something open.
#[component]
pub fn Desktop() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let booting = RwSignal::new(true);

    let on_boot_done = Callback::new(move |_| {
        booting.set(false);
        let restored = ctx.windows.with_untracked(|wm| wm.open_windows().next().is_some());
        if !restored {
            ctx.open_window(&WindowId::new(BOOT_WINDOW));
        }
    });

    let windows = ctx
        .windows
        .with_untracked(|wm| {
            wm.windows()
                .iter()
                .map(|w| (w.id.clone(), w.title.clone()))
                .collect::<Vec<_>>()
        });

    view! {
        <Show
            when=move || !booting.get()
            fallback=move || view! { <BootScreen on_done=on_boot_done /> }
        >
            <main class=css::desktop>
                <Show when=move || ctx.effect_active(MATRIX_EFFECT)>
                    <MatrixRain />
                </Show>
                <DesktopIcons />
                {windows
                    .clone()
                    .into_iter()
                    .map(|(id, title)| view! { <WindowFrame id=id title=title /> })
                    .collect_view()}
                <Taskbar />
            </main>
        </Show>
    }
}
