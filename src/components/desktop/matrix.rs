//! Matrix rain drawn on a full-screen canvas.

use gloo_timers::callback::Interval;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::config::matrix_rain::{FONT_SIZE, FRAME_MS, GLYPHS, RESET_CHANCE};
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/desktop/matrix.module.css");

/// Animation state: one falling drop per column.
struct Rain {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
    drops: Vec<f64>,
}

impl Rain {
    /// Size the canvas to the viewport and grab its 2D context.
    fn new(canvas: &HtmlCanvasElement) -> Option<Self> {
        let window = dom::window()?;
        let width = window.inner_width().ok()?.as_f64()?;
        let height = window.inner_height().ok()?.as_f64()?;
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);

        let ctx = canvas
            .get_context("2d")
            .ok()??
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        let columns = (width / FONT_SIZE) as usize;

        Some(Self {
            ctx,
            width,
            height,
            drops: vec![1.0; columns],
        })
    }

    fn glyph() -> String {
        let idx = (js_sys::Math::random() * GLYPHS.len() as f64) as usize;
        char::from(GLYPHS[idx.min(GLYPHS.len() - 1)]).to_string()
    }

    fn draw(&mut self) {
        // Translucent black leaves a fading trail behind each drop.
        self.ctx.set_fill_style_str("rgba(0, 0, 0, 0.05)");
        self.ctx.fill_rect(0.0, 0.0, self.width, self.height);

        self.ctx.set_fill_style_str("#0F0");
        self.ctx.set_font(&format!("{}px monospace", FONT_SIZE));

        for (i, drop) in self.drops.iter_mut().enumerate() {
            let _ = self
                .ctx
                .fill_text(&Self::glyph(), i as f64 * FONT_SIZE, *drop * FONT_SIZE);

            if *drop * FONT_SIZE > self.height && js_sys::Math::random() < RESET_CHANCE {
                *drop = 0.0;
            }
            *drop += 1.0;
        }
    }
}

/// Full-screen matrix rain, running for as long as it is mounted.
#[component]
pub fn MatrixRain() -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    let interval = StoredValue::new_local(None::<Interval>);

    Effect::new(move || {
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        let Some(mut rain) = Rain::new(&canvas) else {
            log::warn!("matrix rain: canvas 2d context unavailable");
            return;
        };
        interval.set_value(Some(Interval::new(FRAME_MS, move || rain.draw())));
    });

    on_cleanup(move || interval.set_value(None));

    view! { <canvas node_ref=canvas_ref class=css::canvas /> }
}
