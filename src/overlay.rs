//! 2D overlay effects: the typed greeting and the confetti layer.

use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::{CONFETTI_CANVAS_ID, CONFETTI_DRAW_HEIGHT, CONFETTI_DRAW_WIDTH, GREETING_HEART_HTML};
use crate::core::confetti::ConfettiSystem;
use crate::core::greeting::Typewriter;
use crate::dom;

/// Write the typewriter's visible prefix into the greeting element; the red
/// heart appears once the text completes.
pub fn render_greeting(el: &web::Element, typewriter: &Typewriter) {
    if typewriter.is_complete() {
        el.set_inner_html(&format!("{}{}", typewriter.visible(), GREETING_HEART_HTML));
    } else {
        el.set_text_content(Some(&typewriter.visible()));
    }
}

/// Transparent full-window canvas the confetti particles are drawn onto with
/// the 2D context, above the WebGPU scene.
pub struct ConfettiLayer {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl ConfettiLayer {
    pub fn new(document: &web::Document) -> Option<Self> {
        let canvas = dom::canvas_by_id(document, CONFETTI_CANVAS_ID)?;
        dom::sync_canvas_backing_size(&canvas);
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .ok()?;
        Some(Self { canvas, ctx })
    }

    /// Repaint every live particle. Particle positions are normalized, so
    /// they scale with whatever backing size the canvas currently has.
    pub fn draw(&self, system: &ConfettiSystem) {
        let width = self.canvas.width() as f64;
        let height = self.canvas.height() as f64;
        self.ctx.clear_rect(0.0, 0.0, width, height);

        for p in system.particles() {
            let [r, g, b] = p.color;
            self.ctx.save();
            self.ctx.set_global_alpha(p.opacity() as f64);
            self.ctx.set_fill_style_str(&format!(
                "rgb({},{},{})",
                (r * 255.0) as u8,
                (g * 255.0) as u8,
                (b * 255.0) as u8
            ));
            _ = self
                .ctx
                .translate(p.position.x as f64 * width, p.position.y as f64 * height);
            _ = self.ctx.rotate(p.rotation as f64);
            self.ctx.fill_rect(
                -CONFETTI_DRAW_WIDTH * 0.5,
                -CONFETTI_DRAW_HEIGHT * 0.5,
                CONFETTI_DRAW_WIDTH,
                CONFETTI_DRAW_HEIGHT,
            );
            self.ctx.restore();
        }
    }
}
