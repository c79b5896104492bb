use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::draw::DrawContext;

/// [`DrawContext`] over a browser 2D canvas context.
///
/// Canvas calls that can throw (arcs, text, transforms) are swallowed: a bad
/// frame is dropped, never reported.
#[derive(Clone)]
pub struct CanvasContext {
    ctx: CanvasRenderingContext2d,
}

impl CanvasContext {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

fn soft(result: Result<(), JsValue>) {
    if let Err(err) = result {
        log::trace!("canvas call failed: {err:?}");
    }
}

#[allow(deprecated)]
impl DrawContext for CanvasContext {
    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.ctx.clear_rect(x, y, w, h);
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.ctx.fill_rect(x, y, w, h);
    }

    fn set_fill_style(&mut self, style: &str) {
        self.ctx.set_fill_style(&JsValue::from_str(style));
    }

    fn set_stroke_style(&mut self, style: &str) {
        self.ctx.set_stroke_style(&JsValue::from_str(style));
    }

    fn set_line_width(&mut self, width: f64) {
        self.ctx.set_line_width(width);
    }

    fn set_font(&mut self, font: &str) {
        self.ctx.set_font(font);
    }

    fn set_shadow_blur(&mut self, blur: f64) {
        self.ctx.set_shadow_blur(blur);
    }

    fn set_shadow_color(&mut self, color: &str) {
        self.ctx.set_shadow_color(color);
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ctx.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ctx.line_to(x, y);
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64) {
        soft(self.ctx.arc(x, y, radius.max(0.0), start, end));
    }

    fn rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.ctx.rect(x, y, w, h);
    }

    fn fill(&mut self) {
        self.ctx.fill();
    }

    fn stroke(&mut self) {
        self.ctx.stroke();
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        soft(self.ctx.fill_text(text, x, y));
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn translate(&mut self, x: f64, y: f64) {
        soft(self.ctx.translate(x, y));
    }

    fn rotate(&mut self, angle: f64) {
        soft(self.ctx.rotate(angle));
    }
}
