use crate::model::render::RenderSink;
use crate::model::termination::Termination;
use predation_data::{Cell, CELL_SIZE};
use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;

/// Draws agents as filled `CELL_SIZE` squares on a 2D canvas.
pub struct CanvasSink<'a> {
    ctx: &'a CanvasRenderingContext2d,
    size: f64,
}

impl<'a> CanvasSink<'a> {
    pub fn new(ctx: &'a CanvasRenderingContext2d, grid_size: i32) -> Self {
        Self {
            ctx,
            size: grid_size as f64,
        }
    }
}

impl<'a> RenderSink for CanvasSink<'a> {
    fn clear(&mut self) {
        self.ctx.clear_rect(0.0, 0.0, self.size, self.size);
    }

    fn draw(&mut self, cell: &Cell) {
        self.ctx
            .set_fill_style(&JsValue::from_str(cell.species.color_name()));
        self.ctx.fill_rect(
            cell.x as f64,
            cell.y as f64,
            CELL_SIZE as f64,
            CELL_SIZE as f64,
        );
    }

    fn show_message(&mut self, text: &str) {
        self.ctx.set_fill_style(&JsValue::from_str("white"));
        self.ctx.set_font(&format!("{}px Arial", self.size / 12.0));
        let x = if Termination::IterationsExhausted.message() == Some(text) {
            self.size / 5.0
        } else {
            10.0
        };
        let _ = self.ctx.fill_text(text, x, self.size / 2.0);
    }
}
