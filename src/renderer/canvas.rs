//! Canvas 2D painter
//!
//! Replays a `Scene` onto the page's `<canvas>` each frame.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::shapes::{PathOp, Scene, Shape, rounded_rect_path};

/// Main render state
pub struct CanvasRenderer {
    pub ctx: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into()?;

        Ok(Self { ctx })
    }

    /// Clear the surface and fill every shape of the scene
    pub fn render(&self, scene: &Scene) -> Result<(), JsValue> {
        self.ctx
            .clear_rect(0.0, 0.0, scene.width as f64, scene.height as f64);

        for shape in &scene.shapes {
            match shape {
                Shape::RoundedRect {
                    pos,
                    size,
                    radius,
                    color,
                } => {
                    self.ctx.set_fill_style_str(color);
                    self.trace(&rounded_rect_path(*pos, *size, *radius));
                    self.ctx.fill();
                }
                Shape::Circle {
                    center,
                    radius,
                    color,
                } => {
                    self.ctx.begin_path();
                    self.ctx.arc(
                        center.x as f64,
                        center.y as f64,
                        *radius as f64,
                        0.0,
                        std::f64::consts::TAU,
                    )?;
                    self.ctx.set_fill_style_str(color);
                    self.ctx.fill();
                }
            }
        }

        Ok(())
    }

    fn trace(&self, path: &[PathOp]) {
        self.ctx.begin_path();
        for op in path {
            match *op {
                PathOp::MoveTo(p) => self.ctx.move_to(p.x as f64, p.y as f64),
                PathOp::LineTo(p) => self.ctx.line_to(p.x as f64, p.y as f64),
                PathOp::QuadTo { ctrl, to } => self.ctx.quadratic_curve_to(
                    ctrl.x as f64,
                    ctrl.y as f64,
                    to.x as f64,
                    to.y as f64,
                ),
                PathOp::Close => self.ctx.close_path(),
            }
        }
    }
}
