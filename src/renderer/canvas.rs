//! Canvas 2D backend
//!
//! Replays a display list on a `CanvasRenderingContext2d`.

use std::f64::consts::TAU;

use glam::Vec2;
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::shapes::{Color, Paint, Shape, to_css};

pub struct CanvasPainter {
    ctx: CanvasRenderingContext2d,
}

impl CanvasPainter {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    pub fn clear(&self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    /// Draw every shape in order
    pub fn paint(&self, shapes: &[Shape]) -> Result<(), JsValue> {
        for shape in shapes {
            self.paint_shape(shape)?;
        }
        Ok(())
    }

    fn paint_shape(&self, shape: &Shape) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        match *shape {
            Shape::Rect { rect, fill } => {
                self.set_fill(fill);
                ctx.fill_rect(rect.x as f64, rect.y as f64, rect.w as f64, rect.h as f64);
            }
            Shape::Triangle { points, fill } => {
                self.set_fill(fill);
                ctx.begin_path();
                ctx.move_to(points[0].x as f64, points[0].y as f64);
                ctx.line_to(points[1].x as f64, points[1].y as f64);
                ctx.line_to(points[2].x as f64, points[2].y as f64);
                ctx.close_path();
                ctx.fill();
            }
            Shape::Circle {
                center,
                radius,
                paint,
            } => {
                ctx.begin_path();
                self.arc_path(center, radius, 0.0, TAU)?;
                self.apply(paint);
            }
            Shape::Arc {
                center,
                radius,
                start,
                end,
                fill,
            } => {
                ctx.begin_path();
                self.arc_path(center, radius, start as f64, end as f64)?;
                self.apply(Paint::Fill(fill));
            }
            Shape::Ellipse {
                center,
                radii,
                fill,
            } => {
                ctx.begin_path();
                ctx.ellipse(
                    center.x as f64,
                    center.y as f64,
                    radii.x as f64,
                    radii.y as f64,
                    0.0,
                    0.0,
                    TAU,
                )?;
                self.apply(Paint::Fill(fill));
            }
            Shape::Line {
                from,
                to,
                color,
                width,
            } => {
                ctx.begin_path();
                ctx.move_to(from.x as f64, from.y as f64);
                ctx.line_to(to.x as f64, to.y as f64);
                self.apply(Paint::Stroke { color, width });
            }
        }
        Ok(())
    }

    fn arc_path(&self, center: Vec2, radius: f32, start: f64, end: f64) -> Result<(), JsValue> {
        self.ctx
            .arc(center.x as f64, center.y as f64, radius as f64, start, end)
    }

    fn set_fill(&self, color: Color) {
        self.ctx.set_fill_style_str(&to_css(color));
    }

    fn apply(&self, paint: Paint) {
        match paint {
            Paint::Fill(color) => {
                self.set_fill(color);
                self.ctx.fill();
            }
            Paint::Stroke { color, width } => {
                self.ctx.set_stroke_style_str(&to_css(color));
                self.ctx.set_line_width(width as f64);
                self.ctx.stroke();
            }
        }
    }
}
