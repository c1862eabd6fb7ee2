//! Canvas 2D backend and the `requestAnimationFrame` clock.

use std::f64::consts::TAU;

use gloo::render::{request_animation_frame, AnimationFrame};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Document, Element, HtmlCanvasElement};

use crate::scene::animation::FrameCallback;
use crate::scene::{FrameScheduler, FrameView, Primitive, RenderBackend, Viewport};

/// Paints frames onto a `<canvas>` appended to a host element.
pub struct CanvasBackend {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl CanvasBackend {
    /// Creates a canvas inside `host`. Fails when no 2D context is available.
    pub fn attach(document: &Document, host: &Element) -> Result<Self, JsValue> {
        let canvas: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
        let context: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into()?;
        host.append_child(&canvas)?;
        Ok(Self { canvas, context })
    }

    fn paint(&self, primitive: &Primitive) -> Result<(), JsValue> {
        let ctx = &self.context;
        match primitive {
            Primitive::Disc {
                center,
                radius,
                color,
                alpha,
                ..
            } => {
                ctx.set_global_alpha(f64::from(*alpha));
                ctx.set_fill_style_str(&color.to_hex());
                ctx.begin_path();
                ctx.arc(
                    f64::from(center[0]),
                    f64::from(center[1]),
                    f64::from(*radius),
                    0.0,
                    TAU,
                )?;
                ctx.fill();
            }
            Primitive::Polyline {
                points,
                width,
                color,
                alpha,
                ..
            } => {
                let Some((first, rest)) = points.split_first() else {
                    return Ok(());
                };
                ctx.set_global_alpha(f64::from(*alpha));
                ctx.set_stroke_style_str(&color.to_hex());
                ctx.set_line_width(f64::from(*width));
                ctx.begin_path();
                ctx.move_to(f64::from(first[0]), f64::from(first[1]));
                for point in rest {
                    ctx.line_to(f64::from(point[0]), f64::from(point[1]));
                }
                ctx.stroke();
            }
        }
        Ok(())
    }
}

impl RenderBackend for CanvasBackend {
    fn resize(&mut self, viewport: Viewport) {
        self.canvas.set_width(viewport.width);
        self.canvas.set_height(viewport.height);
    }

    fn draw(&mut self, frame: &FrameView) {
        self.context.set_global_alpha(1.0);
        self.context.clear_rect(
            0.0,
            0.0,
            f64::from(self.canvas.width()),
            f64::from(self.canvas.height()),
        );
        for primitive in &frame.primitives {
            if let Err(err) = self.paint(primitive) {
                web_sys::console::warn_2(&"ambient scene: paint failed".into(), &err);
                return;
            }
        }
    }

    fn release(&mut self) {
        self.canvas.remove();
    }
}

/// Frame clock backed by `requestAnimationFrame`.
///
/// Dropping the returned [`AnimationFrame`] cancels the request.
#[derive(Debug, Clone, Copy, Default)]
pub struct RafScheduler;

impl FrameScheduler for RafScheduler {
    type Pending = AnimationFrame;

    fn request_frame(&self, callback: FrameCallback) -> AnimationFrame {
        request_animation_frame(move |timestamp| callback(timestamp))
    }
}
