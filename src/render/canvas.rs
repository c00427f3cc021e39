// canvas.rs - `Surface` over an HTML canvas 2d context

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::Surface;
use crate::error::{Error, Result};
use crate::viewport::{BoundingRect, CanvasSize};

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| Error::Js(format!("{e:?}")))?
            .ok_or(Error::NoContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| Error::NoContext)?;
        Ok(Self { canvas, ctx })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement { &self.canvas }
}

impl Surface for CanvasSurface {
    fn begin_path(&mut self) { self.ctx.begin_path() }
    fn set_stroke_style(&mut self, color: &str) { self.ctx.set_stroke_style_str(color) }
    fn set_fill_style(&mut self, color: &str) { self.ctx.set_fill_style_str(color) }
    fn move_to(&mut self, x: f64, y: f64) { self.ctx.move_to(x, y) }
    fn line_to(&mut self, x: f64, y: f64) { self.ctx.line_to(x, y) }
    fn stroke(&mut self) { self.ctx.stroke() }
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) { self.ctx.fill_rect(x, y, w, h) }

    fn size(&self) -> CanvasSize {
        CanvasSize { width: self.canvas.width(), height: self.canvas.height() }
    }

    fn set_size(&mut self, size: CanvasSize) {
        self.canvas.set_width(size.width);
        self.canvas.set_height(size.height);
    }

    fn bounding_rect(&self) -> BoundingRect {
        let rect = self.canvas.get_bounding_client_rect();
        BoundingRect {
            left: rect.left(),
            top: rect.top(),
            width: rect.width(),
            height: rect.height(),
        }
    }
}
