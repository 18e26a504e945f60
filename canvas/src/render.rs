//! Browser surface: strokes and pixel reads against a `<canvas>` element.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! Every fallible `Canvas2D` call is mapped into [`SurfaceError`]; the engine
//! treats those as "skip this tick", never as fatal.

use image::{Rgba, RgbaImage};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::geometry::Point;
use crate::surface::{Surface, SurfaceError};

/// A `<canvas>` element prepared for freehand drawing.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Bind to `canvas`, sizing its backing store to its CSS size and setting
    /// the round black pen of `line_width` pixels.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::Unavailable`] when no 2D context can be obtained.
    pub fn new(canvas: HtmlCanvasElement, line_width: f64) -> Result<Self, SurfaceError> {
        let width = u32::try_from(canvas.client_width()).unwrap_or(0);
        let height = u32::try_from(canvas.client_height()).unwrap_or(0);
        if width > 0 && height > 0 {
            canvas.set_width(width);
            canvas.set_height(height);
        }

        let ctx = canvas
            .get_context("2d")
            .map_err(js_err)?
            .ok_or(SurfaceError::Unavailable)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| SurfaceError::Unavailable)?;

        ctx.set_line_cap("round");
        ctx.set_line_width(line_width);
        ctx.set_stroke_style_str("black");

        Ok(Self { canvas, ctx })
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> (u32, u32) {
        (self.canvas.width(), self.canvas.height())
    }

    fn read_region(&self, x: u32, y: u32, width: u32, height: u32) -> Result<RgbaImage, SurfaceError> {
        let data = self
            .ctx
            .get_image_data(f64::from(x), f64::from(y), f64::from(width), f64::from(height))
            .map_err(js_err)?
            .data()
            .0;
        let actual = data.len();
        RgbaImage::from_raw(width, height, data).ok_or(SurfaceError::BufferSize {
            expected: (width as usize) * (height as usize) * 4,
            actual,
        })
    }

    fn begin_stroke(&mut self, point: Point) -> Result<(), SurfaceError> {
        self.ctx.begin_path();
        self.ctx.move_to(point.x, point.y);
        Ok(())
    }

    fn stroke_to(&mut self, point: Point) -> Result<(), SurfaceError> {
        self.ctx.line_to(point.x, point.y);
        self.ctx.stroke();
        Ok(())
    }

    fn clear(&mut self, background: Rgba<u8>) -> Result<(), SurfaceError> {
        let (w, h) = (f64::from(self.canvas.width()), f64::from(self.canvas.height()));
        self.ctx.clear_rect(0.0, 0.0, w, h);
        let [r, g, b, a] = background.0;
        if a > 0 {
            let alpha = f64::from(a) / 255.0;
            self.ctx.set_fill_style_str(&format!("rgba({r}, {g}, {b}, {alpha})"));
            self.ctx.fill_rect(0.0, 0.0, w, h);
        }
        // A fresh path, so the next stroke does not redraw cleared ink.
        self.ctx.begin_path();
        Ok(())
    }
}

fn js_err(err: JsValue) -> SurfaceError {
    SurfaceError::Canvas(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}
