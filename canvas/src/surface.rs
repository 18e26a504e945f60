//! Drawing surface abstraction.
//!
//! The engine paints strokes onto, and reads pixels back from, a [`Surface`].
//! In the browser that is a `<canvas>` element ([`crate::render::CanvasSurface`]);
//! natively and in tests it is a [`RasterSurface`] backed by an
//! [`image::RgbaImage`]. Both follow `getImageData` semantics: pixels
//! outside the surface read back as transparent black.

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

use image::{Rgba, RgbaImage};

use crate::geometry::Point;

/// Stroke color for all ink.
pub const INK: Rgba<u8> = Rgba([0, 0, 0, 255]);

#[derive(Debug, thiserror::Error)]
pub enum SurfaceError {
    #[error("drawing surface is unavailable")]
    Unavailable,
    #[error("canvas call failed: {0}")]
    Canvas(String),
    #[error("pixel buffer has {actual} bytes, expected {expected}")]
    BufferSize { expected: usize, actual: usize },
}

/// A 2D raster that strokes can be drawn onto and pixels read back from.
pub trait Surface {
    /// Surface dimensions in pixels.
    fn size(&self) -> (u32, u32);

    /// Read the `width` x `height` RGBA region whose top-left corner is `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns `Err` when the backing pixels cannot be read.
    fn read_region(&self, x: u32, y: u32, width: u32, height: u32) -> Result<RgbaImage, SurfaceError>;

    /// Start a new path at `point`.
    ///
    /// # Errors
    ///
    /// Returns `Err` when the surface rejects the call.
    fn begin_stroke(&mut self, point: Point) -> Result<(), SurfaceError>;

    /// Extend the current path to `point` and paint it.
    ///
    /// # Errors
    ///
    /// Returns `Err` when the surface rejects the call.
    fn stroke_to(&mut self, point: Point) -> Result<(), SurfaceError>;

    /// Fill the whole surface with `background`.
    ///
    /// # Errors
    ///
    /// Returns `Err` when the surface rejects the call.
    fn clear(&mut self, background: Rgba<u8>) -> Result<(), SurfaceError>;
}

/// In-memory surface that paints round-capped strokes of a fixed width.
#[derive(Debug, Clone)]
pub struct RasterSurface {
    pixels: RgbaImage,
    line_width: f64,
    pen: Option<Point>,
}

impl RasterSurface {
    /// A `width` x `height` surface filled with `background`.
    #[must_use]
    pub fn new(width: u32, height: u32, line_width: f64, background: Rgba<u8>) -> Self {
        Self { pixels: RgbaImage::from_pixel(width, height, background), line_width, pen: None }
    }

    /// Borrow the backing pixels.
    #[must_use]
    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    fn paint_segment(&mut self, from: Point, to: Point) {
        let radius = self.line_width / 2.0;
        let (w, h) = self.pixels.dimensions();
        if w == 0 || h == 0 {
            return;
        }

        let x0 = clamp_index(from.x.min(to.x) - radius, w);
        let x1 = clamp_index(from.x.max(to.x) + radius, w);
        let y0 = clamp_index(from.y.min(to.y) - radius, h);
        let y1 = clamp_index(from.y.max(to.y) + radius, h);

        for y in y0..=y1 {
            for x in x0..=x1 {
                // Sample at the pixel center, like the browser rasterizer.
                let center = Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5);
                if distance_to_segment(center, from, to) <= radius {
                    self.pixels.put_pixel(x, y, INK);
                }
            }
        }
    }
}

impl Surface for RasterSurface {
    fn size(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    fn read_region(&self, x: u32, y: u32, width: u32, height: u32) -> Result<RgbaImage, SurfaceError> {
        let (w, h) = self.pixels.dimensions();
        let mut out = RgbaImage::new(width, height);
        for (dx, dy, px) in out.enumerate_pixels_mut() {
            let sx = x.saturating_add(dx);
            let sy = y.saturating_add(dy);
            if sx < w && sy < h {
                *px = *self.pixels.get_pixel(sx, sy);
            }
        }
        Ok(out)
    }

    fn begin_stroke(&mut self, point: Point) -> Result<(), SurfaceError> {
        self.pen = Some(point);
        Ok(())
    }

    fn stroke_to(&mut self, point: Point) -> Result<(), SurfaceError> {
        let from = self.pen.unwrap_or(point);
        self.paint_segment(from, point);
        self.pen = Some(point);
        Ok(())
    }

    fn clear(&mut self, background: Rgba<u8>) -> Result<(), SurfaceError> {
        for px in self.pixels.pixels_mut() {
            *px = background;
        }
        self.pen = None;
        Ok(())
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn clamp_index(value: f64, len: u32) -> u32 {
    let max = f64::from(len - 1);
    value.floor().clamp(0.0, max) as u32
}

fn distance_to_segment(p: Point, a: Point, b: Point) -> f64 {
    let (dx, dy) = (b.x - a.x, b.y - a.y);
    let len_sq = dx * dx + dy * dy;
    let t = if len_sq > 0.0 {
        (((p.x - a.x) * dx + (p.y - a.y) * dy) / len_sq).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let (cx, cy) = (a.x + t * dx, a.y + t * dy);
    ((p.x - cx).powi(2) + (p.y - cy).powi(2)).sqrt()
}
