//! Frame extraction: turn the live surface plus the ink bounding box into the
//! fixed-size single-channel buffer the classifier expects.
//!
//! PIPELINE
//! ========
//! 1. [`square_region`] squares the bounding box around its center, pads it,
//!    and clamps the origin so nothing is read at negative coordinates.
//! 2. The region is read from the [`Surface`] as RGBA.
//! 3. The region is resampled to `frame_size` x `frame_size` with a bilinear
//!    (`Triangle`) filter.
//! 4. Each pixel is reduced to one byte according to the [`ChannelPolicy`].
//!
//! The policy also decides the surface background, so the two can never
//! disagree about what "empty" looks like.

#[cfg(test)]
#[path = "frame_test.rs"]
mod frame_test;

use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};
use serde::Deserialize;

use crate::consts::MAX_REGION_SIDE_PX;
use crate::geometry::BoundingBox;
use crate::surface::{Surface, SurfaceError};

#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    #[error(transparent)]
    Surface(#[from] SurfaceError),
    #[error("frame buffer has {actual} bytes, expected {expected}")]
    Buffer { expected: usize, actual: usize },
    #[error("region of {side}px exceeds the {limit}px read limit")]
    RegionTooLarge { side: u32, limit: u32 },
}

/// How an RGBA pixel is reduced to the single channel the model sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelPolicy {
    /// Take the alpha channel. Strokes are drawn on a transparent surface,
    /// so ink reads as 255 and untouched pixels as 0.
    #[default]
    Alpha,
    /// Average red, green and blue (truncating). Strokes are black on an
    /// opaque white surface, so ink reads as 0 and untouched pixels as 255.
    RgbAverage,
}

impl ChannelPolicy {
    /// Color the surface must be cleared to for this policy.
    #[must_use]
    pub fn background(self) -> Rgba<u8> {
        match self {
            Self::Alpha => Rgba([0, 0, 0, 0]),
            Self::RgbAverage => Rgba([255, 255, 255, 255]),
        }
    }

    /// Reduce one pixel to a single byte.
    #[must_use]
    pub fn reduce(self, pixel: Rgba<u8>) -> u8 {
        let [r, g, b, a] = pixel.0;
        match self {
            Self::Alpha => a,
            Self::RgbAverage => {
                let sum = u16::from(r) + u16::from(g) + u16::from(b);
                // Max 765 / 3 = 255, always fits.
                u8::try_from(sum / 3).unwrap_or(u8::MAX)
            }
        }
    }
}

/// Parameters of one extraction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameConfig {
    /// Margin added on each side of the squared box.
    pub padding: f64,
    /// Output side length.
    pub size: u32,
    pub policy: ChannelPolicy,
}

/// The square area of the surface to read, in (fractional) surface pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SquareRegion {
    pub x: f64,
    pub y: f64,
    pub side: f64,
}

impl SquareRegion {
    /// Whole-pixel rectangle `(x, y, side)` covering this region.
    ///
    /// The origin is floored and the side rounded up, so the rectangle always
    /// covers at least one pixel.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn to_pixel_rect(&self) -> (u32, u32, u32) {
        let x = self.x.max(0.0).floor() as u32;
        let y = self.y.max(0.0).floor() as u32;
        let side = self.side.ceil().max(1.0) as u32;
        (x, y, side)
    }
}

/// Square the box around its center and add `padding` on every side.
///
/// The shorter axis is shifted back by half the difference so the square is
/// centered on the original box. Both the centered origin and the final
/// padded origin are clamped at zero.
#[must_use]
pub fn square_region(bbox: &BoundingBox, padding: f64) -> SquareRegion {
    let width = bbox.width();
    let height = bbox.height();
    let mut left = bbox.min_x;
    let mut top = bbox.min_y;

    let side = if width >= height {
        top = (top - (width - height) / 2.0).max(0.0);
        width + 2.0 * padding
    } else {
        left = (left - (height - width) / 2.0).max(0.0);
        height + 2.0 * padding
    };

    SquareRegion { x: (left - padding).max(0.0), y: (top - padding).max(0.0), side }
}

/// A single-channel, row-major pixel buffer handed to the classifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Frame {
    /// Wrap an existing buffer.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError::Buffer`] when `data` is not `width * height` bytes.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self, FrameError> {
        let expected = (width as usize) * (height as usize);
        if data.len() != expected {
            return Err(FrameError::Buffer { expected, actual: data.len() });
        }
        Ok(Self { width, height, data })
    }

    /// Reduce an RGBA image to one channel.
    #[must_use]
    pub fn from_rgba(image: &RgbaImage, policy: ChannelPolicy) -> Self {
        let (width, height) = image.dimensions();
        let data = image.pixels().map(|px| policy.reduce(*px)).collect();
        Self { width, height, data }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixel values, row-major.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Value at `(x, y)`, or `None` outside the frame.
    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get((y as usize) * (self.width as usize) + (x as usize)).copied()
    }
}

/// Extract a frame for `bbox` from `surface`.
///
/// # Errors
///
/// Returns [`FrameError::RegionTooLarge`] when the square is wider than both
/// [`MAX_REGION_SIDE_PX`] and the surface, and [`FrameError::Surface`] when the
/// surface cannot be read.
pub fn extract<S: Surface + ?Sized>(surface: &S, bbox: &BoundingBox, config: &FrameConfig) -> Result<Frame, FrameError> {
    let region = square_region(bbox, config.padding);
    let (x, y, side) = region.to_pixel_rect();

    let (width, height) = surface.size();
    let limit = MAX_REGION_SIDE_PX.max(width.max(height));
    if side > limit {
        return Err(FrameError::RegionTooLarge { side, limit });
    }

    let square = surface.read_region(x, y, side, side)?;
    let resized = imageops::resize(&square, config.size, config.size, FilterType::Triangle);
    let frame = Frame::from_rgba(&resized, config.policy);

    log::debug!("frame: extracted {side}px square at ({x}, {y}) -> {}px", config.size);
    Ok(frame)
}
