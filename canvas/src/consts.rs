//! Shared numeric constants for the canvas crate.

// ── Capture ─────────────────────────────────────────────────────

/// Half-width of the square added around every tracked point, in canvas pixels.
///
/// Compensates for the stroke width so the crop never clips visible ink.
pub const BRUSH_RADIUS_PX: f64 = 4.0;

/// Margin added on each side of the square crop, in canvas pixels.
pub const SKETCH_PADDING_PX: f64 = 4.0;

/// Upper bound for the configured padding and brush radius, in canvas pixels.
pub const MAX_MARGIN_PX: f64 = 1024.0;

/// Largest square region read back from the surface in one extraction, unless
/// the surface itself is larger.
pub const MAX_REGION_SIDE_PX: u32 = 4096;

/// Stroke width used when drawing on the surface, in canvas pixels.
pub const LINE_WIDTH_PX: f64 = 15.0;

// ── Classification ──────────────────────────────────────────────

/// Minimum interval between two classification requests, in milliseconds.
pub const THROTTLE_MS: f64 = 100.0;

/// Side length of the square frame handed to the classifier.
pub const FRAME_SIZE: u32 = 224;

/// Upper bound for the configured frame size.
pub const MAX_FRAME_SIZE: u32 = 1024;

/// Only the single most likely class is requested from the model.
pub const TOP_K: usize = 1;

/// Image-classification model loaded at session start.
pub const DEFAULT_MODEL: &str = "Xenova/quickdraw-mobilevit-small";
