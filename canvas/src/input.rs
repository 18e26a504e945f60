//! Input model: the pointer tracker and keyboard shortcuts.
//!
//! `InputTracker` is the state carried between pointer-down and pointer-up:
//! whether a stroke is in progress, where the previous pointer sample was,
//! and the running bounding box of everything drawn since the last reset.
//! It never touches the surface itself; it returns the stroke segments the
//! engine should paint.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::geometry::{BoundingBox, Point};

/// A straight stroke segment produced by one qualifying pointer move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

/// Pointer state for the drawing surface.
#[derive(Debug, Clone)]
pub struct InputTracker {
    brush_radius: f64,
    is_drawing: bool,
    last_point: Option<Point>,
    bounding_box: Option<BoundingBox>,
}

impl InputTracker {
    /// Create an idle tracker whose bounding box grows by `brush_radius`
    /// around every sampled point.
    #[must_use]
    pub fn new(brush_radius: f64) -> Self {
        Self { brush_radius, is_drawing: false, last_point: None, bounding_box: None }
    }

    /// Start a stroke at `point`. Returns `false` (and changes nothing) when
    /// the point is not finite.
    pub fn pointer_down(&mut self, point: Point) -> bool {
        if !point.is_finite() {
            return false;
        }
        self.is_drawing = true;
        self.last_point = Some(point);
        true
    }

    /// Continue the current stroke to `point`.
    ///
    /// Returns the segment to paint, or `None` when no stroke is in progress
    /// or the point is not finite. The bounding box only grows here, never on
    /// pointer-down.
    pub fn pointer_move(&mut self, point: Point) -> Option<Segment> {
        if !self.is_drawing || !point.is_finite() {
            return None;
        }

        let from = self.last_point.unwrap_or(point);
        self.last_point = Some(point);
        self.bounding_box = Some(match self.bounding_box {
            Some(bbox) => bbox.expand(point, self.brush_radius),
            None => BoundingBox::around(point, self.brush_radius),
        });

        Some(Segment { from, to: point })
    }

    /// End the current stroke.
    pub fn pointer_up(&mut self) {
        self.is_drawing = false;
    }

    /// The pointer left the surface; treated exactly like pointer-up.
    pub fn pointer_leave(&mut self) {
        self.is_drawing = false;
    }

    /// Forget the stroke and the bounding box.
    pub fn reset(&mut self) {
        self.is_drawing = false;
        self.last_point = None;
        self.bounding_box = None;
    }

    #[must_use]
    pub fn is_drawing(&self) -> bool {
        self.is_drawing
    }

    #[must_use]
    pub fn last_point(&self) -> Option<Point> {
        self.last_point
    }

    #[must_use]
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        self.bounding_box
    }
}

/// Keyboard shortcuts for the session controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    /// Wipe the drawing and the current guess.
    Clear,
    /// Clear, then pick a new target word.
    Skip,
    /// Leave the game. The control is shown disabled and does nothing.
    Exit,
}

impl Shortcut {
    /// Map a key name as reported by the browser (`KeyboardEvent.key`).
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "c" | "C" => Some(Self::Clear),
            "s" | "S" => Some(Self::Skip),
            "Escape" => Some(Self::Exit),
            _ => None,
        }
    }

    /// Label shown in the control's keyboard hint.
    #[must_use]
    pub fn hint(self) -> &'static str {
        match self {
            Self::Clear => "C",
            Self::Skip => "S",
            Self::Exit => "esc",
        }
    }
}
