#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

/// A point in canvas pixel space (origin at the top-left of the surface).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Whether both coordinates are usable numbers.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Axis-aligned extremes of all ink drawn since the last reset.
///
/// Only ever grows through [`BoundingBox::expand`]; `min_x <= max_x` and
/// `min_y <= max_y` hold for every value built by this module.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox {
    /// The square of half-width `radius` centered on `center`.
    #[must_use]
    pub fn around(center: Point, radius: f64) -> Self {
        let radius = radius.abs();
        Self {
            min_x: center.x - radius,
            min_y: center.y - radius,
            max_x: center.x + radius,
            max_y: center.y + radius,
        }
    }

    /// Union of `self` and the square of half-width `radius` around `point`.
    #[must_use]
    pub fn expand(self, point: Point, radius: f64) -> Self {
        let square = Self::around(point, radius);
        Self {
            min_x: self.min_x.min(square.min_x),
            min_y: self.min_y.min(square.min_y),
            max_x: self.max_x.max(square.max_x),
            max_y: self.max_y.max(square.max_y),
        }
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Whether `other` lies entirely inside `self`.
    #[cfg(test)]
    #[must_use]
    pub fn contains(&self, other: &Self) -> bool {
        self.min_x <= other.min_x && self.min_y <= other.min_y && self.max_x >= other.max_x && self.max_y >= other.max_y
    }
}
