use crate::point::Point;
use std::fmt;

/// Axis-aligned rectangle. Invariant: `min_x <= max_x` and `min_y <= max_y`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self { min_x, min_y, max_x, max_y }
    }

    /// Membership test against the rectangle inflated by `eps` on every side.
    pub fn contains(&self, p: &Point, eps: f64) -> bool {
        p.x > self.min_x - eps
            && p.x < self.max_x + eps
            && p.y > self.min_y - eps
            && p.y < self.max_y + eps
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Grows the box by `dx` on the left and right and by `dy` on the top and bottom.
    pub fn expanded(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.min_x - dx, self.min_y - dy, self.max_x + dx, self.max_y + dy)
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[({}, {})->({}, {})", self.min_x, self.min_y, self.max_x, self.max_y)
    }
}
