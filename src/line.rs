use crate::bounds::BoundingBox;
use crate::cell::CellId;
use crate::geometry::{closer_to, distance};
use crate::point::Point;
use std::fmt;

/// A bounded segment. When installed as a cell border, `neighbor` names the cell on the
/// far side of the edge; transient construction lines carry no neighbor.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Line {
    pub start: Point,
    pub end: Point,
    pub neighbor: Option<CellId>,
}

impl Line {
    pub fn new(start: Point, end: Point) -> Line {
        Line { start, end, neighbor: None }
    }

    pub fn with_neighbor(self, neighbor: CellId) -> Line {
        Line { neighbor: Some(neighbor), ..self }
    }

    /// Same segment traversed the other way, without a neighbor.
    pub fn reversed(&self) -> Line {
        Line::new(self.end, self.start)
    }

    pub fn length(&self) -> f64 {
        distance(&self.start, &self.end)
    }

    /// Treats `start` and `end` as two sites and returns their perpendicular bisector
    /// clipped to `bounds`.
    pub fn bisector(&self, bounds: &BoundingBox, eps: f64) -> Line {
        self.bisector_coords(bounds.min_x, bounds.min_y, bounds.max_x, bounds.max_y, eps)
    }

    /// The bisector is cut at `y = min_y` and `y = max_y`. Where that falls outside
    /// `[min_x, max_x]`, x is clamped and y recomputed, so the result may end on a vertical
    /// side of the rectangle instead. Near-zero `dy` is not guarded beyond the `eps` branches.
    pub fn bisector_coords(&self, min_x: f64, min_y: f64, max_x: f64, max_y: f64, eps: f64) -> Line {
        let mid = self.start.midpoint(&self.end);

        if (self.start.x - self.end.x).abs() < eps {
            return Line::new(Point::new(min_x, mid.y), Point::new(max_x, mid.y));
        }
        if (self.start.y - self.end.y).abs() < eps {
            return Line::new(Point::new(mid.x, min_y), Point::new(mid.x, max_y));
        }

        let m = -(self.end.x - self.start.x) / (self.end.y - self.start.y);
        let c = mid.y - m * mid.x;

        let clip = |y: f64| -> Point {
            let x = (y - c) / m;
            if x < min_x {
                Point::new(min_x, m * min_x + c)
            } else if x > max_x {
                Point::new(max_x, m * max_x + c)
            } else {
                Point::new(x, y)
            }
        };

        Line::new(clip(min_y), clip(max_y))
    }

    /// Intersection of the infinite lines through both segments, accepted only when it lies
    /// inside the `eps`-inflated x and y ranges of both segments. Parallel and collinear
    /// pairs (`|det| <= eps`) never intersect.
    pub fn intersection(&self, other: &Line, eps: f64) -> Option<Point> {
        let (s, e) = (self.start, self.end);
        let (os, oe) = (other.start, other.end);

        let det = (s.x - e.x) * (os.y - oe.y) - (s.y - e.y) * (os.x - oe.x);
        if det.abs() <= eps {
            return None;
        }

        let a = s.x * e.y - s.y * e.x;
        let b = os.x * oe.y - os.y * oe.x;
        let x = (a * (os.x - oe.x) - (s.x - e.x) * b) / det;
        let y = (a * (os.y - oe.y) - (s.y - e.y) * b) / det;

        let within = |v: f64, p: f64, q: f64| v + eps >= p.min(q) && v - eps <= p.max(q);
        if !within(x, s.x, e.x) || !within(x, os.x, oe.x) {
            return None;
        }
        if !within(y, s.y, e.y) || !within(y, os.y, oe.y) {
            return None;
        }
        Some(Point::new(x, y))
    }

    /// Cuts this border at `at`, keeping the part on the side of `site`.
    ///
    /// The endpoint that is strictly closer to `p` than to `site` is replaced by `at`; the
    /// orientation and the neighbor of the line are preserved.
    pub fn truncated(&self, at: Point, p: Point, site: Point, eps: f64) -> Line {
        let keep_start = closer_to(&self.start, p, site).approx_eq(&site, eps);
        let (start, end) = if keep_start { (self.start, at) } else { (at, self.end) };
        Line { start, end, neighbor: self.neighbor }
    }

    /// True if both endpoints are strictly closer to `site` than to `p`.
    pub(crate) fn kept_by(&self, site: Point, p: Point, eps: f64) -> bool {
        closer_to(&self.start, site, p).approx_eq(&site, eps)
            && closer_to(&self.end, site, p).approx_eq(&site, eps)
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} -> {}]", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-7;

    #[test]
    fn test_bisector_axis_aligned() {
        let bounds = BoundingBox::new(0.0, 0.0, 10.0, 10.0);

        // Vertically aligned sites give a horizontal bisector across the full width.
        let h = Line::new(Point::new(2.0, 2.0), Point::new(2.0, 6.0)).bisector(&bounds, EPS);
        assert_eq!(h.start, Point::new(0.0, 4.0));
        assert_eq!(h.end, Point::new(10.0, 4.0));

        // Horizontally aligned sites give a vertical bisector across the full height.
        let v = Line::new(Point::new(2.0, 2.0), Point::new(8.0, 2.0)).bisector(&bounds, EPS);
        assert_eq!(v.start, Point::new(5.0, 0.0));
        assert_eq!(v.end, Point::new(5.0, 10.0));
    }

    #[test]
    fn test_bisector_diagonal() {
        let bounds = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
        // Sites (0, 0) and (10, 10): bisector is y = 10 - x.
        let l = Line::new(Point::new(0.0, 0.0), Point::new(10.0, 10.0)).bisector(&bounds, EPS);
        assert_eq!(l.start, Point::new(10.0, 0.0));
        assert_eq!(l.end, Point::new(0.0, 10.0));
    }

    #[test]
    fn test_bisector_clamps_to_vertical_sides() {
        let bounds = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
        // Sites (5, 4) and (6, 6): slope -0.5 through (5.5, 5), y = -0.5x + 7.75.
        let l = Line::new(Point::new(5.0, 4.0), Point::new(6.0, 6.0)).bisector(&bounds, EPS);
        assert_eq!(l.start, Point::new(10.0, 2.75));
        assert_eq!(l.end, Point::new(0.0, 7.75));
    }

    #[test]
    fn test_intersection() {
        let a = Line::new(Point::new(0.0, 0.0), Point::new(10.0, 10.0));
        let b = Line::new(Point::new(0.0, 10.0), Point::new(10.0, 0.0));
        assert_eq!(a.intersection(&b, EPS), Some(Point::new(5.0, 5.0)));

        // The infinite lines meet at (5, 5), but it lies outside the short segment.
        let short = Line::new(Point::new(0.0, 10.0), Point::new(2.0, 8.0));
        assert_eq!(a.intersection(&short, EPS), None);

        let parallel = Line::new(Point::new(0.0, 1.0), Point::new(10.0, 11.0));
        assert_eq!(a.intersection(&parallel, EPS), None);

        let collinear = Line::new(Point::new(2.0, 2.0), Point::new(4.0, 4.0));
        assert_eq!(a.intersection(&collinear, EPS), None);
    }

    #[test]
    fn test_intersection_at_endpoint() {
        let a = Line::new(Point::new(0.0, 0.0), Point::new(4.0, 0.0));
        let b = Line::new(Point::new(4.0, 0.0), Point::new(4.0, 3.0));
        assert_eq!(a.intersection(&b, EPS), Some(Point::new(4.0, 0.0)));
    }

    #[test]
    fn test_truncated_keeps_orientation() {
        let site = Point::new(0.0, 0.0);
        let p = Point::new(4.0, 0.0);
        let at = Point::new(2.0, 0.0);

        let l = Line::new(Point::new(2.0, -5.0), Point::new(2.0, 5.0)).with_neighbor(7);
        // Horizontal border from near `site` towards `p`.
        let border = Line::new(Point::new(1.0, 0.0), Point::new(3.0, 0.0)).with_neighbor(7);
        let cut = border.truncated(at, p, site, EPS);
        assert_eq!(cut.start, Point::new(1.0, 0.0));
        assert_eq!(cut.end, at);
        assert_eq!(cut.neighbor, Some(7));

        let cut = border.reversed().with_neighbor(3).truncated(at, p, site, EPS);
        assert_eq!(cut.start, at);
        assert_eq!(cut.end, Point::new(1.0, 0.0));
        assert_eq!(cut.neighbor, Some(3));

        assert!(!l.kept_by(site, p, EPS));
        assert!(Line::new(Point::new(-1.0, 1.0), Point::new(1.0, 1.0)).kept_by(site, p, EPS));
    }
}
