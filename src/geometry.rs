//! Stateless numeric predicates on points.

use crate::point::Point;

/// Returns whichever of `a` and `b` is strictly closer to `to`. Ties resolve to `b`.
pub fn closer_to(to: &Point, a: Point, b: Point) -> Point {
    if dist_squared(to, &a) < dist_squared(to, &b) { a } else { b }
}

/// Twice the signed area of the triangle `(p1, p2, p3)`.
/// Positive when `p3` lies to the left of the directed line `p1 -> p2`.
pub fn cross_product(p1: &Point, p2: &Point, p3: &Point) -> f64 {
    (p2.x - p1.x) * (p3.y - p1.y) - (p2.y - p1.y) * (p3.x - p1.x)
}

pub fn distance(a: &Point, b: &Point) -> f64 {
    dist_squared(a, b).sqrt()
}

pub fn dist_squared(a: &Point, b: &Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    dx * dx + dy * dy
}
