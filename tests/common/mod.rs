#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use voronoi_inc::{CellId, Point, VoronoiDiagram};

/// Exact structural copy of a diagram: ids, generators and border lists, bit for bit.
pub type Snapshot = Vec<(CellId, [f64; 2], Vec<([f64; 2], [f64; 2], Option<CellId>)>)>;

pub fn snapshot(diagram: &VoronoiDiagram) -> Snapshot {
    diagram
        .cells()
        .iter()
        .map(|c| {
            let borders = c
                .borders()
                .iter()
                .map(|l| (l.start.to_array(), l.end.to_array(), l.neighbor))
                .collect();
            (c.id(), c.generator().to_array(), borders)
        })
        .collect()
}

pub fn random_points(seed: u64, count: usize, size: f64) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| Point::new(rng.gen_range(0.0..size), rng.gen_range(0.0..size)))
        .collect()
}

/// Generator nearest to `q` by exhaustive search.
pub fn brute_force_nearest(diagram: &VoronoiDiagram, q: Point) -> Point {
    let mut best = diagram.cells()[0].generator();
    for cell in diagram.cells() {
        let g = cell.generator();
        if voronoi_inc::geometry::dist_squared(&g, &q) < voronoi_inc::geometry::dist_squared(&best, &q) {
            best = g;
        }
    }
    best
}
