use crate::line::Line;
use crate::point::Point;
use std::hash::{Hash, Hasher};

/// Identifier of a cell. Assigned once at creation, never reused.
pub type CellId = usize;

/// Number of seed cells created by the diagram before any site is inserted.
pub const SENTINEL_COUNT: usize = 3;

/// A Voronoi cell: a generator and the borders separating it from its neighbors.
///
/// Borders are stored unordered, but each one is oriented with the generator on its left,
/// so for closed cells the shoelace sums over the border list are well defined.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub(crate) id: CellId,
    pub(crate) generator: Point,
    pub(crate) borders: Vec<Line>,
}

impl Cell {
    pub fn new(id: CellId, generator: Point) -> Cell {
        Cell { id, generator, borders: Vec::new() }
    }

    pub(crate) fn with_borders(id: CellId, generator: Point, borders: Vec<Line>) -> Cell {
        Cell { id, generator, borders }
    }

    pub fn id(&self) -> CellId {
        self.id
    }

    pub fn generator(&self) -> Point {
        self.generator
    }

    pub fn borders(&self) -> &[Line] {
        &self.borders
    }

    /// Neighbor id for each border, in border order.
    pub fn neighbors(&self) -> Vec<Option<CellId>> {
        self.borders.iter().map(|l| l.neighbor).collect()
    }

    /// True for the three seed cells whose regions are unbounded.
    pub fn is_sentinel(&self) -> bool {
        self.id < SENTINEL_COUNT
    }

    /// Area of the cell polygon. Meaningless for sentinel cells.
    pub fn area(&self) -> f64 {
        let twice: f64 = self
            .borders
            .iter()
            .map(|l| l.start.x * l.end.y - l.end.x * l.start.y)
            .sum();
        (twice * 0.5).abs()
    }

    /// Centroid of the cell polygon. Falls back to the generator for collapsed cells.
    pub fn centroid(&self) -> Point {
        let mut cx = 0.0;
        let mut cy = 0.0;
        let mut area = 0.0;

        for l in &self.borders {
            let cross = l.start.x * l.end.y - l.end.x * l.start.y;
            area += cross;
            cx += (l.start.x + l.end.x) * cross;
            cy += (l.start.y + l.end.y) * cross;
        }

        if area.abs() < 1e-9 {
            return self.generator;
        }

        let factor = 1.0 / (3.0 * area);
        Point::new(cx * factor, cy * factor)
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Cell {}

impl Hash for Cell {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
