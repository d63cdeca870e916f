use crate::bounds::BoundingBox;
use crate::cell::{Cell, CellId, SENTINEL_COUNT};
use crate::config::DiagramConfig;
use crate::error::{ConfigError, InsertError, TopologyError};
use crate::geometry::{cross_product, dist_squared};
use crate::line::Line;
use crate::point::Point;
use rayon::prelude::*;
use std::collections::HashSet;

/// Counters of insertion outcomes since construction or the last [`VoronoiDiagram::clear`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InsertionStats {
    pub inserted: usize,
    pub duplicates: usize,
    pub degenerate: usize,
}

/// An incrementally built planar Voronoi diagram.
///
/// The diagram starts with three sentinel cells whose generators lie far outside the visible
/// boundary. Every accepted site carves exactly one new cell out of the existing cells; cells
/// are never removed individually.
///
/// Cells live in an append-only arena sorted by id. Borders refer to their neighbors by id,
/// which is resolved through the arena.
#[derive(Debug, Clone)]
pub struct VoronoiDiagram {
    config: DiagramConfig,
    boundary: BoundingBox,
    bisector_bound: BoundingBox,
    seed: Vec<Cell>,
    cells: Vec<Cell>,
    id_cell: CellId,
    stats: InsertionStats,
}

/// Replacement borders of one cell cut by the bisector of a new site.
struct CellSplit {
    replacement: Vec<Line>,
    /// Border of the new cell, oriented with the new site on its left.
    shared: Line,
    /// Cell the walk continues into.
    exit: CellId,
}

impl VoronoiDiagram {
    /// Creates a diagram whose visible boundary is the square `(0, 0)..(size, size)`.
    pub fn new(size: f64) -> Result<Self, ConfigError> {
        Self::with_config(DiagramConfig::new(size))
    }

    pub fn with_config(config: DiagramConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let (seed, bisector_bound) = setup(&config)?;
        Ok(Self {
            boundary: config.boundary(),
            bisector_bound,
            id_cell: seed.len(),
            cells: seed.clone(),
            seed,
            config,
            stats: InsertionStats::default(),
        })
    }

    pub fn config(&self) -> &DiagramConfig {
        &self.config
    }

    /// The visible region collaborators draw in.
    pub fn boundary(&self) -> BoundingBox {
        self.boundary
    }

    /// The oversized rectangle insertion bisectors are clipped to.
    pub fn bisector_bound(&self) -> BoundingBox {
        self.bisector_bound
    }

    /// Upper extent of the boundary.
    pub fn size(&self) -> f64 {
        self.boundary.max_x
    }

    /// All cells in insertion order, the three sentinels first.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of cells, sentinels included.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Number of inserted sites.
    pub fn site_count(&self) -> usize {
        self.cells.len().saturating_sub(SENTINEL_COUNT)
    }

    pub fn stats(&self) -> InsertionStats {
        self.stats
    }

    pub fn cell(&self, id: CellId) -> Option<&Cell> {
        self.index_of(id).map(|idx| &self.cells[idx])
    }

    /// Discards every inserted cell and reseeds the sentinels. The id counter restarts after
    /// the sentinel ids.
    pub fn clear(&mut self) {
        self.cells = self.seed.clone();
        self.id_cell = self.seed.len();
        self.stats = InsertionStats::default();
    }

    /// Returns the cell whose generator is nearest to `p`.
    pub fn find_cell(&self, p: Point) -> Option<&Cell> {
        self.locate(p).map(|idx| &self.cells[idx])
    }

    /// Inserts a site. Returns false, leaving every cell untouched, if the site duplicates an
    /// existing generator or the insertion degenerates.
    pub fn add_point(&mut self, p: Point) -> bool {
        self.try_add_point(p).is_ok()
    }

    /// Inserts every point in order and returns how many were accepted.
    pub fn insert_all<I>(&mut self, points: I) -> usize
    where
        I: IntoIterator<Item = Point>,
    {
        points.into_iter().filter(|&p| self.add_point(p)).count()
    }

    /// Inserts a site and returns the id of its new cell.
    ///
    /// The id counter advances even when the insertion is rejected, so ids may have gaps.
    pub fn try_add_point(&mut self, p: Point) -> Result<CellId, InsertError> {
        let new_id = self.id_cell;
        self.id_cell += 1;

        let result = self.insert(p, new_id);
        match &result {
            Ok(id) => {
                self.stats.inserted += 1;
                tracing::debug!(cell = id, x = p.x, y = p.y, "add_point: inserted");
            }
            Err(e) if e.is_degenerate() => {
                self.stats.degenerate += 1;
                tracing::debug!(x = p.x, y = p.y, error = %e, "add_point: degenerate, rolled back");
            }
            Err(e) => {
                self.stats.duplicates += 1;
                tracing::debug!(x = p.x, y = p.y, error = %e, "add_point: duplicate site");
            }
        }
        result
    }

    /// Checks that every border has a mirrored border in its neighbor (endpoints reversed
    /// within `tolerance`, neighbor pointing back) and that the total border count is even.
    pub fn validate(&self, tolerance: f64) -> Result<(), TopologyError> {
        let total: usize = self.cells.iter().map(|c| c.borders.len()).sum();
        if total % 2 != 0 {
            return Err(TopologyError::OddBorderCount(total));
        }
        self.cells
            .par_iter()
            .try_for_each(|cell| self.validate_cell(cell, tolerance))
    }

    fn validate_cell(&self, cell: &Cell, tolerance: f64) -> Result<(), TopologyError> {
        for (border, line) in cell.borders.iter().enumerate() {
            let neighbor = line
                .neighbor
                .ok_or(TopologyError::MissingNeighbor { cell: cell.id, border })?;
            let other = self.cell(neighbor).ok_or(TopologyError::UnknownNeighbor {
                cell: cell.id,
                border,
                neighbor,
            })?;
            let mirrored = other.borders.iter().any(|o| {
                o.neighbor == Some(cell.id)
                    && o.start.approx_eq(&line.end, tolerance)
                    && o.end.approx_eq(&line.start, tolerance)
            });
            if !mirrored {
                return Err(TopologyError::UnmatchedBorder { cell: cell.id, border, neighbor });
            }
        }
        Ok(())
    }

    fn index_of(&self, id: CellId) -> Option<usize> {
        self.cells.binary_search_by_key(&id, |c| c.id).ok()
    }

    /// Hill climb over the adjacency graph, starting at the newest cell. Each round scans the
    /// neighbors of the current cell and moves to the best strictly closer one.
    fn locate(&self, p: Point) -> Option<usize> {
        let mut current = self.cells.len().checked_sub(1)?;
        let mut best = dist_squared(&self.cells[current].generator, &p);

        loop {
            let mut next = current;
            for line in &self.cells[current].borders {
                let Some(idx) = line.neighbor.and_then(|id| self.index_of(id)) else {
                    continue;
                };
                let d = dist_squared(&self.cells[idx].generator, &p);
                if d < best {
                    best = d;
                    next = idx;
                }
            }
            if next == current {
                return Some(current);
            }
            tracing::trace!(from = self.cells[current].id, to = self.cells[next].id, "find_cell: hop");
            current = next;
        }
    }

    /// Walks the ring of cells cut by the new site. Replacement borders are collected per
    /// visited cell and only committed once the walk is back at its first cell.
    fn insert(&mut self, p: Point, new_id: CellId) -> Result<CellId, InsertError> {
        let first = self.locate(p).ok_or(InsertError::EmptyDiagram)?;
        let first_cell = &self.cells[first];
        if p.approx_eq(&first_cell.generator, self.config.epsilon) {
            return Err(InsertError::DuplicateSite { x: p.x, y: p.y, cell: first_cell.id });
        }

        let mut visited = HashSet::new();
        let mut pending: Vec<(usize, Vec<Line>)> = Vec::new();
        let mut new_borders = Vec::new();
        let mut current = first;

        loop {
            let split = self.split_cell(current, p, new_id)?;
            let id = self.cells[current].id;
            if !visited.insert(id) {
                return Err(InsertError::Revisited { cell: id });
            }
            tracing::trace!(cell = id, next = split.exit, "add_point: split");

            new_borders.push(split.shared);
            pending.push((current, split.replacement));
            current = self
                .index_of(split.exit)
                .ok_or(InsertError::UnknownCell(split.exit))?;
            if current == first {
                break;
            }
        }

        for (idx, borders) in pending {
            self.cells[idx].borders = borders;
        }
        self.cells.push(Cell::with_borders(new_id, p, new_borders));
        Ok(new_id)
    }

    /// Cuts the cell at `idx` by the bisector between `p` and its generator.
    fn split_cell(&self, idx: usize, p: Point, new_id: CellId) -> Result<CellSplit, InsertError> {
        let eps = self.config.epsilon;
        let cell = &self.cells[idx];
        let site = cell.generator;
        let hp = Line::new(p, site).bisector(&self.bisector_bound, eps);

        let mut crossings = 0;
        let mut first_hit: Option<(Point, &Line)> = None;
        let mut shared: Option<(Line, Option<CellId>)> = None;
        let mut replacement = Vec::with_capacity(cell.borders.len() + 1);

        for line in &cell.borders {
            if let Some(hit) = hp.intersection(line, eps) {
                crossings += 1;
                if let Some((i1, l1)) = first_hit {
                    let (edge, exit) = if cross_product(&i1, &hit, &p) > 0.0 {
                        (Line::new(i1, hit), line.neighbor)
                    } else {
                        (Line::new(hit, i1), l1.neighbor)
                    };
                    replacement.push(edge.reversed().with_neighbor(new_id));
                    replacement.push(line.truncated(hit, p, site, eps));
                    replacement.push(l1.truncated(i1, p, site, eps));
                    shared = Some((edge.with_neighbor(cell.id), exit));
                } else {
                    first_hit = Some((hit, line));
                }
            }
            if line.kept_by(site, p, eps) {
                replacement.push(*line);
            }
        }

        let Some((shared, exit)) = shared.filter(|_| crossings == 2) else {
            return Err(InsertError::CrossingCount { cell: cell.id, crossings });
        };
        let exit = exit.ok_or(InsertError::OpenBorder { cell: cell.id })?;
        Ok(CellSplit { replacement, shared, exit })
    }
}

/// Seeds the three sentinel cells and returns them with the insertion clipping rectangle.
///
/// The sentinel bisectors are clipped to an even larger construction rectangle and meet near
/// the circumcenter of the sentinel triangle; each cell receives the two rays leaving it.
fn setup(config: &DiagramConfig) -> Result<(Vec<Cell>, BoundingBox), ConfigError> {
    let eps = config.epsilon;
    let boundary = config.boundary();
    let (x_range, y_range) = (boundary.width(), boundary.height());
    let (x_super, y_super) = (x_range * config.super_factor, y_range * config.super_factor);

    let bisector_bound =
        boundary.expanded(x_super * config.bisector_factor, y_super * config.bisector_factor);
    let init_bound = boundary.expanded(x_super * config.init_factor, y_super * config.init_factor);

    let sites = [
        Point::new(boundary.min_x + x_range / 2.0, boundary.min_y - y_super + y_range / 2.0),
        Point::new(boundary.max_x + x_super - x_range / 2.0, boundary.max_y + y_super / 2.0),
        Point::new(boundary.min_x - x_super + x_range / 2.0, boundary.max_y + y_super / 2.0),
    ];
    let mut cells: Vec<Cell> = sites
        .iter()
        .enumerate()
        .map(|(id, &generator)| Cell::new(id, generator))
        .collect();

    let l1 = Line::new(sites[0], sites[1]).bisector(&init_bound, eps);
    let l2 = Line::new(sites[1], sites[2]).bisector(&init_bound, eps);
    let l3 = Line::new(sites[0], sites[2]).bisector(&init_bound, eps);

    let i1 = l1.intersection(&l2, eps).ok_or(ConfigError::DegenerateSeed(1, 2))?;
    let i2 = l2.intersection(&l3, eps).ok_or(ConfigError::DegenerateSeed(2, 3))?;
    let i3 = l1.intersection(&l3, eps).ok_or(ConfigError::DegenerateSeed(1, 3))?;

    install_pair(&mut cells, 0, 1, Line::new(l1.start, i1));
    install_pair(&mut cells, 1, 2, Line::new(i2, l2.end));
    install_pair(&mut cells, 0, 2, Line::new(l3.start, i3));

    Ok((cells, bisector_bound))
}

/// Installs `segment` as a border of both cells, each copy oriented with its own generator
/// on the left and naming the other cell.
fn install_pair(cells: &mut [Cell], a: usize, b: usize, segment: Line) {
    let (for_a, for_b) = if cross_product(&segment.start, &segment.end, &cells[a].generator) > 0.0 {
        (segment, segment.reversed())
    } else {
        (segment.reversed(), segment)
    };
    let (id_a, id_b) = (cells[a].id, cells[b].id);
    cells[a].borders.push(for_a.with_neighbor(id_b));
    cells[b].borders.push(for_b.with_neighbor(id_a));
}
