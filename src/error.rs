use crate::cell::CellId;
use thiserror::Error;

/// Rejected diagram configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("diagram size must be positive and finite, got {0}")]
    InvalidSize(f64),
    #[error("epsilon must be positive and finite, got {0}")]
    InvalidEpsilon(f64),
    #[error("scale factor '{name}' must be positive and finite, got {value}")]
    InvalidFactor { name: &'static str, value: f64 },
    #[error("bisector factor {bisector} must be smaller than init factor {init}")]
    FactorOrder { bisector: f64, init: f64 },
    #[error("sentinel bisectors {0} and {1} do not intersect inside the construction bounds")]
    DegenerateSeed(usize, usize),
}

/// Reason an insertion was rolled back. No cell is modified when one of these is returned.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InsertError {
    #[error("site ({x}, {y}) coincides with the generator of cell {cell}")]
    DuplicateSite { x: f64, y: f64, cell: CellId },
    #[error("bisector crosses the borders of cell {cell} {crossings} times, expected 2")]
    CrossingCount { cell: CellId, crossings: usize },
    #[error("insertion walk revisited cell {cell}")]
    Revisited { cell: CellId },
    #[error("insertion walk left cell {cell} through a border without a neighbor")]
    OpenBorder { cell: CellId },
    #[error("border references unknown cell {0}")]
    UnknownCell(CellId),
    #[error("diagram has no cells to split")]
    EmptyDiagram,
}

impl InsertError {
    /// True for rejections caused by the topology walk rather than by a repeated site.
    pub fn is_degenerate(&self) -> bool {
        !matches!(self, InsertError::DuplicateSite { .. })
    }
}

/// Inconsistency found by [`crate::VoronoiDiagram::validate`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TopologyError {
    #[error("border {border} of cell {cell} has no neighbor")]
    MissingNeighbor { cell: CellId, border: usize },
    #[error("border {border} of cell {cell} names unknown cell {neighbor}")]
    UnknownNeighbor { cell: CellId, border: usize, neighbor: CellId },
    #[error("border {border} of cell {cell} has no mirrored border in cell {neighbor}")]
    UnmatchedBorder { cell: CellId, border: usize, neighbor: CellId },
    #[error("total border count {0} is odd")]
    OddBorderCount(usize),
}
