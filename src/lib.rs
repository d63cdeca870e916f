//! # voronoi_inc
//!
//! `voronoi_inc` builds a planar Voronoi diagram one site at a time. After every insertion the
//! diagram holds the exact partition of the plane into convex cells, each cell containing the
//! points closer to its generator than to any other. It can be used from Rust as well as
//! compiled to WebAssembly (WASM).
//!
//! ## Features
//!
//! - **Incremental**: Each insertion only touches the cells around the new site.
//! - **Atomic**: A rejected insertion (duplicate site or degenerate geometry) leaves every cell
//!   exactly as it was.
//! - **Neighbor graph**: Every border names the adjacent cell, and every border has a mirrored
//!   twin in that cell.
//! - **WASM-first**: A `wasm-bindgen` wrapper exposes the diagram to JavaScript and TypeScript.
//!
//! ## Main Interface
//!
//! The primary entry point is the [`VoronoiDiagram`] struct:
//!
//! ```
//! use voronoi_inc::{Point, VoronoiDiagram};
//!
//! let mut diagram = VoronoiDiagram::new(600.0).unwrap();
//! assert!(diagram.add_point(Point::new(300.0, 300.0)));
//! assert!(!diagram.add_point(Point::new(300.0, 300.0)));
//! assert_eq!(diagram.cells().len(), 4);
//! ```

mod bounds;
mod cell;
mod config;
mod diagram;
mod error;
pub mod geometry;
mod line;
mod point;
mod wasm;

pub use bounds::BoundingBox;
pub use cell::Cell;
pub use cell::CellId;
pub use cell::SENTINEL_COUNT;
pub use config::DiagramConfig;
pub use diagram::InsertionStats;
pub use diagram::VoronoiDiagram;
pub use error::ConfigError;
pub use error::InsertError;
pub use error::TopologyError;
pub use line::Line;
pub use point::DEFAULT_EPSILON;
pub use point::Point;
pub use wasm::CellWasm;
pub use wasm::VoronoiDiagramWasm;
