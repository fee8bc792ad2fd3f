//! Kite-tiling geometry kernel.
//!
//! Points of the integer lattice `(i, j)` are classified into the six kite
//! orientations of a period-(6,6) tiling. Each valid point carries one kite
//! quadrilateral. On top of the per-point queries the crate offers set algebra
//! over finite collections of tiles (`Shape`): halos, adjacency predicates and
//! boundary extraction.
//!
//! Layout
//! - `lattice`: point/offset types, the constant orientation tables, classifier.
//! - `geometry`: tile origins, vertices, Cartesian embedding.
//! - `neighbors`: edge and full neighbor offsets (fail on invalid points).
//! - `shape`: `Shape`, halo/adjacency and boundary chaining.
//! - `region`: rectangular region iteration for renderers.
//! - `grow`: reproducible random polykite growth.

pub mod api;
pub mod error;
pub mod geometry;
pub mod grow;
pub mod lattice;
pub mod neighbors;
pub mod region;
pub mod shape;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{GridError, Result};
pub use lattice::{classify, translatable, LatticePoint, OffsetVector, Orientation};
pub use nalgebra::Vector2 as Vec2;

/// Euclidean projection of a lattice point or vertex.
pub type CartesianPoint = nalgebra::Vector2<f64>;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::{GridError, Result};
    pub use crate::geometry::{cell_centroid, cell_vertices, to_cartesian};
    pub use crate::lattice::{classify, translatable, LatticePoint, OffsetVector, Orientation};
    pub use crate::neighbors::{edge_neighbors, full_neighbors};
    pub use crate::shape::{
        adjacent, edge_adjacent, edge_halo, extract_boundary, extract_boundary_lattice, halo,
        Shape,
    };
    pub use crate::CartesianPoint;
}
