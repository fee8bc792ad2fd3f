//! Curated surface for consumers (rendering layers, shape builders).
//!
//! Mirrors the external interface: per-point queries, shape algebra and
//! boundary extraction, plus the region helpers a renderer needs.

// Per-point queries
pub use crate::geometry::{
    cartesian_to_lattice, cell_centroid, cell_edges, cell_vertices, origin_offset, to_cartesian,
    vertex_to_cartesian, vertex_to_lattice,
};
pub use crate::lattice::{
    classify, fundamental_cells, translatable, translate_by_period, LatticePoint, OffsetVector,
    Orientation, TileShape, TRANSLATION_V1, TRANSLATION_V2,
};
pub use crate::neighbors::{edge_neighbors, full_neighbors};
// Shape algebra
pub use crate::shape::{
    adjacent, boundary_edges, boundary_loops, edge_adjacent, edge_halo, extract_boundary,
    extract_boundary_lattice, halo, signed_area, Shape,
};
// Rendering support and generators
pub use crate::grow::{grow_shape, GrowCfg, ReplayToken};
pub use crate::region::{region_tiles, view_bounds, RegionCfg, TilePolygon, ViewBounds};

pub use crate::error::{GridError, Result};
pub use crate::CartesianPoint;
