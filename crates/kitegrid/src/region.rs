//! Rectangular region iteration for rendering layers.
//!
//! A renderer walks `region_tiles`, draws each `TilePolygon`, optionally puts a
//! label at its centroid, and frames the figure with `view_bounds`.

use crate::geometry::{cell_centroid, cell_vertices, vertex_to_cartesian};
use crate::lattice::{classify, LatticePoint, Orientation};
use crate::CartesianPoint;

/// Region extent: `i ∈ [-ni, ni)`, `j ∈ [-nj, nj)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegionCfg {
    pub ni: i64,
    pub nj: i64,
    /// Whether consumers should draw `(i, j)` labels at tile centroids.
    pub labels: bool,
}

impl Default for RegionCfg {
    fn default() -> Self {
        Self {
            ni: 8,
            nj: 8,
            labels: true,
        }
    }
}

/// One drawable kite.
#[derive(Clone, Debug, PartialEq)]
pub struct TilePolygon {
    pub point: LatticePoint,
    pub orientation: Orientation,
    pub vertices: [CartesianPoint; 4],
    pub centroid: CartesianPoint,
}

impl TilePolygon {
    /// Polygon for the tile at `p`, if any.
    pub fn at(p: LatticePoint) -> Option<Self> {
        let orientation = classify(p)?;
        let verts: [LatticePoint; 4] = cell_vertices(p).try_into().ok()?;
        let vertices = verts.map(vertex_to_cartesian);
        Some(Self {
            point: p,
            orientation,
            vertices,
            centroid: cell_centroid(p)?,
        })
    }
}

/// Tiles of the region in i-major order, skipping points without a tile.
pub fn region_tiles(cfg: RegionCfg) -> impl Iterator<Item = TilePolygon> {
    let (ni, nj) = (cfg.ni.max(0), cfg.nj.max(0));
    (-ni..ni)
        .flat_map(move |i| (-nj..nj).map(move |j| LatticePoint::new(i, j)))
        .filter_map(TilePolygon::at)
}

/// Axis-aligned view window `(x_min, x_max, y_min, y_max)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewBounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

/// Symmetric limits around the region with a unit margin.
pub fn view_bounds(cfg: RegionCfg) -> ViewBounds {
    let (ni, nj) = (cfg.ni.max(0) as f64, cfg.nj.max(0) as f64);
    let max_x = ni + 0.5 * nj;
    let max_y = 0.5 * 3f64.sqrt() * nj;
    ViewBounds {
        x_min: -max_x - 1.0,
        x_max: max_x + 1.0,
        y_min: -max_y - 1.0,
        y_max: max_y + 1.0,
    }
}
