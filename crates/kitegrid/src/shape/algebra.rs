//! Halo and adjacency over shapes.

use std::collections::HashSet;

use crate::error::{GridError, Result};
use crate::lattice::{classify, LatticePoint, OffsetVector};
use crate::neighbors::{edge_neighbors, full_neighbors};

use super::Shape;

/// Union of `p + offsets(p)` over `s`, minus `s` itself.
fn ring<'a, F>(s: &Shape, offsets: F) -> Result<Shape>
where
    F: Fn(LatticePoint) -> Result<&'a [OffsetVector]>,
{
    let mut seen: HashSet<LatticePoint> = HashSet::with_capacity(9 * s.len());
    for &p in s {
        for &v in offsets(p)? {
            let q = p + v;
            if !s.contains(&q) {
                seen.insert(q);
            }
        }
    }
    tracing::trace!(shape = s.len(), ring = seen.len(), "halo");
    Ok(seen.into_iter().collect())
}

/// Tiles touching `s` by an edge or a vertex, excluding `s`.
pub fn halo(s: &Shape) -> Result<Shape> {
    ring(s, |p| full_neighbors(p).map(|row| row.as_slice()))
}

/// Tiles sharing a full edge with `s`, excluding `s`.
pub fn edge_halo(s: &Shape) -> Result<Shape> {
    ring(s, |p| edge_neighbors(p).map(|row| row.as_slice()))
}

/// First point of `s` that carries no tile, as an error.
fn check_tiles(s: &Shape) -> Result<()> {
    match s.iter().find(|&&p| classify(p).is_none()) {
        Some(&p) => Err(GridError::invalid(p)),
        None => Ok(()),
    }
}

/// `s` and `r` do not overlap and `s` meets the halo of `r`.
///
/// Both shapes must consist of tiles; otherwise the first offending point of
/// `s`, then of `r`, is reported.
pub fn adjacent(s: &Shape, r: &Shape) -> Result<bool> {
    check_tiles(s)?;
    let around = halo(r)?;
    Ok(s.is_disjoint(r) && s.intersects(&around))
}

/// `s` and `r` do not overlap and `s` meets the edge-halo of `r`.
pub fn edge_adjacent(s: &Shape, r: &Shape) -> Result<bool> {
    check_tiles(s)?;
    let around = edge_halo(r)?;
    Ok(s.is_disjoint(r) && s.intersects(&around))
}
