//! Neighbor offsets of a tile.
//!
//! Both lookups fail with `GridError::InvalidLatticePoint` on points without a
//! tile; callers pre-filter with `classify` or `cell_vertices`.

use crate::error::{GridError, Result};
use crate::lattice::{classify, LatticePoint, OffsetVector};

/// The 9 offsets of tiles touching the tile at `p` by edge or vertex.
#[inline]
pub fn full_neighbors(p: LatticePoint) -> Result<&'static [OffsetVector; 9]> {
    let ori = classify(p).ok_or_else(|| GridError::invalid(p))?;
    Ok(&ori.shape().full_neighbors)
}

/// The 4 offsets of tiles sharing a full edge with the tile at `p`.
#[inline]
pub fn edge_neighbors(p: LatticePoint) -> Result<&'static [OffsetVector; 4]> {
    let ori = classify(p).ok_or_else(|| GridError::invalid(p))?;
    Ok(&ori.shape().edge_neighbors)
}
