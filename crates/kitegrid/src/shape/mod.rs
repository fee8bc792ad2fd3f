//! Shapes: finite sets of tiles, with halo/adjacency algebra and boundary chaining.
//!
//! Purpose
//! - `Shape` wraps an ordered set of lattice points so iteration and derived
//!   outputs are deterministic.
//! - `algebra`: halo, edge-halo and the two adjacency predicates.
//! - `boundary`: boundary-edge counting and chaining into closed loops.
//!
//! Conventions
//! - Operations never mutate their inputs; they return new shapes.
//! - Shapes containing points without a tile are caller error and surface as
//!   `GridError::InvalidLatticePoint`.
//! - Halo and boundary work adds small table offsets to member points, so
//!   coordinates must stay at least 4 away from `i64::MIN`/`i64::MAX`.
//!
//! Code cross-refs: `neighbors::{full_neighbors, edge_neighbors}`, `geometry::cell_edges`

mod algebra;
mod boundary;

pub use algebra::{adjacent, edge_adjacent, edge_halo, halo};
pub use boundary::{
    boundary_edges, boundary_loops, extract_boundary, extract_boundary_lattice, signed_area,
};

use std::collections::btree_set;
use std::collections::BTreeSet;

use crate::lattice::{LatticePoint, OffsetVector};

/// Finite set of lattice points; no duplicates, no ordering significance.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Shape {
    points: BTreeSet<LatticePoint>,
}

impl Shape {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn contains(&self, p: &LatticePoint) -> bool {
        self.points.contains(p)
    }

    #[inline]
    pub fn iter(&self) -> btree_set::Iter<'_, LatticePoint> {
        self.points.iter()
    }

    pub fn is_disjoint(&self, other: &Shape) -> bool {
        self.points.is_disjoint(&other.points)
    }

    pub fn intersects(&self, other: &Shape) -> bool {
        !self.is_disjoint(other)
    }

    /// Copy with `p` added.
    pub fn with(&self, p: LatticePoint) -> Shape {
        let mut points = self.points.clone();
        points.insert(p);
        Shape { points }
    }

    pub fn union(&self, other: &Shape) -> Shape {
        self.points.union(&other.points).copied().collect()
    }

    pub fn difference(&self, other: &Shape) -> Shape {
        self.points.difference(&other.points).copied().collect()
    }

    pub fn translate(&self, v: OffsetVector) -> Shape {
        self.points.iter().map(|&p| p + v).collect()
    }

    pub fn to_vec(&self) -> Vec<LatticePoint> {
        self.points.iter().copied().collect()
    }
}

impl FromIterator<LatticePoint> for Shape {
    fn from_iter<I: IntoIterator<Item = LatticePoint>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl FromIterator<(i64, i64)> for Shape {
    fn from_iter<I: IntoIterator<Item = (i64, i64)>>(iter: I) -> Self {
        iter.into_iter().map(LatticePoint::from).collect()
    }
}

impl IntoIterator for Shape {
    type Item = LatticePoint;
    type IntoIter = btree_set::IntoIter<LatticePoint>;
    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

impl<'a> IntoIterator for &'a Shape {
    type Item = &'a LatticePoint;
    type IntoIter = btree_set::Iter<'a, LatticePoint>;
    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
