//! Boundary extraction: count tile edges, keep the unshared ones, chain them.
//!
//! Edges are keyed on exact lattice vertices. The lattice-to-Cartesian map is
//! injective, so this is the same as keying on Cartesian endpoints without
//! hashing floats.
//!
//! Chaining requires every boundary vertex to meet exactly two boundary edges.
//! A vertex where two tiles touch only at a corner meets four, and is reported
//! as `BranchingBoundary` rather than walked through.

use std::collections::HashMap;

use crate::error::{GridError, Result};
use crate::geometry::{cell_edges, vertex_to_cartesian};
use crate::lattice::{classify, LatticePoint};
use crate::CartesianPoint;

use super::Shape;

type Edge = (LatticePoint, LatticePoint);

#[inline]
fn edge_key(a: LatticePoint, b: LatticePoint) -> Edge {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Kite edges of `s` that belong to exactly one tile, as sorted `(a, b)` with `a < b`.
pub fn boundary_edges(s: &Shape) -> Result<Vec<Edge>> {
    if s.is_empty() {
        return Err(GridError::EmptyShape);
    }
    let mut counts: HashMap<Edge, usize> = HashMap::with_capacity(4 * s.len());
    for &p in s {
        if classify(p).is_none() {
            return Err(GridError::invalid(p));
        }
        for (a, b) in cell_edges(p) {
            *counts.entry(edge_key(a, b)).or_default() += 1;
        }
    }
    let mut edges: Vec<Edge> = counts
        .into_iter()
        .filter_map(|(e, n)| (n == 1).then_some(e))
        .collect();
    edges.sort_unstable();
    Ok(edges)
}

/// All closed boundary loops of `s`, as lattice vertices without the closing repeat.
///
/// Each loop starts at the smaller endpoint of its smallest edge; loops are
/// ordered by that edge.
pub fn boundary_loops(s: &Shape) -> Result<Vec<Vec<LatticePoint>>> {
    let edges = boundary_edges(s)?;
    let mut incident: HashMap<LatticePoint, Vec<usize>> = HashMap::new();
    for (k, &(a, b)) in edges.iter().enumerate() {
        incident.entry(a).or_default().push(k);
        incident.entry(b).or_default().push(k);
    }
    if let Some((&vertex, inc)) = incident
        .iter()
        .filter(|(_, inc)| inc.len() != 2)
        .min_by_key(|(v, _)| **v)
    {
        return Err(GridError::BranchingBoundary {
            vertex,
            degree: inc.len(),
        });
    }

    let mut used = vec![false; edges.len()];
    let mut loops = Vec::new();
    for start in 0..edges.len() {
        if used[start] {
            continue;
        }
        used[start] = true;
        let (first, mut cur) = edges[start];
        let mut ring = vec![first];
        while cur != first {
            ring.push(cur);
            let next = incident
                .get(&cur)
                .and_then(|inc| inc.iter().copied().find(|&k| !used[k]))
                .ok_or(GridError::BranchingBoundary {
                    vertex: cur,
                    degree: 1,
                })?;
            used[next] = true;
            let (a, b) = edges[next];
            cur = if a == cur { b } else { a };
        }
        loops.push(ring);
    }
    tracing::debug!(
        tiles = s.len(),
        edges = edges.len(),
        loops = loops.len(),
        "boundary chained"
    );
    Ok(loops)
}

/// The single boundary loop of `s` as lattice vertices.
pub fn extract_boundary_lattice(s: &Shape) -> Result<Vec<LatticePoint>> {
    let mut loops = boundary_loops(s)?;
    if loops.len() != 1 {
        return Err(GridError::DisconnectedBoundary { loops: loops.len() });
    }
    Ok(loops.swap_remove(0))
}

/// The single boundary loop of `s` as Cartesian vertices (closed polygon, no repeat).
pub fn extract_boundary(s: &Shape) -> Result<Vec<CartesianPoint>> {
    let ring = extract_boundary_lattice(s)?;
    Ok(ring.into_iter().map(vertex_to_cartesian).collect())
}

/// Shoelace area; positive for counterclockwise loops.
pub fn signed_area(ring: &[CartesianPoint]) -> f64 {
    let n = ring.len();
    (0..n)
        .map(|k| {
            let a = ring[k];
            let b = ring[(k + 1) % n];
            a.x * b.y - a.y * b.x
        })
        .sum::<f64>()
        * 0.5
}
