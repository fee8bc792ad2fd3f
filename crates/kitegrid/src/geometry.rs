//! Tile geometry: origins, kite vertices and the Cartesian embedding.
//!
//! Geometry queries degrade gracefully: an empty lattice point has a zero
//! origin offset and no vertices. Neighbor queries (see `neighbors`) fail
//! instead.

use nalgebra::{matrix, Matrix2, Vector2};

use crate::lattice::{classify, LatticePoint, OffsetVector};
use crate::CartesianPoint;

const HALF_SQRT3: f64 = 0.866_025_403_784_438_6;

/// Basis of the triangular lattice in the Euclidean plane: `(x, y) ↦ (x + y/2, √3/2·y)`.
#[inline]
fn embedding() -> Matrix2<f64> {
    matrix![1.0, 0.5; 0.0, HALF_SQRT3]
}

/// Offset from the tile-local origin to `p`. Zero when `p` carries no tile.
#[inline]
pub fn origin_offset(p: LatticePoint) -> OffsetVector {
    match classify(p) {
        Some(ori) => ori.shape().origin,
        None => OffsetVector::ZERO,
    }
}

/// The four kite vertices of the tile at `p` in table winding order; empty if none.
pub fn cell_vertices(p: LatticePoint) -> Vec<LatticePoint> {
    match classify(p) {
        Some(ori) => {
            let shape = ori.shape();
            let local = p - shape.origin;
            shape.polygon.iter().map(|&v| local + v).collect()
        }
        None => Vec::new(),
    }
}

/// Directed kite edges `(v_k, v_{k+1})`, closing back to the first vertex.
pub fn cell_edges(p: LatticePoint) -> Vec<(LatticePoint, LatticePoint)> {
    let verts = cell_vertices(p);
    let n = verts.len();
    (0..n).map(|k| (verts[k], verts[(k + 1) % n])).collect()
}

/// Euclidean projection of a (possibly fractional) lattice-space point.
#[inline]
pub fn to_cartesian(p: Vector2<f64>) -> CartesianPoint {
    embedding() * p
}

/// Inverse of [`to_cartesian`].
#[inline]
pub fn cartesian_to_lattice(c: CartesianPoint) -> Vector2<f64> {
    let y = c.y / HALF_SQRT3;
    Vector2::new(c.x - 0.5 * y, y)
}

/// Lattice vertex as a lattice-space point. Vertices are lattice points in this
/// tiling, so this is the identity up to the float conversion.
#[inline]
pub fn vertex_to_lattice(v: LatticePoint) -> Vector2<f64> {
    Vector2::new(v.i as f64, v.j as f64)
}

/// Shorthand for `to_cartesian(vertex_to_lattice(v))`.
#[inline]
pub fn vertex_to_cartesian(v: LatticePoint) -> CartesianPoint {
    to_cartesian(vertex_to_lattice(v))
}

/// Mean of the Cartesian kite vertices (label anchor for renderers).
pub fn cell_centroid(p: LatticePoint) -> Option<CartesianPoint> {
    let verts = cell_vertices(p);
    if verts.is_empty() {
        return None;
    }
    let sum = verts
        .iter()
        .fold(CartesianPoint::zeros(), |acc, &v| acc + vertex_to_cartesian(v));
    Some(sum / verts.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lattice::{Orientation, TRANSLATION_V1};
    use nalgebra::vector;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn p(i: i64, j: i64) -> LatticePoint {
        LatticePoint::new(i, j)
    }

    #[test]
    fn east_kite_vertices() {
        assert_eq!(classify(p(1, 0)), Some(Orientation::E));
        assert_eq!(origin_offset(p(1, 0)), OffsetVector::new(1, 0));
        assert_eq!(
            cell_vertices(p(1, 0)),
            vec![p(0, 0), p(2, -1), p(2, 0), p(1, 1)]
        );
    }

    #[test]
    fn invalid_point_has_no_geometry() {
        assert_eq!(classify(p(0, 0)), None);
        assert_eq!(origin_offset(p(0, 0)), OffsetVector::ZERO);
        assert!(cell_vertices(p(0, 0)).is_empty());
        assert!(cell_edges(p(0, 0)).is_empty());
        assert!(cell_centroid(p(0, 0)).is_none());
    }

    #[test]
    fn vertex_arity_over_window() {
        for j in -7..7 {
            for i in -7..7 {
                let n = cell_vertices(p(i, j)).len();
                match classify(p(i, j)) {
                    Some(_) => assert_eq!(n, 4),
                    None => assert_eq!(n, 0),
                }
            }
        }
    }

    #[test]
    fn translated_tiles_are_translated_kites() {
        let a = p(1, 0);
        let b = a + TRANSLATION_V1;
        let va = cell_vertices(a);
        let vb = cell_vertices(b);
        for (x, y) in va.iter().zip(vb.iter()) {
            assert_eq!(*y - *x, TRANSLATION_V1);
        }
    }

    #[test]
    fn edges_close_the_kite() {
        let edges = cell_edges(p(1, 0));
        assert_eq!(edges.len(), 4);
        assert_eq!(edges[3], (p(1, 1), p(0, 0)));
    }

    #[test]
    fn cartesian_embedding_basis() {
        let c = to_cartesian(vector![1.0, 0.0]);
        assert!((c - vector![1.0, 0.0]).norm() < 1e-12);
        let c = to_cartesian(vector![0.0, 1.0]);
        assert!((c - vector![0.5, 3f64.sqrt() / 2.0]).norm() < 1e-12);
        // kite edges have lengths √3, 1, 1, √3
        let v: Vec<_> = cell_vertices(p(1, 0))
            .into_iter()
            .map(vertex_to_cartesian)
            .collect();
        let len = |a: usize, b: usize| (v[a] - v[b]).norm();
        assert!((len(0, 1) - 3f64.sqrt()).abs() < 1e-12);
        assert!((len(1, 2) - 1.0).abs() < 1e-12);
        assert!((len(2, 3) - 1.0).abs() < 1e-12);
        assert!((len(3, 0) - 3f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn cartesian_round_trip_seeded() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let q = p(rng.gen_range(-1000..1000), rng.gen_range(-1000..1000));
            let back = cartesian_to_lattice(vertex_to_cartesian(q));
            assert!((back - vertex_to_lattice(q)).norm() < 1e-9);
            assert_eq!(back.x.round() as i64, q.i);
            assert_eq!(back.y.round() as i64, q.j);
        }
    }

    #[test]
    fn centroid_is_inside_bounding_box() {
        let c = cell_centroid(p(1, 0)).unwrap();
        // E kite spans x ∈ [0, 2], y ∈ [-√3/2, √3/2]
        assert!(c.x > 0.0 && c.x < 2.0);
        assert!(c.y.abs() < 1e-12);
    }
}
