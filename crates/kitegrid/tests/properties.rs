//! Property tests over the classifier, geometry and shape algebra.

use kitegrid::api::{
    adjacent, boundary_edges, boundary_loops, cartesian_to_lattice, cell_vertices, classify,
    edge_adjacent, edge_halo, edge_neighbors, full_neighbors, grow_shape, halo,
    translatable, translate_by_period, vertex_to_cartesian, vertex_to_lattice, GrowCfg,
    LatticePoint, OffsetVector, ReplayToken, Shape, TRANSLATION_V1, TRANSLATION_V2,
};
use proptest::prelude::*;

fn point() -> impl Strategy<Value = LatticePoint> {
    (-10_000i64..10_000, -10_000i64..10_000).prop_map(|(i, j)| LatticePoint::new(i, j))
}

fn valid_point() -> impl Strategy<Value = LatticePoint> {
    point().prop_filter("no tile", |&p| classify(p).is_some())
}

fn grown(edge_connected: bool) -> impl Strategy<Value = Shape> {
    (1usize..24, any::<u64>()).prop_map(move |(size, seed)| {
        grow_shape(GrowCfg { size, edge_connected }, ReplayToken::new(seed, 0))
            .expect("size >= 1")
    })
}

proptest! {
    #[test]
    fn classify_is_periodic(p in point(), k in -50i64..50, l in -50i64..50) {
        let q = p + OffsetVector::new(6 * k, 6 * l);
        prop_assert_eq!(classify(p), classify(q));
    }

    #[test]
    fn translation_equivalent_points_share_orientation(p in point(), a in -20i64..20, b in -20i64..20) {
        let q = translate_by_period(p, a, b);
        prop_assert!(translatable(p, q));
        prop_assert_eq!(classify(p), classify(q));
    }

    #[test]
    fn vertex_arity(p in point()) {
        let n = cell_vertices(p).len();
        prop_assert_eq!(n, if classify(p).is_some() { 4 } else { 0 });
    }

    #[test]
    fn edge_offsets_subset_of_full(p in valid_point()) {
        let full = full_neighbors(p).unwrap();
        for v in edge_neighbors(p).unwrap() {
            prop_assert!(full.contains(v));
        }
    }

    #[test]
    fn cartesian_round_trip(p in point()) {
        let back = cartesian_to_lattice(vertex_to_cartesian(p));
        prop_assert_eq!(back.x.round() as i64, p.i);
        prop_assert_eq!(back.y.round() as i64, p.j);
        prop_assert!((back - vertex_to_lattice(p)).norm() < 1e-6);
    }

    #[test]
    fn halo_is_disjoint_from_shape(s in grown(false)) {
        let h = halo(&s).unwrap();
        prop_assert!(h.is_disjoint(&s));
        let e = edge_halo(&s).unwrap();
        prop_assert!(e.is_disjoint(&s));
        prop_assert!(e.difference(&h).is_empty());
    }

    #[test]
    fn adjacency_is_symmetric(s in grown(true), r in grown(true), a in -3i64..3, b in -3i64..3) {
        let r = r.translate(TRANSLATION_V1 * a + TRANSLATION_V2 * b);
        prop_assert_eq!(adjacent(&s, &r).unwrap(), adjacent(&r, &s).unwrap());
        prop_assert_eq!(edge_adjacent(&s, &r).unwrap(), edge_adjacent(&r, &s).unwrap());
    }

    #[test]
    fn boundary_of_grown_shape_is_closed_or_malformed(s in grown(true)) {
        match boundary_loops(&s) {
            Ok(loops) => {
                let edges = boundary_edges(&s).unwrap();
                let total: usize = loops.iter().map(|l| l.len()).sum();
                prop_assert_eq!(total, edges.len());
            }
            Err(err) => prop_assert!(err.is_malformed_boundary()),
        }
    }
}
