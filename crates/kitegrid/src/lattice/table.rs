//! Constant tile data: residue lookup and per-orientation offset tables.
//!
//! Order and sign of every offset are load-bearing: polygon offsets define
//! the winding used by boundary extraction, and neighbor rows are consumed in
//! table order.

use super::types::{OffsetVector, Orientation};

/// Period of the classification in both axes.
pub const PERIOD: i64 = 6;

const fn o(di: i64, dj: i64) -> OffsetVector {
    OffsetVector::new(di, dj)
}

use Orientation::{E, NE, NW, SE, SW, W};

/// Residue table, indexed by `ry * 6 + rx`. `None` marks points without a tile.
#[rustfmt::skip]
pub(crate) const ORIENTATIONS: [Option<Orientation>; 36] = [
    None,     Some(E),  None,     None,     None,     Some(W),
    Some(NE), None,     Some(SW), Some(SE), None,     Some(NW),
    None,     Some(W),  None,     Some(E),  None,     None,
    None,     Some(NW), Some(NE), None,     Some(SW), Some(SE),
    None,     None,     None,     Some(W),  None,     Some(E),
    Some(SW), Some(SE), None,     Some(NW), Some(NE), None,
];

/// Fixed geometry and neighborhood of one orientation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TileShape {
    /// Offset from the tile-local origin to the lattice point naming the tile.
    pub origin: OffsetVector,
    /// Kite vertices relative to the tile-local origin, in winding order.
    pub polygon: [OffsetVector; 4],
    /// Tiles sharing a full edge.
    pub edge_neighbors: [OffsetVector; 4],
    /// Tiles sharing an edge or a vertex.
    pub full_neighbors: [OffsetVector; 9],
}

/// Per-orientation tables, indexed by [`Orientation::index`].
#[rustfmt::skip]
pub static TILE_SHAPES: [TileShape; 6] = [
    // E
    TileShape {
        origin: o(1, 0),
        polygon: [o(0, 0), o(2, -1), o(2, 0), o(1, 1)],
        edge_neighbors: [o(1, 1), o(2, -1), o(-1, 1), o(0, -1)],
        full_neighbors: [
            o(1, 1), o(2, -1), o(-1, 1), o(0, -1), o(0, 2),
            o(2, -2), o(-2, 0), o(-2, 1), o(-1, -1),
        ],
    },
    // NE
    TileShape {
        origin: o(0, 1),
        polygon: [o(0, 0), o(1, 1), o(0, 2), o(-1, 2)],
        edge_neighbors: [o(-1, 2), o(1, 1), o(-1, 0), o(1, -1)],
        full_neighbors: [
            o(-1, 2), o(1, 1), o(-1, 0), o(1, -1), o(-2, 2),
            o(2, 0), o(0, -2), o(-1, -1), o(1, -2),
        ],
    },
    // NW
    TileShape {
        origin: o(-1, 1),
        polygon: [o(0, 0), o(-1, 2), o(-2, 2), o(-2, 1)],
        edge_neighbors: [o(-2, 1), o(-1, 2), o(0, -1), o(1, 0)],
        full_neighbors: [
            o(-2, 1), o(-1, 2), o(0, -1), o(1, 0), o(-2, 0),
            o(0, 2), o(2, -2), o(1, -2), o(2, -1),
        ],
    },
    // W
    TileShape {
        origin: o(-1, 0),
        polygon: [o(0, 0), o(-2, 1), o(-2, 0), o(-1, -1)],
        edge_neighbors: [o(-1, -1), o(-2, 1), o(1, -1), o(0, 1)],
        full_neighbors: [
            o(-1, -1), o(-2, 1), o(1, -1), o(0, 1), o(0, -2),
            o(-2, 2), o(2, 0), o(2, -1), o(1, 1),
        ],
    },
    // SW
    TileShape {
        origin: o(0, -1),
        polygon: [o(0, 0), o(-1, -1), o(0, -2), o(1, -2)],
        edge_neighbors: [o(1, -2), o(-1, -1), o(1, 0), o(-1, 1)],
        full_neighbors: [
            o(1, -2), o(-1, -1), o(1, 0), o(-1, 1), o(2, -2),
            o(-2, 0), o(0, 2), o(1, 1), o(-1, 2),
        ],
    },
    // SE
    TileShape {
        origin: o(1, -1),
        polygon: [o(0, 0), o(1, -2), o(2, -2), o(2, -1)],
        edge_neighbors: [o(2, -1), o(1, -2), o(0, 1), o(-1, 0)],
        full_neighbors: [
            o(2, -1), o(1, -2), o(0, 1), o(-1, 0), o(2, 0),
            o(0, -2), o(-2, 2), o(-1, 2), o(-2, 1),
        ],
    },
];

/// Generators of the tiling's translation group.
pub const TRANSLATION_V1: OffsetVector = o(4, -2);
pub const TRANSLATION_V2: OffsetVector = o(2, 2);

impl Orientation {
    /// Constant table row of this orientation.
    #[inline]
    pub fn shape(self) -> &'static TileShape {
        &TILE_SHAPES[self.index()]
    }
}
