//! Lattice coordinates and orientation classification.
//!
//! Purpose
//! - Value types for lattice points and offsets (`LatticePoint`, `OffsetVector`).
//! - The constant period-(6,6) residue table and per-orientation tile tables.
//! - `classify` (point → orientation or none) and `translatable`.
//!
//! Conventions
//! - Residues use Euclidean modulo, so negative coordinates classify the same
//!   way as their positive translates.
//! - `classify` and `translatable` accept the full `i64` range. Point and offset
//!   arithmetic (`LatticePoint + OffsetVector`) does not check for overflow.
//! - Tables are immutable statics and safe to share across threads.
//!
//! Code cross-refs: `geometry::cell_vertices`, `neighbors::{edge_neighbors, full_neighbors}`

mod classify;
mod table;
mod types;

pub use classify::{classify, fundamental_cells, translatable, translate_by_period};
pub use table::{TileShape, PERIOD, TILE_SHAPES, TRANSLATION_V1, TRANSLATION_V2};
pub use types::{LatticePoint, OffsetVector, Orientation};
