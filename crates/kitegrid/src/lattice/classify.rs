//! Orientation classifier and translation-equivalence predicate.

use super::table::{ORIENTATIONS, PERIOD, TRANSLATION_V1, TRANSLATION_V2};
use super::types::{LatticePoint, Orientation};

/// Orientation of the tile occupying `p`, or `None` if no tile does.
///
/// Depends only on `(i mod 6, j mod 6)` with non-negative residues.
#[inline]
pub fn classify(p: LatticePoint) -> Option<Orientation> {
    let (rx, ry) = p.residue(PERIOD);
    ORIENTATIONS[(ry * 6 + rx) % 36]
}

/// True iff `p` and `q` differ by a symmetry translation of the tiling:
/// with `(c, d) = q - p`, `d` is even and `c - d ≡ 0 (mod 6)`.
#[inline]
pub fn translatable(p: LatticePoint, q: LatticePoint) -> bool {
    // widened so that any pair of i64 points is admissible
    let c = i128::from(q.i) - i128::from(p.i);
    let d = i128::from(q.j) - i128::from(p.j);
    d.rem_euclid(2) == 0 && (c - d).rem_euclid(i128::from(PERIOD)) == 0
}

/// `p + a·V1 + b·V2` for the two translation generators.
#[inline]
pub fn translate_by_period(p: LatticePoint, a: i64, b: i64) -> LatticePoint {
    p + TRANSLATION_V1 * a + TRANSLATION_V2 * b
}

/// One representative per orientation inside the 6×6 window, lowest `(j, i)` first.
pub fn fundamental_cells() -> [(Orientation, LatticePoint); 6] {
    let mut out = Orientation::ALL.map(|ori| (ori, LatticePoint::default()));
    let mut seen = [false; 6];
    for j in 0..PERIOD {
        for i in 0..PERIOD {
            let p = LatticePoint::new(i, j);
            if let Some(ori) = classify(p) {
                if !seen[ori.index()] {
                    seen[ori.index()] = true;
                    out[ori.index()] = (ori, p);
                }
            }
        }
    }
    out
}
