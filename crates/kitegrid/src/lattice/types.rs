//! Value types of the lattice: points, offsets and orientation tags.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// Integer lattice coordinate `(i, j)` in the triangular basis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LatticePoint {
    pub i: i64,
    pub j: i64,
}

impl LatticePoint {
    #[inline]
    pub const fn new(i: i64, j: i64) -> Self {
        Self { i, j }
    }

    /// Non-negative residues `(i mod 6, j mod 6)`.
    #[inline]
    pub fn residue(self, period: i64) -> (usize, usize) {
        (
            self.i.rem_euclid(period) as usize,
            self.j.rem_euclid(period) as usize,
        )
    }
}

impl From<(i64, i64)> for LatticePoint {
    #[inline]
    fn from((i, j): (i64, i64)) -> Self {
        Self { i, j }
    }
}

impl fmt::Display for LatticePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.i, self.j)
    }
}

/// Relative displacement on the lattice. Not a location by itself.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OffsetVector {
    pub di: i64,
    pub dj: i64,
}

impl OffsetVector {
    pub const ZERO: Self = Self::new(0, 0);

    #[inline]
    pub const fn new(di: i64, dj: i64) -> Self {
        Self { di, dj }
    }
}

impl From<(i64, i64)> for OffsetVector {
    #[inline]
    fn from((di, dj): (i64, i64)) -> Self {
        Self { di, dj }
    }
}

impl Add<OffsetVector> for LatticePoint {
    type Output = LatticePoint;
    #[inline]
    fn add(self, rhs: OffsetVector) -> Self::Output {
        LatticePoint::new(self.i + rhs.di, self.j + rhs.dj)
    }
}

impl Sub<OffsetVector> for LatticePoint {
    type Output = LatticePoint;
    #[inline]
    fn sub(self, rhs: OffsetVector) -> Self::Output {
        LatticePoint::new(self.i - rhs.di, self.j - rhs.dj)
    }
}

impl Sub for LatticePoint {
    type Output = OffsetVector;
    #[inline]
    fn sub(self, rhs: LatticePoint) -> Self::Output {
        OffsetVector::new(self.i - rhs.i, self.j - rhs.j)
    }
}

impl Add for OffsetVector {
    type Output = OffsetVector;
    #[inline]
    fn add(self, rhs: OffsetVector) -> Self::Output {
        OffsetVector::new(self.di + rhs.di, self.dj + rhs.dj)
    }
}

impl Neg for OffsetVector {
    type Output = OffsetVector;
    #[inline]
    fn neg(self) -> Self::Output {
        OffsetVector::new(-self.di, -self.dj)
    }
}

impl Mul<i64> for OffsetVector {
    type Output = OffsetVector;
    #[inline]
    fn mul(self, k: i64) -> Self::Output {
        OffsetVector::new(self.di * k, self.dj * k)
    }
}

/// The six rotated copies of the base kite.
///
/// Absence of a tile is modelled as `Option::None` by [`super::classify`],
/// never as an extra variant here.
#[allow(clippy::upper_case_acronyms)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Orientation {
    E,
    NE,
    NW,
    W,
    SW,
    SE,
}

impl Orientation {
    /// All orientations in table order.
    pub const ALL: [Orientation; 6] = [
        Orientation::E,
        Orientation::NE,
        Orientation::NW,
        Orientation::W,
        Orientation::SW,
        Orientation::SE,
    ];

    /// Row index into the per-orientation tables.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Orientation::E => "E",
            Orientation::NE => "NE",
            Orientation::NW => "NW",
            Orientation::W => "W",
            Orientation::SW => "SW",
            Orientation::SE => "SE",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
