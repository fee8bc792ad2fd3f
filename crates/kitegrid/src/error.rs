//! Error type shared by neighbor queries, shape algebra and boundary extraction.

use thiserror::Error;

use crate::lattice::LatticePoint;

/// Errors raised by the kernel. Every error is local to the call that produced it.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GridError {
    /// A neighbor-table lookup hit a point that carries no tile.
    #[error("invalid lattice point {point}: no tile occupies it")]
    InvalidLatticePoint { point: LatticePoint },
    /// Boundary extraction on a shape with no tiles.
    #[error("shape is empty")]
    EmptyShape,
    /// A boundary vertex touches a number of boundary edges other than two.
    #[error("boundary branches at {vertex} ({degree} boundary edges meet)")]
    BranchingBoundary { vertex: LatticePoint, degree: usize },
    /// The boundary consists of several closed loops.
    #[error("boundary is disconnected ({loops} loops)")]
    DisconnectedBoundary { loops: usize },
    /// Generator or region parameters out of range.
    #[error("invalid params: {reason}")]
    InvalidParams { reason: String },
}

impl GridError {
    pub(crate) fn invalid(point: LatticePoint) -> Self {
        Self::InvalidLatticePoint { point }
    }

    pub(crate) fn params(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }

    /// True for the two ways a boundary can fail to be a single simple cycle.
    pub fn is_malformed_boundary(&self) -> bool {
        matches!(
            self,
            Self::BranchingBoundary { .. } | Self::DisconnectedBoundary { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, GridError>;
