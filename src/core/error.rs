//! Error types for the engine boundary.
//!
//! The domain is closed: every operation on typed values is total. Errors
//! only arise when freeform input (notation strings, face names, raw facelet
//! vectors) is converted into those types. Nothing is mutated when an error
//! is returned.

use thiserror::Error;

/// Errors raised when converting untyped input into engine values.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CubeError {
    /// A move identifier outside the 12 generators.
    #[error("Invalid move {0:?}, expected one of Wr Wl Yr Yl Br Bl Rr Rl Gr Gl Or Ol")]
    InvalidMove(String),

    /// A face identifier outside the 6 faces.
    #[error("Invalid face {0:?}, expected one of W Y B R G O or a face name")]
    InvalidFace(String),

    /// A face combination that names no piece of the cube.
    #[error("Invalid piece {0:?}, expected 1 to 3 distinct adjacent faces")]
    InvalidPiece(String),

    /// A facelet vector that is not a permutation of the solved labeling.
    #[error("Invalid facelet state: {0}")]
    InvalidState(String),

    /// A token inside a move sequence failed to parse.
    #[error("Invalid move sequence at token {index}: {source}")]
    InvalidSequence {
        index: usize,
        #[source]
        source: Box<CubeError>,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CubeError>;
