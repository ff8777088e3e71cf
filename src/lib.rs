//! # rubiks-engine
//!
//! Facelet-level state engine for a 3x3 Rubik's Cube.
//!
//! ## Model
//!
//! The cube is 48 movable facelets (the 6 centers never move). A state maps
//! each of the 48 positions to the home position of the facelet sitting
//! there; the solved state is the identity. Each of the 12 quarter turns is
//! a fixed permutation of the 48 positions, built at compile time.
//!
//! ## Design Principles
//!
//! 1. **Plain values**: `FaceletState` is `Copy`; moves are static tables.
//!    Any number of cubes can coexist with no shared mutable state.
//!
//! 2. **Atomic moves**: a move either commits entirely or, for bad notation,
//!    fails with no effect.
//!
//! 3. **Deterministic randomness**: scrambles come from a seeded ChaCha8
//!    stream that can be checkpointed and restored.
//!
//! ## Modules
//!
//! - `core`: positions, faces, permutations, moves, state, RNG, configuration
//! - `sequence`: applying moves, scrambling, inverting sequences
//! - `goal`: solved check and progress
//! - `groups`: face groups, pieces, and turn geometry for renderers
//! - `engine`: the `Cube` facade

pub mod core;
pub mod engine;
pub mod goal;
pub mod groups;
pub mod sequence;

// Re-export commonly used types
pub use crate::core::{
    CubeError, CubeRng, CubeRngState, Direction, EngineConfig, Face, FaceletState, Move,
    MoveRecord, MoveSequence, NetCell, NetView, Permutation, Position, Result, FACELET_COUNT,
    MOVE_COUNT,
};

pub use crate::engine::{Cube, CubeCheckpoint};

pub use crate::goal::{is_solved, solved_count, Goal, Progress, Solved};

pub use crate::groups::{
    pieces_of_face, positions_of_face, turn_group, FaceGroup, PieceId, PieceKind, TurnGeometry,
};

pub use crate::sequence::{
    apply_move, apply_notation, apply_notation_sequence, apply_sequence, invert_sequence,
    random_sequence,
};
