//! Core engine types: positions, faces, permutations, moves, state, RNG,
//! configuration.
//!
//! Everything here is plain data. The move catalog is a compile-time
//! constant shared by every cube; a `FaceletState` is a `Copy` value with no
//! shared ownership.

pub mod catalog;
pub mod config;
pub mod error;
pub mod face;
pub mod moves;
pub mod net;
pub mod permutation;
pub mod position;
pub mod rng;
pub mod state;

pub use catalog::{MOVE_COUNT, ORBITS_PER_MOVE};
pub use config::EngineConfig;
pub use error::{CubeError, Result};
pub use face::{Direction, Face};
pub use moves::{Move, MoveRecord, MoveSequence};
pub use net::{NetCell, NetView};
pub use permutation::Permutation;
pub use position::{Position, FACELET_COUNT};
pub use rng::{CubeRng, CubeRngState};
pub use state::FaceletState;
