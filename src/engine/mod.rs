//! Stateful cube facade.
//!
//! `Cube` owns one `FaceletState` together with the RNG used to scramble it
//! and a persistent history of applied moves. The pure functions in
//! `sequence` and `goal` do the actual work.

pub mod cube;

pub use cube::{Cube, CubeCheckpoint};
