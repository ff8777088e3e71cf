//! Move application and sequence utilities.
//!
//! - `applier`: pure functions that apply moves and sequences to a state
//! - `scramble`: random sequence generation and sequence inversion
//!
//! All functions here are pure: they take a state by reference and return
//! the new one, leaving ownership of any long-lived state to the caller.

pub mod applier;
pub mod scramble;

pub use applier::{apply_move, apply_notation, apply_notation_sequence, apply_sequence};
pub use scramble::{invert_sequence, random_sequence};
