//! Facelet position identifiers.
//!
//! Every movable sticker slot on the cube surface has a fixed `Position` in
//! `0..48`. Facelets are labelled by their home position, so the same type
//! names both a slot and the facelet that belongs there when solved.
//!
//! ## Layout
//!
//! Positions are numbered on the unfolded net, eight per face in row-major
//! order around the fixed center:
//!
//! - `0..8`: White
//! - `8..16`: Red
//! - `16..24`: Yellow
//! - `24..32`: Orange
//! - `32..40`: Blue
//! - `40..48`: Green
//!
//! ```
//! use rubiks_engine::core::{Face, Position};
//!
//! let pos = Position::new(9);
//! assert_eq!(pos.home_face(), Face::Red);
//! assert!(Position::try_new(48).is_none());
//! ```

use serde::{Deserialize, Serialize};

use super::face::Face;

/// Number of movable facelets (6 faces x 8, centers excluded).
pub const FACELET_COUNT: usize = 48;

/// Net order of the face blocks: block `i` owns positions `8*i..8*i+8`.
pub(crate) const NET_BLOCKS: [Face; 6] = [
    Face::White,
    Face::Red,
    Face::Yellow,
    Face::Orange,
    Face::Blue,
    Face::Green,
];

/// A facelet slot, or the facelet whose home is that slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position(pub u8);

impl Position {
    /// Create a position.
    ///
    /// # Panics
    ///
    /// Panics if `index >= 48`; use `try_new` for unchecked input.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        assert!((index as usize) < FACELET_COUNT, "Position out of range");
        Self(index)
    }

    /// Create a position if `index` is in range.
    #[must_use]
    pub const fn try_new(index: usize) -> Option<Self> {
        if index < FACELET_COUNT {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    /// Get the raw index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The face whose 3x3 block contains this position.
    #[must_use]
    pub const fn home_face(self) -> Face {
        NET_BLOCKS[self.0 as usize / 8]
    }

    /// Iterate over all 48 positions in order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..FACELET_COUNT as u8).map(Position)
    }

    /// The 8 positions whose home is `face`, in row-major net order.
    pub fn of_face(face: Face) -> impl Iterator<Item = Position> {
        let block = NET_BLOCKS
            .iter()
            .position(|&f| f == face)
            .unwrap_or_default() as u8;
        (block * 8..block * 8 + 8).map(Position)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
