//! Faces and turn directions.
//!
//! Faces are named by the color of their fixed center. The enumeration
//! order (White, Yellow, Blue, Red, Green, Orange) is the order the move
//! catalog is laid out in.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::CubeError;

/// One of the six faces, identified by its center color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Face {
    White,
    Yellow,
    Blue,
    Red,
    Green,
    Orange,
}

impl Face {
    /// All faces in catalog order.
    pub const ALL: [Face; 6] = [
        Face::White,
        Face::Yellow,
        Face::Blue,
        Face::Red,
        Face::Green,
        Face::Orange,
    ];

    /// Index of this face in `Face::ALL`.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Single-letter symbol used in move notation and the net dump.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Face::White => 'W',
            Face::Yellow => 'Y',
            Face::Blue => 'B',
            Face::Red => 'R',
            Face::Green => 'G',
            Face::Orange => 'O',
        }
    }

    /// Lowercase color name, as used in piece names.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Face::White => "white",
            Face::Yellow => "yellow",
            Face::Blue => "blue",
            Face::Red => "red",
            Face::Green => "green",
            Face::Orange => "orange",
        }
    }

    /// The face across the cube.
    #[must_use]
    pub const fn opposite(self) -> Face {
        match self {
            Face::White => Face::Yellow,
            Face::Yellow => Face::White,
            Face::Blue => Face::Green,
            Face::Green => Face::Blue,
            Face::Red => Face::Orange,
            Face::Orange => Face::Red,
        }
    }

    /// Parse a face from its letter.
    pub fn from_letter(letter: char) -> Result<Face, CubeError> {
        Face::ALL
            .into_iter()
            .find(|face| face.letter() == letter)
            .ok_or_else(|| CubeError::InvalidFace(letter.to_string()))
    }
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Face {
    type Err = CubeError;

    /// Accepts the letter (`"W"`) or the color name in any case (`"white"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        if let (Some(letter), None) = (chars.next(), chars.next()) {
            return Face::from_letter(letter);
        }

        Face::ALL
            .into_iter()
            .find(|face| face.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| CubeError::InvalidFace(s.to_string()))
    }
}

/// Quarter-turn direction.
///
/// Notation uses `r` for clockwise and `l` for counter-clockwise.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl Direction {
    /// Notation suffix.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Direction::Clockwise => 'r',
            Direction::CounterClockwise => 'l',
        }
    }

    /// The opposite direction.
    #[must_use]
    pub const fn flip(self) -> Direction {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }

    pub(crate) fn from_symbol(symbol: char) -> Option<Direction> {
        match symbol {
            'r' => Some(Direction::Clockwise),
            'l' => Some(Direction::CounterClockwise),
            _ => None,
        }
    }
}
