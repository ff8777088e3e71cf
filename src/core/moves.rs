//! Move representation: face + direction.
//!
//! A move is one quarter turn of a face. There are exactly 12, written in
//! notation as the face letter followed by `r` (clockwise) or `l`
//! (counter-clockwise): `Wr`, `Wl`, `Yr`, ... `Ol`.
//!
//! ```
//! use rubiks_engine::core::{Face, Direction, Move, MoveSequence};
//!
//! let mv: Move = "Wr".parse().unwrap();
//! assert_eq!(mv, Move::new(Face::White, Direction::Clockwise));
//! assert_eq!(mv.inverse().to_string(), "Wl");
//!
//! let seq: MoveSequence = "Wr Rr".parse().unwrap();
//! assert_eq!(seq.inverse().to_string(), "Rl Wl");
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::Deref;
use std::str::FromStr;

use super::catalog;
use super::error::CubeError;
use super::face::{Direction, Face};
use super::permutation::Permutation;

/// One quarter turn of one face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Move {
    /// The face being turned.
    pub face: Face,

    /// Turn direction.
    pub direction: Direction,
}

impl Move {
    pub const WR: Move = Move::new(Face::White, Direction::Clockwise);
    pub const WL: Move = Move::new(Face::White, Direction::CounterClockwise);
    pub const YR: Move = Move::new(Face::Yellow, Direction::Clockwise);
    pub const YL: Move = Move::new(Face::Yellow, Direction::CounterClockwise);
    pub const BR: Move = Move::new(Face::Blue, Direction::Clockwise);
    pub const BL: Move = Move::new(Face::Blue, Direction::CounterClockwise);
    pub const RR: Move = Move::new(Face::Red, Direction::Clockwise);
    pub const RL: Move = Move::new(Face::Red, Direction::CounterClockwise);
    pub const GR: Move = Move::new(Face::Green, Direction::Clockwise);
    pub const GL: Move = Move::new(Face::Green, Direction::CounterClockwise);
    pub const OR: Move = Move::new(Face::Orange, Direction::Clockwise);
    pub const OL: Move = Move::new(Face::Orange, Direction::CounterClockwise);

    /// All 12 generators in catalog order.
    pub const ALL: [Move; catalog::MOVE_COUNT] = [
        Move::WR,
        Move::WL,
        Move::YR,
        Move::YL,
        Move::BR,
        Move::BL,
        Move::RR,
        Move::RL,
        Move::GR,
        Move::GL,
        Move::OR,
        Move::OL,
    ];

    /// Create a move.
    #[must_use]
    pub const fn new(face: Face, direction: Direction) -> Self {
        Self { face, direction }
    }

    /// The same face turned the other way.
    #[must_use]
    pub const fn inverse(self) -> Self {
        Self {
            face: self.face,
            direction: self.direction.flip(),
        }
    }

    /// This move's permutation table.
    #[must_use]
    pub fn permutation(self) -> &'static Permutation {
        catalog::permutation(self)
    }

    /// Index in `Move::ALL`.
    #[must_use]
    pub const fn index(self) -> usize {
        catalog::move_index(self)
    }

    /// Two-character notation, e.g. `"Gl"`.
    #[must_use]
    pub fn notation(self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.face.letter(), self.direction.symbol())
    }
}

impl FromStr for Move {
    type Err = CubeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CubeError::InvalidMove(s.to_string());

        let mut chars = s.chars();
        let (Some(letter), Some(symbol), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };
        let face = Face::from_letter(letter).map_err(|_| invalid())?;
        let direction = Direction::from_symbol(symbol).ok_or_else(invalid)?;

        Ok(Move::new(face, direction))
    }
}

impl TryFrom<String> for Move {
    type Error = CubeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Move> for String {
    fn from(mv: Move) -> Self {
        mv.to_string()
    }
}

/// An ordered list of moves.
///
/// Order is significant: the cube group is non-abelian.
/// SmallVec keeps short user sequences off the heap.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MoveSequence {
    moves: SmallVec<[Move; 8]>,
}

impl MoveSequence {
    /// Create an empty sequence.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a sequence from a slice of moves.
    #[must_use]
    pub fn from_slice(moves: &[Move]) -> Self {
        Self {
            moves: SmallVec::from_slice(moves),
        }
    }

    /// Append a move.
    pub fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    /// The sequence that undoes this one.
    ///
    /// Reverses the order and flips every move's direction. Both steps are
    /// needed: neither alone inverts a product of non-commuting turns.
    #[must_use]
    pub fn inverse(&self) -> Self {
        self.moves.iter().rev().map(|mv| mv.inverse()).collect()
    }

    /// The single permutation equal to applying every move in order.
    #[must_use]
    pub fn permutation(&self) -> Permutation {
        self.moves
            .iter()
            .fold(Permutation::IDENTITY, |acc, mv| acc.then(mv.permutation()))
    }

    /// Borrow as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }
}

impl Deref for MoveSequence {
    type Target = [Move];

    fn deref(&self) -> &Self::Target {
        &self.moves
    }
}

impl FromIterator<Move> for MoveSequence {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        Self {
            moves: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for MoveSequence {
    type Item = Move;
    type IntoIter = smallvec::IntoIter<[Move; 8]>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}

impl<'a> IntoIterator for &'a MoveSequence {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl From<&[Move]> for MoveSequence {
    fn from(moves: &[Move]) -> Self {
        Self::from_slice(moves)
    }
}

impl std::fmt::Display for MoveSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, mv) in self.moves.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", mv)?;
        }
        Ok(())
    }
}

impl FromStr for MoveSequence {
    type Err = CubeError;

    /// Parse whitespace-separated notation. Fails on the first bad token.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split_whitespace()
            .enumerate()
            .map(|(index, token)| {
                token.parse::<Move>().map_err(|e| CubeError::InvalidSequence {
                    index,
                    source: Box::new(e),
                })
            })
            .collect()
    }
}

/// A move applied to a cube, with its position in the cube's history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The move applied.
    pub mv: Move,

    /// Sequence number since the last reset (0-based).
    pub sequence: u32,
}

impl MoveRecord {
    /// Create a new move record.
    #[must_use]
    pub fn new(mv: Move, sequence: u32) -> Self {
        Self { mv, sequence }
    }
}
