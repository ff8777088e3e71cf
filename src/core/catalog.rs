//! The 12 move generators as permutation tables.
//!
//! Each face lists the five 4-cycles of its clockwise quarter turn: two
//! cycles on the face's own stickers and three on the ring of 12 stickers
//! around it. The counter-clockwise table runs the same cycles backwards.
//! All tables are built at compile time and shared by every cube.
//!
//! Net numbering (see `Position`):
//!
//! ```text
//! 32 33 34
//! 35  B 36
//! 37 38 39
//!  0  1  2  8  9 10 16 17 18 24 25 26
//!  3  W  4 11  R 12 19  Y 20 27  O 28
//!  5  6  7 13 14 15 21 22 23 29 30 31
//! 40 41 42
//! 43  G 44
//! 45 46 47
//! ```

use super::face::{Direction, Face};
use super::moves::Move;
use super::permutation::Permutation;
use super::position::FACELET_COUNT;

/// Number of move generators.
pub const MOVE_COUNT: usize = 12;

/// Orbits moved by one quarter turn.
pub const ORBITS_PER_MOVE: usize = 5;

type Cycles = [[u8; 4]; ORBITS_PER_MOVE];

/// Clockwise cycles per face, in `Face::ALL` order.
const CLOCKWISE: [Cycles; 6] = [
    // White
    [[0, 2, 7, 5], [1, 4, 6, 3], [37, 8, 42, 31], [38, 11, 41, 28], [39, 13, 40, 26]],
    // Yellow
    [[16, 18, 23, 21], [17, 20, 22, 19], [34, 24, 45, 15], [33, 27, 46, 12], [32, 29, 47, 10]],
    // Blue
    [[32, 34, 39, 37], [33, 36, 38, 35], [26, 18, 10, 2], [25, 17, 9, 1], [24, 16, 8, 0]],
    // Red
    [[8, 10, 15, 13], [9, 12, 14, 11], [39, 16, 47, 7], [36, 19, 44, 4], [34, 21, 42, 2]],
    // Green
    [[40, 42, 47, 45], [41, 44, 46, 43], [5, 13, 21, 29], [6, 14, 22, 30], [7, 15, 23, 31]],
    // Orange
    [[24, 26, 31, 29], [25, 28, 30, 27], [32, 0, 40, 23], [35, 3, 43, 20], [37, 5, 45, 18]],
];

static CATALOG: [Permutation; MOVE_COUNT] = {
    let mut table = [Permutation::IDENTITY; MOVE_COUNT];
    let mut face = 0;
    while face < 6 {
        table[face * 2] = Permutation::from_cycles(&CLOCKWISE[face], false);
        table[face * 2 + 1] = Permutation::from_cycles(&CLOCKWISE[face], true);
        face += 1;
    }
    table
};

/// For each position, a bitmask (bit `Face::index`) of the faces whose turn
/// moves it. Derived from the cycle tables, so it cannot drift from them.
pub(crate) const FACE_MASKS: [u8; FACELET_COUNT] = {
    let mut masks = [0u8; FACELET_COUNT];
    let mut face = 0;
    while face < 6 {
        let mut c = 0;
        while c < ORBITS_PER_MOVE {
            let mut i = 0;
            while i < 4 {
                masks[CLOCKWISE[face][c][i] as usize] |= 1 << face;
                i += 1;
            }
            c += 1;
        }
        face += 1;
    }
    masks
};

/// Index of `mv` in `Move::ALL` and the catalog.
#[must_use]
pub const fn move_index(mv: Move) -> usize {
    let dir = match mv.direction {
        Direction::Clockwise => 0,
        Direction::CounterClockwise => 1,
    };
    mv.face.index() * 2 + dir
}

/// The permutation table for `mv`.
#[must_use]
pub fn permutation(mv: Move) -> &'static Permutation {
    &CATALOG[move_index(mv)]
}

/// The five orbits of a clockwise turn of `face`.
///
/// Counter-clockwise orbits are the same position sets traversed in reverse.
#[must_use]
pub fn orbits(face: Face) -> &'static [[u8; 4]; ORBITS_PER_MOVE] {
    &CLOCKWISE[face.index()]
}
