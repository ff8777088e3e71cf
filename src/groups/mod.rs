//! Face-group queries for rendering collaborators.
//!
//! A renderer needs to know, for a turn of a given face, which stickers and
//! which rigid pieces rotate together, and about which axis. Everything
//! here is static and derived from the move tables.
//!
//! - `piece`: piece identifiers, face -> piece grouping, piece arrangement
//! - `geometry`: rotation axis and pivot per move

pub mod geometry;
pub mod piece;

pub use geometry::{face_center, TurnGeometry};
pub use piece::{
    all_pieces, arrangement, piece_permutation, pieces_of_face, PieceId, PieceKind, PIECE_COUNT,
};

use smallvec::SmallVec;

use crate::core::net::face_grid;
use crate::core::{Direction, Face, Move, NetCell, Position, Result};

/// The 9 stickers of `face` in net row-major order; the middle one is the
/// fixed center.
#[must_use]
pub fn positions_of_face(face: Face) -> [NetCell; 9] {
    face_grid(face)
}

/// The 20 positions a turn of `face` moves: its own 8 stickers and the
/// ring of 12 on the neighbouring faces.
#[must_use]
pub fn turn_group(face: Face) -> SmallVec<[Position; 20]> {
    Move::new(face, Direction::Clockwise)
        .permutation()
        .moved_positions()
        .collect()
}

/// Everything that rotates together under a turn of one face.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FaceGroup {
    pub face: Face,
    pub stickers: [NetCell; 9],
    pub pieces: SmallVec<[PieceId; 9]>,
    pub moved_positions: SmallVec<[Position; 20]>,
}

impl FaceGroup {
    #[must_use]
    pub fn new(face: Face) -> Self {
        Self {
            face,
            stickers: positions_of_face(face),
            pieces: pieces_of_face(face),
            moved_positions: turn_group(face),
        }
    }

    /// Look up a face by letter or name.
    ///
    /// Fails with `InvalidFace` for anything outside the 6 faces.
    pub fn lookup(name: &str) -> Result<Self> {
        Ok(Self::new(name.parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CubeError;

    #[test]
    fn test_positions_of_face_white() {
        let cells = positions_of_face(Face::White);
        let expected: Vec<NetCell> = [0, 1, 2, 3]
            .into_iter()
            .map(|i| NetCell::Facelet(Position(i)))
            .chain([NetCell::Center(Face::White)])
            .chain([4, 5, 6, 7].into_iter().map(|i| NetCell::Facelet(Position(i))))
            .collect();
        assert_eq!(cells.to_vec(), expected);
    }

    #[test]
    fn test_turn_group_sizes_and_overlap() {
        for face in Face::ALL {
            let group = turn_group(face);
            assert_eq!(group.len(), 20);

            let own = group.iter().filter(|p| p.home_face() == face).count();
            assert_eq!(own, 8);

            // Opposite faces never share a position.
            let opposite = turn_group(face.opposite());
            assert!(group.iter().all(|p| !opposite.contains(p)));
        }
    }

    #[test]
    fn test_face_group_lookup() {
        let group = FaceGroup::lookup("Blue").unwrap();
        assert_eq!(group.face, Face::Blue);
        assert_eq!(group.pieces.len(), 9);
        assert_eq!(group.moved_positions.len(), 20);
        assert_eq!(group.stickers[4], NetCell::Center(Face::Blue));

        assert_eq!(
            FaceGroup::lookup("X"),
            Err(CubeError::InvalidFace("X".to_string()))
        );
    }

    #[test]
    fn test_face_group_pieces_cover_moved_positions() {
        for face in Face::ALL {
            let group = FaceGroup::new(face);
            let mut covered: Vec<Position> =
                group.pieces.iter().flat_map(|p| p.positions()).collect();
            covered.sort();
            assert_eq!(covered.as_slice(), group.moved_positions.as_slice());
        }
    }
}
