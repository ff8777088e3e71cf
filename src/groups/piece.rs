//! Physical pieces derived from the facelet model.
//!
//! A piece is identified by the set of faces it shows: one face for a
//! center, two for an edge, three for a corner. A position belongs to the
//! piece named by the faces whose turns move it, so the grouping comes
//! straight out of the move tables and there is no second table to keep in
//! sync.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::str::FromStr;

use crate::core::catalog::FACE_MASKS;
use crate::core::{CubeError, Face, FaceletState, Move, Position};

/// Number of pieces: 6 centers, 12 edges, 8 corners.
pub const PIECE_COUNT: usize = 26;

/// Kind of piece, by how many faces it shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Center,
    Edge,
    Corner,
}

/// A piece slot, named by the faces it touches.
///
/// Stored as a bitmask over `Face::index`. Displayed as lowercase color
/// names joined by `-` in `Face::ALL` order, e.g. `"white-blue-red"`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PieceId(u8);

impl PieceId {
    /// The center piece of `face`.
    #[must_use]
    pub const fn center(face: Face) -> Self {
        Self(1 << face.index())
    }

    /// The piece that owns `position`.
    #[must_use]
    pub const fn of_position(position: Position) -> Self {
        Self(FACE_MASKS[position.index()])
    }

    /// Faces this piece shows, in `Face::ALL` order.
    #[must_use]
    pub fn faces(self) -> SmallVec<[Face; 3]> {
        Face::ALL
            .into_iter()
            .filter(|face| self.touches(*face))
            .collect()
    }

    /// Check if this piece shows `face`.
    #[must_use]
    pub const fn touches(self, face: Face) -> bool {
        self.0 & (1 << face.index()) != 0
    }

    /// Center, edge, or corner.
    #[must_use]
    pub const fn kind(self) -> PieceKind {
        match self.0.count_ones() {
            1 => PieceKind::Center,
            2 => PieceKind::Edge,
            _ => PieceKind::Corner,
        }
    }

    /// Name in the renderer's mesh convention.
    ///
    /// White or Yellow leads, then the side faces in ring order
    /// Blue -> Red -> Green -> Orange, reversed under Yellow:
    /// `"white-orange-blue"`, `"yellow-red-blue"`, `"orange-blue"`.
    #[must_use]
    pub fn net_name(self) -> String {
        let cap = [Face::White, Face::Yellow]
            .into_iter()
            .find(|face| self.touches(*face));
        let sides: SmallVec<[Face; 2]> = SIDE_RING
            .into_iter()
            .filter(|face| self.touches(*face))
            .collect();

        let sides: SmallVec<[Face; 2]> = if let [a, b] = sides[..] {
            // The pair wraps around the ring when it is Orange + Blue.
            let (first, second) = if ring_next(a) == b { (a, b) } else { (b, a) };
            if cap == Some(Face::Yellow) {
                smallvec::smallvec![second, first]
            } else {
                smallvec::smallvec![first, second]
            }
        } else {
            sides
        };

        cap.into_iter()
            .chain(sides)
            .map(Face::name)
            .collect::<Vec<_>>()
            .join("-")
    }

    /// Facelet positions of this piece (empty for centers, which do not move).
    pub fn positions(self) -> impl Iterator<Item = Position> {
        Position::all().filter(move |p| FACE_MASKS[p.index()] == self.0)
    }
}

impl std::fmt::Debug for PieceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PieceId({})", self)
    }
}

impl std::fmt::Display for PieceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, face) in self.faces().iter().enumerate() {
            if i > 0 {
                f.write_str("-")?;
            }
            f.write_str(face.name())?;
        }
        Ok(())
    }
}

impl FromStr for PieceId {
    type Err = CubeError;

    /// Parse `"white-blue"` style names. Face order does not matter; a
    /// repeated face or a combination that is not a piece is `InvalidPiece`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut mask = 0u8;
        for part in s.split('-') {
            let face: Face = part.parse()?;
            let bit = 1 << face.index();
            if mask & bit != 0 {
                return Err(CubeError::InvalidPiece(s.to_string()));
            }
            mask |= bit;
        }

        let id = PieceId(mask);
        if all_pieces().contains(&id) {
            Ok(id)
        } else {
            Err(CubeError::InvalidPiece(s.to_string()))
        }
    }
}

impl TryFrom<String> for PieceId {
    type Error = CubeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<PieceId> for String {
    fn from(id: PieceId) -> Self {
        id.to_string()
    }
}

/// Side faces in the order a White-up turn carries them.
const SIDE_RING: [Face; 4] = [Face::Blue, Face::Red, Face::Green, Face::Orange];

fn ring_next(face: Face) -> Face {
    match face {
        Face::Blue => Face::Red,
        Face::Red => Face::Green,
        Face::Green => Face::Orange,
        _ => Face::Blue,
    }
}

/// All 26 pieces: centers in face order, then edges, then corners.
#[must_use]
pub fn all_pieces() -> Vec<PieceId> {
    let mut moving: Vec<PieceId> = Position::all().map(PieceId::of_position).collect();
    moving.sort_by_key(|id| (id.0.count_ones(), id.0));
    moving.dedup();

    Face::ALL
        .into_iter()
        .map(PieceId::center)
        .chain(moving)
        .collect()
}

/// The 9 pieces that turn with `face`: its center, 4 edges, 4 corners.
#[must_use]
pub fn pieces_of_face(face: Face) -> SmallVec<[PieceId; 9]> {
    all_pieces()
        .into_iter()
        .filter(|id| id.touches(face))
        .filter(|id| id.kind() != PieceKind::Center || *id == PieceId::center(face))
        .collect()
}

/// Where each piece slot's content goes under `mv`.
///
/// Centers map to themselves.
#[must_use]
pub fn piece_permutation(mv: Move) -> FxHashMap<PieceId, PieceId> {
    let perm = mv.permutation();
    all_pieces()
        .into_iter()
        .map(|id| {
            let target = id
                .positions()
                .next()
                .map_or(id, |p| PieceId::of_position(perm.image(p)));
            (id, target)
        })
        .collect()
}

/// For each piece slot, the home piece currently sitting in it.
///
/// This is the map a renderer keeps from slot to scene object.
#[must_use]
pub fn arrangement(state: &FaceletState) -> FxHashMap<PieceId, PieceId> {
    all_pieces()
        .into_iter()
        .map(|slot| {
            let occupant = slot
                .positions()
                .next()
                .map_or(slot, |p| PieceId::of_position(state.facelet_at(p)));
            (slot, occupant)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::{apply_move, apply_sequence};

    #[test]
    fn test_piece_counts() {
        let pieces = all_pieces();
        assert_eq!(pieces.len(), PIECE_COUNT);

        let count = |kind: PieceKind| pieces.iter().filter(|p| p.kind() == kind).count();
        assert_eq!(count(PieceKind::Center), 6);
        assert_eq!(count(PieceKind::Edge), 12);
        assert_eq!(count(PieceKind::Corner), 8);
    }

    #[test]
    fn test_piece_sizes_match_kind() {
        for id in all_pieces() {
            let expected = match id.kind() {
                PieceKind::Center => 0,
                PieceKind::Edge => 2,
                PieceKind::Corner => 3,
            };
            assert_eq!(id.positions().count(), expected, "{}", id);
        }
    }

    #[test]
    fn test_every_position_belongs_to_a_piece_of_its_face() {
        for pos in Position::all() {
            let id = PieceId::of_position(pos);
            assert!(id.touches(pos.home_face()));
            assert_ne!(id.kind(), PieceKind::Center);
        }
    }

    #[test]
    fn test_known_pieces() {
        assert_eq!(PieceId::of_position(Position(2)).to_string(), "white-blue-red");
        assert_eq!(PieceId::of_position(Position(4)).to_string(), "white-red");
        assert_eq!(PieceId::of_position(Position(11)).to_string(), "white-red");
        assert_eq!(PieceId::center(Face::Green).to_string(), "green");

        let corner: Vec<_> = "white-blue-red".parse::<PieceId>().unwrap().positions().collect();
        assert_eq!(corner, vec![Position(2), Position(8), Position(39)]);
    }

    #[test]
    fn test_piece_parse() {
        assert_eq!("red-white".parse::<PieceId>(), "white-red".parse::<PieceId>());
        assert!("white-yellow".parse::<PieceId>().is_err());
        assert!("white-pink".parse::<PieceId>().is_err());
        assert_eq!(
            "blue-green".parse::<PieceId>(),
            Err(CubeError::InvalidPiece("blue-green".to_string()))
        );
        assert_eq!(
            "white-white-red".parse::<PieceId>(),
            Err(CubeError::InvalidPiece("white-white-red".to_string()))
        );
        assert_eq!(
            "white-pink".parse::<PieceId>(),
            Err(CubeError::InvalidFace("pink".to_string()))
        );
    }

    #[test]
    fn test_net_names() {
        let name = |s: &str| s.parse::<PieceId>().unwrap().net_name();

        assert_eq!(name("white-blue-orange"), "white-orange-blue");
        assert_eq!(name("white-red-blue"), "white-blue-red");
        assert_eq!(name("yellow-blue-orange"), "yellow-blue-orange");
        assert_eq!(name("yellow-blue-red"), "yellow-red-blue");
        assert_eq!(name("blue-orange"), "orange-blue");
        assert_eq!(name("red-blue"), "blue-red");
        assert_eq!(name("white-green"), "white-green");
        assert_eq!(name("green"), "green");
    }

    #[test]
    fn test_net_names_cover_renderer_meshes() {
        let mut names: Vec<String> = all_pieces().into_iter().map(PieceId::net_name).collect();
        names.sort();

        let mut expected = vec![
            "white", "blue", "red", "green", "orange", "yellow",
            "white-blue", "white-red", "white-green", "white-orange",
            "yellow-blue", "yellow-red", "yellow-green", "yellow-orange",
            "blue-red", "red-green", "green-orange", "orange-blue",
            "white-blue-red", "white-red-green", "white-green-orange", "white-orange-blue",
            "yellow-red-blue", "yellow-green-red", "yellow-orange-green", "yellow-blue-orange",
        ];
        expected.sort();
        assert_eq!(names, expected);

        for id in all_pieces() {
            assert_eq!(id.net_name().parse::<PieceId>().unwrap(), id);
        }
    }

    #[test]
    fn test_pieces_of_face() {
        for face in Face::ALL {
            let pieces = pieces_of_face(face);
            assert_eq!(pieces.len(), 9, "{}", face);
            assert_eq!(pieces[0], PieceId::center(face));

            let edges = pieces.iter().filter(|p| p.kind() == PieceKind::Edge).count();
            let corners = pieces.iter().filter(|p| p.kind() == PieceKind::Corner).count();
            assert_eq!((edges, corners), (4, 4));

            // Together they cover the 20 positions the turn moves.
            let covered: usize = pieces.iter().map(|p| p.positions().count()).sum();
            assert_eq!(covered, 20);
        }
    }

    #[test]
    fn test_piece_permutation_stays_on_turned_face() {
        for mv in Move::ALL {
            let map = piece_permutation(mv);
            assert_eq!(map.len(), PIECE_COUNT);

            for (from, to) in &map {
                assert_eq!(from.kind(), to.kind());
                if from.touches(mv.face) {
                    assert!(to.touches(mv.face));
                } else {
                    assert_eq!(from, to);
                }
            }
        }
    }

    #[test]
    fn test_piece_permutation_white_turn() {
        let map = piece_permutation(Move::WR);
        let get = |name: &str| map[&name.parse::<PieceId>().unwrap()].to_string();

        assert_eq!(get("white-blue-red"), "white-red-green");
        assert_eq!(get("white-blue"), "white-red");
        assert_eq!(get("white-red"), "white-green");
        assert_eq!(get("white"), "white");
    }

    #[test]
    fn test_arrangement_tracks_piece_permutation() {
        let state = apply_move(&FaceletState::new(), Move::RR);
        let arr = arrangement(&state);

        for (home, slot) in piece_permutation(Move::RR) {
            assert_eq!(arr[&slot], home);
        }
    }

    #[test]
    fn test_arrangement_of_solved_is_identity() {
        let arr = arrangement(&FaceletState::new());
        assert!(arr.iter().all(|(slot, occupant)| slot == occupant));

        let state = apply_sequence(&FaceletState::new(), &[Move::WR, Move::WL]);
        assert_eq!(arrangement(&state), arr);
    }

    #[test]
    fn test_piece_serde() {
        let id: PieceId = "yellow-green-orange".parse().unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"yellow-green-orange\"");
        assert_eq!(serde_json::from_str::<PieceId>(&json).unwrap(), id);
    }
}
