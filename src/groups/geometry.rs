//! Rotation axis and pivot for animating a turn.
//!
//! Coordinates are the renderer's model space: White on +x, Yellow on -x,
//! Blue on +y, Green on -y, Red on -z, Orange on +z. The engine does not
//! interpolate anything; it only says which way a turn goes.

use serde::{Deserialize, Serialize};

use crate::core::{Direction, Face, Move};

/// Rotation of a single quarter turn.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TurnGeometry {
    /// Unit rotation axis (right-handed).
    pub axis: [i8; 3],

    /// Point the axis passes through: the center of the turned face.
    pub pivot: [i8; 3],

    /// Rotation angle in radians.
    pub angle: f64,
}

impl TurnGeometry {
    /// Geometry of `mv`.
    ///
    /// A clockwise turn, seen from outside the face, is a negative rotation
    /// about the face's outward direction.
    #[must_use]
    pub fn of(mv: Move) -> Self {
        let pivot = face_center(mv.face);
        let sign = match mv.direction {
            Direction::Clockwise => -1,
            Direction::CounterClockwise => 1,
        };

        Self {
            axis: pivot.map(|c| c * sign),
            pivot,
            angle: std::f64::consts::FRAC_PI_2,
        }
    }
}

/// Model-space center of `face`.
#[must_use]
pub const fn face_center(face: Face) -> [i8; 3] {
    match face {
        Face::White => [1, 0, 0],
        Face::Yellow => [-1, 0, 0],
        Face::Blue => [0, 1, 0],
        Face::Green => [0, -1, 0],
        Face::Red => [0, 0, -1],
        Face::Orange => [0, 0, 1],
    }
}
