//! Facelet state: which facelet currently sits in each position.
//!
//! ## Invariant
//!
//! The state is always a permutation of the solved labeling. It starts
//! solved, changes only through `apply`, and `from_facelets` rejects any
//! vector that is not a bijection over `0..48`. The 6 centers never move
//! and are not stored.

use serde::{Deserialize, Serialize};

use super::error::CubeError;
use super::permutation::{Permutation, IDENTITY_TABLE};
use super::position::{Position, FACELET_COUNT};

/// Facelet identifier held at every position.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct FaceletState {
    facelets: [u8; FACELET_COUNT],
}

impl FaceletState {
    /// The solved state: position `i` holds facelet `i`.
    pub const SOLVED: FaceletState = FaceletState {
        facelets: IDENTITY_TABLE,
    };

    /// Create a solved state.
    #[must_use]
    pub fn new() -> Self {
        Self::SOLVED
    }

    /// Build a state from raw facelet identifiers indexed by position.
    pub fn from_facelets(facelets: &[u8]) -> Result<Self, CubeError> {
        Ok(Self {
            facelets: validate_bijection(facelets)?,
        })
    }

    /// Return to the solved state.
    pub fn reset(&mut self) {
        *self = Self::SOLVED;
    }

    /// Move every facelet along `perm`.
    ///
    /// The facelet at `p` ends up at `perm.image(p)`. The whole table is
    /// built before it replaces the stored one.
    pub fn apply(&mut self, perm: &Permutation) {
        let mut next = [0u8; FACELET_COUNT];
        for (from, &to) in perm.as_array().iter().enumerate() {
            next[to as usize] = self.facelets[from];
        }
        self.facelets = next;
    }

    /// Return a new state with `perm` applied.
    #[must_use]
    pub fn applied(&self, perm: &Permutation) -> Self {
        let mut next = *self;
        next.apply(perm);
        next
    }

    /// Facelet currently at `position`.
    #[must_use]
    pub const fn facelet_at(&self, position: Position) -> Position {
        Position(self.facelets[position.index()])
    }

    /// Current position of `facelet`.
    #[must_use]
    pub fn position_of(&self, facelet: Position) -> Position {
        let index = self
            .facelets
            .iter()
            .position(|&f| f == facelet.0)
            .unwrap_or(facelet.index());
        Position(index as u8)
    }

    /// Independent copy of the position -> facelet mapping.
    #[must_use]
    pub fn snapshot(&self) -> [u8; FACELET_COUNT] {
        self.facelets
    }

    /// Check if every facelet is home.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == Self::SOLVED
    }

    /// Number of positions holding their own facelet.
    #[must_use]
    pub fn solved_count(&self) -> usize {
        self.facelets
            .iter()
            .enumerate()
            .filter(|&(pos, &facelet)| pos == facelet as usize)
            .count()
    }

    /// Iterate over `(position, facelet)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Position)> + '_ {
        self.facelets
            .iter()
            .enumerate()
            .map(|(pos, &facelet)| (Position(pos as u8), Position(facelet)))
    }

    /// The permutation that takes the solved state to this one.
    #[must_use]
    pub fn as_permutation(&self) -> Permutation {
        let mut dest = [0u8; FACELET_COUNT];
        for (pos, &facelet) in self.facelets.iter().enumerate() {
            dest[facelet as usize] = pos as u8;
        }
        Permutation::from_table(dest)
    }
}

impl Default for FaceletState {
    fn default() -> Self {
        Self::SOLVED
    }
}

impl std::fmt::Debug for FaceletState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FaceletState")
            .field("solved_count", &self.solved_count())
            .field("facelets", &self.facelets.as_slice())
            .finish()
    }
}

impl TryFrom<Vec<u8>> for FaceletState {
    type Error = CubeError;

    fn try_from(values: Vec<u8>) -> Result<Self, Self::Error> {
        Self::from_facelets(&values)
    }
}

impl From<FaceletState> for Vec<u8> {
    fn from(state: FaceletState) -> Self {
        state.facelets.to_vec()
    }
}

/// Check that `values` is a permutation of `0..48`.
pub(crate) fn validate_bijection(values: &[u8]) -> Result<[u8; FACELET_COUNT], CubeError> {
    if values.len() != FACELET_COUNT {
        return Err(CubeError::InvalidState(format!(
            "expected {} facelets but got {}",
            FACELET_COUNT,
            values.len()
        )));
    }

    let mut seen = [false; FACELET_COUNT];
    let mut table = [0u8; FACELET_COUNT];
    for (pos, &value) in values.iter().enumerate() {
        let index = value as usize;
        if index >= FACELET_COUNT {
            return Err(CubeError::InvalidState(format!(
                "facelet {} at position {} is out of range",
                value, pos
            )));
        }
        if seen[index] {
            return Err(CubeError::InvalidState(format!(
                "facelet {} appears more than once",
                value
            )));
        }
        seen[index] = true;
        table[pos] = value;
    }

    Ok(table)
}
