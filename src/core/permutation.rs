//! Permutations over the 48 facelet positions.
//!
//! A `Permutation` stores, for every position `p`, the position the facelet
//! at `p` is sent to. Untouched positions map to themselves, so every table
//! is total and composition never has to special-case missing entries.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::position::{Position, FACELET_COUNT};

pub(crate) const IDENTITY_TABLE: [u8; FACELET_COUNT] = {
    let mut table = [0u8; FACELET_COUNT];
    let mut i = 0;
    while i < FACELET_COUNT {
        table[i] = i as u8;
        i += 1;
    }
    table
};

/// A bijection on facelet positions, stored as destination indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct Permutation {
    dest: [u8; FACELET_COUNT],
}

impl Permutation {
    /// The identity permutation.
    pub const IDENTITY: Permutation = Permutation {
        dest: IDENTITY_TABLE,
    };

    /// Build a permutation from disjoint 4-cycles.
    ///
    /// Each cycle `[a, b, c, d]` sends `a -> b -> c -> d -> a`. With
    /// `reversed` set the cycles run the other way, which yields the
    /// inverse permutation.
    #[must_use]
    pub const fn from_cycles<const N: usize>(cycles: &[[u8; 4]; N], reversed: bool) -> Self {
        let mut dest = IDENTITY_TABLE;
        let mut c = 0;
        while c < N {
            let cycle = cycles[c];
            let mut i = 0;
            while i < 4 {
                let (from, to) = if reversed {
                    (cycle[(i + 1) % 4], cycle[i])
                } else {
                    (cycle[i], cycle[(i + 1) % 4])
                };
                dest[from as usize] = to;
                i += 1;
            }
            c += 1;
        }
        Self { dest }
    }

    pub(crate) const fn from_table(dest: [u8; FACELET_COUNT]) -> Self {
        Self { dest }
    }

    /// Where the facelet at `position` is sent.
    #[must_use]
    pub const fn image(&self, position: Position) -> Position {
        Position(self.dest[position.index()])
    }

    /// Raw destination table.
    #[must_use]
    pub const fn as_array(&self) -> &[u8; FACELET_COUNT] {
        &self.dest
    }

    /// Apply `self` first, then `other`.
    #[must_use]
    pub fn then(&self, other: &Permutation) -> Permutation {
        let mut dest = [0u8; FACELET_COUNT];
        for (slot, &mid) in dest.iter_mut().zip(self.dest.iter()) {
            *slot = other.dest[mid as usize];
        }
        Permutation { dest }
    }

    /// The permutation that undoes `self`.
    #[must_use]
    pub fn inverse(&self) -> Permutation {
        let mut dest = [0u8; FACELET_COUNT];
        for (from, &to) in self.dest.iter().enumerate() {
            dest[to as usize] = from as u8;
        }
        Permutation { dest }
    }

    /// `self` applied `exponent` times.
    #[must_use]
    pub fn pow(&self, exponent: u32) -> Permutation {
        (0..exponent).fold(Permutation::IDENTITY, |acc, _| acc.then(self))
    }

    /// Check if this is the identity.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.dest == IDENTITY_TABLE
    }

    /// Positions that are not fixed.
    pub fn moved_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.dest
            .iter()
            .enumerate()
            .filter(|&(from, &to)| from != to as usize)
            .map(|(from, _)| Position(from as u8))
    }

    /// Non-trivial cycles, each starting at its smallest position.
    #[must_use]
    pub fn cycles(&self) -> Vec<SmallVec<[Position; 4]>> {
        let mut visited = [false; FACELET_COUNT];
        let mut cycles = Vec::new();

        for start in 0..FACELET_COUNT {
            if visited[start] || self.dest[start] as usize == start {
                continue;
            }
            let mut cycle = SmallVec::new();
            let mut current = start;
            while !visited[current] {
                visited[current] = true;
                cycle.push(Position(current as u8));
                current = self.dest[current] as usize;
            }
            cycles.push(cycle);
        }

        cycles
    }

    /// Smallest `k >= 1` with `self^k == identity`.
    #[must_use]
    pub fn order(&self) -> u64 {
        fn gcd(a: u64, b: u64) -> u64 {
            if b == 0 {
                a
            } else {
                gcd(b, a % b)
            }
        }
        self.cycles()
            .iter()
            .map(|c| c.len() as u64)
            .fold(1, |acc, len| acc / gcd(acc, len) * len)
    }
}

impl Default for Permutation {
    fn default() -> Self {
        Permutation::IDENTITY
    }
}

impl TryFrom<Vec<u8>> for Permutation {
    type Error = super::error::CubeError;

    fn try_from(values: Vec<u8>) -> Result<Self, Self::Error> {
        let dest = super::state::validate_bijection(&values)?;
        Ok(Permutation { dest })
    }
}

impl From<Permutation> for Vec<u8> {
    fn from(perm: Permutation) -> Self {
        perm.dest.to_vec()
    }
}
