//! Seeded scramble stream.
//!
//! A cube draws its scrambles from a ChaCha8 keystream keyed by the engine
//! seed, on a stream id derived from a label (`"scramble"` for `Cube`). The
//! position in the keystream is one 128-bit word counter, so a checkpoint is
//! three integers however many moves have been drawn.
//!
//! ```
//! use rubiks_engine::core::CubeRng;
//! use rubiks_engine::sequence::random_sequence;
//!
//! let mut a = CubeRng::with_label(42, "scramble");
//! let mut b = CubeRng::with_label(42, "scramble");
//! assert_eq!(random_sequence(&mut a, 30), random_sequence(&mut b, 30));
//! ```

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHasher;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Deterministic ChaCha8 stream.
#[derive(Clone, Debug)]
pub struct CubeRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl CubeRng {
    /// Stream 0 of `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The stream of `seed` named by `label`.
    ///
    /// Equal labels give equal streams; `FxHasher` keeps the stream id stable
    /// across builds.
    #[must_use]
    pub fn with_label(seed: u64, label: &str) -> Self {
        let mut hasher = FxHasher::default();
        label.hash(&mut hasher);

        let mut rng = Self::new(seed);
        rng.inner.set_stream(hasher.finish());
        rng
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// ChaCha stream id.
    #[must_use]
    pub fn stream(&self) -> u64 {
        self.inner.get_stream()
    }

    /// Capture the current position.
    #[must_use]
    pub fn state(&self) -> CubeRngState {
        CubeRngState {
            seed: self.seed,
            stream: self.stream(),
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Resume from a captured position.
    #[must_use]
    pub fn from_state(state: &CubeRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_stream(state.stream);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl RngCore for CubeRng {
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.inner.fill_bytes(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.inner.try_fill_bytes(dest)
    }
}

/// Serializable stream position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CubeRngState {
    pub seed: u64,
    pub stream: u64,
    /// Keystream word counter.
    pub word_pos: u128,
}
