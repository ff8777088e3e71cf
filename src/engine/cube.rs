//! The cube: a facelet state with its RNG and move history.

use im::Vector;
use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::core::{
    CubeError, CubeRng, CubeRngState, EngineConfig, FaceletState, Move, MoveRecord, MoveSequence, NetView,
    Result, FACELET_COUNT,
};
use crate::goal::{Goal, Progress, Solved};
use crate::sequence::{invert_sequence, random_sequence};

/// A single logical cube.
///
/// Moves commit immediately and atomically; there is no in-flight state.
/// Cubes are independent values: a clone shares nothing mutable, only
/// the structurally-shared history.
#[derive(Clone, Debug)]
pub struct Cube {
    state: FaceletState,
    rng: CubeRng,
    history: Vector<MoveRecord>,
    config: EngineConfig,
}

impl Cube {
    /// Create a solved cube with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Create a solved cube.
    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            state: FaceletState::new(),
            rng: CubeRng::with_label(config.seed, "scramble"),
            history: Vector::new(),
            config,
        }
    }

    /// Configuration this cube was built with.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    // === Mutation ===

    /// Return to the solved state and clear history.
    pub fn reset(&mut self) {
        debug!("reset cube");
        self.state.reset();
        self.history.clear();
    }

    /// Apply one move.
    pub fn apply(&mut self, mv: Move) {
        trace!("apply {}", mv);
        self.state.apply(mv.permutation());
        if self.config.record_history {
            let sequence = self.history.len() as u32;
            self.history.push_back(MoveRecord::new(mv, sequence));
        }
    }

    /// Apply one move given in notation.
    ///
    /// Fails with `InvalidMove` without touching the cube.
    pub fn apply_notation(&mut self, notation: &str) -> Result<()> {
        let mv: Move = notation.parse()?;
        self.apply(mv);
        Ok(())
    }

    /// Apply moves in order.
    pub fn apply_sequence(&mut self, moves: &[Move]) {
        debug!("apply sequence of {} moves", moves.len());
        for &mv in moves {
            self.apply(mv);
        }
    }

    /// Apply a whitespace-separated sequence.
    ///
    /// The whole sequence is validated first; on error nothing is applied.
    pub fn apply_notation_sequence(&mut self, notation: &str) -> Result<()> {
        let moves: MoveSequence = notation.parse()?;
        self.apply_sequence(&moves);
        Ok(())
    }

    /// Reset, then apply `moves`.
    pub fn set_init_state(&mut self, moves: &[Move]) {
        self.reset();
        self.apply_sequence(moves);
    }

    /// Reset, then apply `complexity` random moves. Returns the moves drawn.
    pub fn set_random_state(&mut self, complexity: usize) -> MoveSequence {
        self.reset();
        let moves = random_sequence(&mut self.rng, complexity);
        debug!("scramble from seed {}: {}", self.rng.seed(), moves);
        self.apply_sequence(&moves);
        moves
    }

    /// Scramble with the configured default length.
    pub fn scramble_default(&mut self) -> MoveSequence {
        self.set_random_state(self.config.scramble_length)
    }

    /// Apply the inverse of the recorded history.
    ///
    /// Returns the moves applied. History is cleared afterwards, so the cube
    /// is back where it was at the last reset.
    pub fn undo_all(&mut self) -> MoveSequence {
        let applied: Vec<Move> = self.history.iter().map(|record| record.mv).collect();
        let undo = invert_sequence(&applied);
        debug!("undo {} moves", undo.len());
        for mv in &undo {
            self.state.apply(mv.permutation());
        }
        self.history.clear();
        undo
    }

    // === Queries ===

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &FaceletState {
        &self.state
    }

    /// Independent copy of the position -> facelet mapping.
    #[must_use]
    pub fn snapshot(&self) -> [u8; FACELET_COUNT] {
        self.state.snapshot()
    }

    /// Check if the cube is solved.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        Solved.is_reached(&self.state)
    }

    /// Number of facelets in their home position.
    #[must_use]
    pub fn solved_count(&self) -> usize {
        Solved.score(&self.state)
    }

    /// Progress towards the solved state.
    #[must_use]
    pub fn progress(&self) -> Progress {
        Solved.progress(&self.state)
    }

    /// Moves applied since the last reset.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Text rendering of the unfolded net.
    #[must_use]
    pub fn net(&self) -> NetView<'_> {
        NetView::new(&self.state)
    }

    // === Checkpointing ===

    /// Capture state, RNG position, and history.
    #[must_use]
    pub fn checkpoint(&self) -> CubeCheckpoint {
        CubeCheckpoint {
            state: self.state,
            rng: self.rng.state(),
            history: self.history.clone(),
        }
    }

    /// Restore from a checkpoint. Configuration is kept.
    ///
    /// When this cube records history, the checkpoint's history must number
    /// its records `0..n` and replay from solved to the checkpoint state, so
    /// `undo_all` stays exact. Fails with `InvalidState` and leaves the cube
    /// untouched otherwise.
    pub fn restore(&mut self, checkpoint: &CubeCheckpoint) -> Result<()> {
        if self.config.record_history || !checkpoint.history.is_empty() {
            checkpoint.verify_history()?;
        }

        debug!("restore checkpoint with {} recorded moves", checkpoint.history.len());
        self.state = checkpoint.state;
        self.rng = CubeRng::from_state(&checkpoint.rng);
        self.history = checkpoint.history.clone();
        Ok(())
    }
}

impl Default for Cube {
    fn default() -> Self {
        Self::new()
    }
}

/// Serializable snapshot of a cube.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CubeCheckpoint {
    pub state: FaceletState,
    pub rng: CubeRngState,
    pub history: Vector<MoveRecord>,
}

impl CubeCheckpoint {
    /// Check that `history` is numbered in order and replays to `state`.
    pub fn verify_history(&self) -> Result<()> {
        for (index, record) in self.history.iter().enumerate() {
            if record.sequence as usize != index {
                return Err(CubeError::InvalidState(format!(
                    "history record {} is numbered {}",
                    index, record.sequence
                )));
            }
        }

        let replayed = self
            .history
            .iter()
            .fold(FaceletState::SOLVED, |state, record| {
                state.applied(record.mv.permutation())
            });
        if replayed != self.state {
            return Err(CubeError::InvalidState(
                "history does not reproduce the checkpoint state".to_string(),
            ));
        }
        Ok(())
    }
}
