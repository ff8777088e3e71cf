//! Goal and progress evaluation.
//!
//! Evaluators are read-only: they inspect a `FaceletState` and never
//! mutate it, so they are safe to call mid-sequence.

use serde::{Deserialize, Serialize};

use crate::core::{FaceletState, FACELET_COUNT};

/// A target configuration the cube can be driven towards.
///
/// `score` must equal `max_score` exactly when `is_reached` is true.
pub trait Goal {
    /// Check if the state satisfies the goal.
    fn is_reached(&self, state: &FaceletState) -> bool;

    /// How many facelets currently satisfy the goal.
    fn score(&self, state: &FaceletState) -> usize;

    /// Score of a state that satisfies the goal.
    fn max_score(&self) -> usize {
        FACELET_COUNT
    }

    /// Combined snapshot of both measures.
    fn progress(&self, state: &FaceletState) -> Progress {
        Progress {
            solved: self.is_reached(state),
            solved_count: self.score(state),
            total: self.max_score(),
        }
    }
}

/// The standard goal: every facelet in its home position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Solved;

impl Goal for Solved {
    fn is_reached(&self, state: &FaceletState) -> bool {
        state.is_solved()
    }

    fn score(&self, state: &FaceletState) -> usize {
        state.solved_count()
    }
}

/// Progress towards a goal at one point in time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    /// Goal reached.
    pub solved: bool,

    /// Facelets currently correct.
    pub solved_count: usize,

    /// Facelets that must be correct to reach the goal.
    pub total: usize,
}

impl Progress {
    /// Fraction of facelets correct, in `0.0..=1.0`.
    #[must_use]
    pub fn ratio(&self) -> f64 {
        self.solved_count as f64 / self.total as f64
    }
}

/// Check if `state` is solved.
#[must_use]
pub fn is_solved(state: &FaceletState) -> bool {
    Solved.is_reached(state)
}

/// Number of facelets in their home position.
#[must_use]
pub fn solved_count(state: &FaceletState) -> usize {
    Solved.score(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Move;
    use crate::sequence::apply_move;

    #[test]
    fn test_solved_goal_on_solved_state() {
        let state = FaceletState::new();
        let progress = Solved.progress(&state);

        assert!(progress.solved);
        assert_eq!(progress.solved_count, 48);
        assert_eq!(progress.total, 48);
        assert_eq!(progress.ratio(), 1.0);
    }

    #[test]
    fn test_progress_after_one_turn() {
        let state = apply_move(&FaceletState::new(), Move::GR);

        assert!(!is_solved(&state));
        assert_eq!(solved_count(&state), 28);
        assert!(Solved.progress(&state).ratio() < 1.0);
    }

    #[test]
    fn test_progress_serialization() {
        let progress = Solved.progress(&FaceletState::new());
        let json = serde_json::to_string(&progress).unwrap();
        let back: Progress = serde_json::from_str(&json).unwrap();
        assert_eq!(progress, back);
    }
}
