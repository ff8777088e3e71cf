//! Applying moves to facelet states.

use log::trace;

use crate::core::{FaceletState, Move, MoveSequence, Result};

/// Apply one move, returning the new state.
#[must_use]
pub fn apply_move(state: &FaceletState, mv: Move) -> FaceletState {
    trace!("apply {}", mv);
    state.applied(mv.permutation())
}

/// Apply a move given in notation (`"Wr"`, `"Gl"`, ...).
///
/// Fails with `InvalidMove` for anything outside the 12 generators.
pub fn apply_notation(state: &FaceletState, notation: &str) -> Result<FaceletState> {
    let mv: Move = notation.parse()?;
    Ok(apply_move(state, mv))
}

/// Apply moves strictly in the given order.
#[must_use]
pub fn apply_sequence(state: &FaceletState, moves: &[Move]) -> FaceletState {
    moves
        .iter()
        .fold(*state, |acc, &mv| apply_move(&acc, mv))
}

/// Parse a whitespace-separated sequence and apply it.
///
/// The whole sequence is parsed before any move is applied.
pub fn apply_notation_sequence(state: &FaceletState, notation: &str) -> Result<FaceletState> {
    let moves: MoveSequence = notation.parse()?;
    Ok(apply_sequence(state, &moves))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CubeError, Position};

    #[test]
    fn test_apply_move_does_not_touch_input() {
        let solved = FaceletState::new();
        let turned = apply_move(&solved, Move::WR);

        assert!(solved.is_solved());
        assert!(!turned.is_solved());
        assert_eq!(turned.facelet_at(Position(2)), Position(0));
    }

    #[test]
    fn test_single_turn_moves_twenty_facelets() {
        for mv in Move::ALL {
            let state = apply_move(&FaceletState::new(), mv);
            assert_eq!(state.solved_count(), 28, "{}", mv);
        }
    }

    #[test]
    fn test_apply_notation() {
        let by_name = apply_notation(&FaceletState::new(), "Rl").unwrap();
        let by_move = apply_move(&FaceletState::new(), Move::RL);
        assert_eq!(by_name, by_move);

        assert_eq!(
            apply_notation(&FaceletState::new(), "Rx"),
            Err(CubeError::InvalidMove("Rx".to_string()))
        );
    }

    #[test]
    fn test_apply_sequence_order_matters() {
        let start = FaceletState::new();
        let a = apply_sequence(&start, &[Move::WR, Move::RR]);
        let b = apply_sequence(&start, &[Move::RR, Move::WR]);
        assert_ne!(a, b);

        assert_eq!(apply_sequence(&start, &[]), start);
    }

    #[test]
    fn test_apply_notation_sequence_is_all_or_nothing() {
        let start = FaceletState::new();
        let err = apply_notation_sequence(&start, "Wr Rr nope").unwrap_err();
        assert!(matches!(err, CubeError::InvalidSequence { index: 2, .. }));

        let ok = apply_notation_sequence(&start, "Wr Rr").unwrap();
        assert_eq!(ok, apply_sequence(&start, &[Move::WR, Move::RR]));
    }
}
