//! Scramble generation and sequence inversion.
//!
//! Scrambles are drawn i.i.d. and uniformly from the 12 generators. They are
//! not reduced: a move may be followed by its own inverse, in which case the
//! pair cancels.

use log::debug;
use rand::Rng;

use crate::core::{Move, MoveSequence};

/// Draw `length` moves uniformly, with replacement.
///
/// ```
/// use rubiks_engine::core::CubeRng;
/// use rubiks_engine::sequence::random_sequence;
///
/// let mut rng = CubeRng::new(7);
/// let scramble = random_sequence(&mut rng, 25);
/// assert_eq!(scramble.len(), 25);
/// ```
pub fn random_sequence<R: Rng + ?Sized>(rng: &mut R, length: usize) -> MoveSequence {
    let moves: MoveSequence = (0..length)
        .map(|_| Move::ALL[rng.gen_range(0..Move::ALL.len())])
        .collect();
    debug!("generated scramble of {} moves", length);
    moves
}

/// The sequence that undoes `moves`: reversed, each move face-inverted.
#[must_use]
pub fn invert_sequence(moves: &[Move]) -> MoveSequence {
    moves.iter().rev().map(|mv| mv.inverse()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CubeRng, FaceletState};
    use crate::sequence::apply_sequence;

    #[test]
    fn test_random_sequence_length() {
        let mut rng = CubeRng::new(42);
        assert_eq!(random_sequence(&mut rng, 0).len(), 0);
        assert_eq!(random_sequence(&mut rng, 1).len(), 1);
        assert_eq!(random_sequence(&mut rng, 100).len(), 100);
    }

    #[test]
    fn test_random_sequence_is_deterministic_per_seed() {
        let a = random_sequence(&mut CubeRng::new(5), 30);
        let b = random_sequence(&mut CubeRng::new(5), 30);
        let c = random_sequence(&mut CubeRng::new(6), 30);

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_random_sequence_covers_every_move() {
        let mut rng = CubeRng::new(1);
        let moves = random_sequence(&mut rng, 2000);

        let mut counts = [0usize; 12];
        for mv in &moves {
            counts[mv.index()] += 1;
        }
        // Expected ~167 each; a uniform draw never gets near these bounds.
        assert!(counts.iter().all(|&n| n > 80 && n < 260), "{:?}", counts);
    }

    #[test]
    fn test_invert_sequence_example() {
        assert_eq!(
            invert_sequence(&[Move::WR, Move::RR]).as_slice(),
            &[Move::RL, Move::WL]
        );
        assert!(invert_sequence(&[]).is_empty());
    }

    #[test]
    fn test_invert_undoes_scramble() {
        let mut rng = CubeRng::new(99);
        let scramble = random_sequence(&mut rng, 50);

        let scrambled = apply_sequence(&FaceletState::new(), &scramble);
        let restored = apply_sequence(&scrambled, &invert_sequence(&scramble));

        assert!(restored.is_solved());
    }

    #[test]
    fn test_reverse_alone_does_not_invert() {
        let moves = [Move::WR, Move::RR];
        let reversed: Vec<Move> = moves.iter().rev().copied().collect();
        let flipped: Vec<Move> = moves.iter().map(|mv| mv.inverse()).collect();

        let scrambled = apply_sequence(&FaceletState::new(), &moves);
        assert!(!apply_sequence(&scrambled, &reversed).is_solved());
        assert!(!apply_sequence(&scrambled, &flipped).is_solved());
    }
}
