//! Die-draw randomness.
//!
//! The engine never reaches for process-global randomness. Every face it
//! shows comes from a `DieRoller` owned by the engine instance:
//!
//! - `GameRng`: seeded ChaCha8 stream, the production roller
//! - `ScriptedRoller`: fixed face sequence for tests and replays
//!
//! ## Reproducibility
//!
//! ```
//! use five_dice::core::{DieRoller, GameRng};
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//!
//! let faces_a: Vec<u8> = (0..10).map(|_| a.roll_die()).collect();
//! let faces_b: Vec<u8> = (0..10).map(|_| b.roll_die()).collect();
//! assert_eq!(faces_a, faces_b);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::error::GameError;
use crate::dice::FACES;

/// Source of die faces.
///
/// Implementations must return a value in `1..=6` on every call.
pub trait DieRoller {
    /// Draw one die face.
    fn roll_die(&mut self) -> u8;
}

/// Seeded RNG used for all production dice rolls.
///
/// Uses ChaCha8 for speed while keeping high-quality, uncorrelated output.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the operating system.
    ///
    /// The drawn seed is kept so the game can still be snapshotted.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this stream started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl DieRoller for GameRng {
    fn roll_die(&mut self) -> u8 {
        self.inner.gen_range(1..=FACES)
    }
}

/// Serializable RNG state for snapshots.
///
/// Uses ChaCha8 word position for O(1) serialization regardless of
/// how many faces have been drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

/// Roller that replays a fixed face sequence, cycling when exhausted.
///
/// ```
/// use five_dice::core::{DieRoller, ScriptedRoller};
///
/// let mut roller = ScriptedRoller::new([6, 5]).unwrap();
/// assert_eq!(roller.roll_die(), 6);
/// assert_eq!(roller.roll_die(), 5);
/// assert_eq!(roller.roll_die(), 6);
/// ```
#[derive(Clone, Debug)]
pub struct ScriptedRoller {
    faces: Vec<u8>,
    cursor: usize,
}

impl ScriptedRoller {
    /// Build a roller from a non-empty list of faces in `1..=6`.
    pub fn new(faces: impl IntoIterator<Item = u8>) -> Result<Self, GameError> {
        let faces: Vec<u8> = faces.into_iter().collect();
        if faces.is_empty() {
            return Err(GameError::InvalidScript("no faces".to_string()));
        }
        if let Some(bad) = faces.iter().find(|f| !(1..=FACES).contains(*f)) {
            return Err(GameError::InvalidScript(format!("face {} out of range", bad)));
        }
        Ok(Self { faces, cursor: 0 })
    }

    /// Number of faces drawn so far.
    #[must_use]
    pub fn drawn(&self) -> usize {
        self.cursor
    }
}

impl DieRoller for ScriptedRoller {
    fn roll_die(&mut self) -> u8 {
        let face = self.faces[self.cursor % self.faces.len()];
        self.cursor += 1;
        face
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.roll_die(), rng2.roll_die());
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..20).map(|_| rng1.roll_die()).collect();
        let seq2: Vec<_> = (0..20).map(|_| rng2.roll_die()).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_faces_in_range() {
        let mut rng = GameRng::new(7);
        for _ in 0..10_000 {
            let face = rng.roll_die();
            assert!((1..=6).contains(&face));
        }
    }

    #[test]
    fn test_every_face_appears() {
        let mut rng = GameRng::new(3);
        let mut seen = [false; 7];
        for _ in 0..600 {
            seen[rng.roll_die() as usize] = true;
        }
        assert!(seen[1..].iter().all(|&s| s));
    }

    #[test]
    fn test_state_restore() {
        let mut rng = GameRng::new(42);

        for _ in 0..100 {
            rng.roll_die();
        }

        let state = rng.state();
        let expected: Vec<_> = (0..10).map(|_| rng.roll_die()).collect();

        let mut restored = GameRng::from_state(&state);
        let actual: Vec<_> = (0..10).map(|_| restored.roll_die()).collect();

        assert_eq!(expected, actual);
        assert_eq!(restored.seed(), 42);
    }

    #[test]
    fn test_state_serde() {
        let state = GameRngState {
            seed: 42,
            word_pos: 12345,
        };

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameRngState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }

    #[test]
    fn test_scripted_cycles() {
        let mut roller = ScriptedRoller::new([1, 2, 3]).unwrap();
        let faces: Vec<_> = (0..7).map(|_| roller.roll_die()).collect();
        assert_eq!(faces, vec![1, 2, 3, 1, 2, 3, 1]);
        assert_eq!(roller.drawn(), 7);
    }

    #[test]
    fn test_scripted_rejects_bad_faces() {
        assert!(matches!(
            ScriptedRoller::new([1, 7]),
            Err(GameError::InvalidScript(_))
        ));
        assert!(matches!(
            ScriptedRoller::new(Vec::<u8>::new()),
            Err(GameError::InvalidScript(_))
        ));
    }
}
