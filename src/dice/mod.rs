//! The five dice on the table and their hold flags.

use serde::{Deserialize, Serialize};

use crate::core::{DieRoller, GameError};

/// Dice rolled each turn.
pub const NUM_DICE: usize = 5;

/// Rolls allowed per turn.
pub const MAX_ROLLS: u8 = 3;

/// Faces on each die (values are `1..=FACES`).
pub const FACES: u8 = 6;

/// Current roll, the roll before it, and which positions are held.
///
/// `previous` exists for renderers highlighting what changed. Scoring never
/// looks at it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dice {
    values: [u8; NUM_DICE],
    previous: [u8; NUM_DICE],
    held: [bool; NUM_DICE],
}

impl Dice {
    /// Fresh dice: every face shows 1, nothing held.
    #[must_use]
    pub fn new() -> Self {
        Self {
            values: [1; NUM_DICE],
            previous: [1; NUM_DICE],
            held: [false; NUM_DICE],
        }
    }

    /// Every current and previous face is in `1..=FACES`.
    pub(crate) fn faces_valid(&self) -> bool {
        self.values
            .iter()
            .chain(self.previous.iter())
            .all(|f| (1..=FACES).contains(f))
    }

    /// Current face values, in position order.
    #[must_use]
    pub fn values(&self) -> [u8; NUM_DICE] {
        self.values
    }

    /// Face values before the most recent roll.
    #[must_use]
    pub fn previous(&self) -> [u8; NUM_DICE] {
        self.previous
    }

    /// Hold flags, in position order.
    #[must_use]
    pub fn held(&self) -> [bool; NUM_DICE] {
        self.held
    }

    #[must_use]
    pub fn any_held(&self) -> bool {
        self.held.iter().any(|&h| h)
    }

    /// Faces of the held dice, in position order.
    pub fn held_values(&self) -> impl Iterator<Item = u8> + '_ {
        self.values
            .iter()
            .zip(self.held.iter())
            .filter(|&(_, &held)| held)
            .map(|(&v, _)| v)
    }

    /// Positions whose face differs from the previous roll.
    #[must_use]
    pub fn changed(&self) -> [bool; NUM_DICE] {
        std::array::from_fn(|i| self.values[i] != self.previous[i])
    }

    /// Flip the hold flag at `index`, returning the new flag.
    pub fn toggle_hold(&mut self, index: usize) -> Result<bool, GameError> {
        let flag = self
            .held
            .get_mut(index)
            .ok_or(GameError::InvalidDieIndex(index))?;
        *flag = !*flag;
        Ok(*flag)
    }

    /// Clear every hold flag.
    pub fn release_all(&mut self) {
        self.held = [false; NUM_DICE];
    }

    /// Draw a fresh face for each unheld position.
    ///
    /// The pre-roll faces become `previous`. Held positions keep their value
    /// and consume no draws.
    pub fn roll_unheld<R: DieRoller + ?Sized>(&mut self, roller: &mut R) {
        self.previous = self.values;
        for (value, &held) in self.values.iter_mut().zip(self.held.iter()) {
            if !held {
                *value = roller.roll_die();
            }
        }
    }
}

impl Default for Dice {
    fn default() -> Self {
        Self::new()
    }
}
