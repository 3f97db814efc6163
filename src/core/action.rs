//! Action vocabulary and history records.
//!
//! A turn is a short sequence of actions by the active player: one to three
//! rolls, any number of hold toggles in between, and exactly one score.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::scoring::Category;

/// A single player action.
///
/// ```
/// use five_dice::core::Action;
/// use five_dice::scoring::Category;
///
/// let turn = [Action::Roll, Action::ToggleHold(2), Action::Roll, Action::Score(Category::Chance)];
/// assert!(turn[3].ends_turn());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Re-roll every unheld die.
    Roll,
    /// Flip the hold flag on one die position.
    ToggleHold(usize),
    /// Record the current dice in a category and pass the turn.
    Score(Category),
}

impl Action {
    /// Does this action hand the turn to the next player?
    #[must_use]
    pub fn ends_turn(&self) -> bool {
        matches!(self, Action::Score(_))
    }
}

/// A recorded action with metadata for history tracking.
///
/// Used for replay, debugging and rendering a move log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    /// Turn number when action was taken (starts at 1).
    pub turn: u32,

    /// Sequence number within the turn (for ordering).
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: PlayerId, action: Action, turn: u32, sequence: u32) -> Self {
        Self {
            player,
            action,
            turn,
            sequence,
        }
    }
}
