//! Game configuration.
//!
//! A `GameConfig` names the seated players and optionally fixes the dice
//! seed. Player count is a configuration value; the default seats the two
//! players the hosted game has always started with.

use serde::{Deserialize, Serialize};

use super::error::GameError;

/// Largest supported table (bounded by `PlayerId(u8)`).
pub const MAX_PLAYERS: usize = 255;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Player names in seat order. Seat 0 moves first.
    pub player_names: Vec<String>,

    /// Dice seed. `None` draws one from the operating system.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Create a configuration for the given players.
    pub fn new<S: Into<String>>(names: impl IntoIterator<Item = S>) -> Self {
        Self {
            player_names: names.into_iter().map(Into::into).collect(),
            seed: None,
        }
    }

    /// Seat one more player.
    #[must_use]
    pub fn with_player(mut self, name: impl Into<String>) -> Self {
        self.player_names.push(name.into());
        self
    }

    /// Fix the dice seed for reproducible games.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of seated players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.player_names.len()
    }

    /// Check the player count is in `1..=MAX_PLAYERS`.
    pub fn validate(&self) -> Result<(), GameError> {
        let count = self.player_count();
        if count == 0 || count > MAX_PLAYERS {
            return Err(GameError::InvalidPlayerCount(count));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(["Player 1", "Player 2"])
    }
}
