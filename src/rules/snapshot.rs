//! Engine snapshots for persistence.
//!
//! A snapshot captures the whole engine, including the RNG position, so a
//! restored game continues with exactly the dice it would have rolled.
//! Restoring checks the snapshot against the engine invariants and rejects
//! anything a live engine could never have produced.

use im::Vector;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::engine::GameEngine;
use crate::core::{ActionRecord, GameRng, GameRngState, Player, PlayerId, PlayerMap, MAX_PLAYERS};
use crate::dice::{Dice, MAX_ROLLS};

/// Errors from encoding, decoding or restoring a snapshot.
#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("snapshot encoding failed: {0}")]
    Encode(#[from] bincode::Error),

    #[error("invalid snapshot: {0}")]
    Invalid(String),
}

/// Serializable capture of a `GameEngine<GameRng>`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub dice: Dice,
    pub rolls_remaining: u8,
    pub active: PlayerId,
    pub players: PlayerMap<Player>,
    pub finished: bool,
    pub turn: u32,
    pub sequence: u32,
    pub history: Vector<ActionRecord>,
    pub rng: GameRngState,
}

impl EngineSnapshot {
    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode from bincode. Does not validate; `GameEngine::restore` does.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        Ok(bincode::deserialize(bytes)?)
    }

    fn validate(&self) -> Result<(), SnapshotError> {
        let invalid = |msg: &str| Err(SnapshotError::Invalid(msg.to_string()));

        let count = self.players.player_count();
        if count == 0 || count > MAX_PLAYERS {
            return invalid("player count out of range");
        }
        if self.active.index() >= count {
            return invalid("active player not seated");
        }
        if !self.dice.faces_valid() {
            return invalid("die face out of range");
        }
        if self.rolls_remaining > MAX_ROLLS {
            return invalid("rolls remaining out of range");
        }
        if self.rolls_remaining == MAX_ROLLS && self.dice.any_held() {
            return invalid("dice held before the first roll");
        }
        if !self.players.values().all(|p| p.card.scores_valid()) {
            return invalid("category score no roll can produce");
        }
        let all_complete = self.players.values().all(|p| p.card.is_complete());
        if self.finished != all_complete {
            return invalid("finished flag disagrees with score cards");
        }
        if self.turn == 0 {
            return invalid("turn numbers start at 1");
        }
        Ok(())
    }
}

impl GameEngine<GameRng> {
    /// Capture the full engine state.
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            dice: self.dice,
            rolls_remaining: self.rolls_remaining,
            active: self.active,
            players: self.players.clone(),
            finished: self.finished,
            turn: self.turn,
            sequence: self.sequence,
            history: self.history.clone(),
            rng: self.roller.state(),
        }
    }

    /// Rebuild an engine from a snapshot, after checking its invariants.
    pub fn restore(snapshot: EngineSnapshot) -> Result<Self, SnapshotError> {
        snapshot.validate()?;

        Ok(Self {
            dice: snapshot.dice,
            rolls_remaining: snapshot.rolls_remaining,
            active: snapshot.active,
            players: snapshot.players,
            finished: snapshot.finished,
            turn: snapshot.turn,
            sequence: snapshot.sequence,
            history: snapshot.history,
            roller: GameRng::from_state(&snapshot.rng),
        })
    }
}
