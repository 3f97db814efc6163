//! Core engine types: players, RNG, configuration, actions, errors.
//!
//! These are the building blocks the dice, scoring and rules modules share.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use action::{Action, ActionRecord};
pub use config::{GameConfig, MAX_PLAYERS};
pub use error::GameError;
pub use player::{Player, PlayerId, PlayerMap};
pub use rng::{DieRoller, GameRng, GameRngState, ScriptedRoller};
