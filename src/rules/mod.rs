//! Game engine, results and snapshots.

mod engine;
mod snapshot;

pub use engine::{GameEngine, GameResult, TurnPhase};
pub use snapshot::{EngineSnapshot, SnapshotError};
