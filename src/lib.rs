//! # five-dice
//!
//! Engine for Five Dice, a turn-based dice scoring game in the Yahtzee
//! family.
//!
//! ## Design Principles
//!
//! 1. **Explicit Instances**: A `GameEngine` is built by the caller and
//!    threaded through explicitly. No global session state.
//!
//! 2. **N-Player**: Player count comes from `GameConfig`. The classic table
//!    seats two, but nothing in the rules assumes it.
//!
//! 3. **Injected Randomness**: Dice come from a `DieRoller` the engine owns.
//!    Seeded `GameRng` in production, `ScriptedRoller` in tests.
//!
//! 4. **All-or-Nothing Operations**: Every mutator either succeeds fully or
//!    returns a `GameError` with state untouched.
//!
//! ## Example
//!
//! ```
//! use five_dice::{Category, GameConfig, GameEngine};
//!
//! let mut engine = GameEngine::new(GameConfig::default().with_seed(7)).unwrap();
//!
//! engine.roll_dice().unwrap();
//! engine.toggle_hold(0).unwrap();
//! engine.roll_dice().unwrap();
//!
//! let preview = engine.preview(Category::Chance);
//! assert_eq!(engine.score_category(Category::Chance), Ok(preview));
//! assert_eq!(engine.rolls_remaining(), 3);
//! assert_eq!(engine.active_player_name(), "Player 2");
//! ```
//!
//! ## Modules
//!
//! - `core`: Player IDs, RNG, configuration, actions, errors
//! - `dice`: The five dice and their hold flags
//! - `scoring`: Categories, scoring rules, score cards
//! - `rules`: `GameEngine`, results, snapshots

pub mod core;
pub mod dice;
pub mod rules;
pub mod scoring;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, DieRoller, GameConfig, GameError, GameRng, GameRngState, Player,
    PlayerId, PlayerMap, ScriptedRoller,
};

pub use crate::dice::{Dice, FACES, MAX_ROLLS, NUM_DICE};

pub use crate::scoring::{compute_score, score_all, Category, ScoreCard};

pub use crate::rules::{EngineSnapshot, GameEngine, GameResult, SnapshotError, TurnPhase};
