//! Engine error kinds.
//!
//! Every error is recoverable and local: the failing operation leaves the
//! engine exactly as it found it.

use thiserror::Error;

use crate::dice::NUM_DICE;
use crate::scoring::Category;

/// Errors returned by engine, score card and configuration operations.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum GameError {
    #[error("die index {0} out of range (expected 0..{})", NUM_DICE)]
    InvalidDieIndex(usize),

    #[error("no rolls remaining this turn")]
    NoRollsRemaining,

    #[error("category {0} already filled")]
    CategoryAlreadyFilled(Category),

    #[error("category {0} has not been scored")]
    CategoryUnset(Category),

    #[error("game is not finished")]
    GameNotFinished,

    #[error("dice must be rolled at least once this turn")]
    NotRolledYet,

    #[error("game is already finished")]
    GameFinished,

    #[error("unknown category key: {0:?}")]
    UnknownCategory(String),

    #[error("player count must be between 1 and 255, got {0}")]
    InvalidPlayerCount(usize),

    #[error("invalid dice script: {0}")]
    InvalidScript(String),

    #[error("no roll scores {1} in category {0}")]
    ImpossibleScore(Category, u16),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            GameError::InvalidDieIndex(7).to_string(),
            "die index 7 out of range (expected 0..5)"
        );
        assert_eq!(
            GameError::CategoryAlreadyFilled(Category::FullHouse).to_string(),
            "category full_house already filled"
        );
        assert_eq!(
            GameError::UnknownCategory("yahtzee".to_string()).to_string(),
            "unknown category key: \"yahtzee\""
        );
        assert_eq!(
            GameError::ImpossibleScore(Category::FullHouse, 7).to_string(),
            "no roll scores 7 in category full_house"
        );
    }
}
