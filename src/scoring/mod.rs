//! Categories, scoring rules and score cards.

pub mod card;
pub mod category;
pub mod rules;

pub use card::ScoreCard;
pub use category::{Category, NUM_CATEGORIES};
pub use rules::{
    compute_score, score_all, FIVE_DICE_SCORE, FULL_HOUSE_SCORE, LARGE_STRAIGHT_SCORE,
    SMALL_STRAIGHT_SCORE, UPPER_BONUS, UPPER_BONUS_THRESHOLD,
};
