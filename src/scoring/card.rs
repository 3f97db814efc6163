//! One player's score card.

use serde::{Deserialize, Serialize};

use super::category::{Category, NUM_CATEGORIES};
use super::rules::{UPPER_BONUS, UPPER_BONUS_THRESHOLD};
use crate::core::GameError;

/// Recorded category scores for one player.
///
/// Each category is filled at most once. Totals are derived on demand and
/// never stored.
///
/// ```
/// use five_dice::scoring::{Category, ScoreCard};
///
/// let mut card = ScoreCard::new();
/// card.set_category(Category::Chance, 22).unwrap();
///
/// assert!(card.set_category(Category::Chance, 5).is_err());
/// assert_eq!(card.get(Category::Chance), Some(22));
/// assert_eq!(card.total(), 22);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoreCard {
    pub(crate) scores: [Option<u16>; NUM_CATEGORIES],
}

impl ScoreCard {
    /// An empty card.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `value` for `category`.
    ///
    /// Fails with `CategoryAlreadyFilled` if the category already holds a
    /// value, or `ImpossibleScore` if no roll could score `value` there. The
    /// card is untouched on failure.
    pub fn set_category(&mut self, category: Category, value: u16) -> Result<(), GameError> {
        let slot = &mut self.scores[category.index()];
        if slot.is_some() {
            return Err(GameError::CategoryAlreadyFilled(category));
        }
        if !category.admits(value) {
            return Err(GameError::ImpossibleScore(category, value));
        }
        *slot = Some(value);
        Ok(())
    }

    /// The recorded value, or `None` if unused.
    #[must_use]
    pub fn get(&self, category: Category) -> Option<u16> {
        self.scores[category.index()]
    }

    /// The recorded value, or `CategoryUnset`.
    pub fn try_get(&self, category: Category) -> Result<u16, GameError> {
        self.get(category).ok_or(GameError::CategoryUnset(category))
    }

    #[must_use]
    pub fn is_filled(&self, category: Category) -> bool {
        self.get(category).is_some()
    }

    /// Every category has been used.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.scores.iter().all(Option::is_some)
    }

    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.scores.iter().filter(|s| s.is_some()).count()
    }

    /// Categories still available, in card order.
    pub fn open_categories(&self) -> impl Iterator<Item = Category> + '_ {
        Category::ALL.into_iter().filter(|&c| !self.is_filled(c))
    }

    /// (category, recorded value) pairs in card order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, Option<u16>)> + '_ {
        Category::ALL.into_iter().map(|c| (c, self.get(c)))
    }

    /// Every recorded value is one some roll could score.
    ///
    /// Always true for cards built through `set_category`; deserialized
    /// cards need checking.
    pub(crate) fn scores_valid(&self) -> bool {
        self.iter()
            .all(|(category, value)| value.map_or(true, |v| category.admits(v)))
    }

    /// Sum of the six upper categories (unset counts as 0).
    #[must_use]
    pub fn upper_total(&self) -> u16 {
        Category::UPPER.iter().filter_map(|&c| self.get(c)).sum()
    }

    /// 35 once the upper total reaches 63.
    #[must_use]
    pub fn upper_bonus(&self) -> u16 {
        if self.upper_total() >= UPPER_BONUS_THRESHOLD {
            UPPER_BONUS
        } else {
            0
        }
    }

    /// All recorded values plus the upper bonus.
    #[must_use]
    pub fn total(&self) -> u16 {
        self.scores.iter().flatten().sum::<u16>() + self.upper_bonus()
    }
}
