//! The thirteen score card categories.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::core::GameError;

/// Number of categories on a score card.
pub const NUM_CATEGORIES: usize = 13;

/// A score card category.
///
/// Keys are stable snake_case strings (`"full_house"`, `"five_dice"`, ...)
/// used by serde, `Display` and `FromStr`. Display names belong to the
/// presentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    // Upper section
    Ones,
    Twos,
    Threes,
    Fours,
    Fives,
    Sixes,
    // Lower section
    ThreeOfAKind,
    FourOfAKind,
    FullHouse,
    SmallStraight,
    LargeStraight,
    FiveDice,
    Chance,
}

impl Category {
    /// Every category in score card order.
    pub const ALL: [Category; NUM_CATEGORIES] = [
        Category::Ones,
        Category::Twos,
        Category::Threes,
        Category::Fours,
        Category::Fives,
        Category::Sixes,
        Category::ThreeOfAKind,
        Category::FourOfAKind,
        Category::FullHouse,
        Category::SmallStraight,
        Category::LargeStraight,
        Category::FiveDice,
        Category::Chance,
    ];

    pub const UPPER: [Category; 6] = [
        Category::Ones,
        Category::Twos,
        Category::Threes,
        Category::Fours,
        Category::Fives,
        Category::Sixes,
    ];

    pub const LOWER: [Category; 7] = [
        Category::ThreeOfAKind,
        Category::FourOfAKind,
        Category::FullHouse,
        Category::SmallStraight,
        Category::LargeStraight,
        Category::FiveDice,
        Category::Chance,
    ];

    /// Position in `Category::ALL`.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub fn is_upper(self) -> bool {
        self.upper_face().is_some()
    }

    /// The face an upper category counts, `None` for lower categories.
    #[must_use]
    pub fn upper_face(self) -> Option<u8> {
        match self {
            Category::Ones => Some(1),
            Category::Twos => Some(2),
            Category::Threes => Some(3),
            Category::Fours => Some(4),
            Category::Fives => Some(5),
            Category::Sixes => Some(6),
            _ => None,
        }
    }

    /// Stable key.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Category::Ones => "ones",
            Category::Twos => "twos",
            Category::Threes => "threes",
            Category::Fours => "fours",
            Category::Fives => "fives",
            Category::Sixes => "sixes",
            Category::ThreeOfAKind => "three_of_a_kind",
            Category::FourOfAKind => "four_of_a_kind",
            Category::FullHouse => "full_house",
            Category::SmallStraight => "small_straight",
            Category::LargeStraight => "large_straight",
            Category::FiveDice => "five_dice",
            Category::Chance => "chance",
        }
    }

    /// Highest score this category can award for a single roll.
    #[must_use]
    pub fn max_score(self) -> u16 {
        use super::rules::{
            FIVE_DICE_SCORE, FULL_HOUSE_SCORE, LARGE_STRAIGHT_SCORE, SMALL_STRAIGHT_SCORE,
        };

        match self {
            Category::FullHouse => FULL_HOUSE_SCORE,
            Category::SmallStraight => SMALL_STRAIGHT_SCORE,
            Category::LargeStraight => LARGE_STRAIGHT_SCORE,
            Category::FiveDice => FIVE_DICE_SCORE,
            // Five sixes.
            Category::ThreeOfAKind | Category::FourOfAKind | Category::Chance => 30,
            upper => upper.upper_face().map_or(0, |face| u16::from(face) * 5),
        }
    }

    /// Whether some roll scores exactly `value` in this category.
    #[must_use]
    pub fn admits(self, value: u16) -> bool {
        // Five ones up to five sixes.
        let dice_sum = 5..=30;

        match self {
            Category::FullHouse
            | Category::SmallStraight
            | Category::LargeStraight
            | Category::FiveDice => value == 0 || value == self.max_score(),
            Category::ThreeOfAKind | Category::FourOfAKind => {
                value == 0 || dice_sum.contains(&value)
            }
            Category::Chance => dice_sum.contains(&value),
            upper => upper
                .upper_face()
                .map_or(false, |face| value % u16::from(face) == 0 && value <= self.max_score()),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Category {
    type Err = GameError;

    /// Parse a stable key. The hosted game's legacy `"Five Dice"` key is
    /// also accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "Five Dice" {
            return Ok(Category::FiveDice);
        }
        Category::ALL
            .into_iter()
            .find(|c| c.key() == s)
            .ok_or_else(|| GameError::UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_matches_all_order() {
        for (i, category) in Category::ALL.iter().enumerate() {
            assert_eq!(category.index(), i);
        }
    }

    #[test]
    fn test_sections_partition_all() {
        assert!(Category::UPPER.iter().all(|c| c.is_upper()));
        assert!(Category::LOWER.iter().all(|c| !c.is_upper()));
        assert_eq!(Category::UPPER.len() + Category::LOWER.len(), NUM_CATEGORIES);
    }

    #[test]
    fn test_key_round_trip() {
        for category in Category::ALL {
            assert_eq!(category.key().parse::<Category>(), Ok(category));
            assert_eq!(category.to_string(), category.key());
        }
    }

    #[test]
    fn test_legacy_key() {
        assert_eq!("Five Dice".parse::<Category>(), Ok(Category::FiveDice));
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert_eq!(
            "yahtzee".parse::<Category>(),
            Err(GameError::UnknownCategory("yahtzee".to_string()))
        );
        assert!("Ones".parse::<Category>().is_err());
    }

    #[test]
    fn test_serde_uses_keys() {
        let json = serde_json::to_string(&Category::ThreeOfAKind).unwrap();
        assert_eq!(json, "\"three_of_a_kind\"");

        let parsed: Category = serde_json::from_str("\"five_dice\"").unwrap();
        assert_eq!(parsed, Category::FiveDice);
    }

    #[test]
    fn test_max_scores() {
        assert_eq!(Category::Ones.max_score(), 5);
        assert_eq!(Category::Sixes.max_score(), 30);
        assert_eq!(Category::FullHouse.max_score(), 25);
        assert_eq!(Category::FiveDice.max_score(), 50);
        assert_eq!(Category::Chance.max_score(), 30);
    }

    #[test]
    fn test_admits_only_reachable_scores() {
        assert!(Category::FullHouse.admits(0));
        assert!(Category::FullHouse.admits(25));
        assert!(!Category::FullHouse.admits(7));

        assert!(Category::Fours.admits(12));
        assert!(!Category::Fours.admits(13));
        assert!(!Category::Sixes.admits(10_000));

        assert!(Category::FourOfAKind.admits(0));
        assert!(!Category::FourOfAKind.admits(4));
        assert!(!Category::Chance.admits(0));
        assert!(!Category::Chance.admits(60_000));
    }
}
