//! Category scoring rules.
//!
//! `compute_score` is a pure function of its arguments. The engine's preview
//! and commit paths both call it, so a preview always matches what scoring
//! records.

use super::category::{Category, NUM_CATEGORIES};
use crate::dice::{FACES, NUM_DICE};

pub const UPPER_BONUS_THRESHOLD: u16 = 63;
pub const UPPER_BONUS: u16 = 35;
pub const FULL_HOUSE_SCORE: u16 = 25;
pub const SMALL_STRAIGHT_SCORE: u16 = 30;
pub const LARGE_STRAIGHT_SCORE: u16 = 40;
pub const FIVE_DICE_SCORE: u16 = 50;

/// Score `dice` in `category`.
///
/// Dice order does not matter. Faces outside `1..=6` are not rejected:
/// they never match an upper category or a pattern, but still add to the
/// sum-based categories.
///
/// ```
/// use five_dice::scoring::{compute_score, Category};
///
/// assert_eq!(compute_score(Category::Threes, &[3, 3, 1, 3, 6]), 9);
/// assert_eq!(compute_score(Category::FullHouse, &[2, 2, 5, 5, 5]), 25);
/// assert_eq!(compute_score(Category::FullHouse, &[5, 5, 5, 5, 5]), 0);
/// ```
#[must_use]
pub fn compute_score(category: Category, dice: &[u8; NUM_DICE]) -> u16 {
    let counts = face_counts(dice);

    match category {
        Category::ThreeOfAKind => sum_if(dice, max_count(&counts) >= 3),
        Category::FourOfAKind => sum_if(dice, max_count(&counts) >= 4),
        Category::FullHouse => award(is_full_house(&counts), FULL_HOUSE_SCORE),
        Category::SmallStraight => award(has_small_straight(&counts), SMALL_STRAIGHT_SCORE),
        Category::LargeStraight => award(is_large_straight(&counts), LARGE_STRAIGHT_SCORE),
        Category::FiveDice => award(max_count(&counts) == NUM_DICE as u8, FIVE_DICE_SCORE),
        Category::Chance => sum(dice),
        upper => upper
            .upper_face()
            .map_or(0, |face| u16::from(counts[face as usize]) * u16::from(face)),
    }
}

/// Score `dice` in every category, indexed by `Category::index`.
#[must_use]
pub fn score_all(dice: &[u8; NUM_DICE]) -> [u16; NUM_CATEGORIES] {
    Category::ALL.map(|category| compute_score(category, dice))
}

/// Per-face counts, indexed by face (index 0 unused).
fn face_counts(dice: &[u8; NUM_DICE]) -> [u8; FACES as usize + 1] {
    let mut counts = [0u8; FACES as usize + 1];
    for face in 1..=FACES {
        counts[face as usize] = dice.iter().filter(|&&d| d == face).count() as u8;
    }
    counts
}

fn max_count(counts: &[u8]) -> u8 {
    counts.iter().copied().max().unwrap_or(0)
}

fn sum(dice: &[u8; NUM_DICE]) -> u16 {
    dice.iter().map(|&d| u16::from(d)).sum()
}

fn sum_if(dice: &[u8; NUM_DICE], condition: bool) -> u16 {
    if condition {
        sum(dice)
    } else {
        0
    }
}

fn award(condition: bool, points: u16) -> u16 {
    if condition {
        points
    } else {
        0
    }
}

/// Exactly a 3 + 2 split. Five of a kind does not count.
fn is_full_house(counts: &[u8]) -> bool {
    counts.contains(&3) && counts.contains(&2)
}

/// Distinct faces cover 1-4, 2-5 or 3-6.
fn has_small_straight(counts: &[u8]) -> bool {
    [1usize, 2, 3]
        .iter()
        .any(|&low| (low..low + 4).all(|face| counts[face] > 0))
}

/// Distinct faces are exactly 1-5 or 2-6.
fn is_large_straight(counts: &[u8]) -> bool {
    let present = |face: usize| counts[face] > 0;
    let distinct = (1..=FACES as usize).filter(|&f| present(f)).count();
    distinct == NUM_DICE && (!present(1) || !present(6))
}
