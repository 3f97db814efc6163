//! Scoring rule properties over every possible roll.

use proptest::prelude::*;

use five_dice::scoring::{
    compute_score, score_all, Category, FIVE_DICE_SCORE, FULL_HOUSE_SCORE, LARGE_STRAIGHT_SCORE,
    SMALL_STRAIGHT_SCORE,
};

fn dice() -> impl Strategy<Value = [u8; 5]> {
    prop::array::uniform5(1u8..=6)
}

/// All 6^5 ordered rolls.
fn every_roll() -> impl Iterator<Item = [u8; 5]> {
    (0..7776u32).map(|mut n| {
        let mut roll = [0u8; 5];
        for die in &mut roll {
            *die = (n % 6) as u8 + 1;
            n /= 6;
        }
        roll
    })
}

proptest! {
    #[test]
    fn score_is_within_category_range(roll in dice()) {
        for category in Category::ALL {
            let score = compute_score(category, &roll);
            prop_assert!(score <= category.max_score());
            prop_assert!(category.admits(score));

            match category {
                Category::FullHouse => {
                    prop_assert!(score == 0 || score == FULL_HOUSE_SCORE);
                }
                Category::SmallStraight => {
                    prop_assert!(score == 0 || score == SMALL_STRAIGHT_SCORE);
                }
                Category::LargeStraight => {
                    prop_assert!(score == 0 || score == LARGE_STRAIGHT_SCORE);
                }
                Category::FiveDice => {
                    prop_assert!(score == 0 || score == FIVE_DICE_SCORE);
                }
                Category::Chance => {
                    prop_assert!((5..=30).contains(&score));
                }
                _ => {}
            }
            if let Some(face) = category.upper_face() {
                prop_assert_eq!(score % u16::from(face), 0);
            }
        }
    }

    #[test]
    fn score_is_pure(roll in dice(), other in dice()) {
        let first = score_all(&roll);
        let _ = score_all(&other);
        prop_assert_eq!(score_all(&roll), first);
    }

    #[test]
    fn score_ignores_dice_order(mut roll in dice()) {
        let before = score_all(&roll);
        roll.reverse();
        prop_assert_eq!(score_all(&roll), before);
        roll.sort_unstable();
        prop_assert_eq!(score_all(&roll), before);
    }

    #[test]
    fn large_straight_implies_small_straight(roll in dice()) {
        if compute_score(Category::LargeStraight, &roll) > 0 {
            prop_assert_eq!(compute_score(Category::SmallStraight, &roll), SMALL_STRAIGHT_SCORE);
        }
    }

    #[test]
    fn of_a_kind_chain(roll in dice()) {
        if compute_score(Category::FiveDice, &roll) > 0 {
            prop_assert!(compute_score(Category::FourOfAKind, &roll) > 0);
            prop_assert_eq!(compute_score(Category::FullHouse, &roll), 0);
        }
        if compute_score(Category::FourOfAKind, &roll) > 0 {
            prop_assert!(compute_score(Category::ThreeOfAKind, &roll) > 0);
        }
    }

    #[test]
    fn upper_sections_sum_to_chance(roll in dice()) {
        let upper: u16 = Category::UPPER.iter().map(|&c| compute_score(c, &roll)).sum();
        prop_assert_eq!(upper, compute_score(Category::Chance, &roll));
    }
}

#[test]
fn test_five_of_a_kind_is_not_full_house() {
    for face in 1..=6 {
        assert_eq!(compute_score(Category::FullHouse, &[face; 5]), 0);
    }
    assert_eq!(compute_score(Category::FullHouse, &[3, 3, 3, 3, 3]), 0);
}

#[test]
fn test_straight_examples() {
    assert_eq!(compute_score(Category::SmallStraight, &[1, 2, 3, 4, 4]), 30);
    assert_eq!(compute_score(Category::LargeStraight, &[1, 2, 3, 4, 4]), 0);
    assert_eq!(compute_score(Category::SmallStraight, &[1, 2, 3, 4, 5]), 30);
    assert_eq!(compute_score(Category::LargeStraight, &[1, 2, 3, 4, 5]), 40);
}

#[test]
fn test_category_frequencies_over_every_roll() {
    let mut hits = [0u32; 13];
    for roll in every_roll() {
        for (i, score) in score_all(&roll).iter().enumerate() {
            if *score > 0 {
                hits[i] += 1;
            }
        }
    }

    // Five of a kind: 6 ordered rolls.
    assert_eq!(hits[Category::FiveDice.index()], 6);
    // Full house: 6 * 5 face pairs * C(5,3) arrangements.
    assert_eq!(hits[Category::FullHouse.index()], 300);
    // Large straight: 2 face sets * 5! orders.
    assert_eq!(hits[Category::LargeStraight.index()], 240);
    // Chance always scores.
    assert_eq!(hits[Category::Chance.index()], 7776);
}
