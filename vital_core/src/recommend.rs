//! Diet and exercise recommendations.
//!
//! Base guidance is selected solely by BMI category from three fixed
//! templates; age-band overlays are appended afterwards, never
//! replacing the base text.

use crate::{BmiCategory, Recommendation};

const GAIN_DIET: &str = "\
FOOD TO GAIN WEIGHT:
- Milk, curd, paneer
- Rice, chapati, potatoes
- Bananas, dates
- Eggs, peanut butter";

const GAIN_EXERCISE: &str = "\
EXERCISE:
- Strength training
- Resistance workouts
- Avoid excess cardio";

const MAINTAIN_DIET: &str = "\
FOOD TO MAINTAIN WEIGHT:
- Balanced meals
- Fruits & vegetables
- Adequate protein";

const MAINTAIN_EXERCISE: &str = "\
EXERCISE:
- Walking / jogging
- Yoga or stretching";

const LOSE_DIET: &str = "\
FOOD TO LOSE WEIGHT:
- Vegetables, fruits
- Oats, brown rice
- Lean protein (dal, eggs)
- Avoid sugar & junk food";

const LOSE_EXERCISE: &str = "\
EXERCISE:
- Brisk walking
- Cardio (cycling, skipping)
- HIIT workouts";

/// Line appended to exercise guidance for ages over 40.
pub const FLEXIBILITY_LINE: &str = "Focus on yoga & flexibility";

/// Line appended to diet guidance for ages under 18.
pub const CALCIUM_LINE: &str = "Include calcium-rich foods";

/// Build diet and exercise guidance for a BMI category and age.
///
/// Pure and deterministic: identical inputs always yield identical
/// text. The two age overlays cannot both apply for any real age, but
/// they are checked independently rather than as an if/else chain.
pub fn recommend(category: BmiCategory, age: u32) -> Recommendation {
    let (diet, exercise) = match category {
        BmiCategory::Underweight => (GAIN_DIET, GAIN_EXERCISE),
        BmiCategory::Normal => (MAINTAIN_DIET, MAINTAIN_EXERCISE),
        BmiCategory::Overweight => (LOSE_DIET, LOSE_EXERCISE),
    };

    let mut diet = diet.to_string();
    let mut exercise = exercise.to_string();

    if age > 40 {
        exercise.push('\n');
        exercise.push_str("- ");
        exercise.push_str(FLEXIBILITY_LINE);
    }
    if age < 18 {
        diet.push('\n');
        diet.push_str("- ");
        diet.push_str(CALCIUM_LINE);
    }

    Recommendation { diet, exercise }
}
