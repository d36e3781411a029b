use tracing::debug;

use crate::models::{Goal, MacroTargets, UserProfile};
use crate::planner::constants::*;
use crate::planner::rounding::{round2, round_int};

/// Basal metabolic rate (Mifflin-St Jeor, male constant).
///
/// Formula: 10 * weight + 6.25 * height - 5 * age + 5
pub fn basal_metabolic_rate(profile: &UserProfile) -> f64 {
    10.0 * profile.weight + 6.25 * profile.height - 5.0 * profile.age + 5.0
}

/// Total daily energy expenditure at the fixed activity level.
pub fn total_daily_expenditure(profile: &UserProfile) -> f64 {
    basal_metabolic_rate(profile) * ACTIVITY_MULTIPLIER
}

/// Goal-adjusted daily calories, before rounding.
pub fn goal_calories(tdee: f64, goal: Goal) -> f64 {
    match goal {
        Goal::Bulk => tdee + BULK_SURPLUS_KCAL,
        Goal::Cut => tdee - CUT_DEFICIT_KCAL,
        Goal::Maintain => tdee,
    }
}

/// Carbohydrate grams filling the calories left after protein and fat.
///
/// Clamped at 0 when protein and fat already exceed the calorie target.
pub fn remainder_carbs(calories: i32, protein: i32, fat: i32) -> i32 {
    let remaining = calories - protein * KCAL_PER_G_PROTEIN - fat * KCAL_PER_G_FAT;
    round_int(remaining as f64 / KCAL_PER_G_CARBS as f64).max(0)
}

/// Compute daily targets for a profile.
///
/// Total over any numeric input; degenerate profiles yield meaningless but
/// well-defined numbers.
pub fn compute_macros(profile: &UserProfile) -> MacroTargets {
    let tdee = total_daily_expenditure(profile);
    let calories = round_int(goal_calories(tdee, profile.goal));
    let protein = round_int(profile.weight * PROTEIN_G_PER_KG);
    let fat = round_int(calories as f64 * FAT_CALORIE_SHARE / KCAL_PER_G_FAT as f64);
    let carbs = remainder_carbs(calories, protein, fat);
    let daily_budget = round2(profile.weekly_budget / DAYS_PER_WEEK);

    debug!(
        tdee,
        calories, protein, carbs, fat, daily_budget, "computed macro targets"
    );

    MacroTargets {
        calories,
        protein,
        carbs,
        fat,
        daily_budget,
    }
}
