use serde::{Deserialize, Serialize};

use crate::planner::constants::{
    DEFAULT_CALORIES, DEFAULT_CARBS, DEFAULT_DAILY_BUDGET, DEFAULT_FAT, DEFAULT_PROTEIN,
    MEALS_PER_BUDGET_DAY,
};
use crate::planner::rounding::round2;

/// Daily energy, macro and spending goals derived from a profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacroTargets {
    /// Energy in kcal.
    pub calories: i32,

    /// Grams per day.
    pub protein: i32,
    pub carbs: i32,
    pub fat: i32,

    /// EUR per day, rounded to cents.
    pub daily_budget: f64,
}

impl MacroTargets {
    /// Budget for one main meal.
    pub fn per_meal_budget(&self) -> f64 {
        round2(self.daily_budget / MEALS_PER_BUDGET_DAY)
    }
}

/// Targets shown before any profile has been submitted.
impl Default for MacroTargets {
    fn default() -> Self {
        Self {
            calories: DEFAULT_CALORIES,
            protein: DEFAULT_PROTEIN,
            carbs: DEFAULT_CARBS,
            fat: DEFAULT_FAT,
            daily_budget: DEFAULT_DAILY_BUDGET,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_targets() {
        let targets = MacroTargets::default();
        assert_eq!(targets.calories, 2500);
        assert_eq!(targets.protein, 150);
        assert_eq!(targets.carbs, 300);
        assert_eq!(targets.fat, 70);
        assert!((targets.daily_budget - 7.14).abs() < 1e-9);
    }

    #[test]
    fn test_per_meal_budget() {
        let targets = MacroTargets {
            daily_budget: 7.14,
            ..Default::default()
        };
        assert!((targets.per_meal_budget() - 2.38).abs() < 1e-9);
    }
}
