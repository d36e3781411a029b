//! Read-only math behind the dashboard screen.

use chrono::{Datelike, Local};

use crate::models::{DayPlan, MacroTargets, Weekday};
use crate::planner::constants::CONSUMED_RATIO;
use crate::planner::rounding::{round2, round_int};

/// Current local weekday.
pub fn today() -> Weekday {
    Weekday::ALL[Local::now().weekday().num_days_from_monday() as usize]
}

/// Progress towards a target as a percentage, capped at 100.
pub fn progress_percent(current: f64, target: f64) -> f64 {
    if target <= 0.0 {
        return 0.0;
    }
    (current / target * 100.0).clamp(0.0, 100.0)
}

/// Simulated intake so far today.
#[derive(Debug, Clone, PartialEq)]
pub struct ConsumedEstimate {
    pub calories: i32,
    pub protein: i32,
    pub carbs: i32,
    pub fat: i32,
    pub cost: f64,
}

impl ConsumedEstimate {
    /// Assume a fixed share of today's targets and of today's plan cost is used.
    pub fn simulate(targets: &MacroTargets, today: Option<&DayPlan>) -> Self {
        Self {
            calories: round_int(targets.calories as f64 * CONSUMED_RATIO),
            protein: round_int(targets.protein as f64 * CONSUMED_RATIO),
            carbs: round_int(targets.carbs as f64 * CONSUMED_RATIO),
            fat: round_int(targets.fat as f64 * CONSUMED_RATIO),
            cost: today.map(|d| round2(d.total_cost * CONSUMED_RATIO)).unwrap_or(0.0),
        }
    }

    pub fn remaining_calories(&self, targets: &MacroTargets) -> i32 {
        targets.calories - self.calories
    }

    pub fn remaining_budget(&self, targets: &MacroTargets) -> f64 {
        round2(targets.daily_budget - self.cost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Goal, UserProfile};
    use crate::planner::{compute_macros, generate_day};

    #[test]
    fn test_progress_percent() {
        assert_eq!(progress_percent(50.0, 200.0), 25.0);
        assert_eq!(progress_percent(300.0, 200.0), 100.0);
        assert_eq!(progress_percent(10.0, 0.0), 0.0);
    }

    #[test]
    fn test_simulated_consumption() {
        let profile = UserProfile::new("Lea", 21.0, 178.0, 75.0, Goal::Bulk, 50.0);
        let targets = compute_macros(&profile);
        let day = generate_day(Weekday::Monday, &targets);
        let consumed = ConsumedEstimate::simulate(&targets, Some(&day));

        // 3082 * 0.65 = 2003.3 -> 2003
        assert_eq!(consumed.calories, 2003);
        assert_eq!(consumed.remaining_calories(&targets), 1079);
        assert!(consumed.cost > 0.0);
        assert!(consumed.remaining_budget(&targets) < targets.daily_budget);
    }

    #[test]
    fn test_no_plan_means_no_cost() {
        let consumed = ConsumedEstimate::simulate(&MacroTargets::default(), None);
        assert_eq!(consumed.cost, 0.0);
        assert_eq!(consumed.calories, 1625);
    }
}
