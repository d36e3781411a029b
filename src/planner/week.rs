use tracing::debug;

use crate::models::{DayPlan, MacroTargets, Meal, MealSlot, UserProfile, Weekday};
use crate::planner::rounding::{round2, round_int};
use crate::planner::templates::{template_for, MealTemplate};

/// Weekly sums across all day plans.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeekTotals {
    pub calories: i32,
    pub cost: f64,
}

/// Scale a template to the daily targets.
///
/// Each macro rounds independently; cost rounds to cents.
pub fn scale_template(template: &MealTemplate, slot: MealSlot, targets: &MacroTargets) -> Meal {
    let shares = &template.shares;
    Meal {
        name: template.name.to_string(),
        slot,
        time: template.time.to_string(),
        calories: round_int(targets.calories as f64 * shares.calories),
        protein: round_int(targets.protein as f64 * shares.protein),
        carbs: round_int(targets.carbs as f64 * shares.carbs),
        fat: round_int(targets.fat as f64 * shares.fat),
        cost: round2(targets.daily_budget * template.cost_share),
        items: template.items.iter().map(|s| s.to_string()).collect(),
    }
}

/// Build one day from the variant assigned to it.
pub fn generate_day(day: Weekday, targets: &MacroTargets) -> DayPlan {
    let meals = MealSlot::ALL.map(|slot| scale_template(template_for(slot, day), slot, targets));
    DayPlan::new(day, meals)
}

/// Generate the Monday..Sunday plan.
///
/// The profile does not influence selection; preferences are informational.
/// No weekly normalization is applied, so the week may drift a few units
/// from seven times the daily target.
pub fn generate_week_plan(targets: &MacroTargets, profile: &UserProfile) -> Vec<DayPlan> {
    let plan: Vec<DayPlan> = Weekday::ALL
        .iter()
        .map(|day| generate_day(*day, targets))
        .collect();

    debug!(
        profile = %profile.name,
        days = plan.len(),
        "generated week plan"
    );

    plan
}

/// Sum calories and cost over the week.
pub fn week_totals(plan: &[DayPlan]) -> WeekTotals {
    WeekTotals {
        calories: plan.iter().map(|d| d.total_calories).sum(),
        cost: round2(plan.iter().map(|d| d.total_cost).sum()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Goal;
    use crate::planner::templates::templates_for;

    fn sample_targets() -> MacroTargets {
        MacroTargets {
            calories: 3082,
            protein: 150,
            carbs: 427,
            fat: 86,
            daily_budget: 7.14,
        }
    }

    fn sample_profile() -> UserProfile {
        UserProfile::new("Lea", 21.0, 178.0, 75.0, Goal::Bulk, 50.0)
    }

    #[test]
    fn test_scale_breakfast_a() {
        let template = &templates_for(MealSlot::Breakfast)[0];
        let meal = scale_template(template, MealSlot::Breakfast, &sample_targets());
        // 3082 * 0.25 = 770.5 -> 771
        assert_eq!(meal.calories, 771);
        // 150 * 0.25 = 37.5 -> 38
        assert_eq!(meal.protein, 38);
        // 427 * 0.30 = 128.1 -> 128
        assert_eq!(meal.carbs, 128);
        // 86 * 0.20 = 17.2 -> 17
        assert_eq!(meal.fat, 17);
        // 7.14 * 0.20 = 1.428 -> 1.43
        assert!((meal.cost - 1.43).abs() < 1e-9);
        assert_eq!(meal.items.len(), 4);
        assert_eq!(meal.time, "07:30");
    }

    #[test]
    fn test_week_structure() {
        let plan = generate_week_plan(&sample_targets(), &sample_profile());
        assert_eq!(plan.len(), 7);
        for (i, day) in plan.iter().enumerate() {
            assert_eq!(day.day, Weekday::ALL[i]);
            assert_eq!(day.meals.len(), 4);
            let sum: i32 = day.meals.iter().map(|m| m.calories).sum();
            assert_eq!(day.total_calories, sum);
            let slots: Vec<MealSlot> = day.meals.iter().map(|m| m.slot).collect();
            assert_eq!(slots, MealSlot::ALL.to_vec());
        }
    }

    #[test]
    fn test_alternate_days_repeat() {
        let plan = generate_week_plan(&sample_targets(), &sample_profile());
        assert_eq!(plan[0].meals, plan[2].meals);
        assert_eq!(plan[1].meals, plan[5].meals);
        assert_ne!(plan[0].meals, plan[1].meals);
    }

    #[test]
    fn test_week_totals_drift_is_kept() {
        let targets = sample_targets();
        let plan = generate_week_plan(&targets, &sample_profile());
        let totals = week_totals(&plan);
        let expected: i32 = plan.iter().map(|d| d.total_calories).sum();
        assert_eq!(totals.calories, expected);
        // Independent per-meal rounding, so only approximately 7x target
        assert!((totals.calories - 7 * targets.calories).abs() <= 7 * 4);
    }
}
