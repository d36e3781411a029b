use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PlanError;
use crate::planner::rounding::round2;

/// Day of the planning week, Monday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Zero-based position in the week (Monday = 0).
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn label(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Parses full or three-letter English day names, case-insensitive.
impl FromStr for Weekday {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        Weekday::ALL
            .into_iter()
            .find(|d| {
                let label = d.label().to_lowercase();
                label == key || (key.len() == 3 && label.starts_with(&key))
            })
            .ok_or_else(|| PlanError::InvalidInput(format!("unknown weekday '{}'", s)))
    }
}

/// Meal slot within a day, in serving order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealSlot {
    pub const ALL: [MealSlot; 4] = [
        MealSlot::Breakfast,
        MealSlot::Lunch,
        MealSlot::Dinner,
        MealSlot::Snack,
    ];

    /// Position within the day (Breakfast = 0).
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn label(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "Breakfast",
            MealSlot::Lunch => "Lunch",
            MealSlot::Dinner => "Dinner",
            MealSlot::Snack => "Snack",
        }
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// A generated meal, scaled to the daily targets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    pub name: String,
    pub slot: MealSlot,

    /// Serving time label, e.g. "07:30".
    pub time: String,

    pub calories: i32,
    pub protein: i32,
    pub carbs: i32,
    pub fat: i32,

    /// EUR, rounded to cents.
    pub cost: f64,

    /// Ingredient names in recipe order.
    pub items: Vec<String>,
}

/// One day of the week plan: breakfast, lunch, dinner and snack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    pub day: Weekday,
    pub meals: [Meal; 4],
    pub total_calories: i32,
    pub total_cost: f64,
}

impl DayPlan {
    /// Build a day and compute its totals.
    ///
    /// Calories are summed exactly; cost is summed then rounded to cents.
    pub fn new(day: Weekday, meals: [Meal; 4]) -> Self {
        let total_calories = meals.iter().map(|m| m.calories).sum();
        let total_cost = round2(meals.iter().map(|m| m.cost).sum());
        Self {
            day,
            meals,
            total_calories,
            total_cost,
        }
    }

    pub fn total_protein(&self) -> i32 {
        self.meals.iter().map(|m| m.protein).sum()
    }

    pub fn total_carbs(&self) -> i32 {
        self.meals.iter().map(|m| m.carbs).sum()
    }

    pub fn total_fat(&self) -> i32 {
        self.meals.iter().map(|m| m.fat).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meal(slot: MealSlot, calories: i32, cost: f64) -> Meal {
        Meal {
            name: format!("{} test", slot),
            slot,
            time: "12:00".to_string(),
            calories,
            protein: 10,
            carbs: 20,
            fat: 5,
            cost,
            items: vec!["Oeufs".to_string()],
        }
    }

    #[test]
    fn test_day_totals() {
        let day = DayPlan::new(
            Weekday::Tuesday,
            [
                meal(MealSlot::Breakfast, 500, 1.1),
                meal(MealSlot::Lunch, 700, 2.2),
                meal(MealSlot::Dinner, 600, 3.3),
                meal(MealSlot::Snack, 200, 0.01),
            ],
        );
        assert_eq!(day.total_calories, 2000);
        assert!((day.total_cost - 6.61).abs() < 1e-9);
        assert_eq!(day.total_protein(), 40);
        assert_eq!(day.total_carbs(), 80);
    }

    #[test]
    fn test_weekday_order() {
        let indices: Vec<usize> = Weekday::ALL.iter().map(|d| d.index()).collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 4, 5, 6]);
        assert_eq!(Weekday::Sunday.label(), "Sunday");
    }

    #[test]
    fn test_weekday_from_str() {
        assert_eq!("friday".parse::<Weekday>().unwrap(), Weekday::Friday);
        assert_eq!("SAT".parse::<Weekday>().unwrap(), Weekday::Saturday);
        assert!("fr".parse::<Weekday>().is_err());
        assert!("someday".parse::<Weekday>().is_err());
    }
}
