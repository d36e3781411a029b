pub mod plan;
pub mod profile;
pub mod shopping;
pub mod targets;

pub use plan::{DayPlan, Meal, MealSlot, Weekday};
pub use profile::{Goal, UserProfile};
pub use shopping::{CategoryGroup, CostSplit, ItemRef, ShoppingItem, ShoppingList, ShoppingSummary};
pub use targets::MacroTargets;
