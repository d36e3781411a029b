pub mod constants;
pub mod macros;
pub mod rounding;
pub mod shopping;
pub mod templates;
pub mod week;

pub use constants::*;
pub use macros::{basal_metabolic_rate, compute_macros, total_daily_expenditure};
pub use rounding::{round2, round_int};
pub use shopping::{bulk_price, bulk_units, generate_shopping_list};
pub use templates::{template_for, templates_for, MealTemplate, MEAL_TEMPLATES};
pub use week::{generate_day, generate_week_plan, week_totals, WeekTotals};
