use serde::{Deserialize, Serialize};

use crate::models::{DayPlan, MacroTargets, ShoppingList, UserProfile};
use crate::planner::{compute_macros, generate_shopping_list, generate_week_plan};

/// Everything derived from one profile, replaced as a unit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanSnapshot {
    pub profile: Option<UserProfile>,
    pub targets: MacroTargets,
    pub week_plan: Vec<DayPlan>,
    pub shopping_list: ShoppingList,
}

impl PlanSnapshot {
    /// Run the full pipeline: targets, then week plan, then shopping list.
    pub fn derive(profile: UserProfile) -> Self {
        let targets = compute_macros(&profile);
        let week_plan = generate_week_plan(&targets, &profile);
        let shopping_list = generate_shopping_list(&week_plan);

        Self {
            profile: Some(profile),
            targets,
            week_plan,
            shopping_list,
        }
    }
}
