use tracing::{info, warn};

use crate::error::Result;
use crate::models::{DayPlan, ItemRef, MacroTargets, ShoppingList, UserProfile};
use crate::state::snapshot::PlanSnapshot;

/// Owns the current profile and everything derived from it.
///
/// Starts with default targets and an empty plan and list. Derived data is
/// read-only outside of `submit_profile` and `toggle_item`.
#[derive(Debug, Clone, Default)]
pub struct PlanState {
    current: PlanSnapshot,
}

impl PlanState {
    /// Create a state holder with no profile yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a profile and regenerate targets, plan and list together.
    ///
    /// Any checked shopping items are lost. The profile is not validated here.
    pub fn submit_profile(&mut self, profile: UserProfile) -> &PlanSnapshot {
        info!(profile = %profile.debug_string(), "submitting profile");
        self.current = PlanSnapshot::derive(profile);
        &self.current
    }

    /// Flip `checked` on one shopping item and return its new state.
    ///
    /// An invalid reference is reported and leaves the list unchanged.
    pub fn toggle_item(&mut self, item: &ItemRef) -> Result<bool> {
        self.current.shopping_list.toggle(item).inspect_err(|e| {
            warn!(item = %item, error = %e, "rejected shopping item toggle");
        })
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.current.profile.as_ref()
    }

    pub fn targets(&self) -> &MacroTargets {
        &self.current.targets
    }

    pub fn week_plan(&self) -> &[DayPlan] {
        &self.current.week_plan
    }

    pub fn shopping_list(&self) -> &ShoppingList {
        &self.current.shopping_list
    }

    pub fn snapshot(&self) -> &PlanSnapshot {
        &self.current
    }

    /// Whether onboarding has completed at least once.
    pub fn has_profile(&self) -> bool {
        self.current.profile.is_some()
    }

    pub(crate) fn into_snapshot(self) -> PlanSnapshot {
        self.current
    }
}
