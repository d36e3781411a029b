use std::sync::{Arc, PoisonError, RwLock};

use tracing::{info, warn};

use crate::error::Result;
use crate::models::{ItemRef, UserProfile};
use crate::state::manager::PlanState;
use crate::state::snapshot::PlanSnapshot;

/// Thread-safe plan state for callers that share one planner.
///
/// Writers are serialized by the lock. Readers clone the current `Arc` and
/// always see targets, plan and list from the same profile.
#[derive(Debug, Default)]
pub struct SharedPlanState {
    current: RwLock<Arc<PlanSnapshot>>,
}

impl SharedPlanState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive a fresh snapshot and swap it in.
    ///
    /// The pipeline runs outside the lock; only the swap is exclusive.
    pub fn submit_profile(&self, profile: UserProfile) -> Arc<PlanSnapshot> {
        info!(profile = %profile.debug_string(), "submitting profile");
        let next = Arc::new(PlanSnapshot::derive(profile));

        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Arc::clone(&next);
        next
    }

    /// Flip `checked` on one item, copying the snapshot if readers hold it.
    pub fn toggle_item(&self, item: &ItemRef) -> Result<bool> {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);

        let index = guard.shopping_list.resolve(item).inspect_err(|e| {
            warn!(item = %item, error = %e, "rejected shopping item toggle");
        })?;

        Arc::make_mut(&mut *guard)
            .shopping_list
            .toggle(&ItemRef::Index(index))
    }

    /// Current state; cheap to take and never torn.
    pub fn snapshot(&self) -> Arc<PlanSnapshot> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&*guard)
    }
}

impl From<PlanState> for SharedPlanState {
    fn from(state: PlanState) -> Self {
        Self {
            current: RwLock::new(Arc::new(state.into_snapshot())),
        }
    }
}
