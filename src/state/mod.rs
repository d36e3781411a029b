mod export;
mod manager;
mod shared;
mod snapshot;

pub use export::{load_profile, write_shopping_csv, write_snapshot_json};
pub use manager::PlanState;
pub use shared::SharedPlanState;
pub use snapshot::PlanSnapshot;
