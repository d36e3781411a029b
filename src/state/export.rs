use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::{CostSplit, ShoppingList, UserProfile};
use crate::state::snapshot::PlanSnapshot;

/// Load a profile from a JSON file.
///
/// Accepts both snake_case and camelCase field names.
pub fn load_profile<P: AsRef<Path>>(path: P) -> Result<UserProfile> {
    let content = fs::read_to_string(path)?;
    let profile: UserProfile = serde_json::from_str(&content)?;
    Ok(profile)
}

/// Write the shopping list to a CSV file, prices under the given split.
pub fn write_shopping_csv<P: AsRef<Path>>(
    path: P,
    list: &ShoppingList,
    split: CostSplit,
) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["name", "quantity", "category", "price", "checked"])?;

    for item in list.iter() {
        wtr.write_record([
            item.name.clone(),
            item.quantity_label(),
            item.category.clone(),
            format!("{:.2}", split.apply(item.price)),
            item.checked.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write the whole snapshot (profile, targets, plan, list) as pretty JSON.
pub fn write_snapshot_json<P: AsRef<Path>>(path: P, snapshot: &PlanSnapshot) -> Result<()> {
    let json = serde_json::to_string_pretty(snapshot)?;
    fs::write(path, json)?;
    Ok(())
}
