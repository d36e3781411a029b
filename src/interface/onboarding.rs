//! Onboarding ranges and profile validation.
//!
//! The planner trusts its input, so every profile passes through here first.

use std::ops::RangeInclusive;

use crate::error::{PlanError, Result};
use crate::models::UserProfile;

pub const AGE_RANGE: RangeInclusive<f64> = 16.0..=40.0;
pub const HEIGHT_RANGE_CM: RangeInclusive<f64> = 150.0..=210.0;
pub const WEIGHT_RANGE_KG: RangeInclusive<f64> = 40.0..=140.0;
pub const WEEKLY_BUDGET_RANGE: RangeInclusive<f64> = 20.0..=120.0;

/// Budget choices offered by the interactive form.
pub const WEEKLY_BUDGET_STEP: usize = 5;

/// Name used when the user leaves it blank.
pub const DEFAULT_NAME: &str = "Etudiant";

/// Dietary tags offered during onboarding.
pub const PREFERENCE_OPTIONS: [&str; 6] = [
    "Lactose-free",
    "Gluten-free",
    "Vegetarian",
    "Halal",
    "No pork",
    "Organic preferred",
];

/// Interactive defaults, matching a typical student profile.
pub const DEFAULT_AGE: f64 = 21.0;
pub const DEFAULT_HEIGHT_CM: f64 = 178.0;
pub const DEFAULT_WEIGHT_KG: f64 = 75.0;
pub const DEFAULT_WEEKLY_BUDGET: f64 = 50.0;

/// Trimmed name, or the default when blank.
pub fn normalize_name(name: &str) -> String {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        DEFAULT_NAME.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Check one numeric field against its range.
pub fn check_range(
    field: &str,
    value: f64,
    range: &RangeInclusive<f64>,
    unit: &str,
) -> Result<()> {
    if value.is_finite() && range.contains(&value) {
        return Ok(());
    }
    Err(PlanError::InvalidProfile(format!(
        "{} must be between {} and {}{}, got {}",
        field,
        range.start(),
        range.end(),
        unit,
        value
    )))
}

/// Weekly budget options for the prompt: 20, 25, ..., 120.
pub fn weekly_budget_options() -> Vec<f64> {
    let start = *WEEKLY_BUDGET_RANGE.start() as usize;
    let end = *WEEKLY_BUDGET_RANGE.end() as usize;
    (start..=end)
        .step_by(WEEKLY_BUDGET_STEP)
        .map(|v| v as f64)
        .collect()
}

/// Validate a completed profile and fill in the default name.
pub fn validate_profile(mut profile: UserProfile) -> Result<UserProfile> {
    check_range("Age", profile.age, &AGE_RANGE, "")?;
    check_range("Height", profile.height, &HEIGHT_RANGE_CM, " cm")?;
    check_range("Weight", profile.weight, &WEIGHT_RANGE_KG, " kg")?;
    check_range("Weekly budget", profile.weekly_budget, &WEEKLY_BUDGET_RANGE, " EUR")?;
    profile.name = normalize_name(&profile.name);
    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Goal;

    fn sample_profile() -> UserProfile {
        UserProfile::new(
            "  ",
            DEFAULT_AGE,
            DEFAULT_HEIGHT_CM,
            DEFAULT_WEIGHT_KG,
            Goal::Bulk,
            DEFAULT_WEEKLY_BUDGET,
        )
    }

    #[test]
    fn test_valid_profile_gets_default_name() {
        let profile = validate_profile(sample_profile()).unwrap();
        assert_eq!(profile.name, DEFAULT_NAME);
    }

    #[test]
    fn test_out_of_range_fields_rejected() {
        let mut young = sample_profile();
        young.age = 12.0;
        assert!(matches!(validate_profile(young), Err(PlanError::InvalidProfile(_))));

        let mut heavy = sample_profile();
        heavy.weight = 200.0;
        assert!(validate_profile(heavy).is_err());

        let mut broke = sample_profile();
        broke.weekly_budget = -5.0;
        assert!(validate_profile(broke).is_err());

        let mut nan = sample_profile();
        nan.height = f64::NAN;
        assert!(validate_profile(nan).is_err());
    }

    #[test]
    fn test_range_bounds_inclusive() {
        assert!(check_range("Age", 16.0, &AGE_RANGE, "").is_ok());
        assert!(check_range("Age", 40.0, &AGE_RANGE, "").is_ok());
    }

    #[test]
    fn test_weekly_budget_options() {
        let options = weekly_budget_options();
        assert_eq!(options.first(), Some(&20.0));
        assert_eq!(options.last(), Some(&120.0));
        assert_eq!(options.len(), 21);
    }
}
