use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Body-composition goal chosen during onboarding.
///
/// The French names used by the mobile onboarding form are accepted as aliases
/// so older profile files keep loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    #[serde(alias = "masse")]
    Bulk,
    #[serde(alias = "seche")]
    Cut,
    #[serde(alias = "maintien")]
    Maintain,
}

impl Goal {
    /// All goals in the order the onboarding form lists them.
    pub const ALL: [Goal; 3] = [Goal::Bulk, Goal::Cut, Goal::Maintain];

    /// Short name used in prompts and summaries.
    pub fn name(&self) -> &'static str {
        match self {
            Goal::Bulk => "Bulk",
            Goal::Cut => "Cut",
            Goal::Maintain => "Maintain",
        }
    }

    /// One-line description of the calorie adjustment.
    pub fn description(&self) -> &'static str {
        match self {
            Goal::Bulk => "+350 kcal / day",
            Goal::Cut => "-400 kcal / day",
            Goal::Maintain => "caloric balance",
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Biometric and budget record driving every derived value.
///
/// Numeric ranges are checked by the onboarding layer before a profile
/// reaches the planner; the planner itself accepts any value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,

    /// Age in years.
    pub age: f64,

    /// Height in centimetres.
    pub height: f64,

    /// Weight in kilograms.
    pub weight: f64,

    pub goal: Goal,

    /// Food budget per week, in EUR.
    #[serde(alias = "weeklyBudget")]
    pub weekly_budget: f64,

    /// Dietary tags. Informational only, meal generation ignores them.
    #[serde(default)]
    pub preferences: BTreeSet<String>,
}

impl UserProfile {
    pub fn new(
        name: impl Into<String>,
        age: f64,
        height: f64,
        weight: f64,
        goal: Goal,
        weekly_budget: f64,
    ) -> Self {
        Self {
            name: name.into(),
            age,
            height,
            weight,
            goal,
            weekly_budget,
            preferences: BTreeSet::new(),
        }
    }

    /// Builder-style helper to attach preference tags.
    pub fn with_preferences<I, S>(mut self, preferences: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.preferences = preferences.into_iter().map(Into::into).collect();
        self
    }

    /// Debug string for logging.
    pub fn debug_string(&self) -> String {
        format!(
            "{}: {}y {}cm {}kg, goal:{}, budget:{}/week",
            self.name, self.age, self.height, self.weight, self.goal, self.weekly_budget
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_accepts_french_aliases() {
        let goal: Goal = serde_json::from_str("\"masse\"").unwrap();
        assert_eq!(goal, Goal::Bulk);
        let goal: Goal = serde_json::from_str("\"seche\"").unwrap();
        assert_eq!(goal, Goal::Cut);
        let goal: Goal = serde_json::from_str("\"maintain\"").unwrap();
        assert_eq!(goal, Goal::Maintain);
    }

    #[test]
    fn test_profile_from_camel_case_json() {
        let json = r#"{
            "name": "Lea", "age": 21, "height": 178, "weight": 75,
            "goal": "masse", "weeklyBudget": 50, "preferences": ["Halal", "Halal"]
        }"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.goal, Goal::Bulk);
        assert_eq!(profile.weekly_budget, 50.0);
        // Preferences form a set
        assert_eq!(profile.preferences.len(), 1);
    }

    #[test]
    fn test_preferences_default_to_empty() {
        let json = r#"{"name": "Tom", "age": 30, "height": 170, "weight": 70, "goal": "cut", "weekly_budget": 40}"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert!(profile.preferences.is_empty());
    }
}
