use std::ops::RangeInclusive;

use dialoguer::{Confirm, Input, MultiSelect, Select};
use strsim::jaro_winkler;

use crate::error::Result;
use crate::interface::onboarding::*;
use crate::interface::render::display_shopping_list;
use crate::models::{CostSplit, Goal, ItemRef, ShoppingList, UserProfile};
use crate::state::PlanState;

/// Minimum Jaro-Winkler score for a name suggestion.
const FUZZY_THRESHOLD: f64 = 0.7;

/// Maximum suggestions offered at once.
const MAX_SUGGESTIONS: usize = 5;

/// Prompt for the user's first name.
pub fn prompt_name() -> Result<String> {
    let input: String = Input::new()
        .with_prompt("Your first name")
        .allow_empty(true)
        .interact_text()?;

    Ok(normalize_name(&input))
}

/// Prompt for a number within an onboarding range.
pub fn prompt_in_range(prompt: &str, default: f64, range: RangeInclusive<f64>) -> Result<f64> {
    let hint = format!("{} ({}-{})", prompt, range.start(), range.end());
    let value: f64 = Input::new()
        .with_prompt(hint)
        .default(default)
        .validate_with(|v: &f64| -> std::result::Result<(), String> {
            if range.contains(v) {
                Ok(())
            } else {
                Err(format!("Enter a value between {} and {}", range.start(), range.end()))
            }
        })
        .interact_text()?;

    Ok(value)
}

/// Prompt for the body-composition goal.
pub fn prompt_goal() -> Result<Goal> {
    let options: Vec<String> = Goal::ALL
        .iter()
        .map(|g| format!("{} ({})", g.name(), g.description()))
        .collect();

    let selection = Select::new()
        .with_prompt("Your goal")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(Goal::ALL[selection])
}

/// Prompt for the weekly food budget, in steps of 5 EUR.
pub fn prompt_weekly_budget() -> Result<f64> {
    let options = weekly_budget_options();
    let labels: Vec<String> = options
        .iter()
        .map(|b| format!("{:>3} EUR/week  ({:.2} EUR/day)", b, b / 7.0))
        .collect();
    let default = options
        .iter()
        .position(|b| *b == DEFAULT_WEEKLY_BUDGET)
        .unwrap_or(0);

    let selection = Select::new()
        .with_prompt("Weekly food budget")
        .items(&labels)
        .default(default)
        .interact()?;

    Ok(options[selection])
}

/// Prompt for dietary preference tags.
pub fn prompt_preferences() -> Result<Vec<String>> {
    let selection = MultiSelect::new()
        .with_prompt("Dietary preferences (space to select, enter to confirm)")
        .items(&PREFERENCE_OPTIONS)
        .interact()?;

    Ok(selection
        .into_iter()
        .map(|i| PREFERENCE_OPTIONS[i].to_string())
        .collect())
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Run the four onboarding steps and return a validated profile.
pub fn collect_profile() -> Result<UserProfile> {
    let name = prompt_name()?;
    let age = prompt_in_range("Age", DEFAULT_AGE, AGE_RANGE)?;
    let height = prompt_in_range("Height (cm)", DEFAULT_HEIGHT_CM, HEIGHT_RANGE_CM)?;
    let weight = prompt_in_range("Weight (kg)", DEFAULT_WEIGHT_KG, WEIGHT_RANGE_KG)?;
    let goal = prompt_goal()?;
    let weekly_budget = prompt_weekly_budget()?;
    let preferences = prompt_preferences()?;

    let profile = UserProfile::new(name, age, height, weight, goal, weekly_budget)
        .with_preferences(preferences);

    validate_profile(profile)
}

/// One parsed line of the check-off loop.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckoffCommand {
    Finish,
    ToggleSplit,
    /// Item number as typed, 1-based.
    Number(usize),
    Name(String),
}

/// Parse check-off input. Numbers are 1-based as displayed.
pub fn parse_checkoff_input(input: &str) -> CheckoffCommand {
    let input = input.trim();
    if input.is_empty() {
        return CheckoffCommand::Finish;
    }
    if input.eq_ignore_ascii_case("s") {
        return CheckoffCommand::ToggleSplit;
    }
    match input.parse::<usize>() {
        Ok(n) => CheckoffCommand::Number(n),
        Err(_) => CheckoffCommand::Name(input.to_string()),
    }
}

/// Map a displayed item number to a list reference.
///
/// The error message quotes the number as the user typed it.
pub fn item_for_number(
    list: &ShoppingList,
    number: usize,
) -> std::result::Result<ItemRef, String> {
    match number.checked_sub(1) {
        Some(index) if index < list.len() => Ok(ItemRef::Index(index)),
        _ => Err(format!("No item number {} (choose 1-{})", number, list.len())),
    }
}

/// Item indices whose names resemble `query`, best match first.
pub fn fuzzy_candidates(list: &ShoppingList, query: &str) -> Vec<(usize, f64)> {
    let query = query.to_lowercase();
    let mut candidates: Vec<(usize, f64)> = list
        .iter()
        .enumerate()
        .map(|(i, item)| (i, jaro_winkler(&item.name.to_lowercase(), &query)))
        .filter(|(_, score)| *score > FUZZY_THRESHOLD)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    candidates.truncate(MAX_SUGGESTIONS);
    candidates
}

/// Resolve a typed name to an item, asking the user when only fuzzy matches exist.
fn resolve_name(list: &ShoppingList, name: &str) -> Result<Option<ItemRef>> {
    if list.position(name).is_some() {
        return Ok(Some(ItemRef::Name(name.to_string())));
    }

    let candidates = fuzzy_candidates(list, name);

    if candidates.is_empty() {
        println!("No matching item found for '{}'", name);
        return Ok(None);
    }

    if candidates.len() == 1 {
        let index = candidates[0].0;
        let item_name = &list.items()[index].name;
        let confirm = Confirm::new()
            .with_prompt(format!("Did you mean '{}'?", item_name))
            .default(true)
            .interact()?;

        return Ok(confirm.then_some(ItemRef::Index(index)));
    }

    // Multiple matches - let user select
    let mut options: Vec<String> = candidates
        .iter()
        .map(|(i, _)| list.items()[*i].name.clone())
        .collect();
    options.push("None of these".to_string());

    let selection = Select::new()
        .with_prompt("Which did you mean?")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(candidates.get(selection).map(|(i, _)| ItemRef::Index(*i)))
}

/// Interactive check-off loop over the current shopping list.
///
/// Returns the cost split the user ended with.
pub fn run_checkoff(state: &mut PlanState, mut split: CostSplit) -> Result<CostSplit> {
    loop {
        let input: String = Input::new()
            .with_prompt("Check item (number or name, 's' = shared cost, Enter = done)")
            .allow_empty(true)
            .interact_text()?;

        let item = match parse_checkoff_input(&input) {
            CheckoffCommand::Finish => break,
            CheckoffCommand::ToggleSplit => {
                split = split.toggled();
                display_shopping_list(state.shopping_list(), split);
                continue;
            }
            CheckoffCommand::Number(n) => match item_for_number(state.shopping_list(), n) {
                Ok(item) => item,
                Err(msg) => {
                    println!("{}", msg);
                    continue;
                }
            },
            CheckoffCommand::Name(name) => match resolve_name(state.shopping_list(), &name)? {
                Some(item) => item,
                None => continue,
            },
        };

        match state.toggle_item(&item) {
            Ok(_) => display_shopping_list(state.shopping_list(), split),
            Err(e) if e.is_invalid_reference() => println!("{}", e),
            Err(e) => return Err(e),
        }
    }

    Ok(split)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Goal;

    fn sample_list() -> ShoppingList {
        let mut state = PlanState::new();
        state.submit_profile(UserProfile::new("Lea", 21.0, 178.0, 75.0, Goal::Bulk, 50.0));
        state.shopping_list().clone()
    }

    #[test]
    fn test_parse_checkoff_input() {
        assert_eq!(parse_checkoff_input("  "), CheckoffCommand::Finish);
        assert_eq!(parse_checkoff_input("S"), CheckoffCommand::ToggleSplit);
        assert_eq!(parse_checkoff_input("3"), CheckoffCommand::Number(3));
        assert_eq!(parse_checkoff_input("0"), CheckoffCommand::Number(0));
        assert_eq!(
            parse_checkoff_input("Miel"),
            CheckoffCommand::Name("Miel".to_string())
        );
    }

    #[test]
    fn test_item_numbers_are_one_based() {
        let list = sample_list();
        assert_eq!(item_for_number(&list, 1), Ok(ItemRef::Index(0)));
        assert_eq!(
            item_for_number(&list, list.len()),
            Ok(ItemRef::Index(list.len() - 1))
        );
    }

    #[test]
    fn test_rejected_numbers_echo_user_input() {
        let list = sample_list();
        let len = list.len();

        let msg = item_for_number(&list, 0).unwrap_err();
        assert_eq!(msg, format!("No item number 0 (choose 1-{})", len));

        let msg = item_for_number(&list, len + 5).unwrap_err();
        assert_eq!(msg, format!("No item number {} (choose 1-{})", len + 5, len));
        assert!(!msg.contains(&(len + 4).to_string()));
    }

    #[test]
    fn test_fuzzy_candidates_finds_typos() {
        let list = sample_list();
        let candidates = fuzzy_candidates(&list, "brocolli");
        assert!(!candidates.is_empty());
        assert_eq!(list.items()[candidates[0].0].name, "Brocoli");
    }

    #[test]
    fn test_fuzzy_candidates_none_for_garbage() {
        let list = sample_list();
        assert!(fuzzy_candidates(&list, "zzzzqqq").is_empty());
    }
}
