use std::path::Path;

use clap::Parser;
use tracing::info;

use nutri_budget_rs::cli::{Cli, Command};
use nutri_budget_rs::error::Result;
use nutri_budget_rs::interface::{
    collect_profile, display_dashboard, display_profile, display_shopping_list,
    display_week_plan, prompt_yes_no, run_checkoff, today, validate_profile,
};
use nutri_budget_rs::logging::init_logging;
use nutri_budget_rs::models::{CostSplit, UserProfile, Weekday};
use nutri_budget_rs::state::{load_profile, write_shopping_csv, write_snapshot_json, PlanState};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command.unwrap_or_default() {
        Command::Plan {
            profile,
            shared,
            day,
            no_interactive,
        } => cmd_plan(profile.as_deref(), split_for(shared), day, no_interactive),
        Command::Macros { profile } => cmd_macros(&profile),
        Command::Shopping {
            profile,
            csv,
            shared,
        } => cmd_shopping(&profile, csv.as_deref(), split_for(shared)),
        Command::Export { profile, json } => cmd_export(&profile, &json),
    }
}

fn split_for(shared: bool) -> CostSplit {
    if shared {
        CostSplit::Shared
    } else {
        CostSplit::Solo
    }
}

/// Load and validate a profile file.
fn read_profile(path: &Path) -> Result<UserProfile> {
    let profile = validate_profile(load_profile(path)?)?;
    info!(path = %path.display(), "loaded profile");
    Ok(profile)
}

/// Onboard, show every screen, then run the check-off loop.
fn cmd_plan(
    profile_path: Option<&Path>,
    split: CostSplit,
    day: Option<Weekday>,
    no_interactive: bool,
) -> Result<()> {
    let mut state = PlanState::new();

    loop {
        let profile = match profile_path {
            Some(path) => read_profile(path)?,
            None => collect_profile()?,
        };

        state.submit_profile(profile);

        if let Some(profile) = state.profile() {
            display_profile(profile, state.targets());
        }
        display_dashboard(
            state.profile(),
            state.targets(),
            state.week_plan(),
            day.unwrap_or_else(today),
        );
        display_week_plan(state.week_plan(), state.targets());
        display_shopping_list(state.shopping_list(), split);

        if no_interactive || profile_path.is_some() {
            break;
        }

        // Re-onboarding regenerates the list and clears every check
        if !prompt_yes_no("Edit your profile and regenerate the plan?", false)? {
            break;
        }
    }

    if !no_interactive {
        let split = run_checkoff(&mut state, split)?;
        let summary = state.shopping_list().summary(split);
        println!(
            "{}/{} items checked, {:.2} of {:.2} EUR bought.",
            summary.checked_count, summary.item_count, summary.checked_price, summary.total_price
        );
    }

    Ok(())
}

/// Print daily targets only.
fn cmd_macros(profile_path: &Path) -> Result<()> {
    let mut state = PlanState::new();
    state.submit_profile(read_profile(profile_path)?);

    let targets = state.targets();
    println!("Calories: {} kcal", targets.calories);
    println!("Protein:  {} g", targets.protein);
    println!("Carbs:    {} g", targets.carbs);
    println!("Fat:      {} g", targets.fat);
    println!(
        "Budget:   {:.2} EUR/day ({:.2} EUR per meal)",
        targets.daily_budget,
        targets.per_meal_budget()
    );

    Ok(())
}

/// Print the shopping list and optionally export it.
fn cmd_shopping(profile_path: &Path, csv_path: Option<&Path>, split: CostSplit) -> Result<()> {
    let mut state = PlanState::new();
    state.submit_profile(read_profile(profile_path)?);

    display_shopping_list(state.shopping_list(), split);

    if let Some(path) = csv_path {
        write_shopping_csv(path, state.shopping_list(), split)?;
        println!("Shopping list written to {}", path.display());
    }

    Ok(())
}

/// Write the full derived snapshot as JSON.
fn cmd_export(profile_path: &Path, json_path: &Path) -> Result<()> {
    let mut state = PlanState::new();
    state.submit_profile(read_profile(profile_path)?);

    write_snapshot_json(json_path, state.snapshot())?;
    println!("Plan written to {}", json_path.display());

    Ok(())
}
