use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::models::Weekday;

/// NutriBudget — macro targets, a weekly meal plan and a shopping list on a student budget.
#[derive(Parser, Debug)]
#[command(name = "nutribudget")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Onboard, then show dashboard, week plan and shopping list.
    Plan {
        /// Read the profile from a JSON file instead of prompting.
        #[arg(short, long)]
        profile: Option<PathBuf>,

        /// Start the shopping list in shared-cost mode.
        #[arg(long)]
        shared: bool,

        /// Day shown on the dashboard (defaults to today).
        #[arg(long)]
        day: Option<Weekday>,

        /// Skip the shopping check-off loop.
        #[arg(long)]
        no_interactive: bool,
    },

    /// Print daily macro targets for a profile.
    Macros {
        #[arg(short, long)]
        profile: PathBuf,
    },

    /// Print the shopping list for a profile, optionally exporting it as CSV.
    Shopping {
        #[arg(short, long)]
        profile: PathBuf,

        /// Write the list to this CSV file.
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Halve every price (flat-share mode).
        #[arg(long)]
        shared: bool,
    },

    /// Write targets, plan and shopping list for a profile as JSON.
    Export {
        #[arg(short, long)]
        profile: PathBuf,

        #[arg(long)]
        json: PathBuf,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan {
            profile: None,
            shared: false,
            day: None,
            no_interactive: false,
        }
    }
}
