pub mod dashboard;
pub mod onboarding;
pub mod prompts;
pub mod render;

pub use dashboard::{progress_percent, today, ConsumedEstimate};
pub use onboarding::validate_profile;
pub use prompts::{collect_profile, prompt_yes_no, run_checkoff};
pub use render::{
    display_dashboard, display_day, display_profile, display_shopping_list, display_week_plan,
};
