use crate::interface::dashboard::{progress_percent, ConsumedEstimate};
use crate::models::{CostSplit, DayPlan, MacroTargets, ShoppingList, UserProfile, Weekday};
use crate::planner::week_totals;

/// Width of text progress bars.
const BAR_WIDTH: usize = 20;

/// Render a percentage as a fixed-width bar.
pub fn progress_bar(percent: f64) -> String {
    let filled = ((percent / 100.0) * BAR_WIDTH as f64)
        .round()
        .clamp(0.0, BAR_WIDTH as f64) as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

/// Display today's targets against the simulated intake.
pub fn display_dashboard(
    profile: Option<&UserProfile>,
    targets: &MacroTargets,
    week: &[DayPlan],
    today: Weekday,
) {
    let today_plan = week.get(today.index());
    let consumed = ConsumedEstimate::simulate(targets, today_plan);

    println!();
    match profile {
        Some(p) => println!("=== Hi, {} ({}) ===", p.name, p.goal),
        None => println!("=== Dashboard ==="),
    }
    println!();

    let macros = [
        ("Calories", consumed.calories, targets.calories, "kcal"),
        ("Protein", consumed.protein, targets.protein, "g"),
        ("Carbs", consumed.carbs, targets.carbs, "g"),
        ("Fat", consumed.fat, targets.fat, "g"),
    ];

    for (label, current, target, unit) in macros {
        let percent = progress_percent(current as f64, target as f64);
        println!(
            "{:<9} {} {:>5} / {:<5} {}",
            label,
            progress_bar(percent),
            current,
            target,
            unit
        );
    }

    println!();
    println!(
        "Remaining today: {} kcal",
        consumed.remaining_calories(targets)
    );
    println!(
        "Daily budget: {:.2} EUR ({:.2} EUR per meal)",
        targets.daily_budget,
        targets.per_meal_budget()
    );
    println!(
        "Spent {} {:.2} EUR, {:.2} EUR left for today",
        progress_bar(progress_percent(consumed.cost, targets.daily_budget)),
        consumed.cost,
        consumed.remaining_budget(targets)
    );
    println!();
}

/// Display one day of the plan.
pub fn display_day(day: &DayPlan, targets: &MacroTargets) {
    println!(
        "--- {} --- {} kcal | {:.2} EUR",
        day.day, day.total_calories, day.total_cost
    );

    for meal in &day.meals {
        println!(
            "  {} {:<9} {:<26} {:>4} kcal  P:{:>3} C:{:>3} F:{:>3}  {:.2} EUR",
            meal.time,
            meal.slot,
            meal.name,
            meal.calories,
            meal.protein,
            meal.carbs,
            meal.fat,
            meal.cost
        );
        println!("        {}", meal.items.join(", "));
    }

    let percent = progress_percent(day.total_calories as f64, targets.calories as f64);
    println!(
        "  {} {} / {} kcal",
        progress_bar(percent),
        day.total_calories,
        targets.calories
    );
    println!("  {}", day_macro_line(day, targets));
}

/// Day macro totals next to the daily targets.
pub fn day_macro_line(day: &DayPlan, targets: &MacroTargets) -> String {
    format!(
        "P: {}/{} g  C: {}/{} g  F: {}/{} g",
        day.total_protein(),
        targets.protein,
        day.total_carbs(),
        targets.carbs,
        day.total_fat(),
        targets.fat
    )
}

/// Display the full week plan.
pub fn display_week_plan(week: &[DayPlan], targets: &MacroTargets) {
    if week.is_empty() {
        println!("No plan available. Complete onboarding first.");
        return;
    }

    let totals = week_totals(week);

    println!();
    println!("=== Meal Plan ===");
    println!(
        "Week total: {} kcal | {:.2} EUR",
        totals.calories, totals.cost
    );
    println!();

    for day in week {
        display_day(day, targets);
        println!();
    }
}

/// Display the shopping list grouped by category.
pub fn display_shopping_list(list: &ShoppingList, split: CostSplit) {
    if list.is_empty() {
        println!("Shopping list is empty.");
        return;
    }

    let summary = list.summary(split);

    println!();
    println!(
        "=== Shopping List ({}/{} checked) ===",
        summary.checked_count, summary.item_count
    );
    if split == CostSplit::Shared {
        println!("(shared cost: prices split in two)");
    }
    println!(
        "Estimated total: {:.2} EUR | bought {:.2} EUR {}",
        summary.total_price,
        summary.checked_price,
        progress_bar(summary.purchased_percent())
    );

    let max_name_len = list.iter().map(|i| i.name.len()).max().unwrap_or(10);

    for group in list.by_category() {
        println!();
        println!(
            "{} ({}/{}) - {:.2} EUR",
            group.category,
            group.checked_count(),
            group.items.len(),
            group.total_price(split)
        );
        for (index, item) in &group.items {
            let mark = if item.checked { "x" } else { " " };
            println!(
                "{:>4}. [{}] {:<width$} {:>4}  {:>6.2} EUR",
                index + 1,
                mark,
                item.name,
                item.quantity_label(),
                split.apply(item.price),
                width = max_name_len
            );
        }
    }

    println!();
}

/// Display the profile card with its targets.
pub fn display_profile(profile: &UserProfile, targets: &MacroTargets) {
    println!();
    println!("=== {} ===", profile.name);
    println!("Goal: {} ({})", profile.goal, profile.goal.description());
    println!(
        "Age: {} | Height: {} cm | Weight: {} kg",
        profile.age, profile.height, profile.weight
    );
    println!("Budget: {} EUR/week", profile.weekly_budget);
    println!(
        "Targets: {} kcal | P {}g | C {}g | F {}g",
        targets.calories, targets.protein, targets.carbs, targets.fat
    );
    if !profile.preferences.is_empty() {
        let prefs: Vec<&str> = profile.preferences.iter().map(String::as_str).collect();
        println!("Preferences: {}", prefs.join(", "));
    }
    println!();
}
