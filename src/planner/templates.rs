//! Fixed meal templates.
//!
//! Each slot has two variants. Shares are fractions of the daily targets;
//! they intentionally do not sum to exactly 1.0 across a day.

use crate::models::{MealSlot, Weekday};

/// Number of variants per slot; days alternate between them.
pub const TEMPLATE_VARIANTS: usize = 2;

/// Fractions of the daily macro targets carried by one meal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacroShares {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

/// Reference definition of a meal before scaling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MealTemplate {
    pub name: &'static str,
    pub time: &'static str,
    pub shares: MacroShares,
    /// Fraction of the daily budget.
    pub cost_share: f64,
    pub items: &'static [&'static str],
}

const fn shares(calories: f64, protein: f64, carbs: f64, fat: f64) -> MacroShares {
    MacroShares {
        calories,
        protein,
        carbs,
        fat,
    }
}

/// Templates indexed by `MealSlot::index()`, then by variant.
pub const MEAL_TEMPLATES: [[MealTemplate; TEMPLATE_VARIANTS]; 4] = [
    // Breakfast
    [
        MealTemplate {
            name: "Flocons d'avoine proteine",
            time: "07:30",
            shares: shares(0.25, 0.25, 0.30, 0.20),
            cost_share: 0.20,
            items: &["Flocons d'avoine", "Lait", "Banane", "Whey"],
        },
        MealTemplate {
            name: "Tartines oeuf & fromage",
            time: "07:30",
            shares: shares(0.25, 0.25, 0.28, 0.25),
            cost_share: 0.22,
            items: &["Pain complet", "Oeufs", "Fromage", "Beurre"],
        },
    ],
    // Lunch
    [
        MealTemplate {
            name: "Poulet riz brocoli",
            time: "12:30",
            shares: shares(0.35, 0.35, 0.35, 0.30),
            cost_share: 0.30,
            items: &["Filet de poulet", "Riz basmati", "Brocoli", "Huile d'olive"],
        },
        MealTemplate {
            name: "Pates bolognaise maison",
            time: "12:30",
            shares: shares(0.35, 0.33, 0.38, 0.28),
            cost_share: 0.28,
            items: &["Pates completes", "Boeuf hache 5%", "Sauce tomate", "Oignon"],
        },
    ],
    // Dinner
    [
        MealTemplate {
            name: "Saumon patate douce",
            time: "19:30",
            shares: shares(0.30, 0.30, 0.25, 0.35),
            cost_share: 0.35,
            items: &["Pave de saumon", "Patate douce", "Haricots verts"],
        },
        MealTemplate {
            name: "Omelette legumes",
            time: "19:30",
            shares: shares(0.30, 0.28, 0.22, 0.35),
            cost_share: 0.25,
            items: &["Oeufs", "Poivron", "Champignons", "Fromage rape"],
        },
    ],
    // Snack
    [
        MealTemplate {
            name: "Collation proteinee",
            time: "16:00",
            shares: shares(0.10, 0.10, 0.10, 0.10),
            cost_share: 0.15,
            items: &["Yaourt grec", "Amandes", "Miel"],
        },
        MealTemplate {
            name: "Shake post-training",
            time: "16:00",
            shares: shares(0.10, 0.12, 0.12, 0.05),
            cost_share: 0.13,
            items: &["Whey", "Banane", "Lait"],
        },
    ],
];

/// Both variants for a slot.
pub fn templates_for(slot: MealSlot) -> &'static [MealTemplate; TEMPLATE_VARIANTS] {
    &MEAL_TEMPLATES[slot.index()]
}

/// Variant used on a given day: even days take the first, odd days the second.
pub fn variant_for(day: Weekday) -> usize {
    day.index() % TEMPLATE_VARIANTS
}

/// Template served in `slot` on `day`.
pub fn template_for(slot: MealSlot, day: Weekday) -> &'static MealTemplate {
    &templates_for(slot)[variant_for(day)]
}
