use std::collections::HashMap;
use std::sync::LazyLock;

// ─────────────────────────────────────────────────────────────────────────────
// Energy model (Mifflin-St Jeor, moderately active)
// ─────────────────────────────────────────────────────────────────────────────

/// Activity multiplier applied to BMR.
pub const ACTIVITY_MULTIPLIER: f64 = 1.55;

/// Daily surplus when bulking.
pub const BULK_SURPLUS_KCAL: f64 = 350.0;

/// Daily deficit when cutting.
pub const CUT_DEFICIT_KCAL: f64 = 400.0;

/// Protein grams per kg of body weight.
pub const PROTEIN_G_PER_KG: f64 = 2.0;

/// Share of daily calories allocated to fat.
pub const FAT_CALORIE_SHARE: f64 = 0.25;

pub const KCAL_PER_G_PROTEIN: i32 = 4;
pub const KCAL_PER_G_CARBS: i32 = 4;
pub const KCAL_PER_G_FAT: i32 = 9;

pub const DAYS_PER_WEEK: f64 = 7.0;

/// Main meals the daily budget is split across for the per-meal figure.
pub const MEALS_PER_BUDGET_DAY: f64 = 3.0;

// ─────────────────────────────────────────────────────────────────────────────
// Targets shown before onboarding completes
// ─────────────────────────────────────────────────────────────────────────────

pub const DEFAULT_CALORIES: i32 = 2500;
pub const DEFAULT_PROTEIN: i32 = 150;
pub const DEFAULT_CARBS: i32 = 300;
pub const DEFAULT_FAT: i32 = 70;
pub const DEFAULT_DAILY_BUDGET: f64 = 7.14;

// ─────────────────────────────────────────────────────────────────────────────
// Shopping
// ─────────────────────────────────────────────────────────────────────────────

/// Meal uses covered by one purchased unit of an ingredient.
pub const USES_PER_BULK_UNIT: u32 = 3;

/// Unit price for ingredients missing from the reference table.
pub const DEFAULT_UNIT_PRICE: f64 = 2.0;

/// Category for ingredients missing from the reference table.
pub const DEFAULT_CATEGORY: &str = "Other";

// ─────────────────────────────────────────────────────────────────────────────
// Display
// ─────────────────────────────────────────────────────────────────────────────

/// Simulated share of today's targets already eaten, for the dashboard.
pub const CONSUMED_RATIO: f64 = 0.65;

/// Price and aisle for a purchasable ingredient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IngredientInfo {
    pub unit_price: f64,
    pub category: &'static str,
}

const fn info(unit_price: f64, category: &'static str) -> IngredientInfo {
    IngredientInfo {
        unit_price,
        category,
    }
}

/// Reference prices (EUR per bulk unit) and categories, keyed by ingredient name.
pub static INGREDIENTS: LazyLock<HashMap<&'static str, IngredientInfo>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    m.insert("Flocons d'avoine", info(1.5, "Pantry"));
    m.insert("Lait", info(1.1, "Fresh"));
    m.insert("Banane", info(1.3, "Produce"));
    m.insert("Whey", info(4.5, "Supplements"));
    m.insert("Pain complet", info(1.8, "Bakery"));
    m.insert("Oeufs", info(2.5, "Fresh"));
    m.insert("Fromage", info(2.2, "Fresh"));
    m.insert("Beurre", info(1.9, "Fresh"));
    m.insert("Filet de poulet", info(5.5, "Meat"));
    m.insert("Riz basmati", info(2.0, "Pantry"));
    m.insert("Brocoli", info(1.8, "Produce"));
    m.insert("Huile d'olive", info(3.5, "Pantry"));
    m.insert("Pates completes", info(1.4, "Pantry"));
    m.insert("Boeuf hache 5%", info(4.5, "Meat"));
    m.insert("Sauce tomate", info(1.2, "Pantry"));
    m.insert("Oignon", info(0.8, "Produce"));
    m.insert("Pave de saumon", info(6.0, "Fish"));
    m.insert("Patate douce", info(2.0, "Produce"));
    m.insert("Haricots verts", info(1.5, "Produce"));
    m.insert("Poivron", info(1.5, "Produce"));
    m.insert("Champignons", info(1.8, "Produce"));
    m.insert("Fromage rape", info(1.5, "Fresh"));
    m.insert("Yaourt grec", info(2.0, "Fresh"));
    m.insert("Amandes", info(3.0, "Pantry"));
    m.insert("Miel", info(2.5, "Pantry"));
    m
});

/// Get the unit price for an ingredient, falling back to the default.
pub fn unit_price(ingredient: &str) -> f64 {
    INGREDIENTS
        .get(ingredient)
        .map(|i| i.unit_price)
        .unwrap_or(DEFAULT_UNIT_PRICE)
}

/// Get the category for an ingredient, falling back to "Other".
pub fn category(ingredient: &str) -> &'static str {
    INGREDIENTS
        .get(ingredient)
        .map(|i| i.category)
        .unwrap_or(DEFAULT_CATEGORY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_ingredient_lookup() {
        assert_eq!(unit_price("Oeufs"), 2.5);
        assert_eq!(category("Pave de saumon"), "Fish");
    }

    #[test]
    fn test_unknown_ingredient_defaults() {
        assert_eq!(unit_price("Tofu"), DEFAULT_UNIT_PRICE);
        assert_eq!(category("Tofu"), DEFAULT_CATEGORY);
    }
}
