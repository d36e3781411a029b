use std::collections::HashMap;

use tracing::debug;

use crate::models::{DayPlan, ShoppingItem, ShoppingList};
use crate::planner::constants::{category, unit_price, USES_PER_BULK_UNIT};
use crate::planner::rounding::round2;

/// Bulk units needed to cover `uses` meal uses.
pub fn bulk_units(uses: u32) -> u32 {
    uses.div_ceil(USES_PER_BULK_UNIT)
}

/// Price for `uses` meal uses of an ingredient.
///
/// Steps every three uses rather than scaling linearly.
pub fn bulk_price(unit_price: f64, uses: u32) -> f64 {
    round2(unit_price * bulk_units(uses) as f64)
}

/// Running count for one ingredient during aggregation.
struct Tally {
    name: String,
    uses: u32,
    unit_price: f64,
    category: &'static str,
}

/// Aggregate every ingredient across the week into a priced list.
///
/// Items appear in order of first use. All start unchecked.
pub fn generate_shopping_list(week: &[DayPlan]) -> ShoppingList {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut tallies: Vec<Tally> = Vec::new();

    for meal in week.iter().flat_map(|day| day.meals.iter()) {
        for ingredient in &meal.items {
            match index.get(ingredient.as_str()) {
                Some(&i) => tallies[i].uses += 1,
                None => {
                    index.insert(ingredient, tallies.len());
                    tallies.push(Tally {
                        name: ingredient.clone(),
                        uses: 1,
                        unit_price: unit_price(ingredient),
                        category: category(ingredient),
                    });
                }
            }
        }
    }

    let items: Vec<ShoppingItem> = tallies
        .into_iter()
        .map(|t| ShoppingItem {
            price: bulk_price(t.unit_price, t.uses),
            name: t.name,
            quantity: t.uses,
            category: t.category.to_string(),
            checked: false,
        })
        .collect();

    debug!(items = items.len(), "generated shopping list");

    ShoppingList::from_items(items)
}
