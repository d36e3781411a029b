use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{PlanError, Result};
use crate::planner::rounding::round2;

/// One aggregated ingredient on the weekly shopping list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingItem {
    pub name: String,

    /// Number of meal uses across the week.
    pub quantity: u32,

    /// EUR for the bulk units covering `quantity` uses.
    pub price: f64,

    pub category: String,

    #[serde(default)]
    pub checked: bool,
}

impl ShoppingItem {
    /// Quantity as displayed, e.g. "x5".
    pub fn quantity_label(&self) -> String {
        format!("x{}", self.quantity)
    }
}

/// Reference to a shopping item for check-off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemRef {
    Index(usize),
    /// Case-insensitive exact name.
    Name(String),
}

impl From<usize> for ItemRef {
    fn from(index: usize) -> Self {
        ItemRef::Index(index)
    }
}

impl From<&str> for ItemRef {
    fn from(name: &str) -> Self {
        ItemRef::Name(name.to_string())
    }
}

impl fmt::Display for ItemRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemRef::Index(i) => write!(f, "#{}", i),
            ItemRef::Name(name) => f.write_str(name),
        }
    }
}

/// How displayed prices are shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CostSplit {
    #[default]
    Solo,
    /// Flat-share mode: every price is split between two people.
    Shared,
}

impl CostSplit {
    pub fn apply(&self, price: f64) -> f64 {
        match self {
            CostSplit::Solo => price,
            CostSplit::Shared => price / 2.0,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            CostSplit::Solo => CostSplit::Shared,
            CostSplit::Shared => CostSplit::Solo,
        }
    }
}

/// Totals for the shopping screen header.
#[derive(Debug, Clone, PartialEq)]
pub struct ShoppingSummary {
    pub item_count: usize,
    pub checked_count: usize,
    pub total_price: f64,
    pub checked_price: f64,
}

impl ShoppingSummary {
    /// Share of the total already bought, capped at 100.
    pub fn purchased_percent(&self) -> f64 {
        if self.total_price <= 0.0 {
            return 0.0;
        }
        (self.checked_price / self.total_price * 100.0).min(100.0)
    }
}

/// Items of one category, in list order.
#[derive(Debug, Clone)]
pub struct CategoryGroup<'a> {
    pub category: &'a str,
    /// (list index, item) pairs so callers can toggle by index.
    pub items: Vec<(usize, &'a ShoppingItem)>,
}

impl CategoryGroup<'_> {
    pub fn checked_count(&self) -> usize {
        self.items.iter().filter(|(_, item)| item.checked).count()
    }

    pub fn total_price(&self, split: CostSplit) -> f64 {
        round2(self.items.iter().map(|(_, item)| split.apply(item.price)).sum())
    }
}

/// Shopping list in first-occurrence order, keyed by ingredient name.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShoppingList {
    items: Vec<ShoppingItem>,
}

impl ShoppingList {
    pub(crate) fn from_items(items: Vec<ShoppingItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[ShoppingItem] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &ShoppingItem> {
        self.items.iter()
    }

    pub fn get(&self, index: usize) -> Option<&ShoppingItem> {
        self.items.get(index)
    }

    /// Find an item by name (case-insensitive).
    pub fn find(&self, name: &str) -> Option<&ShoppingItem> {
        self.position(name).map(|i| &self.items[i])
    }

    /// Index of an item by name (case-insensitive).
    pub fn position(&self, name: &str) -> Option<usize> {
        let key = name.to_lowercase();
        self.items.iter().position(|item| item.name.to_lowercase() == key)
    }

    /// Resolve a reference to a list index.
    pub fn resolve(&self, item: &ItemRef) -> Result<usize> {
        match item {
            ItemRef::Index(index) if *index < self.items.len() => Ok(*index),
            ItemRef::Index(index) => Err(PlanError::ItemOutOfRange {
                index: *index,
                len: self.items.len(),
            }),
            ItemRef::Name(name) => self
                .position(name)
                .ok_or_else(|| PlanError::ItemNotFound(name.clone())),
        }
    }

    /// Flip `checked` on one item and return its new state.
    ///
    /// An invalid reference leaves the list untouched.
    pub fn toggle(&mut self, item: &ItemRef) -> Result<bool> {
        let index = self.resolve(item)?;
        let entry = &mut self.items[index];
        entry.checked = !entry.checked;
        Ok(entry.checked)
    }

    pub fn summary(&self, split: CostSplit) -> ShoppingSummary {
        let total: f64 = self.items.iter().map(|i| split.apply(i.price)).sum();
        let checked: f64 = self
            .items
            .iter()
            .filter(|i| i.checked)
            .map(|i| split.apply(i.price))
            .sum();

        ShoppingSummary {
            item_count: self.items.len(),
            checked_count: self.items.iter().filter(|i| i.checked).count(),
            total_price: round2(total),
            checked_price: round2(checked),
        }
    }

    /// Group items by category, categories in first-seen order.
    pub fn by_category(&self) -> Vec<CategoryGroup<'_>> {
        let mut groups: Vec<CategoryGroup<'_>> = Vec::new();
        for (index, item) in self.items.iter().enumerate() {
            match groups.iter_mut().find(|g| g.category == item.category) {
                Some(group) => group.items.push((index, item)),
                None => groups.push(CategoryGroup {
                    category: &item.category,
                    items: vec![(index, item)],
                }),
            }
        }
        groups
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, price: f64, category: &str) -> ShoppingItem {
        ShoppingItem {
            name: name.to_string(),
            quantity: 3,
            price,
            category: category.to_string(),
            checked: false,
        }
    }

    fn sample_list() -> ShoppingList {
        ShoppingList::from_items(vec![
            item("Lait", 1.1, "Fresh"),
            item("Banane", 2.6, "Produce"),
            item("Oeufs", 5.0, "Fresh"),
        ])
    }

    #[test]
    fn test_toggle_by_index_and_name() {
        let mut list = sample_list();
        assert!(list.toggle(&ItemRef::Index(1)).unwrap());
        assert!(list.get(1).unwrap().checked);

        assert!(list.toggle(&"oeufs".into()).unwrap());
        assert!(!list.toggle(&"OEUFS".into()).unwrap());
    }

    #[test]
    fn test_toggle_invalid_reference() {
        let mut list = sample_list();
        let before = list.clone();

        let err = list.toggle(&ItemRef::Index(3)).unwrap_err();
        assert!(matches!(err, PlanError::ItemOutOfRange { index: 3, len: 3 }));

        let err = list.toggle(&"Caviar".into()).unwrap_err();
        assert!(matches!(err, PlanError::ItemNotFound(_)));

        assert_eq!(list, before);
    }

    #[test]
    fn test_summary_shared_halves_prices() {
        let mut list = sample_list();
        list.toggle(&ItemRef::Index(2)).unwrap();

        let solo = list.summary(CostSplit::Solo);
        assert_eq!(solo.item_count, 3);
        assert_eq!(solo.checked_count, 1);
        assert!((solo.total_price - 8.7).abs() < 1e-9);
        assert!((solo.checked_price - 5.0).abs() < 1e-9);

        let shared = list.summary(CostSplit::Shared);
        assert!((shared.total_price - 4.35).abs() < 1e-9);
        assert!((shared.checked_price - 2.5).abs() < 1e-9);
    }

    #[test]
    fn test_purchased_percent_empty_list() {
        let summary = ShoppingList::default().summary(CostSplit::Solo);
        assert_eq!(summary.purchased_percent(), 0.0);
    }

    #[test]
    fn test_by_category_keeps_first_seen_order() {
        let list = sample_list();
        let groups = list.by_category();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].category, "Fresh");
        assert_eq!(groups[0].items.len(), 2);
        assert_eq!(groups[0].items[1].0, 2);
        assert_eq!(groups[1].category, "Produce");
        assert!((groups[0].total_price(CostSplit::Solo) - 6.1).abs() < 1e-9);
    }

    #[test]
    fn test_quantity_label() {
        assert_eq!(item("Miel", 2.5, "Pantry").quantity_label(), "x3");
    }
}
