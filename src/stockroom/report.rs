//! Aggregate stock figures over an [`Inventory`].

use crate::inventory::Inventory;
use crate::model::{Category, Product};
use serde::Serialize;

/// Products with a quantity strictly below this are flagged as low stock.
pub const LOW_STOCK_THRESHOLD: i64 = 10;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySummary {
    pub category: Category,
    pub products: usize,
    pub items: i64,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockReport {
    /// Non-empty categories in fixed Electronics, Food, Medicine order.
    pub categories: Vec<CategorySummary>,
    pub total_products: usize,
    pub total_items: i64,
    pub total_value: f64,
    pub threshold: i64,
    /// Low-stock products in insertion order.
    pub low_stock: Vec<Product>,
}

/// Sum of quantities, pinned at the `i64` bounds instead of overflowing.
fn total_items<'a>(products: impl Iterator<Item = &'a Product>) -> i64 {
    products.fold(0i64, |sum, p| sum.saturating_add(p.quantity))
}

impl StockReport {
    pub fn build(inventory: &Inventory) -> Self {
        let categories = Category::ALL
            .iter()
            .filter_map(|&category| {
                let products = inventory.find_by_category(category);
                if products.is_empty() {
                    return None;
                }
                Some(CategorySummary {
                    category,
                    products: products.len(),
                    items: total_items(products.iter().copied()),
                    value: products.iter().map(|p| p.total_value()).sum(),
                })
            })
            .collect();

        let low_stock = inventory
            .iter()
            .filter(|p| p.quantity < LOW_STOCK_THRESHOLD)
            .cloned()
            .collect();

        Self {
            categories,
            total_products: inventory.len(),
            total_items: total_items(inventory.iter()),
            total_value: inventory.iter().map(Product::total_value).sum(),
            threshold: LOW_STOCK_THRESHOLD,
            low_stock,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total_products == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::sample_inventory;

    #[test]
    fn flags_exactly_the_products_below_threshold() {
        let mut inventory = sample_inventory();
        inventory
            .add(Product::food("F3", "Edge", 1.0, LOW_STOCK_THRESHOLD, "d", false))
            .unwrap();
        inventory
            .add(Product::food("F4", "Below", 1.0, LOW_STOCK_THRESHOLD - 1, "d", false))
            .unwrap();

        let report = inventory.report();
        let flagged: Vec<_> = report.low_stock.iter().map(|p| p.id()).collect();
        let expected: Vec<_> = inventory
            .iter()
            .filter(|p| p.quantity < 10)
            .map(|p| p.id())
            .collect();
        assert_eq!(flagged, expected);
        assert!(flagged.contains(&"F4"));
        assert!(!flagged.contains(&"F3"));
    }

    #[test]
    fn totals_sum_quantity_and_value() {
        let inventory = sample_inventory();
        let report = inventory.report();

        assert_eq!(report.total_products, 5);
        assert_eq!(report.total_items, 5 + 50 + 8 + 15 + 3);
        let expected_value: f64 = inventory.iter().map(|p| p.price * p.quantity as f64).sum();
        assert!((report.total_value - expected_value).abs() < 1e-9);
    }

    #[test]
    fn huge_quantities_saturate_instead_of_overflowing() {
        let mut inventory = Inventory::new();
        inventory
            .add(Product::food("F1", "Milk", 1.0, i64::MAX, "d", false))
            .unwrap();
        inventory
            .add(Product::food("F2", "Eggs", 1.0, 5, "d", false))
            .unwrap();

        let report = inventory.report();
        assert_eq!(report.total_items, i64::MAX);
        assert_eq!(report.categories[0].items, i64::MAX);
    }

    #[test]
    fn category_breakdown_skips_empty_categories() {
        let mut inventory = Inventory::new();
        inventory
            .add(Product::medicine("M1", "Pills", 2.5, 4, "P", "d", true))
            .unwrap();
        inventory
            .add(Product::electronic("E1", "Cable", 1.0, 20, "A", 0))
            .unwrap();

        let report = inventory.report();
        let order: Vec<_> = report.categories.iter().map(|c| c.category).collect();
        assert_eq!(order, vec![Category::Electronics, Category::Medicine]);
        assert_eq!(report.categories[1].items, 4);
        assert_eq!(report.categories[1].value, 10.0);
    }

    #[test]
    fn empty_inventory_yields_empty_report() {
        let report = Inventory::new().report();
        assert!(report.is_empty());
        assert!(report.categories.is_empty());
        assert!(report.low_stock.is_empty());
    }
}
