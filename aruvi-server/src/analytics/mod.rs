//! Sales analytics over the bill history
//!
//! All figures are derived on demand from [`HistoryEntry`] records for one
//! local calendar date; nothing here is persisted. Product and category
//! names are resolved against the catalog at query time, so a line whose
//! product was deleted keeps the name captured on the bill while category
//! attribution silently drops it.

use crate::utils::time::local_date;
use chrono::NaiveDate;
use shared::models::{
    Category, CategorySales, HistoryEntry, Product, ProductSales, SalesSummary,
};
use std::collections::HashMap;

/// Bills printed on the given local calendar date
pub fn entries_for_date<'a>(history: &'a [HistoryEntry], date: NaiveDate) -> Vec<&'a HistoryEntry> {
    history
        .iter()
        .filter(|e| local_date(e.timestamp) == date)
        .collect()
}

/// Revenue, bill count and item count for one date
pub fn sales_summary(history: &[HistoryEntry], date: NaiveDate) -> SalesSummary {
    let entries = entries_for_date(history, date);
    let total_revenue = entries.iter().map(|e| e.total).sum();
    let total_items = entries
        .iter()
        .flat_map(|e| e.items.iter())
        .map(|i| i.quantity as u64)
        .sum();
    SalesSummary {
        date: date.to_string(),
        total_revenue,
        total_orders: entries.len() as u64,
        total_items,
    }
}

/// Per-product quantity and revenue for one date, best sellers first
pub fn product_sales(history: &[HistoryEntry], date: NaiveDate) -> Vec<ProductSales> {
    let mut by_product: HashMap<&str, ProductSales> = HashMap::new();
    for entry in entries_for_date(history, date) {
        for item in &entry.items {
            let sales = by_product
                .entry(item.product_id.as_str())
                .or_insert_with(|| ProductSales {
                    product_id: item.product_id.clone(),
                    product_name: item.product_name.clone(),
                    quantity: 0,
                    revenue: 0.0,
                });
            sales.quantity += item.quantity as u64;
            sales.revenue += item.line_total();
        }
    }
    let mut out: Vec<ProductSales> = by_product.into_values().collect();
    out.sort_by(|a, b| b.quantity.cmp(&a.quantity));
    out
}

/// Catalog products with zero sales on the given date
pub fn non_selling_products(
    history: &[HistoryEntry],
    products: &[Product],
    date: NaiveDate,
) -> Vec<Product> {
    let sold: Vec<String> = product_sales(history, date)
        .into_iter()
        .map(|s| s.product_id)
        .collect();
    products
        .iter()
        .filter(|p| !sold.contains(&p.id))
        .cloned()
        .collect()
}

/// Per-category revenue for one date, highest revenue first
///
/// Attribution goes through the current catalog; lines whose product no
/// longer exists are skipped.
pub fn category_sales(
    history: &[HistoryEntry],
    products: &[Product],
    categories: &[Category],
    date: NaiveDate,
) -> Vec<CategorySales> {
    let product_category: HashMap<&str, &str> = products
        .iter()
        .map(|p| (p.id.as_str(), p.category_id.as_str()))
        .collect();

    let mut by_category: HashMap<&str, (u64, f64)> = HashMap::new();
    for entry in entries_for_date(history, date) {
        for item in &entry.items {
            let Some(category_id) = product_category.get(item.product_id.as_str()) else {
                continue;
            };
            let slot = by_category.entry(category_id).or_insert((0, 0.0));
            slot.0 += item.quantity as u64;
            slot.1 += item.line_total();
        }
    }

    let mut out: Vec<CategorySales> = by_category
        .into_iter()
        .map(|(category_id, (quantity, revenue))| CategorySales {
            category_id: category_id.to_string(),
            category_name: categories
                .iter()
                .find(|c| c.id == category_id)
                .map(|c| c.name.clone())
                .unwrap_or_else(|| category_id.to_string()),
            quantity,
            revenue,
        })
        .collect();
    out.sort_by(|a, b| b.revenue.total_cmp(&a.revenue));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::time::today;
    use shared::models::OrderItem;
    use shared::util::now_millis;

    fn item(product_id: &str, name: &str, quantity: u32, price: f64) -> OrderItem {
        OrderItem {
            product_id: product_id.into(),
            product_name: name.into(),
            quantity,
            price,
        }
    }

    fn entry(id: &str, items: Vec<OrderItem>) -> HistoryEntry {
        let total = items.iter().map(|i| i.line_total()).sum();
        HistoryEntry {
            id: id.into(),
            table_id: "table1".into(),
            items,
            total,
            timestamp: now_millis(),
            waiter_id: None,
        }
    }

    fn sample_history() -> Vec<HistoryEntry> {
        vec![
            entry("b1", vec![item("a", "ProductA", 2, 50.0), item("b", "ProductB", 1, 100.0)]),
            entry("b2", vec![item("a", "ProductA", 1, 50.0)]),
        ]
    }

    #[test]
    fn summary_adds_up() {
        let summary = sales_summary(&sample_history(), today());
        assert_eq!(summary.total_revenue, 250.0);
        assert_eq!(summary.total_orders, 2);
        assert_eq!(summary.total_items, 4);
    }

    #[test]
    fn top_products_ranked_by_quantity() {
        let sales = product_sales(&sample_history(), today());
        assert_eq!(sales.len(), 2);
        assert_eq!(sales[0].product_id, "a");
        assert_eq!(sales[0].quantity, 3);
        assert_eq!(sales[0].revenue, 150.0);
        assert_eq!(sales[1].product_id, "b");
    }

    #[test]
    fn other_dates_see_nothing() {
        let yesterday = today().pred_opt().unwrap();
        assert!(product_sales(&sample_history(), yesterday).is_empty());
        let summary = sales_summary(&sample_history(), yesterday);
        assert_eq!(summary.total_orders, 0);
        assert_eq!(summary.total_revenue, 0.0);
    }

    #[test]
    fn non_sellers_are_the_catalog_remainder() {
        let products = vec![
            Product { id: "a".into(), name: "ProductA".into(), price: 50.0, category_id: "1".into() },
            Product { id: "c".into(), name: "ProductC".into(), price: 75.0, category_id: "1".into() },
        ];
        let quiet = non_selling_products(&sample_history(), &products, today());
        assert_eq!(quiet.len(), 1);
        assert_eq!(quiet[0].id, "c");
    }

    #[test]
    fn category_revenue_skips_deleted_products() {
        let products = vec![Product {
            id: "a".into(),
            name: "ProductA".into(),
            price: 50.0,
            category_id: "1".into(),
        }];
        let categories = vec![Category { id: "1".into(), name: "Starters".into() }];

        // product "b" is gone from the catalog, only "a" is attributed
        let sales = category_sales(&sample_history(), &products, &categories, today());
        assert_eq!(sales.len(), 1);
        assert_eq!(sales[0].category_name, "Starters");
        assert_eq!(sales[0].quantity, 3);
        assert_eq!(sales[0].revenue, 150.0);
    }
}
