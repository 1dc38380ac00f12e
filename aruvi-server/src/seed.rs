//! First-run sample data
//!
//! A fresh local deployment gets a small menu, two waiters and a few open
//! table orders so the console is usable before anything is configured.
//! Seeding only happens when the local files are empty; remote-backed
//! deployments never seed.

use crate::manager::PosState;
use shared::models::{Category, OrderItem, Product, Waiter, WaiterStatus};
use shared::util::now_millis;
use std::collections::HashMap;

fn product(id: &str, name: &str, price: f64, category_id: &str) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        price,
        category_id: category_id.to_string(),
    }
}

fn category(id: &str, name: &str) -> Category {
    Category {
        id: id.to_string(),
        name: name.to_string(),
    }
}

fn item(product_id: &str, product_name: &str, quantity: u32, price: f64) -> OrderItem {
    OrderItem {
        product_id: product_id.to_string(),
        product_name: product_name.to_string(),
        quantity,
        price,
    }
}

fn waiter(id: &str, name: &str, phone: &str, email: &str) -> Waiter {
    Waiter {
        id: id.to_string(),
        credentials: None,
        name: name.to_string(),
        phone: phone.to_string(),
        email: email.to_string(),
        join_date: now_millis(),
        status: WaiterStatus::Active,
        orders_completed: 0,
        issues: Vec::new(),
    }
}

/// The state a brand-new local installation starts from
pub fn initial_state() -> PosState {
    let categories = vec![
        category("1", "Starters"),
        category("2", "Main Course"),
        category("3", "Beverages"),
        category("4", "Desserts"),
    ];

    let products = vec![
        product("1", "Chicken 65", 180.0, "1"),
        product("2", "Paneer Tikka", 160.0, "1"),
        product("3", "Biryani", 220.0, "2"),
        product("4", "Butter Chicken", 280.0, "2"),
        product("5", "Masala Dosa", 120.0, "2"),
        product("6", "Fresh Lime Soda", 60.0, "3"),
        product("7", "Mango Lassi", 80.0, "3"),
        product("8", "Gulab Jamun", 70.0, "4"),
    ];

    let mut orders = HashMap::new();
    orders.insert(
        "table1".to_string(),
        vec![
            item("1", "Chicken 65", 2, 180.0),
            item("6", "Fresh Lime Soda", 2, 60.0),
        ],
    );
    orders.insert(
        "table2".to_string(),
        vec![item("3", "Biryani", 1, 220.0), item("7", "Mango Lassi", 1, 80.0)],
    );
    orders.insert(
        "table3".to_string(),
        vec![item("5", "Masala Dosa", 3, 120.0)],
    );
    orders.insert(
        "table5".to_string(),
        vec![
            item("4", "Butter Chicken", 1, 280.0),
            item("3", "Biryani", 1, 220.0),
            item("8", "Gulab Jamun", 2, 70.0),
        ],
    );
    orders.insert(
        "table8".to_string(),
        vec![item("2", "Paneer Tikka", 1, 160.0)],
    );

    let waiters = vec![
        waiter("1", "Ravi Kumar", "9876543210", "ravi@aruvi.com"),
        waiter("2", "Priya Sharma", "9876543211", "priya@aruvi.com"),
    ];

    PosState {
        products,
        categories,
        orders,
        history: Vec::new(),
        waiters,
        completions: HashMap::new(),
        hotels: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_is_internally_consistent() {
        let state = initial_state();
        assert!(!state.is_unseeded());

        // every product points at a known category
        for p in &state.products {
            assert!(
                state.categories.iter().any(|c| c.id == p.category_id),
                "product {} references unknown category {}",
                p.name,
                p.category_id
            );
        }

        // every open order line matches its catalog product
        for items in state.orders.values() {
            for it in items {
                let p = state
                    .products
                    .iter()
                    .find(|p| p.id == it.product_id)
                    .unwrap();
                assert_eq!(p.name, it.product_name);
                assert_eq!(p.price, it.price);
            }
        }
    }
}
