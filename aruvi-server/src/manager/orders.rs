//! Live order and billing operations

use super::StateManager;
use crate::store::{Mutation, StoreResult};
use crate::utils::time::local_date;
use chrono::NaiveDate;
use shared::models::{HistoryEntry, OrderItem, TableOrder};
use shared::util::{fresh_id, now_millis};

impl StateManager {
    /// Add an item to a table's order.
    ///
    /// An existing line with the same product id absorbs the quantity
    /// (merge semantics); otherwise the item is appended. Product existence
    /// is not checked here — the item carries its own denormalized name and
    /// price.
    pub async fn add_item(&self, table_id: &str, item: OrderItem) -> StoreResult<TableOrder> {
        let mut state = self.state.write().await;
        let items = state.orders.entry(table_id.to_string()).or_default();
        match items.iter_mut().find(|i| i.product_id == item.product_id) {
            Some(line) => line.quantity += item.quantity,
            None => items.push(item.clone()),
        }
        self.store
            .apply(&state, Mutation::ItemAdded { table_id, item: &item })
            .await?;
        Ok(state.table_order(table_id))
    }

    /// Remove a line by product id. `None` when no such line exists.
    pub async fn remove_item(
        &self,
        table_id: &str,
        product_id: &str,
    ) -> StoreResult<Option<TableOrder>> {
        let mut state = self.state.write().await;
        let Some(items) = state.orders.get_mut(table_id) else {
            return Ok(None);
        };
        let before = items.len();
        items.retain(|i| i.product_id != product_id);
        if items.len() == before {
            return Ok(None);
        }
        self.store
            .apply(
                &state,
                Mutation::ItemRemoved {
                    table_id,
                    product_id,
                },
            )
            .await?;
        Ok(Some(state.table_order(table_id)))
    }

    /// Replace a line's quantity in place; the denormalized price is left
    /// untouched. A quantity of zero or less removes the line. `None` when
    /// no such line exists or the quantity does not fit a line (the order
    /// is left untouched either way).
    pub async fn set_quantity(
        &self,
        table_id: &str,
        product_id: &str,
        quantity: i64,
    ) -> StoreResult<Option<TableOrder>> {
        if quantity <= 0 {
            return self.remove_item(table_id, product_id).await;
        }
        let Ok(quantity_u32) = u32::try_from(quantity) else {
            return Ok(None);
        };

        let mut state = self.state.write().await;
        let Some(line) = state
            .orders
            .get_mut(table_id)
            .and_then(|items| items.iter_mut().find(|i| i.product_id == product_id))
        else {
            return Ok(None);
        };
        line.quantity = quantity_u32;
        self.store
            .apply(
                &state,
                Mutation::QuantitySet {
                    table_id,
                    product_id,
                    quantity,
                },
            )
            .await?;
        Ok(Some(state.table_order(table_id)))
    }

    /// Empty a table's order; history and completion flag untouched
    pub async fn clear_order(&self, table_id: &str) -> StoreResult<()> {
        let mut state = self.state.write().await;
        state.orders.insert(table_id.to_string(), Vec::new());
        self.store
            .apply(&state, Mutation::OrderCleared { table_id })
            .await?;
        Ok(())
    }

    /// Flip the staff completion flag; no effect on order contents
    pub async fn toggle_completion(&self, table_id: &str) -> StoreResult<bool> {
        let mut state = self.state.write().await;
        let flag = state.completions.entry(table_id.to_string()).or_insert(false);
        *flag = !*flag;
        let completed = *flag;
        self.store
            .apply(
                &state,
                Mutation::CompletionSet {
                    table_id,
                    completed,
                },
            )
            .await?;
        Ok(completed)
    }

    /// Set the staff completion flag explicitly
    pub async fn set_completion(
        &self,
        table_id: &str,
        completed: bool,
    ) -> StoreResult<TableOrder> {
        let mut state = self.state.write().await;
        state.completions.insert(table_id.to_string(), completed);
        self.store
            .apply(
                &state,
                Mutation::CompletionSet {
                    table_id,
                    completed,
                },
            )
            .await?;
        Ok(state.table_order(table_id))
    }

    /// Print the bill for a table.
    ///
    /// An empty order — which includes an unknown table id — is a no-op
    /// returning `None`: no history entry, no counter change, no flag
    /// reset. Otherwise the four-part state change happens under one write
    /// lock: history prepend (newest first), waiter counter increment,
    /// order clear, completion reset.
    pub async fn print_bill(
        &self,
        table_id: &str,
        waiter_id: Option<&str>,
    ) -> StoreResult<Option<HistoryEntry>> {
        let mut state = self.state.write().await;

        let items = state.orders.get(table_id).cloned().unwrap_or_default();
        if items.is_empty() {
            return Ok(None);
        }

        let total = items.iter().map(OrderItem::line_total).sum();
        let entry = HistoryEntry {
            id: fresh_id(),
            table_id: table_id.to_string(),
            items,
            total,
            timestamp: now_millis(),
            waiter_id: waiter_id.map(str::to_string),
        };

        state.history.insert(0, entry.clone());
        if let Some(wid) = waiter_id {
            match state.waiters.iter_mut().find(|w| w.id == wid) {
                Some(waiter) => waiter.orders_completed += 1,
                None => {
                    tracing::warn!(waiter = %wid, "bill names unknown waiter, counter unchanged")
                }
            }
        }
        state.orders.insert(table_id.to_string(), Vec::new());
        state.completions.insert(table_id.to_string(), false);

        self.store
            .apply(&state, Mutation::BillPrinted { entry: &entry })
            .await?;

        tracing::info!(table = %table_id, total, "bill printed");
        Ok(Some(entry))
    }

    // ==================== Derived reads ====================

    /// Σ quantity over a table's live order
    pub async fn order_count(&self, table_id: &str) -> u64 {
        self.state.read().await.order_count(table_id)
    }

    /// Σ price × quantity over a table's live order
    pub async fn order_total(&self, table_id: &str) -> f64 {
        self.state.read().await.order_total(table_id)
    }

    /// Read view of one table
    pub async fn table_order(&self, table_id: &str) -> TableOrder {
        self.state.read().await.table_order(table_id)
    }

    /// Read view of every table: the generated id set (`table1`..`tableN`)
    /// plus any stray table that still holds items
    pub async fn list_tables(&self) -> Vec<TableOrder> {
        let state = self.state.read().await;
        let mut ids = self.table_ids(&state);
        let mut extra: Vec<String> = state
            .orders
            .keys()
            .filter(|k| !ids.contains(k))
            .cloned()
            .collect();
        extra.sort();
        ids.extend(extra);
        ids.iter().map(|id| state.table_order(id)).collect()
    }

    // ==================== History reads ====================

    /// Full bill history, newest first
    pub async fn history(&self) -> Vec<HistoryEntry> {
        self.state.read().await.history.clone()
    }

    /// Bills printed on one local calendar date, newest first
    pub async fn history_by_date(&self, date: NaiveDate) -> Vec<HistoryEntry> {
        self.state
            .read()
            .await
            .history
            .iter()
            .filter(|e| local_date(e.timestamp) == date)
            .cloned()
            .collect()
    }

    /// One bill by id
    pub async fn history_entry(&self, id: &str) -> Option<HistoryEntry> {
        self.state
            .read()
            .await
            .history
            .iter()
            .find(|e| e.id == id)
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manager::PosState;
    use crate::store::LocalStore;
    use shared::models::{Waiter, WaiterStatus};
    use std::sync::Arc;

    fn item(product_id: &str, quantity: u32, price: f64) -> OrderItem {
        OrderItem {
            product_id: product_id.to_string(),
            product_name: format!("Product {}", product_id),
            quantity,
            price,
        }
    }

    fn waiter(id: &str) -> Waiter {
        Waiter {
            id: id.to_string(),
            credentials: None,
            name: "Ravi Kumar".into(),
            phone: "9876543210".into(),
            email: "ravi@aruvi.com".into(),
            join_date: 0,
            status: WaiterStatus::Active,
            orders_completed: 0,
            issues: Vec::new(),
        }
    }

    fn manager_in(dir: &std::path::Path) -> StateManager {
        let store = Arc::new(LocalStore::new(dir).unwrap());
        let mut state = PosState::default();
        state.waiters.push(waiter("w1"));
        StateManager::with_state(state, store, 8)
    }

    #[tokio::test]
    async fn total_is_sum_of_price_times_quantity() {
        let dir = tempfile::tempdir().unwrap();
        let mgr = manager_in(dir.path());

        mgr.add_item("table1", item("p1", 2, 220.0)).await.unwrap();
        mgr.add_item("table1", item("p2", 3, 60.0)).await.unwrap();
        mgr.set_quantity("table1", "p2", 1).await.unwrap();

        assert_eq!(mgr.order_total("table1").await, 2.0 * 220.0 + 60.0);
        assert_eq!(mgr.order_count("table1").await, 3);
    }

    #[tokio::test]
    async fn add_item_merges_same_product() {
        let dir = tempfile::tempdir().unwrap();
        let mgr = manager_in(dir.path());

        mgr.add_item("table1", item("p1", 2, 100.0)).await.unwrap();
        let view = mgr.add_item("table1", item("p1", 3, 100.0)).await.unwrap();

        assert_eq!(view.items.len(), 1);
        assert_eq!(view.items[0].quantity, 5);
    }

    #[tokio::test]
    async fn zero_quantity_removes_the_line() {
        let dir = tempfile::tempdir().unwrap();
        let mgr = manager_in(dir.path());

        mgr.add_item("table1", item("p1", 2, 100.0)).await.unwrap();
        let view = mgr.set_quantity("table1", "p1", 0).await.unwrap().unwrap();

        assert!(view.items.is_empty());
        assert_eq!(mgr.order_count("table1").await, 0);
    }

    #[tokio::test]
    async fn oversized_quantity_leaves_the_line_alone() {
        let dir = tempfile::tempdir().unwrap();
        let mgr = manager_in(dir.path());

        mgr.add_item("table1", item("p1", 2, 100.0)).await.unwrap();
        let result = mgr.set_quantity("table1", "p1", 1 << 32).await.unwrap();

        assert!(result.is_none());
        let view = mgr.table_order("table1").await;
        assert!(view.items.iter().all(|i| i.quantity > 0));
        assert_eq!(view.items[0].quantity, 2);
    }

    #[tokio::test]
    async fn set_quantity_on_missing_line_reports_absence() {
        let dir = tempfile::tempdir().unwrap();
        let mgr = manager_in(dir.path());

        assert!(mgr.set_quantity("table1", "ghost", 2).await.unwrap().is_none());
        assert!(mgr.remove_item("table1", "ghost").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn print_bill_snapshots_and_resets() {
        let dir = tempfile::tempdir().unwrap();
        let mgr = manager_in(dir.path());

        mgr.add_item("table2", item("p1", 2, 220.0)).await.unwrap();
        mgr.add_item("table2", item("p2", 1, 60.0)).await.unwrap();
        mgr.toggle_completion("table2").await.unwrap();
        let expected_total = mgr.order_total("table2").await;

        let entry = mgr.print_bill("table2", Some("w1")).await.unwrap().unwrap();

        assert_eq!(entry.total, expected_total);
        assert_eq!(entry.table_id, "table2");
        assert_eq!(entry.waiter_id.as_deref(), Some("w1"));

        // order cleared, completion reset, history prepended, counter bumped
        assert_eq!(mgr.order_count("table2").await, 0);
        let view = mgr.table_order("table2").await;
        assert!(!view.completed);
        let history = mgr.history().await;
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].id, entry.id);
        let snapshot = mgr.snapshot().await;
        assert_eq!(snapshot.waiters[0].orders_completed, 1);
    }

    #[tokio::test]
    async fn printed_entries_are_newest_first() {
        let dir = tempfile::tempdir().unwrap();
        let mgr = manager_in(dir.path());

        mgr.add_item("table1", item("p1", 1, 50.0)).await.unwrap();
        let first = mgr.print_bill("table1", None).await.unwrap().unwrap();
        mgr.add_item("table1", item("p2", 1, 70.0)).await.unwrap();
        let second = mgr.print_bill("table1", None).await.unwrap().unwrap();

        let history = mgr.history().await;
        assert_eq!(history[0].id, second.id);
        assert_eq!(history[1].id, first.id);
    }

    #[tokio::test]
    async fn empty_order_print_is_a_noop() {
        let dir = tempfile::tempdir().unwrap();
        let mgr = manager_in(dir.path());

        assert!(mgr.print_bill("table1", Some("w1")).await.unwrap().is_none());
        // unknown table behaves exactly like an empty one
        assert!(mgr.print_bill("table99", Some("w1")).await.unwrap().is_none());

        assert!(mgr.history().await.is_empty());
        assert_eq!(mgr.snapshot().await.waiters[0].orders_completed, 0);
    }

    #[tokio::test]
    async fn unknown_waiter_still_prints_the_bill() {
        let dir = tempfile::tempdir().unwrap();
        let mgr = manager_in(dir.path());

        mgr.add_item("table1", item("p1", 1, 50.0)).await.unwrap();
        let entry = mgr.print_bill("table1", Some("ghost")).await.unwrap();

        assert!(entry.is_some());
        assert_eq!(mgr.snapshot().await.waiters[0].orders_completed, 0);
    }

    #[tokio::test]
    async fn toggle_flips_and_billing_resets() {
        let dir = tempfile::tempdir().unwrap();
        let mgr = manager_in(dir.path());

        assert!(mgr.toggle_completion("table3").await.unwrap());
        assert!(!mgr.toggle_completion("table3").await.unwrap());
        let view = mgr.set_completion("table3", true).await.unwrap();
        assert!(view.completed);
    }

    #[tokio::test]
    async fn state_round_trips_through_the_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(LocalStore::new(dir.path()).unwrap());
        let mgr = StateManager::with_state(PosState::default(), store.clone(), 8);

        mgr.add_item("table1", item("p1", 2, 100.0)).await.unwrap();
        mgr.toggle_completion("table2").await.unwrap();
        mgr.print_bill("table1", None).await.unwrap();
        let before = mgr.snapshot().await;

        let reloaded = StateManager::load(store, 8).await.unwrap();
        assert_eq!(reloaded.snapshot().await, before);
    }
}
