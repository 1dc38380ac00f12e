//! Local JSON storage
//!
//! One file per collection under the data directory, named after the
//! original on-device storage keys (`aruvi_products.json`, ...). Each
//! mutation rewrites the affected collection(s) wholesale; reads happen
//! only at startup and on soft refresh.

use super::{Mutation, StateStore, StoreResult};
use crate::manager::PosState;
use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

const PRODUCTS: &str = "products";
const CATEGORIES: &str = "categories";
const ORDERS: &str = "orders";
const HISTORY: &str = "history";
const WAITERS: &str = "waiters";
const COMPLETIONS: &str = "completions";
const HOTELS: &str = "hotels";

/// Whole-collection JSON file store
#[derive(Debug, Clone)]
pub struct LocalStore {
    dir: PathBuf,
}

impl LocalStore {
    /// Open (and create if missing) the data directory
    pub fn new(dir: impl AsRef<Path>) -> StoreResult<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path(&self, collection: &str) -> PathBuf {
        self.dir.join(format!("aruvi_{}.json", collection))
    }

    fn read<T: DeserializeOwned + Default>(&self, collection: &str) -> StoreResult<T> {
        let path = self.path(collection);
        if !path.exists() {
            return Ok(T::default());
        }
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    fn write<T: Serialize>(&self, collection: &str, value: &T) -> StoreResult<()> {
        // Write-then-rename so a crash mid-write never truncates a collection
        let path = self.path(collection);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_string_pretty(value)?)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn write_orders(&self, state: &PosState) -> StoreResult<()> {
        self.write(ORDERS, &state.orders)
    }
}

#[async_trait]
impl StateStore for LocalStore {
    async fn load(&self) -> StoreResult<PosState> {
        Ok(PosState {
            products: self.read(PRODUCTS)?,
            categories: self.read(CATEGORIES)?,
            orders: self.read(ORDERS)?,
            history: self.read(HISTORY)?,
            waiters: self.read(WAITERS)?,
            completions: self.read(COMPLETIONS)?,
            hotels: self.read(HOTELS)?,
        })
    }

    async fn apply(&self, state: &PosState, change: Mutation<'_>) -> StoreResult<()> {
        match change {
            Mutation::ItemAdded { .. }
            | Mutation::QuantitySet { .. }
            | Mutation::ItemRemoved { .. }
            | Mutation::OrderCleared { .. } => self.write_orders(state),

            Mutation::CompletionSet { .. } => self.write(COMPLETIONS, &state.completions),

            // The one four-part mutation: history append, order clear,
            // completion reset, waiter counter increment
            Mutation::BillPrinted { .. } => {
                self.write(HISTORY, &state.history)?;
                self.write_orders(state)?;
                self.write(COMPLETIONS, &state.completions)?;
                self.write(WAITERS, &state.waiters)
            }

            Mutation::ProductCreated { .. }
            | Mutation::ProductUpdated { .. }
            | Mutation::ProductDeleted { .. } => self.write(PRODUCTS, &state.products),

            Mutation::CategoryCreated { .. }
            | Mutation::CategoryUpdated { .. }
            | Mutation::CategoryDeleted { .. } => self.write(CATEGORIES, &state.categories),

            Mutation::WaiterCreated { .. }
            | Mutation::WaiterUpdated { .. }
            | Mutation::WaiterDeleted { .. }
            | Mutation::IssueAdded { .. }
            | Mutation::CredentialsUpdated { .. } => self.write(WAITERS, &state.waiters),

            Mutation::HotelCreated { .. }
            | Mutation::HotelUpdated { .. }
            | Mutation::HotelDeleted { .. } => self.write(HOTELS, &state.hotels),

            Mutation::Snapshot => {
                self.write(PRODUCTS, &state.products)?;
                self.write(CATEGORIES, &state.categories)?;
                self.write_orders(state)?;
                self.write(HISTORY, &state.history)?;
                self.write(WAITERS, &state.waiters)?;
                self.write(COMPLETIONS, &state.completions)?;
                self.write(HOTELS, &state.hotels)
            }
        }
    }

    fn kind(&self) -> &'static str {
        "local"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{OrderItem, Product};

    fn sample_state() -> PosState {
        let mut state = PosState::default();
        state.products.push(Product {
            id: "1".into(),
            name: "Masala Dosa".into(),
            price: 120.0,
            category_id: "2".into(),
        });
        state.orders.insert(
            "table1".into(),
            vec![OrderItem {
                product_id: "1".into(),
                product_name: "Masala Dosa".into(),
                quantity: 2,
                price: 120.0,
            }],
        );
        state.completions.insert("table1".into(), true);
        state
    }

    #[tokio::test]
    async fn snapshot_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::new(dir.path()).unwrap();
        let state = sample_state();

        store.apply(&state, Mutation::Snapshot).await.unwrap();
        let reloaded = store.load().await.unwrap();

        assert_eq!(reloaded, state);
    }

    #[tokio::test]
    async fn missing_files_load_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::new(dir.path()).unwrap();

        let state = store.load().await.unwrap();
        assert!(state.is_unseeded());
    }

    #[tokio::test]
    async fn order_mutation_touches_only_orders_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::new(dir.path()).unwrap();
        let state = sample_state();

        let item = state.orders["table1"][0].clone();
        store
            .apply(
                &state,
                Mutation::ItemAdded {
                    table_id: "table1",
                    item: &item,
                },
            )
            .await
            .unwrap();

        assert!(store.path(ORDERS).exists());
        assert!(!store.path(PRODUCTS).exists());
    }
}
