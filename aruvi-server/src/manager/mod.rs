//! Order/billing state manager
//!
//! Single authority over every collection: live orders per table, catalog,
//! waiter roster, bill history, completion flags, and hotel profiles. All
//! mutation goes through [`StateManager`] methods; there is no other write
//! path. Each method mutates in memory under one write lock, then hands the
//! post-mutation state to the persistence adapter, so readers never observe
//! an intermediate state — `print_bill`'s four-part change included.
//!
//! Mutations that target an id report whether a match was found (`Option` /
//! `bool` results); callers decide whether absence is an error.

mod catalog;
mod hotels;
mod orders;
mod state;
mod waiters;

pub use state::PosState;

use crate::seed;
use crate::store::{Mutation, StateStore, StoreResult};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Owner of [`PosState`]; the only mutation surface in the system
pub struct StateManager {
    state: RwLock<PosState>,
    store: Arc<dyn StateStore>,
    /// Fallback when no hotel profile provides `no_of_tables`
    table_count: u32,
}

impl StateManager {
    /// Load state wholesale from the adapter.
    ///
    /// A brand-new local store is seeded with the sample menu so a fresh
    /// install starts usable.
    pub async fn load(store: Arc<dyn StateStore>, table_count: u32) -> StoreResult<Self> {
        let mut state = store.load().await?;

        if store.kind() == "local" && state.is_unseeded() {
            tracing::info!("empty local store, seeding sample data");
            state = seed::initial_state();
            store.apply(&state, Mutation::Snapshot).await?;
        }

        tracing::info!(
            products = state.products.len(),
            categories = state.categories.len(),
            waiters = state.waiters.len(),
            history = state.history.len(),
            "state loaded"
        );

        Ok(Self {
            state: RwLock::new(state),
            store,
            table_count,
        })
    }

    /// Construct over an already-materialized state. Used by tests.
    pub fn with_state(state: PosState, store: Arc<dyn StateStore>, table_count: u32) -> Self {
        Self {
            state: RwLock::new(state),
            store,
            table_count,
        }
    }

    /// Clone of the full state
    pub async fn snapshot(&self) -> PosState {
        self.state.read().await.clone()
    }

    /// Re-read the full state from the adapter, replacing memory wholesale.
    ///
    /// Backs the periodic soft refresh; meaningful for the remote adapter
    /// where another writer may exist (last write wins). The write guard is
    /// held across the load: mutations persist under that same guard, so a
    /// load here can neither observe a half-written multi-file change nor
    /// overwrite one committed while the load was in flight.
    pub async fn refresh(&self) -> StoreResult<()> {
        let mut state = self.state.write().await;
        let fresh = self.store.load().await?;
        *state = fresh;
        tracing::debug!("state refreshed from {}", self.store.kind());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::LocalStore;
    use async_trait::async_trait;
    use shared::models::OrderItem;
    use tokio::sync::Notify;

    /// LocalStore whose `load` parks on a gate, so a test can interleave
    /// other manager calls with an in-flight refresh.
    struct GatedStore {
        inner: LocalStore,
        load_started: Notify,
        load_gate: Notify,
    }

    #[async_trait]
    impl StateStore for GatedStore {
        async fn load(&self) -> StoreResult<PosState> {
            self.load_started.notify_one();
            self.load_gate.notified().await;
            self.inner.load().await
        }

        async fn apply(&self, state: &PosState, change: Mutation<'_>) -> StoreResult<()> {
            self.inner.apply(state, change).await
        }

        fn kind(&self) -> &'static str {
            "local"
        }
    }

    #[tokio::test]
    async fn refresh_does_not_revert_a_concurrent_mutation() {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(GatedStore {
            inner: LocalStore::new(dir.path()).unwrap(),
            load_started: Notify::new(),
            load_gate: Notify::new(),
        });
        store
            .inner
            .apply(&PosState::default(), Mutation::Snapshot)
            .await
            .unwrap();
        let mgr = Arc::new(StateManager::with_state(
            PosState::default(),
            store.clone(),
            8,
        ));

        let refresher = {
            let mgr = mgr.clone();
            tokio::spawn(async move { mgr.refresh().await })
        };
        store.load_started.notified().await;

        // a mutation issued while the load is in flight must not be lost
        let writer = {
            let mgr = mgr.clone();
            tokio::spawn(async move {
                mgr.add_item(
                    "table1",
                    OrderItem {
                        product_id: "p1".into(),
                        product_name: "Tea".into(),
                        quantity: 1,
                        price: 20.0,
                    },
                )
                .await
            })
        };
        for _ in 0..16 {
            tokio::task::yield_now().await;
        }
        store.load_gate.notify_one();

        refresher.await.unwrap().unwrap();
        writer.await.unwrap().unwrap();

        assert_eq!(mgr.order_count("table1").await, 1);
    }
}
