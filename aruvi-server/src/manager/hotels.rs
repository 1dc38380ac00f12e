//! Hotel (shop profile) operations and the generated table-id set

use super::{PosState, StateManager};
use crate::store::{Mutation, StoreResult};
use shared::models::{Hotel, HotelCreate, HotelUpdate};
use shared::util::fresh_id;

impl StateManager {
    pub async fn list_hotels(&self) -> Vec<Hotel> {
        self.state.read().await.hotels.clone()
    }

    pub async fn get_hotel(&self, id: &str) -> Option<Hotel> {
        self.state
            .read()
            .await
            .hotels
            .iter()
            .find(|h| h.id == id)
            .cloned()
    }

    pub async fn create_hotel(&self, payload: HotelCreate) -> StoreResult<Hotel> {
        let hotel = Hotel {
            id: fresh_id(),
            shop_name: payload.shop_name,
            shop_address: payload.shop_address,
            shop_description: payload.shop_description,
            no_of_tables: payload.no_of_tables,
        };
        let mut state = self.state.write().await;
        state.hotels.push(hotel.clone());
        self.store
            .apply(&state, Mutation::HotelCreated { hotel: &hotel })
            .await?;
        Ok(hotel)
    }

    pub async fn update_hotel(
        &self,
        id: &str,
        payload: HotelUpdate,
    ) -> StoreResult<Option<Hotel>> {
        let mut state = self.state.write().await;
        let Some(hotel) = state.hotels.iter_mut().find(|h| h.id == id) else {
            return Ok(None);
        };
        if let Some(shop_name) = payload.shop_name {
            hotel.shop_name = shop_name;
        }
        if let Some(shop_address) = payload.shop_address {
            hotel.shop_address = shop_address;
        }
        if let Some(shop_description) = payload.shop_description {
            hotel.shop_description = shop_description;
        }
        if let Some(no_of_tables) = payload.no_of_tables {
            hotel.no_of_tables = no_of_tables;
        }
        let hotel = hotel.clone();
        self.store
            .apply(&state, Mutation::HotelUpdated { hotel: &hotel })
            .await?;
        Ok(Some(hotel))
    }

    pub async fn delete_hotel(&self, id: &str) -> StoreResult<bool> {
        let mut state = self.state.write().await;
        let before = state.hotels.len();
        state.hotels.retain(|h| h.id != id);
        if state.hotels.len() == before {
            return Ok(false);
        }
        self.store
            .apply(&state, Mutation::HotelDeleted { id })
            .await?;
        Ok(true)
    }

    /// `table1`..`tableN`: N comes from the first hotel profile, falling
    /// back to the configured default. Table ids are generated, never
    /// stored.
    pub(super) fn table_ids(&self, state: &PosState) -> Vec<String> {
        let count = state
            .hotels
            .first()
            .map(|h| h.no_of_tables)
            .unwrap_or(self.table_count);
        (1..=count).map(|n| format!("table{}", n)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::LocalStore;
    use std::sync::Arc;

    fn manager_in(dir: &std::path::Path) -> StateManager {
        let store = Arc::new(LocalStore::new(dir).unwrap());
        StateManager::with_state(PosState::default(), store, 4)
    }

    #[tokio::test]
    async fn table_set_follows_hotel_profile() {
        let dir = tempfile::tempdir().unwrap();
        let mgr = manager_in(dir.path());

        // no hotel profile yet: configured fallback
        let tables = mgr.list_tables().await;
        assert_eq!(tables.len(), 4);
        assert_eq!(tables[0].table_id, "table1");
        assert_eq!(tables[3].table_id, "table4");

        mgr.create_hotel(HotelCreate {
            shop_name: "Aruvi".into(),
            shop_address: "12 Beach Road, Chennai".into(),
            shop_description: "Family restaurant".into(),
            no_of_tables: 6,
        })
        .await
        .unwrap();

        assert_eq!(mgr.list_tables().await.len(), 6);
    }

    #[tokio::test]
    async fn stray_order_keys_still_show_up() {
        let dir = tempfile::tempdir().unwrap();
        let mgr = manager_in(dir.path());

        mgr.add_item(
            "table9",
            shared::models::OrderItem {
                product_id: "p1".into(),
                product_name: "Tea".into(),
                quantity: 1,
                price: 20.0,
            },
        )
        .await
        .unwrap();

        let tables = mgr.list_tables().await;
        assert_eq!(tables.len(), 5);
        assert!(tables.iter().any(|t| t.table_id == "table9"));
    }

    #[tokio::test]
    async fn hotel_crud_reports_absence() {
        let dir = tempfile::tempdir().unwrap();
        let mgr = manager_in(dir.path());

        assert!(mgr.get_hotel("nope").await.is_none());
        assert!(
            mgr.update_hotel("nope", HotelUpdate {
                shop_name: None,
                shop_address: None,
                shop_description: None,
                no_of_tables: Some(10),
            })
            .await
            .unwrap()
            .is_none()
        );
        assert!(!mgr.delete_hotel("nope").await.unwrap());
    }
}
