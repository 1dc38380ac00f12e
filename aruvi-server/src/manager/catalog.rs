//! Product and category catalog operations
//!
//! Plain CRUD. `category_id` on a product is a soft reference: deleting a
//! category neither cascades nor blocks, so orphaned references are
//! possible and tolerated (observed behavior, kept deliberately).

use super::StateManager;
use crate::store::{Mutation, StoreResult};
use shared::models::{
    Category, CategoryCreate, CategoryUpdate, Product, ProductCreate, ProductUpdate,
};
use shared::util::fresh_id;

impl StateManager {
    // ==================== Products ====================

    pub async fn list_products(&self) -> Vec<Product> {
        self.state.read().await.products.clone()
    }

    pub async fn get_product(&self, id: &str) -> Option<Product> {
        self.state
            .read()
            .await
            .products
            .iter()
            .find(|p| p.id == id)
            .cloned()
    }

    pub async fn create_product(&self, payload: ProductCreate) -> StoreResult<Product> {
        let product = Product {
            id: fresh_id(),
            name: payload.name,
            price: payload.price,
            category_id: payload.category_id,
        };
        let mut state = self.state.write().await;
        state.products.push(product.clone());
        self.store
            .apply(&state, Mutation::ProductCreated { product: &product })
            .await?;
        Ok(product)
    }

    /// `None` when no product matches the id
    pub async fn update_product(
        &self,
        id: &str,
        payload: ProductUpdate,
    ) -> StoreResult<Option<Product>> {
        let mut state = self.state.write().await;
        let Some(product) = state.products.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };
        if let Some(name) = payload.name {
            product.name = name;
        }
        if let Some(price) = payload.price {
            product.price = price;
        }
        if let Some(category_id) = payload.category_id {
            product.category_id = category_id;
        }
        let product = product.clone();
        self.store
            .apply(&state, Mutation::ProductUpdated { product: &product })
            .await?;
        Ok(Some(product))
    }

    /// `false` when no product matches the id; open orders keep their
    /// denormalized copy either way
    pub async fn delete_product(&self, id: &str) -> StoreResult<bool> {
        let mut state = self.state.write().await;
        let before = state.products.len();
        state.products.retain(|p| p.id != id);
        if state.products.len() == before {
            return Ok(false);
        }
        self.store
            .apply(&state, Mutation::ProductDeleted { id })
            .await?;
        Ok(true)
    }

    // ==================== Categories ====================

    pub async fn list_categories(&self) -> Vec<Category> {
        self.state.read().await.categories.clone()
    }

    pub async fn get_category(&self, id: &str) -> Option<Category> {
        self.state
            .read()
            .await
            .categories
            .iter()
            .find(|c| c.id == id)
            .cloned()
    }

    pub async fn create_category(&self, payload: CategoryCreate) -> StoreResult<Category> {
        let category = Category {
            id: fresh_id(),
            name: payload.name,
        };
        let mut state = self.state.write().await;
        state.categories.push(category.clone());
        self.store
            .apply(&state, Mutation::CategoryCreated { category: &category })
            .await?;
        Ok(category)
    }

    pub async fn update_category(
        &self,
        id: &str,
        payload: CategoryUpdate,
    ) -> StoreResult<Option<Category>> {
        let mut state = self.state.write().await;
        let Some(category) = state.categories.iter_mut().find(|c| c.id == id) else {
            return Ok(None);
        };
        if let Some(name) = payload.name {
            category.name = name;
        }
        let category = category.clone();
        self.store
            .apply(&state, Mutation::CategoryUpdated { category: &category })
            .await?;
        Ok(Some(category))
    }

    /// Products referencing the deleted category keep their stale
    /// `category_id` (no cascade, no restrict)
    pub async fn delete_category(&self, id: &str) -> StoreResult<bool> {
        let mut state = self.state.write().await;
        let before = state.categories.len();
        state.categories.retain(|c| c.id != id);
        if state.categories.len() == before {
            return Ok(false);
        }
        self.store
            .apply(&state, Mutation::CategoryDeleted { id })
            .await?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manager::PosState;
    use crate::store::LocalStore;
    use std::sync::Arc;

    fn manager_in(dir: &std::path::Path) -> StateManager {
        let store = Arc::new(LocalStore::new(dir).unwrap());
        StateManager::with_state(PosState::default(), store, 8)
    }

    #[tokio::test]
    async fn create_assigns_fresh_ids() {
        let dir = tempfile::tempdir().unwrap();
        let mgr = manager_in(dir.path());

        let a = mgr
            .create_product(ProductCreate {
                name: "Biryani".into(),
                price: 220.0,
                category_id: "main".into(),
            })
            .await
            .unwrap();
        let b = mgr
            .create_product(ProductCreate {
                name: "Paneer Tikka".into(),
                price: 160.0,
                category_id: "starters".into(),
            })
            .await
            .unwrap();

        assert_ne!(a.id, b.id);
        assert_eq!(mgr.list_products().await.len(), 2);
    }

    #[tokio::test]
    async fn update_missing_product_reports_absence() {
        let dir = tempfile::tempdir().unwrap();
        let mgr = manager_in(dir.path());

        let result = mgr
            .update_product(
                "nope",
                ProductUpdate {
                    name: Some("Ghost".into()),
                    price: None,
                    category_id: None,
                },
            )
            .await
            .unwrap();
        assert!(result.is_none());
        assert!(!mgr.delete_product("nope").await.unwrap());
    }

    #[tokio::test]
    async fn partial_update_keeps_other_fields() {
        let dir = tempfile::tempdir().unwrap();
        let mgr = manager_in(dir.path());

        let created = mgr
            .create_product(ProductCreate {
                name: "Masala Dosa".into(),
                price: 120.0,
                category_id: "main".into(),
            })
            .await
            .unwrap();

        let updated = mgr
            .update_product(
                &created.id,
                ProductUpdate {
                    name: None,
                    price: Some(130.0),
                    category_id: None,
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.name, "Masala Dosa");
        assert_eq!(updated.price, 130.0);
    }

    #[tokio::test]
    async fn category_delete_leaves_products_orphaned() {
        let dir = tempfile::tempdir().unwrap();
        let mgr = manager_in(dir.path());

        let cat = mgr
            .create_category(CategoryCreate { name: "Starters".into() })
            .await
            .unwrap();
        let product = mgr
            .create_product(ProductCreate {
                name: "Chicken 65".into(),
                price: 180.0,
                category_id: cat.id.clone(),
            })
            .await
            .unwrap();

        assert!(mgr.delete_category(&cat.id).await.unwrap());
        let survivor = mgr.get_product(&product.id).await.unwrap();
        assert_eq!(survivor.category_id, cat.id);
    }
}
