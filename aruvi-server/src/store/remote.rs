//! Remote REST storage
//!
//! Mirrors every mutation to a remote backend through the typed
//! [`ApiClient`], one request per mutation; `load` refetches the
//! collections wholesale. A failure here is reported to the caller and the
//! in-memory state stays authoritative (last write wins across writers —
//! an accepted limitation, not a consistency guarantee).

use super::{Mutation, StateStore, StoreResult};
use crate::manager::PosState;
use aruvi_client::{ApiClient, ClientConfig};
use async_trait::async_trait;
use shared::models::{
    BillPrint, CategoryUpdate, HotelCreate, HotelUpdate, OrderItemAdd, ProductUpdate,
    WaiterCreate, WaiterUpdate,
};
use std::collections::HashMap;

/// REST-backed store
#[derive(Debug, Clone)]
pub struct RemoteStore {
    client: ApiClient,
}

impl RemoteStore {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: ApiClient::new(&ClientConfig::new(base_url)),
        }
    }

    pub fn with_client(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl StateStore for RemoteStore {
    async fn load(&self) -> StoreResult<PosState> {
        let products = self.client.list_products().await?;
        let categories = self.client.list_categories().await?;
        let tables = self.client.list_orders().await?;
        let history = self.client.list_history().await?;
        let waiters = self.client.list_waiters().await?;
        let hotels = self.client.list_hotels().await?;

        let mut orders = HashMap::new();
        let mut completions = HashMap::new();
        for table in tables {
            completions.insert(table.table_id.clone(), table.completed);
            orders.insert(table.table_id, table.items);
        }

        Ok(PosState {
            products,
            categories,
            orders,
            history,
            waiters,
            completions,
            hotels,
        })
    }

    async fn apply(&self, _state: &PosState, change: Mutation<'_>) -> StoreResult<()> {
        match change {
            Mutation::ItemAdded { table_id, item } => {
                self.client
                    .add_item(
                        table_id,
                        &OrderItemAdd {
                            product_id: item.product_id.clone(),
                            product_name: item.product_name.clone(),
                            quantity: item.quantity,
                            price: item.price,
                        },
                    )
                    .await?;
            }
            Mutation::QuantitySet {
                table_id,
                product_id,
                quantity,
            } => {
                self.client
                    .set_item_quantity(table_id, product_id, quantity)
                    .await?;
            }
            Mutation::ItemRemoved {
                table_id,
                product_id,
            } => {
                self.client.remove_item(table_id, product_id).await?;
            }
            Mutation::OrderCleared { table_id } => {
                self.client.clear_order(table_id).await?;
            }
            Mutation::CompletionSet {
                table_id,
                completed,
            } => {
                self.client.set_completion(table_id, completed).await?;
            }
            Mutation::BillPrinted { entry } => {
                self.client
                    .print_bill(&BillPrint {
                        table_id: entry.table_id.clone(),
                        waiter_id: entry.waiter_id.clone(),
                        items: Some(entry.items.clone()),
                        total: Some(entry.total),
                    })
                    .await?;
            }
            Mutation::ProductCreated { product } => {
                self.client
                    .create_product(&shared::models::ProductCreate {
                        name: product.name.clone(),
                        price: product.price,
                        category_id: product.category_id.clone(),
                    })
                    .await?;
            }
            Mutation::ProductUpdated { product } => {
                self.client
                    .update_product(
                        &product.id,
                        &ProductUpdate {
                            name: Some(product.name.clone()),
                            price: Some(product.price),
                            category_id: Some(product.category_id.clone()),
                        },
                    )
                    .await?;
            }
            Mutation::ProductDeleted { id } => {
                self.client.delete_product(id).await?;
            }
            Mutation::CategoryCreated { category } => {
                self.client
                    .create_category(&shared::models::CategoryCreate {
                        name: category.name.clone(),
                    })
                    .await?;
            }
            Mutation::CategoryUpdated { category } => {
                self.client
                    .update_category(
                        &category.id,
                        &CategoryUpdate {
                            name: Some(category.name.clone()),
                        },
                    )
                    .await?;
            }
            Mutation::CategoryDeleted { id } => {
                self.client.delete_category(id).await?;
            }
            Mutation::WaiterCreated { waiter } => {
                self.client
                    .create_waiter(&WaiterCreate {
                        username: waiter.credentials.as_ref().map(|c| c.username.clone()),
                        password: waiter.credentials.as_ref().map(|c| c.password.clone()),
                        name: waiter.name.clone(),
                        phone: waiter.phone.clone(),
                        email: waiter.email.clone(),
                        status: Some(waiter.status),
                    })
                    .await?;
            }
            Mutation::WaiterUpdated { waiter } => {
                self.client
                    .update_waiter(
                        &waiter.id,
                        &WaiterUpdate {
                            name: Some(waiter.name.clone()),
                            phone: Some(waiter.phone.clone()),
                            email: Some(waiter.email.clone()),
                            status: Some(waiter.status),
                        },
                    )
                    .await?;
            }
            Mutation::WaiterDeleted { id } => {
                self.client.delete_waiter(id).await?;
            }
            Mutation::IssueAdded { waiter_id, issue } => {
                self.client
                    .add_waiter_issue(waiter_id, &issue.description)
                    .await?;
            }
            Mutation::CredentialsUpdated {
                waiter_id,
                credentials,
            } => {
                self.client
                    .update_credentials(waiter_id, credentials)
                    .await?;
            }
            Mutation::HotelCreated { hotel } => {
                self.client
                    .create_hotel(&HotelCreate {
                        shop_name: hotel.shop_name.clone(),
                        shop_address: hotel.shop_address.clone(),
                        shop_description: hotel.shop_description.clone(),
                        no_of_tables: hotel.no_of_tables,
                    })
                    .await?;
            }
            Mutation::HotelUpdated { hotel } => {
                self.client
                    .update_hotel(
                        &hotel.id,
                        &HotelUpdate {
                            shop_name: Some(hotel.shop_name.clone()),
                            shop_address: Some(hotel.shop_address.clone()),
                            shop_description: Some(hotel.shop_description.clone()),
                            no_of_tables: Some(hotel.no_of_tables),
                        },
                    )
                    .await?;
            }
            Mutation::HotelDeleted { id } => {
                self.client.delete_hotel(id).await?;
            }
            Mutation::Snapshot => {
                // Collections already live remotely; nothing to push wholesale
                tracing::debug!("snapshot ignored by remote store");
            }
        }

        Ok(())
    }

    fn kind(&self) -> &'static str {
        "remote"
    }
}
