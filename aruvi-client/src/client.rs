//! Typed API client, one method per `/v1` operation

use crate::{ClientConfig, ClientResult, HttpClient};
use shared::models::{
    BillPrint, Category, CategoryCreate, CategorySales, CategoryUpdate, CompletionUpdate,
    HistoryEntry, Hotel, HotelCreate, HotelUpdate, IssueCreate, OrderItemAdd, Product,
    ProductCreate, ProductSales, ProductUpdate, QuantityUpdate, SalesSummary, TableOrder, Waiter,
    WaiterCreate, WaiterCredentials, WaiterStats, WaiterUpdate,
};

/// High-level client for the Aruvi `/v1` API
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: HttpClient,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            http: HttpClient::new(config),
        }
    }

    /// Access the underlying transport
    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    // ========== Products ==========

    pub async fn list_products(&self) -> ClientResult<Vec<Product>> {
        self.http.get("products").await
    }

    pub async fn get_product(&self, id: &str) -> ClientResult<Product> {
        self.http.get(&format!("products/{}", id)).await
    }

    pub async fn create_product(&self, payload: &ProductCreate) -> ClientResult<Product> {
        self.http.post("products", payload).await
    }

    pub async fn update_product(
        &self,
        id: &str,
        payload: &ProductUpdate,
    ) -> ClientResult<Product> {
        self.http.put(&format!("products/{}", id), payload).await
    }

    pub async fn delete_product(&self, id: &str) -> ClientResult<bool> {
        self.http.delete(&format!("products/{}", id)).await
    }

    // ========== Categories ==========

    pub async fn list_categories(&self) -> ClientResult<Vec<Category>> {
        self.http.get("categories").await
    }

    pub async fn create_category(&self, payload: &CategoryCreate) -> ClientResult<Category> {
        self.http.post("categories", payload).await
    }

    pub async fn update_category(
        &self,
        id: &str,
        payload: &CategoryUpdate,
    ) -> ClientResult<Category> {
        self.http.put(&format!("categories/{}", id), payload).await
    }

    pub async fn delete_category(&self, id: &str) -> ClientResult<bool> {
        self.http.delete(&format!("categories/{}", id)).await
    }

    // ========== Orders ==========

    pub async fn list_orders(&self) -> ClientResult<Vec<TableOrder>> {
        self.http.get("orders").await
    }

    pub async fn get_order(&self, table_id: &str) -> ClientResult<TableOrder> {
        self.http.get(&format!("orders/{}", table_id)).await
    }

    pub async fn add_item(
        &self,
        table_id: &str,
        item: &OrderItemAdd,
    ) -> ClientResult<TableOrder> {
        self.http
            .post(&format!("orders/{}/items", table_id), item)
            .await
    }

    pub async fn set_item_quantity(
        &self,
        table_id: &str,
        product_id: &str,
        quantity: i64,
    ) -> ClientResult<TableOrder> {
        self.http
            .put(
                &format!("orders/{}/items/{}", table_id, product_id),
                &QuantityUpdate { quantity },
            )
            .await
    }

    pub async fn remove_item(
        &self,
        table_id: &str,
        product_id: &str,
    ) -> ClientResult<TableOrder> {
        self.http
            .delete(&format!("orders/{}/items/{}", table_id, product_id))
            .await
    }

    pub async fn clear_order(&self, table_id: &str) -> ClientResult<bool> {
        self.http.delete(&format!("orders/{}", table_id)).await
    }

    pub async fn set_completion(
        &self,
        table_id: &str,
        completed: bool,
    ) -> ClientResult<TableOrder> {
        self.http
            .put(
                &format!("orders/{}/complete", table_id),
                &CompletionUpdate { completed },
            )
            .await
    }

    // ========== Billing ==========

    pub async fn print_bill(&self, payload: &BillPrint) -> ClientResult<HistoryEntry> {
        self.http.post("bills/print", payload).await
    }

    // ========== History ==========

    pub async fn list_history(&self) -> ClientResult<Vec<HistoryEntry>> {
        self.http.get("history").await
    }

    pub async fn history_by_date(&self, date: &str) -> ClientResult<Vec<HistoryEntry>> {
        self.http.get(&format!("history?date={}", date)).await
    }

    pub async fn get_history_entry(&self, id: &str) -> ClientResult<HistoryEntry> {
        self.http.get(&format!("history/{}", id)).await
    }

    /// Rendered text receipt for one printed bill
    pub async fn get_receipt(&self, id: &str) -> ClientResult<String> {
        self.http.get_text(&format!("history/{}/receipt", id)).await
    }

    // ========== Waiters ==========

    pub async fn list_waiters(&self) -> ClientResult<Vec<Waiter>> {
        self.http.get("waiters").await
    }

    pub async fn get_waiter(&self, id: &str) -> ClientResult<Waiter> {
        self.http.get(&format!("waiters/{}", id)).await
    }

    pub async fn create_waiter(&self, payload: &WaiterCreate) -> ClientResult<Waiter> {
        self.http.post("waiters", payload).await
    }

    pub async fn update_waiter(&self, id: &str, payload: &WaiterUpdate) -> ClientResult<Waiter> {
        self.http.put(&format!("waiters/{}", id), payload).await
    }

    pub async fn delete_waiter(&self, id: &str) -> ClientResult<bool> {
        self.http.delete(&format!("waiters/{}", id)).await
    }

    pub async fn add_waiter_issue(
        &self,
        waiter_id: &str,
        description: &str,
    ) -> ClientResult<Waiter> {
        self.http
            .post(
                &format!("waiters/{}/issues", waiter_id),
                &IssueCreate {
                    description: description.to_string(),
                },
            )
            .await
    }

    pub async fn waiter_stats(&self, waiter_id: &str, date: &str) -> ClientResult<WaiterStats> {
        self.http
            .get(&format!("waiters/{}/stats?date={}", waiter_id, date))
            .await
    }

    pub async fn get_credentials(&self, waiter_id: &str) -> ClientResult<WaiterCredentials> {
        self.http
            .get(&format!("waiters/{}/credentials", waiter_id))
            .await
    }

    pub async fn update_credentials(
        &self,
        waiter_id: &str,
        credentials: &WaiterCredentials,
    ) -> ClientResult<Waiter> {
        self.http
            .put(&format!("waiters/{}/credentials", waiter_id), credentials)
            .await
    }

    // ========== Analytics ==========

    pub async fn sales_summary(&self, date: &str) -> ClientResult<SalesSummary> {
        self.http.get(&format!("analytics/sales?date={}", date)).await
    }

    pub async fn top_products(&self, date: &str, limit: usize) -> ClientResult<Vec<ProductSales>> {
        self.http
            .get(&format!("analytics/products/top?date={}&limit={}", date, limit))
            .await
    }

    pub async fn non_selling_products(&self, date: &str) -> ClientResult<Vec<Product>> {
        self.http
            .get(&format!("analytics/products/non-selling?date={}", date))
            .await
    }

    pub async fn category_sales(&self, date: &str) -> ClientResult<Vec<CategorySales>> {
        self.http
            .get(&format!("analytics/categories?date={}", date))
            .await
    }

    // ========== Hotels ==========

    pub async fn list_hotels(&self) -> ClientResult<Vec<Hotel>> {
        self.http.get("hotels").await
    }

    pub async fn get_hotel(&self, id: &str) -> ClientResult<Hotel> {
        self.http.get(&format!("hotels/{}", id)).await
    }

    pub async fn create_hotel(&self, payload: &HotelCreate) -> ClientResult<Hotel> {
        self.http.post("hotels", payload).await
    }

    pub async fn update_hotel(&self, id: &str, payload: &HotelUpdate) -> ClientResult<Hotel> {
        self.http.put(&format!("hotels/{}", id), payload).await
    }

    pub async fn delete_hotel(&self, id: &str) -> ClientResult<bool> {
        self.http.delete(&format!("hotels/{}", id)).await
    }
}
