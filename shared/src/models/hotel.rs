//! Hotel (shop profile) Model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Shop profile entity; `no_of_tables` drives the generated table-id set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    pub id: String,
    pub shop_name: String,
    pub shop_address: String,
    pub shop_description: String,
    pub no_of_tables: u32,
}

/// Create hotel payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct HotelCreate {
    #[validate(length(min = 1, message = "shopName is required"))]
    pub shop_name: String,
    #[serde(default)]
    pub shop_address: String,
    #[serde(default)]
    pub shop_description: String,
    #[validate(range(min = 1, max = 200, message = "noOfTables must be between 1 and 200"))]
    pub no_of_tables: u32,
}

/// Update hotel payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct HotelUpdate {
    #[validate(length(min = 1, message = "shopName must not be empty"))]
    pub shop_name: Option<String>,
    pub shop_address: Option<String>,
    pub shop_description: Option<String>,
    #[validate(range(min = 1, max = 200, message = "noOfTables must be between 1 and 200"))]
    pub no_of_tables: Option<u32>,
}
