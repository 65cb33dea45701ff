use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One menu selection inside an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub menu_id: i64,
    pub description: String,
    pub price: Decimal,
}

/// An order against a specific store. `id` and `date` are server-assigned
/// and absent on submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub franchise_id: i64,
    pub store_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
    pub items: Vec<OrderItem>,
}

/// Placement result: the echoed order with its assigned id, plus a signed
/// token the pizza factory can verify.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderResponse {
    pub order: Order,
    pub jwt: String,
}

/// A diner's past orders, one page at a time
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderHistory {
    #[serde(default)]
    pub diner_id: Option<i64>,
    #[serde(default)]
    pub orders: Vec<Order>,
    #[serde(default)]
    pub page: u32,
}

/// Factory verification result for a signed order token. The payload is the
/// decoded order claim, opaque to this client.
#[derive(Debug, Clone, Deserialize)]
pub struct JwtPayload {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub payload: serde_json::Value,
}
