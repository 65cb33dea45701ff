use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A pizza on the menu. Prices are fractions of a bitcoin, so full decimal
/// precision matters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: i64,
    pub title: String,
    pub image: String,
    pub price: Decimal,
    pub description: String,
}

/// The full menu as returned by the backend
pub type Menu = Vec<MenuItem>;
