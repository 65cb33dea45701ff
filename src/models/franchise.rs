use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::User;

/// An ordering location under a franchise. `id` is server-assigned;
/// `total_revenue` only appears in franchisee/admin views.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_revenue: Option<Decimal>,
}

/// Organizational owner of one or more stores
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Franchise {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub admins: Vec<User>,
    #[serde(default)]
    pub stores: Vec<Store>,
}

/// One page of the franchise listing; `more` signals further pages
#[derive(Debug, Clone, Deserialize)]
pub struct FranchiseList {
    pub franchises: Vec<Franchise>,
    #[serde(default)]
    pub more: bool,
}
