use serde::{Deserialize, Serialize};
use std::fmt;

/// Access tags granted to a user account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Diner,
    Franchisee,
    Admin,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Diner => write!(f, "diner"),
            Role::Franchisee => write!(f, "franchisee"),
            Role::Admin => write!(f, "admin"),
        }
    }
}

/// A role grant; franchisee grants carry the franchise they apply to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRole {
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object_id: Option<String>,
}

impl UserRole {
    pub fn new(role: Role) -> Self {
        Self {
            role,
            object_id: None,
        }
    }
}

/// User account as exchanged with the backend. Fields are optional because
/// the same shape is used for registration payloads (no id), admin listings
/// (no password), and franchise admin references (email only).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default)]
    pub roles: Vec<UserRole>,
}

impl User {
    /// Check whether the user carries the given role tag
    pub fn is_role(&self, role: Role) -> bool {
        self.roles.iter().any(|r| r.role == role)
    }
}

/// Successful auth payload: the account plus a fresh bearer token
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub user: User,
    pub token: String,
}

/// One page of the admin user listing
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserList {
    pub users: Vec<User>,
    pub page: u32,
    #[serde(default)]
    pub has_more: bool,
}
