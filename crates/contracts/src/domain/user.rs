use crate::shared::filter::Filterable;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel permission name meaning "every permission". Carried as data
/// only; no authorization engine interprets it here.
pub const WILDCARD_PERMISSION: &str = "*";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Inactive,
    Pending,
    Suspended,
}

impl UserStatus {
    pub const ALL: [UserStatus; 4] = [
        UserStatus::Active,
        UserStatus::Inactive,
        UserStatus::Pending,
        UserStatus::Suspended,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Inactive => "inactive",
            UserStatus::Pending => "pending",
            UserStatus::Suspended => "suspended",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UserStatus::Active => "Active",
            UserStatus::Inactive => "Inactive",
            UserStatus::Pending => "Pending",
            UserStatus::Suspended => "Suspended",
        }
    }

    pub fn badge_variant(&self) -> &'static str {
        match self {
            UserStatus::Active => "success",
            UserStatus::Inactive => "neutral",
            UserStatus::Pending => "warning",
            UserStatus::Suspended => "error",
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A dashboard operator account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub role: String,
    pub department: String,
    pub status: UserStatus,
    #[serde(rename = "lastLogin", skip_serializing_if = "Option::is_none")]
    pub last_login: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: String,
    pub permissions: Vec<String>,
    #[serde(rename = "twoFactorEnabled")]
    pub two_factor_enabled: bool,
    #[serde(rename = "sessionCount")]
    pub session_count: u32,
}

impl Filterable for User {
    fn search_text(&self) -> Vec<&str> {
        vec![&self.name, &self.email, &self.role]
    }

    fn field(&self, name: &str) -> Option<String> {
        match name {
            "status" => Some(self.status.key().to_string()),
            "role" => Some(self.role.clone()),
            _ => None,
        }
    }
}

/// A named permission set. `permissions` may contain the wildcard sentinel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    pub id: String,
    pub name: String,
    pub description: String,
    pub permissions: Vec<String>,
    #[serde(rename = "userCount")]
    pub user_count: u32,
    #[serde(rename = "isSystem")]
    pub is_system: bool,
}

impl Role {
    pub fn grants_everything(&self) -> bool {
        self.permissions.iter().any(|p| p == WILDCARD_PERMISSION)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Permission {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    #[serde(rename = "isSystem")]
    pub is_system: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wildcard_role_grants_everything() {
        let role = Role {
            id: "1".into(),
            name: "System Admin".into(),
            description: String::new(),
            permissions: vec![WILDCARD_PERMISSION.into()],
            user_count: 1,
            is_system: true,
        };
        assert!(role.grants_everything());

        let scoped = Role {
            permissions: vec!["view_suppliers".into()],
            ..role
        };
        assert!(!scoped.grants_everything());
    }
}
