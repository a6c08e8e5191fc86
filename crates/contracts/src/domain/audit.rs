use crate::shared::filter::Filterable;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditCategory {
    Authentication,
    DataAccess,
    DataModification,
    SystemConfig,
    Compliance,
    Workflow,
}

impl AuditCategory {
    pub const ALL: [AuditCategory; 6] = [
        AuditCategory::Authentication,
        AuditCategory::DataAccess,
        AuditCategory::DataModification,
        AuditCategory::SystemConfig,
        AuditCategory::Compliance,
        AuditCategory::Workflow,
    ];

    /// Wire-format name, used as the exact-match filter value.
    pub fn key(&self) -> &'static str {
        match self {
            AuditCategory::Authentication => "authentication",
            AuditCategory::DataAccess => "data_access",
            AuditCategory::DataModification => "data_modification",
            AuditCategory::SystemConfig => "system_config",
            AuditCategory::Compliance => "compliance",
            AuditCategory::Workflow => "workflow",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AuditCategory::Authentication => "Authentication",
            AuditCategory::DataAccess => "Data Access",
            AuditCategory::DataModification => "Data Modification",
            AuditCategory::SystemConfig => "System Config",
            AuditCategory::Compliance => "Compliance",
            AuditCategory::Workflow => "Workflow",
        }
    }

    /// Icon key for the activity table.
    pub fn icon(&self) -> &'static str {
        match self {
            AuditCategory::Authentication => "shield",
            AuditCategory::DataAccess => "eye",
            AuditCategory::DataModification => "database",
            AuditCategory::SystemConfig => "settings",
            AuditCategory::Compliance => "check",
            AuditCategory::Workflow => "workflows",
        }
    }
}

impl fmt::Display for AuditCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuditSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl AuditSeverity {
    pub const ALL: [AuditSeverity; 4] = [
        AuditSeverity::Low,
        AuditSeverity::Medium,
        AuditSeverity::High,
        AuditSeverity::Critical,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            AuditSeverity::Low => "low",
            AuditSeverity::Medium => "medium",
            AuditSeverity::High => "high",
            AuditSeverity::Critical => "critical",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AuditSeverity::Low => "Low",
            AuditSeverity::Medium => "Medium",
            AuditSeverity::High => "High",
            AuditSeverity::Critical => "Critical",
        }
    }

    pub fn badge_variant(&self) -> &'static str {
        match self {
            AuditSeverity::Low => "neutral",
            AuditSeverity::Medium => "warning",
            AuditSeverity::High => "error",
            AuditSeverity::Critical => "error",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuditOutcome {
    Success,
    Failure,
    Warning,
}

impl AuditOutcome {
    pub const ALL: [AuditOutcome; 3] = [
        AuditOutcome::Success,
        AuditOutcome::Failure,
        AuditOutcome::Warning,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            AuditOutcome::Success => "success",
            AuditOutcome::Failure => "failure",
            AuditOutcome::Warning => "warning",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AuditOutcome::Success => "Success",
            AuditOutcome::Failure => "Failure",
            AuditOutcome::Warning => "Warning",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            AuditOutcome::Success => "check",
            AuditOutcome::Failure => "warning",
            AuditOutcome::Warning => "warning",
        }
    }
}

/// One entry in the activity log. `metadata` is free-form context captured
/// at the time of the event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditLog {
    pub id: String,
    pub timestamp: String,
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "userName")]
    pub user_name: String,
    #[serde(rename = "userRole")]
    pub user_role: String,
    pub action: String,
    pub category: AuditCategory,
    pub resource: String,
    #[serde(rename = "resourceId")]
    pub resource_id: String,
    pub details: String,
    #[serde(rename = "ipAddress")]
    pub ip_address: String,
    #[serde(rename = "userAgent")]
    pub user_agent: String,
    pub severity: AuditSeverity,
    pub outcome: AuditOutcome,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, serde_json::Value>,
}

impl Filterable for AuditLog {
    fn search_text(&self) -> Vec<&str> {
        vec![&self.action, &self.user_name, &self.details, &self.resource]
    }

    fn field(&self, name: &str) -> Option<String> {
        match name {
            "category" => Some(self.category.key().to_string()),
            "severity" => Some(self.severity.key().to_string()),
            "outcome" => Some(self.outcome.key().to_string()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_keys_match_serde_names() {
        for category in AuditCategory::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.key()));
        }
    }

    #[test]
    fn outcome_keys_match_serde_names() {
        for outcome in AuditOutcome::ALL {
            let json = serde_json::to_string(&outcome).unwrap();
            assert_eq!(json, format!("\"{}\"", outcome.key()));
        }
    }
}
