use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertType {
    Compliance,
    Risk,
    #[serde(rename = "KPI")]
    Kpi,
    Document,
}

impl AlertType {
    pub fn label(&self) -> &'static str {
        match self {
            AlertType::Compliance => "Compliance",
            AlertType::Risk => "Risk",
            AlertType::Kpi => "KPI",
            AlertType::Document => "Document",
        }
    }
}

impl fmt::Display for AlertType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Shared ordinal severity scale for alerts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
            Severity::Critical => "Critical",
        }
    }

    pub fn badge_variant(&self) -> &'static str {
        match self {
            Severity::Low => "success",
            Severity::Medium => "warning",
            Severity::High => "error",
            Severity::Critical => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlertStatus {
    Open,
    #[serde(rename = "In_Progress")]
    InProgress,
    Resolved,
}

impl AlertStatus {
    pub fn label(&self) -> &'static str {
        match self {
            AlertStatus::Open => "Open",
            AlertStatus::InProgress => "In Progress",
            AlertStatus::Resolved => "Resolved",
        }
    }

    pub fn badge_variant(&self) -> &'static str {
        match self {
            AlertStatus::Open => "error",
            AlertStatus::InProgress => "warning",
            AlertStatus::Resolved => "success",
        }
    }
}

impl fmt::Display for AlertStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An open compliance/risk finding raised against a supplier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    pub id: String,
    #[serde(rename = "supplierId")]
    pub supplier_id: String,
    #[serde(rename = "type")]
    pub alert_type: AlertType,
    pub severity: Severity,
    pub title: String,
    pub description: String,
    pub status: AlertStatus,
    #[serde(rename = "createdDate")]
    pub created_date: String,
    #[serde(rename = "assignedTo", skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_progress_keeps_legacy_wire_name() {
        let json = serde_json::to_string(&AlertStatus::InProgress).unwrap();
        assert_eq!(json, "\"In_Progress\"");
        assert_eq!(AlertStatus::InProgress.label(), "In Progress");
    }

    #[test]
    fn severity_scale_is_ordered() {
        assert!(Severity::Low < Severity::Critical);
        assert!(Severity::Medium < Severity::High);
    }
}
