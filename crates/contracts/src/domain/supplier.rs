use crate::shared::filter::Filterable;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Procurement criticality of a supplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SupplierCategory {
    Critical,
    Important,
    Standard,
}

impl SupplierCategory {
    pub const ALL: [SupplierCategory; 3] = [
        SupplierCategory::Critical,
        SupplierCategory::Important,
        SupplierCategory::Standard,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SupplierCategory::Critical => "Critical",
            SupplierCategory::Important => "Important",
            SupplierCategory::Standard => "Standard",
        }
    }
}

impl fmt::Display for SupplierCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SupplierCategory {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Critical" => Ok(SupplierCategory::Critical),
            "Important" => Ok(SupplierCategory::Important),
            "Standard" => Ok(SupplierCategory::Standard),
            other => anyhow::bail!("unknown supplier category: {other}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SupplierStatus {
    Active,
    Inactive,
    Suspended,
}

impl SupplierStatus {
    pub const ALL: [SupplierStatus; 3] = [
        SupplierStatus::Active,
        SupplierStatus::Inactive,
        SupplierStatus::Suspended,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SupplierStatus::Active => "Active",
            SupplierStatus::Inactive => "Inactive",
            SupplierStatus::Suspended => "Suspended",
        }
    }

    /// CSS badge modifier for this status.
    pub fn badge_variant(&self) -> &'static str {
        match self {
            SupplierStatus::Active => "success",
            SupplierStatus::Inactive => "neutral",
            SupplierStatus::Suspended => "error",
        }
    }
}

impl fmt::Display for SupplierStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SupplierStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Active" => Ok(SupplierStatus::Active),
            "Inactive" => Ok(SupplierStatus::Inactive),
            "Suspended" => Ok(SupplierStatus::Suspended),
            other => anyhow::bail!("unknown supplier status: {other}"),
        }
    }
}

/// Ordinal risk rating. No numeric mapping is defined; the ordering of the
/// variants is the ordering of the scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 4] = [
        RiskLevel::Low,
        RiskLevel::Medium,
        RiskLevel::High,
        RiskLevel::Critical,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
            RiskLevel::Critical => "Critical",
        }
    }

    pub fn badge_variant(&self) -> &'static str {
        match self {
            RiskLevel::Low => "success",
            RiskLevel::Medium => "warning",
            RiskLevel::High => "error",
            RiskLevel::Critical => "error",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RiskLevel {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Low" => Ok(RiskLevel::Low),
            "Medium" => Ok(RiskLevel::Medium),
            "High" => Ok(RiskLevel::High),
            "Critical" => Ok(RiskLevel::Critical),
            other => anyhow::bail!("unknown risk level: {other}"),
        }
    }
}

/// A registered supplier. GSTIN is carried as an opaque string and is not
/// validated anywhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: String,
    pub name: String,
    pub gstin: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub category: SupplierCategory,
    pub status: SupplierStatus,
    #[serde(rename = "registrationDate")]
    pub registration_date: String,
    #[serde(rename = "lastAuditDate")]
    pub last_audit_date: String,
    #[serde(rename = "complianceScore")]
    pub compliance_score: u8,
    #[serde(rename = "riskLevel")]
    pub risk_level: RiskLevel,
}

impl Supplier {
    /// Build a draft record from the registration form. Drafts get a fresh
    /// UUID, today's registration date, and conservative defaults; nothing
    /// is persisted anywhere.
    #[allow(clippy::too_many_arguments)]
    pub fn new_draft(
        name: String,
        gstin: String,
        email: String,
        phone: String,
        address: String,
        category: SupplierCategory,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            gstin,
            email,
            phone,
            address,
            category,
            status: SupplierStatus::Inactive,
            registration_date: chrono::Utc::now().format("%Y-%m-%d").to_string(),
            last_audit_date: String::new(),
            compliance_score: 0,
            risk_level: RiskLevel::Medium,
        }
    }
}

impl Filterable for Supplier {
    fn search_text(&self) -> Vec<&str> {
        vec![&self.name, &self.gstin]
    }

    fn field(&self, name: &str) -> Option<String> {
        match name {
            "status" => Some(self.status.to_string()),
            "risk" => Some(self.risk_level.to_string()),
            "category" => Some(self.category.to_string()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KpiStatus {
    #[serde(rename = "On_Track")]
    OnTrack,
    #[serde(rename = "At_Risk")]
    AtRisk,
    Critical,
}

impl KpiStatus {
    pub fn label(&self) -> &'static str {
        match self {
            KpiStatus::OnTrack => "On Track",
            KpiStatus::AtRisk => "At Risk",
            KpiStatus::Critical => "Critical",
        }
    }

    pub fn badge_variant(&self) -> &'static str {
        match self {
            KpiStatus::OnTrack => "success",
            KpiStatus::AtRisk => "warning",
            KpiStatus::Critical => "error",
        }
    }
}

/// One performance indicator tracked against a supplier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplierKpi {
    pub id: String,
    #[serde(rename = "supplierId")]
    pub supplier_id: String,
    pub metric: String,
    pub value: f64,
    pub target: f64,
    pub unit: String,
    pub period: String,
    pub status: KpiStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn risk_level_is_ordered() {
        assert!(RiskLevel::Low < RiskLevel::Medium);
        assert!(RiskLevel::High < RiskLevel::Critical);
    }

    #[test]
    fn status_round_trips_through_from_str() {
        for status in SupplierStatus::ALL {
            assert_eq!(status.label().parse::<SupplierStatus>().unwrap(), status);
        }
        assert!("Rogue".parse::<SupplierStatus>().is_err());
    }

    #[test]
    fn draft_suppliers_start_inactive_with_unique_ids() {
        let a = Supplier::new_draft(
            "Acme".into(),
            "27AABCT1332L1ZZ".into(),
            "a@acme.in".into(),
            "+91-9876543210".into(),
            "Pune".into(),
            SupplierCategory::Standard,
        );
        let b = Supplier::new_draft(
            "Acme".into(),
            "27AABCT1332L1ZZ".into(),
            "a@acme.in".into(),
            "+91-9876543210".into(),
            "Pune".into(),
            SupplierCategory::Standard,
        );
        assert_eq!(a.status, SupplierStatus::Inactive);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn filterable_exposes_status_risk_and_category() {
        let supplier = Supplier::new_draft(
            "Acme".into(),
            "27AABCT1332L1ZZ".into(),
            "a@acme.in".into(),
            "+91-9876543210".into(),
            "Pune".into(),
            SupplierCategory::Standard,
        );
        assert_eq!(supplier.field("status").as_deref(), Some("Inactive"));
        assert_eq!(supplier.field("risk").as_deref(), Some("Medium"));
        assert_eq!(supplier.field("category").as_deref(), Some("Standard"));
        assert_eq!(supplier.field("gstin"), None);
        assert_eq!(supplier.search_text(), vec!["Acme", "27AABCT1332L1ZZ"]);
    }
}
