use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleCategory {
    Document,
    Financial,
    Regulatory,
    Quality,
}

impl RuleCategory {
    pub const ALL: [RuleCategory; 4] = [
        RuleCategory::Document,
        RuleCategory::Financial,
        RuleCategory::Regulatory,
        RuleCategory::Quality,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            RuleCategory::Document => "Document",
            RuleCategory::Financial => "Financial",
            RuleCategory::Regulatory => "Regulatory",
            RuleCategory::Quality => "Quality",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            RuleCategory::Document => "documents",
            RuleCategory::Financial => "database",
            RuleCategory::Regulatory => "shield",
            RuleCategory::Quality => "check",
        }
    }
}

impl fmt::Display for RuleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleStatus {
    Passed,
    Failed,
    Warning,
    Pending,
}

impl RuleStatus {
    pub fn label(&self) -> &'static str {
        match self {
            RuleStatus::Passed => "Passed",
            RuleStatus::Failed => "Failed",
            RuleStatus::Warning => "Warning",
            RuleStatus::Pending => "Pending",
        }
    }

    pub fn badge_variant(&self) -> &'static str {
        match self {
            RuleStatus::Passed => "success",
            RuleStatus::Failed => "error",
            RuleStatus::Warning => "warning",
            RuleStatus::Pending => "neutral",
        }
    }
}

impl fmt::Display for RuleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComplianceStatus {
    Compliant,
    NonCompliant,
    AtRisk,
    Pending,
}

impl ComplianceStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ComplianceStatus::Compliant => "Compliant",
            ComplianceStatus::NonCompliant => "Non-Compliant",
            ComplianceStatus::AtRisk => "At Risk",
            ComplianceStatus::Pending => "Pending",
        }
    }

    pub fn badge_variant(&self) -> &'static str {
        match self {
            ComplianceStatus::Compliant => "success",
            ComplianceStatus::NonCompliant => "error",
            ComplianceStatus::AtRisk => "warning",
            ComplianceStatus::Pending => "neutral",
        }
    }
}

impl fmt::Display for ComplianceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One automated check run against a supplier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationRule {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: RuleCategory,
    pub status: RuleStatus,
    pub score: u8,
    #[serde(rename = "lastChecked")]
    pub last_checked: String,
    #[serde(rename = "nextCheck")]
    pub next_check: String,
    pub details: Vec<String>,
}

/// Validation outcome for one supplier across all rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplianceResult {
    #[serde(rename = "supplierId")]
    pub supplier_id: String,
    #[serde(rename = "supplierName")]
    pub supplier_name: String,
    #[serde(rename = "overallScore")]
    pub overall_score: u8,
    pub status: ComplianceStatus,
    #[serde(rename = "validationRules")]
    pub validation_rules: Vec<ValidationRule>,
    #[serde(rename = "lastValidated")]
    pub last_validated: String,
}

impl ComplianceResult {
    pub fn count_by_status(&self, status: RuleStatus) -> usize {
        self.validation_rules
            .iter()
            .filter(|rule| rule.status == status)
            .count()
    }

    /// Rules grouped by category, in the fixed category display order.
    pub fn rules_by_category(&self) -> Vec<(RuleCategory, Vec<&ValidationRule>)> {
        RuleCategory::ALL
            .iter()
            .filter_map(|category| {
                let rules: Vec<&ValidationRule> = self
                    .validation_rules
                    .iter()
                    .filter(|rule| rule.category == *category)
                    .collect();
                if rules.is_empty() {
                    None
                } else {
                    Some((*category, rules))
                }
            })
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChecklistStatus {
    Completed,
    InProgress,
    Pending,
    Failed,
}

impl ChecklistStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ChecklistStatus::Completed => "Completed",
            ChecklistStatus::InProgress => "In Progress",
            ChecklistStatus::Pending => "Pending",
            ChecklistStatus::Failed => "Failed",
        }
    }

    pub fn badge_variant(&self) -> &'static str {
        match self {
            ChecklistStatus::Completed => "success",
            ChecklistStatus::InProgress => "warning",
            ChecklistStatus::Pending => "neutral",
            ChecklistStatus::Failed => "error",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChecklistPriority {
    High,
    Medium,
    Low,
}

impl ChecklistPriority {
    pub fn label(&self) -> &'static str {
        match self {
            ChecklistPriority::High => "High",
            ChecklistPriority::Medium => "Medium",
            ChecklistPriority::Low => "Low",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChecklistCategory {
    Documentation,
    Compliance,
    Verification,
    Setup,
}

impl ChecklistCategory {
    pub fn label(&self) -> &'static str {
        match self {
            ChecklistCategory::Documentation => "Documentation",
            ChecklistCategory::Compliance => "Compliance",
            ChecklistCategory::Verification => "Verification",
            ChecklistCategory::Setup => "Setup",
        }
    }
}

/// One onboarding task for a newly registered supplier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: ChecklistStatus,
    pub priority: ChecklistPriority,
    pub category: ChecklistCategory,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(id: &str, category: RuleCategory, status: RuleStatus) -> ValidationRule {
        ValidationRule {
            id: id.into(),
            name: id.into(),
            description: String::new(),
            category,
            status,
            score: 80,
            last_checked: String::new(),
            next_check: String::new(),
            details: Vec::new(),
        }
    }

    fn result() -> ComplianceResult {
        ComplianceResult {
            supplier_id: "SUP001".into(),
            supplier_name: "TechCorp Solutions".into(),
            overall_score: 92,
            status: ComplianceStatus::Compliant,
            validation_rules: vec![
                rule("gstin-check", RuleCategory::Regulatory, RuleStatus::Passed),
                rule("document-validity", RuleCategory::Document, RuleStatus::Passed),
                rule("quality-standards", RuleCategory::Quality, RuleStatus::Warning),
            ],
            last_validated: String::new(),
        }
    }

    #[test]
    fn counts_rules_by_status() {
        let result = result();
        assert_eq!(result.count_by_status(RuleStatus::Passed), 2);
        assert_eq!(result.count_by_status(RuleStatus::Warning), 1);
        assert_eq!(result.count_by_status(RuleStatus::Failed), 0);
    }

    #[test]
    fn grouping_skips_empty_categories() {
        let result = result();
        let groups = result.rules_by_category();
        let categories: Vec<RuleCategory> = groups.iter().map(|(c, _)| *c).collect();
        assert_eq!(
            categories,
            vec![
                RuleCategory::Document,
                RuleCategory::Regulatory,
                RuleCategory::Quality
            ]
        );
    }

    #[test]
    fn non_compliant_uses_kebab_case_wire_name() {
        let json = serde_json::to_string(&ComplianceStatus::NonCompliant).unwrap();
        assert_eq!(json, "\"non-compliant\"");
    }
}
