use crate::domain::compliance::{
    ChecklistCategory, ChecklistItem, ChecklistPriority, ChecklistStatus, ComplianceResult,
    ComplianceStatus, RuleCategory, RuleStatus, ValidationRule,
};
use once_cell::sync::Lazy;

fn rule(
    id: &str,
    name: &str,
    description: &str,
    category: RuleCategory,
    status: RuleStatus,
    score: u8,
    details: &[&str],
) -> ValidationRule {
    ValidationRule {
        id: id.into(),
        name: name.into(),
        description: description.into(),
        category,
        status,
        score,
        last_checked: "2024-12-14T08:00:00Z".into(),
        next_check: "2024-12-21T08:00:00Z".into(),
        details: details.iter().map(|d| (*d).into()).collect(),
    }
}

static RESULTS: Lazy<Vec<ComplianceResult>> = Lazy::new(|| {
    vec![
        ComplianceResult {
            supplier_id: "SUP001".into(),
            supplier_name: "TechCorp Solutions".into(),
            overall_score: 92,
            status: ComplianceStatus::Compliant,
            validation_rules: vec![
                rule(
                    "gstin-verification",
                    "GSTIN Verification",
                    "Validate GSTIN against the government registry",
                    RuleCategory::Regulatory,
                    RuleStatus::Passed,
                    100,
                    &["GSTIN 29ABCDE1234F1Z5 verified", "Registration active"],
                ),
                rule(
                    "document-validity",
                    "Document Validity",
                    "Check that all mandatory documents are current",
                    RuleCategory::Document,
                    RuleStatus::Passed,
                    95,
                    &["GST certificate valid", "ISO certification current"],
                ),
                rule(
                    "financial-health",
                    "Financial Health",
                    "Assess financial statements and credit standing",
                    RuleCategory::Financial,
                    RuleStatus::Passed,
                    90,
                    &["Financial statements on file", "Credit rating acceptable"],
                ),
                rule(
                    "quality-standards",
                    "Quality Standards",
                    "Verify quality certifications and audit history",
                    RuleCategory::Quality,
                    RuleStatus::Warning,
                    82,
                    &["Quality audit due within 30 days"],
                ),
            ],
            last_validated: "2024-12-14T08:05:00Z".into(),
        },
        ComplianceResult {
            supplier_id: "SUP002".into(),
            supplier_name: "Global Manufacturing Ltd".into(),
            overall_score: 68,
            status: ComplianceStatus::AtRisk,
            validation_rules: vec![
                rule(
                    "gstin-verification",
                    "GSTIN Verification",
                    "Validate GSTIN against the government registry",
                    RuleCategory::Regulatory,
                    RuleStatus::Passed,
                    100,
                    &["GSTIN 27FGHIJ5678K2L6 verified"],
                ),
                rule(
                    "document-validity",
                    "Document Validity",
                    "Check that all mandatory documents are current",
                    RuleCategory::Document,
                    RuleStatus::Failed,
                    40,
                    &["ISO certification expired", "Renewal not submitted"],
                ),
                rule(
                    "financial-health",
                    "Financial Health",
                    "Assess financial statements and credit standing",
                    RuleCategory::Financial,
                    RuleStatus::Warning,
                    65,
                    &["Delayed payment history in last quarter"],
                ),
            ],
            last_validated: "2024-12-14T08:05:00Z".into(),
        },
    ]
});

static CHECKLIST: Lazy<Vec<ChecklistItem>> = Lazy::new(|| {
    vec![
        ChecklistItem {
            id: "CHK001".into(),
            title: "Company Registration Documents".into(),
            description: "Upload certificate of incorporation and registration papers".into(),
            status: ChecklistStatus::Completed,
            priority: ChecklistPriority::High,
            category: ChecklistCategory::Documentation,
        },
        ChecklistItem {
            id: "CHK002".into(),
            title: "GST Registration Certificate".into(),
            description: "Provide valid GST registration certificate".into(),
            status: ChecklistStatus::Completed,
            priority: ChecklistPriority::High,
            category: ChecklistCategory::Documentation,
        },
        ChecklistItem {
            id: "CHK003".into(),
            title: "Bank Account Verification".into(),
            description: "Verify bank account details for payments".into(),
            status: ChecklistStatus::InProgress,
            priority: ChecklistPriority::High,
            category: ChecklistCategory::Verification,
        },
        ChecklistItem {
            id: "CHK004".into(),
            title: "Quality Certifications".into(),
            description: "Submit ISO or other relevant quality certifications".into(),
            status: ChecklistStatus::Pending,
            priority: ChecklistPriority::Medium,
            category: ChecklistCategory::Compliance,
        },
        ChecklistItem {
            id: "CHK005".into(),
            title: "Compliance Declaration".into(),
            description: "Sign the supplier code of conduct declaration".into(),
            status: ChecklistStatus::Pending,
            priority: ChecklistPriority::High,
            category: ChecklistCategory::Compliance,
        },
        ChecklistItem {
            id: "CHK006".into(),
            title: "Contact Verification".into(),
            description: "Verify primary contact email and phone number".into(),
            status: ChecklistStatus::Completed,
            priority: ChecklistPriority::Medium,
            category: ChecklistCategory::Verification,
        },
        ChecklistItem {
            id: "CHK007".into(),
            title: "System Access Setup".into(),
            description: "Create portal accounts for supplier representatives".into(),
            status: ChecklistStatus::Pending,
            priority: ChecklistPriority::Low,
            category: ChecklistCategory::Setup,
        },
        ChecklistItem {
            id: "CHK008".into(),
            title: "Payment Terms Configuration".into(),
            description: "Configure agreed payment terms and billing cycle".into(),
            status: ChecklistStatus::Pending,
            priority: ChecklistPriority::Medium,
            category: ChecklistCategory::Setup,
        },
    ]
});

pub fn results() -> Vec<ComplianceResult> {
    RESULTS.clone()
}

pub fn onboarding_checklist() -> Vec<ChecklistItem> {
    CHECKLIST.clone()
}
