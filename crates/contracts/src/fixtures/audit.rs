use crate::domain::audit::{AuditCategory, AuditLog, AuditOutcome, AuditSeverity};
use once_cell::sync::Lazy;
use serde_json::json;
use std::collections::BTreeMap;

fn metadata(entries: &[(&str, serde_json::Value)]) -> BTreeMap<String, serde_json::Value> {
    entries
        .iter()
        .map(|(key, value)| (key.to_string(), value.clone()))
        .collect()
}

static AUDIT_LOGS: Lazy<Vec<AuditLog>> = Lazy::new(|| {
    vec![
        AuditLog {
            id: "AUD001".into(),
            timestamp: "2024-12-14T10:30:15Z".into(),
            user_id: "USR001".into(),
            user_name: "Sarah Wilson".into(),
            user_role: "Compliance Manager".into(),
            action: "Document Approved".into(),
            category: AuditCategory::Compliance,
            resource: "Document".into(),
            resource_id: "DOC001".into(),
            details: "Approved GST Certificate for TechCorp Solutions".into(),
            ip_address: "192.168.1.100".into(),
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36".into(),
            severity: AuditSeverity::Medium,
            outcome: AuditOutcome::Success,
            metadata: metadata(&[
                ("documentType", json!("GST Certificate")),
                ("supplierId", json!("SUP001")),
            ]),
        },
        AuditLog {
            id: "AUD002".into(),
            timestamp: "2024-12-14T09:45:22Z".into(),
            user_id: "USR002".into(),
            user_name: "John Doe".into(),
            user_role: "System Admin".into(),
            action: "User Login".into(),
            category: AuditCategory::Authentication,
            resource: "User Session".into(),
            resource_id: "SES001".into(),
            details: "Successful login from new device".into(),
            ip_address: "10.0.0.50".into(),
            user_agent: "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36".into(),
            severity: AuditSeverity::Low,
            outcome: AuditOutcome::Success,
            metadata: BTreeMap::new(),
        },
        AuditLog {
            id: "AUD003".into(),
            timestamp: "2024-12-14T09:15:33Z".into(),
            user_id: "USR003".into(),
            user_name: "Mike Johnson".into(),
            user_role: "Auditor".into(),
            action: "Failed Login Attempt".into(),
            category: AuditCategory::Authentication,
            resource: "User Session".into(),
            resource_id: "SES002".into(),
            details: "Multiple failed login attempts detected".into(),
            ip_address: "203.0.113.45".into(),
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36".into(),
            severity: AuditSeverity::High,
            outcome: AuditOutcome::Failure,
            metadata: BTreeMap::new(),
        },
        AuditLog {
            id: "AUD004".into(),
            timestamp: "2024-12-14T08:30:10Z".into(),
            user_id: "USR001".into(),
            user_name: "Sarah Wilson".into(),
            user_role: "Compliance Manager".into(),
            action: "Supplier Risk Score Updated".into(),
            category: AuditCategory::DataModification,
            resource: "Supplier".into(),
            resource_id: "SUP002".into(),
            details: "Risk score changed from 6.5 to 8.2 for Global Manufacturing".into(),
            ip_address: "192.168.1.100".into(),
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36".into(),
            severity: AuditSeverity::Medium,
            outcome: AuditOutcome::Success,
            metadata: metadata(&[
                ("oldRiskScore", json!(6.5)),
                ("newRiskScore", json!(8.2)),
                ("reason", json!("Document expiry detected")),
            ]),
        },
        AuditLog {
            id: "AUD005".into(),
            timestamp: "2024-12-14T07:00:05Z".into(),
            user_id: "SYSTEM".into(),
            user_name: "System".into(),
            user_role: "System".into(),
            action: "Automated Compliance Check".into(),
            category: AuditCategory::Workflow,
            resource: "Compliance Check".into(),
            resource_id: "CHK001".into(),
            details: "Daily compliance validation completed for 45 suppliers".into(),
            ip_address: "127.0.0.1".into(),
            user_agent: "System/1.0".into(),
            severity: AuditSeverity::Low,
            outcome: AuditOutcome::Success,
            metadata: metadata(&[
                ("suppliersChecked", json!(45)),
                ("issuesFound", json!(3)),
                ("alertsGenerated", json!(2)),
            ]),
        },
        AuditLog {
            id: "AUD006".into(),
            timestamp: "2024-12-13T17:20:41Z".into(),
            user_id: "USR002".into(),
            user_name: "John Doe".into(),
            user_role: "System Admin".into(),
            action: "Retention Policy Changed".into(),
            category: AuditCategory::SystemConfig,
            resource: "Settings".into(),
            resource_id: "CFG001".into(),
            details: "Audit log retention reduced from 730 to 365 days".into(),
            ip_address: "10.0.0.50".into(),
            user_agent: "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36".into(),
            severity: AuditSeverity::Critical,
            outcome: AuditOutcome::Warning,
            metadata: metadata(&[("oldDays", json!(730)), ("newDays", json!(365))]),
        },
    ]
});

pub fn all() -> Vec<AuditLog> {
    AUDIT_LOGS.clone()
}
