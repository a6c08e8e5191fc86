use crate::domain::alert::{Alert, AlertStatus, AlertType, Severity};
use once_cell::sync::Lazy;

static ALERTS: Lazy<Vec<Alert>> = Lazy::new(|| {
    vec![
        Alert {
            id: "ALT001".into(),
            supplier_id: "SUP002".into(),
            alert_type: AlertType::Risk,
            severity: Severity::Critical,
            title: "Risk score spike for Global Manufacturing".into(),
            description: "Risk score increased from 6.2 to 8.5 after document expiry detection."
                .into(),
            status: AlertStatus::Open,
            created_date: "2024-12-14".into(),
            assigned_to: None,
        },
        Alert {
            id: "ALT002".into(),
            supplier_id: "SUP001".into(),
            alert_type: AlertType::Document,
            severity: Severity::High,
            title: "GST Certificate expiring soon".into(),
            description: "GST Certificate for TechCorp Solutions expires in 15 days.".into(),
            status: AlertStatus::InProgress,
            created_date: "2024-12-13".into(),
            assigned_to: Some("Sarah Wilson".into()),
        },
        Alert {
            id: "ALT003".into(),
            supplier_id: "SUP003".into(),
            alert_type: AlertType::Compliance,
            severity: Severity::Critical,
            title: "Supplier suspended pending re-validation".into(),
            description: "InnovateTech failed two consecutive compliance checks.".into(),
            status: AlertStatus::Open,
            created_date: "2024-12-12".into(),
            assigned_to: Some("Mike Johnson".into()),
        },
        Alert {
            id: "ALT004".into(),
            supplier_id: "SUP002".into(),
            alert_type: AlertType::Kpi,
            severity: Severity::Medium,
            title: "Quality Score below target".into(),
            description: "Quality Score at 71% against a target of 85% for Q4 2024.".into(),
            status: AlertStatus::InProgress,
            created_date: "2024-12-10".into(),
            assigned_to: Some("Emma Davis".into()),
        },
        Alert {
            id: "ALT005".into(),
            supplier_id: "SUP004".into(),
            alert_type: AlertType::Document,
            severity: Severity::Low,
            title: "Bank details rejected".into(),
            description: "Submitted bank details did not match the registered account name.".into(),
            status: AlertStatus::Resolved,
            created_date: "2024-12-08".into(),
            assigned_to: Some("Emma Davis".into()),
        },
    ]
});

pub fn all() -> Vec<Alert> {
    ALERTS.clone()
}
