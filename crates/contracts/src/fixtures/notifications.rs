use crate::domain::notification::{
    Channel, Notification, NotificationKind, NotificationStatus, NotificationTemplate, Priority,
    RecipientType,
};
use once_cell::sync::Lazy;
use serde_json::json;
use std::collections::BTreeMap;

fn metadata(entries: &[(&str, serde_json::Value)]) -> BTreeMap<String, serde_json::Value> {
    entries
        .iter()
        .map(|(key, value)| (key.to_string(), value.clone()))
        .collect()
}

static NOTIFICATIONS: Lazy<Vec<Notification>> = Lazy::new(|| {
    vec![
        Notification {
            id: "NTF001".into(),
            title: "Document Expiry Alert".into(),
            message: "GST Certificate for TechCorp Solutions expires in 15 days".into(),
            kind: NotificationKind::Warning,
            category: "document".into(),
            priority: Priority::High,
            recipient: "sarah.wilson@company.com".into(),
            recipient_type: RecipientType::User,
            status: NotificationStatus::Sent,
            created_at: "2024-12-14T10:30:00Z".into(),
            sent_at: Some("2024-12-14T10:31:00Z".into()),
            read_at: None,
            channels: vec![Channel::Email, Channel::InApp],
            metadata: metadata(&[
                ("supplierId", json!("SUP001")),
                ("documentId", json!("DOC001")),
                ("expiryDate", json!("2024-12-29")),
            ]),
        },
        Notification {
            id: "NTF002".into(),
            title: "High Risk Supplier Alert".into(),
            message: "Global Manufacturing risk score increased to 8.5 - immediate review required"
                .into(),
            kind: NotificationKind::Error,
            category: "compliance".into(),
            priority: Priority::Critical,
            recipient: "compliance_team".into(),
            recipient_type: RecipientType::Role,
            status: NotificationStatus::Sent,
            created_at: "2024-12-14T09:15:00Z".into(),
            sent_at: Some("2024-12-14T09:16:00Z".into()),
            read_at: Some("2024-12-14T09:45:00Z".into()),
            channels: vec![Channel::Email, Channel::Push, Channel::Sms],
            metadata: metadata(&[
                ("supplierId", json!("SUP002")),
                ("oldRiskScore", json!(6.2)),
                ("newRiskScore", json!(8.5)),
            ]),
        },
        Notification {
            id: "NTF003".into(),
            title: "Workflow Completion".into(),
            message: "Supplier onboarding workflow completed for InnovateTech".into(),
            kind: NotificationKind::Success,
            category: "workflow".into(),
            priority: Priority::Medium,
            recipient: "john.doe@company.com".into(),
            recipient_type: RecipientType::User,
            status: NotificationStatus::Pending,
            created_at: "2024-12-14T08:45:00Z".into(),
            sent_at: None,
            read_at: None,
            channels: vec![Channel::Email, Channel::InApp],
            metadata: BTreeMap::new(),
        },
        Notification {
            id: "NTF004".into(),
            title: "System Maintenance".into(),
            message: "Scheduled maintenance window: Dec 15, 2024 2:00 AM - 4:00 AM UTC".into(),
            kind: NotificationKind::Info,
            category: "system".into(),
            priority: Priority::Low,
            recipient: "all".into(),
            recipient_type: RecipientType::All,
            status: NotificationStatus::Sent,
            created_at: "2024-12-13T16:00:00Z".into(),
            sent_at: Some("2024-12-13T16:01:00Z".into()),
            read_at: None,
            channels: vec![Channel::Email, Channel::InApp],
            metadata: BTreeMap::new(),
        },
        Notification {
            id: "NTF005".into(),
            title: "SMS Delivery Failure".into(),
            message: "Risk alert SMS to on-call auditor could not be delivered".into(),
            kind: NotificationKind::Error,
            category: "security".into(),
            priority: Priority::High,
            recipient: "mike.johnson@company.com".into(),
            recipient_type: RecipientType::User,
            status: NotificationStatus::Failed,
            created_at: "2024-12-13T11:05:00Z".into(),
            sent_at: None,
            read_at: None,
            channels: vec![Channel::Sms],
            metadata: metadata(&[("carrierError", json!("UNREACHABLE"))]),
        },
    ]
});

static TEMPLATES: Lazy<Vec<NotificationTemplate>> = Lazy::new(|| {
    vec![
        NotificationTemplate {
            id: "TPL001".into(),
            name: "Document Expiry Warning".into(),
            subject: "Document Expiry Alert - {{supplierName}}".into(),
            content: "The {{documentType}} for {{supplierName}} will expire on {{expiryDate}}. \
                      Please ensure renewal to maintain compliance."
                .into(),
            category: "document".into(),
            channels: vec![Channel::Email, Channel::InApp],
            variables: vec![
                "supplierName".into(),
                "documentType".into(),
                "expiryDate".into(),
            ],
        },
        NotificationTemplate {
            id: "TPL002".into(),
            name: "Risk Score Alert".into(),
            subject: "High Risk Supplier Alert - {{supplierName}}".into(),
            content: "{{supplierName}} risk score has increased to {{riskScore}}. Immediate \
                      review and action required."
                .into(),
            category: "compliance".into(),
            channels: vec![Channel::Email, Channel::Push, Channel::Sms],
            variables: vec![
                "supplierName".into(),
                "riskScore".into(),
                "previousScore".into(),
            ],
        },
        NotificationTemplate {
            id: "TPL003".into(),
            name: "Workflow Completion".into(),
            subject: "Workflow Completed - {{workflowName}}".into(),
            content: "The {{workflowName}} workflow has been completed successfully for \
                      {{supplierName}}."
                .into(),
            category: "workflow".into(),
            channels: vec![Channel::Email, Channel::InApp],
            variables: vec![
                "workflowName".into(),
                "supplierName".into(),
                "completionDate".into(),
            ],
        },
    ]
});

pub fn all() -> Vec<Notification> {
    NOTIFICATIONS.clone()
}

pub fn templates() -> Vec<NotificationTemplate> {
    TEMPLATES.clone()
}
