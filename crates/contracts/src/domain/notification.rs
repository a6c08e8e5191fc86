use crate::shared::filter::Filterable;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Info,
    Warning,
    Error,
    Success,
}

impl NotificationKind {
    pub const ALL: [NotificationKind; 4] = [
        NotificationKind::Info,
        NotificationKind::Warning,
        NotificationKind::Error,
        NotificationKind::Success,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            NotificationKind::Info => "info",
            NotificationKind::Warning => "warning",
            NotificationKind::Error => "error",
            NotificationKind::Success => "success",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NotificationKind::Info => "Info",
            NotificationKind::Warning => "Warning",
            NotificationKind::Error => "Error",
            NotificationKind::Success => "Success",
        }
    }

    pub fn badge_variant(&self) -> &'static str {
        match self {
            NotificationKind::Info => "neutral",
            NotificationKind::Warning => "warning",
            NotificationKind::Error => "error",
            NotificationKind::Success => "success",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl Priority {
    pub const ALL: [Priority; 4] = [
        Priority::Low,
        Priority::Medium,
        Priority::High,
        Priority::Critical,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Critical => "critical",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
            Priority::Critical => "Critical",
        }
    }

    pub fn badge_variant(&self) -> &'static str {
        match self {
            Priority::Low => "neutral",
            Priority::Medium => "warning",
            Priority::High => "error",
            Priority::Critical => "error",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationStatus {
    Sent,
    Pending,
    Failed,
    Read,
    Unread,
}

impl NotificationStatus {
    pub const ALL: [NotificationStatus; 5] = [
        NotificationStatus::Sent,
        NotificationStatus::Pending,
        NotificationStatus::Failed,
        NotificationStatus::Read,
        NotificationStatus::Unread,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            NotificationStatus::Sent => "sent",
            NotificationStatus::Pending => "pending",
            NotificationStatus::Failed => "failed",
            NotificationStatus::Read => "read",
            NotificationStatus::Unread => "unread",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NotificationStatus::Sent => "Sent",
            NotificationStatus::Pending => "Pending",
            NotificationStatus::Failed => "Failed",
            NotificationStatus::Read => "Read",
            NotificationStatus::Unread => "Unread",
        }
    }

    pub fn badge_variant(&self) -> &'static str {
        match self {
            NotificationStatus::Sent => "success",
            NotificationStatus::Pending => "warning",
            NotificationStatus::Failed => "error",
            NotificationStatus::Read => "neutral",
            NotificationStatus::Unread => "primary",
        }
    }
}

/// Delivery channel for outbound notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    Email,
    Push,
    Sms,
    InApp,
}

impl Channel {
    pub fn label(&self) -> &'static str {
        match self {
            Channel::Email => "Email",
            Channel::Push => "Push",
            Channel::Sms => "SMS",
            Channel::InApp => "In-App",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Channel::Email => "mail",
            Channel::Push => "bell",
            Channel::Sms => "message",
            Channel::InApp => "smartphone",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecipientType {
    User,
    Role,
    All,
}

/// One outbound notification. Channels are kept sorted and deduplicated by
/// construction in the fixtures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub category: String,
    pub priority: Priority,
    pub recipient: String,
    #[serde(rename = "recipientType")]
    pub recipient_type: RecipientType,
    pub status: NotificationStatus,
    #[serde(rename = "createdAt")]
    pub created_at: String,
    #[serde(rename = "sentAt", skip_serializing_if = "Option::is_none")]
    pub sent_at: Option<String>,
    #[serde(rename = "readAt", skip_serializing_if = "Option::is_none")]
    pub read_at: Option<String>,
    pub channels: Vec<Channel>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, serde_json::Value>,
}

impl Filterable for Notification {
    // The notification list has no free-text search; it narrows by kind,
    // status and priority only.
    fn search_text(&self) -> Vec<&str> {
        Vec::new()
    }

    fn field(&self, name: &str) -> Option<String> {
        match name {
            "type" => Some(self.kind.key().to_string()),
            "status" => Some(self.status.key().to_string()),
            "priority" => Some(self.priority.key().to_string()),
            _ => None,
        }
    }
}

/// Reusable message template with `{{variable}}` placeholders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationTemplate {
    pub id: String,
    pub name: String,
    pub subject: String,
    pub content: String,
    pub category: String,
    pub channels: Vec<Channel>,
    pub variables: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_serializes_snake_case() {
        assert_eq!(serde_json::to_string(&Channel::InApp).unwrap(), "\"in_app\"");
        assert_eq!(serde_json::to_string(&Channel::Sms).unwrap(), "\"sms\"");
    }

    #[test]
    fn priority_is_ordered() {
        assert!(Priority::Low < Priority::High);
    }
}
