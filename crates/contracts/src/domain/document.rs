use crate::shared::filter::Filterable;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    Verified,
    Pending,
    Rejected,
    Expired,
}

impl DocumentStatus {
    pub const ALL: [DocumentStatus; 4] = [
        DocumentStatus::Verified,
        DocumentStatus::Pending,
        DocumentStatus::Rejected,
        DocumentStatus::Expired,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DocumentStatus::Verified => "Verified",
            DocumentStatus::Pending => "Pending",
            DocumentStatus::Rejected => "Rejected",
            DocumentStatus::Expired => "Expired",
        }
    }

    pub fn badge_variant(&self) -> &'static str {
        match self {
            DocumentStatus::Verified => "success",
            DocumentStatus::Pending => "warning",
            DocumentStatus::Rejected => "error",
            DocumentStatus::Expired => "error",
        }
    }
}

impl fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DocumentStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Verified" => Ok(DocumentStatus::Verified),
            "Pending" => Ok(DocumentStatus::Pending),
            "Rejected" => Ok(DocumentStatus::Rejected),
            "Expired" => Ok(DocumentStatus::Expired),
            other => anyhow::bail!("unknown document status: {other}"),
        }
    }
}

/// A compliance document uploaded for a supplier. `supplier_id` is a weak
/// reference into the supplier fixtures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub doc_type: String,
    #[serde(rename = "supplierId")]
    pub supplier_id: String,
    #[serde(rename = "supplierName")]
    pub supplier_name: String,
    pub status: DocumentStatus,
    #[serde(rename = "uploadDate")]
    pub upload_date: String,
    #[serde(rename = "expiryDate", skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<String>,
    pub size: String,
    #[serde(rename = "uploadedBy")]
    pub uploaded_by: String,
    pub version: u32,
    pub tags: Vec<String>,
}

impl Filterable for Document {
    fn search_text(&self) -> Vec<&str> {
        vec![&self.name, &self.supplier_name, &self.doc_type]
    }

    fn field(&self, name: &str) -> Option<String> {
        match name {
            "status" => Some(self.status.to_string()),
            "type" => Some(self.doc_type.clone()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&DocumentStatus::Verified).unwrap();
        assert_eq!(json, "\"verified\"");
        let back: DocumentStatus = serde_json::from_str("\"expired\"").unwrap();
        assert_eq!(back, DocumentStatus::Expired);
    }

    #[test]
    fn rejected_and_expired_are_error_badges() {
        assert_eq!(DocumentStatus::Rejected.badge_variant(), "error");
        assert_eq!(DocumentStatus::Expired.badge_variant(), "error");
        assert_eq!(DocumentStatus::Verified.badge_variant(), "success");
    }
}
