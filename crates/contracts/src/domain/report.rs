use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportType {
    Compliance,
    Risk,
    Performance,
    Audit,
    Financial,
    Operational,
}

impl ReportType {
    pub fn label(&self) -> &'static str {
        match self {
            ReportType::Compliance => "Compliance",
            ReportType::Risk => "Risk",
            ReportType::Performance => "Performance",
            ReportType::Audit => "Audit",
            ReportType::Financial => "Financial",
            ReportType::Operational => "Operational",
        }
    }
}

impl fmt::Display for ReportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    Pdf,
    Excel,
    Csv,
    Json,
}

impl ReportFormat {
    pub fn label(&self) -> &'static str {
        match self {
            ReportFormat::Pdf => "PDF",
            ReportFormat::Excel => "Excel",
            ReportFormat::Csv => "CSV",
            ReportFormat::Json => "JSON",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    Completed,
    Generating,
    Scheduled,
    Failed,
}

impl ReportStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ReportStatus::Completed => "Completed",
            ReportStatus::Generating => "Generating",
            ReportStatus::Scheduled => "Scheduled",
            ReportStatus::Failed => "Failed",
        }
    }

    pub fn badge_variant(&self) -> &'static str {
        match self {
            ReportStatus::Completed => "success",
            ReportStatus::Generating => "warning",
            ReportStatus::Scheduled => "primary",
            ReportStatus::Failed => "error",
        }
    }
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleFrequency {
    Daily,
    Weekly,
    Monthly,
    Quarterly,
    Annually,
}

impl ScheduleFrequency {
    pub fn label(&self) -> &'static str {
        match self {
            ScheduleFrequency::Daily => "Daily",
            ScheduleFrequency::Weekly => "Weekly",
            ScheduleFrequency::Monthly => "Monthly",
            ScheduleFrequency::Quarterly => "Quarterly",
            ScheduleFrequency::Annually => "Annually",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSchedule {
    pub frequency: ScheduleFrequency,
    #[serde(rename = "nextRun")]
    pub next_run: String,
    pub enabled: bool,
}

/// A generated (or queued) report artifact. Download URLs are carried as
/// fixture strings only; nothing serves them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub report_type: ReportType,
    pub format: ReportFormat,
    pub status: ReportStatus,
    #[serde(rename = "createdAt")]
    pub created_at: String,
    #[serde(rename = "generatedAt", skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(rename = "downloadUrl", skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<ReportSchedule>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportTemplate {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    #[serde(rename = "type")]
    pub report_type: ReportType,
    pub sections: Vec<String>,
    pub parameters: Vec<String>,
    #[serde(rename = "estimatedTime")]
    pub estimated_time: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schedule_round_trips_through_json() {
        let schedule = ReportSchedule {
            frequency: ScheduleFrequency::Monthly,
            next_run: "2025-01-14T10:00:00Z".into(),
            enabled: true,
        };
        let json = serde_json::to_string(&schedule).unwrap();
        let back: ReportSchedule = serde_json::from_str(&json).unwrap();
        assert_eq!(back.frequency, ScheduleFrequency::Monthly);
        assert!(back.enabled);
    }
}
