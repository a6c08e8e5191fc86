use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepType {
    Approval,
    Validation,
    Notification,
    Action,
}

impl StepType {
    pub fn icon(&self) -> &'static str {
        match self {
            StepType::Approval => "user",
            StepType::Validation => "check",
            StepType::Notification => "mail",
            StepType::Action => "zap",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StepStatus {
    Pending,
    InProgress,
    Completed,
    Failed,
}

impl StepStatus {
    pub fn label(&self) -> &'static str {
        match self {
            StepStatus::Pending => "Pending",
            StepStatus::InProgress => "In Progress",
            StepStatus::Completed => "Completed",
            StepStatus::Failed => "Failed",
        }
    }

    pub fn badge_variant(&self) -> &'static str {
        match self {
            StepStatus::Pending => "neutral",
            StepStatus::InProgress => "warning",
            StepStatus::Completed => "success",
            StepStatus::Failed => "error",
        }
    }
}

impl fmt::Display for StepStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkflowStatus {
    Active,
    Paused,
    Draft,
}

impl WorkflowStatus {
    pub fn label(&self) -> &'static str {
        match self {
            WorkflowStatus::Active => "Active",
            WorkflowStatus::Paused => "Paused",
            WorkflowStatus::Draft => "Draft",
        }
    }

    pub fn badge_variant(&self) -> &'static str {
        match self {
            WorkflowStatus::Active => "success",
            WorkflowStatus::Paused => "warning",
            WorkflowStatus::Draft => "neutral",
        }
    }
}

impl fmt::Display for WorkflowStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowStep {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub step_type: StepType,
    pub status: StepStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    pub description: String,
}

/// An automated business process definition plus its last-run progress.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workflow {
    pub id: String,
    pub name: String,
    pub description: String,
    pub status: WorkflowStatus,
    pub trigger: String,
    pub steps: Vec<WorkflowStep>,
    #[serde(rename = "completedSteps")]
    pub completed_steps: u32,
    #[serde(rename = "totalSteps")]
    pub total_steps: u32,
    #[serde(rename = "lastRun")]
    pub last_run: String,
    #[serde(rename = "successRate")]
    pub success_rate: u32,
}

impl Workflow {
    /// Completion of the current run, 0–100.
    pub fn progress_percent(&self) -> u32 {
        if self.total_steps == 0 {
            return 0;
        }
        self.completed_steps * 100 / self.total_steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn workflow(completed: u32, total: u32) -> Workflow {
        Workflow {
            id: "WF001".into(),
            name: "Supplier Onboarding".into(),
            description: String::new(),
            status: WorkflowStatus::Active,
            trigger: String::new(),
            steps: Vec::new(),
            completed_steps: completed,
            total_steps: total,
            last_run: String::new(),
            success_rate: 94,
        }
    }

    #[test]
    fn progress_is_a_whole_percentage() {
        assert_eq!(workflow(3, 6).progress_percent(), 50);
        assert_eq!(workflow(2, 3).progress_percent(), 66);
        assert_eq!(workflow(0, 5).progress_percent(), 0);
    }

    #[test]
    fn zero_step_workflow_reports_zero_progress() {
        assert_eq!(workflow(0, 0).progress_percent(), 0);
    }

    #[test]
    fn step_status_uses_kebab_case_wire_names() {
        let json = serde_json::to_string(&StepStatus::InProgress).unwrap();
        assert_eq!(json, "\"in-progress\"");
    }
}
