use crate::domain::workflow::{StepStatus, StepType, Workflow, WorkflowStatus, WorkflowStep};
use once_cell::sync::Lazy;

fn step(
    id: &str,
    name: &str,
    step_type: StepType,
    status: StepStatus,
    assignee: Option<&str>,
    duration: &str,
    description: &str,
) -> WorkflowStep {
    WorkflowStep {
        id: id.into(),
        name: name.into(),
        step_type,
        status,
        assignee: assignee.map(Into::into),
        duration: Some(duration.into()),
        description: description.into(),
    }
}

static WORKFLOWS: Lazy<Vec<Workflow>> = Lazy::new(|| {
    vec![
        Workflow {
            id: "WF001".into(),
            name: "Supplier Onboarding".into(),
            description: "Complete supplier registration and verification process".into(),
            status: WorkflowStatus::Active,
            trigger: "New supplier registration".into(),
            completed_steps: 3,
            total_steps: 6,
            last_run: "2024-12-14 09:30".into(),
            success_rate: 94,
            steps: vec![
                step(
                    "S1",
                    "Document Collection",
                    StepType::Action,
                    StepStatus::Completed,
                    None,
                    "2 hours",
                    "Collect required documents from supplier",
                ),
                step(
                    "S2",
                    "GSTIN Verification",
                    StepType::Validation,
                    StepStatus::Completed,
                    None,
                    "15 minutes",
                    "Verify GSTIN with government database",
                ),
                step(
                    "S3",
                    "Risk Assessment",
                    StepType::Action,
                    StepStatus::Completed,
                    None,
                    "30 minutes",
                    "Calculate supplier risk score",
                ),
                step(
                    "S4",
                    "Manager Approval",
                    StepType::Approval,
                    StepStatus::InProgress,
                    Some("Sarah Wilson"),
                    "1 day",
                    "Manager review and approval",
                ),
                step(
                    "S5",
                    "Contract Setup",
                    StepType::Action,
                    StepStatus::Pending,
                    None,
                    "2 hours",
                    "Generate and send contract",
                ),
                step(
                    "S6",
                    "Welcome Notification",
                    StepType::Notification,
                    StepStatus::Pending,
                    None,
                    "5 minutes",
                    "Send welcome email to supplier",
                ),
            ],
        },
        Workflow {
            id: "WF002".into(),
            name: "Document Expiry Alert".into(),
            description: "Monitor and alert for expiring documents".into(),
            status: WorkflowStatus::Active,
            trigger: "Document expiry check (daily)".into(),
            completed_steps: 2,
            total_steps: 3,
            last_run: "2024-12-14 06:00".into(),
            success_rate: 98,
            steps: vec![
                step(
                    "S1",
                    "Scan Documents",
                    StepType::Action,
                    StepStatus::Completed,
                    None,
                    "10 minutes",
                    "Check all documents for expiry dates",
                ),
                step(
                    "S2",
                    "Generate Alerts",
                    StepType::Action,
                    StepStatus::Completed,
                    None,
                    "5 minutes",
                    "Create alerts for expiring documents",
                ),
                step(
                    "S3",
                    "Send Notifications",
                    StepType::Notification,
                    StepStatus::InProgress,
                    Some("System"),
                    "15 minutes",
                    "Email suppliers and managers",
                ),
            ],
        },
        Workflow {
            id: "WF003".into(),
            name: "Compliance Audit".into(),
            description: "Quarterly compliance audit workflow".into(),
            status: WorkflowStatus::Paused,
            trigger: "Quarterly schedule".into(),
            completed_steps: 0,
            total_steps: 5,
            last_run: "2024-09-15 10:00".into(),
            success_rate: 87,
            steps: vec![
                step(
                    "S1",
                    "Select Suppliers",
                    StepType::Action,
                    StepStatus::Pending,
                    None,
                    "1 hour",
                    "Select suppliers for audit based on risk",
                ),
                step(
                    "S2",
                    "Document Review",
                    StepType::Validation,
                    StepStatus::Pending,
                    None,
                    "2 days",
                    "Review all compliance documents",
                ),
                step(
                    "S3",
                    "Site Inspection",
                    StepType::Action,
                    StepStatus::Pending,
                    Some("Audit Team"),
                    "1 day",
                    "Conduct on-site inspection",
                ),
                step(
                    "S4",
                    "Report Generation",
                    StepType::Action,
                    StepStatus::Pending,
                    None,
                    "4 hours",
                    "Generate audit report",
                ),
                step(
                    "S5",
                    "Stakeholder Notification",
                    StepType::Notification,
                    StepStatus::Pending,
                    None,
                    "30 minutes",
                    "Send report to stakeholders",
                ),
            ],
        },
    ]
});

pub fn all() -> Vec<Workflow> {
    WORKFLOWS.clone()
}
