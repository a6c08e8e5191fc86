use crate::domain::report::{
    Report, ReportFormat, ReportSchedule, ReportStatus, ReportTemplate, ReportType,
    ScheduleFrequency,
};
use once_cell::sync::Lazy;

static REPORTS: Lazy<Vec<Report>> = Lazy::new(|| {
    vec![
        Report {
            id: "RPT001".into(),
            name: "Monthly Compliance Report".into(),
            description: "Comprehensive compliance status across all suppliers".into(),
            report_type: ReportType::Compliance,
            format: ReportFormat::Pdf,
            status: ReportStatus::Completed,
            created_at: "2024-12-14T10:00:00Z".into(),
            generated_at: Some("2024-12-14T10:15:00Z".into()),
            size: Some("2.4 MB".into()),
            download_url: Some("/reports/compliance-2024-12.pdf".into()),
            schedule: Some(ReportSchedule {
                frequency: ScheduleFrequency::Monthly,
                next_run: "2025-01-14T10:00:00Z".into(),
                enabled: true,
            }),
        },
        Report {
            id: "RPT002".into(),
            name: "Risk Assessment Summary".into(),
            description: "High-risk suppliers and mitigation strategies".into(),
            report_type: ReportType::Risk,
            format: ReportFormat::Pdf,
            status: ReportStatus::Generating,
            created_at: "2024-12-14T09:30:00Z".into(),
            generated_at: None,
            size: None,
            download_url: None,
            schedule: None,
        },
        Report {
            id: "RPT003".into(),
            name: "Supplier Performance Analytics".into(),
            description: "KPI trends and performance metrics".into(),
            report_type: ReportType::Performance,
            format: ReportFormat::Excel,
            status: ReportStatus::Completed,
            created_at: "2024-12-13T16:00:00Z".into(),
            generated_at: Some("2024-12-13T16:12:00Z".into()),
            size: Some("1.8 MB".into()),
            download_url: Some("/reports/performance-2024-12-13.xlsx".into()),
            schedule: None,
        },
        Report {
            id: "RPT004".into(),
            name: "Audit Trail Report".into(),
            description: "Complete activity log for compliance audit".into(),
            report_type: ReportType::Audit,
            format: ReportFormat::Pdf,
            status: ReportStatus::Scheduled,
            created_at: "2024-12-14T08:00:00Z".into(),
            generated_at: None,
            size: None,
            download_url: None,
            schedule: Some(ReportSchedule {
                frequency: ScheduleFrequency::Weekly,
                next_run: "2024-12-21T08:00:00Z".into(),
                enabled: true,
            }),
        },
    ]
});

static TEMPLATES: Lazy<Vec<ReportTemplate>> = Lazy::new(|| {
    vec![
        ReportTemplate {
            id: "RTP001".into(),
            name: "Compliance Overview".into(),
            description: "Standard compliance report with all key metrics".into(),
            category: "Compliance".into(),
            report_type: ReportType::Compliance,
            sections: vec![
                "Executive Summary".into(),
                "Compliance Scores".into(),
                "Risk Analysis".into(),
                "Action Items".into(),
            ],
            parameters: vec![
                "dateRange".into(),
                "includeCharts".into(),
                "detailLevel".into(),
            ],
            estimated_time: "5-10 minutes".into(),
        },
        ReportTemplate {
            id: "RTP002".into(),
            name: "Risk Assessment".into(),
            description: "Detailed risk analysis and recommendations".into(),
            category: "Risk Management".into(),
            report_type: ReportType::Risk,
            sections: vec![
                "Risk Overview".into(),
                "High Risk Suppliers".into(),
                "Mitigation Plans".into(),
                "Trends".into(),
            ],
            parameters: vec![
                "riskThreshold".into(),
                "includeRecommendations".into(),
                "timeframe".into(),
            ],
            estimated_time: "3-7 minutes".into(),
        },
        ReportTemplate {
            id: "RTP003".into(),
            name: "Performance Dashboard".into(),
            description: "KPI tracking and performance analytics".into(),
            category: "Performance".into(),
            report_type: ReportType::Performance,
            sections: vec![
                "KPI Summary".into(),
                "Trend Analysis".into(),
                "Benchmarking".into(),
                "Recommendations".into(),
            ],
            parameters: vec![
                "period".into(),
                "includeComparisons".into(),
                "kpiSelection".into(),
            ],
            estimated_time: "4-8 minutes".into(),
        },
        ReportTemplate {
            id: "RTP004".into(),
            name: "Audit Report".into(),
            description: "Comprehensive audit trail and compliance verification".into(),
            category: "Audit".into(),
            report_type: ReportType::Audit,
            sections: vec![
                "Audit Summary".into(),
                "Activity Log".into(),
                "Compliance Verification".into(),
                "Findings".into(),
            ],
            parameters: vec![
                "auditPeriod".into(),
                "includeMetadata".into(),
                "severityFilter".into(),
            ],
            estimated_time: "8-15 minutes".into(),
        },
    ]
});

pub fn all() -> Vec<Report> {
    REPORTS.clone()
}

pub fn templates() -> Vec<ReportTemplate> {
    TEMPLATES.clone()
}
