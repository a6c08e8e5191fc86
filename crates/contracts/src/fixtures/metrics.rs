use crate::domain::metrics::{
    AuditMonth, CategoryPerformance, ComplianceMetric, DashboardMetrics, KpiTrend, MonthlyScore,
    RiskSlice, RiskTrendMonth,
};
use once_cell::sync::Lazy;

static DASHBOARD: Lazy<DashboardMetrics> = Lazy::new(|| DashboardMetrics {
    total_suppliers: 5,
    active_suppliers: 3,
    critical_alerts: 2,
    avg_compliance_score: 84.2,
    suppliers_at_risk: 2,
    documents_expiring_soon: 3,
    recent_audits: 12,
    kpi_trends: vec![
        KpiTrend {
            metric: "Compliance Score".into(),
            current: 84.2,
            previous: 81.5,
            change: 2.7,
        },
        KpiTrend {
            metric: "On-Time Delivery".into(),
            current: 92.1,
            previous: 93.4,
            change: -1.3,
        },
        KpiTrend {
            metric: "Quality Rating".into(),
            current: 88.7,
            previous: 87.2,
            change: 1.5,
        },
        KpiTrend {
            metric: "Document Currency".into(),
            current: 76.0,
            previous: 79.8,
            change: -3.8,
        },
    ],
});

static COMPLIANCE_SCORES: Lazy<Vec<MonthlyScore>> = Lazy::new(|| {
    vec![
        MonthlyScore { month: "Jul".into(), score: 78, target: 85 },
        MonthlyScore { month: "Aug".into(), score: 81, target: 85 },
        MonthlyScore { month: "Sep".into(), score: 79, target: 85 },
        MonthlyScore { month: "Oct".into(), score: 83, target: 85 },
        MonthlyScore { month: "Nov".into(), score: 82, target: 85 },
        MonthlyScore { month: "Dec".into(), score: 84, target: 85 },
    ]
});

static RISK_DISTRIBUTION: Lazy<Vec<RiskSlice>> = Lazy::new(|| {
    vec![
        RiskSlice { name: "Low Risk".into(), value: 45, color: "#22c55e".into() },
        RiskSlice { name: "Medium Risk".into(), value: 30, color: "#f59e0b".into() },
        RiskSlice { name: "High Risk".into(), value: 20, color: "#f97316".into() },
        RiskSlice { name: "Critical Risk".into(), value: 5, color: "#ef4444".into() },
    ]
});

static SUPPLIER_PERFORMANCE: Lazy<Vec<CategoryPerformance>> = Lazy::new(|| {
    vec![
        CategoryPerformance { category: "Technology".into(), compliance: 92, delivery: 95, quality: 90 },
        CategoryPerformance { category: "Manufacturing".into(), compliance: 68, delivery: 82, quality: 75 },
        CategoryPerformance { category: "Services".into(), compliance: 85, delivery: 88, quality: 86 },
        CategoryPerformance { category: "Logistics".into(), compliance: 79, delivery: 91, quality: 80 },
    ]
});

static RISK_TRENDS: Lazy<Vec<RiskTrendMonth>> = Lazy::new(|| {
    vec![
        RiskTrendMonth { month: "Jul".into(), high: 8, medium: 15, low: 42 },
        RiskTrendMonth { month: "Aug".into(), high: 7, medium: 17, low: 43 },
        RiskTrendMonth { month: "Sep".into(), high: 9, medium: 16, low: 41 },
        RiskTrendMonth { month: "Oct".into(), high: 6, medium: 14, low: 46 },
        RiskTrendMonth { month: "Nov".into(), high: 5, medium: 13, low: 48 },
        RiskTrendMonth { month: "Dec".into(), high: 5, medium: 12, low: 49 },
    ]
});

static COMPLIANCE_METRICS: Lazy<Vec<ComplianceMetric>> = Lazy::new(|| {
    vec![
        ComplianceMetric { category: "Document Compliance".into(), current: 87, target: 95, trend: 2.1 },
        ComplianceMetric { category: "Regulatory Compliance".into(), current: 93, target: 98, trend: 0.8 },
        ComplianceMetric { category: "Financial Compliance".into(), current: 81, target: 90, trend: -1.2 },
        ComplianceMetric { category: "Quality Compliance".into(), current: 89, target: 92, trend: 3.4 },
    ]
});

static AUDIT_TIMELINE: Lazy<Vec<AuditMonth>> = Lazy::new(|| {
    vec![
        AuditMonth { month: "Jul".into(), scheduled: 10, completed: 9, passed: 7, failed: 2 },
        AuditMonth { month: "Aug".into(), scheduled: 12, completed: 12, passed: 10, failed: 2 },
        AuditMonth { month: "Sep".into(), scheduled: 8, completed: 7, passed: 6, failed: 1 },
        AuditMonth { month: "Oct".into(), scheduled: 14, completed: 13, passed: 11, failed: 2 },
        AuditMonth { month: "Nov".into(), scheduled: 11, completed: 11, passed: 10, failed: 1 },
        AuditMonth { month: "Dec".into(), scheduled: 12, completed: 9, passed: 8, failed: 1 },
    ]
});

pub fn dashboard() -> DashboardMetrics {
    DASHBOARD.clone()
}

pub fn compliance_scores() -> Vec<MonthlyScore> {
    COMPLIANCE_SCORES.clone()
}

pub fn risk_distribution() -> Vec<RiskSlice> {
    RISK_DISTRIBUTION.clone()
}

pub fn supplier_performance() -> Vec<CategoryPerformance> {
    SUPPLIER_PERFORMANCE.clone()
}

pub fn risk_trends() -> Vec<RiskTrendMonth> {
    RISK_TRENDS.clone()
}

pub fn compliance_metrics() -> Vec<ComplianceMetric> {
    COMPLIANCE_METRICS.clone()
}

pub fn audit_timeline() -> Vec<AuditMonth> {
    AUDIT_TIMELINE.clone()
}
