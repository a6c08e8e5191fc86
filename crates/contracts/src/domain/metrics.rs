use serde::{Deserialize, Serialize};

/// Aggregate figures for the dashboard landing view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardMetrics {
    #[serde(rename = "totalSuppliers")]
    pub total_suppliers: u32,
    #[serde(rename = "activeSuppliers")]
    pub active_suppliers: u32,
    #[serde(rename = "criticalAlerts")]
    pub critical_alerts: u32,
    #[serde(rename = "avgComplianceScore")]
    pub avg_compliance_score: f64,
    #[serde(rename = "suppliersAtRisk")]
    pub suppliers_at_risk: u32,
    #[serde(rename = "documentsExpiringSoon")]
    pub documents_expiring_soon: u32,
    #[serde(rename = "recentAudits")]
    pub recent_audits: u32,
    #[serde(rename = "kpiTrends")]
    pub kpi_trends: Vec<KpiTrend>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KpiTrend {
    pub metric: String,
    pub current: f64,
    pub previous: f64,
    pub change: f64,
}

/// One month of compliance score history against target.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyScore {
    pub month: String,
    pub score: u32,
    pub target: u32,
}

/// Share of the supplier base at one risk level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskSlice {
    pub name: String,
    pub value: u32,
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryPerformance {
    pub category: String,
    pub compliance: u32,
    pub delivery: u32,
    pub quality: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskTrendMonth {
    pub month: String,
    pub high: u32,
    pub medium: u32,
    pub low: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplianceMetric {
    pub category: String,
    pub current: u32,
    pub target: u32,
    pub trend: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditMonth {
    pub month: String,
    pub scheduled: u32,
    pub completed: u32,
    pub passed: u32,
    pub failed: u32,
}
