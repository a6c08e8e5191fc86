use crate::domain::supplier::{
    KpiStatus, RiskLevel, Supplier, SupplierCategory, SupplierKpi, SupplierStatus,
};
use once_cell::sync::Lazy;

static SUPPLIERS: Lazy<Vec<Supplier>> = Lazy::new(|| {
    vec![
        Supplier {
            id: "SUP001".into(),
            name: "TechCorp Solutions".into(),
            gstin: "27AABCT1332L1ZZ".into(),
            email: "contact@techcorp.in".into(),
            phone: "+91-9876543210".into(),
            address: "Pune, Maharashtra".into(),
            category: SupplierCategory::Critical,
            status: SupplierStatus::Active,
            registration_date: "2023-03-12".into(),
            last_audit_date: "2024-11-20".into(),
            compliance_score: 92,
            risk_level: RiskLevel::Low,
        },
        Supplier {
            id: "SUP002".into(),
            name: "Global Manufacturing".into(),
            gstin: "29AAGCG4532M1Z6".into(),
            email: "procurement@globalmfg.in".into(),
            phone: "+91-9812345678".into(),
            address: "Bengaluru, Karnataka".into(),
            category: SupplierCategory::Critical,
            status: SupplierStatus::Active,
            registration_date: "2022-08-01".into(),
            last_audit_date: "2024-10-05".into(),
            compliance_score: 68,
            risk_level: RiskLevel::High,
        },
        Supplier {
            id: "SUP003".into(),
            name: "InnovateTech".into(),
            gstin: "07AAHCI2190N1ZD".into(),
            email: "hello@innovatetech.in".into(),
            phone: "+91-9898989898".into(),
            address: "New Delhi".into(),
            category: SupplierCategory::Important,
            status: SupplierStatus::Suspended,
            registration_date: "2023-11-22".into(),
            last_audit_date: "2024-09-14".into(),
            compliance_score: 45,
            risk_level: RiskLevel::Critical,
        },
        Supplier {
            id: "SUP004".into(),
            name: "Reliable Services".into(),
            gstin: "33AARCR8765P1Z2".into(),
            email: "support@reliableservices.in".into(),
            phone: "+91-9765432109".into(),
            address: "Chennai, Tamil Nadu".into(),
            category: SupplierCategory::Standard,
            status: SupplierStatus::Inactive,
            registration_date: "2024-01-30".into(),
            last_audit_date: "2024-07-18".into(),
            compliance_score: 74,
            risk_level: RiskLevel::Medium,
        },
        Supplier {
            id: "SUP005".into(),
            name: "QualityFirst Industries".into(),
            gstin: "24AAQCQ5521K1ZF".into(),
            email: "sales@qualityfirst.in".into(),
            phone: "+91-9723456781".into(),
            address: "Ahmedabad, Gujarat".into(),
            category: SupplierCategory::Important,
            status: SupplierStatus::Active,
            registration_date: "2021-05-17".into(),
            last_audit_date: "2024-12-02".into(),
            compliance_score: 88,
            risk_level: RiskLevel::Low,
        },
    ]
});

static KPIS: Lazy<Vec<SupplierKpi>> = Lazy::new(|| {
    vec![
        SupplierKpi {
            id: "KPI001".into(),
            supplier_id: "SUP001".into(),
            metric: "On-Time Delivery".into(),
            value: 96.0,
            target: 95.0,
            unit: "%".into(),
            period: "Q4 2024".into(),
            status: KpiStatus::OnTrack,
        },
        SupplierKpi {
            id: "KPI002".into(),
            supplier_id: "SUP002".into(),
            metric: "Quality Score".into(),
            value: 71.0,
            target: 85.0,
            unit: "%".into(),
            period: "Q4 2024".into(),
            status: KpiStatus::AtRisk,
        },
        SupplierKpi {
            id: "KPI003".into(),
            supplier_id: "SUP003".into(),
            metric: "Defect Rate".into(),
            value: 6.2,
            target: 2.0,
            unit: "%".into(),
            period: "Q4 2024".into(),
            status: KpiStatus::Critical,
        },
        SupplierKpi {
            id: "KPI004".into(),
            supplier_id: "SUP005".into(),
            metric: "Cost Efficiency".into(),
            value: 89.0,
            target: 85.0,
            unit: "%".into(),
            period: "Q4 2024".into(),
            status: KpiStatus::OnTrack,
        },
    ]
});

pub fn all() -> Vec<Supplier> {
    SUPPLIERS.clone()
}

pub fn kpis() -> Vec<SupplierKpi> {
    KPIS.clone()
}
