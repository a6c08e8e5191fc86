use crate::domain::document::{Document, DocumentStatus};
use once_cell::sync::Lazy;

static DOCUMENTS: Lazy<Vec<Document>> = Lazy::new(|| {
    vec![
        Document {
            id: "DOC001".into(),
            name: "GST Certificate - TechCorp Solutions".into(),
            doc_type: "GST Certificate".into(),
            supplier_id: "SUP001".into(),
            supplier_name: "TechCorp Solutions".into(),
            status: DocumentStatus::Verified,
            upload_date: "2024-12-10".into(),
            expiry_date: Some("2025-12-10".into()),
            size: "2.4 MB".into(),
            uploaded_by: "John Doe".into(),
            version: 2,
            tags: vec!["tax".into(), "compliance".into(), "government".into()],
        },
        Document {
            id: "DOC002".into(),
            name: "PAN Card - Global Manufacturing".into(),
            doc_type: "PAN Card".into(),
            supplier_id: "SUP002".into(),
            supplier_name: "Global Manufacturing".into(),
            status: DocumentStatus::Pending,
            upload_date: "2024-12-12".into(),
            expiry_date: None,
            size: "1.8 MB".into(),
            uploaded_by: "Sarah Wilson".into(),
            version: 1,
            tags: vec!["identity".into(), "tax".into()],
        },
        Document {
            id: "DOC003".into(),
            name: "Quality Certificate - InnovateTech".into(),
            doc_type: "Quality Certificate".into(),
            supplier_id: "SUP003".into(),
            supplier_name: "InnovateTech".into(),
            status: DocumentStatus::Expired,
            upload_date: "2024-06-15".into(),
            expiry_date: Some("2024-12-15".into()),
            size: "3.2 MB".into(),
            uploaded_by: "Mike Johnson".into(),
            version: 1,
            tags: vec!["quality".into(), "iso".into(), "certification".into()],
        },
        Document {
            id: "DOC004".into(),
            name: "Bank Details - Reliable Services".into(),
            doc_type: "Bank Details".into(),
            supplier_id: "SUP004".into(),
            supplier_name: "Reliable Services".into(),
            status: DocumentStatus::Rejected,
            upload_date: "2024-12-08".into(),
            expiry_date: None,
            size: "1.2 MB".into(),
            uploaded_by: "Emma Davis".into(),
            version: 1,
            tags: vec!["banking".into(), "financial".into()],
        },
        Document {
            id: "DOC005".into(),
            name: "ISO 9001 Certificate - QualityFirst Industries".into(),
            doc_type: "Quality Certificate".into(),
            supplier_id: "SUP005".into(),
            supplier_name: "QualityFirst Industries".into(),
            status: DocumentStatus::Verified,
            upload_date: "2024-10-01".into(),
            expiry_date: Some("2026-10-01".into()),
            size: "2.1 MB".into(),
            uploaded_by: "Sarah Wilson".into(),
            version: 3,
            tags: vec!["quality".into(), "iso".into()],
        },
    ]
});

pub fn all() -> Vec<Document> {
    DOCUMENTS.clone()
}

/// Distinct document types in first-seen order, for the type dropdown.
pub fn types() -> Vec<String> {
    let mut seen = Vec::new();
    for document in DOCUMENTS.iter() {
        if !seen.contains(&document.doc_type) {
            seen.push(document.doc_type.clone());
        }
    }
    seen
}
