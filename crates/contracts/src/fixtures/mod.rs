//! Static seed data for every view. Each accessor returns a fresh owned
//! copy so views can mutate their snapshot without affecting anyone else.

pub mod alerts;
pub mod audit;
pub mod compliance;
pub mod documents;
pub mod metrics;
pub mod notifications;
pub mod reports;
pub mod suppliers;
pub mod users;
pub mod workflows;

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    // Every weak reference in the fixture set must resolve to a seeded
    // supplier. The runtime never checks this, so the fixtures have to.
    #[test]
    fn weak_supplier_references_resolve() {
        let supplier_ids: HashSet<String> = super::suppliers::all()
            .into_iter()
            .map(|s| s.id)
            .collect();

        for document in super::documents::all() {
            assert!(
                supplier_ids.contains(&document.supplier_id),
                "document {} references missing supplier {}",
                document.id,
                document.supplier_id
            );
        }
        for alert in super::alerts::all() {
            assert!(
                supplier_ids.contains(&alert.supplier_id),
                "alert {} references missing supplier {}",
                alert.id,
                alert.supplier_id
            );
        }
        for kpi in super::suppliers::kpis() {
            assert!(
                supplier_ids.contains(&kpi.supplier_id),
                "kpi {} references missing supplier {}",
                kpi.id,
                kpi.supplier_id
            );
        }
        for result in super::compliance::results() {
            assert!(
                supplier_ids.contains(&result.supplier_id),
                "compliance result references missing supplier {}",
                result.supplier_id
            );
        }
    }

    #[test]
    fn fixture_ids_are_unique() {
        let suppliers = super::suppliers::all();
        let ids: HashSet<&str> = suppliers.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids.len(), suppliers.len());

        let documents = super::documents::all();
        let ids: HashSet<&str> = documents.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids.len(), documents.len());

        let users = super::users::all();
        let ids: HashSet<&str> = users.iter().map(|u| u.id.as_str()).collect();
        assert_eq!(ids.len(), users.len());
    }

    #[test]
    fn dashboard_metrics_stay_consistent_with_suppliers() {
        let metrics = super::metrics::dashboard();
        let suppliers = super::suppliers::all();
        assert!(metrics.active_suppliers <= metrics.total_suppliers);
        assert!(suppliers.len() as u32 <= metrics.total_suppliers);
    }
}
