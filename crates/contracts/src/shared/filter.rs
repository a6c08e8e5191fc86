/// Generic record filtering shared by every list view.
///
/// A list is narrowed by one free-text query checked against a fixed set of
/// designated text fields, combined (logical AND) with any number of
/// exact-match dropdown criteria. The dropdown sentinel value `"all"` means
/// "no constraint on that field".
use std::collections::BTreeMap;

/// Dropdown sentinel meaning "no constraint".
pub const ALL: &str = "all";

/// Implemented by record types that can appear in a filterable list.
pub trait Filterable {
    /// The designated free-text fields for this record type.
    fn search_text(&self) -> Vec<&str>;

    /// Value of an exact-match field by name. Unknown names return `None`
    /// and contribute nothing to the match decision.
    fn field(&self, name: &str) -> Option<String>;
}

/// Active criteria for one list view: a free-text query plus exact-match
/// field constraints.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub query: String,
    pub fields: BTreeMap<String, String>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Number of constraints that actually narrow the list.
    pub fn active_count(&self) -> usize {
        let text = usize::from(!self.query.is_empty());
        text + self.fields.values().filter(|v| v.as_str() != ALL).count()
    }

    /// Whether `record` satisfies the text criterion AND every field
    /// criterion. Substring matching is case-insensitive and the query is
    /// deliberately not trimmed: a query of only whitespace is matched as a
    /// literal substring.
    pub fn matches<T: Filterable>(&self, record: &T) -> bool {
        let matches_text = self.query.is_empty() || {
            let needle = self.query.to_lowercase();
            record
                .search_text()
                .iter()
                .any(|text| text.to_lowercase().contains(&needle))
        };

        matches_text
            && self.fields.iter().all(|(name, wanted)| {
                wanted == ALL
                    || record
                        .field(name)
                        .map_or(true, |actual| actual == *wanted)
            })
    }
}

/// Narrow `items` to the subset matching `criteria`, preserving the original
/// relative order. The full matching subset is always produced; an empty
/// input yields an empty output.
pub fn filter_records<T: Filterable + Clone>(items: &[T], criteria: &FilterCriteria) -> Vec<T> {
    items
        .iter()
        .filter(|record| criteria.matches(*record))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Row {
        name: String,
        status: String,
        risk: String,
    }

    impl Row {
        fn new(name: &str, status: &str, risk: &str) -> Self {
            Self {
                name: name.to_string(),
                status: status.to_string(),
                risk: risk.to_string(),
            }
        }
    }

    impl Filterable for Row {
        fn search_text(&self) -> Vec<&str> {
            vec![&self.name]
        }

        fn field(&self, name: &str) -> Option<String> {
            match name {
                "status" => Some(self.status.clone()),
                "risk" => Some(self.risk.clone()),
                _ => None,
            }
        }
    }

    fn sample() -> Vec<Row> {
        vec![
            Row::new("TechCorp Solutions", "Active", "Low"),
            Row::new("Global Manufacturing", "Active", "High"),
            Row::new("InnovateTech", "Suspended", "Critical"),
        ]
    }

    fn names(rows: &[Row]) -> Vec<&str> {
        rows.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn empty_criteria_is_identity() {
        let rows = sample();
        let criteria = FilterCriteria::new()
            .with_field("status", ALL)
            .with_field("risk", ALL);
        assert_eq!(filter_records(&rows, &criteria), rows);
    }

    #[test]
    fn text_query_matches_any_designated_field() {
        let rows = sample();
        let criteria = FilterCriteria::new().with_query("tech");
        assert_eq!(
            names(&filter_records(&rows, &criteria)),
            vec!["TechCorp Solutions", "InnovateTech"]
        );
    }

    #[test]
    fn text_query_is_case_insensitive() {
        let rows = sample();
        let upper = FilterCriteria::new().with_query("TECH");
        let lower = FilterCriteria::new().with_query("tech");
        assert_eq!(
            filter_records(&rows, &upper),
            filter_records(&rows, &lower)
        );
    }

    #[test]
    fn exact_field_criterion_narrows() {
        let rows = sample();
        let by_status = FilterCriteria::new().with_field("status", "Active");
        assert_eq!(
            names(&filter_records(&rows, &by_status)),
            vec!["TechCorp Solutions", "Global Manufacturing"]
        );

        let by_risk = FilterCriteria::new().with_field("risk", "Critical");
        assert_eq!(names(&filter_records(&rows, &by_risk)), vec!["InnovateTech"]);
    }

    #[test]
    fn no_match_yields_empty_not_error() {
        let rows = sample();
        let criteria = FilterCriteria::new().with_query("xyz");
        assert!(filter_records(&rows, &criteria).is_empty());
    }

    #[test]
    fn empty_source_yields_empty() {
        let rows: Vec<Row> = Vec::new();
        let criteria = FilterCriteria::new().with_query("tech");
        assert!(filter_records(&rows, &criteria).is_empty());
    }

    #[test]
    fn result_is_order_preserving_subsequence() {
        let rows = sample();
        let criteria = FilterCriteria::new().with_field("status", "Active");
        let result = filter_records(&rows, &criteria);
        let mut cursor = rows.iter();
        for kept in &result {
            assert!(cursor.any(|original| original == kept));
        }
    }

    #[test]
    fn filtering_is_idempotent() {
        let rows = sample();
        let criteria = FilterCriteria::new()
            .with_query("tech")
            .with_field("status", ALL);
        let once = filter_records(&rows, &criteria);
        let twice = filter_records(&once, &criteria);
        assert_eq!(once, twice);
    }

    #[test]
    fn adding_a_criterion_never_grows_the_result() {
        let rows = sample();
        let loose = FilterCriteria::new().with_query("tech");
        let tight = loose.clone().with_field("status", "Suspended");
        assert!(filter_records(&rows, &tight).len() <= filter_records(&rows, &loose).len());
    }

    #[test]
    fn unknown_field_names_are_ignored() {
        let rows = sample();
        let criteria = FilterCriteria::new().with_field("no_such_field", "anything");
        assert_eq!(filter_records(&rows, &criteria), rows);
    }

    #[test]
    fn whitespace_query_is_a_literal_substring() {
        // The query is not trimmed: a lone space only matches records whose
        // designated fields contain a space.
        let rows = vec![
            Row::new("TechCorp Solutions", "Active", "Low"),
            Row::new("InnovateTech", "Active", "Low"),
        ];
        let criteria = FilterCriteria::new().with_query(" ");
        assert_eq!(
            names(&filter_records(&rows, &criteria)),
            vec!["TechCorp Solutions"]
        );
    }

    #[test]
    fn active_count_ignores_sentinel_and_empty_query() {
        let criteria = FilterCriteria::new()
            .with_query("")
            .with_field("status", ALL)
            .with_field("risk", "High");
        assert_eq!(criteria.active_count(), 1);

        let criteria = criteria.with_query("tech");
        assert_eq!(criteria.active_count(), 2);
    }
}
