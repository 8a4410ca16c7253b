//! Case-insensitive name resolution over the reference tables.
//!
//! Every table is an ordered slice of records exposing a lookup name; the
//! resolver finds the first record whose name matches the query with both
//! sides lowercased. Matching is exact apart from case: no trimming, no
//! punctuation folding. An empty query or empty table resolves to `None`.

use ctcae_model::{AdverseEvent, AttributionOption, GradeOption};

/// A record that can be resolved by name.
pub trait Named {
    /// The name this record is looked up by.
    fn lookup_name(&self) -> &str;
}

impl Named for AttributionOption {
    fn lookup_name(&self) -> &str {
        &self.name
    }
}

impl Named for GradeOption {
    fn lookup_name(&self) -> &str {
        &self.name
    }
}

impl Named for AdverseEvent {
    fn lookup_name(&self) -> &str {
        &self.name
    }
}

/// Position of the first record whose name matches `query` case-insensitively.
pub fn find_index<R: Named>(records: &[R], query: &str) -> Option<usize> {
    let query = query.to_lowercase();
    records
        .iter()
        .position(|record| record.lookup_name().to_lowercase() == query)
}

/// The first record whose name matches `query` case-insensitively.
pub fn find<'a, R: Named>(records: &'a [R], query: &str) -> Option<&'a R> {
    find_index(records, query).map(|index| &records[index])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> Vec<AttributionOption> {
        ["Treatment", "Disease", "Unknown"]
            .into_iter()
            .map(|name| AttributionOption {
                name: name.to_string(),
                description: String::new(),
            })
            .collect()
    }

    #[test]
    fn finds_first_match_by_position() {
        let table = table();
        assert_eq!(find_index(&table, "Disease"), Some(1));
        assert_eq!(find_index(&table, "disease"), Some(1));
        assert_eq!(find_index(&table, "DISEASE"), Some(1));
    }

    #[test]
    fn unmatched_query_is_none() {
        let table = table();
        assert_eq!(find_index(&table, "Other"), None);
        assert!(find(&table, "Other").is_none());
    }

    #[test]
    fn matching_is_exact_apart_from_case() {
        let table = table();
        assert_eq!(find_index(&table, " Treatment"), None);
        assert_eq!(find_index(&table, "Treatment "), None);
        assert_eq!(find_index(&table, "Treat"), None);
    }

    #[test]
    fn empty_query_and_empty_table_resolve_to_none() {
        let table = table();
        assert_eq!(find_index(&table, ""), None);
        let empty: Vec<AttributionOption> = Vec::new();
        assert_eq!(find_index(&empty, "Treatment"), None);
    }
}
