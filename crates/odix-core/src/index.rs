//! Index keys: join one URL's field list into a canonical key and
//! deduplicate keys across the whole run.

use std::collections::HashSet;

/// Joins an extracted field list into its index key.
///
/// Joining is deterministic and order-preserving, so two URLs referencing
/// the same fields in the same discovery order collapse to one key while
/// different orders stay distinct. An empty list yields the empty string,
/// itself a valid key ("no recognized OData fields").
pub fn build_key(fields: &[String]) -> String {
    fields.join("_")
}

/// Set of unique index keys accumulated across every URL in every file.
///
/// Grown monotonically during a run and serialized once at the end.
#[derive(Debug, Default)]
pub struct IndexSet {
    keys: HashSet<String>,
}

impl IndexSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Idempotent insert; returns true when the key was not already present.
    pub fn insert(&mut self, key: String) -> bool {
        self.keys.insert(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Unions another set into this one (used to merge per-file sets after a
    /// parallel run).
    pub fn merge(&mut self, other: IndexSet) {
        self.keys.extend(other.keys);
    }

    /// Consumes the set, returning its keys sorted lexicographically so the
    /// output file is reproducible across runs.
    pub fn into_sorted(self) -> Vec<String> {
        let mut keys: Vec<String> = self.keys.into_iter().collect();
        keys.sort();
        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn build_key_joins_with_underscore() {
        assert_eq!(build_key(&list(&["City", "Name"])), "City_Name");
        assert_eq!(build_key(&list(&["Name"])), "Name");
    }

    #[test]
    fn build_key_empty_list_is_empty_string() {
        assert_eq!(build_key(&[]), "");
    }

    #[test]
    fn build_key_encodes_order_not_just_membership() {
        assert_ne!(build_key(&list(&["a", "b"])), build_key(&list(&["b", "a"])));
    }

    #[test]
    fn insert_is_idempotent() {
        let mut set = IndexSet::new();
        assert!(set.insert("City_Name".to_string()));
        assert!(!set.insert("City_Name".to_string()));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn empty_key_is_a_valid_member() {
        let mut set = IndexSet::new();
        assert!(set.insert(String::new()));
        assert!(set.contains(""));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn merge_preserves_membership() {
        let mut a = IndexSet::new();
        a.insert("City".to_string());
        a.insert("Name".to_string());
        let mut b = IndexSet::new();
        b.insert("Name".to_string());
        b.insert("Age".to_string());
        a.merge(b);
        assert_eq!(a.len(), 3);
        assert!(a.contains("Age"));
    }

    #[test]
    fn into_sorted_orders_lexicographically() {
        let mut set = IndexSet::new();
        set.insert("b".to_string());
        set.insert("a_c".to_string());
        set.insert("a".to_string());
        assert_eq!(set.into_sorted(), ["a", "a_c", "b"]);
    }
}
