//! Code sets - immutable collections of clinical or medication codes
//!
//! A `CodeSet` is the unit of terminology the rule engine filters against.
//! Code-list files are parsed by external loaders; this type only consumes
//! ready-made codes, optionally paired with category labels (e.g. a
//! code -> ethnicity-group mapping).

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

/// An immutable set of domain codes, optionally partitioned into named
/// categories (many codes to one category).
///
/// Iteration order is insertion order, so downstream results derived from a
/// given code list are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeSet {
    codes: IndexSet<String>,
    categories: IndexMap<String, String>,
}

impl CodeSet {
    /// Create an empty code set
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a code set from plain codes
    pub fn from_codes<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            codes: codes.into_iter().map(Into::into).collect(),
            categories: IndexMap::new(),
        }
    }

    /// Build a categorised code set from `(code, category)` pairs
    ///
    /// Every code in the pairs becomes a member of the set. If a code
    /// appears twice the last category wins.
    pub fn with_categories<I, S, C>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, C)>,
        S: Into<String>,
        C: Into<String>,
    {
        let mut codes = IndexSet::new();
        let mut categories = IndexMap::new();
        for (code, category) in pairs {
            let code = code.into();
            codes.insert(code.clone());
            categories.insert(code, category.into());
        }
        Self { codes, categories }
    }

    /// Whether `code` is a member of this set
    pub fn contains(&self, code: &str) -> bool {
        self.codes.contains(code)
    }

    /// Category label for `code`, if this set carries categories and the
    /// code has one
    pub fn category_of(&self, code: &str) -> Option<&str> {
        self.categories.get(code).map(String::as_str)
    }

    /// Number of codes in the set
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Iterate over the member codes in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.codes.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for CodeSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_codes(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_membership() {
        let set = CodeSet::from_codes(["195967001", "233683003"]);
        assert!(set.contains("195967001"));
        assert!(!set.contains("999999999"));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_empty_set() {
        let set = CodeSet::new();
        assert!(set.is_empty());
        assert!(!set.contains("195967001"));
    }

    #[test]
    fn test_categories() {
        let set = CodeSet::with_categories([
            ("92381000000106", "White"),
            ("92391000000108", "White"),
            ("92441000000104", "Asian or Asian British"),
        ]);
        assert!(set.contains("92391000000108"));
        assert_eq!(set.category_of("92381000000106"), Some("White"));
        assert_eq!(set.category_of("92441000000104"), Some("Asian or Asian British"));
        assert_eq!(set.category_of("195967001"), None);
    }

    #[test]
    fn test_plain_set_has_no_categories() {
        let set = CodeSet::from_codes(["195967001"]);
        assert_eq!(set.category_of("195967001"), None);
    }

    #[test]
    fn test_duplicate_codes_collapse() {
        let set = CodeSet::from_codes(["195967001", "195967001"]);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let set = CodeSet::from_codes(["c", "a", "b"]);
        let codes: Vec<&str> = set.iter().collect();
        assert_eq!(codes, vec!["c", "a", "b"]);
    }
}
