//! Perfume records and the in-memory catalog
//!
//! A catalog is reference data loaded once from a prepared table and
//! queried read-only for the lifetime of a scoring context.

use crate::category::Category;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// A category paired with its similarity score from tagging
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CategoryScore {
    pub category: Category,
    pub score: f32,
}

impl CategoryScore {
    #[must_use]
    pub fn new(category: Category, score: f32) -> Self {
        Self { category, score }
    }
}

/// A single perfume row
///
/// Identity is the (brand, name) pair. `top_categories` holds up to 3
/// entries produced by the tagging job, highest similarity first.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PerfumeRecord {
    pub brand: String,
    pub name: String,
    pub notes: Vec<String>,
    #[serde(default)]
    pub top_categories: Vec<CategoryScore>,
}

impl PerfumeRecord {
    #[must_use]
    pub fn new(brand: impl Into<String>, name: impl Into<String>, notes: Vec<String>) -> Self {
        Self {
            brand: brand.into(),
            name: name.into(),
            notes,
            top_categories: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_top_categories(mut self, top_categories: Vec<CategoryScore>) -> Self {
        self.top_categories = top_categories;
        self
    }

    /// Notes joined back into their comma-separated storage form
    #[must_use]
    pub fn notes_string(&self) -> String {
        self.notes.join(", ")
    }
}

/// Split a comma-separated notes string into trimmed note entries
///
/// Empty segments are dropped.
#[must_use]
pub fn split_notes(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Normalized form of a note: lower-cased and trimmed
#[must_use]
pub fn normalize_note(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Read-only perfume table with exact (brand, name) lookup
#[derive(Debug, Clone, Default)]
pub struct PerfumeCatalog {
    records: Vec<PerfumeRecord>,
    index: AHashMap<(String, String), usize>,
}

impl PerfumeCatalog {
    /// Build a catalog from records
    ///
    /// When the source data contains duplicate (brand, name) pairs the
    /// first row wins; later duplicates stay in the table but are never
    /// returned by [`find`](Self::find). This is a known data-quality
    /// risk in upstream exports.
    #[must_use]
    pub fn from_records(records: Vec<PerfumeRecord>) -> Self {
        let mut index = AHashMap::with_capacity(records.len());
        for (i, record) in records.iter().enumerate() {
            index
                .entry((record.brand.clone(), record.name.clone()))
                .or_insert(i);
        }
        Self { records, index }
    }

    /// Exact-match lookup on both brand and name
    #[must_use]
    pub fn find(&self, brand: &str, name: &str) -> Option<&PerfumeRecord> {
        self.index
            .get(&(brand.to_string(), name.to_string()))
            .map(|&i| &self.records[i])
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn records(&self) -> &[PerfumeRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &PerfumeRecord> {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> PerfumeCatalog {
        PerfumeCatalog::from_records(vec![
            PerfumeRecord::new(
                "Carolina Herrera",
                "Good Girl",
                vec!["tuberose".into(), "jasmine".into(), "cacao".into()],
            ),
            PerfumeRecord::new("Avon", "Incandessence", vec!["rose".into(), "amber".into()]),
        ])
    }

    #[test]
    fn test_find_exact_match() {
        let catalog = sample_catalog();
        let record = catalog.find("Avon", "Incandessence").unwrap();
        assert_eq!(record.notes.len(), 2);
    }

    #[test]
    fn test_find_is_case_sensitive() {
        let catalog = sample_catalog();
        assert!(catalog.find("avon", "Incandessence").is_none());
    }

    #[test]
    fn test_find_absent() {
        let catalog = sample_catalog();
        assert!(catalog.find("Dior", "Sauvage").is_none());
    }

    #[test]
    fn test_duplicate_identity_first_row_wins() {
        let catalog = PerfumeCatalog::from_records(vec![
            PerfumeRecord::new("Brand", "Same", vec!["rose".into()]),
            PerfumeRecord::new("Brand", "Same", vec!["oud".into()]),
        ]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.find("Brand", "Same").unwrap().notes, vec!["rose"]);
    }

    #[test]
    fn test_split_notes() {
        assert_eq!(
            split_notes("rose, vanilla ,  oud"),
            vec!["rose", "vanilla", "oud"]
        );
        assert_eq!(split_notes("rose,,vanilla"), vec!["rose", "vanilla"]);
        assert!(split_notes("  ").is_empty());
    }

    #[test]
    fn test_normalize_note() {
        assert_eq!(normalize_note("Rose "), "rose");
        assert_eq!(normalize_note("rose"), "rose");
    }

    #[test]
    fn test_notes_string_roundtrip() {
        let record = PerfumeRecord::new("B", "N", vec!["rose".into(), "vanilla".into()]);
        assert_eq!(split_notes(&record.notes_string()), record.notes);
    }
}
