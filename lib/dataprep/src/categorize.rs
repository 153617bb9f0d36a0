//! Note categorization job
//!
//! Assigns every vocabulary note to the scent category whose
//! representative vector is most cosine-similar to the note's own
//! embedding.

use crate::error::{DataError, Result};
use accord_core::{Category, CATEGORY_COUNT};
use accord_embed::{CategoryVectors, Embedder};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

#[derive(Debug, Serialize, Deserialize)]
struct CategorizedNoteRow {
    #[serde(alias = "Note")]
    note: String,
    #[serde(alias = "Category")]
    category: String,
}

/// Assign each note to its closest category
#[must_use]
pub fn assign_categories<E: Embedder + ?Sized>(
    embedder: &E,
    vectors: &CategoryVectors,
    notes: &[String],
) -> Vec<(String, Category)> {
    let assignments: Vec<(String, Category)> = notes
        .iter()
        .map(|note| {
            let (category, score) = vectors.best_match(&embedder.embed(note));
            debug!(note = %note, category = %category, score, "note categorized");
            (note.clone(), category)
        })
        .collect();

    for (category, count) in category_distribution(&assignments) {
        info!(category = %category, count, "category distribution");
    }
    assignments
}

/// Count of assigned notes per category, descending
#[must_use]
pub fn category_distribution(assignments: &[(String, Category)]) -> Vec<(Category, usize)> {
    let mut counts = [0usize; CATEGORY_COUNT];
    for (_, category) in assignments {
        counts[category.index()] += 1;
    }
    let mut distribution: Vec<(Category, usize)> = Category::ALL
        .iter()
        .map(|&category| (category, counts[category.index()]))
        .collect();
    distribution.sort_by(|a, b| b.1.cmp(&a.1));
    distribution
}

/// Write a categorized-notes table (`note`, `category` columns)
pub fn write_categorized_notes(
    path: impl AsRef<Path>,
    assignments: &[(String, Category)],
) -> Result<()> {
    let mut writer = csv::Writer::from_path(path.as_ref())?;
    for (note, category) in assignments {
        writer.serialize(CategorizedNoteRow {
            note: note.clone(),
            category: category.name().to_string(),
        })?;
    }
    writer.flush()?;
    Ok(())
}

/// Read a categorized-notes table
///
/// Accepts the legacy capitalized `Note`/`Category` headers. Unknown
/// category names are malformed records, reported with their row.
pub fn read_categorized_notes(path: impl AsRef<Path>) -> Result<Vec<(String, Category)>> {
    let mut reader = csv::Reader::from_path(path.as_ref())?;
    let mut assignments = Vec::new();

    for (i, row) in reader.deserialize::<CategorizedNoteRow>().enumerate() {
        let row_number = i + 1;
        let raw = row.map_err(|e| DataError::MalformedRecord {
            row: row_number,
            reason: e.to_string(),
        })?;
        let category: Category = raw.category.parse().map_err(|_| DataError::MalformedRecord {
            row: row_number,
            reason: format!("unknown category '{}'", raw.category),
        })?;
        assignments.push((raw.note, category));
    }

    Ok(assignments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use accord_embed::HashEmbedder;

    #[test]
    fn test_exemplar_notes_land_in_their_category() {
        let embedder = HashEmbedder::default();
        let vectors = CategoryVectors::from_exemplars(&embedder);
        let notes = vec!["lemon".to_string(), "cedar".to_string()];
        let assignments = assign_categories(&embedder, &vectors, &notes);
        assert_eq!(assignments[0].1, Category::Citrus);
        assert_eq!(assignments[1].1, Category::Woody);
    }

    #[test]
    fn test_assignment_is_deterministic() {
        let embedder = HashEmbedder::default();
        let vectors = CategoryVectors::from_exemplars(&embedder);
        let notes = vec!["dandelion".to_string(), "smoke".to_string()];
        let a = assign_categories(&embedder, &vectors, &notes);
        let b = assign_categories(&embedder, &vectors, &notes);
        assert_eq!(a, b);
    }

    #[test]
    fn test_distribution_counts() {
        let assignments = vec![
            ("rose".to_string(), Category::Floral),
            ("lily".to_string(), Category::Floral),
            ("lemon".to_string(), Category::Citrus),
        ];
        let distribution = category_distribution(&assignments);
        assert_eq!(distribution[0], (Category::Floral, 2));
        assert_eq!(distribution[1], (Category::Citrus, 1));
    }

    #[test]
    fn test_file_roundtrip() {
        let assignments = vec![
            ("rose".to_string(), Category::Floral),
            ("cedar".to_string(), Category::Woody),
        ];
        let file = tempfile::NamedTempFile::new().unwrap();
        write_categorized_notes(file.path(), &assignments).unwrap();
        assert_eq!(read_categorized_notes(file.path()).unwrap(), assignments);
    }

    #[test]
    fn test_unknown_category_in_file() {
        use std::io::Write;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "note,category").unwrap();
        writeln!(file, "rose,Metallic").unwrap();
        file.flush().unwrap();

        let err = read_categorized_notes(file.path()).unwrap_err();
        assert!(matches!(err, DataError::MalformedRecord { row: 1, .. }));
    }
}
