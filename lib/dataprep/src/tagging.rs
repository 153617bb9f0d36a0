//! Per-perfume top-category tagging job
//!
//! Embeds each perfume's combined note text once and keeps the 3 most
//! similar categories with their raw similarity scores.

use crate::error::Result;
use accord_core::{CategoryScore, Error, PerfumeRecord};
use accord_embed::{CategoryVectors, Embedder};
use tracing::info;

/// How many categories each perfume keeps
pub const TOP_CATEGORY_COUNT: usize = 3;

/// Top categories for one perfume
///
/// All notes are joined into one string and embedded together, so the
/// category comparison sees the whole scent profile at once. An empty
/// note list is a malformed record.
pub fn tag_perfume<E: Embedder + ?Sized>(
    embedder: &E,
    vectors: &CategoryVectors,
    record: &PerfumeRecord,
) -> Result<Vec<CategoryScore>> {
    if record.notes.is_empty() {
        return Err(Error::EmptyNoteList {
            brand: record.brand.clone(),
            name: record.name.clone(),
        }
        .into());
    }

    let combined = record.notes.join(" ");
    let embedding = embedder.embed(&combined);
    Ok(vectors.top_k(&embedding, TOP_CATEGORY_COUNT))
}

/// Tag every record in place
pub fn tag_perfumes<E: Embedder + ?Sized>(
    embedder: &E,
    vectors: &CategoryVectors,
    records: &mut [PerfumeRecord],
) -> Result<()> {
    for record in records.iter_mut() {
        record.top_categories = tag_perfume(embedder, vectors, record)?;
    }
    info!(perfumes = records.len(), "tagging finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DataError;
    use accord_embed::HashEmbedder;

    fn record(notes: &[&str]) -> PerfumeRecord {
        PerfumeRecord::new("B", "N", notes.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_keeps_three_categories_descending() {
        let embedder = HashEmbedder::default();
        let vectors = CategoryVectors::from_exemplars(&embedder);
        let tags = tag_perfume(&embedder, &vectors, &record(&["rose", "vanilla", "cedar"])).unwrap();
        assert_eq!(tags.len(), TOP_CATEGORY_COUNT);
        for pair in tags.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn test_empty_notes_rejected() {
        let embedder = HashEmbedder::default();
        let vectors = CategoryVectors::from_exemplars(&embedder);
        let err = tag_perfume(&embedder, &vectors, &record(&[])).unwrap_err();
        assert!(matches!(
            err,
            DataError::Core(Error::EmptyNoteList { .. })
        ));
    }

    #[test]
    fn test_tag_all_records() {
        let embedder = HashEmbedder::default();
        let vectors = CategoryVectors::from_exemplars(&embedder);
        let mut records = vec![record(&["rose"]), record(&["lemon", "bergamot"])];
        tag_perfumes(&embedder, &vectors, &mut records).unwrap();
        for r in &records {
            assert_eq!(r.top_categories.len(), TOP_CATEGORY_COUNT);
        }
    }
}
