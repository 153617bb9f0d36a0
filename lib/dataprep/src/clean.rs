//! Cleaning job
//!
//! One-shot pass over a raw perfume table: drop rows with no perfume
//! name, normalize every note to its lower-cased trimmed form, and
//! deduplicate on (brand, name, notes).

use accord_core::{normalize_note, PerfumeRecord};
use ahash::AHashSet;
use tracing::info;

/// Counters reported by [`clean_records`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CleanStats {
    pub kept: usize,
    pub dropped_missing_name: usize,
    pub deduplicated: usize,
}

/// Clean a batch of raw perfume records
pub fn clean_records(records: Vec<PerfumeRecord>) -> (Vec<PerfumeRecord>, CleanStats) {
    let mut stats = CleanStats::default();
    let mut seen: AHashSet<(String, String, String)> = AHashSet::new();
    let mut cleaned = Vec::with_capacity(records.len());

    for mut record in records {
        if record.name.trim().is_empty() {
            stats.dropped_missing_name += 1;
            continue;
        }

        record.notes = record
            .notes
            .iter()
            .map(|note| normalize_note(note))
            .filter(|note| !note.is_empty())
            .collect();

        let key = (
            record.brand.clone(),
            record.name.clone(),
            record.notes.join(","),
        );
        if !seen.insert(key) {
            stats.deduplicated += 1;
            continue;
        }

        cleaned.push(record);
    }

    stats.kept = cleaned.len();
    info!(
        kept = stats.kept,
        dropped_missing_name = stats.dropped_missing_name,
        deduplicated = stats.deduplicated,
        "cleaning pass finished"
    );
    (cleaned, stats)
}
