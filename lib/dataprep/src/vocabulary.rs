//! Note vocabulary extraction
//!
//! Flattens every perfume's note list into a deduplicated, sorted list
//! of normalized note strings, and reads/writes the one-note-per-line
//! vocabulary file.

use crate::error::Result;
use accord_core::{normalize_note, PerfumeRecord};
use ahash::AHashSet;
use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use tracing::info;

/// Extract the unique, sorted note vocabulary from perfume records
///
/// Notes are normalized (lower-cased, trimmed) before deduplication, so
/// "Rose " and "rose" collapse to one entry. Notes that still contain
/// commas are split again; some source rows pack several notes into one
/// field.
#[must_use]
pub fn extract_note_vocabulary(records: &[PerfumeRecord]) -> Vec<String> {
    let mut seen = AHashSet::new();
    for record in records {
        for raw in &record.notes {
            for part in raw.split(',') {
                let note = normalize_note(part);
                if !note.is_empty() {
                    seen.insert(note);
                }
            }
        }
    }

    let mut vocabulary: Vec<String> = seen.into_iter().collect();
    vocabulary.sort();
    info!(notes = vocabulary.len(), "note vocabulary extracted");
    vocabulary
}

/// Write a note list, one note per line
pub fn write_note_list(path: impl AsRef<Path>, notes: &[String]) -> Result<()> {
    let mut file = fs::File::create(path.as_ref())?;
    for note in notes {
        writeln!(file, "{note}")?;
    }
    Ok(())
}

/// Read a note list, one note per line, skipping blank lines
pub fn read_note_list(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let reader = BufReader::new(fs::File::open(path.as_ref())?);
    let mut notes = Vec::new();
    for line in reader.lines() {
        let note = normalize_note(&line?);
        if !note.is_empty() {
            notes.push(note);
        }
    }
    Ok(notes)
}
