//! Perfume table I/O
//!
//! CSV reader/writer for the perfume table. Canonical columns are
//! `brand`, `perfume`, `notes` (comma-separated string) and
//! `top_categories` (see [`crate::encoding`]); the legacy
//! `Top Categories` header from older exports is accepted on read.

use crate::encoding::{encode_top_categories, parse_top_categories};
use crate::error::{DataError, Result};
use accord_core::{split_notes, PerfumeRecord};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

#[derive(Debug, Serialize, Deserialize)]
struct RawPerfumeRow {
    brand: String,
    perfume: String,
    notes: String,
    #[serde(default, alias = "Top Categories")]
    top_categories: Option<String>,
}

/// Read a perfume table from a CSV file
///
/// Rows that fail to parse are reported with their 1-based data row
/// number instead of aborting with a bare deserialization failure.
pub fn read_perfume_table(path: impl AsRef<Path>) -> Result<Vec<PerfumeRecord>> {
    let mut reader = csv::Reader::from_path(path.as_ref())?;
    let mut records = Vec::new();

    for (i, row) in reader.deserialize::<RawPerfumeRow>().enumerate() {
        let row_number = i + 1;
        let raw = row.map_err(|e| DataError::MalformedRecord {
            row: row_number,
            reason: e.to_string(),
        })?;

        let top_categories = match raw.top_categories.as_deref() {
            Some(encoded) => {
                parse_top_categories(encoded).map_err(|e| DataError::MalformedRecord {
                    row: row_number,
                    reason: e.to_string(),
                })?
            }
            None => Vec::new(),
        };

        records.push(PerfumeRecord {
            brand: raw.brand,
            name: raw.perfume,
            notes: split_notes(&raw.notes),
            top_categories,
        });
    }

    debug!(rows = records.len(), "perfume table loaded");
    Ok(records)
}

/// Write a perfume table to a CSV file in the canonical column layout
pub fn write_perfume_table(path: impl AsRef<Path>, records: &[PerfumeRecord]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path.as_ref())?;

    for record in records {
        let top_categories = if record.top_categories.is_empty() {
            None
        } else {
            Some(encode_top_categories(&record.top_categories)?)
        };
        writer.serialize(RawPerfumeRow {
            brand: record.brand.clone(),
            perfume: record.name.clone(),
            notes: record.notes_string(),
            top_categories,
        })?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use accord_core::{Category, CategoryScore};
    use std::io::Write;

    #[test]
    fn test_roundtrip() {
        let records = vec![
            PerfumeRecord::new(
                "Carolina Herrera",
                "Good Girl",
                vec!["tuberose".into(), "jasmine".into()],
            )
            .with_top_categories(vec![
                CategoryScore::new(Category::Floral, 0.82),
                CategoryScore::new(Category::Sweet, 0.74),
            ]),
            PerfumeRecord::new("Avon", "Incandessence", vec!["rose".into()]),
        ];

        let file = tempfile::NamedTempFile::new().unwrap();
        write_perfume_table(file.path(), &records).unwrap();
        let loaded = read_perfume_table(file.path()).unwrap();
        assert_eq!(loaded, records);
    }

    #[test]
    fn test_reads_legacy_header_and_encoding() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "brand,perfume,notes,Top Categories").unwrap();
        writeln!(
            file,
            "Avon,Incandessence,\"rose, amber\",\"[('Floral', 0.79), ('Sweet', 0.66)]\""
        )
        .unwrap();
        file.flush().unwrap();

        let loaded = read_perfume_table(file.path()).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].notes, vec!["rose", "amber"]);
        assert_eq!(loaded[0].top_categories[0].category, Category::Floral);
    }

    #[test]
    fn test_missing_top_categories_column() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "brand,perfume,notes").unwrap();
        writeln!(file, "Avon,Incandessence,\"rose, amber\"").unwrap();
        file.flush().unwrap();

        let loaded = read_perfume_table(file.path()).unwrap();
        assert!(loaded[0].top_categories.is_empty());
    }

    #[test]
    fn test_malformed_row_reports_row_number() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "brand,perfume,notes,top_categories").unwrap();
        writeln!(file, "Avon,Incandessence,rose,\"[[\"\"Floral\"\",0.8]]\"").unwrap();
        writeln!(file, "Dior,Sauvage,bergamot,\"[('Nonsense', 0.5)]\"").unwrap();
        file.flush().unwrap();

        let err = read_perfume_table(file.path()).unwrap_err();
        match err {
            DataError::MalformedRecord { row, .. } => assert_eq!(row, 2),
            other => panic!("unexpected error: {other}"),
        }
    }
}
