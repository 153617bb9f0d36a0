//! # accord Dataprep
//!
//! One-shot offline data preparation for the accord scoring pipeline.
//!
//! Each module is one batch job over tabular files:
//!
//! - [`clean`] - drop incomplete rows, normalize notes, deduplicate
//! - [`vocabulary`] - extract the unique note vocabulary
//! - [`categorize`] - assign each vocabulary note to a scent category
//! - [`tagging`] - tag each perfume with its top 3 categories
//! - [`table`] / [`encoding`] - CSV I/O and the top-categories codec
//!
//! Jobs are synchronous and fail fast: any malformed record aborts the
//! run with a typed error naming the offending row.

pub mod categorize;
pub mod clean;
pub mod encoding;
pub mod error;
pub mod table;
pub mod tagging;
pub mod vocabulary;

pub use categorize::{
    assign_categories, category_distribution, read_categorized_notes, write_categorized_notes,
};
pub use clean::{clean_records, CleanStats};
pub use encoding::{encode_top_categories, parse_top_categories};
pub use error::{DataError, Result};
pub use table::{read_perfume_table, write_perfume_table};
pub use tagging::{tag_perfume, tag_perfumes, TOP_CATEGORY_COUNT};
pub use vocabulary::{extract_note_vocabulary, read_note_list, write_note_list};
