//! # accord
//!
//! Perfume compatibility scoring from scent-note embeddings and a
//! hand-authored category compatibility matrix.
//!
//! Every score blends two signals: cosine similarity between the mean
//! embeddings of the two perfumes' note lists, and a compatibility
//! score over their top scent-category tags.
//!
//! ## Quick Start
//!
//! ### As a CLI
//!
//! ```bash
//! cargo install accord
//! accord clean --input data.csv --output cleaned.csv
//! accord tag-perfumes --input cleaned.csv --output tagged.csv
//! accord score --data tagged.csv "Carolina Herrera" "Good Girl" "Avon" "Incandessence"
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use accord::prelude::*;
//!
//! let catalog = PerfumeCatalog::from_records(vec![
//!     PerfumeRecord::new("Avon", "Incandessence", vec!["rose".into(), "amber".into()])
//!         .with_top_categories(vec![CategoryScore::new(Category::Floral, 0.8)]),
//!     PerfumeRecord::new("Avon", "Rare Gold", vec!["rose".into(), "peach".into()])
//!         .with_top_categories(vec![CategoryScore::new(Category::Fruity, 0.7)]),
//! ]);
//!
//! let scorer = CompatibilityScorer::new(HashEmbedder::default(), catalog);
//! println!("{}", scorer.query("Avon", "Incandessence", "Avon", "Rare Gold"));
//! ```
//!
//! ## Crate Structure
//!
//! accord is composed of several crates:
//!
//! - [`accord-core`](https://docs.rs/accord-core) - Vectors, categories, matrix, perfume catalog
//! - [`accord-embed`](https://docs.rs/accord-embed) - Embedding backends and category vectors
//! - [`accord-similarity`](https://docs.rs/accord-similarity) - Scoring strategies and the scorer
//! - [`accord-dataprep`](https://docs.rs/accord-dataprep) - Offline cleaning/categorization jobs

// Re-export core types
pub use accord_core::{
    compatibility, normalize_note, split_notes, Category, CategoryScore, Error, PerfumeCatalog,
    PerfumeRecord, Result, Vector, CATEGORY_COUNT, COMPATIBILITY_MATRIX,
};

// Re-export embedding backends
pub use accord_embed::{
    mean_embedding, CategoryVectors, Embedder, HashEmbedder, DEFAULT_EMBEDDING_DIM,
};

// Re-export scoring
pub use accord_similarity::{
    category_compatibility, note_similarity, BlendConfig, CategoryStrategy,
    CompatibilityBreakdown, CompatibilityScorer, NOT_FOUND_MESSAGE,
};

// Data preparation jobs keep their own namespace
pub use accord_dataprep as dataprep;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        BlendConfig, Category, CategoryScore, CategoryStrategy, CategoryVectors,
        CompatibilityScorer, Embedder, Error, HashEmbedder, PerfumeCatalog, PerfumeRecord, Result,
        Vector,
    };
}
