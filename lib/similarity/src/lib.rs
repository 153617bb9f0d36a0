//! # accord Similarity
//!
//! Compatibility scoring for perfume pairs.
//!
//! Two signals go into every score:
//!
//! - **Note similarity**: each perfume's scent notes are embedded and
//!   mean-pooled; the cosine similarity of the pooled vectors measures
//!   how close the two scent profiles are semantically.
//! - **Category compatibility**: the perfumes' top-category tags are
//!   compared either as sparse score vectors (cosine) or through the
//!   hand-authored category compatibility matrix.
//!
//! A configurable [`BlendConfig`] combines the two into a percentage.
//!
//! ## Example
//!
//! ```rust
//! use accord_core::{Category, CategoryScore, PerfumeCatalog, PerfumeRecord};
//! use accord_embed::HashEmbedder;
//! use accord_similarity::CompatibilityScorer;
//!
//! let catalog = PerfumeCatalog::from_records(vec![
//!     PerfumeRecord::new("Avon", "Incandessence", vec!["rose".into(), "amber".into()])
//!         .with_top_categories(vec![CategoryScore::new(Category::Floral, 0.8)]),
//!     PerfumeRecord::new("Avon", "Rare Gold", vec!["rose".into(), "peach".into()])
//!         .with_top_categories(vec![CategoryScore::new(Category::Floral, 0.7)]),
//! ]);
//!
//! let scorer = CompatibilityScorer::new(HashEmbedder::default(), catalog);
//! let message = scorer.query("Avon", "Incandessence", "Avon", "Rare Gold");
//! assert!(message.ends_with("% compatible."));
//! ```

pub mod blend;
pub mod category;
pub mod explain;
pub mod notes;
pub mod scorer;

// Re-export main types for convenience
pub use blend::BlendConfig;
pub use category::{
    category_compatibility, matrix_weighted_compatibility, vector_cosine_compatibility,
    CategoryStrategy,
};
pub use explain::CompatibilityBreakdown;
pub use notes::{mean_note_embedding, note_similarity};
pub use scorer::{CompatibilityScorer, NOT_FOUND_MESSAGE};
