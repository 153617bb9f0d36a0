//! # accord Embed
//!
//! Embedding backends for the accord perfume compatibility engine.
//!
//! The rest of the system treats text embedding as a black box behind
//! the [`Embedder`] trait: a batch of strings in, one fixed-length
//! vector per string out. [`HashEmbedder`] is the deterministic default;
//! swap in a pretrained sentence-embedding model by implementing the
//! trait.
//!
//! [`CategoryVectors`] holds the 10 per-category mean embeddings used by
//! note classification and perfume tagging, computed once per context.

pub mod category_vectors;
pub mod embedder;

pub use category_vectors::CategoryVectors;
pub use embedder::{mean_embedding, Embedder, HashEmbedder, DEFAULT_EMBEDDING_DIM};
