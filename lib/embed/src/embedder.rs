//! Embedding backends
//!
//! The scoring pipeline treats the embedding model as a black box:
//! a batch of strings in, one fixed-length vector per string out.
//! [`Embedder`] is that boundary. [`HashEmbedder`] is the shipped
//! deterministic implementation; a pretrained sentence-embedding model
//! can be dropped in behind the same trait.

use accord_core::Vector;
use std::collections::HashSet;

/// Default embedding dimension
pub const DEFAULT_EMBEDDING_DIM: usize = 64;

/// A text embedding backend
pub trait Embedder {
    /// Output dimension of every vector this backend produces
    fn dim(&self) -> usize;

    /// Embed a single text into a fixed-length vector
    fn embed(&self, text: &str) -> Vector;

    /// Embed a batch of texts, one vector per input
    fn embed_batch(&self, texts: &[&str]) -> Vec<Vector> {
        texts.iter().map(|t| self.embed(t)).collect()
    }
}

/// Embed every text and mean-pool the batch into one vector
///
/// Returns `None` for an empty batch.
pub fn mean_embedding<E: Embedder + ?Sized>(embedder: &E, texts: &[&str]) -> Option<Vector> {
    if texts.is_empty() {
        return None;
    }
    let vectors = embedder.embed_batch(texts);
    Vector::mean(&vectors)
}

/// Deterministic hash-based text embedder
///
/// Maps character trigrams and whole words onto a fixed-dim vector and
/// normalizes it. Texts sharing trigrams or words land close together,
/// which is enough structure for note-level similarity without pulling
/// in a model runtime.
#[derive(Debug, Clone)]
pub struct HashEmbedder {
    dim: usize,
}

impl HashEmbedder {
    #[must_use]
    pub fn new(dim: usize) -> Self {
        Self { dim }
    }
}

impl Default for HashEmbedder {
    fn default() -> Self {
        Self::new(DEFAULT_EMBEDDING_DIM)
    }
}

impl Embedder for HashEmbedder {
    fn dim(&self) -> usize {
        self.dim
    }

    fn embed(&self, text: &str) -> Vector {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut components = vec![0.0f32; self.dim];
        let normalized = text.to_lowercase();

        for trigram in generate_trigrams(&normalized) {
            let mut hasher = DefaultHasher::new();
            trigram.hash(&mut hasher);
            let pos = (hasher.finish() as usize) % self.dim;
            components[pos] += 1.0;
        }

        // Words contribute more than individual trigrams
        for word in normalized.split_whitespace() {
            let mut hasher = DefaultHasher::new();
            word.hash(&mut hasher);
            let pos = (hasher.finish() as usize) % self.dim;
            components[pos] += 2.0;
        }

        let mut vector = Vector::new(components);
        vector.normalize();
        vector
    }
}

/// Generate character trigrams from a string, padded at both ends
fn generate_trigrams(s: &str) -> HashSet<String> {
    let padded = format!("  {}  ", s);
    let chars: Vec<char> = padded.chars().collect();

    if chars.len() < 3 {
        return HashSet::new();
    }

    chars
        .windows(3)
        .map(|w| w.iter().collect::<String>())
        .collect()
}
