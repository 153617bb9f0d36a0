//! Note-level semantic similarity
//!
//! Each perfume's notes are embedded individually and mean-pooled into
//! one vector per perfume; the score is the cosine similarity of the
//! two pooled vectors.

use accord_embed::Embedder;
use accord_core::Vector;

/// Cosine similarity between the mean note-embeddings of two note lists
///
/// Returns `None` when either list is empty — the mean of zero vectors
/// is undefined, and callers attach perfume identity to the resulting
/// error.
pub fn note_similarity<E: Embedder + ?Sized>(
    embedder: &E,
    notes1: &[String],
    notes2: &[String],
) -> Option<f32> {
    let mean1 = mean_note_embedding(embedder, notes1)?;
    let mean2 = mean_note_embedding(embedder, notes2)?;
    Some(mean1.cosine_similarity(&mean2))
}

/// Mean-pooled embedding of a note list
pub fn mean_note_embedding<E: Embedder + ?Sized>(
    embedder: &E,
    notes: &[String],
) -> Option<Vector> {
    let refs: Vec<&str> = notes.iter().map(String::as_str).collect();
    accord_embed::mean_embedding(embedder, &refs)
}
