//! Category-level compatibility
//!
//! Two strategies for comparing the top-category lists of two perfumes.
//! Both take lists of (category, score) pairs from the tagging job and
//! return a scalar in [0, 1].

use accord_core::{compatibility, CategoryScore, Vector, CATEGORY_COUNT};
use serde::{Deserialize, Serialize};

/// Which formula to use for category compatibility
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum CategoryStrategy {
    /// Cosine similarity between 10-dim category score vectors
    #[default]
    VectorCosine,
    /// Pairwise sum over the compatibility matrix, weighted by scores
    MatrixWeighted,
}

/// Category compatibility under the chosen strategy
#[must_use]
pub fn category_compatibility(
    a: &[CategoryScore],
    b: &[CategoryScore],
    strategy: CategoryStrategy,
) -> f32 {
    match strategy {
        CategoryStrategy::VectorCosine => vector_cosine_compatibility(a, b),
        CategoryStrategy::MatrixWeighted => matrix_weighted_compatibility(a, b),
    }
}

/// Cosine similarity of sparse 10-dim category score vectors
///
/// Each perfume's vector has its tagged categories' slots set to their
/// similarity scores and all other slots at zero. Either list empty
/// yields 0.0.
#[must_use]
pub fn vector_cosine_compatibility(a: &[CategoryScore], b: &[CategoryScore]) -> f32 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    category_vector(a).cosine_similarity(&category_vector(b))
}

/// Matrix-weighted pairwise compatibility
///
/// Accumulates `matrix[ca][cb] * score_a * score_b` over every cross
/// pair and normalizes by the number of pairs. Either list empty yields
/// 0.0.
#[must_use]
pub fn matrix_weighted_compatibility(a: &[CategoryScore], b: &[CategoryScore]) -> f32 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let mut total = 0.0f32;
    for entry_a in a {
        for entry_b in b {
            total += compatibility(entry_a.category, entry_b.category)
                * entry_a.score
                * entry_b.score;
        }
    }
    total / (a.len() * b.len()) as f32
}

/// Dense 10-dim vector with tagged categories' scores in their slots
fn category_vector(scores: &[CategoryScore]) -> Vector {
    let mut slots = vec![0.0f32; CATEGORY_COUNT];
    for entry in scores {
        slots[entry.category.index()] = entry.score;
    }
    Vector::new(slots)
}
