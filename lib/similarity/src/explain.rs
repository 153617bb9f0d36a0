//! Explainability for compatibility scores
//!
//! Per-component breakdown showing how a final percentage was produced.

use crate::category::CategoryStrategy;
use serde::Serialize;

/// How a compatibility score decomposes into its two components
#[derive(Debug, Clone, Serialize)]
pub struct CompatibilityBreakdown {
    /// Raw cosine similarity of the mean note embeddings
    pub note_similarity: f32,
    /// Raw category compatibility under the configured strategy
    pub category_compatibility: f32,
    /// Weight applied to note similarity
    pub note_weight: f32,
    /// Weight applied to category compatibility
    pub category_weight: f32,
    /// Strategy that produced `category_compatibility`
    pub strategy: CategoryStrategy,
    /// Final blended percentage, rounded to 2 decimals
    pub overall: f32,
}

impl CompatibilityBreakdown {
    /// Weighted contribution of the note component to the percentage
    #[must_use]
    pub fn note_contribution(&self) -> f32 {
        self.note_similarity * self.note_weight * 100.0
    }

    /// Weighted contribution of the category component to the percentage
    #[must_use]
    pub fn category_contribution(&self) -> f32 {
        self.category_compatibility * self.category_weight * 100.0
    }
}
