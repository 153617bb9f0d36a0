//! Compatibility scoring context
//!
//! [`CompatibilityScorer`] owns the embedder, the perfume catalog, and
//! the blend configuration for a batch of queries. Construct once, use
//! for N queries, discard.

use crate::blend::BlendConfig;
use crate::category::category_compatibility;
use crate::explain::CompatibilityBreakdown;
use crate::notes::note_similarity;
use accord_core::{Error, PerfumeCatalog, PerfumeRecord, Result};
use accord_embed::Embedder;

/// Message returned by [`CompatibilityScorer::query`] when lookup fails
pub const NOT_FOUND_MESSAGE: &str = "One or both perfumes not found in the database.";

/// Scoring context over a loaded perfume catalog
#[derive(Debug, Clone)]
pub struct CompatibilityScorer<E: Embedder> {
    embedder: E,
    catalog: PerfumeCatalog,
    config: BlendConfig,
}

impl<E: Embedder> CompatibilityScorer<E> {
    /// Create a scorer with the default balanced blend
    #[must_use]
    pub fn new(embedder: E, catalog: PerfumeCatalog) -> Self {
        Self {
            embedder,
            catalog,
            config: BlendConfig::default(),
        }
    }

    /// Create a scorer with a custom blend configuration
    ///
    /// Weights are validated and normalized up front so every later
    /// score call works with a unit-sum blend.
    pub fn with_config(embedder: E, catalog: PerfumeCatalog, mut config: BlendConfig) -> Result<Self> {
        config.validate_and_normalize()?;
        Ok(Self {
            embedder,
            catalog,
            config,
        })
    }

    #[must_use]
    pub fn catalog(&self) -> &PerfumeCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn config(&self) -> &BlendConfig {
        &self.config
    }

    #[must_use]
    pub fn embedder(&self) -> &E {
        &self.embedder
    }

    /// Overall compatibility of two records as a rounded percentage
    ///
    /// Blends note-level similarity with category compatibility, scales
    /// by 100 and rounds to 2 decimals. No clamp is applied at 100.
    pub fn score(&self, perfume1: &PerfumeRecord, perfume2: &PerfumeRecord) -> Result<f32> {
        Ok(self.score_explained(perfume1, perfume2)?.overall)
    }

    /// Like [`score`](Self::score), with the per-component breakdown
    pub fn score_explained(
        &self,
        perfume1: &PerfumeRecord,
        perfume2: &PerfumeRecord,
    ) -> Result<CompatibilityBreakdown> {
        let note_score = note_similarity(&self.embedder, &perfume1.notes, &perfume2.notes)
            .ok_or_else(|| {
                let empty = if perfume1.notes.is_empty() {
                    perfume1
                } else {
                    perfume2
                };
                Error::EmptyNoteList {
                    brand: empty.brand.clone(),
                    name: empty.name.clone(),
                }
            })?;

        let category_score = category_compatibility(
            &perfume1.top_categories,
            &perfume2.top_categories,
            self.config.strategy,
        );

        let blended = self.config.note_weight * note_score
            + self.config.category_weight * category_score;

        Ok(CompatibilityBreakdown {
            note_similarity: note_score,
            category_compatibility: category_score,
            note_weight: self.config.note_weight,
            category_weight: self.config.category_weight,
            strategy: self.config.strategy,
            overall: round2(blended * 100.0),
        })
    }

    /// Score two perfumes resolved by (brand, name) identity
    pub fn score_by_name(
        &self,
        brand1: &str,
        name1: &str,
        brand2: &str,
        name2: &str,
    ) -> Result<f32> {
        let perfume1 = self.lookup(brand1, name1)?;
        let perfume2 = self.lookup(brand2, name2)?;
        self.score(perfume1, perfume2)
    }

    /// The public query surface: a human-readable sentence
    ///
    /// Lookup misses return the fixed not-found message rather than an
    /// error; a malformed record (empty note list) still surfaces as a
    /// readable message because this interface never fails.
    #[must_use]
    pub fn query(&self, brand1: &str, name1: &str, brand2: &str, name2: &str) -> String {
        match self.score_by_name(brand1, name1, brand2, name2) {
            Ok(score) => format!(
                "{name1} by {brand1} and {name2} by {brand2} are {score:.2}% compatible."
            ),
            Err(Error::PerfumeNotFound { .. }) => NOT_FOUND_MESSAGE.to_string(),
            Err(other) => other.to_string(),
        }
    }

    fn lookup(&self, brand: &str, name: &str) -> Result<&PerfumeRecord> {
        self.catalog
            .find(brand, name)
            .ok_or_else(|| Error::PerfumeNotFound {
                brand: brand.to_string(),
                name: name.to_string(),
            })
    }
}

/// Round to 2 decimal places
#[inline]
fn round2(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}
