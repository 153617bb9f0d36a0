//! Category representative vectors
//!
//! One mean embedding per scent category. Built either from the curated
//! exemplar lists or from a full categorized vocabulary, and computed
//! once per context so scoring never re-embeds the category anchors.

use crate::embedder::{mean_embedding, Embedder};
use accord_core::{Category, CategoryScore, Vector, CATEGORY_COUNT};
use ahash::RandomState;
use std::hash::{BuildHasher, Hash, Hasher};

// Fixed seeds so the fingerprint is stable across processes.
const FINGERPRINT_SEEDS: (u64, u64, u64, u64) = (0x5eed, 0xacc0, 0x4d00, 0x0f1e);

/// Mean embedding per category, in [`Category::ALL`] order
#[derive(Debug, Clone)]
pub struct CategoryVectors {
    vectors: Vec<Vector>,
    fingerprint: u64,
}

impl CategoryVectors {
    /// Build representative vectors from the static exemplar note lists
    #[must_use]
    pub fn from_exemplars<E: Embedder + ?Sized>(embedder: &E) -> Self {
        let mut vectors = Vec::with_capacity(CATEGORY_COUNT);
        let mut hasher = fingerprint_hasher();

        for category in Category::ALL {
            let exemplars = category.exemplar_notes();
            category.name().hash(&mut hasher);
            exemplars.hash(&mut hasher);

            // Exemplar lists are static and non-empty, checked in
            // accord-core tests.
            let mean = mean_embedding(embedder, exemplars)
                .unwrap_or_else(|| Vector::zeros(embedder.dim()));
            vectors.push(mean);
        }

        Self {
            vectors,
            fingerprint: hasher.finish(),
        }
    }

    /// Build representative vectors from a categorized note vocabulary
    ///
    /// Each category is represented by the mean embedding of every
    /// vocabulary note assigned to it. A category with no assigned notes
    /// falls back to its exemplar mean so all 10 vectors always exist.
    #[must_use]
    pub fn from_assignments<E: Embedder + ?Sized>(
        embedder: &E,
        assignments: &[(String, Category)],
    ) -> Self {
        let mut per_category: Vec<Vec<&str>> = vec![Vec::new(); CATEGORY_COUNT];
        for (note, category) in assignments {
            per_category[category.index()].push(note.as_str());
        }

        let mut vectors = Vec::with_capacity(CATEGORY_COUNT);
        let mut hasher = fingerprint_hasher();

        for category in Category::ALL {
            let notes = &per_category[category.index()];
            category.name().hash(&mut hasher);
            notes.hash(&mut hasher);

            let mean = if notes.is_empty() {
                mean_embedding(embedder, category.exemplar_notes())
                    .unwrap_or_else(|| Vector::zeros(embedder.dim()))
            } else {
                mean_embedding(embedder, notes).unwrap_or_else(|| Vector::zeros(embedder.dim()))
            };
            vectors.push(mean);
        }

        Self {
            vectors,
            fingerprint: hasher.finish(),
        }
    }

    /// Representative vector for a category
    #[must_use]
    pub fn vector(&self, category: Category) -> &Vector {
        &self.vectors[category.index()]
    }

    /// Content hash of the source text these vectors were built from
    ///
    /// Stable across processes; usable as a cache key for persisting the
    /// vectors externally.
    #[must_use]
    pub fn fingerprint(&self) -> u64 {
        self.fingerprint
    }

    /// Category whose representative vector is most cosine-similar
    ///
    /// Strict argmax; ties resolve to the earlier category in canonical
    /// order, keeping classification deterministic.
    #[must_use]
    pub fn best_match(&self, embedding: &Vector) -> (Category, f32) {
        let mut best = (Category::ALL[0], f32::NEG_INFINITY);
        for category in Category::ALL {
            let similarity = embedding.cosine_similarity(self.vector(category));
            if similarity > best.1 {
                best = (category, similarity);
            }
        }
        best
    }

    /// All categories ranked by cosine similarity, descending
    ///
    /// Stable sort, so equal scores keep canonical order.
    #[must_use]
    pub fn rank(&self, embedding: &Vector) -> Vec<CategoryScore> {
        let mut ranked: Vec<CategoryScore> = Category::ALL
            .iter()
            .map(|&category| {
                CategoryScore::new(category, embedding.cosine_similarity(self.vector(category)))
            })
            .collect();
        ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
        ranked
    }

    /// The `k` most similar categories, descending
    #[must_use]
    pub fn top_k(&self, embedding: &Vector, k: usize) -> Vec<CategoryScore> {
        let mut ranked = self.rank(embedding);
        ranked.truncate(k);
        ranked
    }
}

fn fingerprint_hasher() -> impl Hasher {
    let (a, b, c, d) = FINGERPRINT_SEEDS;
    RandomState::with_seeds(a, b, c, d).build_hasher()
}
