//! Category compatibility matrix
//!
//! Hand-assigned scores expressing how well two scent categories pair
//! perceptually. Rows and columns follow [`Category::ALL`] order. The
//! table is symmetric; where the original hand-authored data disagreed
//! across the diagonal, the higher of the two values was kept.

use crate::category::{Category, CATEGORY_COUNT};

/// Pairwise compatibility scores, indexed by [`Category::index`]
#[rustfmt::skip]
pub const COMPATIBILITY_MATRIX: [[f32; CATEGORY_COUNT]; CATEGORY_COUNT] = [
    // Floral Fruity Woody Spicy Citrus Herbal Sweet Earthy Aquatic Gourmand
    [0.90, 0.70, 0.80, 0.60, 0.80, 0.80, 0.65, 0.65, 0.90, 0.25], // Floral
    [0.70, 0.70, 0.10, 0.40, 0.30, 0.50, 0.65, 0.30, 0.80, 0.75], // Fruity
    [0.80, 0.10, 0.90, 0.85, 0.80, 0.80, 0.60, 0.90, 0.75, 0.40], // Woody
    [0.60, 0.40, 0.85, 0.90, 0.65, 0.60, 0.65, 0.75, 0.30, 0.45], // Spicy
    [0.80, 0.30, 0.80, 0.65, 0.90, 0.80, 0.65, 0.40, 0.80, 0.45], // Citrus
    [0.80, 0.50, 0.80, 0.60, 0.80, 0.90, 0.50, 0.70, 0.75, 0.10], // Herbal
    [0.65, 0.65, 0.60, 0.65, 0.65, 0.50, 0.90, 0.45, 0.10, 0.85], // Sweet
    [0.65, 0.30, 0.90, 0.75, 0.40, 0.70, 0.45, 0.90, 0.50, 0.60], // Earthy
    [0.90, 0.80, 0.75, 0.30, 0.80, 0.75, 0.10, 0.50, 0.90, 0.10], // Aquatic
    [0.25, 0.75, 0.40, 0.45, 0.45, 0.10, 0.85, 0.60, 0.10, 0.90], // Gourmand
];

/// Compatibility score for a category pair, in [0, 1]
#[inline]
#[must_use]
pub fn compatibility(a: Category, b: Category) -> f32 {
    COMPATIBILITY_MATRIX[a.index()][b.index()]
}
