//! Blend configuration
//!
//! How the note-level and category-level scores combine into the final
//! compatibility percentage.

use crate::category::CategoryStrategy;
use accord_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Weights and strategy for the final score blend
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BlendConfig {
    /// Weight of note-level semantic similarity
    pub note_weight: f32,
    /// Weight of category compatibility
    pub category_weight: f32,
    /// Category compatibility formula
    #[serde(default)]
    pub strategy: CategoryStrategy,
}

impl Default for BlendConfig {
    fn default() -> Self {
        Self::balanced()
    }
}

impl BlendConfig {
    /// Equal 50/50 blend
    #[must_use]
    pub fn balanced() -> Self {
        Self {
            note_weight: 0.5,
            category_weight: 0.5,
            strategy: CategoryStrategy::default(),
        }
    }

    /// 60/40 blend favoring note similarity
    #[must_use]
    pub fn note_biased() -> Self {
        Self {
            note_weight: 0.6,
            category_weight: 0.4,
            strategy: CategoryStrategy::default(),
        }
    }

    /// Arbitrary weights, normalized later by [`validate_and_normalize`](Self::validate_and_normalize)
    #[must_use]
    pub fn new(note_weight: f32, category_weight: f32) -> Self {
        Self {
            note_weight,
            category_weight,
            strategy: CategoryStrategy::default(),
        }
    }

    #[must_use]
    pub fn with_strategy(mut self, strategy: CategoryStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Validate the weights and normalize them to sum to 1.0
    pub fn validate_and_normalize(&mut self) -> Result<()> {
        if self.note_weight < 0.0 || self.category_weight < 0.0 {
            return Err(Error::InvalidWeights(format!(
                "weights must be non-negative, got {} and {}",
                self.note_weight, self.category_weight
            )));
        }

        let sum = self.note_weight + self.category_weight;
        if sum <= 0.0 {
            return Err(Error::InvalidWeights(
                "total weight cannot be zero".to_string(),
            ));
        }

        if (sum - 1.0).abs() > 0.001 {
            self.note_weight /= sum;
            self.category_weight /= sum;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balanced_is_default() {
        assert_eq!(BlendConfig::default(), BlendConfig::balanced());
    }

    #[test]
    fn test_presets_already_normalized() {
        for mut config in [BlendConfig::balanced(), BlendConfig::note_biased()] {
            let before = config;
            config.validate_and_normalize().unwrap();
            assert_eq!(config, before);
        }
    }

    #[test]
    fn test_normalization() {
        let mut config = BlendConfig::new(3.0, 1.0);
        config.validate_and_normalize().unwrap();
        assert!((config.note_weight - 0.75).abs() < 1e-6);
        assert!((config.category_weight - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_negative_weight_rejected() {
        let mut config = BlendConfig::new(-0.1, 1.1);
        assert!(matches!(
            config.validate_and_normalize(),
            Err(Error::InvalidWeights(_))
        ));
    }

    #[test]
    fn test_zero_total_rejected() {
        let mut config = BlendConfig::new(0.0, 0.0);
        assert!(matches!(
            config.validate_and_normalize(),
            Err(Error::InvalidWeights(_))
        ));
    }
}
