//! Content formatter configuration.
//!
//! The explanation and content-summary workflows share one skeleton with
//! different Section-1 bounds, so the bounds live here per workflow instead
//! of being duplicated in the formatter.

use serde::{Deserialize, Serialize};

/// Inclusive bullet-count bounds for one section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulletBounds {
    pub min: usize,
    pub max: usize,
}

/// Configuration for the content formatter.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ContentConfig {
    /// Section-1 bounds for the explanation workflow. Default: 3..=5.
    pub explain_bullets: Option<BulletBounds>,
    /// Section-1 bounds for the content-summary workflow. Default: 3..=4.
    pub summary_bullets: Option<BulletBounds>,
    /// Section-2 bounds (both workflows). Default: 2..=3.
    pub rebuttal_bullets: Option<BulletBounds>,
    /// Word-set similarity above which a Section-2 bullet is treated as
    /// re-describing the correct answer and dropped. Default: 0.8.
    pub similarity_threshold: Option<f64>,
}

impl ContentConfig {
    /// Returns the effective explanation Section-1 bounds, defaulting to 3..=5.
    pub fn effective_explain_bullets(&self) -> BulletBounds {
        self.explain_bullets.unwrap_or(BulletBounds { min: 3, max: 5 })
    }

    /// Returns the effective summary Section-1 bounds, defaulting to 3..=4.
    pub fn effective_summary_bullets(&self) -> BulletBounds {
        self.summary_bullets.unwrap_or(BulletBounds { min: 3, max: 4 })
    }

    /// Returns the effective Section-2 bounds, defaulting to 2..=3.
    pub fn effective_rebuttal_bullets(&self) -> BulletBounds {
        self.rebuttal_bullets.unwrap_or(BulletBounds { min: 2, max: 3 })
    }

    /// Returns the effective similarity threshold, defaulting to 0.8.
    pub fn effective_similarity_threshold(&self) -> f64 {
        self.similarity_threshold.unwrap_or(0.8)
    }
}
