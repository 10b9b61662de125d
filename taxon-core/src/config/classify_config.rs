//! Classifier configuration.

use serde::{Deserialize, Serialize};

use crate::taxonomy::Domain;

/// Configuration for the classifier.
///
/// The "Undefined when uncertain" policy is a threshold, and the tie-break
/// priority is an ordering — both are data here, not implicit constants.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ClassifyConfig {
    /// Minimum aggregate leaf score required to commit to a leaf tag.
    /// Below this the domain's Undefined leaf is returned. Default: 1.0.
    pub min_leaf_confidence: Option<f64>,
    /// Domain priority for tie-breaking, highest first.
    /// Default: ["ENG", "MATH", "GI", "GK"].
    #[serde(default)]
    pub domain_priority: Vec<String>,
    /// Domain used when a record carries no usable signal at all.
    /// Default: "GK".
    pub default_domain: Option<String>,
}

impl ClassifyConfig {
    /// Returns the effective leaf-confidence threshold, defaulting to 1.0.
    pub fn effective_min_leaf_confidence(&self) -> f64 {
        self.min_leaf_confidence.unwrap_or(1.0)
    }

    /// Returns the effective tie-break priority order, highest first.
    /// Unparseable entries are skipped, duplicates keep their first
    /// position, and missing domains are appended in canonical order, so
    /// the result always covers all four exactly once.
    pub fn effective_domain_priority(&self) -> [Domain; 4] {
        let mut order: Vec<Domain> = Vec::with_capacity(4);
        for domain in self.domain_priority.iter().filter_map(|s| Domain::parse(s)) {
            if !order.contains(&domain) {
                order.push(domain);
            }
        }
        for domain in Domain::ALL {
            if !order.contains(&domain) {
                order.push(domain);
            }
        }
        [order[0], order[1], order[2], order[3]]
    }

    /// Returns the effective no-signal fallback domain, defaulting to GK.
    pub fn effective_default_domain(&self) -> Domain {
        self.default_domain
            .as_deref()
            .and_then(Domain::parse)
            .unwrap_or(Domain::Gk)
    }
}
