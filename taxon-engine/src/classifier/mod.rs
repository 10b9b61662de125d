//! Single-tag classification over weighted signals.
//!
//! Two-stage vote: signals first elect a domain, then a leaf within it.
//! Every outcome is a member of the taxonomy — ambiguity and silence both
//! resolve to an Undefined leaf, never to an invented tag.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use taxon_core::config::ClassifyConfig;
use taxon_core::taxonomy::{Domain, Tag, TaxonomyRegistry};
use taxon_core::traits::Signal;
use taxon_core::types::QnARecord;
use tracing::debug;

pub struct Classifier {
    registry: Arc<TaxonomyRegistry>,
    min_leaf_confidence: f64,
    domain_priority: [Domain; 4],
    default_domain: Domain,
}

impl Classifier {
    pub fn new(registry: Arc<TaxonomyRegistry>, config: &ClassifyConfig) -> Self {
        Self {
            registry,
            min_leaf_confidence: config.effective_min_leaf_confidence(),
            domain_priority: config.effective_domain_priority(),
            default_domain: config.effective_default_domain(),
        }
    }

    /// Classify one record from its extracted signals. Total: always
    /// returns a taxonomy member.
    pub fn classify(&self, record: &QnARecord, signals: &[Signal]) -> Tag {
        if record.is_blank() || signals.is_empty() {
            debug!(note_id = record.note_id, "no usable signal, using default domain");
            return self.registry.undefined_tag(self.default_domain);
        }

        let domain = match self.elect_domain(record.note_id, signals) {
            DomainVerdict::Winner(domain) => domain,
            DomainVerdict::Tie(domain) => {
                return self.registry.undefined_tag(domain);
            }
        };

        self.elect_leaf(record.note_id, domain, signals)
    }

    /// Sum signal weights per domain and require a strict maximum.
    fn elect_domain(&self, note_id: i64, signals: &[Signal]) -> DomainVerdict {
        let mut scores: FxHashMap<Domain, f64> = FxHashMap::default();
        for signal in signals {
            *scores.entry(signal.domain).or_insert(0.0) += signal.weight;
        }

        let top = scores
            .values()
            .fold(f64::NEG_INFINITY, |acc, &s| acc.max(s));
        let mut tied: Vec<Domain> = self
            .domain_priority
            .iter()
            .copied()
            .filter(|d| scores.get(d).is_some_and(|&s| s == top))
            .collect();

        if tied.len() == 1 {
            DomainVerdict::Winner(tied[0])
        } else {
            // Ambiguous between domains: route to Undefined under the
            // highest-priority tied domain rather than guess.
            let chosen = tied.remove(0);
            debug!(
                note_id,
                tied = tied.len() + 1,
                chosen = chosen.as_str(),
                "domain vote tied"
            );
            DomainVerdict::Tie(chosen)
        }
    }

    /// Score leaves within the winning domain. Leaf votes for names that
    /// are not taxonomy members of the domain are discarded.
    fn elect_leaf(&self, note_id: i64, domain: Domain, signals: &[Signal]) -> Tag {
        let mut scores: FxHashMap<&str, f64> = FxHashMap::default();
        for signal in signals {
            if signal.domain != domain {
                continue;
            }
            let Some(leaf) = signal.leaf.as_deref() else {
                continue;
            };
            let qualified = format!("{}::{}", domain.as_str(), leaf);
            if self.registry.lookup(&qualified) == Some(domain) {
                *scores.entry(leaf).or_insert(0.0) += signal.weight;
            }
        }

        let top = scores
            .values()
            .fold(f64::NEG_INFINITY, |acc, &s| acc.max(s));
        if top < self.min_leaf_confidence {
            debug!(
                note_id,
                domain = domain.as_str(),
                top_score = top,
                "leaf score below confidence floor"
            );
            return self.registry.undefined_tag(domain);
        }

        // Registry order breaks leaf-score ties deterministically.
        let winner = self
            .registry
            .domain_tags(domain)
            .iter()
            .find(|tag| scores.get(tag.name()).is_some_and(|&s| s == top));
        match winner {
            Some(tag) => tag.clone(),
            None => self.registry.undefined_tag(domain),
        }
    }
}

enum DomainVerdict {
    Winner(Domain),
    Tie(Domain),
}
