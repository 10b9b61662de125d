//! SignalProvider trait — the classification collaborator boundary.
//!
//! The component that actually reads free text and proposes candidate
//! meaning lives outside the core. The core consumes its output — a small
//! set of weighted domain/leaf hints — and never implements language
//! understanding itself. `taxon-engine` ships a lexical implementation;
//! hosts may plug in richer ones.

use crate::taxonomy::Domain;
use crate::types::QnARecord;

/// One weighted hint extracted from a record.
///
/// A signal votes for exactly one domain; when `leaf` is set it also votes
/// for that leaf within the domain.
#[derive(Debug, Clone, PartialEq)]
pub struct Signal {
    /// The domain this cue votes for.
    pub domain: Domain,
    /// Optional leaf name within the domain (e.g. "Idioms").
    pub leaf: Option<String>,
    /// Vote weight; must be positive.
    pub weight: f64,
    /// The cue that fired, for diagnostics.
    pub cue: String,
}

impl Signal {
    /// A domain-level signal with no leaf hint.
    pub fn domain(domain: Domain, weight: f64, cue: impl Into<String>) -> Self {
        Self {
            domain,
            leaf: None,
            weight,
            cue: cue.into(),
        }
    }

    /// A leaf-level signal; also counts toward the domain score.
    pub fn leaf(
        domain: Domain,
        leaf: impl Into<String>,
        weight: f64,
        cue: impl Into<String>,
    ) -> Self {
        Self {
            domain,
            leaf: Some(leaf.into()),
            weight,
            cue: cue.into(),
        }
    }
}

/// Producer of classification signals for a record.
pub trait SignalProvider: Send + Sync {
    /// Extract domain/leaf hints from the record. An empty vector means
    /// "no usable signal" and routes the record to the default-domain
    /// Undefined fallback.
    fn signals(&self, record: &QnARecord) -> Vec<Signal>;
}

/// No-op provider — every record classifies as the default-domain Undefined.
pub struct NullSignalProvider;

impl SignalProvider for NullSignalProvider {
    fn signals(&self, _record: &QnARecord) -> Vec<Signal> {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_provider_yields_nothing() {
        let record = QnARecord {
            note_id: 1,
            question: "anything".to_string(),
            op1: String::new(),
            op2: String::new(),
            op3: String::new(),
            op4: String::new(),
            answer: "x".to_string(),
            extra: String::new(),
            tags: Vec::new(),
        };
        assert!(NullSignalProvider.signals(&record).is_empty());
    }
}
