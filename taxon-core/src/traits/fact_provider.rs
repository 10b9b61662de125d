//! FactProvider trait — the content-generation collaborator boundary.
//!
//! Drafted bullet text comes from outside the core; the formatter only
//! enforces structure on it.

use crate::types::QnARecord;

/// Candidate bullet text for one record, as drafted by a collaborator.
#[derive(Debug, Clone, Default)]
pub struct FactSet {
    /// Candidate Section-1 bullets (why the answer is correct).
    pub supporting: Vec<String>,
    /// Candidate Section-2 bullets (why the other options fail).
    pub rebuttals: Vec<String>,
}

/// Producer of drafted explanation bullets for a record.
pub trait FactProvider: Send + Sync {
    /// Draft candidate bullets for the record. Empty sets are legal and
    /// surface as `EmptyAfterFiltering` downstream.
    fn facts(&self, record: &QnARecord) -> FactSet;
}
