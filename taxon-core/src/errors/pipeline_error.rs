//! Pipeline errors and per-record failure collection.

use super::error_code::{self, TaxonErrorCode};
use super::{ConfigError, ContentError, SchemaError, TaxonomyError};

/// Errors that can occur during pipeline execution.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, Clone, thiserror::Error)]
pub enum PipelineError {
    #[error("Taxonomy error: {0}")]
    Taxonomy(#[from] TaxonomyError),

    #[error("Schema violation: {0}")]
    Schema(#[from] SchemaError),

    #[error("Content error: {0}")]
    Content(#[from] ContentError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Malformed input: {message}")]
    MalformedInput { message: String },
}

impl TaxonErrorCode for PipelineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Taxonomy(e) => e.error_code(),
            Self::Schema(e) => e.error_code(),
            Self::Content(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::MalformedInput { .. } => error_code::MALFORMED_INPUT,
        }
    }
}

/// A single record that failed, identified by its note id.
/// Failed records are reported, never silently dropped.
#[derive(Debug, Clone)]
pub struct RecordFailure {
    pub note_id: i64,
    pub error: PipelineError,
}

impl RecordFailure {
    /// Stable error code of the underlying failure.
    pub fn error_code(&self) -> &'static str {
        self.error.error_code()
    }
}

/// Result of a batch run that accumulates per-record failures.
/// One record's error never prevents the rest of the batch from
/// producing valid output.
#[derive(Debug, Default)]
pub struct BatchOutcome<T> {
    /// Successful outputs, in input order.
    pub outputs: Vec<T>,
    /// Per-record failures, in input order.
    pub failures: Vec<RecordFailure>,
}

impl<T> BatchOutcome<T> {
    /// Create an empty outcome.
    pub fn new() -> Self {
        Self {
            outputs: Vec::new(),
            failures: Vec::new(),
        }
    }

    /// Returns true when every record succeeded.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// Total records processed (successes + failures).
    pub fn total(&self) -> usize {
        self.outputs.len() + self.failures.len()
    }
}
