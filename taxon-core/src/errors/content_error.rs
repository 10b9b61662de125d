//! Content formatting errors.

use super::error_code::{self, TaxonErrorCode};

/// Errors raised by the content formatter.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ContentError {
    /// Every Section-1 bullet was filtered out; there is nothing to report.
    #[error("No content left after filtering for note {note_id}")]
    EmptyAfterFiltering { note_id: i64 },

    /// Records need at least two options to explain anything against.
    #[error("Note {note_id} has {count} options, need at least 2")]
    TooFewOptions { note_id: i64, count: usize },
}

impl TaxonErrorCode for ContentError {
    fn error_code(&self) -> &'static str {
        error_code::EMPTY_CONTENT
    }
}
