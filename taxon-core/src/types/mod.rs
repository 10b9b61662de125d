//! Shared data types for records, results, and content blocks.

mod content;
mod record;

pub use content::{ContentBlock, EXPLANATION_HEADING, REBUTTAL_HEADING};
pub use record::{
    ClassificationResult, ExtraUpdate, QnARecord, Reconciliation, TranscriptionRecord,
    MAX_OPTIONS,
};
