//! Transcription schema errors.
//!
//! A validator reports the *first* rule violated, so each variant names one
//! rule. All schema errors are fatal for the offending record only.

use super::error_code::{self, TaxonErrorCode};

/// Errors raised by the transcription schema validator.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SchemaError {
    #[error("Transcription input is not a JSON object")]
    NotAnObject,

    #[error("Missing required key: {key}")]
    MissingKey { key: &'static str },

    #[error("Unknown key: {key}")]
    UnknownKey { key: String },

    #[error("Key out of order: expected {expected}, found {found}")]
    KeyOrder {
        expected: &'static str,
        found: String,
    },

    #[error("Wrong type for {key}: expected {expected}")]
    WrongType {
        key: &'static str,
        expected: &'static str,
    },

    #[error("Answer {answer:?} is not an option index (\"1\"-\"4\")")]
    AnswerNotIndex { answer: String },

    #[error("Answer references empty option OP{index}")]
    AnswerReferencesEmptyOption { index: u8 },

    #[error("Tags must be empty before classification, found {count} entries")]
    TagsNotEmpty { count: usize },

    #[error("Raw newline in {key} (use the inline break marker)")]
    RawNewline { key: &'static str },

    #[error("Unbalanced table markup in {key}")]
    UnbalancedTable { key: &'static str },
}

impl TaxonErrorCode for SchemaError {
    fn error_code(&self) -> &'static str {
        error_code::SCHEMA_VIOLATION
    }
}
