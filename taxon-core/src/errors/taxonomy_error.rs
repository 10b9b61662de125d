//! Taxonomy errors.

use super::error_code::{self, TaxonErrorCode};
use crate::taxonomy::Domain;

/// Errors that can occur while building or querying the taxonomy registry.
#[derive(Debug, Clone, thiserror::Error)]
pub enum TaxonomyError {
    #[error("Invalid tag format: {tag}")]
    InvalidTagFormat { tag: String },

    #[error("Duplicate tag: {tag}")]
    DuplicateTag { tag: String },

    #[error("Domain {domain} lacks an Undefined leaf")]
    MissingUndefined { domain: Domain },

    #[error("Taxonomy data error: {message}")]
    DataError { message: String },
}

impl TaxonErrorCode for TaxonomyError {
    fn error_code(&self) -> &'static str {
        error_code::TAXONOMY_ERROR
    }
}
