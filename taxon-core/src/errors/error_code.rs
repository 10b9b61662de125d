//! Stable error-code strings for host-process reporting.

/// Trait mapping every error to a stable code string.
pub trait TaxonErrorCode {
    /// Stable, machine-readable error code.
    fn error_code(&self) -> &'static str;
}

pub const TAXONOMY_ERROR: &str = "TAXON_TAXONOMY";
pub const SCHEMA_VIOLATION: &str = "TAXON_SCHEMA_VIOLATION";
pub const EMPTY_CONTENT: &str = "TAXON_EMPTY_CONTENT";
pub const CONFIG_ERROR: &str = "TAXON_CONFIG";
pub const MALFORMED_INPUT: &str = "TAXON_MALFORMED_INPUT";
