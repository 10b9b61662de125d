//! taxon-core: core types for the taxon classification engine
//!
//! This crate provides the shared foundation for taxon:
//! - Taxonomy: the closed four-domain registry of leaf tags
//! - Types: question records, classification results, content blocks
//! - Errors: one error enum per subsystem, `thiserror` only
//! - Config: layered TOML + env configuration
//! - Traits: collaborator boundaries (signal and fact providers)

pub mod config;
pub mod errors;
pub mod taxonomy;
pub mod traits;
pub mod types;

// Re-exports for convenience
pub use config::{
    ClassifyConfig, ContentConfig, PipelineConfig, TaxonConfig, TranscriptionConfig,
};
pub use errors::{
    BatchOutcome, ConfigError, ContentError, PipelineError, RecordFailure, SchemaError,
    TaxonErrorCode, TaxonomyError,
};
pub use taxonomy::{Domain, Tag, TaxonomyRegistry};
pub use traits::{FactProvider, FactSet, NullSignalProvider, Signal, SignalProvider};
pub use types::{
    ClassificationResult, ContentBlock, ExtraUpdate, QnARecord, Reconciliation,
    TranscriptionRecord,
};
