//! Error handling for taxon.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod content_error;
pub mod error_code;
pub mod pipeline_error;
pub mod schema_error;
pub mod taxonomy_error;

pub use config_error::ConfigError;
pub use content_error::ContentError;
pub use error_code::TaxonErrorCode;
pub use pipeline_error::{BatchOutcome, PipelineError, RecordFailure};
pub use schema_error::SchemaError;
pub use taxonomy_error::TaxonomyError;
