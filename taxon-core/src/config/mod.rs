//! Layered configuration: compiled defaults, project `taxon.toml`,
//! then `TAXON_*` environment overrides.

pub mod classify_config;
pub mod content_config;
pub mod pipeline_config;
pub mod taxon_config;
pub mod transcription_config;

pub use classify_config::ClassifyConfig;
pub use content_config::{BulletBounds, ContentConfig};
pub use pipeline_config::PipelineConfig;
pub use taxon_config::TaxonConfig;
pub use transcription_config::TranscriptionConfig;
