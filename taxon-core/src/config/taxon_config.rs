//! Top-level taxon configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{ClassifyConfig, ContentConfig, PipelineConfig, TranscriptionConfig};
use crate::errors::ConfigError;
use crate::taxonomy::Domain;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`TAXON_*`)
/// 2. Project config (`taxon.toml` in the given root)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TaxonConfig {
    pub classify: ClassifyConfig,
    pub content: ContentConfig,
    pub transcription: TranscriptionConfig,
    pub pipeline: PipelineConfig,
}

impl TaxonConfig {
    /// Load configuration with layered resolution.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join("taxon.toml");
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
            tracing::debug!(path = %project_config_path.display(), "merged project config");
        }

        Self::apply_env_overrides(&mut config);
        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: TaxonConfig =
            toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
                path: "<string>".to_string(),
                message: e.to_string(),
            })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &TaxonConfig) -> Result<(), ConfigError> {
        if let Some(threshold) = config.classify.min_leaf_confidence {
            if threshold < 0.0 || !threshold.is_finite() {
                return Err(ConfigError::ValidationFailed {
                    field: "classify.min_leaf_confidence".to_string(),
                    message: "must be a finite value >= 0.0".to_string(),
                });
            }
        }
        if let Some(ref domain) = config.classify.default_domain {
            if Domain::parse(domain).is_none() {
                return Err(ConfigError::ValidationFailed {
                    field: "classify.default_domain".to_string(),
                    message: format!("unknown domain {domain:?}"),
                });
            }
        }
        if let Some(threshold) = config.content.similarity_threshold {
            if !(0.0..=1.0).contains(&threshold) {
                return Err(ConfigError::ValidationFailed {
                    field: "content.similarity_threshold".to_string(),
                    message: "must be between 0.0 and 1.0".to_string(),
                });
            }
        }
        for (field, bounds) in [
            ("content.explain_bullets", config.content.explain_bullets),
            ("content.summary_bullets", config.content.summary_bullets),
            ("content.rebuttal_bullets", config.content.rebuttal_bullets),
        ] {
            if let Some(b) = bounds {
                if b.min == 0 || b.min > b.max {
                    return Err(ConfigError::ValidationFailed {
                        field: field.to_string(),
                        message: "bounds must satisfy 1 <= min <= max".to_string(),
                    });
                }
            }
        }
        if let Some(size) = config.pipeline.chunk_size {
            if size == 0 {
                return Err(ConfigError::ValidationFailed {
                    field: "pipeline.chunk_size".to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    fn merge_toml_file(config: &mut TaxonConfig, path: &Path) -> Result<(), ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
                path: path.display().to_string(),
            })?;

        let file_config: TaxonConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins wherever it has a value.
    fn merge(base: &mut TaxonConfig, other: &TaxonConfig) {
        // Classify
        if other.classify.min_leaf_confidence.is_some() {
            base.classify.min_leaf_confidence = other.classify.min_leaf_confidence;
        }
        if !other.classify.domain_priority.is_empty() {
            base.classify.domain_priority = other.classify.domain_priority.clone();
        }
        if other.classify.default_domain.is_some() {
            base.classify.default_domain = other.classify.default_domain.clone();
        }

        // Content
        if other.content.explain_bullets.is_some() {
            base.content.explain_bullets = other.content.explain_bullets;
        }
        if other.content.summary_bullets.is_some() {
            base.content.summary_bullets = other.content.summary_bullets;
        }
        if other.content.rebuttal_bullets.is_some() {
            base.content.rebuttal_bullets = other.content.rebuttal_bullets;
        }
        if other.content.similarity_threshold.is_some() {
            base.content.similarity_threshold = other.content.similarity_threshold;
        }

        // Transcription
        if other.transcription.normalize_linebreaks.is_some() {
            base.transcription.normalize_linebreaks =
                other.transcription.normalize_linebreaks;
        }
        if other.transcription.image_placeholder.is_some() {
            base.transcription.image_placeholder =
                other.transcription.image_placeholder.clone();
        }

        // Pipeline
        if other.pipeline.chunk_size.is_some() {
            base.pipeline.chunk_size = other.pipeline.chunk_size;
        }
        if other.pipeline.parallel.is_some() {
            base.pipeline.parallel = other.pipeline.parallel;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `TAXON_CLASSIFY_MIN_LEAF_CONFIDENCE`, `TAXON_PIPELINE_CHUNK_SIZE`, etc.
    fn apply_env_overrides(config: &mut TaxonConfig) {
        if let Ok(val) = std::env::var("TAXON_CLASSIFY_MIN_LEAF_CONFIDENCE") {
            if let Ok(v) = val.parse::<f64>() {
                config.classify.min_leaf_confidence = Some(v);
            }
        }
        if let Ok(val) = std::env::var("TAXON_CLASSIFY_DEFAULT_DOMAIN") {
            config.classify.default_domain = Some(val);
        }
        if let Ok(val) = std::env::var("TAXON_CONTENT_SIMILARITY_THRESHOLD") {
            if let Ok(v) = val.parse::<f64>() {
                config.content.similarity_threshold = Some(v);
            }
        }
        if let Ok(val) = std::env::var("TAXON_TRANSCRIPTION_NORMALIZE_LINEBREAKS") {
            if let Ok(v) = val.parse::<bool>() {
                config.transcription.normalize_linebreaks = Some(v);
            }
        }
        if let Ok(val) = std::env::var("TAXON_PIPELINE_CHUNK_SIZE") {
            if let Ok(v) = val.parse::<usize>() {
                config.pipeline.chunk_size = Some(v);
            }
        }
        if let Ok(val) = std::env::var("TAXON_PIPELINE_PARALLEL") {
            if let Ok(v) = val.parse::<bool>() {
                config.pipeline.parallel = Some(v);
            }
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
