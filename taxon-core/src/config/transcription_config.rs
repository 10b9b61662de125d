//! Transcription validator configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the transcription schema validator.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TranscriptionConfig {
    /// When true (default), raw newlines inside text fields are normalized
    /// to the `<br>` marker; when false they are rejected. The choice holds
    /// for the whole batch.
    pub normalize_linebreaks: Option<bool>,
    /// Replacement markup for `<image content>` placeholders.
    /// Default: `<img src="400x200.png" alt="image">`.
    pub image_placeholder: Option<String>,
}

impl TranscriptionConfig {
    /// Returns the effective line-break policy, defaulting to normalize.
    pub fn effective_normalize_linebreaks(&self) -> bool {
        self.normalize_linebreaks.unwrap_or(true)
    }

    /// Returns the effective image placeholder markup.
    pub fn effective_image_placeholder(&self) -> &str {
        self.image_placeholder
            .as_deref()
            .unwrap_or(r#"<img src="400x200.png" alt="image">"#)
    }
}
