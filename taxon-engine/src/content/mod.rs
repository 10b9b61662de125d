//! Structural enforcement of the two-section explanation format.
//!
//! The formatter never writes prose. It takes drafted bullets from a
//! [`FactProvider`](taxon_core::traits::FactProvider), filters repeats,
//! enforces per-section bullet bounds, and renders the fixed HTML
//! skeleton. Section 1 explains the correct answer; Section 2 rebuts the
//! other options and must not restate the answer.

mod similarity;

pub use similarity::jaccard;

use smallvec::SmallVec;
use taxon_core::config::ContentConfig;
use taxon_core::errors::ContentError;
use taxon_core::traits::FactSet;
use taxon_core::types::{ContentBlock, QnARecord};
use tracing::debug;

/// Which workflow the bullets are for. Bounds on Section 1 differ:
/// Explanation allows 3-5 bullets, ContentSummary 3-4.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentWorkflow {
    Explanation,
    ContentSummary,
}

pub struct ContentFormatter {
    config: ContentConfig,
}

impl ContentFormatter {
    pub fn new(config: ContentConfig) -> Self {
        Self { config }
    }

    /// Build a bounded, repeat-free content block for the record.
    pub fn format(
        &self,
        record: &QnARecord,
        facts: &FactSet,
        workflow: ContentWorkflow,
    ) -> Result<ContentBlock, ContentError> {
        let option_count = record.option_count();
        if option_count < 2 {
            return Err(ContentError::TooFewOptions {
                note_id: record.note_id,
                count: option_count,
            });
        }

        let section1_bounds = match workflow {
            ContentWorkflow::Explanation => self.config.effective_explain_bullets(),
            ContentWorkflow::ContentSummary => self.config.effective_summary_bullets(),
        };
        let rebuttal_bounds = self.config.effective_rebuttal_bullets();
        let threshold = self.config.effective_similarity_threshold();

        let explanation: SmallVec<[String; 5]> = facts
            .supporting
            .iter()
            .filter(|b| !b.trim().is_empty())
            .take(section1_bounds.max)
            .cloned()
            .collect();
        if explanation.is_empty() {
            return Err(ContentError::EmptyAfterFiltering {
                note_id: record.note_id,
            });
        }
        if explanation.len() < section1_bounds.min {
            // The provider drafted fewer bullets than the target; emit what
            // exists rather than invent filler.
            debug!(
                note_id = record.note_id,
                bullets = explanation.len(),
                min = section1_bounds.min,
                "section 1 below bullet minimum"
            );
        }

        // Section 2 must not restate the correct answer.
        let answer = record.answer_text();
        let mut rebuttals: SmallVec<[String; 3]> = facts
            .rebuttals
            .iter()
            .filter(|b| !b.trim().is_empty())
            .filter(|b| {
                let repeat = similarity::is_repeat(b, answer, threshold);
                if repeat {
                    debug!(note_id = record.note_id, bullet = %b, "dropping answer restatement");
                }
                !repeat
            })
            .cloned()
            .collect();

        // A two-option record has exactly one incorrect option, so exactly
        // one rebuttal bullet.
        let rebuttal_cap = if option_count == 2 { 1 } else { rebuttal_bounds.max };
        rebuttals.truncate(rebuttal_cap);
        if option_count > 2 && rebuttals.len() < rebuttal_bounds.min {
            // Sparse Section 2 is emitted as-is; the formatter never
            // invents filler bullets.
            debug!(
                note_id = record.note_id,
                bullets = rebuttals.len(),
                min = rebuttal_bounds.min,
                "section 2 below bullet minimum"
            );
        }

        Ok(ContentBlock {
            explanation,
            rebuttals,
        })
    }
}
