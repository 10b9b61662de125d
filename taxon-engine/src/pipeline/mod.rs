//! Batch orchestration.
//!
//! The orchestrator owns the taxonomy, the configuration, and the
//! collaborator providers, and drives one workflow over a batch of
//! records: chunked, optionally parallel, input order preserved, one
//! record's failure never touching its neighbors.

use std::sync::Arc;

use rayon::prelude::*;
use serde_json::Value;
use taxon_core::config::TaxonConfig;
use taxon_core::errors::{BatchOutcome, PipelineError, RecordFailure};
use taxon_core::taxonomy::TaxonomyRegistry;
use taxon_core::traits::{FactProvider, SignalProvider};
use taxon_core::types::{
    ClassificationResult, ExtraUpdate, QnARecord, Reconciliation, TranscriptionRecord,
};
use tracing::{debug, info};

use crate::classifier::Classifier;
use crate::content::{ContentFormatter, ContentWorkflow};
use crate::reconcile;
use crate::signals::LexicalSignalExtractor;
use crate::transcription::TranscriptionValidator;

/// The four batch workflows the engine runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowKind {
    Classification,
    Explanation,
    ContentSummary,
    Transcription,
}

impl WorkflowKind {
    /// Infer the workflow from the key shape of already-produced output
    /// entries. ContentSummary output is shaped like Explanation output,
    /// so shape detection reports it as Explanation.
    pub fn detect(entries: &[Value]) -> Option<WorkflowKind> {
        let first = entries.first()?.as_object()?;
        if first.contains_key("newTag") && first.contains_key("oldTag") {
            Some(WorkflowKind::Classification)
        } else if first.contains_key("Extra") && first.contains_key("noteId") {
            Some(WorkflowKind::Explanation)
        } else if first.contains_key("SL") {
            Some(WorkflowKind::Transcription)
        } else {
            None
        }
    }
}

/// Strip a surrounding ```/```json code fence, if present. Transcribed
/// payloads sometimes arrive wrapped in one.
pub fn strip_code_fences(payload: &str) -> &str {
    let trimmed = payload.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    let rest = rest.strip_suffix("```").unwrap_or(rest);
    rest.trim()
}

pub struct Orchestrator {
    config: TaxonConfig,
    classifier: Classifier,
    formatter: ContentFormatter,
    validator: TranscriptionValidator,
    signals: Arc<dyn SignalProvider>,
    facts: Arc<dyn FactProvider>,
}

impl Orchestrator {
    pub fn new(
        registry: Arc<TaxonomyRegistry>,
        config: TaxonConfig,
        signals: Arc<dyn SignalProvider>,
        facts: Arc<dyn FactProvider>,
    ) -> Self {
        let classifier = Classifier::new(registry, &config.classify);
        let formatter = ContentFormatter::new(config.content.clone());
        let validator = TranscriptionValidator::new(config.transcription.clone());
        Self {
            config,
            classifier,
            formatter,
            validator,
            signals,
            facts,
        }
    }

    /// An orchestrator over the built-in taxonomy with the lexical signal
    /// extractor. Only the fact provider has no built-in implementation.
    pub fn with_defaults(config: TaxonConfig, facts: Arc<dyn FactProvider>) -> Self {
        Self::new(
            Arc::new(TaxonomyRegistry::builtin()),
            config,
            Arc::new(LexicalSignalExtractor::new()),
            facts,
        )
    }

    /// Classify and reconcile a batch. Classification is total, so this
    /// workflow only accumulates failures from upstream parse stages.
    pub fn classify_batch(&self, records: &[QnARecord]) -> BatchOutcome<Reconciliation> {
        let outcome = self.run_records(records, |record| {
            let signals = self.signals.signals(record);
            let tag = self.classifier.classify(record, &signals);
            Ok(reconcile::reconcile(record, tag))
        });
        self.log_outcome("classification", &outcome);
        outcome
    }

    /// Generate bounded explanation content for a batch.
    pub fn content_batch(
        &self,
        records: &[QnARecord],
        workflow: ContentWorkflow,
    ) -> BatchOutcome<ExtraUpdate> {
        let outcome = self.run_records(records, |record| {
            let facts = self.facts.facts(record);
            let block = self
                .formatter
                .format(record, &facts, workflow)
                .map_err(|e| RecordFailure {
                    note_id: record.note_id,
                    error: e.into(),
                })?;
            Ok(ExtraUpdate {
                note_id: record.note_id,
                extra: block.render(),
            })
        });
        self.log_outcome("content", &outcome);
        outcome
    }

    /// Validate a batch of raw transcription objects.
    pub fn transcription_batch(&self, raw: &[Value]) -> BatchOutcome<TranscriptionRecord> {
        let outcome = self.run_records(raw, |value| {
            self.validator.validate(value).map_err(|e| RecordFailure {
                note_id: value.get("SL").and_then(Value::as_i64).unwrap_or(-1),
                error: e.into(),
            })
        });
        self.log_outcome("transcription", &outcome);
        outcome
    }

    /// Parse a raw JSON payload (code fences tolerated) and run the given
    /// workflow over it, emitting wire-shaped output values.
    pub fn run(
        &self,
        payload: &str,
        kind: WorkflowKind,
    ) -> Result<BatchOutcome<Value>, PipelineError> {
        let body = strip_code_fences(payload);
        let parsed: Value =
            serde_json::from_str(body).map_err(|e| PipelineError::MalformedInput {
                message: e.to_string(),
            })?;
        let entries = parsed
            .as_array()
            .ok_or_else(|| PipelineError::MalformedInput {
                message: "payload is not a JSON array".to_string(),
            })?;

        // Parsing and the workflow run per entry, so a failure lands in
        // `failures` at its input position regardless of which stage
        // produced it.
        match kind {
            WorkflowKind::Classification => {
                Ok(self.run_json(entries, "classification", |record| {
                    let signals = self.signals.signals(record);
                    let tag = self.classifier.classify(record, &signals);
                    let out = reconcile::reconcile(record, tag);
                    Ok(ClassificationResult {
                        note_id: out.note_id,
                        old_tag: out.old_tag,
                        new_tag: out.new_tag,
                    })
                }))
            }
            WorkflowKind::Explanation | WorkflowKind::ContentSummary => {
                let workflow = if kind == WorkflowKind::Explanation {
                    ContentWorkflow::Explanation
                } else {
                    ContentWorkflow::ContentSummary
                };
                Ok(self.run_json(entries, "content", |record| {
                    let block = self
                        .formatter
                        .format(record, &self.facts.facts(record), workflow)
                        .map_err(|e| RecordFailure {
                            note_id: record.note_id,
                            error: e.into(),
                        })?;
                    Ok(ExtraUpdate {
                        note_id: record.note_id,
                        extra: block.render(),
                    })
                }))
            }
            WorkflowKind::Transcription => {
                let outcome = self.run_records(entries, |value| {
                    let record =
                        self.validator.validate(value).map_err(|e| RecordFailure {
                            note_id: value.get("SL").and_then(Value::as_i64).unwrap_or(-1),
                            error: e.into(),
                        })?;
                    serialize_output(&record, record.sl)
                });
                self.log_outcome("transcription", &outcome);
                Ok(outcome)
            }
        }
    }

    /// Parse each entry into a record, apply the workflow operation, and
    /// serialize its output, all within one per-entry step.
    fn run_json<T, F>(&self, entries: &[Value], workflow: &str, op: F) -> BatchOutcome<Value>
    where
        T: serde::Serialize + Send,
        F: Fn(&QnARecord) -> Result<T, RecordFailure> + Sync,
    {
        let outcome = self.run_records(entries, |entry| {
            let record = parse_record(entry)?;
            let output = op(&record)?;
            serialize_output(&output, record.note_id)
        });
        self.log_outcome(workflow, &outcome);
        outcome
    }

    /// Drive one record-level operation over the batch: chunked, parallel
    /// when configured, input order preserved.
    fn run_records<R, T, F>(&self, items: &[R], op: F) -> BatchOutcome<T>
    where
        R: Sync,
        T: Send,
        F: Fn(&R) -> Result<T, RecordFailure> + Sync,
    {
        let chunk_size = self.config.pipeline.effective_chunk_size();
        let parallel = self.config.pipeline.effective_parallel();

        let mut outcome = BatchOutcome::new();
        for (i, chunk) in items.chunks(chunk_size).enumerate() {
            let results: Vec<Result<T, RecordFailure>> = if parallel {
                chunk.par_iter().map(&op).collect()
            } else {
                chunk.iter().map(&op).collect()
            };
            debug!(chunk = i, size = chunk.len(), "chunk processed");
            for result in results {
                match result {
                    Ok(output) => outcome.outputs.push(output),
                    Err(failure) => outcome.failures.push(failure),
                }
            }
        }
        outcome
    }

    fn log_outcome<T>(&self, workflow: &str, outcome: &BatchOutcome<T>) {
        info!(
            workflow,
            total = outcome.total(),
            failed = outcome.failures.len(),
            "batch complete"
        );
    }
}

/// Deserialize one array entry into a record.
fn parse_record(entry: &Value) -> Result<QnARecord, RecordFailure> {
    serde_json::from_value(entry.clone()).map_err(|e| RecordFailure {
        note_id: entry.get("noteId").and_then(Value::as_i64).unwrap_or(-1),
        error: PipelineError::MalformedInput {
            message: e.to_string(),
        },
    })
}

fn serialize_output<T: serde::Serialize>(
    output: &T,
    note_id: i64,
) -> Result<Value, RecordFailure> {
    serde_json::to_value(output).map_err(|e| RecordFailure {
        note_id,
        error: PipelineError::MalformedInput {
            message: e.to_string(),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use taxon_core::traits::FactSet;

    struct CannedFacts;

    impl FactProvider for CannedFacts {
        fn facts(&self, _record: &QnARecord) -> FactSet {
            FactSet {
                supporting: vec![
                    "point one".to_string(),
                    "point two".to_string(),
                    "point three".to_string(),
                ],
                rebuttals: vec!["rebuttal one text".to_string()],
            }
        }
    }

    fn orchestrator() -> Orchestrator {
        Orchestrator::with_defaults(TaxonConfig::default(), Arc::new(CannedFacts))
    }

    #[test]
    fn test_strip_code_fences() {
        assert_eq!(strip_code_fences("```json\n[1]\n```"), "[1]");
        assert_eq!(strip_code_fences("```\n[1]\n```"), "[1]");
        assert_eq!(strip_code_fences("  [1]  "), "[1]");
    }

    #[test]
    fn test_detect_workflow_from_output_shape() {
        let classification =
            vec![json!({"noteId": 1, "oldTag": "", "newTag": "ENG::Idioms"})];
        assert_eq!(
            WorkflowKind::detect(&classification),
            Some(WorkflowKind::Classification)
        );

        let content = vec![json!({"noteId": 1, "Extra": "<h3>..</h3>"})];
        assert_eq!(WorkflowKind::detect(&content), Some(WorkflowKind::Explanation));

        let transcription = vec![json!({"SL": 1, "Question": "q"})];
        assert_eq!(
            WorkflowKind::detect(&transcription),
            Some(WorkflowKind::Transcription)
        );

        assert_eq!(WorkflowKind::detect(&[]), None);
        assert_eq!(WorkflowKind::detect(&[json!({"x": 1})]), None);
    }

    #[test]
    fn test_transcription_batch_yields_typed_records() {
        let raw = vec![json!({
            "SL": 3, "Question": "q", "OP1": "a", "OP2": "b",
            "OP3": "c", "OP4": "d", "Answer": "1", "Tags": []
        })];
        let outcome = orchestrator().transcription_batch(&raw);
        assert!(outcome.is_clean());
        assert_eq!(outcome.outputs[0].sl, 3);
    }

    #[test]
    fn test_run_rejects_non_array_payload() {
        let err = orchestrator()
            .run("{\"noteId\": 1}", WorkflowKind::Classification)
            .unwrap_err();
        assert!(matches!(err, PipelineError::MalformedInput { .. }));
    }

    #[test]
    fn test_run_accepts_fenced_payload() {
        let payload = "```json\n[{\"noteId\": 1, \"Question\": \"Pick the synonym of happy\", \"Answer\": \"glad\"}]\n```";
        let outcome = orchestrator()
            .run(payload, WorkflowKind::Classification)
            .unwrap();
        assert_eq!(outcome.outputs.len(), 1);
        assert!(outcome.is_clean());
        assert_eq!(outcome.outputs[0]["newTag"], "ENG::Synonyms");
    }

    #[test]
    fn test_malformed_entry_does_not_poison_batch() {
        let payload = r#"[
            {"noteId": 1, "Question": "Pick the synonym of happy", "Answer": "glad"},
            {"noteId": "not a number", "Question": "q", "Answer": "a"}
        ]"#;
        let outcome = orchestrator()
            .run(payload, WorkflowKind::Classification)
            .unwrap();
        assert_eq!(outcome.outputs.len(), 1);
        assert_eq!(outcome.failures.len(), 1);
    }
}
