//! Orchestrator behavior over whole batches: ordering, isolation,
//! chunking, and wire-shaped output for every workflow.

use std::sync::Arc;

use serde_json::Value;
use taxon_core::config::{PipelineConfig, TaxonConfig};
use taxon_core::traits::{FactProvider, FactSet};
use taxon_core::types::QnARecord;
use taxon_engine::{ContentWorkflow, Orchestrator, WorkflowKind};

struct CannedFacts;

impl FactProvider for CannedFacts {
    fn facts(&self, record: &QnARecord) -> FactSet {
        FactSet {
            supporting: vec![
                format!("note {} point one", record.note_id),
                "point two".to_string(),
                "point three".to_string(),
            ],
            rebuttals: vec![
                "first rebuttal text".to_string(),
                "second rebuttal text".to_string(),
            ],
        }
    }
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn orchestrator() -> Orchestrator {
    init_tracing();
    Orchestrator::with_defaults(TaxonConfig::default(), Arc::new(CannedFacts))
}

fn orchestrator_with_pipeline(pipeline: PipelineConfig) -> Orchestrator {
    let config = TaxonConfig {
        pipeline,
        ..TaxonConfig::default()
    };
    Orchestrator::with_defaults(config, Arc::new(CannedFacts))
}

fn qna(note_id: i64, question: &str) -> QnARecord {
    QnARecord {
        note_id,
        question: question.to_string(),
        op1: "alpha".to_string(),
        op2: "beta".to_string(),
        op3: "gamma".to_string(),
        op4: "delta".to_string(),
        answer: "1".to_string(),
        extra: String::new(),
        tags: Vec::new(),
    }
}

#[test]
fn test_output_order_matches_input_order() {
    let records: Vec<_> = (0..7)
        .map(|i| qna(i, "Find the synonym of rapid."))
        .collect();
    // Chunk size smaller than the batch exercises the chunk seams.
    let orch = orchestrator_with_pipeline(PipelineConfig {
        chunk_size: Some(2),
        parallel: Some(true),
    });
    let outcome = orch.classify_batch(&records);
    assert!(outcome.is_clean());
    let ids: Vec<_> = outcome.outputs.iter().map(|r| r.note_id).collect();
    assert_eq!(ids, vec![0, 1, 2, 3, 4, 5, 6]);
}

#[test]
fn test_serial_and_parallel_agree() {
    let records: Vec<_> = (0..5)
        .map(|i| qna(i, "The train's speed is 60 km/h."))
        .collect();
    let serial = orchestrator_with_pipeline(PipelineConfig {
        chunk_size: Some(3),
        parallel: Some(false),
    })
    .classify_batch(&records);
    let parallel = orchestrator_with_pipeline(PipelineConfig {
        chunk_size: Some(3),
        parallel: Some(true),
    })
    .classify_batch(&records);
    assert_eq!(serial.outputs, parallel.outputs);
}

#[test]
fn test_content_failure_is_isolated() {
    let mut bad = qna(1, "q");
    bad.op2 = String::new();
    bad.op3 = String::new();
    bad.op4 = String::new(); // one option left: structurally invalid
    let records = vec![qna(0, "q"), bad, qna(2, "q")];

    let outcome = orchestrator().content_batch(&records, ContentWorkflow::Explanation);
    assert_eq!(outcome.outputs.len(), 2);
    assert_eq!(outcome.failures.len(), 1);
    assert_eq!(outcome.failures[0].note_id, 1);
    assert_eq!(outcome.failures[0].error_code(), "TAXON_EMPTY_CONTENT");
    // The surviving outputs keep their input order.
    assert_eq!(outcome.outputs[0].note_id, 0);
    assert_eq!(outcome.outputs[1].note_id, 2);
}

#[test]
fn test_content_output_shape() {
    let outcome = orchestrator().content_batch(&[qna(5, "q")], ContentWorkflow::Explanation);
    assert!(outcome.is_clean());
    let extra = &outcome.outputs[0].extra;
    assert!(extra.starts_with("<h3>Explanation</h3><ul>"));
    assert!(extra.contains("<h3>Why the other options are wrong</h3>"));
    assert!(extra.ends_with("</ul>"));
}

#[test]
fn test_classification_run_emits_exact_key_shape() {
    let payload = r#"[{"noteId": 11, "Question": "Select the idiom.", "Answer": "x",
                      "Tags": ["ENG::Synonyms"]}]"#;
    let outcome = orchestrator()
        .run(payload, WorkflowKind::Classification)
        .unwrap();
    assert!(outcome.is_clean());

    let keys: Vec<_> = outcome.outputs[0]
        .as_object()
        .unwrap()
        .keys()
        .cloned()
        .collect();
    assert_eq!(keys, ["noteId", "oldTag", "newTag"]);
    assert_eq!(outcome.outputs[0]["oldTag"], "ENG::Synonyms");
    assert_eq!(outcome.outputs[0]["newTag"], "ENG::Idioms");
}

#[test]
fn test_transcription_run_validates_and_normalizes() {
    let payload = r#"```json
[
  {"SL": 1, "Question": "First line\nsecond line", "OP1": "a", "OP2": "b",
   "OP3": "c", "OP4": "d", "Answer": "1", "Tags": []},
  {"SL": 2, "Question": "q", "OP1": "a", "OP2": "b",
   "OP3": "c", "OP4": "d", "Answer": "9", "Tags": []}
]
```"#;
    let outcome = orchestrator()
        .run(payload, WorkflowKind::Transcription)
        .unwrap();
    assert_eq!(outcome.outputs.len(), 1);
    assert_eq!(outcome.outputs[0]["Question"], "First line<br>second line");
    assert_eq!(outcome.failures.len(), 1);
    assert_eq!(outcome.failures[0].note_id, 2);
    assert_eq!(outcome.failures[0].error_code(), "TAXON_SCHEMA_VIOLATION");
}

#[test]
fn test_failures_keep_input_order_across_stages() {
    // Entry 0 fails in the workflow (single option), entry 1 fails at
    // parse (Question is not a string), entry 2 succeeds. The failure list
    // must follow input positions, not failure stages.
    let payload = r#"[
        {"noteId": 10, "Question": "q", "OP1": "only", "Answer": "1"},
        {"noteId": 7, "Question": 5, "Answer": "a"},
        {"noteId": 2, "Question": "q", "OP1": "a", "OP2": "b",
         "OP3": "c", "OP4": "d", "Answer": "1"}
    ]"#;
    let outcome = orchestrator()
        .run(payload, WorkflowKind::Explanation)
        .unwrap();

    let failed_ids: Vec<_> = outcome.failures.iter().map(|f| f.note_id).collect();
    assert_eq!(failed_ids, vec![10, 7]);
    assert_eq!(outcome.failures[0].error_code(), "TAXON_EMPTY_CONTENT");
    assert_eq!(outcome.failures[1].error_code(), "TAXON_MALFORMED_INPUT");
    assert_eq!(outcome.outputs.len(), 1);
    assert_eq!(outcome.outputs[0]["noteId"], 2);
}

#[test]
fn test_detected_workflow_roundtrip() {
    let payload = r#"[{"noteId": 1, "Question": "Find the synonym.", "Answer": "x"}]"#;
    let outcome = orchestrator()
        .run(payload, WorkflowKind::Classification)
        .unwrap();
    let detected = WorkflowKind::detect(&outcome.outputs);
    assert_eq!(detected, Some(WorkflowKind::Classification));
}

#[test]
fn test_summary_workflow_tightens_section_one() {
    struct ManyFacts;
    impl FactProvider for ManyFacts {
        fn facts(&self, _record: &QnARecord) -> FactSet {
            FactSet {
                supporting: (0..6).map(|i| format!("supporting point {i}")).collect(),
                rebuttals: vec!["one rebuttal text".to_string()],
            }
        }
    }
    let orch = Orchestrator::with_defaults(TaxonConfig::default(), Arc::new(ManyFacts));
    let records = [qna(1, "q")];

    let explain = orch.content_batch(&records, ContentWorkflow::Explanation);
    let summary = orch.content_batch(&records, ContentWorkflow::ContentSummary);
    let bullets = |extra: &str| extra.matches("<li>").count();
    // 5-bullet cap for explanation, 4 for summary, plus one rebuttal each.
    assert_eq!(bullets(&explain.outputs[0].extra), 6);
    assert_eq!(bullets(&summary.outputs[0].extra), 5);
}

#[test]
fn test_empty_batch_is_clean() {
    let outcome = orchestrator()
        .run("[]", WorkflowKind::Classification)
        .unwrap();
    assert_eq!(outcome.total(), 0);
    assert!(outcome.is_clean());
    assert_eq!(Vec::<Value>::new(), outcome.outputs);
}
