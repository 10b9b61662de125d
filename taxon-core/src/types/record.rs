//! Question records and per-workflow output records.
//!
//! Records are constructed from input and never mutated in place; every
//! transform produces a new derived value. Output structs declare their
//! fields in the exact key order the wire format requires — serde_json
//! serializes struct fields in declaration order.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::taxonomy::Tag;

/// Maximum number of answer options per record.
pub const MAX_OPTIONS: usize = 4;

/// One question/answer/options unit to be classified or transcribed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QnARecord {
    #[serde(rename = "noteId")]
    pub note_id: i64,
    #[serde(rename = "Question")]
    pub question: String,
    #[serde(rename = "OP1", default)]
    pub op1: String,
    #[serde(rename = "OP2", default)]
    pub op2: String,
    #[serde(rename = "OP3", default)]
    pub op3: String,
    #[serde(rename = "OP4", default)]
    pub op4: String,
    /// Correct answer: free text or an option-index reference ("1"-"4").
    #[serde(rename = "Answer")]
    pub answer: String,
    #[serde(rename = "Extra", default)]
    pub extra: String,
    /// Mixed bag: at most one taxonomy tag plus source/year labels.
    #[serde(rename = "Tags", default)]
    pub tags: Vec<String>,
}

impl QnARecord {
    /// Non-empty options in OP1..OP4 order, with their 1-based index.
    pub fn options(&self) -> SmallVec<[(u8, &str); MAX_OPTIONS]> {
        [&self.op1, &self.op2, &self.op3, &self.op4]
            .into_iter()
            .enumerate()
            .filter(|(_, op)| !op.is_empty())
            .map(|(i, op)| ((i + 1) as u8, op.as_str()))
            .collect()
    }

    /// Number of non-empty options.
    pub fn option_count(&self) -> usize {
        self.options().len()
    }

    /// The option text at a 1-based index, if present and non-empty.
    pub fn option(&self, index: u8) -> Option<&str> {
        let op = match index {
            1 => &self.op1,
            2 => &self.op2,
            3 => &self.op3,
            4 => &self.op4,
            _ => return None,
        };
        (!op.is_empty()).then_some(op.as_str())
    }

    /// The answer as text. When `Answer` is an option-index reference
    /// ("1"-"4") pointing at a non-empty option, the option text is
    /// returned; otherwise `Answer` itself.
    pub fn answer_text(&self) -> &str {
        if let Ok(index) = self.answer.parse::<u8>() {
            if let Some(op) = self.option(index) {
                return op;
            }
        }
        &self.answer
    }

    /// A record with neither question nor answer text cannot be classified.
    pub fn is_blank(&self) -> bool {
        self.question.is_empty() && self.answer.is_empty()
    }
}

/// Classification output: exactly `{noteId, oldTag, newTag}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    #[serde(rename = "noteId")]
    pub note_id: i64,
    /// Prior taxonomy tag from the record, or empty when none was present.
    #[serde(rename = "oldTag")]
    pub old_tag: String,
    /// Freshly computed tag; always a taxonomy member.
    #[serde(rename = "newTag")]
    pub new_tag: Tag,
}

/// Reconciliation of a prior tag against a freshly computed one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reconciliation {
    #[serde(rename = "noteId")]
    pub note_id: i64,
    #[serde(rename = "oldTag")]
    pub old_tag: String,
    #[serde(rename = "newTag")]
    pub new_tag: Tag,
    /// Exact, case-sensitive equality of oldTag and newTag.
    pub matched: bool,
}

/// Content-generation output: `{noteId, Extra}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtraUpdate {
    #[serde(rename = "noteId")]
    pub note_id: i64,
    #[serde(rename = "Extra")]
    pub extra: String,
}

/// A validated transcription record with its fixed ordered key set.
/// `Tags` is always empty at this stage; classification happens downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptionRecord {
    #[serde(rename = "SL")]
    pub sl: i64,
    #[serde(rename = "Question")]
    pub question: String,
    #[serde(rename = "OP1")]
    pub op1: String,
    #[serde(rename = "OP2")]
    pub op2: String,
    #[serde(rename = "OP3")]
    pub op3: String,
    #[serde(rename = "OP4")]
    pub op4: String,
    /// Always one of "1".."4", referencing a non-empty option.
    #[serde(rename = "Answer")]
    pub answer: String,
    #[serde(rename = "Tags")]
    pub tags: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> QnARecord {
        QnARecord {
            note_id: 1,
            question: "Q".to_string(),
            op1: "alpha".to_string(),
            op2: "beta".to_string(),
            op3: String::new(),
            op4: String::new(),
            answer: "2".to_string(),
            extra: String::new(),
            tags: Vec::new(),
        }
    }

    #[test]
    fn test_options_skip_empty() {
        let r = record();
        let ops = r.options();
        assert_eq!(ops.len(), 2);
        assert_eq!(ops[0], (1, "alpha"));
        assert_eq!(ops[1], (2, "beta"));
    }

    #[test]
    fn test_answer_index_resolution() {
        let r = record();
        assert_eq!(r.answer_text(), "beta");
    }

    #[test]
    fn test_answer_text_passthrough() {
        let mut r = record();
        r.answer = "gamma".to_string();
        assert_eq!(r.answer_text(), "gamma");
        // Index pointing at an empty option falls back to the raw answer.
        r.answer = "4".to_string();
        assert_eq!(r.answer_text(), "4");
    }

    #[test]
    fn test_classification_result_key_order() {
        let result = ClassificationResult {
            note_id: 42,
            old_tag: String::new(),
            new_tag: Tag::parse("ENG::Idioms").unwrap(),
        };
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(json, r#"{"noteId":42,"oldTag":"","newTag":"ENG::Idioms"}"#);
    }

    #[test]
    fn test_record_deserializes_with_missing_options() {
        let json = r#"{"noteId": 7, "Question": "q", "Answer": "a"}"#;
        let r: QnARecord = serde_json::from_str(json).unwrap();
        assert_eq!(r.note_id, 7);
        assert_eq!(r.option_count(), 0);
        assert!(r.tags.is_empty());
    }
}
