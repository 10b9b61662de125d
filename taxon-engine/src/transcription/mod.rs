//! Transcription schema validation.
//!
//! Transcribed question batches arrive as raw JSON objects. Each object
//! must carry exactly the eight known keys in a fixed order, typed
//! correctly, with an empty `Tags` array and an `Answer` that references a
//! non-empty option. Validation reports the first rule violated; text
//! fields are normalized on the way through.

pub mod normalize;

use serde_json::{Map, Value};
use taxon_core::config::TranscriptionConfig;
use taxon_core::errors::SchemaError;
use taxon_core::types::TranscriptionRecord;

/// The full ordered key set of a transcription object.
pub const EXPECTED_KEYS: [&str; 8] =
    ["SL", "Question", "OP1", "OP2", "OP3", "OP4", "Answer", "Tags"];

const TEXT_KEYS: [&str; 5] = ["Question", "OP1", "OP2", "OP3", "OP4"];

pub struct TranscriptionValidator {
    config: TranscriptionConfig,
}

impl TranscriptionValidator {
    pub fn new(config: TranscriptionConfig) -> Self {
        Self { config }
    }

    /// Validate one raw object and produce the typed record.
    pub fn validate(&self, raw: &Value) -> Result<TranscriptionRecord, SchemaError> {
        let obj = raw.as_object().ok_or(SchemaError::NotAnObject)?;
        check_key_shape(obj)?;

        let sl = obj
            .get("SL")
            .and_then(Value::as_i64)
            .ok_or(SchemaError::WrongType {
                key: "SL",
                expected: "integer",
            })?;

        let mut texts = [const { String::new() }; 5];
        for (i, &key) in TEXT_KEYS.iter().enumerate() {
            let text = obj
                .get(key)
                .and_then(Value::as_str)
                .ok_or(SchemaError::WrongType {
                    key,
                    expected: "string",
                })?;
            texts[i] = self.normalize_field(key, text)?;
        }

        let answer = obj
            .get("Answer")
            .and_then(Value::as_str)
            .ok_or(SchemaError::WrongType {
                key: "Answer",
                expected: "string",
            })?;
        let tags = obj
            .get("Tags")
            .and_then(Value::as_array)
            .ok_or(SchemaError::WrongType {
                key: "Tags",
                expected: "array",
            })?;
        if !tags.is_empty() {
            return Err(SchemaError::TagsNotEmpty { count: tags.len() });
        }

        let [question, op1, op2, op3, op4] = texts;
        let record = TranscriptionRecord {
            sl,
            question,
            op1,
            op2,
            op3,
            op4,
            answer: answer.to_string(),
            tags: Vec::new(),
        };
        check_answer(&record)?;
        Ok(record)
    }

    /// Normalize one text field per the configured policy, rejecting what
    /// cannot be repaired.
    fn normalize_field(
        &self,
        key: &'static str,
        text: &str,
    ) -> Result<String, SchemaError> {
        if !normalize::tables_balanced(text) {
            return Err(SchemaError::UnbalancedTable { key });
        }

        let mut out = if text.contains('\n') {
            if !self.config.effective_normalize_linebreaks() {
                return Err(SchemaError::RawNewline { key });
            }
            normalize::normalize_linebreaks(text)
        } else {
            text.to_string()
        };
        out = normalize::collapse_breaks(&out);
        out = normalize::replace_image_placeholder(
            &out,
            self.config.effective_image_placeholder(),
        );
        Ok(normalize::wrap_bare_math(&out))
    }
}

impl Default for TranscriptionValidator {
    fn default() -> Self {
        Self::new(TranscriptionConfig::default())
    }
}

/// Enforce the exact key set and order: no missing, unknown, or reordered
/// keys. Reports the first divergence.
fn check_key_shape(obj: &Map<String, Value>) -> Result<(), SchemaError> {
    let mut actual = obj.keys();
    for expected in EXPECTED_KEYS {
        match actual.next() {
            None => return Err(SchemaError::MissingKey { key: expected }),
            Some(found) if found == expected => {}
            Some(found) => {
                if !EXPECTED_KEYS.contains(&found.as_str()) {
                    return Err(SchemaError::UnknownKey { key: found.clone() });
                }
                if !obj.contains_key(expected) {
                    return Err(SchemaError::MissingKey { key: expected });
                }
                return Err(SchemaError::KeyOrder {
                    expected,
                    found: found.clone(),
                });
            }
        }
    }
    if let Some(extra) = actual.next() {
        return Err(SchemaError::UnknownKey { key: extra.clone() });
    }
    Ok(())
}

/// `Answer` must be exactly one of the literal strings "1"-"4" ("01",
/// "+1" and the like do not count) referencing a non-empty option.
fn check_answer(record: &TranscriptionRecord) -> Result<(), SchemaError> {
    let index: u8 = match record.answer.as_str() {
        "1" => 1,
        "2" => 2,
        "3" => 3,
        "4" => 4,
        _ => {
            return Err(SchemaError::AnswerNotIndex {
                answer: record.answer.clone(),
            })
        }
    };
    let option = match index {
        1 => &record.op1,
        2 => &record.op2,
        3 => &record.op3,
        _ => &record.op4,
    };
    if option.is_empty() {
        return Err(SchemaError::AnswerReferencesEmptyOption { index });
    }
    Ok(())
}
