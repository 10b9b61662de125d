//! Prior-tag extraction and reconciliation.
//!
//! A record's `Tags` array is a mixed bag: at most one taxonomy tag plus
//! source and year labels (`WBCS::Prelims::2023`, `2019`, ...). Only
//! strings that parse as `DOMAIN::Name` count as a prior tag; everything
//! else is left untouched.

use taxon_core::taxonomy::Tag;
use taxon_core::types::{QnARecord, Reconciliation};
use tracing::warn;

/// The record's prior taxonomy tag, if any.
///
/// Non-taxonomy labels are skipped silently. If several strings parse as
/// taxonomy tags the first wins; that state is a data bug worth a warning
/// but not a failure.
pub fn extract_old_tag(record: &QnARecord) -> Option<Tag> {
    let mut found: Option<Tag> = None;
    for raw in &record.tags {
        let Ok(tag) = Tag::parse(raw) else { continue };
        match found {
            None => found = Some(tag),
            Some(ref first) => {
                warn!(
                    note_id = record.note_id,
                    first = first.as_str(),
                    extra = tag.as_str(),
                    "record carries more than one taxonomy tag"
                );
            }
        }
    }
    found
}

/// Compare the record's prior tag against a freshly computed one.
///
/// `matched` is exact, case-sensitive string equality. A record with no
/// prior tag reconciles with an empty `oldTag` and `matched: false`.
pub fn reconcile(record: &QnARecord, new_tag: Tag) -> Reconciliation {
    let old_tag = extract_old_tag(record)
        .map(|t| t.as_str().to_string())
        .unwrap_or_default();
    let matched = old_tag == new_tag.as_str();
    Reconciliation {
        note_id: record.note_id,
        old_tag,
        new_tag,
        matched,
    }
}
