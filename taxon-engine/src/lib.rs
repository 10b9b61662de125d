//! taxon-engine: the workflow engine over `taxon-core`.
//!
//! Five pieces, one per workflow stage:
//!
//! - [`signals`] — lexical signal extraction (the default
//!   [`SignalProvider`](taxon_core::traits::SignalProvider))
//! - [`classifier`] — weighted two-stage domain/leaf election
//! - [`reconcile`] — prior-tag extraction and match reporting
//! - [`content`] — structural enforcement of the two-section explanation
//! - [`transcription`] — ordered-key schema validation and normalization
//!
//! [`pipeline`] drives any of them over a batch (chunked, parallel, order
//! preserving, failure isolating), and [`export`] renders validated
//! records as importable TSV.

pub mod classifier;
pub mod content;
pub mod export;
pub mod pipeline;
pub mod reconcile;
pub mod signals;
pub mod transcription;

pub use classifier::Classifier;
pub use content::{ContentFormatter, ContentWorkflow};
pub use export::{TsvExporter, TsvRow, TSV_HEADER};
pub use pipeline::{strip_code_fences, Orchestrator, WorkflowKind};
pub use reconcile::{extract_old_tag, reconcile};
pub use signals::LexicalSignalExtractor;
pub use transcription::TranscriptionValidator;
