//! Tab-separated export of validated records for flashcard import.
//!
//! The output is a 10-column TSV with a three-line directive header; the
//! tags column is declared in the header so the importer maps it without
//! a field dialog. Cell text must never contain a raw tab or newline.

use taxon_core::config::TranscriptionConfig;
use taxon_core::types::TranscriptionRecord;

use crate::transcription::normalize;

/// Import directives: tab separator, HTML rendering on, tags in column 10.
pub const TSV_HEADER: &str = "#separator:tab\n#html:true\n#tags column:10\n";

const COLUMNS: usize = 10;

/// One export row. Columns: SL, Question, OP1-OP4, Answer, Extra, Video,
/// Tags (space-separated).
#[derive(Debug, Clone, Default)]
pub struct TsvRow {
    pub sl: i64,
    pub question: String,
    pub op1: String,
    pub op2: String,
    pub op3: String,
    pub op4: String,
    pub answer: String,
    pub extra: String,
    pub video: String,
    pub tags: Vec<String>,
}

impl From<&TranscriptionRecord> for TsvRow {
    fn from(record: &TranscriptionRecord) -> Self {
        Self {
            sl: record.sl,
            question: record.question.clone(),
            op1: record.op1.clone(),
            op2: record.op2.clone(),
            op3: record.op3.clone(),
            op4: record.op4.clone(),
            answer: record.answer.clone(),
            extra: String::new(),
            video: String::new(),
            tags: record.tags.clone(),
        }
    }
}

pub struct TsvExporter {
    image_placeholder: String,
}

impl TsvExporter {
    pub fn new(config: &TranscriptionConfig) -> Self {
        Self {
            image_placeholder: config.effective_image_placeholder().to_string(),
        }
    }

    /// Render header plus one line per row.
    pub fn export(&self, rows: &[TsvRow]) -> String {
        let mut out = String::from(TSV_HEADER);
        for row in rows {
            out.push_str(&self.render_row(row));
            out.push('\n');
        }
        out
    }

    fn render_row(&self, row: &TsvRow) -> String {
        let cells: [String; COLUMNS] = [
            row.sl.to_string(),
            self.sanitize(&row.question),
            self.sanitize(&row.op1),
            self.sanitize(&row.op2),
            self.sanitize(&row.op3),
            self.sanitize(&row.op4),
            self.sanitize(&row.answer),
            self.sanitize(&row.extra),
            self.sanitize(&row.video),
            row.tags.join(" "),
        ];
        cells.join("\t")
    }

    /// Make a cell TSV-safe: structural characters become spaces, doubled
    /// break markers collapse, image markers become real markup.
    fn sanitize(&self, text: &str) -> String {
        let collapsed = normalize::collapse_breaks(text);
        let imaged =
            normalize::replace_image_placeholder(&collapsed, &self.image_placeholder);
        imaged.replace(['\n', '\r', '\t'], " ")
    }
}

impl Default for TsvExporter {
    fn default() -> Self {
        Self::new(&TranscriptionConfig::default())
    }
}
