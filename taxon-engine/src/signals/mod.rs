//! Lexical signal extraction.
//!
//! The default [`SignalProvider`] implementation: a single aho-corasick
//! automaton over a static cue lexicon, plus two structural detectors
//! (arithmetic expressions and all-numeric option sets). The automaton is
//! built once and shared; extraction itself is read-only and lock-free,
//! so batches can fan records out across threads freely.

mod lexicon;

use aho_corasick::{AhoCorasick, AhoCorasickBuilder, MatchKind};
use once_cell::sync::Lazy;
use regex::Regex;
use rustc_hash::FxHashSet;
use taxon_core::taxonomy::Domain;
use taxon_core::traits::{Signal, SignalProvider};
use taxon_core::types::QnARecord;

use lexicon::{CueDef, CUES};

/// Two or more arithmetic tokens push a record toward MATH even when no
/// topic keyword fires.
static MATH_EXPR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[+=×÷√^]|\d+\s*[*/]\s*\d+|\d+\s*%").expect("static regex")
});

/// Keyword- and structure-based signal extractor.
pub struct LexicalSignalExtractor {
    automaton: AhoCorasick,
}

impl LexicalSignalExtractor {
    pub fn new() -> Self {
        let automaton = AhoCorasickBuilder::new()
            .ascii_case_insensitive(true)
            .match_kind(MatchKind::LeftmostLongest)
            .build(CUES.iter().map(|c| c.pattern))
            .expect("static cue lexicon");
        Self { automaton }
    }

    /// The text a record is judged on: question, resolved answer, options.
    fn haystack(record: &QnARecord) -> String {
        let mut text = String::with_capacity(
            record.question.len() + record.answer.len() + 64,
        );
        text.push_str(&record.question);
        text.push(' ');
        text.push_str(record.answer_text());
        for (_, op) in record.options() {
            text.push(' ');
            text.push_str(op);
        }
        text
    }

    /// Short lexicon words ("tan", "mean") must not fire inside longer
    /// words ("important", "meaning").
    fn at_word_boundary(haystack: &str, start: usize, end: usize) -> bool {
        let before_ok = haystack[..start]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric());
        let after_ok = haystack[end..]
            .chars()
            .next()
            .map_or(true, |c| !c.is_alphanumeric());
        before_ok && after_ok
    }

    fn structural_signals(record: &QnARecord, out: &mut Vec<Signal>) {
        let expr_hits = MATH_EXPR.find_iter(&record.question).count();
        if expr_hits >= 2 {
            out.push(Signal::domain(Domain::Math, 1.0, "math-expression"));
        }

        let options = record.options();
        let numeric = options
            .iter()
            .filter(|(_, op)| is_numeric_option(op))
            .count();
        if numeric >= 2 && numeric == options.len() {
            out.push(Signal::domain(Domain::Math, 0.75, "numeric-options"));
        }
    }
}

impl Default for LexicalSignalExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl SignalProvider for LexicalSignalExtractor {
    fn signals(&self, record: &QnARecord) -> Vec<Signal> {
        let haystack = Self::haystack(record);
        let mut fired: FxHashSet<usize> = FxHashSet::default();
        let mut signals = Vec::new();

        for m in self.automaton.find_iter(&haystack) {
            if !Self::at_word_boundary(&haystack, m.start(), m.end()) {
                continue;
            }
            // Each cue votes at most once per record.
            if !fired.insert(m.pattern().as_usize()) {
                continue;
            }
            let cue: &CueDef = &CUES[m.pattern().as_usize()];
            signals.push(match cue.leaf {
                Some(leaf) => Signal::leaf(cue.domain, leaf, cue.weight, cue.pattern),
                None => Signal::domain(cue.domain, cue.weight, cue.pattern),
            });
        }

        Self::structural_signals(record, &mut signals);
        signals
    }
}

/// Options like "42", "3.5", "12,500" or "25%" count as numeric.
fn is_numeric_option(op: &str) -> bool {
    let trimmed = op.trim().trim_end_matches('%');
    !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | '-' | '/' | ' '))
}
