//! The two-section bulleted explanation structure.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Heading of Section 1 (why the answer is correct).
pub const EXPLANATION_HEADING: &str = "Explanation";
/// Heading of Section 2 (why the other options fail).
pub const REBUTTAL_HEADING: &str = "Why the other options are wrong";

/// Structured explanation content: two ordered bullet sections.
///
/// Section 1 explains the correct answer (3-5 bullets, workflow-dependent),
/// Section 2 rebuts the incorrect options (2-3 bullets; exactly 1 for
/// two-option records). Bounds are enforced by the formatter, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentBlock {
    /// Section 1: why the correct answer is correct.
    pub explanation: SmallVec<[String; 5]>,
    /// Section 2: why the remaining options fail.
    pub rebuttals: SmallVec<[String; 3]>,
}

impl ContentBlock {
    /// Serialize to the fixed two-`<h3>`/two-`<ul>` markup skeleton.
    /// No wrapping elements; embedded quotes are escaped by JSON
    /// serialization when the string is emitted inside an `ExtraUpdate`.
    pub fn render(&self) -> String {
        let mut out = String::new();
        render_section(&mut out, EXPLANATION_HEADING, &self.explanation);
        render_section(&mut out, REBUTTAL_HEADING, &self.rebuttals);
        out
    }
}

fn render_section(out: &mut String, heading: &str, bullets: &[String]) {
    out.push_str("<h3>");
    out.push_str(heading);
    out.push_str("</h3><ul>");
    for bullet in bullets {
        out.push_str("<li>");
        out.push_str(bullet);
        out.push_str("</li>");
    }
    out.push_str("</ul>");
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn test_render_skeleton() {
        let block = ContentBlock {
            explanation: smallvec!["one".to_string(), "two".to_string()],
            rebuttals: smallvec!["three".to_string()],
        };
        let html = block.render();
        assert_eq!(
            html,
            "<h3>Explanation</h3><ul><li>one</li><li>two</li></ul>\
             <h3>Why the other options are wrong</h3><ul><li>three</li></ul>"
        );
    }

    #[test]
    fn test_render_has_exactly_two_sections() {
        let block = ContentBlock {
            explanation: smallvec!["a".to_string()],
            rebuttals: smallvec!["b".to_string()],
        };
        let html = block.render();
        assert_eq!(html.matches("<h3>").count(), 2);
        assert_eq!(html.matches("<ul>").count(), 2);
        assert_eq!(html.matches("</ul>").count(), 2);
    }
}
