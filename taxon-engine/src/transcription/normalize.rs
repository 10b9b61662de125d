//! Text normalization for transcribed fields.

use once_cell::sync::Lazy;
use regex::Regex;

/// Bare exponent like `x^2` or `10^-3`, outside math delimiters.
static BARE_EXPONENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Za-z0-9]+\^-?[A-Za-z0-9]+").expect("static regex"));

/// Bare radical like `√2` or `√ 144`.
static BARE_RADICAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"√\s*[A-Za-z0-9]+").expect("static regex"));

/// Replace raw newlines with the inline break marker.
pub fn normalize_linebreaks(text: &str) -> String {
    text.replace("\r\n", "<br>").replace('\n', "<br>")
}

/// Collapse doubled break markers down to one.
pub fn collapse_breaks(text: &str) -> String {
    let mut out = text.to_string();
    while out.contains("<br><br>") {
        out = out.replace("<br><br>", "<br>");
    }
    out
}

/// Swap the transcriber's `<image content>` marker for real image markup.
pub fn replace_image_placeholder(text: &str, placeholder: &str) -> String {
    text.replace("<image content>", placeholder)
}

/// Wrap unambiguous bare math (exponents, radicals) in `$...$` delimiters.
///
/// Fields that already carry any `$` delimiter are left alone: partial
/// delimiting cannot be repaired mechanically without risking nesting.
pub fn wrap_bare_math(text: &str) -> String {
    if text.contains('$') {
        return text.to_string();
    }
    let wrapped = BARE_EXPONENT.replace_all(text, "$$${0}$$");
    BARE_RADICAL.replace_all(&wrapped, "$$${0}$$").into_owned()
}

/// True when every table-related tag in the text has a matching closer.
pub fn tables_balanced(text: &str) -> bool {
    for tag in ["table", "tr", "td", "th"] {
        let opens = count_tag_opens(text, tag);
        let closes = text.matches(&format!("</{tag}>")).count();
        if opens != closes {
            return false;
        }
    }
    true
}

/// Count `<tag>` / `<tag ...>` openers without counting `<table>` as `<t>`.
fn count_tag_opens(text: &str, tag: &str) -> usize {
    let exact = format!("<{tag}>");
    let with_attrs = format!("<{tag} ");
    text.matches(&exact).count() + text.matches(&with_attrs).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linebreaks_become_markers() {
        assert_eq!(normalize_linebreaks("a\nb\r\nc"), "a<br>b<br>c");
    }

    #[test]
    fn test_doubled_breaks_collapse() {
        assert_eq!(collapse_breaks("a<br><br>b"), "a<br>b");
        assert_eq!(collapse_breaks("a<br><br><br>b"), "a<br>b");
    }

    #[test]
    fn test_image_placeholder_replaced() {
        assert_eq!(
            replace_image_placeholder("see <image content> here", "<img>"),
            "see <img> here"
        );
    }

    #[test]
    fn test_bare_exponent_wrapped() {
        assert_eq!(wrap_bare_math("Solve x^2 today"), "Solve $x^2$ today");
    }

    #[test]
    fn test_bare_radical_wrapped() {
        assert_eq!(wrap_bare_math("Find √144 now"), "Find $√144$ now");
    }

    #[test]
    fn test_existing_delimiters_left_alone() {
        let text = "Already $x^2$ delimited and x^3 beside it";
        assert_eq!(wrap_bare_math(text), text);
    }

    #[test]
    fn test_table_balance() {
        assert!(tables_balanced("<table><tr><td>1</td></tr></table>"));
        assert!(!tables_balanced("<table><tr><td>1</td></tr>"));
        assert!(tables_balanced("no tables here"));
        assert!(tables_balanced(r#"<table border="1"><tr><td>x</td></tr></table>"#));
    }
}
