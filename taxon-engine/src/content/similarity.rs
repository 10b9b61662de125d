//! Word-set similarity for duplicate-bullet suppression.

use rustc_hash::FxHashSet;

/// Normalize text into a lowercase word set: punctuation stripped,
/// whitespace-split.
fn word_set(text: &str) -> FxHashSet<String> {
    text.split_whitespace()
        .map(|w| {
            w.chars()
                .filter(|c| c.is_alphanumeric())
                .collect::<String>()
                .to_lowercase()
        })
        .filter(|w| !w.is_empty())
        .collect()
}

/// Jaccard similarity of the two texts' word sets, in [0, 1].
pub fn jaccard(a: &str, b: &str) -> f64 {
    let set_a = word_set(a);
    let set_b = word_set(b);
    if set_a.is_empty() && set_b.is_empty() {
        return 1.0;
    }
    if set_a.is_empty() || set_b.is_empty() {
        return 0.0;
    }
    let intersection = set_a.intersection(&set_b).count();
    let union = set_a.len() + set_b.len() - intersection;
    intersection as f64 / union as f64
}

/// True when `bullet` is close enough to `reference` to count as a repeat:
/// Jaccard at or above the threshold, or one word set containing the other.
pub fn is_repeat(bullet: &str, reference: &str, threshold: f64) -> bool {
    let set_b = word_set(bullet);
    let set_r = word_set(reference);
    if set_b.is_empty() || set_r.is_empty() {
        return false;
    }
    let intersection = set_b.intersection(&set_r).count();
    if intersection == set_b.len() || intersection == set_r.len() {
        return true;
    }
    let union = set_b.len() + set_r.len() - intersection;
    (intersection as f64 / union as f64) >= threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_texts_score_one() {
        assert_eq!(jaccard("look before you leap", "look before you leap"), 1.0);
    }

    #[test]
    fn test_disjoint_texts_score_zero() {
        assert_eq!(jaccard("alpha beta", "gamma delta"), 0.0);
    }

    #[test]
    fn test_case_and_punctuation_insensitive() {
        assert_eq!(jaccard("Look, before you LEAP!", "look before you leap"), 1.0);
    }

    #[test]
    fn test_containment_counts_as_repeat() {
        assert!(is_repeat(
            "look before you leap",
            "the answer is look before you leap",
            0.8
        ));
    }

    #[test]
    fn test_unrelated_bullet_is_not_a_repeat() {
        assert!(!is_repeat(
            "haste makes waste describes rushing",
            "look before you leap",
            0.8
        ));
    }
}
