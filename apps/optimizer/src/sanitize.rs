//! Input sanitation applied to the idea text before extraction.

use once_cell::sync::Lazy;
use regex::Regex;

/// Word-count ceiling for the idea text. Anything past this is noise that
/// only degrades the assembled prompt.
pub const MAX_IDEA_WORDS: usize = 160;

static WHITESPACE_RUN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));
static SPACE_BEFORE_COMMA_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+,").expect("valid comma-spacing regex"));
static EMPTY_COMMA_SLOT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r",\s*,").expect("valid empty-slot regex"));

/// Normalizes whitespace: newlines become spaces, runs collapse to one
/// space, and stray commas left by sloppy form input are repaired.
pub fn clean_whitespace(text: &str) -> String {
    let flattened = text.replace('\n', " ");
    let trimmed = flattened.trim();
    let collapsed = WHITESPACE_RUN_RE.replace_all(trimmed, " ");
    let no_dangling = SPACE_BEFORE_COMMA_RE.replace_all(&collapsed, ",");
    let repaired = EMPTY_COMMA_SLOT_RE.replace_all(&no_dangling, ", ");
    repaired.into_owned()
}

/// Keeps the first `max_words` whitespace-separated words.
pub fn clamp_words(text: &str, max_words: usize) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() <= max_words {
        return text.to_string();
    }
    words[..max_words].join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newlines_and_runs_collapse() {
        assert_eq!(
            clean_whitespace("a cat\n  on a\t\trooftop"),
            "a cat on a rooftop"
        );
    }

    #[test]
    fn test_leading_and_trailing_whitespace_trimmed() {
        assert_eq!(clean_whitespace("   cat   "), "cat");
    }

    #[test]
    fn test_space_before_comma_repaired() {
        assert_eq!(clean_whitespace("cat , rooftop"), "cat, rooftop");
    }

    #[test]
    fn test_empty_comma_slot_repaired() {
        assert_eq!(clean_whitespace("cat,, rooftop"), "cat, rooftop");
        assert_eq!(clean_whitespace("cat, , rooftop"), "cat, rooftop");
    }

    #[test]
    fn test_empty_input_stays_empty() {
        assert_eq!(clean_whitespace(""), "");
        assert_eq!(clean_whitespace("  \n  "), "");
    }

    #[test]
    fn test_clamp_words_under_limit_unchanged() {
        assert_eq!(clamp_words("one two three", 160), "one two three");
    }

    #[test]
    fn test_clamp_words_cuts_at_limit() {
        let long: Vec<String> = (0..200).map(|i| format!("word{i}")).collect();
        let clamped = clamp_words(&long.join(" "), MAX_IDEA_WORDS);
        assert_eq!(clamped.split_whitespace().count(), MAX_IDEA_WORDS);
        assert!(clamped.ends_with("word159"));
    }
}
