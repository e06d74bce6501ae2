//! Prompt assembly: ordered positive-prompt construction and negative-list
//! merging, with order-preserving dedup and a hard length clamp.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::extract::CategoryMatches;
use crate::models::PromptOverrides;
use crate::vocab::NEGATIVE_DEFAULT;

/// Hard ceiling applied to both assembled prompt strings. Past this,
/// prompts degrade generation quality instead of improving it.
pub const MAX_PROMPT_CHARS: usize = 850;

/// Appended when a clamp actually cut something off.
const ELLIPSIS: char = '…';

const QUALITY_CAP: usize = 3;
const SUBJECT_CAP: usize = 5;
const STYLE_CAP: usize = 2;

const QUALITY_FALLBACK: &[&str] = &["masterpiece", "best quality", "highly detailed"];
const SUBJECT_FALLBACK: &str = "primary subject";

static GORE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(blood|gore|splatter|dismember)\b").expect("valid gore regex"));

/// Extra negatives merged in when the idea leans gory.
const GORE_NEGATIVES: &[&str] = &["blood", "gore", "splatter", "wound", "injury"];

/// Removes duplicate terms while preserving first-occurrence order.
/// Terms are trimmed; empties are dropped. Matching is case-sensitive
/// exact comparison.
pub fn dedup_preserve<I, S>(terms: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = std::collections::HashSet::new();
    let mut out = Vec::new();
    for term in terms {
        let term = term.as_ref().trim();
        if term.is_empty() {
            continue;
        }
        if seen.insert(term.to_string()) {
            out.push(term.to_string());
        }
    }
    out
}

/// Hard character slice at `max_chars` with an ellipsis appended when the
/// cut happens. Deliberately ignores word boundaries.
pub fn clamp_chars(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max_chars).collect();
    out.push(ELLIPSIS);
    out
}

/// Splits a raw comma-separated override string into trimmed terms.
fn split_terms(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}

fn override_terms(value: Option<&str>) -> Option<Vec<String>> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Some(split_terms(v)),
        _ => None,
    }
}

/// Builds the positive prompt in the fixed section order:
/// quality, subject, style, lighting, composition, mood, color grade,
/// extra tags. Empty sections are omitted; the final term list is
/// deduplicated globally and clamped.
pub fn build_positive(
    matches: &CategoryMatches,
    subject_terms: &[String],
    overrides: &PromptOverrides,
) -> String {
    let mut terms: Vec<String> = Vec::new();

    // Quality, with a fixed fallback when nothing matched.
    let quality = dedup_preserve(matches.quality.iter().take(QUALITY_CAP));
    if quality.is_empty() {
        terms.extend(QUALITY_FALLBACK.iter().map(|t| t.to_string()));
    } else {
        terms.extend(quality);
    }

    // Subject.
    if subject_terms.is_empty() {
        terms.push(SUBJECT_FALLBACK.to_string());
    } else {
        terms.extend(subject_terms.iter().take(SUBJECT_CAP).cloned());
    }

    // Style: art styles then photography.
    terms.extend(matches.art_styles.iter().take(STYLE_CAP).map(|t| t.to_string()));
    terms.extend(matches.photography.iter().take(STYLE_CAP).map(|t| t.to_string()));

    // Lighting: caller override wins over matched terms.
    match override_terms(overrides.lighting.as_deref()) {
        Some(lighting) => terms.extend(lighting),
        None => terms.extend(matches.lighting.iter().take(STYLE_CAP).map(|t| t.to_string())),
    }

    terms.extend(matches.composition.iter().take(STYLE_CAP).map(|t| t.to_string()));
    terms.extend(matches.mood.iter().take(STYLE_CAP).map(|t| t.to_string()));

    // Color grade: same override-priority rule as lighting.
    match override_terms(overrides.color_grade.as_deref()) {
        Some(grade) => terms.extend(grade),
        None => terms.extend(matches.color_grades.iter().take(STYLE_CAP).map(|t| t.to_string())),
    }

    // Extra tags always land last.
    if let Some(extra) = override_terms(overrides.extra_tags.as_deref()) {
        terms.extend(extra);
    }

    clamp_chars(&dedup_preserve(terms).join(", "), MAX_PROMPT_CHARS)
}

/// Merges the static negative defaults, gore terms when the idea calls for
/// them, and the user's comma-separated additions.
pub fn build_negative(idea: &str, user_negative: Option<&str>) -> String {
    let mut terms: Vec<String> = NEGATIVE_DEFAULT.iter().map(|t| t.to_string()).collect();

    if GORE_RE.is_match(&idea.to_lowercase()) {
        terms.extend(GORE_NEGATIVES.iter().map(|t| t.to_string()));
    }

    if let Some(user) = user_negative {
        terms.extend(split_terms(user));
    }

    clamp_chars(&dedup_preserve(terms).join(", "), MAX_PROMPT_CHARS)
}
