//! Category extraction: buckets known style phrases and pulls subject terms
//! out of free-form idea text.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::vocab::{StyleCategory, ALL_STYLE_KEYWORDS, STOPWORDS};

static TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z0-9\-+/#']+").expect("valid token regex"));

/// Subject tokens shorter than this are dropped as noise.
const MIN_SUBJECT_LEN: usize = 3;

/// Ordered style-phrase hits per bucket. Order within each bucket follows
/// the static table, so the per-section caps keep the highest-priority
/// phrases.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryMatches {
    pub quality: Vec<&'static str>,
    pub art_styles: Vec<&'static str>,
    pub photography: Vec<&'static str>,
    pub lighting: Vec<&'static str>,
    pub composition: Vec<&'static str>,
    pub mood: Vec<&'static str>,
    pub color_grades: Vec<&'static str>,
}

impl CategoryMatches {
    fn bucket_mut(&mut self, category: StyleCategory) -> &mut Vec<&'static str> {
        match category {
            StyleCategory::Quality => &mut self.quality,
            StyleCategory::ArtStyles => &mut self.art_styles,
            StyleCategory::Photography => &mut self.photography,
            StyleCategory::Lighting => &mut self.lighting,
            StyleCategory::Composition => &mut self.composition,
            StyleCategory::Mood => &mut self.mood,
            StyleCategory::ColorGrades => &mut self.color_grades,
        }
    }
}

/// Output of extraction: bucketed style hits plus the leftover subject terms.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extraction {
    pub matches: CategoryMatches,
    /// Lowercased, deduplicated, in first-occurrence order.
    pub subject_terms: Vec<String>,
}

/// Extracts style-category hits and subject terms from the idea text.
///
/// Style detection is case-insensitive substring containment against each
/// bucket's phrase list. A subject term is any remaining token that is not
/// a stopword, not a style keyword, not a constituent word of a style
/// phrase matched in this text, not purely numeric, and at least
/// `MIN_SUBJECT_LEN` chars long.
pub fn extract_categories(idea: &str) -> Extraction {
    let text = idea.to_lowercase();

    let mut matches = CategoryMatches::default();
    // Words belonging to matched phrases, e.g. "golden"/"hour" once
    // "golden hour" hits. Keeping them out of the subject pool stops a
    // style phrase from leaking back in as subject fragments.
    let mut matched_words: HashSet<&str> = HashSet::new();
    for category in StyleCategory::ALL {
        for &phrase in category.phrases() {
            if text.contains(phrase) {
                matches.bucket_mut(category).push(phrase);
                matched_words.extend(phrase.split_whitespace());
            }
        }
    }

    let mut subject_terms = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();
    for token in TOKEN_RE.find_iter(&text).map(|m| m.as_str()) {
        if token.len() < MIN_SUBJECT_LEN
            || STOPWORDS.contains(token)
            || ALL_STYLE_KEYWORDS.contains(token)
            || matched_words.contains(token)
            || token.chars().all(|c| c.is_ascii_digit())
        {
            continue;
        }
        if seen.insert(token) {
            subject_terms.push(token.to_string());
        }
    }

    Extraction {
        matches,
        subject_terms,
    }
}
