//! Pipeline orchestration: sanitize, screen, extract, assemble, package.
//!
//! One synchronous pass per request over immutable static tables. Given
//! identical input the output is byte-identical; nothing here reads a
//! clock or a RNG.

use tracing::debug;

use crate::assemble::{build_negative, build_positive};
use crate::errors::EngineError;
use crate::extract::extract_categories;
use crate::models::{OptimizeRequest, OptimizeResponse, UnifiedPrompts, UsageHints};
use crate::platforms::{comfyui_recipe, midjourney_prompt, pika_prompt, runway_prompt, sdxl_prompt};
use crate::safety::screen;
use crate::sanitize::{clamp_words, clean_whitespace, MAX_IDEA_WORDS};

/// Ratio label assumed when the caller supplies none.
pub const DEFAULT_ASPECT_RATIO: &str = "1:1";

/// Runs the full pipeline for one request.
///
/// The only error outcomes are an empty idea and a safety-screen
/// rejection; every later stage is total.
pub fn optimize(request: &OptimizeRequest) -> Result<OptimizeResponse, EngineError> {
    let idea = clean_whitespace(&request.idea);
    if idea.is_empty() {
        return Err(EngineError::EmptyIdea);
    }

    let screened = screen(&idea, request.safe_mode)?;
    let idea = clean_whitespace(&clamp_words(&screened, MAX_IDEA_WORDS));

    let extraction = extract_categories(&idea);
    debug!(
        subjects = extraction.subject_terms.len(),
        quality = extraction.matches.quality.len(),
        "extracted categories"
    );

    let positive = build_positive(&extraction.matches, &extraction.subject_terms, &request.overrides);
    let negative = build_negative(&idea, request.negative.as_deref());
    let aspect_ratio = request
        .aspect_ratio
        .as_deref()
        .map(str::trim)
        .filter(|ar| !ar.is_empty())
        .unwrap_or(DEFAULT_ASPECT_RATIO);

    Ok(OptimizeResponse {
        unified: UnifiedPrompts {
            positive: positive.clone(),
            negative: negative.clone(),
        },
        sdxl: sdxl_prompt(&positive, &negative, aspect_ratio),
        comfyui: comfyui_recipe(&positive, &negative, aspect_ratio),
        midjourney: midjourney_prompt(&positive, aspect_ratio),
        pika: pika_prompt(&positive),
        runway: runway_prompt(&positive),
        hints: UsageHints::default(),
    })
}
