//! Request and response types for the optimizer pipeline.
//!
//! Field names follow the JSON document the boundary layer emits, so the
//! serialized response is the wire format directly.

use serde::{Deserialize, Serialize};

use crate::platforms::{ComfyUiRecipe, PikaPrompt, RunwayPrompt, SdxlPrompt};
use crate::safety::SafeMode;

/// Per-request override strings. Lighting and color grade take priority
/// over matched terms; extra tags are always appended last.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PromptOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lighting: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_grade: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_tags: Option<String>,
}

/// One optimization request. Everything except `idea` is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OptimizeRequest {
    pub idea: String,
    /// Comma-separated additions to the negative prompt.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub negative: Option<String>,
    /// One of the known ratio labels; anything else resolves to square.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<String>,
    #[serde(flatten)]
    pub overrides: PromptOverrides,
    #[serde(default)]
    pub safe_mode: SafeMode,
}

/// The shared positive/negative pair every packager starts from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnifiedPrompts {
    pub positive: String,
    pub negative: String,
}

/// Static advisory strings returned with every response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageHints {
    pub faces: String,
    pub motion: String,
    pub busy: String,
}

impl Default for UsageHints {
    fn default() -> Self {
        Self {
            faces: "For better faces: Add 'portrait, detailed face, sharp focus' and avoid 'bad anatomy' in negative".to_string(),
            motion: "For video: Use motion cues like 'gentle camera movement' but avoid 'warping, morphing'".to_string(),
            busy: "If output is too busy: Reduce adjectives and focus on 1-2 key elements".to_string(),
        }
    }
}

/// The combined response document: unified prompts plus one packaged
/// configuration per supported backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizeResponse {
    pub unified: UnifiedPrompts,
    pub sdxl: SdxlPrompt,
    pub comfyui: ComfyUiRecipe,
    /// Midjourney takes a single formatted command string.
    pub midjourney: String,
    pub pika: PikaPrompt,
    pub runway: RunwayPrompt,
    pub hints: UsageHints,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_deserializes_from_flat_json() {
        let json = r#"{
            "idea": "a cat on a rooftop",
            "negative": "fog",
            "aspect_ratio": "16:9",
            "lighting": "rim light",
            "extra_tags": "sharp"
        }"#;
        let request: OptimizeRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.idea, "a cat on a rooftop");
        assert_eq!(request.negative.as_deref(), Some("fog"));
        assert_eq!(request.aspect_ratio.as_deref(), Some("16:9"));
        assert_eq!(request.overrides.lighting.as_deref(), Some("rim light"));
        assert_eq!(request.overrides.color_grade, None);
        assert_eq!(request.overrides.extra_tags.as_deref(), Some("sharp"));
        assert_eq!(request.safe_mode, SafeMode::Soften);
    }

    #[test]
    fn test_request_minimal_json_defaults() {
        let request: OptimizeRequest = serde_json::from_str(r#"{"idea": "a cat"}"#).unwrap();
        assert_eq!(request.negative, None);
        assert_eq!(request.aspect_ratio, None);
        assert_eq!(request.overrides, PromptOverrides::default());
    }

    #[test]
    fn test_safe_mode_deserializes_lowercase() {
        let request: OptimizeRequest =
            serde_json::from_str(r#"{"idea": "a cat", "safe_mode": "off"}"#).unwrap();
        assert_eq!(request.safe_mode, SafeMode::Off);
    }

    #[test]
    fn test_hints_default_content() {
        let hints = UsageHints::default();
        assert!(hints.faces.contains("detailed face"));
        assert!(hints.motion.contains("warping, morphing"));
        assert!(hints.busy.contains("1-2 key elements"));
    }
}
