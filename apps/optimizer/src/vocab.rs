//! Static vocabulary tables the pipeline matches against.
//!
//! Everything here is read-only and initialized once. The phrase lists are
//! ordered: match output preserves each list's order, so reordering an
//! entry changes which terms survive the per-section caps.

use std::collections::HashSet;

use once_cell::sync::Lazy;

/// The seven style buckets, in the order their tables are declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleCategory {
    Quality,
    ArtStyles,
    Photography,
    Lighting,
    Composition,
    Mood,
    ColorGrades,
}

impl StyleCategory {
    pub const ALL: [StyleCategory; 7] = [
        StyleCategory::Quality,
        StyleCategory::ArtStyles,
        StyleCategory::Photography,
        StyleCategory::Lighting,
        StyleCategory::Composition,
        StyleCategory::Mood,
        StyleCategory::ColorGrades,
    ];

    /// Known phrases for this bucket, in match-priority order.
    pub fn phrases(self) -> &'static [&'static str] {
        match self {
            StyleCategory::Quality => QUALITY,
            StyleCategory::ArtStyles => ART_STYLES,
            StyleCategory::Photography => PHOTOGRAPHY,
            StyleCategory::Lighting => LIGHTING,
            StyleCategory::Composition => COMPOSITION,
            StyleCategory::Mood => MOOD,
            StyleCategory::ColorGrades => COLOR_GRADES,
        }
    }
}

const QUALITY: &[&str] = &[
    "masterpiece",
    "best quality",
    "ultra high detail",
    "8k",
    "4k",
    "highres",
    "ultra detailed",
    "extremely detailed",
    "intricate",
    "sharp focus",
    "professional",
];

const ART_STYLES: &[&str] = &[
    "photorealistic",
    "hyperrealistic",
    "cinematic",
    "digital art",
    "oil painting",
    "watercolor",
    "anime",
    "manga",
    "concept art",
    "impressionist",
    "baroque",
    "renaissance",
    "art nouveau",
    "cyberpunk",
    "steampunk",
    "minimalist",
];

const PHOTOGRAPHY: &[&str] = &[
    "bokeh",
    "depth of field",
    "macro",
    "wide angle",
    "telephoto",
    "portrait",
    "landscape",
    "street photography",
    "documentary",
    "fashion photography",
];

const LIGHTING: &[&str] = &[
    "soft lighting",
    "hard lighting",
    "natural lighting",
    "studio lighting",
    "golden hour",
    "blue hour",
    "backlighting",
    "rim lighting",
    "volumetric lighting",
    "chiaroscuro",
];

const COMPOSITION: &[&str] = &[
    "rule of thirds",
    "centered",
    "symmetrical",
    "leading lines",
    "framing",
    "negative space",
    "close-up",
    "medium shot",
    "wide shot",
    "bird's eye view",
    "worm's eye view",
];

const MOOD: &[&str] = &[
    "moody",
    "dramatic",
    "serene",
    "melancholic",
    "uplifting",
    "mysterious",
    "romantic",
    "energetic",
    "peaceful",
    "tense",
    "nostalgic",
    "futuristic",
];

const COLOR_GRADES: &[&str] = &[
    "vibrant",
    "desaturated",
    "monochrome",
    "sepia",
    "teal and orange",
    "warm tones",
    "cool tones",
    "high contrast",
    "low contrast",
    "film grain",
];

/// Default negative terms covering anatomy, artifacts, branding, and style
/// pitfalls. The list accumulated repeats over time; the merger deduplicates,
/// so they are kept as-is rather than hand-pruned.
pub const NEGATIVE_DEFAULT: &[&str] = &[
    "lowres",
    "bad anatomy",
    "bad hands",
    "text",
    "error",
    "missing fingers",
    "extra digit",
    "fewer digits",
    "cropped",
    "worst quality",
    "low quality",
    "normal quality",
    "jpeg artifacts",
    "signature",
    "watermark",
    "username",
    "blurry",
    "bad feet",
    "cropped",
    "poorly drawn hands",
    "poorly drawn face",
    "mutation",
    "deformed",
    "worst quality",
    "low quality",
    "normal quality",
    "jpeg artifacts",
    "signature",
    "watermark",
    "extra fingers",
    "fewer digits",
    "extra limbs",
    "extra arms",
    "extra legs",
    "malformed limbs",
    "fused fingers",
    "too many fingers",
    "long neck",
    "cross-eyed",
    "mutated hands",
    "polar lowres",
    "bad body",
    "bad proportions",
    "gross proportions",
    "text",
    "error",
    "missing fingers",
    "missing arms",
    "missing legs",
    "extra digit",
    "extra arms",
    "extra leg",
    "extra foot",
];

/// Function words excluded from subject-term extraction.
pub static STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "a", "an", "the", "of", "and", "to", "in", "on", "at", "by", "for", "with", "from",
        "into", "over", "under", "between", "is", "are", "was", "were", "be", "been", "being",
        "do", "does", "did", "have", "has", "had", "can", "will", "would", "should", "this",
        "that", "these", "those", "as", "if", "then", "than", "so", "such", "very", "really",
        "just", "it", "its", "it's",
    ]
    .into_iter()
    .collect()
});

/// Every style phrase across all categories. Keeps recognized style terms
/// out of the subject pool.
pub static ALL_STYLE_KEYWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    StyleCategory::ALL
        .iter()
        .flat_map(|c| c.phrases().iter().copied())
        .collect()
});

/// Pixel resolution for an aspect-ratio label. Unknown labels fall back to
/// square rather than erroring.
pub fn resolve_resolution(aspect_ratio: &str) -> (u32, u32) {
    match aspect_ratio {
        "1:1" => (1024, 1024),
        "16:9" => (1344, 768),
        "9:16" => (768, 1344),
        "2:3" => (832, 1216),
        "3:2" => (1216, 832),
        _ => (1024, 1024),
    }
}
