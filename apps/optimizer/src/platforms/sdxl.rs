//! SDXL packager: prompts plus a ready-to-use sampler settings block.

use serde::{Deserialize, Serialize};

use crate::vocab::resolve_resolution;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SdxlSettings {
    pub width: u32,
    pub height: u32,
    pub steps: u32,
    pub cfg_scale: f64,
    /// -1 asks the backend to randomize.
    pub seed: i64,
    pub sampler: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SdxlPrompt {
    pub positive: String,
    pub negative: String,
    pub settings: SdxlSettings,
}

pub fn sdxl_prompt(positive: &str, negative: &str, aspect_ratio: &str) -> SdxlPrompt {
    let (width, height) = resolve_resolution(aspect_ratio);
    SdxlPrompt {
        positive: positive.to_string(),
        negative: negative.to_string(),
        settings: SdxlSettings {
            width,
            height,
            steps: 25,
            cfg_scale: 7.0,
            seed: -1,
            sampler: "DPM++ 2M Karras".to_string(),
        },
    }
}
