//! Pika packager: short-clip prompt with fixed motion guidance.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PikaPrompt {
    pub prompt: String,
    pub motion: String,
    pub duration_sec: u32,
    pub guidance: f64,
}

pub fn pika_prompt(positive: &str) -> PikaPrompt {
    PikaPrompt {
        prompt: format!("{positive}, animated micro-details, smooth motion, temporal consistency"),
        motion: "subtle camera push-in, natural parallax, no warping".to_string(),
        duration_sec: 6,
        guidance: 7.0,
    }
}
