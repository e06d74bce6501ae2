//! Runway packager: text prompt plus fixed camera-motion parameters.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunwayPrompt {
    pub text_prompt: String,
    pub camera_motion: String,
    pub motion_strength: String,
    pub duration_sec: u32,
    pub notes: String,
}

pub fn runway_prompt(positive: &str) -> RunwayPrompt {
    RunwayPrompt {
        text_prompt: positive.to_string(),
        camera_motion: "push_in".to_string(),
        motion_strength: "medium".to_string(),
        duration_sec: 5,
        notes: "Keep subject centrally framed to reduce morphing.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_prompt_passed_through_unmodified() {
        let packaged = runway_prompt("a cat, 8k");
        // Unlike Midjourney, no compatibility rewriting happens here.
        assert_eq!(packaged.text_prompt, "a cat, 8k");
    }

    #[test]
    fn test_fixed_parameters() {
        let packaged = runway_prompt("a cat");
        assert_eq!(packaged.camera_motion, "push_in");
        assert_eq!(packaged.motion_strength, "medium");
        assert_eq!(packaged.duration_sec, 5);
        assert!(packaged.notes.contains("centrally framed"));
    }
}
