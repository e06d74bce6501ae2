//! Midjourney packager: a single v6 command string.

/// Formats the Midjourney command. "8k" is not a recognized Midjourney
/// term, so it is rewritten to "ultra high detail" before the flags are
/// appended. The ratio label is passed through verbatim.
pub fn midjourney_prompt(positive: &str, aspect_ratio: &str) -> String {
    let compatible = positive.replace("8k", "ultra high detail");
    format!("{compatible} --v 6 --ar {aspect_ratio} --stylize 200 --chaos 5")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_appended_in_fixed_order() {
        let command = midjourney_prompt("a cat", "16:9");
        assert_eq!(command, "a cat --v 6 --ar 16:9 --stylize 200 --chaos 5");
    }

    #[test]
    fn test_8k_rewritten_before_flags() {
        let command = midjourney_prompt("masterpiece, 8k, a cat", "1:1");
        assert!(command.starts_with("masterpiece, ultra high detail, a cat"));
        assert!(!command.contains("8k"));
        assert!(command.ends_with("--v 6 --ar 1:1 --stylize 200 --chaos 5"));
    }

    #[test]
    fn test_8k_rewritten_everywhere_it_appears() {
        let command = midjourney_prompt("8k render, 8k textures", "1:1");
        assert_eq!(command.matches("ultra high detail").count(), 2);
    }
}
