//! Safety screen run on the idea before prompt construction.
//!
//! Two layers: a hard blocklist for sexual violence and minors (always
//! enforced, regardless of mode), and a soften map that rewrites plain
//! violent verbs into off-screen phrasings when the mode allows it.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::EngineError;

/// How aggressively to rewrite violent phrasing. Blocking is not optional
/// and applies in every mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SafeMode {
    /// Pass non-blocked text through untouched.
    Off,
    /// Rewrite violent verbs via the soften map.
    #[default]
    Soften,
}

impl fmt::Display for SafeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SafeMode::Off => write!(f, "off"),
            SafeMode::Soften => write!(f, "soften"),
        }
    }
}

impl FromStr for SafeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "off" => Ok(SafeMode::Off),
            "soften" => Ok(SafeMode::Soften),
            other => Err(format!("unknown safe mode '{other}' (expected 'soften' or 'off')")),
        }
    }
}

static DISALLOW_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)\b(non[- ]?consensual|against\s+their\s+will)\b",
        r"(?i)\b(rape|molest|incest|bestiality)\b",
        r"(?i)\b(minor|underage|child)\b.*\b(nude|sexual|explicit)\b",
        r"(?i)\b(sexual)\b.*\b(violence|assault)\b",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid disallow regex"))
    .collect()
});

static SEX_WORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(sex|nsfw|porn|explicit|nude|nudity)\b").expect("valid sex-word regex"));
static VIOLENT_WORD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(drown|kill|murder|stab|shoot|maim|behead|strangle)\b")
        .expect("valid violent-word regex")
});

/// Violent verb to off-screen replacement, matching common inflections.
const SOFTEN_MAP: &[(&str, &str)] = &[
    (r"(?i)\bdrown(s|ed|ing)?\b", "overpower (off-screen, implied)"),
    (r"(?i)\bkill(s|ed|ing)?\b", "neutralize (off-screen, implied)"),
    (r"(?i)\bstab(s|bed|bing)?\b", "threaten (off-screen)"),
    (r"(?i)\bshoot(s|ing)?\b", "aim (off-screen)"),
    (r"(?i)\bblood(y)?\b", "splashing water"),
];

static SOFTEN_RES: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    SOFTEN_MAP
        .iter()
        .map(|(pat, repl)| (Regex::new(pat).expect("valid soften regex"), *repl))
        .collect()
});

/// True if the idea trips the hard blocklist: any sexual term combined with
/// a violent verb, or a disallowed pattern on its own.
pub fn is_blocked(idea: &str) -> bool {
    let text = idea.to_lowercase();
    if SEX_WORD_RE.is_match(&text) && VIOLENT_WORD_RE.is_match(&text) {
        return true;
    }
    DISALLOW_RES.iter().any(|re| re.is_match(&text))
}

/// Rewrites violent verbs into off-screen phrasings.
pub fn soften(text: &str) -> String {
    let mut out = text.to_string();
    for (re, replacement) in SOFTEN_RES.iter() {
        out = re.replace_all(&out, *replacement).into_owned();
    }
    out
}

/// Runs the full screen: blocked input is rejected, everything else passes
/// through the soften map when the mode asks for it.
pub fn screen(idea: &str, mode: SafeMode) -> Result<String, EngineError> {
    if is_blocked(idea) {
        return Err(EngineError::Blocked);
    }
    Ok(match mode {
        SafeMode::Soften => soften(idea),
        SafeMode::Off => idea.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_benign_idea_passes() {
        assert!(!is_blocked("a cat on a rooftop at golden hour"));
    }

    #[test]
    fn test_sex_plus_violence_blocked() {
        assert!(is_blocked("explicit scene where someone drowns"));
        assert!(is_blocked("nsfw murder scene"));
    }

    #[test]
    fn test_disallowed_terms_blocked_alone() {
        assert!(is_blocked("a non-consensual encounter"));
        assert!(is_blocked("NON CONSENSUAL scene"));
    }

    #[test]
    fn test_violence_alone_not_blocked() {
        // Plain violence is softened, not rejected.
        assert!(!is_blocked("warrior kills the dragon"));
    }

    #[test]
    fn test_soften_rewrites_kill_inflections() {
        let out = soften("warrior kills the dragon");
        assert!(!out.contains("kill"), "got: {out}");
        assert!(out.contains("neutralize (off-screen, implied)"));
    }

    #[test]
    fn test_soften_rewrites_blood() {
        assert_eq!(soften("bloody water"), "splashing water water");
    }

    #[test]
    fn test_soften_preserves_benign_text() {
        let idea = "a cat reading a book";
        assert_eq!(soften(idea), idea);
    }

    #[test]
    fn test_screen_off_mode_keeps_text_verbatim() {
        let idea = "warrior kills the dragon";
        assert_eq!(screen(idea, SafeMode::Off).unwrap(), idea);
    }

    #[test]
    fn test_screen_blocks_in_every_mode() {
        assert_eq!(
            screen("nsfw murder scene", SafeMode::Off),
            Err(EngineError::Blocked)
        );
        assert_eq!(
            screen("nsfw murder scene", SafeMode::Soften),
            Err(EngineError::Blocked)
        );
    }

    #[test]
    fn test_safe_mode_from_str() {
        assert_eq!("soften".parse::<SafeMode>().unwrap(), SafeMode::Soften);
        assert_eq!("off".parse::<SafeMode>().unwrap(), SafeMode::Off);
        assert!("strict".parse::<SafeMode>().is_err());
    }

    #[test]
    fn test_safe_mode_default_is_soften() {
        assert_eq!(SafeMode::default(), SafeMode::Soften);
    }
}
