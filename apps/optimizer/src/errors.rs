use thiserror::Error;

/// Errors surfaced to the boundary layer.
///
/// These are the only failure modes in the pipeline; everything downstream
/// of input screening is a total function (unknown aspect ratios default,
/// empty categories fall back, long output truncates).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("idea text must not be empty")]
    EmptyIdea,

    #[error("idea rejected: sexual violence or minors with explicit content")]
    Blocked,
}
