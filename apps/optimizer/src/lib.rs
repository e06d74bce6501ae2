//! Prompt-optimizer core: rewrites a free-text creative idea into
//! model-ready prompt configurations for SDXL, ComfyUI, Midjourney, Pika,
//! and Runway.
//!
//! The pipeline is a straight line: sanitize, safety-screen, extract style
//! categories and subject terms, assemble the positive and negative
//! prompts, then package per backend. Every stage is a synchronous pure
//! function over immutable static tables; there is no I/O, no shared
//! state, and no randomness.

pub mod assemble;
pub mod errors;
pub mod extract;
pub mod models;
pub mod optimizer;
pub mod platforms;
pub mod safety;
pub mod sanitize;
pub mod vocab;

pub use errors::EngineError;
pub use models::{OptimizeRequest, OptimizeResponse, PromptOverrides, UnifiedPrompts, UsageHints};
pub use optimizer::optimize;
pub use safety::SafeMode;
