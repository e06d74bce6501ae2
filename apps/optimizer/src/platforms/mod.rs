//! Per-backend prompt packagers.
//!
//! Each packager is deterministic formatting over the assembled prompts;
//! failure modes live upstream in the pipeline.

pub mod comfyui;
pub mod midjourney;
pub mod pika;
pub mod runway;
pub mod sdxl;

pub use comfyui::{comfyui_recipe, ComfyUiRecipe};
pub use midjourney::midjourney_prompt;
pub use pika::{pika_prompt, PikaPrompt};
pub use runway::{runway_prompt, RunwayPrompt};
pub use sdxl::{sdxl_prompt, SdxlPrompt};
