//! ComfyUI packager: node parameter hints for a basic SDXL graph plus
//! static execution tips.

use serde::{Deserialize, Serialize};

use crate::vocab::resolve_resolution;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KSamplerHint {
    pub steps: u32,
    pub cfg: f64,
    pub sampler_name: String,
    pub scheduler: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmptyLatentImageHint {
    pub width: u32,
    pub height: u32,
    pub batch_size: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckpointHint {
    pub ckpt_name: String,
}

/// Keyed by ComfyUI node class names so the hint block can be read against
/// a workflow graph directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodesHint {
    #[serde(rename = "KSampler")]
    pub k_sampler: KSamplerHint,
    #[serde(rename = "EmptyLatentImage")]
    pub empty_latent_image: EmptyLatentImageHint,
    #[serde(rename = "CheckpointLoaderSimple")]
    pub checkpoint_loader: CheckpointHint,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComfyUiRecipe {
    pub positive: String,
    pub negative: String,
    pub nodes_hint: NodesHint,
    pub execution_tips: Vec<String>,
}

pub fn comfyui_recipe(positive: &str, negative: &str, aspect_ratio: &str) -> ComfyUiRecipe {
    let (width, height) = resolve_resolution(aspect_ratio);
    ComfyUiRecipe {
        positive: positive.to_string(),
        negative: negative.to_string(),
        nodes_hint: NodesHint {
            k_sampler: KSamplerHint {
                steps: 25,
                cfg: 7.0,
                sampler_name: "dpmpp_2m".to_string(),
                scheduler: "karras".to_string(),
            },
            empty_latent_image: EmptyLatentImageHint {
                width,
                height,
                batch_size: 1,
            },
            checkpoint_loader: CheckpointHint {
                ckpt_name: "sd_xl_base_1.0.safetensors".to_string(),
            },
        },
        execution_tips: vec![
            "Use SDXL base model for best results".to_string(),
            "Enable 'Tiled VAE' if getting VRAM errors".to_string(),
            "Consider refiner model for final 20% of steps".to_string(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipe_carries_resolution_and_sampler() {
        let recipe = comfyui_recipe("a cat", "lowres", "9:16");
        assert_eq!(recipe.nodes_hint.empty_latent_image.width, 768);
        assert_eq!(recipe.nodes_hint.empty_latent_image.height, 1344);
        assert_eq!(recipe.nodes_hint.empty_latent_image.batch_size, 1);
        assert_eq!(recipe.nodes_hint.k_sampler.sampler_name, "dpmpp_2m");
        assert_eq!(recipe.nodes_hint.k_sampler.scheduler, "karras");
        assert_eq!(recipe.execution_tips.len(), 3);
    }

    #[test]
    fn test_nodes_hint_serializes_with_node_class_keys() {
        let value = serde_json::to_value(comfyui_recipe("a cat", "lowres", "1:1")).unwrap();
        assert!(value["nodes_hint"]["KSampler"].is_object());
        assert!(value["nodes_hint"]["EmptyLatentImage"].is_object());
        assert_eq!(
            value["nodes_hint"]["CheckpointLoaderSimple"]["ckpt_name"],
            "sd_xl_base_1.0.safetensors"
        );
    }
}
