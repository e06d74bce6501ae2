use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use prompt_optimizer::{optimize, OptimizeRequest, PromptOverrides, SafeMode};

/// Rewrites a creative idea into model-ready prompt configurations and
/// prints the combined JSON document to stdout.
#[derive(Parser, Debug)]
#[command(name = "optimizer", version)]
struct Cli {
    /// Free-text description of the desired image or clip
    idea: String,

    /// Comma-separated terms to add to the negative prompt
    #[arg(long)]
    negative: Option<String>,

    /// Aspect ratio label (1:1, 16:9, 9:16, 2:3, 3:2); unknown labels
    /// resolve to the square resolution
    #[arg(long, default_value = "1:1")]
    aspect_ratio: String,

    /// Lighting terms, overriding any matched in the idea
    #[arg(long)]
    lighting: Option<String>,

    /// Color-grade terms, overriding any matched in the idea
    #[arg(long)]
    color_grade: Option<String>,

    /// Comma-separated tags appended verbatim at the end
    #[arg(long)]
    extra_tags: Option<String>,

    /// Safety screening mode: soften or off
    #[arg(long, default_value = "soften")]
    safe_mode: SafeMode,

    /// Print compact JSON instead of pretty-printed
    #[arg(long)]
    compact: bool,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // load .env if present; ignore if missing

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    debug!(aspect_ratio = %cli.aspect_ratio, safe_mode = %cli.safe_mode, "building request");

    let request = OptimizeRequest {
        idea: cli.idea,
        negative: cli.negative,
        aspect_ratio: Some(cli.aspect_ratio),
        overrides: PromptOverrides {
            lighting: cli.lighting,
            color_grade: cli.color_grade,
            extra_tags: cli.extra_tags,
        },
        safe_mode: cli.safe_mode,
    };

    let response = optimize(&request)?;

    let json = if cli.compact {
        serde_json::to_string(&response)?
    } else {
        serde_json::to_string_pretty(&response)?
    };
    println!("{json}");

    Ok(())
}
