use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::cli::{AppContext, InitArgs};

#[derive(Debug, Serialize, Deserialize)]
pub struct Config
{
    /// Default generation settings
    pub generate: GenerateConfig,

    /// Default preview settings
    pub preview: PreviewConfig,

    /// Hosted-model settings and API keys
    pub ai: AiConfig,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateConfig
{
    pub out_dir: String,
    pub zip: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PreviewConfig
{
    pub output_file: String,
}

/// Hosted-model provider selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum AiProvider
{
    #[value(name = "openai")]
    OpenAi,
    Gemini,
}

/// Explicit configuration object for the hosted-model path. Keys are
/// carried here and passed in at call sites; nothing deeper reads the
/// process environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiConfig
{
    pub provider: AiProvider,
    pub model: String,
    pub max_tokens: u32,
    pub openai_api_key: Option<String>,
    pub gemini_api_key: Option<String>,
}

impl Default for AiConfig
{
    fn default() -> Self
    {
        Self {
            provider: AiProvider::OpenAi,
            model: "gpt-4o-mini".to_string(),
            max_tokens: 4000,
            openai_api_key: None,
            gemini_api_key: None,
        }
    }
}

impl Default for Config
{
    fn default() -> Self
    {
        Self {
            generate: GenerateConfig { out_dir: ".".to_string(), zip: false },
            preview: PreviewConfig { output_file: "preview.html".to_string() },
            ai: AiConfig::default(),
        }
    }
}

pub fn load_config() -> Result<Config>
{
    let mut builder = config::Config::builder();

    // Load from config files in priority order
    let config_paths = ["sitewright.toml", ".sitewright.toml"];

    for path in &config_paths
    {
        if Path::new(path).exists()
        {
            builder = builder.add_source(config::File::with_name(path));
            break;
        }
    }

    // Add environment variables with SITEWRIGHT_ prefix
    builder = builder.add_source(config::Environment::with_prefix("SITEWRIGHT").separator("_"));

    let cfg = builder
        .build()
        .context("Failed to load configuration")?;
    let parsed: Config = cfg
        .try_deserialize()
        .context("Failed to parse configuration")?;

    Ok(parsed)
}

pub fn init(
    args: InitArgs,
    ctx: &AppContext,
) -> Result<()>
{
    let config_path = args
        .path
        .join("sitewright.toml");

    if config_path.exists() && !args.force
    {
        anyhow::bail!(
            "Config file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    let config = Config::default();
    let toml_string =
        toml::to_string_pretty(&config).context("Failed to serialize default config")?;

    std::fs::write(&config_path, toml_string).context("Failed to write config file")?;

    if !ctx.quiet
    {
        println!("Created config file at {}", config_path.display());
    }
    Ok(())
}
