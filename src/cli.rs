use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::infra::config::AiProvider;

/// Shared application context for global flags
#[derive(Clone, Debug)]
pub struct AppContext {
    pub quiet: bool,    // global --quiet
    pub no_color: bool, // global --no-color
    pub dry_run: bool,  // global --dry-run
}

#[derive(Parser)]
#[command(name = "sitewright")]
#[command(
    about = "A fast, deterministic CLI for turning natural-language website briefs into runnable project scaffolds"
)]
#[command(version, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Suppress progress bars and non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Show what would be done without executing
    #[arg(long, global = true)]
    pub dry_run: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a project scaffold from a website brief
    Generate(GenerateArgs),

    /// Parse a brief into its structured intent (JSON)
    Parse(ParseArgs),

    /// Show the intent summary and file tree a brief would produce
    Plan(PlanArgs),

    /// Render a standalone HTML preview of a brief
    Preview(PreviewArgs),

    /// Request a complete HTML document from a hosted model
    Ai(AiArgs),

    /// Initialize a sitewright.toml config file
    Init(InitArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Parser)]
pub struct GenerateArgs {
    /// The website brief (free text; quote or pass as separate words)
    #[arg(value_name = "PROMPT", required = true)]
    pub prompt: Vec<String>,

    /// Output directory for the project root (default from config, else .)
    #[arg(short, long)]
    pub out_dir: Option<String>,

    /// Also package the scaffold as <slug>.zip
    #[arg(long)]
    pub zip: bool,

    /// Only package the archive; skip writing the project directory
    #[arg(long, conflicts_with = "zip")]
    pub zip_only: bool,

    /// Print the full generation report as JSON
    #[arg(long)]
    pub json: bool,

    /// Overwrite an existing project directory
    #[arg(long)]
    pub force: bool,
}

#[derive(Parser)]
pub struct ParseArgs {
    /// The website brief to parse
    #[arg(value_name = "PROMPT", required = true)]
    pub prompt: Vec<String>,

    /// Emit single-line JSON instead of pretty-printed
    #[arg(long)]
    pub compact: bool,

    /// Copy the intent JSON to the clipboard
    #[arg(long)]
    pub clipboard: bool,
}

#[derive(Parser)]
pub struct PlanArgs {
    /// The website brief to plan
    #[arg(value_name = "PROMPT", required = true)]
    pub prompt: Vec<String>,
}

#[derive(Parser)]
pub struct PreviewArgs {
    /// The website brief to preview
    #[arg(value_name = "PROMPT", required = true)]
    pub prompt: Vec<String>,

    /// Output file (default from config, else preview.html)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Print the document to stdout instead of a file
    #[arg(long)]
    pub stdout: bool,

    /// Copy the document to the clipboard
    #[arg(long)]
    pub clipboard: bool,
}

#[derive(Parser)]
pub struct AiArgs {
    /// The website brief to send
    #[arg(value_name = "PROMPT", required = true)]
    pub prompt: Vec<String>,

    /// Output file for the returned document
    #[arg(short, long, default_value = "site.html")]
    pub output: String,

    /// Provider override (default from config)
    #[arg(long, value_enum)]
    pub provider: Option<AiProvider>,

    /// Model override (default from config)
    #[arg(long)]
    pub model: Option<String>,

    /// Print the result as JSON instead of writing a file
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser)]
pub struct InitArgs {
    /// Directory to initialize config in
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite existing config file
    #[arg(long)]
    pub force: bool,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

#[derive(Parser)]
pub struct CompletionsArgs {
    /// Target shell
    #[arg(value_enum)]
    pub shell: Shell,

    /// Output directory; if omitted and --stdout not set, prints error
    #[arg(long)]
    pub out_dir: Option<PathBuf>,

    /// Print completion script to stdout instead of a file
    #[arg(long)]
    pub stdout: bool,
}
