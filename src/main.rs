use anyhow::Result;
use clap::Parser;
use sitewright::cli::{AppContext, Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Structured logging to stderr, filtered by SITEWRIGHT_LOG / RUST_LOG
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Build a context once, pass everywhere
    let ctx = AppContext {
        quiet: cli.quiet,
        no_color: cli.no_color,
        dry_run: cli.dry_run,
    };

    match cli.command {
        Commands::Generate(args) => sitewright::core::generate::run(args, &ctx),
        Commands::Parse(args) => sitewright::core::parse::run(args, &ctx),
        Commands::Plan(args) => sitewright::core::plan::run(args, &ctx),
        Commands::Preview(args) => sitewright::core::preview::run(args, &ctx),
        Commands::Ai(args) => sitewright::ai::run(args, &ctx),
        Commands::Init(args) => sitewright::infra::config::init(args, &ctx),
        Commands::Completions(args) => sitewright::completion::run(args),
    }
}
