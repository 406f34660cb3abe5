//! **sitewright** - Fast, deterministic CLI for turning natural-language
//! website briefs into runnable project scaffolds
//!
//! Rule-based intent extraction feeding a fixed template library; no model
//! inference in the core path. A hosted-model mode returns a single HTML
//! document instead.

/// Command-line interface with clap integration
pub mod cli;

/// Shell completion generation
pub mod completion;

/// Core pipeline - intent extraction and deterministic generation
pub mod core {
    /// Structured intent model and built-in catalogs
    pub mod intent;
    pub use intent::{Intent, SectionType, Theme, Tone};

    /// Rule-based prompt parsing (regex + keyword tables)
    pub mod parse;
    pub use parse::parse_prompt;

    /// Deterministic color palette derivation (hex <-> HSL)
    pub mod palette;
    pub use palette::{generate_palette, Palette};

    /// Phase-based file tree generation with progress milestones
    pub mod generate;
    pub use generate::{generate_website, GeneratedOutput, GenerationError};

    /// Intent summary and file-tree plan view
    pub mod plan;

    /// Standalone inline-CSS HTML preview
    pub mod preview;
    pub use preview::render_preview;

    /// Export sinks - project directories, ZIP archives, tree listings
    pub mod export;
    pub use export::{export_zip, write_project};
}

/// Hosted-model HTML path (request/response wrapper, never the core)
pub mod ai;

/// Template library - one pure render function per generated file
pub mod templates;

/// Infrastructure - configuration and shared utilities
pub mod infra {
    /// Configuration management with TOML support and explicit API keys
    pub mod config;
    pub use config::{init as config_init, load_config, Config};

    /// Utility functions and helpers for common operations
    pub mod utils;
    // Keep utils private to the crate surface - not part of the public API
}

// Strategic re-exports for clean CLI interface
pub use cli::{AppContext, Cli, Commands};
pub use crate::core::{generate_website, parse_prompt, render_preview, GeneratedOutput, Intent};
pub use infra::{load_config, Config};
pub use templates::FileTree;
