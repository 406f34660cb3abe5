//! Website generation engine: expands a parsed intent into a complete
//! file tree through staged template phases, reporting coarse progress
//! at fixed milestones.

use anyhow::{Context, Result};
use chrono::Utc;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::cli::{AppContext, GenerateArgs};
use crate::core::export::{self, format_bytes, project_size, render_tree};
use crate::core::intent::{Intent, SectionType, Theme};
use crate::core::parse::parse_prompt;
use crate::templates::{
    self, FileTree, COMPONENT_TEMPLATES, CONFIG_TEMPLATES, DOC_TEMPLATES, SUPPORT_TEMPLATES,
};

/// Single generation-time failure wrapping the underlying cause. No
/// partial file tree ever escapes a failed run.
#[derive(Debug, Error)]
#[error("Generation failed: {0}")]
pub struct GenerationError(pub String);

/// Shell commands surfaced to the user as opaque display strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Commands {
    pub dev: String,
    pub build: String,
    pub export_zip: String,
}

impl Default for Commands {
    fn default() -> Self {
        Self {
            dev: "npm install && npm run dev".to_string(),
            build: "npm run build".to_string(),
            export_zip: "node scripts/export-zip.js".to_string(),
        }
    }
}

/// The full generation report handed to sinks and `--json` consumers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedOutput {
    pub status: String,
    pub site_name: String,
    pub template_used: String,
    pub parsed_intent: Intent,
    pub file_tree: FileTree,
    pub commands: Commands,
    pub download_url: Option<String>,
    pub deployment_hints: String,
    pub qa_checklist: Vec<String>,
    pub notes: String,
    pub generated_at: String,
}

/// Fixed progress milestones; percentages are not proportional to work.
const MILESTONE_PARSE: (u32, &str) = (10, "Parsing your prompt...");
const MILESTONE_CONFIG: (u32, &str) = (25, "Generating project configuration...");
const MILESTONE_COMPONENTS: (u32, &str) = (50, "Building React components...");
const MILESTONE_SUPPORT: (u32, &str) = (70, "Creating utilities and helpers...");
const MILESTONE_DOCS: (u32, &str) = (85, "Generating documentation...");
const MILESTONE_FINALIZE: (u32, &str) = (95, "Finalizing project structure...");
const MILESTONE_DONE: (u32, &str) = (100, "Complete!");

/// Coarse classifier for the cosmetic "template used" field, checked in
/// priority order.
pub fn detect_template(intent: &Intent) -> &'static str {
    if intent.has_section(SectionType::Pricing) && intent.has_section(SectionType::Features) {
        return "saas-landing";
    }
    if intent.has_section(SectionType::Gallery) {
        return "portfolio";
    }
    if intent.theme == Theme::Amazon {
        return "ecommerce";
    }
    "landing-page"
}

fn generate_notes(intent: &Intent) -> String {
    let mut notes = Vec::new();

    if intent.has_section(SectionType::Contact) {
        notes.push(
            "Contact form uses Formspree. Add VITE_FORMSPREE_FORM_ID to .env.local for email \
             delivery, otherwise submissions are logged to console."
                .to_string(),
        );
    }

    notes.push(
        "Images use placeholder gradients by default. Add VITE_UNSPLASH_ACCESS_KEY for real \
         images from Unsplash."
            .to_string(),
    );

    notes.join(" ")
}

fn qa_checklist() -> Vec<String> {
    [
        "Verify all sections render correctly",
        "Test responsive design on mobile",
        "Check color contrast for accessibility",
        "Validate contact form functionality",
        "Test dark mode toggle",
        "Verify all links work",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

/// Merge a phase slice into the accumulated tree, refusing to overwrite
/// a path written by an earlier phase. Template path ownership makes a
/// collision impossible; this guard turns a registry mistake into a
/// clean failure instead of silent loss.
fn merge_phase(tree: &mut FileTree, phase: FileTree) -> Result<(), GenerationError> {
    for (path, content) in phase {
        if tree.insert(path.clone(), content).is_some() {
            return Err(GenerationError(format!("duplicate output path: {path}")));
        }
    }
    Ok(())
}

/// Expand an intent into the complete file tree, invoking the progress
/// callback at the fixed phase milestones (25 through 95).
pub fn generate_file_tree(
    intent: &Intent,
    mut on_progress: impl FnMut(u32, &str),
) -> Result<FileTree, GenerationError> {
    let mut tree = FileTree::new();

    let (pct, label) = MILESTONE_CONFIG;
    on_progress(pct, label);
    merge_phase(&mut tree, templates::render_phase(CONFIG_TEMPLATES, intent))?;

    let (pct, label) = MILESTONE_COMPONENTS;
    on_progress(pct, label);
    merge_phase(&mut tree, templates::render_phase(COMPONENT_TEMPLATES, intent))?;

    let (pct, label) = MILESTONE_SUPPORT;
    on_progress(pct, label);
    merge_phase(&mut tree, templates::render_phase(SUPPORT_TEMPLATES, intent))?;

    let (pct, label) = MILESTONE_DOCS;
    on_progress(pct, label);
    merge_phase(&mut tree, templates::render_phase(DOC_TEMPLATES, intent))?;

    let (pct, label) = MILESTONE_FINALIZE;
    on_progress(pct, label);

    debug!(files = tree.len(), "file tree assembled");
    Ok(tree)
}

/// Generate a complete website from a natural-language brief.
///
/// Progress percentages are non-decreasing and terminate at 100 on
/// success; nothing is reported after the point of failure.
pub fn generate_website(
    prompt: &str,
    mut on_progress: impl FnMut(u32, &str),
) -> Result<GeneratedOutput, GenerationError> {
    let (pct, label) = MILESTONE_PARSE;
    on_progress(pct, label);
    let intent = parse_prompt(prompt);

    let file_tree = generate_file_tree(&intent, &mut on_progress)?;

    let output = GeneratedOutput {
        status: "success".to_string(),
        site_name: intent.site_name.clone(),
        template_used: detect_template(&intent).to_string(),
        file_tree,
        commands: Commands::default(),
        download_url: None,
        deployment_hints: "To deploy your site:\n1. Push to GitHub\n2. Connect to Vercel/Netlify\n\
                           3. Set environment variables if using APIs\n4. Deploy!"
            .to_string(),
        qa_checklist: qa_checklist(),
        notes: generate_notes(&intent),
        generated_at: Utc::now().to_rfc3339(),
        parsed_intent: intent,
    };

    let (pct, label) = MILESTONE_DONE;
    on_progress(pct, label);
    Ok(output)
}

pub fn run(args: GenerateArgs, ctx: &AppContext) -> Result<()> {
    let prompt = args.prompt.join(" ");
    if prompt.trim().is_empty() {
        anyhow::bail!("No prompt given. Describe the website to generate.");
    }

    // Progress adapter over the milestone callback (hidden when quiet)
    let progress = if ctx.quiet {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new(100);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/100 {msg}")
                .unwrap()
                .progress_chars("#>-"),
        );
        pb
    };

    let output = generate_website(&prompt, |pct, label| {
        progress.set_position(pct as u64);
        progress.set_message(label.to_string());
    })?;
    progress.finish_with_message("Complete!");

    let site_name = &output.site_name;
    let tree = &output.file_tree;

    if ctx.dry_run {
        if !ctx.quiet {
            println!("{}", "DRY RUN: Would generate:".yellow());
            println!("{}", render_tree(site_name, tree)?);
            println!(
                "{}",
                format!("{} files, {}", tree.len(), format_bytes(project_size(tree))).yellow()
            );
        }
        return Ok(());
    }

    // Config supplies defaults for flags the command line left unset
    let config = crate::infra::config::load_config().unwrap_or_default();
    let out_dir_raw = args.out_dir.unwrap_or(config.generate.out_dir);
    let out_dir = expand_out_dir(&out_dir_raw)?;
    let want_zip = args.zip || args.zip_only || config.generate.zip;

    let mut written_root = None;
    if !args.zip_only {
        let root = export::write_project(tree, site_name, &out_dir, args.force)?;
        written_root = Some(root);
    }

    let mut archive_path = None;
    if want_zip {
        archive_path = Some(export::export_zip(tree, site_name, &out_dir)?);
    }

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&output).context("serialize generation report")?
        );
        return Ok(());
    }

    if !ctx.quiet {
        if let Some(root) = &written_root {
            println!(
                "{} Generated {} ({} files, {}) at {}",
                "✓".green(),
                site_name.bold(),
                tree.len(),
                format_bytes(project_size(tree)),
                root
            );
        }
        if let Some(archive) = &archive_path {
            println!("{} Packaged archive at {}", "✓".green(), archive);
        }
        println!("  Template: {}", output.template_used.cyan());
        println!("  Dev:      {}", output.commands.dev);
        println!("  Build:    {}", output.commands.build);
        if !output.notes.is_empty() {
            println!("  Notes:    {}", output.notes);
        }
    }

    Ok(())
}

fn expand_out_dir(raw: &str) -> Result<camino::Utf8PathBuf> {
    let expanded = shellexpand::tilde(raw);
    Ok(camino::Utf8PathBuf::from(expanded.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parse::parse_prompt;

    #[test]
    fn template_detection_priority() {
        let saas = parse_prompt("landing page with pricing and features");
        assert_eq!(detect_template(&saas), "saas-landing");

        let portfolio = parse_prompt("my portfolio gallery");
        assert_eq!(detect_template(&portfolio), "portfolio");

        let shop = parse_prompt("amazon-like shopping experience");
        assert_eq!(detect_template(&shop), "ecommerce");

        let plain = parse_prompt("a simple homepage");
        assert_eq!(detect_template(&plain), "landing-page");
    }

    #[test]
    fn saas_detection_beats_amazon_theme() {
        // Pricing + features wins even when the theme is amazon
        let intent = parse_prompt("amazon-like store with pricing and features");
        assert_eq!(detect_template(&intent), "saas-landing");
    }

    #[test]
    fn notes_mention_formspree_only_with_contact() {
        let with_contact = parse_prompt("landing with contact form");
        assert!(generate_notes(&with_contact).contains("Formspree"));

        let without = parse_prompt("landing with pricing");
        assert!(!generate_notes(&without).contains("Formspree"));
        // The images note is always present
        assert!(generate_notes(&without).contains("Unsplash"));
    }

    #[test]
    fn milestones_are_non_decreasing_and_end_at_100() {
        let mut seen = Vec::new();
        let output = generate_website("a saas site with pricing and features", |pct, label| {
            seen.push((pct, label.to_string()));
        })
        .expect("generation succeeds");

        assert_eq!(output.status, "success");
        assert!(seen.windows(2).all(|w| w[0].0 <= w[1].0));
        assert_eq!(seen.first().map(|(p, _)| *p), Some(10));
        assert_eq!(seen.last().map(|(p, _)| *p), Some(100));
    }

    #[test]
    fn phases_never_collide() {
        let intent = parse_prompt(
            "everything: hero, features, pricing, contact, call to action, gallery, faq",
        );
        let tree = generate_file_tree(&intent, |_, _| {}).expect("no collisions");
        assert!(tree.contains_key("package.json"));
        assert!(tree.contains_key("src/components/Footer.tsx"));
    }

    #[test]
    fn commands_record_is_fixed() {
        let commands = Commands::default();
        assert_eq!(commands.dev, "npm install && npm run dev");
        assert_eq!(commands.build, "npm run build");
        assert_eq!(commands.export_zip, "node scripts/export-zip.js");
    }
}
