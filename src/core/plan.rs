//! Plan view: show what generation would produce for a brief — the
//! parsed intent summary and the resulting file tree — without writing
//! anything to disk.

use anyhow::Result;
use itertools::Itertools;
use owo_colors::OwoColorize;
use tabled::{Table, Tabled};

use crate::cli::{AppContext, PlanArgs};
use crate::core::export::{format_bytes, project_size, render_tree};
use crate::core::generate::{detect_template, generate_file_tree};
use crate::core::intent::Intent;
use crate::core::parse::parse_prompt;

#[derive(Tabled)]
struct PlanRow {
    field: &'static str,
    value: String,
}

fn summary_rows(intent: &Intent) -> Vec<PlanRow> {
    vec![
        PlanRow {
            field: "Site name",
            value: intent.site_name.clone(),
        },
        PlanRow {
            field: "Template",
            value: detect_template(intent).to_string(),
        },
        PlanRow {
            field: "Tone",
            value: intent.tone.to_string(),
        },
        PlanRow {
            field: "Theme",
            value: intent.theme.to_string(),
        },
        PlanRow {
            field: "Primary color",
            value: intent.primary_color.clone(),
        },
        PlanRow {
            field: "Secondary color",
            value: intent.secondary_color.clone(),
        },
        PlanRow {
            field: "Industry",
            value: intent
                .industry
                .map(|i| i.to_string())
                .unwrap_or_else(|| "(none)".to_string()),
        },
        PlanRow {
            field: "Sections",
            value: intent.sections.iter().map(ToString::to_string).join(", "),
        },
        PlanRow {
            field: "Keywords",
            value: intent.keywords.join(", "),
        },
        PlanRow {
            field: "Features",
            value: intent
                .features
                .as_ref()
                .map(|f| f.len().to_string())
                .unwrap_or_else(|| "(none)".to_string()),
        },
        PlanRow {
            field: "Pricing tiers",
            value: intent
                .pricing_tiers
                .as_ref()
                .map(|t| t.len().to_string())
                .unwrap_or_else(|| "(none)".to_string()),
        },
    ]
}

pub fn run(args: PlanArgs, ctx: &AppContext) -> Result<()> {
    let prompt = args.prompt.join(" ");
    if prompt.trim().is_empty() {
        anyhow::bail!("No prompt given. Describe the website to plan.");
    }

    let intent = parse_prompt(&prompt);
    let tree = generate_file_tree(&intent, |_, _| {})?;

    if ctx.quiet {
        return Ok(());
    }

    let table = Table::new(summary_rows(&intent)).to_string();
    println!("{}", table);

    println!();
    println!("{}", render_tree(&intent.site_name, &tree)?);
    println!(
        "{}",
        format!("{} files, {}", tree.len(), format_bytes(project_size(&tree))).cyan()
    );

    Ok(())
}
