//! Rule-based extraction of an [`Intent`] from a free-text brief.
//!
//! Every extractor is a total function: unparseable input degrades to a
//! documented default, never an error. Keyword tables resolve ties by
//! table declaration order, not prompt position — the first table entry
//! with any hit wins. Both rules are load-bearing and covered by tests.

use aho_corasick::AhoCorasick;
use itertools::Itertools;
use regex::Regex;
use std::sync::OnceLock;

use crate::core::intent::{Cta, FeatureItem, Industry, Intent, PricingTier, SectionType, Theme, Tone};
use crate::core::palette::generate_palette;

/// Fallback site name when neither a quoted name nor a "for <Name>"
/// pattern is present.
pub const DEFAULT_SITE_NAME: &str = "My Website";

/// Fallback brand color (blue).
pub const DEFAULT_PRIMARY_COLOR: &str = "#0B74DE";

/// Fallback feature count.
pub const DEFAULT_FEATURE_COUNT: usize = 3;

const FEATURE_COUNT_MIN: usize = 1;
const FEATURE_COUNT_MAX: usize = 8;

// Keyword tables. Declaration order is the tie-break order.

const SECTION_KEYWORDS: &[(SectionType, &[&str])] = &[
    (SectionType::Nav, &["nav", "navigation", "header", "menu"]),
    (SectionType::Hero, &["hero", "banner", "landing", "headline", "main section"]),
    (SectionType::Features, &["feature", "features", "benefits", "services", "offerings"]),
    (SectionType::Pricing, &["pricing", "price", "plans", "tiers", "subscription"]),
    (SectionType::Gallery, &["gallery", "portfolio", "projects", "showcase", "work", "products"]),
    (SectionType::Testimonials, &["testimonial", "testimonials", "reviews", "feedback", "clients"]),
    (SectionType::Contact, &["contact", "contact form", "get in touch", "reach out", "email"]),
    (SectionType::About, &["about", "about us", "who we are", "story", "mission"]),
    (SectionType::Cta, &["cta", "call to action", "signup", "get started", "newsletter"]),
    (SectionType::Faq, &["faq", "faqs", "questions", "frequently asked"]),
    (SectionType::Team, &["team", "members", "people", "staff", "employees"]),
    (SectionType::Stats, &["stats", "statistics", "numbers", "metrics", "achievements"]),
    (SectionType::Footer, &["footer", "bottom"]),
];

const TONE_KEYWORDS: &[(Tone, &[&str])] = &[
    (Tone::Professional, &["professional", "business", "enterprise", "corporate"]),
    (Tone::Casual, &["casual", "relaxed", "friendly", "approachable"]),
    (Tone::Playful, &["playful", "fun", "creative", "quirky", "colorful"]),
    (Tone::Confident, &["confident", "bold", "strong", "assertive"]),
    (Tone::Formal, &["formal", "serious", "traditional", "classic"]),
    (Tone::Friendly, &["friendly", "warm", "welcoming", "inviting"]),
];

const THEME_KEYWORDS: &[(Theme, &[&str])] = &[
    (Theme::Light, &["light", "bright", "white", "clean"]),
    (Theme::Dark, &["dark", "night", "black"]),
    (Theme::Amazon, &["amazon", "amazon-like", "e-commerce", "shopping"]),
    (Theme::Corporate, &["corporate", "enterprise", "business"]),
];

const INDUSTRY_KEYWORDS: &[(Industry, &[&str])] = &[
    (Industry::Tech, &["software", "saas", "ai", "tech", "developer", "api", "cloud", "app"]),
    (Industry::Ecommerce, &["shop", "store", "products", "ecommerce", "e-commerce", "buy", "sell"]),
    (Industry::Agency, &["agency", "design", "creative", "marketing", "digital"]),
    (Industry::Healthcare, &["health", "medical", "healthcare", "doctor", "clinic"]),
    (Industry::Finance, &["finance", "financial", "banking", "investment", "trading"]),
    (Industry::Education, &["education", "learning", "course", "school", "training"]),
    (Industry::Realestate, &["real estate", "property", "homes", "apartments", "realty"]),
];

const COLOR_NAMES: &[(&str, &str)] = &[
    ("blue", "#0B74DE"),
    ("red", "#DC2626"),
    ("green", "#10B981"),
    ("purple", "#8B5CF6"),
    ("orange", "#F59E0B"),
    ("pink", "#EC4899"),
    ("teal", "#14B8A6"),
    ("indigo", "#6366F1"),
    ("cyan", "#06B6D4"),
    ("yellow", "#EAB308"),
];

const STOP_WORDS: &[&str] = &[
    "a", "an", "the", "and", "or", "but", "for", "with", "to", "of", "in", "on",
    "is", "are", "was", "were", "be", "been", "being", "have", "has", "had",
    "do", "does", "did", "will", "would", "could", "should", "may", "might",
    "create", "build", "make", "include", "use", "add", "want", "need",
    "page", "website", "site", "landing", "section", "color", "theme", "tone",
];

/// Multi-pattern matcher per table entry, built once. Substring
/// semantics: any keyword occurring anywhere in the haystack is a hit.
fn matchers<T: Copy>(table: &[(T, &[&str])]) -> Vec<(T, AhoCorasick)> {
    table
        .iter()
        .map(|(value, keywords)| {
            let ac = AhoCorasick::new(keywords.iter()).expect("valid keyword table");
            (*value, ac)
        })
        .collect()
}

fn section_matchers() -> &'static [(SectionType, AhoCorasick)] {
    static M: OnceLock<Vec<(SectionType, AhoCorasick)>> = OnceLock::new();
    M.get_or_init(|| matchers(SECTION_KEYWORDS))
}

fn tone_matchers() -> &'static [(Tone, AhoCorasick)] {
    static M: OnceLock<Vec<(Tone, AhoCorasick)>> = OnceLock::new();
    M.get_or_init(|| matchers(TONE_KEYWORDS))
}

fn theme_matchers() -> &'static [(Theme, AhoCorasick)] {
    static M: OnceLock<Vec<(Theme, AhoCorasick)>> = OnceLock::new();
    M.get_or_init(|| matchers(THEME_KEYWORDS))
}

fn industry_matchers() -> &'static [(Industry, AhoCorasick)] {
    static M: OnceLock<Vec<(Industry, AhoCorasick)>> = OnceLock::new();
    M.get_or_init(|| matchers(INDUSTRY_KEYWORDS))
}

/// Extract the site name: first quoted substring, else the
/// `for <Capitalized words>` pattern stopping at a dash, comma, or end
/// of input, else the default.
pub fn extract_site_name(prompt: &str) -> String {
    static QUOTED: OnceLock<Regex> = OnceLock::new();
    static FOR_NAME: OnceLock<Regex> = OnceLock::new();

    let quoted = QUOTED.get_or_init(|| Regex::new(r#"['"]([^'"]+)['"]"#).unwrap());
    if let Some(caps) = quoted.captures(prompt) {
        let name = caps[1].trim();
        // Whitespace-only quotes fall through; the name is never empty
        if !name.is_empty() {
            return name.to_string();
        }
    }

    let for_name = FOR_NAME
        .get_or_init(|| Regex::new(r"for\s+([A-Z][A-Za-z0-9\s]+?)(?:\s*[-—–]|\s*,|\s*$)").unwrap());
    if let Some(caps) = for_name.captures(prompt) {
        return caps[1].trim().to_string();
    }

    DEFAULT_SITE_NAME.to_string()
}

/// Extract the primary color: first `#RRGGBB`/`#RGB` literal (3-digit
/// forms are widened so the 6-digit invariant holds downstream), else a
/// named-color phrase, else the default blue.
pub fn extract_color(prompt: &str) -> String {
    static HEX: OnceLock<Regex> = OnceLock::new();
    let hex = HEX.get_or_init(|| Regex::new(r"#([A-Fa-f0-9]{6}|[A-Fa-f0-9]{3})\b").unwrap());

    if let Some(caps) = hex.captures(prompt) {
        let digits = &caps[1];
        if digits.len() == 3 {
            let widened: String = digits.chars().flat_map(|c| [c, c]).collect();
            return format!("#{widened}");
        }
        return caps[0].to_string();
    }

    let lower = prompt.to_lowercase();
    for (name, hex) in COLOR_NAMES {
        if lower.contains(&format!("color {name}")) || lower.contains(&format!("{name} color")) {
            return (*hex).to_string();
        }
    }

    DEFAULT_PRIMARY_COLOR.to_string()
}

/// Extract the tone. An explicit `tone: <word>` directive wins over the
/// table scan, so a brief like "professional landing page ... tone:
/// confident" resolves to the directive. Without a directive the table
/// is scanned in declaration order and the first entry with a hit wins.
pub fn extract_tone(prompt: &str) -> Tone {
    static DIRECTIVE: OnceLock<Regex> = OnceLock::new();
    let directive = DIRECTIVE.get_or_init(|| Regex::new(r"(?i)tone\s*:\s*([a-z-]+)").unwrap());

    let lower = prompt.to_lowercase();

    if let Some(caps) = directive.captures(&lower) {
        let word = &caps[1];
        for (tone, ac) in tone_matchers() {
            if ac.is_match(word) {
                return *tone;
            }
        }
    }

    for (tone, ac) in tone_matchers() {
        if ac.is_match(&lower) {
            return *tone;
        }
    }
    Tone::Professional
}

/// Scan the theme table in declaration order; first entry with a hit wins.
pub fn extract_theme(prompt: &str) -> Theme {
    let lower = prompt.to_lowercase();
    for (theme, ac) in theme_matchers() {
        if ac.is_match(&lower) {
            return *theme;
        }
    }
    Theme::Light
}

/// Extract requested sections. `nav` is always first and `footer` always
/// last; when the scan yields nothing else (the list is exactly those
/// two), the `hero, features, cta` defaults are spliced in after `nav`.
/// That exactly-2 trigger is the original rule, kept verbatim: a prompt
/// matching even one optional section keyword suppresses all defaults.
pub fn extract_sections(prompt: &str) -> Vec<SectionType> {
    let lower = prompt.to_lowercase();
    let mut found = vec![SectionType::Nav];

    for (section, ac) in section_matchers() {
        if matches!(section, SectionType::Nav | SectionType::Footer) {
            continue;
        }
        if ac.is_match(&lower) {
            found.push(*section);
        }
    }

    found.push(SectionType::Footer);

    if found.len() == 2 {
        found.insert(1, SectionType::Hero);
        found.insert(2, SectionType::Features);
        found.insert(3, SectionType::Cta);
    }

    found.into_iter().unique().collect()
}

/// Extract the requested feature count from `<N> features`,
/// `features (<N>)`, or `features: <N>`, in that order; clamp to [1,8].
pub fn extract_feature_count(prompt: &str) -> usize {
    static PATTERNS: OnceLock<[Regex; 3]> = OnceLock::new();
    let patterns = PATTERNS.get_or_init(|| {
        [
            Regex::new(r"(?i)(\d+)\s*features?").unwrap(),
            Regex::new(r"(?i)features?\s*\((\d+)\)").unwrap(),
            Regex::new(r"(?i)features?\s*:?\s*(\d+)").unwrap(),
        ]
    });

    for pattern in patterns {
        if let Some(caps) = pattern.captures(prompt) {
            if let Ok(count) = caps[1].parse::<usize>() {
                return count.clamp(FEATURE_COUNT_MIN, FEATURE_COUNT_MAX);
            }
        }
    }

    DEFAULT_FEATURE_COUNT
}

/// Scan the industry table in declaration order; `None` when no keyword
/// from any vertical appears.
pub fn detect_industry(prompt: &str) -> Option<Industry> {
    let lower = prompt.to_lowercase();
    for (industry, ac) in industry_matchers() {
        if ac.is_match(&lower) {
            return Some(*industry);
        }
    }
    None
}

/// Tokenize the prompt into up to ten salient keywords: lowercase, strip
/// punctuation, keep tokens longer than three characters that are not
/// stop words, dedup in first-occurrence order.
pub fn extract_keywords(prompt: &str) -> Vec<String> {
    static PUNCT: OnceLock<Regex> = OnceLock::new();
    // ASCII word class to match the original tokenizer
    let punct = PUNCT.get_or_init(|| Regex::new(r"[^A-Za-z0-9_\s]").unwrap());

    let lowered = prompt.to_lowercase();
    let cleaned = punct.replace_all(&lowered, " ");

    cleaned
        .split_whitespace()
        .filter(|word| word.chars().count() > 3 && !STOP_WORDS.contains(word))
        .map(str::to_string)
        .unique()
        .take(10)
        .collect()
}

/// Parse a free-text brief into a structured [`Intent`].
///
/// Pure and idempotent: the same prompt always yields a structurally
/// equal intent. Feature items and pricing tiers are attached only when
/// their sections were requested.
pub fn parse_prompt(prompt: &str) -> Intent {
    let site_name = extract_site_name(prompt);
    let palette = generate_palette(&extract_color(prompt));
    let sections = extract_sections(prompt);
    let feature_count = extract_feature_count(prompt);
    let industry = detect_industry(prompt);
    let tone = extract_tone(prompt);

    let features = sections
        .contains(&SectionType::Features)
        .then(|| FeatureItem::defaults(feature_count, industry));
    let pricing_tiers = sections
        .contains(&SectionType::Pricing)
        .then(PricingTier::defaults);

    Intent {
        title: site_name.clone(),
        site_name,
        tone,
        theme: extract_theme(prompt),
        primary_color: palette.primary,
        secondary_color: palette.secondary,
        sections,
        pages: vec!["Home".to_string()],
        keywords: extract_keywords(prompt),
        industry,
        features,
        pricing_tiers,
        cta: Cta::for_tone(tone),
    }
}

pub fn run(args: crate::cli::ParseArgs, ctx: &crate::cli::AppContext) -> anyhow::Result<()> {
    use anyhow::Context;
    use owo_colors::OwoColorize;

    let prompt = args.prompt.join(" ");
    if prompt.trim().is_empty() {
        anyhow::bail!("No prompt given. Describe the website to parse.");
    }

    let intent = parse_prompt(&prompt);

    let json = if args.compact {
        serde_json::to_string(&intent).context("serialize intent")?
    } else {
        serde_json::to_string_pretty(&intent).context("serialize intent")?
    };

    if args.clipboard && !ctx.dry_run {
        let mut clipboard = arboard::Clipboard::new().context("clipboard init")?;
        clipboard
            .set_text(json.clone())
            .context("copy intent to clipboard")?;
        if !ctx.quiet {
            eprintln!("{} Copied intent to clipboard", "✓".green());
        }
    }

    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_order_breaks_ties() {
        // "corporate"/"enterprise" appear under professional, which
        // precedes the dedicated rows in the tone table
        assert_eq!(extract_tone("corporate enterprise theme"), Tone::Professional);
        assert_eq!(extract_theme("Corporate enterprise theme"), Theme::Corporate);
        // "friendly" is listed under casual before the friendly row
        assert_eq!(extract_tone("a friendly site"), Tone::Casual);
        // An explicit directive beats earlier table rows
        assert_eq!(
            extract_tone("a professional site, tone: confident"),
            Tone::Confident
        );
        // "shop" (ecommerce) beats "design" (agency) by table order even
        // though "design" occurs earlier in the prompt
        assert_eq!(detect_industry("a design shop"), Some(Industry::Ecommerce));
    }

    #[test]
    fn industry_table_order_not_prompt_order() {
        // "design" (agency) precedes "software" (tech) in the prompt,
        // but tech comes first in the table
        assert_eq!(
            detect_industry("design studio building software"),
            Some(Industry::Tech)
        );
    }

    #[test]
    fn three_digit_hex_is_widened() {
        assert_eq!(extract_color("use #F0a as the brand"), "#FF00aa");
    }

    #[test]
    fn named_color_requires_color_phrase() {
        assert_eq!(extract_color("make the sky blue color please"), "#0B74DE");
        assert_eq!(extract_color("use color teal throughout"), "#14B8A6");
        // A bare color word without the phrase does not match
        assert_eq!(extract_color("paint it red"), DEFAULT_PRIMARY_COLOR);
    }

    #[test]
    fn splice_rule_is_exactly_two() {
        // No optional keywords: defaults spliced in
        assert_eq!(
            extract_sections("something minimal"),
            vec![
                SectionType::Nav,
                SectionType::Hero,
                SectionType::Features,
                SectionType::Cta,
                SectionType::Footer,
            ]
        );
        // A single optional hit suppresses all defaults
        assert_eq!(
            extract_sections("with a faq"),
            vec![SectionType::Nav, SectionType::Faq, SectionType::Footer]
        );
    }

    #[test]
    fn feature_count_patterns_and_clamp() {
        assert_eq!(extract_feature_count("Include 4 features"), 4);
        assert_eq!(extract_feature_count("features (6) please"), 6);
        assert_eq!(extract_feature_count("features: 2"), 2);
        assert_eq!(extract_feature_count("Include 20 features"), 8);
        assert_eq!(extract_feature_count("0 features"), 1);
        assert_eq!(extract_feature_count("features galore"), 3);
    }

    #[test]
    fn keywords_are_deduped_and_capped() {
        let kws = extract_keywords("analytics analytics analytics platform");
        assert_eq!(kws, vec!["analytics".to_string(), "platform".to_string()]);

        let long = "alpha bravo charlie delta echoes foxtrot golfing hotels \
                    indigo juliet kilos limas";
        assert_eq!(extract_keywords(long).len(), 10);
    }

    #[test]
    fn site_name_for_pattern_stops_at_dash() {
        assert_eq!(
            extract_site_name("Create a website for CloudSync Pro — a SaaS product"),
            "CloudSync Pro"
        );
        assert_eq!(
            extract_site_name("a site for Acme Labs, with pricing"),
            "Acme Labs"
        );
        assert_eq!(extract_site_name("for lowercase name"), DEFAULT_SITE_NAME);
    }

    #[test]
    fn parse_is_idempotent() {
        let prompt = "Create a playful site for 'Bubbles' with pricing and features (5)";
        assert_eq!(parse_prompt(prompt), parse_prompt(prompt));
    }
}
