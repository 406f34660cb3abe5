//! Standalone HTML preview of a parsed intent.
//!
//! A deliberately separate, simpler code path from the component
//! templates: section layout is duplicated with inline CSS so the
//! document renders alone in a sandboxed iframe or a browser tab,
//! without a build step.

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use std::fs;

use crate::cli::{AppContext, PreviewArgs};
use crate::core::intent::{FeatureItem, Intent, PricingTier, SectionType};
use crate::core::parse::parse_prompt;
use crate::templates::fill;

/// Render a complete HTML document approximating the generated site.
pub fn render_preview(intent: &Intent) -> String {
    let dark = intent.theme.is_dark();

    let nav = nav_preview(&intent.site_name);
    let hero = intent
        .has_section(SectionType::Hero)
        .then(|| hero_preview(&intent.site_name, &intent.cta.primary))
        .unwrap_or_default();
    let features = match (&intent.features, intent.has_section(SectionType::Features)) {
        (Some(items), true) => features_preview(items),
        _ => String::new(),
    };
    let pricing = match (&intent.pricing_tiers, intent.has_section(SectionType::Pricing)) {
        (Some(tiers), true) => pricing_preview(tiers),
        _ => String::new(),
    };
    let cta = intent
        .has_section(SectionType::Cta)
        .then(|| cta_preview(&intent.cta.primary))
        .unwrap_or_default();
    let contact = intent
        .has_section(SectionType::Contact)
        .then(contact_preview)
        .unwrap_or_default();
    let footer = footer_preview(&intent.site_name);

    fill(
        r#"<!DOCTYPE html>
<html lang="en" class="{{htmlClass}}">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{{siteName}} - Preview</title>
  <link href="https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600;700;800&display=swap" rel="stylesheet">
  <style>{{styles}}</style>
</head>
<body>
  {{nav}}
  {{hero}}
  {{features}}
  {{pricing}}
  {{cta}}
  {{contact}}
  {{footer}}
</body>
</html>
"#,
        &[
            ("htmlClass", if dark { "dark" } else { "" }),
            ("siteName", &intent.site_name),
            ("styles", &preview_styles(&intent.primary_color, dark)),
            ("nav", &nav),
            ("hero", &hero),
            ("features", &features),
            ("pricing", &pricing),
            ("cta", &cta),
            ("contact", &contact),
            ("footer", &footer),
        ],
    )
}

fn preview_styles(primary: &str, dark: bool) -> String {
    fill(
        r#"
    * { margin: 0; padding: 0; box-sizing: border-box; }

    body {
      font-family: 'Inter', system-ui, sans-serif;
      background: {{bodyBg}};
      color: {{bodyText}};
      line-height: 1.6;
    }

    .container { max-width: 1200px; margin: 0 auto; padding: 0 1.5rem; }

    .btn {
      display: inline-flex;
      align-items: center;
      gap: 0.5rem;
      padding: 0.75rem 1.5rem;
      border-radius: 0.5rem;
      font-weight: 600;
      text-decoration: none;
      transition: all 0.2s;
      cursor: pointer;
      border: none;
    }

    .btn-primary { background: {{primary}}; color: white; }
    .btn-primary:hover { filter: brightness(1.1); }

    .btn-secondary {
      background: transparent;
      border: 2px solid {{borderColor}};
      color: {{bodyText}};
    }

    /* Nav */
    .nav {
      position: fixed;
      top: 0;
      left: 0;
      right: 0;
      z-index: 50;
      background: {{navBg}};
      backdrop-filter: blur(8px);
      border-bottom: 1px solid {{hairline}};
    }

    .nav-content {
      display: flex;
      align-items: center;
      justify-content: space-between;
      height: 4rem;
    }

    .nav-logo {
      display: flex;
      align-items: center;
      gap: 0.5rem;
      font-weight: 700;
      font-size: 1.25rem;
      color: {{bodyText}};
      text-decoration: none;
    }

    .nav-logo-icon {
      width: 2rem;
      height: 2rem;
      background: {{primary}};
      border-radius: 0.5rem;
      display: flex;
      align-items: center;
      justify-content: center;
      color: white;
      font-weight: 700;
    }

    .nav-links {
      display: flex;
      align-items: center;
      gap: 2rem;
      list-style: none;
    }

    .nav-links a { color: {{mutedText}}; text-decoration: none; transition: color 0.2s; }
    .nav-links a:hover { color: {{bodyText}}; }

    /* Hero */
    .hero {
      padding: 8rem 0 4rem;
      text-align: center;
      background: {{heroBg}};
    }

    .hero h1 {
      font-size: clamp(2.5rem, 5vw, 4rem);
      font-weight: 800;
      line-height: 1.1;
      margin-bottom: 1.5rem;
    }

    .hero h1 span { color: {{primary}}; }

    .hero p {
      font-size: 1.25rem;
      color: {{mutedText}};
      max-width: 600px;
      margin: 0 auto 2rem;
    }

    .hero-buttons {
      display: flex;
      align-items: center;
      justify-content: center;
      gap: 1rem;
      flex-wrap: wrap;
    }

    /* Features */
    .features { padding: 5rem 0; background: {{altBg}}; }

    .section-header { text-align: center; margin-bottom: 3rem; }
    .section-header h2 { font-size: 2rem; font-weight: 700; margin-bottom: 0.5rem; }
    .section-header p { color: {{mutedText}}; font-size: 1.125rem; }

    .features-grid {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
      gap: 1.5rem;
    }

    .feature-card {
      background: {{cardBg}};
      border: 1px solid {{borderColor}};
      border-radius: 1rem;
      padding: 1.5rem;
      transition: transform 0.2s, box-shadow 0.2s;
    }

    .feature-card:hover {
      transform: translateY(-4px);
      box-shadow: 0 12px 24px rgba(0, 0, 0, 0.1);
    }

    .feature-icon {
      width: 3rem;
      height: 3rem;
      background: {{primary}}20;
      border-radius: 0.75rem;
      display: flex;
      align-items: center;
      justify-content: center;
      margin-bottom: 1rem;
      color: {{primary}};
      font-size: 1.5rem;
    }

    .feature-card h3 { font-size: 1.25rem; font-weight: 600; margin-bottom: 0.5rem; }
    .feature-card p { color: {{mutedText}}; }

    /* Pricing */
    .pricing { padding: 5rem 0; background: {{bodyBg}}; }

    .pricing-grid {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
      gap: 2rem;
      max-width: 1000px;
      margin: 0 auto;
    }

    .pricing-card {
      background: {{tierBg}};
      border: 1px solid {{borderColor}};
      border-radius: 1rem;
      padding: 2rem;
      text-align: center;
      position: relative;
    }

    .pricing-card.highlighted { border-color: {{primary}}; transform: scale(1.05); }

    .pricing-badge {
      position: absolute;
      top: -0.75rem;
      left: 50%;
      transform: translateX(-50%);
      background: {{primary}};
      color: white;
      font-size: 0.75rem;
      font-weight: 600;
      padding: 0.25rem 1rem;
      border-radius: 9999px;
    }

    .pricing-card h3 { font-size: 1.5rem; font-weight: 700; margin-bottom: 0.5rem; }

    .pricing-price { font-size: 3rem; font-weight: 800; margin: 1rem 0; }
    .pricing-price span { font-size: 1rem; font-weight: 400; color: {{mutedText}}; }

    .pricing-features { list-style: none; text-align: left; margin: 1.5rem 0; }

    .pricing-features li {
      display: flex;
      align-items: center;
      gap: 0.5rem;
      padding: 0.5rem 0;
      color: {{listText}};
    }

    .pricing-features li::before { content: '✓'; color: {{primary}}; font-weight: 600; }

    /* CTA */
    .cta { padding: 5rem 0; background: {{primary}}; text-align: center; }
    .cta h2 { font-size: 2.5rem; font-weight: 700; color: white; margin-bottom: 1rem; }
    .cta p { font-size: 1.25rem; color: rgba(255, 255, 255, 0.8); margin-bottom: 2rem; }
    .cta .btn-primary { background: white; color: {{primary}}; }

    /* Contact */
    .contact { padding: 5rem 0; background: {{altBg}}; }

    .contact-grid {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
      gap: 3rem;
    }

    .contact-form {
      background: {{cardBg}};
      border: 1px solid {{borderColor}};
      border-radius: 1rem;
      padding: 2rem;
    }

    .form-group { margin-bottom: 1.5rem; }
    .form-group label { display: block; font-weight: 500; margin-bottom: 0.5rem; }

    .form-group input,
    .form-group textarea {
      width: 100%;
      padding: 0.75rem 1rem;
      border: 1px solid {{inputBorder}};
      border-radius: 0.5rem;
      background: {{inputBg}};
      color: {{bodyText}};
      font-family: inherit;
    }

    .form-group textarea { min-height: 120px; resize: vertical; }

    /* Footer */
    .footer {
      padding: 3rem 0;
      background: {{bodyBg}};
      border-top: 1px solid {{hairline}};
      text-align: center;
      color: {{faintText}};
    }

    @media (max-width: 768px) {
      .nav-links { display: none; }
      .hero h1 { font-size: 2rem; }
      .pricing-card.highlighted { transform: none; }
    }
  "#,
        &[
            ("primary", primary),
            ("bodyBg", if dark { "#111827" } else { "#ffffff" }),
            ("bodyText", if dark { "#f3f4f6" } else { "#111827" }),
            ("mutedText", if dark { "#9ca3af" } else { "#6b7280" }),
            ("faintText", if dark { "#6b7280" } else { "#9ca3af" }),
            ("listText", if dark { "#d1d5db" } else { "#4b5563" }),
            ("borderColor", if dark { "#374151" } else { "#e5e7eb" }),
            ("hairline", if dark { "#1f2937" } else { "#e5e7eb" }),
            (
                "navBg",
                if dark {
                    "rgba(17, 24, 39, 0.95)"
                } else {
                    "rgba(255, 255, 255, 0.95)"
                },
            ),
            (
                "heroBg",
                if dark {
                    "linear-gradient(to bottom, #111827, #1f2937)"
                } else {
                    "linear-gradient(to bottom, #f9fafb, #ffffff)"
                },
            ),
            ("altBg", if dark { "#1f2937" } else { "#f9fafb" }),
            ("cardBg", if dark { "#111827" } else { "#ffffff" }),
            ("tierBg", if dark { "#1f2937" } else { "#ffffff" }),
            ("inputBorder", if dark { "#374151" } else { "#d1d5db" }),
            ("inputBg", if dark { "#1f2937" } else { "#ffffff" }),
        ],
    )
}

fn nav_preview(site_name: &str) -> String {
    let initial: String = site_name.chars().take(1).collect();
    fill(
        r##"
    <nav class="nav">
      <div class="container nav-content">
        <a href="#" class="nav-logo">
          <div class="nav-logo-icon">{{initial}}</div>
          {{siteName}}
        </a>
        <ul class="nav-links">
          <li><a href="#">Home</a></li>
          <li><a href="#">Features</a></li>
          <li><a href="#">Pricing</a></li>
          <li><a href="#">Contact</a></li>
          <li><a href="#" class="btn btn-primary">Get Started</a></li>
        </ul>
      </div>
    </nav>
  "##,
        &[("initial", initial.as_str()), ("siteName", site_name)],
    )
}

fn hero_preview(site_name: &str, cta: &str) -> String {
    fill(
        r##"
    <section class="hero">
      <div class="container">
        <h1>{{siteName}}<br><span>The Future Starts Here</span></h1>
        <p>Transform your business with our cutting-edge solutions. Built for performance, designed for success.</p>
        <div class="hero-buttons">
          <a href="#" class="btn btn-primary">{{cta}} →</a>
          <a href="#" class="btn btn-secondary">▶ See How It Works</a>
        </div>
      </div>
    </section>
  "##,
        &[("siteName", site_name), ("cta", cta)],
    )
}

fn features_preview(features: &[FeatureItem]) -> String {
    let cards = features
        .iter()
        .map(|f| {
            fill(
                r#"
    <div class="feature-card">
      <div class="feature-icon">⚡</div>
      <h3>{{title}}</h3>
      <p>{{description}}</p>
    </div>
  "#,
                &[("title", &f.title), ("description", &f.description)],
            )
        })
        .collect::<String>();

    fill(
        r#"
    <section class="features">
      <div class="container">
        <div class="section-header">
          <h2>Everything you need to succeed</h2>
          <p>Powerful features designed to help you achieve your goals</p>
        </div>
        <div class="features-grid">
          {{cards}}
        </div>
      </div>
    </section>
  "#,
        &[("cards", &cards)],
    )
}

fn pricing_preview(tiers: &[PricingTier]) -> String {
    let cards = tiers
        .iter()
        .map(|tier| {
            let badge = if tier.highlighted {
                r#"<div class="pricing-badge">Most Popular</div>"#
            } else {
                ""
            };
            let price = if tier.price == 0 {
                "Free".to_string()
            } else {
                format!("${}", tier.price)
            };
            let items = tier
                .features
                .iter()
                .take(4)
                .map(|f| format!("<li>{f}</li>"))
                .collect::<String>();

            fill(
                r#"
    <div class="pricing-card {{highlightClass}}">
      {{badge}}
      <h3>{{name}}</h3>
      <div class="pricing-price">{{price}}<span>/{{period}}</span></div>
      <ul class="pricing-features">
        {{items}}
      </ul>
      <button class="btn btn-primary" style="width: 100%">Get Started</button>
    </div>
  "#,
                &[
                    ("highlightClass", if tier.highlighted { "highlighted" } else { "" }),
                    ("badge", badge),
                    ("name", &tier.name),
                    ("price", &price),
                    ("period", &tier.period.to_string()),
                    ("items", &items),
                ],
            )
        })
        .collect::<String>();

    fill(
        r#"
    <section class="pricing">
      <div class="container">
        <div class="section-header">
          <h2>Simple, transparent pricing</h2>
          <p>Choose the plan that's right for you</p>
        </div>
        <div class="pricing-grid">
          {{cards}}
        </div>
      </div>
    </section>
  "#,
        &[("cards", &cards)],
    )
}

fn cta_preview(cta: &str) -> String {
    fill(
        r##"
    <section class="cta">
      <div class="container">
        <h2>Ready to get started?</h2>
        <p>Join thousands of satisfied customers and take your business to the next level.</p>
        <a href="#" class="btn btn-primary">{{cta}} →</a>
      </div>
    </section>
  "##,
        &[("cta", cta)],
    )
}

fn contact_preview() -> String {
    r#"
    <section class="contact">
      <div class="container">
        <div class="section-header">
          <h2>Get in touch</h2>
          <p>Have a question? We'd love to hear from you.</p>
        </div>
        <div class="contact-grid">
          <div>
            <h3 style="margin-bottom: 1rem;">Contact Information</h3>
            <p style="margin-bottom: 0.5rem;">📧 hello@example.com</p>
            <p style="margin-bottom: 0.5rem;">📞 +1 (555) 000-0000</p>
            <p>📍 San Francisco, CA</p>
          </div>
          <form class="contact-form">
            <div class="form-group">
              <label>Name</label>
              <input type="text" placeholder="Your name">
            </div>
            <div class="form-group">
              <label>Email</label>
              <input type="email" placeholder="you@example.com">
            </div>
            <div class="form-group">
              <label>Message</label>
              <textarea placeholder="Your message..."></textarea>
            </div>
            <button type="submit" class="btn btn-primary" style="width: 100%">Send Message</button>
          </form>
        </div>
      </div>
    </section>
  "#
    .to_string()
}

fn footer_preview(site_name: &str) -> String {
    let year = chrono::Utc::now().format("%Y").to_string();
    fill(
        r#"
    <footer class="footer">
      <div class="container">
        <p>© {{year}} {{siteName}}. All rights reserved.</p>
      </div>
    </footer>
  "#,
        &[("year", year.as_str()), ("siteName", site_name)],
    )
}

pub fn run(args: PreviewArgs, ctx: &AppContext) -> Result<()> {
    let prompt = args.prompt.join(" ");
    if prompt.trim().is_empty() {
        anyhow::bail!("No prompt given. Describe the website to preview.");
    }

    let intent = parse_prompt(&prompt);
    let html = render_preview(&intent);

    if ctx.dry_run {
        if !ctx.quiet {
            println!("{}", "DRY RUN: Would render preview:".yellow());
            println!("  Site: {}", intent.site_name);
            println!("  Sections: {}", intent.sections.len());
            println!("  Bytes: {}", html.len());
        }
        return Ok(());
    }

    if args.clipboard {
        let mut clipboard = arboard::Clipboard::new().context("clipboard init")?;
        clipboard
            .set_text(html.clone())
            .context("copy preview to clipboard")?;
        if !ctx.quiet {
            println!("{} Copied preview to clipboard", "✓".green());
        }
    }

    if args.stdout {
        println!("{html}");
        return Ok(());
    }

    // Config supplies the default output path when the flag is unset
    let config = crate::infra::config::load_config().unwrap_or_default();
    let output_raw = args.output.unwrap_or(config.preview.output_file);
    let expanded = shellexpand::tilde(&output_raw);
    let output = camino::Utf8PathBuf::from(expanded.as_ref());
    fs::write(output.as_std_path(), &html).with_context(|| format!("write {output}"))?;

    if !ctx.quiet {
        println!(
            "{} Rendered preview for {} to {}",
            "✓".green(),
            intent.site_name.bold(),
            output
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_includes_sections_iff_intent_does() {
        let intent = parse_prompt("page with pricing and contact form for 'Orbit'");
        let html = render_preview(&intent);
        assert!(html.contains(r#"<section class="pricing">"#));
        assert!(html.contains(r#"<section class="contact">"#));
        assert!(!html.contains(r#"<section class="hero">"#));
        assert!(html.contains("Orbit - Preview"));
    }

    #[test]
    fn dark_theme_switches_inline_palette() {
        let dark = render_preview(&parse_prompt("a dark site"));
        assert!(dark.contains(r#"<html lang="en" class="dark">"#));
        assert!(dark.contains("background: #111827"));

        let light = render_preview(&parse_prompt("a clean site"));
        assert!(light.contains(r#"<html lang="en" class="">"#));
        assert!(light.contains("background: #ffffff"));
    }

    #[test]
    fn primary_color_is_inlined() {
        let html = render_preview(&parse_prompt("use #EC4899 please"));
        assert!(html.contains("background: #EC4899"));
    }

    #[test]
    fn preview_has_no_leftover_markers() {
        for prompt in [
            "dark amazon store with hero, features, pricing, contact, call to action",
            "a clean minimal page",
        ] {
            let html = render_preview(&parse_prompt(prompt));
            assert!(!html.contains("{{"), "unsubstituted marker for prompt: {prompt}");
        }
    }

    #[test]
    fn pricing_preview_caps_listed_features() {
        let intent = parse_prompt("page with pricing");
        let html = render_preview(&intent);
        // The Professional tier lists six features; the preview shows four
        assert!(html.contains("Unlimited projects"));
        assert!(!html.contains("Custom integrations"));
        assert!(html.contains("Most Popular"));
    }
}
