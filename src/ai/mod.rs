//! Hosted-model HTML path: sends the brief to a configured provider and
//! treats the returned single-file HTML document as the entire
//! deliverable, bypassing the parser and generator.
//!
//! Failures at this boundary are folded into a result value carrying
//! `success: false` and a human-readable message; they never escape as
//! errors. Keys arrive through an explicit [`AiConfig`], never ambient
//! environment reads inside nested logic.

mod error;

pub use error::AiError;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use rand::prelude::IndexedRandom;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fs;
use std::time::Duration;
use tracing::{debug, warn};

use crate::cli::{AiArgs, AppContext};
use crate::core::intent::Tone;
use crate::infra::config::{AiConfig, AiProvider};

const MAX_RETRIES: u32 = 3;
const INITIAL_RETRY_DELAY_MS: u64 = 1000;
const MAX_RETRY_DELAY_MS: u64 = 10_000;
const REQUEST_TIMEOUT_SECS: u64 = 90;

const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";
const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// System prompt steering the provider toward one complete document.
const SYSTEM_PROMPT: &str = "You are an expert web developer. Build a complete, modern, \
mobile-responsive single-page website for the user's brief as ONE self-contained HTML file: \
embed React 18, ReactDOM, Babel, and Tailwind CSS via CDN links, use inline SVG icons, and add \
realistic placeholder content. Return ONLY the complete HTML code starting with <!DOCTYPE html>. \
No markdown blocks or explanations.";

/// Outcome of a hosted-model run. Always a value, never an exception.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HtmlResult {
    pub success: bool,
    pub html: String,
    pub model: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl HtmlResult {
    fn failure(model: &str, message: String) -> Self {
        Self {
            success: false,
            html: String::new(),
            model: model.to_string(),
            error: Some(message),
        }
    }
}

/// Request a complete HTML document for the brief. Transient failures
/// are retried with exponential backoff; terminal failures become a
/// `success: false` result.
pub fn generate_html(prompt: &str, config: &AiConfig) -> HtmlResult {
    let mut attempt = 0;
    loop {
        match request_html(prompt, config) {
            Ok(html) => {
                return HtmlResult {
                    success: true,
                    html,
                    model: config.model.clone(),
                    error: None,
                };
            }
            Err(err) if err.is_retryable() && attempt + 1 < MAX_RETRIES => {
                let delay = retry_delay(attempt);
                warn!(%err, attempt, "request failed, retrying");
                std::thread::sleep(delay);
                attempt += 1;
            }
            Err(err) => return HtmlResult::failure(&config.model, err.to_string()),
        }
    }
}

fn retry_delay(attempt: u32) -> Duration {
    let delay = INITIAL_RETRY_DELAY_MS * 2u64.pow(attempt);
    Duration::from_millis(delay.min(MAX_RETRY_DELAY_MS))
}

fn client() -> Result<Client, AiError> {
    Client::builder()
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()
        .map_err(|e| AiError::Network(e.to_string()))
}

fn request_html(prompt: &str, config: &AiConfig) -> Result<String, AiError> {
    match config.provider {
        AiProvider::OpenAi => request_openai(prompt, config),
        AiProvider::Gemini => request_gemini(prompt, config),
    }
}

fn request_openai(prompt: &str, config: &AiConfig) -> Result<String, AiError> {
    let api_key = config
        .openai_api_key
        .as_deref()
        .ok_or(AiError::MissingKey("openai"))?;

    let body = json!({
        "model": config.model,
        "messages": [
            { "role": "system", "content": SYSTEM_PROMPT },
            { "role": "user", "content": prompt },
        ],
        "max_tokens": config.max_tokens,
        "temperature": 0.7,
    });

    let response = client()?
        .post(OPENAI_API_URL)
        .bearer_auth(api_key)
        .json(&body)
        .send()
        .map_err(|e| AiError::Network(e.to_string()))?;

    let payload = read_payload(response)?;
    let content = payload["choices"][0]["message"]["content"]
        .as_str()
        .ok_or_else(|| AiError::Parse("missing choices[0].message.content".to_string()))?;

    Ok(strip_code_fences(content))
}

fn request_gemini(prompt: &str, config: &AiConfig) -> Result<String, AiError> {
    let api_key = config
        .gemini_api_key
        .as_deref()
        .ok_or(AiError::MissingKey("gemini"))?;

    let url = format!("{GEMINI_API_URL}/{}:generateContent?key={api_key}", config.model);
    let body = json!({
        "systemInstruction": { "parts": [{ "text": SYSTEM_PROMPT }] },
        "contents": [{ "parts": [{ "text": prompt }] }],
        "generationConfig": { "maxOutputTokens": config.max_tokens, "temperature": 0.7 },
    });

    let response = client()?
        .post(&url)
        .json(&body)
        .send()
        .map_err(|e| AiError::Network(e.to_string()))?;

    let payload = read_payload(response)?;
    let content = payload["candidates"][0]["content"]["parts"][0]["text"]
        .as_str()
        .ok_or_else(|| AiError::Parse("missing candidates[0].content.parts[0].text".to_string()))?;

    Ok(strip_code_fences(content))
}

fn read_payload(response: reqwest::blocking::Response) -> Result<serde_json::Value, AiError> {
    let status = response.status();

    if status.as_u16() == 429 {
        return Err(AiError::RateLimit(status.to_string()));
    }
    if !status.is_success() {
        let message = response.text().unwrap_or_else(|_| status.to_string());
        return Err(AiError::Api {
            status: status.as_u16(),
            message,
        });
    }

    response
        .json::<serde_json::Value>()
        .map_err(|e| AiError::Parse(e.to_string()))
}

/// Strip a wrapping markdown code fence, with or without a language tag.
fn strip_code_fences(content: &str) -> String {
    let trimmed = content.trim();
    if !trimmed.starts_with("```") {
        return trimmed.to_string();
    }

    let without_open = match trimmed.find('\n') {
        Some(idx) => &trimmed[idx + 1..],
        None => return String::new(),
    };
    without_open
        .trim_end()
        .trim_end_matches("```")
        .trim()
        .to_string()
}

/// Offline tagline fallback, keyed by tone. Selection is random and
/// deliberately lives outside the parser's determinism guarantee.
pub fn fallback_tagline(tone: Tone) -> String {
    let pool: &[&str] = match tone {
        Tone::Professional => &[
            "Excellence in every detail",
            "Your success, our mission",
            "Trusted solutions for modern businesses",
        ],
        Tone::Casual => &[
            "Making life easier, one click at a time",
            "Simple solutions for everyday challenges",
            "Welcome to something awesome",
        ],
        Tone::Playful => &[
            "Let's build something amazing together!",
            "Where creativity meets innovation",
            "The fun way to get things done",
        ],
        Tone::Confident => &[
            "The future starts here",
            "Leading the way forward",
            "Bold solutions for bold ideas",
        ],
        Tone::Formal => &[
            "Setting the standard for excellence",
            "Precision and professionalism",
            "Your trusted partner in success",
        ],
        Tone::Friendly => &[
            "We're here to help you succeed",
            "Together, we achieve more",
            "Your journey to success starts here",
        ],
    };

    let mut rng = rand::rng();
    pool.choose(&mut rng)
        .copied()
        .unwrap_or("Excellence in every detail")
        .to_string()
}

pub fn run(args: AiArgs, ctx: &AppContext) -> Result<()> {
    let prompt = args.prompt.join(" ");
    if prompt.trim().is_empty() {
        anyhow::bail!("No prompt given. Describe the website to request.");
    }

    let mut ai_config = crate::infra::config::load_config()
        .unwrap_or_default()
        .ai;
    if let Some(provider) = args.provider {
        ai_config.provider = provider;
    }
    if let Some(model) = args.model {
        ai_config.model = model;
    }

    if ctx.dry_run {
        if !ctx.quiet {
            println!("{}", "DRY RUN: Would request:".yellow());
            println!("  Provider: {:?}", ai_config.provider);
            println!("  Model: {}", ai_config.model);
            println!("  Prompt: {prompt}");
        }
        return Ok(());
    }

    debug!(model = %ai_config.model, "requesting hosted-model document");
    let result = generate_html(&prompt, &ai_config);

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&result).context("serialize result")?
        );
        return Ok(());
    }

    if !result.success {
        let message = result.error.unwrap_or_else(|| "unknown error".to_string());
        if !ctx.quiet {
            println!("{} {}", "✗".red(), message);
            println!(
                "  Falling back is easy: `swr generate` builds the same brief offline."
            );
        }
        return Ok(());
    }

    let expanded = shellexpand::tilde(&args.output);
    let output = camino::Utf8PathBuf::from(expanded.as_ref());
    fs::write(output.as_std_path(), &result.html).with_context(|| format!("write {output}"))?;

    if !ctx.quiet {
        println!(
            "{} Wrote {} bytes from {} to {}",
            "✓".green(),
            result.html.len(),
            result.model,
            output
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_becomes_failure_value() {
        let config = AiConfig::default();
        assert!(config.openai_api_key.is_none());

        let result = generate_html("a site", &config);
        assert!(!result.success);
        assert!(result.html.is_empty());
        assert!(result.error.unwrap().contains("API key not configured"));
    }

    #[test]
    fn fence_stripping() {
        assert_eq!(
            strip_code_fences("```html\n<!DOCTYPE html>...\n```"),
            "<!DOCTYPE html>..."
        );
        assert_eq!(
            strip_code_fences("```\n<!DOCTYPE html>\n```"),
            "<!DOCTYPE html>"
        );
        assert_eq!(strip_code_fences("<!DOCTYPE html>"), "<!DOCTYPE html>");
    }

    #[test]
    fn retry_delays_back_off_and_cap() {
        assert_eq!(retry_delay(0), Duration::from_millis(1000));
        assert_eq!(retry_delay(1), Duration::from_millis(2000));
        assert_eq!(retry_delay(10), Duration::from_millis(10_000));
    }

    #[test]
    fn taglines_come_from_the_tone_pool() {
        let tagline = fallback_tagline(Tone::Confident);
        assert!([
            "The future starts here",
            "Leading the way forward",
            "Bold solutions for bold ideas",
        ]
        .contains(&tagline.as_str()));
    }
}
