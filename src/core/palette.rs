//! Deterministic color palette derivation.
//!
//! Converts the primary brand color through HSL space to derive light and
//! dark variants, a complementary secondary, and an accent. All rounding
//! is half-away-from-zero so the output is bit-reproducible across runs
//! and platforms.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Derived color set, all values 6-digit lowercase hex (except `primary`,
/// which passes through as given).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    pub primary: String,
    pub primary_light: String,
    pub primary_dark: String,
    pub secondary: String,
    pub accent: String,
}

fn hex_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)^#?([a-f\d]{2})([a-f\d]{2})([a-f\d]{2})$").unwrap())
}

/// Parse `#RRGGBB` into quantized HSL components `(h, s, l)` with
/// h in [0,360], s/l in [0,100]. Malformed input degrades to the
/// neutral blue base (210, 100, 50) rather than erroring.
pub fn hex_to_hsl(hex: &str) -> (f64, f64, f64) {
    let Some(caps) = hex_re().captures(hex) else {
        return (210.0, 100.0, 50.0);
    };

    let channel = |i: usize| -> f64 {
        // Capture groups are guaranteed two hex digits by the regex
        u8::from_str_radix(&caps[i], 16).unwrap_or(0) as f64 / 255.0
    };
    let r = channel(1);
    let g = channel(2);
    let b = channel(3);

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    let mut h = 0.0;
    let mut s = 0.0;
    if max != min {
        let d = max - min;
        s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };
        h = if max == r {
            ((g - b) / d + if g < b { 6.0 } else { 0.0 }) / 6.0
        } else if max == g {
            ((b - r) / d + 2.0) / 6.0
        } else {
            ((r - g) / d + 4.0) / 6.0
        };
    }

    ((h * 360.0).round(), (s * 100.0).round(), (l * 100.0).round())
}

/// Render HSL components (h in degrees, s/l in percent) as 6-digit
/// lowercase hex, rounding each channel half away from zero on the
/// final x255 scaling.
pub fn hsl_to_hex(h: f64, s: f64, l: f64) -> String {
    let s = s / 100.0;
    let l = l / 100.0;
    let a = s * l.min(1.0 - l);

    let f = |n: f64| -> u8 {
        let k = (n + h / 30.0) % 12.0;
        let color = l - a * (k - 3.0).min(9.0 - k).min(1.0).max(-1.0);
        (255.0 * color).round() as u8
    };

    format!("#{:02x}{:02x}{:02x}", f(0.0), f(8.0), f(4.0))
}

/// Derive the full palette from the primary hex color:
/// light/dark via clamped lightness shifts, secondary via a half-turn
/// hue rotation at 80% saturation, accent via a 45-degree rotation.
pub fn generate_palette(primary_hex: &str) -> Palette {
    let (h, s, l) = hex_to_hsl(primary_hex);

    Palette {
        primary: primary_hex.to_string(),
        primary_light: hsl_to_hex(h, s, (l + 20.0).min(95.0)),
        primary_dark: hsl_to_hex(h, s, (l - 20.0).max(10.0)),
        secondary: hsl_to_hex((h + 180.0) % 360.0, s * 0.8, l),
        accent: hsl_to_hex((h + 45.0) % 360.0, s, l),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_to_hsl_quantizes() {
        assert_eq!(hex_to_hsl("#0B74DE"), (210.0, 91.0, 46.0));
        // Leading '#' is optional, case-insensitive
        assert_eq!(hex_to_hsl("0b74de"), (210.0, 91.0, 46.0));
    }

    #[test]
    fn hex_to_hsl_grayscale_has_zero_saturation() {
        let (_, s, l) = hex_to_hsl("#808080");
        assert_eq!(s, 0.0);
        assert_eq!(l, 50.0);
    }

    #[test]
    fn malformed_hex_degrades_to_neutral_base() {
        assert_eq!(hex_to_hsl("#abc"), (210.0, 100.0, 50.0));
        assert_eq!(hex_to_hsl("not a color"), (210.0, 100.0, 50.0));
    }

    #[test]
    fn hsl_to_hex_reference_values() {
        assert_eq!(hsl_to_hex(210.0, 91.0, 46.0), "#0b75e0");
        assert_eq!(hsl_to_hex(0.0, 0.0, 100.0), "#ffffff");
        assert_eq!(hsl_to_hex(0.0, 0.0, 0.0), "#000000");
    }

    #[test]
    fn palette_for_brand_blue() {
        let p = generate_palette("#0B74DE");
        assert_eq!(p.primary, "#0B74DE");
        assert_eq!(p.primary_light, "#59a8f7");
        assert_eq!(p.primary_dark, "#06427f");
        assert_eq!(p.secondary, "#cb7520");
        assert_eq!(p.accent, "#400be0");
    }

    #[test]
    fn palette_is_deterministic() {
        assert_eq!(generate_palette("#EC4899"), generate_palette("#EC4899"));
    }

    #[test]
    fn lightness_shifts_are_clamped() {
        // Near-white primary: light variant clamps at 95
        let (h, s, l) = hex_to_hsl("#fafafa");
        assert!(l > 90.0);
        let p = generate_palette("#fafafa");
        assert_eq!(p.primary_light, hsl_to_hex(h, s, 95.0));
        // Near-black primary: dark variant clamps at 10
        let (h, s, _) = hex_to_hsl("#0a0a0a");
        let p = generate_palette("#0a0a0a");
        assert_eq!(p.primary_dark, hsl_to_hex(h, s, 10.0));
    }
}
