//! Property tests for the parser invariants: they hold for arbitrary
//! input, not just well-formed briefs.

use proptest::prelude::*;
use sitewright::core::intent::SectionType;
use sitewright::parse_prompt;

fn hex_color_ok(color: &str) -> bool {
    color.len() == 7
        && color.starts_with('#')
        && color[1..].chars().all(|c| c.is_ascii_hexdigit())
}

proptest! {
    #[test]
    fn sections_are_nav_first_footer_last_unique(prompt in ".{0,200}") {
        let intent = parse_prompt(&prompt);

        prop_assert!(!intent.sections.is_empty());
        prop_assert_eq!(intent.sections.first(), Some(&SectionType::Nav));
        prop_assert_eq!(intent.sections.last(), Some(&SectionType::Footer));

        let mut seen = std::collections::HashSet::new();
        for section in &intent.sections {
            prop_assert!(seen.insert(section), "duplicate section {:?}", section);
        }
    }

    #[test]
    fn colors_are_always_six_digit_hex(prompt in ".{0,200}") {
        let intent = parse_prompt(&prompt);
        prop_assert!(hex_color_ok(&intent.primary_color), "bad primary {}", intent.primary_color);
        prop_assert!(hex_color_ok(&intent.secondary_color), "bad secondary {}", intent.secondary_color);
    }

    #[test]
    fn feature_and_tier_counts_stay_in_range(prompt in ".{0,200}") {
        let intent = parse_prompt(&prompt);

        if let Some(features) = &intent.features {
            prop_assert!((1..=8).contains(&features.len()));
        }
        if let Some(tiers) = &intent.pricing_tiers {
            prop_assert_eq!(tiers.len(), 3);
        }
    }

    #[test]
    fn keywords_are_capped_and_unique(prompt in ".{0,200}") {
        let intent = parse_prompt(&prompt);
        prop_assert!(intent.keywords.len() <= 10);

        let mut seen = std::collections::HashSet::new();
        for keyword in &intent.keywords {
            prop_assert!(seen.insert(keyword.clone()));
        }
    }

    #[test]
    fn parsing_is_idempotent(prompt in ".{0,200}") {
        prop_assert_eq!(parse_prompt(&prompt), parse_prompt(&prompt));
    }

    #[test]
    fn site_name_is_never_empty(prompt in ".{0,200}") {
        prop_assert!(!parse_prompt(&prompt).site_name.is_empty());
    }
}
