//! Behavioral suite for prompt parsing: extraction of every intent axis
//! plus the documented defaults for empty or ambiguous briefs.

use sitewright::core::intent::{Industry, SectionType, Theme, Tone};
use sitewright::parse_prompt;

mod site_name {
    use super::*;

    #[test]
    fn extracts_from_single_quotes() {
        let result = parse_prompt("Create a website for 'My Awesome Company'");
        assert_eq!(result.site_name, "My Awesome Company");
    }

    #[test]
    fn extracts_from_double_quotes() {
        let result = parse_prompt(r#"Build a landing page for "TechStartup Labs""#);
        assert_eq!(result.site_name, "TechStartup Labs");
    }

    #[test]
    fn extracts_from_for_pattern() {
        let result = parse_prompt("Create a website for CloudSync Pro — a SaaS product");
        assert_eq!(result.site_name, "CloudSync Pro");
    }

    #[test]
    fn uses_default_when_none_found() {
        let result = parse_prompt("Create a simple landing page");
        assert_eq!(result.site_name, "My Website");
    }

    #[test]
    fn title_mirrors_site_name() {
        let result = parse_prompt("Create a website for 'My Awesome Company'");
        assert_eq!(result.title, result.site_name);
    }
}

mod color {
    use super::*;

    #[test]
    fn extracts_hex_color() {
        let result = parse_prompt("Create a website with color #FF5733");
        assert_eq!(result.primary_color, "#FF5733");
    }

    #[test]
    fn extracts_six_digit_hex() {
        let result = parse_prompt("Use #0B74DE as primary color");
        assert_eq!(result.primary_color, "#0B74DE");
    }

    #[test]
    fn defaults_to_blue() {
        let result = parse_prompt("Create a simple website");
        assert_eq!(result.primary_color, "#0B74DE");
    }

    #[test]
    fn named_color_phrase() {
        let result = parse_prompt("Create a site with color green please");
        assert_eq!(result.primary_color, "#10B981");
    }

    #[test]
    fn secondary_is_derived_and_well_formed() {
        let result = parse_prompt("Use #0B74DE as primary color");
        assert_eq!(result.secondary_color, "#cb7520");
    }
}

mod sections {
    use super::*;

    #[test]
    fn always_includes_nav_and_footer() {
        let result = parse_prompt("Create a website");
        assert!(result.sections.contains(&SectionType::Nav));
        assert!(result.sections.contains(&SectionType::Footer));
    }

    #[test]
    fn nav_first_footer_last() {
        let result = parse_prompt("Create a website with pricing and faq");
        assert_eq!(result.sections.first(), Some(&SectionType::Nav));
        assert_eq!(result.sections.last(), Some(&SectionType::Footer));
    }

    #[test]
    fn extracts_hero() {
        let result = parse_prompt("Create a landing page with hero banner");
        assert!(result.sections.contains(&SectionType::Hero));
    }

    #[test]
    fn extracts_features() {
        let result = parse_prompt("Include a features section");
        assert!(result.sections.contains(&SectionType::Features));
    }

    #[test]
    fn extracts_pricing() {
        let result = parse_prompt("Add pricing plans");
        assert!(result.sections.contains(&SectionType::Pricing));
    }

    #[test]
    fn extracts_contact() {
        let result = parse_prompt("Include a contact form");
        assert!(result.sections.contains(&SectionType::Contact));
    }

    #[test]
    fn extracts_multiple() {
        let result = parse_prompt("Include hero, features, pricing, and contact form");
        assert!(result.sections.contains(&SectionType::Hero));
        assert!(result.sections.contains(&SectionType::Features));
        assert!(result.sections.contains(&SectionType::Pricing));
        assert!(result.sections.contains(&SectionType::Contact));
    }

    #[test]
    fn bare_prompt_gets_default_trio() {
        let result = parse_prompt("Create a website");
        assert_eq!(
            result.sections,
            vec![
                SectionType::Nav,
                SectionType::Hero,
                SectionType::Features,
                SectionType::Cta,
                SectionType::Footer,
            ]
        );
    }
}

mod tone {
    use super::*;

    #[test]
    fn extracts_professional() {
        assert_eq!(parse_prompt("Create a professional business website").tone, Tone::Professional);
    }

    #[test]
    fn extracts_casual() {
        assert_eq!(parse_prompt("Make it casual and relaxed").tone, Tone::Casual);
    }

    #[test]
    fn extracts_playful() {
        assert_eq!(parse_prompt("Design something playful and fun").tone, Tone::Playful);
    }

    #[test]
    fn extracts_confident() {
        assert_eq!(parse_prompt("Tone should be confident and bold").tone, Tone::Confident);
    }

    #[test]
    fn defaults_to_professional() {
        assert_eq!(parse_prompt("Create a website").tone, Tone::Professional);
    }
}

mod theme {
    use super::*;

    #[test]
    fn extracts_light() {
        assert_eq!(parse_prompt("Use a light, bright theme").theme, Theme::Light);
    }

    #[test]
    fn extracts_dark() {
        assert_eq!(parse_prompt("Use a dark theme").theme, Theme::Dark);
    }

    #[test]
    fn extracts_amazon() {
        assert_eq!(parse_prompt("Amazon-like theme for e-commerce").theme, Theme::Amazon);
    }

    #[test]
    fn extracts_corporate() {
        assert_eq!(parse_prompt("Corporate enterprise theme").theme, Theme::Corporate);
    }

    #[test]
    fn defaults_to_light() {
        assert_eq!(parse_prompt("Create a website").theme, Theme::Light);
    }
}

mod feature_count {
    use super::*;

    #[test]
    fn from_n_features() {
        let result = parse_prompt("Include 4 features");
        assert_eq!(result.features.unwrap().len(), 4);
    }

    #[test]
    fn from_parenthesized() {
        let result = parse_prompt("Add features (3) to the page");
        assert_eq!(result.features.unwrap().len(), 3);
    }

    #[test]
    fn clamps_to_ceiling_of_eight() {
        let result = parse_prompt("Include 20 features");
        assert_eq!(result.features.unwrap().len(), 8);
    }

    #[test]
    fn defaults_to_three() {
        let result = parse_prompt("Include features section");
        assert_eq!(result.features.unwrap().len(), 3);
    }

    #[test]
    fn absent_without_features_section() {
        let result = parse_prompt("Add pricing plans");
        assert!(result.features.is_none());
    }
}

mod industry {
    use super::*;

    #[test]
    fn detects_tech() {
        assert_eq!(parse_prompt("Create a SaaS software platform").industry, Some(Industry::Tech));
    }

    #[test]
    fn detects_ecommerce() {
        assert_eq!(parse_prompt("Build an online store").industry, Some(Industry::Ecommerce));
    }

    #[test]
    fn detects_agency() {
        assert_eq!(parse_prompt("Design agency portfolio").industry, Some(Industry::Agency));
    }

    #[test]
    fn unknown_is_none() {
        assert_eq!(parse_prompt("Create a simple website").industry, None);
    }

    #[test]
    fn tech_features_come_from_tech_catalog() {
        let result = parse_prompt("SaaS product with features");
        let features = result.features.unwrap();
        assert_eq!(features[0].title, "Lightning Fast");
    }
}

mod cta {
    use super::*;

    #[test]
    fn primary_follows_tone() {
        let casual = parse_prompt("Create a casual website");
        assert_eq!(casual.cta.primary, "Get Started");

        let confident = parse_prompt("Tone: confident");
        assert_eq!(confident.cta.primary, "Start Now");
    }

    #[test]
    fn secondary_is_always_learn_more() {
        let result = parse_prompt("Create a website");
        assert_eq!(result.cta.secondary, "Learn More");
    }
}

mod pricing {
    use super::*;

    #[test]
    fn tiers_present_with_pricing_section() {
        let result = parse_prompt("Include pricing plans");
        let tiers = result.pricing_tiers.expect("tiers attached");
        assert_eq!(tiers.len(), 3);
        assert_eq!(tiers[0].name, "Starter");
        assert_eq!(tiers[1].name, "Professional");
        assert_eq!(tiers[2].name, "Enterprise");
    }

    #[test]
    fn middle_tier_is_highlighted() {
        let result = parse_prompt("Add pricing");
        let tiers = result.pricing_tiers.expect("tiers attached");
        assert!(tiers[1].highlighted);
    }

    #[test]
    fn absent_without_pricing_section() {
        let result = parse_prompt("Include a contact form");
        assert!(result.pricing_tiers.is_none());
    }
}

mod keywords {
    use super::*;

    #[test]
    fn extracts_salient_tokens() {
        let result = parse_prompt("Create a professional SaaS dashboard for analytics");
        assert!(result.keywords.contains(&"professional".to_string()));
        assert!(result.keywords.contains(&"saas".to_string()));
        assert!(result.keywords.contains(&"dashboard".to_string()));
        assert!(result.keywords.contains(&"analytics".to_string()));
    }

    #[test]
    fn filters_stop_words() {
        let result = parse_prompt("Create a website for the company");
        assert!(!result.keywords.contains(&"create".to_string()));
        assert!(!result.keywords.contains(&"website".to_string()));
        assert!(!result.keywords.contains(&"the".to_string()));
        assert!(!result.keywords.contains(&"for".to_string()));
        assert!(result.keywords.contains(&"company".to_string()));
    }

    #[test]
    fn caps_at_ten() {
        let result = parse_prompt(
            "This is a very long prompt with many different words about various topics \
             including technology innovation design development marketing sales business \
             growth strategy planning",
        );
        assert!(result.keywords.len() <= 10);
    }
}

mod full_prompt {
    use super::*;

    #[test]
    fn parses_complex_brief() {
        let prompt = "Create a professional landing page for 'ProbFixora Labs' — AI developer \
                      tools, color #0B74DE, include hero, features (3), pricing, contact form, \
                      tone: confident, theme: amazon-like";

        let result = parse_prompt(prompt);

        assert_eq!(result.site_name, "ProbFixora Labs");
        assert_eq!(result.primary_color, "#0B74DE");
        assert_eq!(result.tone, Tone::Confident);
        assert_eq!(result.theme, Theme::Amazon);
        assert!(result.sections.contains(&SectionType::Hero));
        assert!(result.sections.contains(&SectionType::Features));
        assert!(result.sections.contains(&SectionType::Pricing));
        assert!(result.sections.contains(&SectionType::Contact));
        assert_eq!(result.features.as_ref().unwrap().len(), 3);
        assert_eq!(result.industry, Some(Industry::Tech));
    }

    #[test]
    fn parsing_is_idempotent() {
        let prompt = "Create a playful shop for 'Pixel Paws' with pricing, features (5), dark";
        assert_eq!(parse_prompt(prompt), parse_prompt(prompt));
    }

    #[test]
    fn pages_are_fixed() {
        assert_eq!(parse_prompt("anything at all").pages, vec!["Home".to_string()]);
    }
}
