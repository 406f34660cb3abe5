//! Structured intent model extracted from a website brief.
//!
//! An [`Intent`] is produced once per prompt by [`crate::core::parse::parse_prompt`],
//! never mutated afterwards, and consumed by the generator, the preview
//! renderer, and the JSON emitters.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Voice of the generated copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Professional,
    Casual,
    Playful,
    Confident,
    Formal,
    Friendly,
}

impl Default for Tone {
    fn default() -> Self {
        Tone::Professional
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Tone::Professional => "professional",
            Tone::Casual => "casual",
            Tone::Playful => "playful",
            Tone::Confident => "confident",
            Tone::Formal => "formal",
            Tone::Friendly => "friendly",
        };
        f.write_str(s)
    }
}

/// Visual palette family baked into the generated components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    Amazon,
    Corporate,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::Light
    }
}

impl Theme {
    /// Dark-surface rendering applies to the dark and amazon families.
    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Dark | Theme::Amazon)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::Amazon => "amazon",
            Theme::Corporate => "corporate",
        };
        f.write_str(s)
    }
}

/// A named, reusable page region that may or may not be requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionType {
    Nav,
    Hero,
    Features,
    Pricing,
    Gallery,
    Testimonials,
    Contact,
    About,
    Cta,
    Faq,
    Team,
    Stats,
    Footer,
}

impl fmt::Display for SectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SectionType::Nav => "nav",
            SectionType::Hero => "hero",
            SectionType::Features => "features",
            SectionType::Pricing => "pricing",
            SectionType::Gallery => "gallery",
            SectionType::Testimonials => "testimonials",
            SectionType::Contact => "contact",
            SectionType::About => "about",
            SectionType::Cta => "cta",
            SectionType::Faq => "faq",
            SectionType::Team => "team",
            SectionType::Stats => "stats",
            SectionType::Footer => "footer",
        };
        f.write_str(s)
    }
}

impl SectionType {
    /// Capitalized label for docs and summaries (`hero` -> `Hero`).
    pub fn label(self) -> String {
        crate::infra::utils::TextUtils::capitalize(&self.to_string())
    }
}

/// Business vertical detected from the brief.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Industry {
    Tech,
    Ecommerce,
    Agency,
    Healthcare,
    Finance,
    Education,
    Realestate,
}

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Industry::Tech => "tech",
            Industry::Ecommerce => "ecommerce",
            Industry::Agency => "agency",
            Industry::Healthcare => "healthcare",
            Industry::Finance => "finance",
            Industry::Education => "education",
            Industry::Realestate => "realestate",
        };
        f.write_str(s)
    }
}

/// One entry in a features grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
}

impl FeatureItem {
    fn new(title: &str, description: &str, icon: &str) -> Self {
        Self {
            id: String::new(),
            title: title.to_string(),
            description: description.to_string(),
            icon: icon.to_string(),
        }
    }

    /// Built-in feature catalog for a vertical, `count` entries with ids
    /// renumbered from 1. Each catalog holds eight entries so the [1,8]
    /// clamp ceiling is reachable.
    pub fn defaults(count: usize, industry: Option<Industry>) -> Vec<FeatureItem> {
        let catalog = match industry {
            Some(Industry::Tech) => tech_catalog(),
            _ => general_catalog(),
        };

        catalog
            .into_iter()
            .take(count)
            .enumerate()
            .map(|(i, mut item)| {
                item.id = (i + 1).to_string();
                item
            })
            .collect()
    }
}

fn tech_catalog() -> [FeatureItem; 8] {
    [
        FeatureItem::new(
            "Lightning Fast",
            "Built for speed with modern architecture",
            "BoltIcon",
        ),
        FeatureItem::new(
            "Secure & Reliable",
            "Enterprise-grade security built-in",
            "ShieldCheckIcon",
        ),
        FeatureItem::new(
            "Easy Integration",
            "Connect with your favorite tools",
            "PuzzlePieceIcon",
        ),
        FeatureItem::new(
            "24/7 Support",
            "Always here when you need us",
            "ChatBubbleLeftRightIcon",
        ),
        FeatureItem::new(
            "Analytics Dashboard",
            "Real-time insights at your fingertips",
            "ChartBarIcon",
        ),
        FeatureItem::new("Cloud Native", "Scale effortlessly as you grow", "CloudIcon"),
        FeatureItem::new(
            "API First",
            "Automate every workflow with a complete API",
            "CodeBracketIcon",
        ),
        FeatureItem::new(
            "Global Scale",
            "Deployed close to your users worldwide",
            "GlobeAltIcon",
        ),
    ]
}

fn general_catalog() -> [FeatureItem; 8] {
    [
        FeatureItem::new(
            "Premium Quality",
            "Uncompromising quality in everything we do",
            "StarIcon",
        ),
        FeatureItem::new(
            "Expert Team",
            "Professionals dedicated to your success",
            "UserGroupIcon",
        ),
        FeatureItem::new(
            "Fast Delivery",
            "Quick turnaround without sacrificing quality",
            "RocketLaunchIcon",
        ),
        FeatureItem::new(
            "Best Value",
            "Competitive pricing for premium services",
            "CurrencyDollarIcon",
        ),
        FeatureItem::new(
            "Custom Solutions",
            "Tailored to your unique needs",
            "WrenchScrewdriverIcon",
        ),
        FeatureItem::new(
            "Ongoing Support",
            "Long-term partnership and support",
            "LifebuoyIcon",
        ),
        FeatureItem::new(
            "Trusted Partner",
            "A track record our clients rely on",
            "HandThumbUpIcon",
        ),
        FeatureItem::new(
            "Flexible Plans",
            "Options that grow alongside your goals",
            "AdjustmentsHorizontalIcon",
        ),
    ]
}

/// Billing period for a pricing tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Period {
    Monthly,
    Yearly,
    OneTime,
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Period::Monthly => "monthly",
            Period::Yearly => "yearly",
            Period::OneTime => "one-time",
        };
        f.write_str(s)
    }
}

/// One column of a pricing table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingTier {
    pub id: String,
    pub name: String,
    pub price: u32,
    pub period: Period,
    pub description: String,
    pub features: Vec<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub highlighted: bool,
    pub cta: String,
}

impl PricingTier {
    /// The fixed Starter/Professional/Enterprise ladder; the middle tier
    /// carries the `highlighted` badge.
    pub fn defaults() -> Vec<PricingTier> {
        vec![
            PricingTier {
                id: "starter".to_string(),
                name: "Starter".to_string(),
                price: 0,
                period: Period::Monthly,
                description: "Perfect for getting started".to_string(),
                features: vec![
                    "Up to 3 projects".to_string(),
                    "Basic analytics".to_string(),
                    "Community support".to_string(),
                    "1GB storage".to_string(),
                ],
                highlighted: false,
                cta: "Get Started Free".to_string(),
            },
            PricingTier {
                id: "pro".to_string(),
                name: "Professional".to_string(),
                price: 29,
                period: Period::Monthly,
                description: "For growing teams".to_string(),
                features: vec![
                    "Unlimited projects".to_string(),
                    "Advanced analytics".to_string(),
                    "Priority support".to_string(),
                    "10GB storage".to_string(),
                    "Team collaboration".to_string(),
                    "Custom integrations".to_string(),
                ],
                highlighted: true,
                cta: "Start Pro Trial".to_string(),
            },
            PricingTier {
                id: "enterprise".to_string(),
                name: "Enterprise".to_string(),
                price: 99,
                period: Period::Monthly,
                description: "For large organizations".to_string(),
                features: vec![
                    "Everything in Pro".to_string(),
                    "Unlimited storage".to_string(),
                    "Dedicated support".to_string(),
                    "Custom contracts".to_string(),
                    "SLA guarantee".to_string(),
                    "White-label options".to_string(),
                ],
                highlighted: false,
                cta: "Contact Sales".to_string(),
            },
        ]
    }
}

/// Call-to-action copy pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cta {
    pub primary: String,
    pub secondary: String,
}

impl Cta {
    /// Primary text is a tone lookup with a default; secondary is fixed.
    pub fn for_tone(tone: Tone) -> Cta {
        let primary = match tone {
            Tone::Casual => "Get Started",
            Tone::Playful => "Let's Go!",
            Tone::Confident => "Start Now",
            _ => "Get Started Today",
        };
        Cta {
            primary: primary.to_string(),
            secondary: "Learn More".to_string(),
        }
    }
}

/// The structured record extracted from a free-text brief, driving all
/// downstream generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Intent {
    pub site_name: String,
    pub title: String,
    pub tone: Tone,
    pub theme: Theme,
    pub primary_color: String,
    pub secondary_color: String,
    pub sections: Vec<SectionType>,
    pub pages: Vec<String>,
    pub keywords: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<Industry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<FeatureItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pricing_tiers: Option<Vec<PricingTier>>,
    pub cta: Cta,
}

impl Intent {
    pub fn has_section(&self, section: SectionType) -> bool {
        self.sections.contains(&section)
    }
}
