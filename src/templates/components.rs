//! Section component templates.
//!
//! Every file bakes in its own literal styling choices at render time:
//! the dark/light palette is selected by the intent's theme and the copy
//! by its tone. There is no shared runtime theming layer in the emitted
//! project beyond the `useTheme` toggle.

use chrono::{Datelike, Utc};
use serde::Serialize;

use crate::core::intent::{Intent, Tone};
use crate::infra::utils::{SlugUtils, TextUtils};
use crate::templates::fill;

/// Emitted-feature shape embedded as JSON in `Features.tsx`.
#[derive(Serialize)]
struct EmbeddedFeature {
    title: String,
    description: String,
    icon: String,
}

/// Catalog icon name -> lucide-react import.
const ICON_MAP: &[(&str, &str)] = &[
    ("BoltIcon", "Zap"),
    ("ShieldCheckIcon", "Shield"),
    ("PuzzlePieceIcon", "Puzzle"),
    ("ChatBubbleLeftRightIcon", "MessageSquare"),
    ("ChartBarIcon", "BarChart3"),
    ("CloudIcon", "Cloud"),
    ("StarIcon", "Star"),
    ("UserGroupIcon", "Users"),
    ("RocketLaunchIcon", "Rocket"),
    ("CurrencyDollarIcon", "DollarSign"),
    ("WrenchScrewdriverIcon", "Wrench"),
    ("LifebuoyIcon", "LifeBuoy"),
    ("CodeBracketIcon", "Code"),
    ("GlobeAltIcon", "Globe"),
    ("HandThumbUpIcon", "ThumbsUp"),
    ("AdjustmentsHorizontalIcon", "SlidersHorizontal"),
];

fn lucide_icon(catalog_icon: &str) -> &'static str {
    ICON_MAP
        .iter()
        .find(|(from, _)| *from == catalog_icon)
        .map(|(_, to)| *to)
        .unwrap_or("Star")
}

pub fn nav(intent: &Intent) -> String {
    let dark = intent.theme.is_dark();

    fill(
        r##"// Purpose: Navigation component with responsive mobile menu
import { useState } from 'react'
import { Menu, X } from 'lucide-react'

const navLinks = [
  { label: 'Home', href: '#' },
  { label: 'Features', href: '#features' },
  { label: 'Pricing', href: '#pricing' },
  { label: 'Contact', href: '#contact' },
]

export default function Nav() {
  const [isOpen, setIsOpen] = useState(false)

  return (
    <nav className="fixed top-0 left-0 right-0 z-50 {{navBg}} backdrop-blur-md border-b {{navBorder}}">
      <div className="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
        <div className="flex items-center justify-between h-16">
          {/* Logo */}
          <a href="#" className="flex items-center gap-2">
            <div className="w-8 h-8 rounded-lg bg-primary-500 flex items-center justify-center">
              <span className="text-white font-bold text-lg">{{initial}}</span>
            </div>
            <span className="font-bold text-xl {{brandText}}">{{siteName}}</span>
          </a>

          {/* Desktop Nav */}
          <div className="hidden md:flex items-center gap-8">
            {navLinks.map((link) => (
              <a
                key={link.label}
                href={link.href}
                className="{{linkText}} transition-colors"
              >
                {link.label}
              </a>
            ))}
            <a href="#contact" className="btn-primary">
              {{ctaPrimary}}
            </a>
          </div>

          {/* Mobile Menu Button */}
          <button
            onClick={() => setIsOpen(!isOpen)}
            className="md:hidden p-2 {{brandText}}"
          >
            {isOpen ? <X className="w-6 h-6" /> : <Menu className="w-6 h-6" />}
          </button>
        </div>
      </div>

      {/* Mobile Menu */}
      {isOpen && (
        <div className="md:hidden {{mobileBg}} border-t {{navBorder}}">
          <div className="px-4 py-4 space-y-3">
            {navLinks.map((link) => (
              <a
                key={link.label}
                href={link.href}
                onClick={() => setIsOpen(false)}
                className="block {{mobileLink}} py-2"
              >
                {link.label}
              </a>
            ))}
            <a href="#contact" className="btn-primary block text-center">
              {{ctaPrimary}}
            </a>
          </div>
        </div>
      )}
    </nav>
  )
}"##,
        &[
            ("navBg", if dark { "bg-gray-900/95" } else { "bg-white/95" }),
            ("navBorder", if dark { "border-gray-800" } else { "border-gray-200" }),
            ("initial", &TextUtils::initial(&intent.site_name)),
            ("brandText", if dark { "text-white" } else { "text-gray-900" }),
            (
                "linkText",
                if dark {
                    "text-gray-300 hover:text-white"
                } else {
                    "text-gray-600 hover:text-gray-900"
                },
            ),
            ("mobileBg", if dark { "bg-gray-900" } else { "bg-white" }),
            ("mobileLink", if dark { "text-gray-300" } else { "text-gray-600" }),
            ("siteName", &intent.site_name),
            ("ctaPrimary", &intent.cta.primary),
        ],
    )
}

/// Tone-keyed hero copy: headline and supporting badge line.
fn hero_copy(tone: Tone) -> (&'static str, &'static str) {
    match tone {
        Tone::Professional => (
            "Professional Solutions for Modern Businesses",
            "Trusted by industry leaders worldwide",
        ),
        Tone::Casual => (
            "Hey there! Let's build something awesome",
            "Join thousands of happy customers",
        ),
        Tone::Playful => (
            "Ready to have some fun? 🚀",
            "The most exciting way to get things done",
        ),
        Tone::Confident => ("The Future Starts Here", "Be part of the revolution"),
        Tone::Formal => ("Excellence in Every Detail", "Setting the standard for quality"),
        Tone::Friendly => (
            "Welcome! We're glad you're here",
            "Let's accomplish great things together",
        ),
    }
}

pub fn hero(intent: &Intent) -> String {
    let dark = intent.theme.is_dark();
    let (headline, sub) = hero_copy(intent.tone);

    fill(
        r##"// Purpose: Hero section with headline and CTA
import { ArrowRight, Play } from 'lucide-react'

export default function Hero() {
  return (
    <section className="relative pt-32 pb-20 md:pt-40 md:pb-32 overflow-hidden {{sectionBg}}">
      {/* Background decoration */}
      <div className="absolute inset-0 overflow-hidden">
        <div className="absolute -top-40 -right-40 w-80 h-80 rounded-full bg-primary-500/20 blur-3xl" />
        <div className="absolute -bottom-40 -left-40 w-80 h-80 rounded-full bg-primary-500/10 blur-3xl" />
      </div>

      <div className="relative max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
        <div className="text-center max-w-4xl mx-auto">
          {/* Badge */}
          <div className="inline-flex items-center gap-2 px-4 py-2 rounded-full bg-primary-500/10 text-primary-{{badgeShade}} text-sm font-medium mb-8">
            <span className="relative flex h-2 w-2">
              <span className="animate-ping absolute inline-flex h-full w-full rounded-full bg-primary-400 opacity-75"></span>
              <span className="relative inline-flex rounded-full h-2 w-2 bg-primary-500"></span>
            </span>
            {{sub}}
          </div>

          {/* Headline */}
          <h1 className="heading-xl {{headingText}} mb-6">
            {{title}}
            <span className="block text-primary-500 mt-2">{{headline}}</span>
          </h1>

          {/* Description */}
          <p className="text-xl {{bodyText}} mb-10 max-w-2xl mx-auto">
            Transform your business with our cutting-edge solutions. Built for performance,
            designed for success, and ready to scale with your ambitions.
          </p>

          {/* CTAs */}
          <div className="flex flex-col sm:flex-row items-center justify-center gap-4">
            <a href="#contact" className="btn-primary group">
              {{ctaPrimary}}
              <ArrowRight className="ml-2 w-5 h-5 group-hover:translate-x-1 transition-transform" />
            </a>
            <a href="#features" className="btn-secondary group">
              <Play className="mr-2 w-5 h-5" />
              See How It Works
            </a>
          </div>

          {/* Trust indicators */}
          <div className="mt-12 flex flex-wrap items-center justify-center gap-8 {{trustText}}">
            {['Free to start', 'No credit card required', 'Cancel anytime'].map((item) => (
              <div key={item} className="flex items-center gap-2">
                <svg className="w-5 h-5 text-green-500" fill="currentColor" viewBox="0 0 20 20">
                  <path fillRule="evenodd" d="M16.707 5.293a1 1 0 010 1.414l-8 8a1 1 0 01-1.414 0l-4-4a1 1 0 011.414-1.414L8 12.586l7.293-7.293a1 1 0 011.414 0z" clipRule="evenodd" />
                </svg>
                <span>{item}</span>
              </div>
            ))}
          </div>
        </div>
      </div>
    </section>
  )
}"##,
        &[
            (
                "sectionBg",
                if dark {
                    "bg-gray-900"
                } else {
                    "bg-gradient-to-b from-gray-50 to-white"
                },
            ),
            ("badgeShade", if dark { "400" } else { "600" }),
            ("headingText", if dark { "text-white" } else { "text-gray-900" }),
            ("bodyText", if dark { "text-gray-300" } else { "text-gray-600" }),
            ("trustText", if dark { "text-gray-500" } else { "text-gray-400" }),
            ("title", &intent.title),
            ("headline", headline),
            ("sub", sub),
            ("ctaPrimary", &intent.cta.primary),
        ],
    )
}

pub fn features(intent: &Intent) -> String {
    let dark = intent.theme.is_dark();
    let items = intent.features.as_deref().unwrap_or_default();

    let embedded: Vec<EmbeddedFeature> = items
        .iter()
        .map(|f| EmbeddedFeature {
            title: f.title.clone(),
            description: f.description.clone(),
            icon: lucide_icon(&f.icon).to_string(),
        })
        .collect();

    // Unique lucide imports in first-use order
    let mut unique_icons: Vec<&str> = Vec::new();
    for f in &embedded {
        if !unique_icons.contains(&f.icon.as_str()) {
            unique_icons.push(f.icon.as_str());
        }
    }

    let icon_entries = unique_icons
        .iter()
        .map(|icon| format!("  {icon}: {icon}"))
        .collect::<Vec<_>>()
        .join(",\n");

    let features_json =
        serde_json::to_string_pretty(&embedded).unwrap_or_else(|_| "[]".to_string());

    fill(
        r##"// Purpose: Features grid section
import { {{imports}} } from 'lucide-react'

const features = {{featuresJson}}

const iconComponents: Record<string, any> = {
{{iconEntries}}
}

export default function Features() {
  return (
    <section id="features" className="section {{sectionBg}}">
      <div className="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
        {/* Section Header */}
        <div className="text-center max-w-3xl mx-auto mb-16">
          <h2 className="heading-lg {{headingText}} mb-4">
            Everything you need to succeed
          </h2>
          <p className="{{bodyText}} text-lg">
            Powerful features designed to help you achieve your goals faster and more efficiently.
          </p>
        </div>

        {/* Features Grid */}
        <div className="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
          {features.map((feature, index) => {
            const IconComponent = iconComponents[feature.icon]
            return (
              <div
                key={index}
                className="card p-6 hover:shadow-lg transition-all duration-300 hover:-translate-y-1"
              >
                <div className="w-12 h-12 rounded-xl bg-primary-500/10 flex items-center justify-center mb-4">
                  <IconComponent className="w-6 h-6 text-primary-500" />
                </div>
                <h3 className="text-xl font-semibold {{headingText}} mb-2">
                  {feature.title}
                </h3>
                <p className="{{mutedText}}">
                  {feature.description}
                </p>
              </div>
            )
          })}
        </div>
      </div>
    </section>
  )
}"##,
        &[
            ("imports", &unique_icons.join(", ")),
            ("featuresJson", &features_json),
            ("iconEntries", &icon_entries),
            ("sectionBg", if dark { "bg-gray-800" } else { "bg-gray-50" }),
            ("headingText", if dark { "text-white" } else { "text-gray-900" }),
            ("bodyText", if dark { "text-gray-300" } else { "text-gray-600" }),
            ("mutedText", if dark { "text-gray-400" } else { "text-gray-600" }),
        ],
    )
}

pub fn pricing(intent: &Intent) -> String {
    let dark = intent.theme.is_dark();
    let tiers = intent.pricing_tiers.as_deref().unwrap_or_default();

    let tiers_json = serde_json::to_string_pretty(tiers).unwrap_or_else(|_| "[]".to_string());

    fill(
        r##"// Purpose: Pricing table component
import { Check } from 'lucide-react'

const tiers = {{tiersJson}}

export default function Pricing() {
  return (
    <section id="pricing" className="section {{sectionBg}}">
      <div className="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
        {/* Section Header */}
        <div className="text-center max-w-3xl mx-auto mb-16">
          <h2 className="heading-lg {{headingText}} mb-4">
            Simple, transparent pricing
          </h2>
          <p className="{{bodyText}} text-lg">
            Choose the plan that's right for you. All plans include a 14-day free trial.
          </p>
        </div>

        {/* Pricing Cards */}
        <div className="grid md:grid-cols-3 gap-8 max-w-5xl mx-auto">
          {tiers.map((tier) => (
            <div
              key={tier.id}
              className={`card p-8 relative ${tier.highlighted ? 'ring-2 ring-primary-500 scale-105' : ''}`}
            >
              {tier.highlighted && (
                <div className="absolute -top-4 left-1/2 -translate-x-1/2">
                  <span className="bg-primary-500 text-white text-sm font-medium px-4 py-1 rounded-full">
                    Most Popular
                  </span>
                </div>
              )}

              <div className="text-center mb-6">
                <h3 className="text-xl font-bold {{headingText}} mb-2">
                  {tier.name}
                </h3>
                <p className="{{mutedText}} text-sm mb-4">
                  {tier.description}
                </p>
                <div className="flex items-baseline justify-center gap-1">
                  <span className="text-4xl font-bold {{headingText}}">
                    {tier.price === 0 ? 'Free' : `$${tier.price}`}
                  </span>
                  {tier.price > 0 && (
                    <span className="{{periodText}}">
                      /{tier.period}
                    </span>
                  )}
                </div>
              </div>

              <ul className="space-y-3 mb-8">
                {tier.features.map((feature, i) => (
                  <li key={i} className="flex items-start gap-3">
                    <Check className="w-5 h-5 text-primary-500 mt-0.5 flex-shrink-0" />
                    <span className="{{bodyText}}">
                      {feature}
                    </span>
                  </li>
                ))}
              </ul>

              <button
                className={`w-full py-3 px-6 rounded-lg font-semibold transition-colors ${
                  tier.highlighted
                    ? 'bg-primary-500 text-white hover:bg-primary-600'
                    : '{{tierButton}}'
                }`}
              >
                {tier.cta}
              </button>
            </div>
          ))}
        </div>
      </div>
    </section>
  )
}"##,
        &[
            ("tiersJson", &tiers_json),
            ("sectionBg", if dark { "bg-gray-900" } else { "bg-white" }),
            ("headingText", if dark { "text-white" } else { "text-gray-900" }),
            ("bodyText", if dark { "text-gray-300" } else { "text-gray-600" }),
            ("mutedText", if dark { "text-gray-400" } else { "text-gray-600" }),
            ("periodText", if dark { "text-gray-400" } else { "text-gray-500" }),
            (
                "tierButton",
                if dark {
                    "bg-gray-700 text-white hover:bg-gray-600"
                } else {
                    "bg-gray-100 text-gray-900 hover:bg-gray-200"
                },
            ),
        ],
    )
}

pub fn contact(intent: &Intent) -> String {
    let dark = intent.theme.is_dark();
    let email = format!("hello@{}.com", SlugUtils::compact(&intent.site_name));

    fill(
        r##"// Purpose: Contact form section
import { useState } from 'react'
import { Send, Mail, MapPin, Phone } from 'lucide-react'

export default function Contact() {
  const [formData, setFormData] = useState({
    name: '',
    email: '',
    message: '',
  })
  const [isSubmitting, setIsSubmitting] = useState(false)
  const [isSubmitted, setIsSubmitted] = useState(false)

  const handleSubmit = async (e: React.FormEvent) => {
    e.preventDefault()
    setIsSubmitting(true)

    // Check for Formspree ID
    const formspreeId = import.meta.env.VITE_FORMSPREE_FORM_ID

    if (formspreeId) {
      try {
        const response = await fetch(`https://formspree.io/f/${formspreeId}`, {
          method: 'POST',
          headers: { 'Content-Type': 'application/json' },
          body: JSON.stringify(formData),
        })
        if (response.ok) {
          setIsSubmitted(true)
        }
      } catch (error) {
        console.error('Form submission error:', error)
      }
    } else {
      // Fallback: log to console
      console.log('Form submission:', formData)
      setIsSubmitted(true)
    }

    setIsSubmitting(false)
  }

  if (isSubmitted) {
    return (
      <section id="contact" className="section {{sectionBg}}">
        <div className="max-w-xl mx-auto text-center px-4">
          <div className="w-16 h-16 mx-auto mb-6 rounded-full bg-green-500/10 flex items-center justify-center">
            <Send className="w-8 h-8 text-green-500" />
          </div>
          <h2 className="heading-md {{headingText}} mb-4">
            Thanks for reaching out!
          </h2>
          <p className="{{bodyText}}">
            We'll get back to you as soon as possible.
          </p>
        </div>
      </section>
    )
  }

  return (
    <section id="contact" className="section {{sectionBg}}">
      <div className="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
        <div className="grid lg:grid-cols-2 gap-12">
          {/* Contact Info */}
          <div>
            <h2 className="heading-lg {{headingText}} mb-4">
              Get in touch
            </h2>
            <p className="{{bodyText}} text-lg mb-8">
              Have a question or want to work together? We'd love to hear from you.
            </p>

            <div className="space-y-6">
              {[
                { icon: Mail, label: 'Email', value: '{{email}}' },
                { icon: Phone, label: 'Phone', value: '+1 (555) 000-0000' },
                { icon: MapPin, label: 'Location', value: 'San Francisco, CA' },
              ].map((item) => (
                <div key={item.label} className="flex items-start gap-4">
                  <div className="w-12 h-12 rounded-lg bg-primary-500/10 flex items-center justify-center flex-shrink-0">
                    <item.icon className="w-6 h-6 text-primary-500" />
                  </div>
                  <div>
                    <h3 className="font-semibold {{headingText}}">{item.label}</h3>
                    <p className="{{mutedText}}">{item.value}</p>
                  </div>
                </div>
              ))}
            </div>
          </div>

          {/* Contact Form */}
          <form onSubmit={handleSubmit} className="card p-8">
            <div className="space-y-6">
              <div>
                <label htmlFor="name" className="block text-sm font-medium {{labelText}} mb-2">
                  Name
                </label>
                <input
                  type="text"
                  id="name"
                  required
                  value={formData.name}
                  onChange={(e) => setFormData({ ...formData, name: e.target.value })}
                  className="w-full px-4 py-3 rounded-lg border {{inputClass}} focus:outline-none focus:ring-2 focus:ring-primary-500"
                  placeholder="Your name"
                />
              </div>

              <div>
                <label htmlFor="email" className="block text-sm font-medium {{labelText}} mb-2">
                  Email
                </label>
                <input
                  type="email"
                  id="email"
                  required
                  value={formData.email}
                  onChange={(e) => setFormData({ ...formData, email: e.target.value })}
                  className="w-full px-4 py-3 rounded-lg border {{inputClass}} focus:outline-none focus:ring-2 focus:ring-primary-500"
                  placeholder="you@example.com"
                />
              </div>

              <div>
                <label htmlFor="message" className="block text-sm font-medium {{labelText}} mb-2">
                  Message
                </label>
                <textarea
                  id="message"
                  required
                  rows={4}
                  value={formData.message}
                  onChange={(e) => setFormData({ ...formData, message: e.target.value })}
                  className="w-full px-4 py-3 rounded-lg border {{inputClass}} focus:outline-none focus:ring-2 focus:ring-primary-500 resize-none"
                  placeholder="Your message..."
                />
              </div>

              <button
                type="submit"
                disabled={isSubmitting}
                className="w-full btn-primary disabled:opacity-50"
              >
                {isSubmitting ? 'Sending...' : 'Send Message'}
                <Send className="ml-2 w-5 h-5" />
              </button>
            </div>
          </form>
        </div>
      </div>
    </section>
  )
}"##,
        &[
            ("sectionBg", if dark { "bg-gray-800" } else { "bg-gray-50" }),
            ("headingText", if dark { "text-white" } else { "text-gray-900" }),
            ("bodyText", if dark { "text-gray-300" } else { "text-gray-600" }),
            ("mutedText", if dark { "text-gray-400" } else { "text-gray-600" }),
            ("labelText", if dark { "text-gray-300" } else { "text-gray-700" }),
            (
                "inputClass",
                if dark {
                    "bg-gray-700 border-gray-600 text-white"
                } else {
                    "bg-white border-gray-300 text-gray-900"
                },
            ),
            ("email", &email),
        ],
    )
}

pub fn cta(intent: &Intent) -> String {
    let dark = intent.theme.is_dark();

    fill(
        r##"// Purpose: Call-to-action section
import { ArrowRight } from 'lucide-react'

export default function CTA() {
  return (
    <section className="section {{sectionBg}}">
      <div className="max-w-4xl mx-auto px-4 sm:px-6 lg:px-8 text-center">
        <h2 className="heading-lg text-white mb-6">
          Ready to get started?
        </h2>
        <p className="text-xl text-white/80 mb-8 max-w-2xl mx-auto">
          Join thousands of satisfied customers and take your business to the next level.
        </p>
        <div className="flex flex-col sm:flex-row items-center justify-center gap-4">
          <a
            href="#contact"
            className="inline-flex items-center px-8 py-4 rounded-lg font-semibold bg-white text-primary-600 hover:bg-gray-100 transition-colors group"
          >
            {{ctaPrimary}}
            <ArrowRight className="ml-2 w-5 h-5 group-hover:translate-x-1 transition-transform" />
          </a>
          <a
            href="#features"
            className="inline-flex items-center px-8 py-4 rounded-lg font-semibold border-2 border-white/50 text-white hover:bg-white/10 transition-colors"
          >
            {{ctaSecondary}}
          </a>
        </div>
      </div>
    </section>
  )
}"##,
        &[
            ("sectionBg", if dark { "bg-primary-900" } else { "bg-primary-500" }),
            ("ctaPrimary", &intent.cta.primary),
            ("ctaSecondary", &intent.cta.secondary),
        ],
    )
}

pub fn footer(intent: &Intent) -> String {
    let dark = intent.theme.is_dark();
    let year = Utc::now().year().to_string();

    fill(
        r##"// Purpose: Footer with links and social icons
import { Twitter, Github, Linkedin, Mail } from 'lucide-react'

const footerLinks = {
  Product: ['Features', 'Pricing', 'Changelog', 'Roadmap'],
  Company: ['About', 'Blog', 'Careers', 'Press'],
  Resources: ['Documentation', 'Help Center', 'Community', 'Contact'],
  Legal: ['Privacy', 'Terms', 'License'],
}

const socialLinks = [
  { icon: Twitter, href: '#', label: 'Twitter' },
  { icon: Github, href: '#', label: 'GitHub' },
  { icon: Linkedin, href: '#', label: 'LinkedIn' },
  { icon: Mail, href: '#', label: 'Email' },
]

export default function Footer() {
  return (
    <footer className="{{footerShell}} border-t">
      <div className="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-12">
        <div className="grid grid-cols-2 md:grid-cols-5 gap-8">
          {/* Brand */}
          <div className="col-span-2">
            <a href="#" className="flex items-center gap-2 mb-4">
              <div className="w-8 h-8 rounded-lg bg-primary-500 flex items-center justify-center">
                <span className="text-white font-bold text-lg">{{initial}}</span>
              </div>
              <span className="font-bold text-xl {{brandText}}">{{siteName}}</span>
            </a>
            <p className="{{mutedText}} mb-4 max-w-sm">
              Building the future, one innovation at a time. Join us on our mission to make a difference.
            </p>
            <div className="flex items-center gap-4">
              {socialLinks.map((link) => (
                <a
                  key={link.label}
                  href={link.href}
                  className="{{socialText}} transition-colors"
                  aria-label={link.label}
                >
                  <link.icon className="w-5 h-5" />
                </a>
              ))}
            </div>
          </div>

          {/* Links */}
          {Object.entries(footerLinks).map(([category, links]) => (
            <div key={category}>
              <h3 className="font-semibold {{brandText}} mb-4">{category}</h3>
              <ul className="space-y-2">
                {links.map((link) => (
                  <li key={link}>
                    <a href="#" className="{{linkText}} transition-colors">
                      {link}
                    </a>
                  </li>
                ))}
              </ul>
            </div>
          ))}
        </div>

        {/* Bottom */}
        <div className="mt-12 pt-8 border-t {{bottomBorder}} flex flex-col md:flex-row items-center justify-between gap-4">
          <p className="{{faintText}} text-sm">
            © {{year}} {{siteName}}. All rights reserved.
          </p>
          <div className="flex items-center gap-6 text-sm {{faintText}}">
            <a href="#" className="hover:{{hoverText}} transition-colors">Privacy</a>
            <a href="#" className="hover:{{hoverText}} transition-colors">Terms</a>
            <a href="#" className="hover:{{hoverText}} transition-colors">Cookies</a>
          </div>
        </div>
      </div>
    </footer>
  )
}"##,
        &[
            (
                "footerShell",
                if dark {
                    "bg-gray-900 border-gray-800"
                } else {
                    "bg-gray-50 border-gray-200"
                },
            ),
            ("initial", &TextUtils::initial(&intent.site_name)),
            ("brandText", if dark { "text-white" } else { "text-gray-900" }),
            ("mutedText", if dark { "text-gray-400" } else { "text-gray-600" }),
            (
                "socialText",
                if dark {
                    "text-gray-400 hover:text-white"
                } else {
                    "text-gray-500 hover:text-gray-900"
                },
            ),
            (
                "linkText",
                if dark {
                    "text-gray-400 hover:text-white"
                } else {
                    "text-gray-600 hover:text-gray-900"
                },
            ),
            ("bottomBorder", if dark { "border-gray-800" } else { "border-gray-200" }),
            ("faintText", if dark { "text-gray-500" } else { "text-gray-400" }),
            ("hoverText", if dark { "text-white" } else { "text-gray-900" }),
            ("siteName", &intent.site_name),
            ("year", &year),
        ],
    )
}
