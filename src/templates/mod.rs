//! Template library: one pure render function per generated file.
//!
//! Each template owns exactly one output path, and the per-phase tables
//! own disjoint path subtrees, so merging phase outputs can never
//! collide. Substitution uses `{{name}}` markers so the emitted
//! JSX/JSON/CSS can keep its own braces untouched.

pub mod components;
pub mod config;
pub mod docs;
pub mod support;

use indexmap::IndexMap;

use crate::core::intent::{Intent, SectionType};

/// The complete output artifact: relative POSIX path -> file content.
pub type FileTree = IndexMap<String, String>;

/// A pure content renderer for a single file.
pub type RenderFn = fn(&Intent) -> String;

/// One entry in the template registry.
pub struct FileTemplate {
    /// Stable identifier, also used for targeted tests.
    pub id: &'static str,
    /// Output path owned by this template.
    pub path: &'static str,
    /// Section gate; `None` renders unconditionally.
    pub section: Option<SectionType>,
    pub render: RenderFn,
}

impl FileTemplate {
    /// Whether this template applies to the given intent. Sectioned
    /// templates require membership; the features and pricing components
    /// additionally require their data to be attached.
    pub fn applies(&self, intent: &Intent) -> bool {
        match self.section {
            None => true,
            Some(section) => {
                if !intent.has_section(section) {
                    return false;
                }
                match section {
                    SectionType::Features => intent.features.is_some(),
                    SectionType::Pricing => intent.pricing_tiers.is_some(),
                    _ => true,
                }
            }
        }
    }
}

/// Build/tooling files: manifest, bundler, CSS framework, entry points.
pub const CONFIG_TEMPLATES: &[FileTemplate] = &[
    FileTemplate { id: "package-json", path: "package.json", section: None, render: config::package_json },
    FileTemplate { id: "vite-config", path: "vite.config.ts", section: None, render: config::vite_config },
    FileTemplate { id: "tailwind-config", path: "tailwind.config.js", section: None, render: config::tailwind_config },
    FileTemplate { id: "postcss-config", path: "postcss.config.js", section: None, render: config::postcss_config },
    FileTemplate { id: "tsconfig", path: "tsconfig.json", section: None, render: config::tsconfig },
    FileTemplate { id: "tsconfig-node", path: "tsconfig.node.json", section: None, render: config::tsconfig_node },
    FileTemplate { id: "env-example", path: ".env.example", section: None, render: config::env_example },
    FileTemplate { id: "gitignore", path: ".gitignore", section: None, render: config::gitignore },
    FileTemplate { id: "index-html", path: "index.html", section: None, render: config::index_html },
    FileTemplate { id: "main-tsx", path: "src/main.tsx", section: None, render: config::main_tsx },
    FileTemplate { id: "index-css", path: "src/index.css", section: None, render: config::index_css },
    FileTemplate { id: "app-tsx", path: "src/App.tsx", section: None, render: config::app_tsx },
];

/// Section components. Nav and Footer render for every intent.
pub const COMPONENT_TEMPLATES: &[FileTemplate] = &[
    FileTemplate { id: "nav", path: "src/components/Nav.tsx", section: None, render: components::nav },
    FileTemplate { id: "hero", path: "src/components/Hero.tsx", section: Some(SectionType::Hero), render: components::hero },
    FileTemplate { id: "features", path: "src/components/Features.tsx", section: Some(SectionType::Features), render: components::features },
    FileTemplate { id: "pricing", path: "src/components/Pricing.tsx", section: Some(SectionType::Pricing), render: components::pricing },
    FileTemplate { id: "contact", path: "src/components/Contact.tsx", section: Some(SectionType::Contact), render: components::contact },
    FileTemplate { id: "cta", path: "src/components/CTA.tsx", section: Some(SectionType::Cta), render: components::cta },
    FileTemplate { id: "footer", path: "src/components/Footer.tsx", section: None, render: components::footer },
];

/// Helper files: class-name joiner, image fallbacks, theme hook.
pub const SUPPORT_TEMPLATES: &[FileTemplate] = &[
    FileTemplate { id: "cn", path: "src/utils/cn.ts", section: None, render: support::cn },
    FileTemplate { id: "images", path: "src/utils/images.ts", section: None, render: support::images },
    FileTemplate { id: "use-theme", path: "src/hooks/useTheme.ts", section: None, render: support::use_theme },
];

/// Documentation and repository chrome.
pub const DOC_TEMPLATES: &[FileTemplate] = &[
    FileTemplate { id: "readme", path: "README.md", section: None, render: docs::readme },
    FileTemplate { id: "license", path: "LICENSE", section: None, render: docs::license },
    FileTemplate { id: "code-of-conduct", path: "CODE_OF_CONDUCT.md", section: None, render: docs::code_of_conduct },
    FileTemplate { id: "ci-workflow", path: ".github/workflows/ci.yml", section: None, render: docs::ci_workflow },
    FileTemplate { id: "export-script", path: "scripts/export-zip.js", section: None, render: docs::export_script },
];

/// Render every applicable template of one phase into a path->content
/// slice, in table order.
pub fn render_phase(templates: &[FileTemplate], intent: &Intent) -> FileTree {
    templates
        .iter()
        .filter(|t| t.applies(intent))
        .map(|t| {
            tracing::trace!(template = t.id, path = t.path, "render");
            (t.path.to_string(), (t.render)(intent))
        })
        .collect()
}

/// Substitute `{{name}}` markers. Unknown markers are left in place so
/// tests catch incomplete substitution lists.
pub(crate) fn fill(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (name, value) in vars {
        out = out.replace(&format!("{{{{{name}}}}}"), value);
    }
    out
}
