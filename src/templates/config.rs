//! Build and tooling file templates: package manifest, bundler config,
//! CSS framework config, HTML entry point, app root, global styles.
//!
//! Only `package.json`, `tailwind.config.js`, `index.html`, and
//! `src/App.tsx` are parameterized; the rest is fixed scaffolding.

use crate::core::intent::{Intent, SectionType};
use crate::core::palette::{hex_to_hsl, hsl_to_hex};
use crate::infra::utils::SlugUtils;
use crate::templates::fill;

pub fn package_json(intent: &Intent) -> String {
    fill(
        r#"{
  "name": "{{slug}}",
  "private": true,
  "version": "0.1.0",
  "type": "module",
  "scripts": {
    "dev": "vite",
    "build": "tsc && vite build",
    "lint": "tsc --noEmit",
    "preview": "vite preview"
  },
  "dependencies": {
    "lucide-react": "^0.344.0",
    "react": "^18.2.0",
    "react-dom": "^18.2.0"
  },
  "devDependencies": {
    "@types/react": "^18.2.66",
    "@types/react-dom": "^18.2.22",
    "@vitejs/plugin-react": "^4.2.1",
    "autoprefixer": "^10.4.18",
    "postcss": "^8.4.35",
    "tailwindcss": "^3.4.1",
    "typescript": "^5.2.2",
    "vite": "^5.2.0"
  }
}
"#,
        &[("slug", &SlugUtils::slugify(&intent.site_name))],
    )
}

pub fn vite_config(_intent: &Intent) -> String {
    r#"// Purpose: Vite configuration
import { defineConfig } from 'vite'
import react from '@vitejs/plugin-react'
import path from 'path'

export default defineConfig({
  plugins: [react()],
  resolve: {
    alias: {
      '@': path.resolve(__dirname, './src'),
    },
  },
})
"#
    .to_string()
}

/// Lightness deltas for the emitted `primary` scale, anchored at the
/// brand color's own lightness for the 500 step.
const SHADE_STEPS: &[(&str, f64)] = &[
    ("50", 45.0),
    ("100", 40.0),
    ("200", 30.0),
    ("300", 20.0),
    ("400", 10.0),
    ("500", 0.0),
    ("600", -8.0),
    ("700", -16.0),
    ("800", -24.0),
    ("900", -32.0),
];

pub fn tailwind_config(intent: &Intent) -> String {
    let (h, s, l) = hex_to_hsl(&intent.primary_color);

    let shades = SHADE_STEPS
        .iter()
        .map(|(step, delta)| {
            let value = hsl_to_hex(h, s, (l + delta).clamp(8.0, 97.0));
            format!("          {step}: '{value}',")
        })
        .collect::<Vec<_>>()
        .join("\n");

    fill(
        r#"// Purpose: Tailwind configuration with the generated brand palette
/** @type {import('tailwindcss').Config} */
export default {
  content: ['./index.html', './src/**/*.{js,ts,jsx,tsx}'],
  darkMode: 'class',
  theme: {
    extend: {
      colors: {
        primary: {
{{shades}}
          DEFAULT: '{{primary}}',
        },
      },
      fontFamily: {
        sans: ['Inter', 'system-ui', 'sans-serif'],
      },
    },
  },
  plugins: [],
}
"#,
        &[("shades", &shades), ("primary", &intent.primary_color)],
    )
}

pub fn postcss_config(_intent: &Intent) -> String {
    r#"// Purpose: PostCSS configuration
export default {
  plugins: {
    tailwindcss: {},
    autoprefixer: {},
  },
}
"#
    .to_string()
}

pub fn tsconfig(_intent: &Intent) -> String {
    r#"{
  "compilerOptions": {
    "target": "ES2020",
    "useDefineForClassFields": true,
    "lib": ["ES2020", "DOM", "DOM.Iterable"],
    "module": "ESNext",
    "skipLibCheck": true,
    "moduleResolution": "bundler",
    "allowImportingTsExtensions": true,
    "resolveJsonModule": true,
    "isolatedModules": true,
    "noEmit": true,
    "jsx": "react-jsx",
    "strict": true,
    "noUnusedLocals": true,
    "noUnusedParameters": true,
    "noFallthroughCasesInSwitch": true,
    "baseUrl": ".",
    "paths": {
      "@/*": ["src/*"]
    }
  },
  "include": ["src"],
  "references": [{ "path": "./tsconfig.node.json" }]
}
"#
    .to_string()
}

pub fn tsconfig_node(_intent: &Intent) -> String {
    r#"{
  "compilerOptions": {
    "composite": true,
    "skipLibCheck": true,
    "module": "ESNext",
    "moduleResolution": "bundler",
    "allowSyntheticDefaultImports": true
  },
  "include": ["vite.config.ts"]
}
"#
    .to_string()
}

pub fn env_example(_intent: &Intent) -> String {
    r#"# Purpose: Environment variables template

# Image APIs (Optional)
VITE_UNSPLASH_ACCESS_KEY=
VITE_PEXELS_API_KEY=

# Contact Form (Optional)
VITE_FORMSPREE_FORM_ID=

# AI APIs (Optional - premium)
VITE_HUGGINGFACE_API_KEY=
"#
    .to_string()
}

pub fn gitignore(_intent: &Intent) -> String {
    r#"# Dependencies
node_modules
.pnp
.pnp.js

# Build
dist
dist-ssr
*.local

# IDE
.vscode/*
!.vscode/extensions.json
.idea

# Logs
*.log
npm-debug.log*

# Environment
.env
.env.local
.env.*.local

# OS
.DS_Store
Thumbs.db
"#
    .to_string()
}

pub fn index_html(intent: &Intent) -> String {
    let description = if intent.keywords.is_empty() {
        intent.site_name.clone()
    } else {
        intent.keywords.join(", ")
    };

    fill(
        r#"<!doctype html>
<html lang="en">
  <head>
    <meta charset="UTF-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0" />
    <meta name="description" content="{{description}}" />
    <title>{{siteName}}</title>
    <link rel="preconnect" href="https://fonts.googleapis.com" />
    <link href="https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600;700;800&display=swap" rel="stylesheet" />
  </head>
  <body>
    <div id="root"></div>
    <script type="module" src="/src/main.tsx"></script>
  </body>
</html>
"#,
        &[("siteName", &intent.site_name), ("description", &description)],
    )
}

pub fn main_tsx(_intent: &Intent) -> String {
    r#"// Purpose: Application entry point
import React from 'react'
import ReactDOM from 'react-dom/client'
import App from './App.tsx'
import './index.css'

ReactDOM.createRoot(document.getElementById('root')!).render(
  <React.StrictMode>
    <App />
  </React.StrictMode>,
)
"#
    .to_string()
}

pub fn index_css(_intent: &Intent) -> String {
    r#"/* Purpose: Global styles and shared component classes */
@tailwind base;
@tailwind components;
@tailwind utilities;

@layer base {
  html {
    scroll-behavior: smooth;
  }

  body {
    @apply font-sans antialiased;
  }
}

@layer components {
  .btn-primary {
    @apply inline-flex items-center justify-center px-6 py-3 rounded-lg font-semibold bg-primary-500 text-white hover:bg-primary-600 transition-colors;
  }

  .btn-secondary {
    @apply inline-flex items-center justify-center px-6 py-3 rounded-lg font-semibold border-2 border-gray-200 text-gray-700 hover:border-gray-300 transition-colors dark:border-gray-700 dark:text-gray-200;
  }

  .card {
    @apply rounded-2xl border bg-white border-gray-200 shadow-sm dark:bg-gray-800 dark:border-gray-700;
  }

  .section {
    @apply py-20 md:py-28;
  }

  .heading-xl {
    @apply text-4xl md:text-6xl font-extrabold tracking-tight;
  }

  .heading-lg {
    @apply text-3xl md:text-4xl font-bold tracking-tight;
  }

  .heading-md {
    @apply text-2xl md:text-3xl font-bold;
  }
}
"#
    .to_string()
}

/// Sections with a dedicated component, in the order they should appear
/// between `Nav` and `Footer`.
const COMPONENT_SECTIONS: &[(SectionType, &str)] = &[
    (SectionType::Hero, "Hero"),
    (SectionType::Features, "Features"),
    (SectionType::Pricing, "Pricing"),
    (SectionType::Contact, "Contact"),
    (SectionType::Cta, "CTA"),
];

pub fn app_tsx(intent: &Intent) -> String {
    // Imports and render order follow the requested section order;
    // sections without a dedicated component are skipped here.
    let mut imports = vec!["import Nav from './components/Nav'".to_string()];
    let mut body = Vec::new();

    for section in &intent.sections {
        if let Some((_, name)) = COMPONENT_SECTIONS.iter().find(|(s, _)| s == section) {
            imports.push(format!("import {name} from './components/{name}'"));
            body.push(format!("        <{name} />"));
        }
    }
    imports.push("import Footer from './components/Footer'".to_string());

    let shell = if intent.theme.is_dark() {
        "min-h-screen bg-gray-900"
    } else {
        "min-h-screen bg-white"
    };

    fill(
        r#"// Purpose: Application root composing the generated sections
{{imports}}

export default function App() {
  return (
    <div className="{{shell}}">
      <Nav />
      <main>
{{body}}
      </main>
      <Footer />
    </div>
  )
}
"#,
        &[
            ("imports", &imports.join("\n")),
            ("body", &body.join("\n")),
            ("shell", shell),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parse::parse_prompt;

    #[test]
    fn package_json_uses_slug() {
        let intent = parse_prompt("a site for 'Sunny Side Bakery'");
        let body = package_json(&intent);
        assert!(body.contains(r#""name": "sunny-side-bakery""#));
    }

    #[test]
    fn tailwind_scale_anchors_brand_color() {
        let intent = parse_prompt("use #0B74DE as primary color");
        let body = tailwind_config(&intent);
        assert!(body.contains("DEFAULT: '#0B74DE'"));
        assert!(body.contains("500:"));
        assert!(body.contains("900:"));
        assert!(body.contains("darkMode: 'class'"));
    }

    #[test]
    fn app_root_orders_sections_as_requested() {
        let intent = parse_prompt("landing page with hero, pricing, features and contact form");
        let body = app_tsx(&intent);

        let hero = body.find("<Hero />").expect("hero rendered");
        let pricing = body.find("<Pricing />").expect("pricing rendered");
        let contact = body.find("<Contact />").expect("contact rendered");
        // Render order follows section order (table order of extraction)
        assert!(hero < pricing && pricing < contact);
        assert!(body.contains("import Footer from './components/Footer'"));
        assert!(!body.contains("<CTA />"));
    }

    #[test]
    fn index_html_carries_title_and_description() {
        let intent = parse_prompt("a landing page for 'Atlas Analytics' about analytics");
        let body = index_html(&intent);
        assert!(body.contains("<title>Atlas Analytics</title>"));
        assert!(body.contains(r#"meta name="description""#));
    }

    #[test]
    fn dark_theme_shell_is_baked_in() {
        let light = parse_prompt("a clean site");
        assert!(app_tsx(&light).contains("bg-white"));
        let dark = parse_prompt("a dark site with hero");
        assert!(app_tsx(&dark).contains("bg-gray-900"));
    }
}
