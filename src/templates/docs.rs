//! Documentation and repository-chrome templates: README, license,
//! CI workflow stub, and the export script. All are plain string
//! interpolation over intent fields.

use chrono::{Datelike, Utc};
use itertools::Itertools;

use crate::core::intent::Intent;
use crate::infra::utils::SlugUtils;
use crate::templates::fill;

pub fn readme(intent: &Intent) -> String {
    let sections = intent
        .sections
        .iter()
        .map(|s| format!("- {}", s.label()))
        .join("\n");

    fill(
        r#"# {{siteName}}

> Generated by sitewright

## 🚀 Quick Start

```bash
# Install dependencies
npm install

# Start development server
npm run dev

# Build for production
npm run build
```

## 📁 Project Structure

```
{{slug}}/
├── src/
│   ├── components/     # React components
│   ├── hooks/          # Custom React hooks
│   ├── utils/          # Utility functions
│   ├── App.tsx         # Main app component
│   ├── main.tsx        # Entry point
│   └── index.css       # Global styles
├── public/             # Static assets
├── index.html          # HTML template
└── package.json        # Dependencies
```

## 🎨 Customization

### Colors
Primary color: `{{primaryColor}}`
Edit `tailwind.config.js` to customize the color palette.

### Sections
This site includes:
{{sections}}

### Theme
Current theme: `{{theme}}`
Toggle dark mode with the theme button in the header.

## 🔌 API Keys (Optional)

Copy `.env.example` to `.env.local` and add your keys:

- **VITE_UNSPLASH_ACCESS_KEY**: For real images from Unsplash
- **VITE_FORMSPREE_FORM_ID**: For contact form email delivery

## 🚢 Deployment

### Vercel
1. Push to GitHub
2. Import to Vercel
3. Deploy!

### Netlify
1. Push to GitHub
2. Connect to Netlify
3. Deploy!

## 📝 License

MIT License - feel free to use this for any project!
"#,
        &[
            ("siteName", &intent.site_name),
            ("slug", &SlugUtils::slugify(&intent.site_name)),
            ("primaryColor", &intent.primary_color),
            ("sections", &sections),
            ("theme", &intent.theme.to_string()),
        ],
    )
}

pub fn license(intent: &Intent) -> String {
    fill(
        r#"MIT License

Copyright (c) {{year}} {{siteName}}

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
"#,
        &[
            ("year", &Utc::now().year().to_string()),
            ("siteName", &intent.site_name),
        ],
    )
}

pub fn code_of_conduct(_intent: &Intent) -> String {
    r#"# Code of Conduct

## Our Pledge

We pledge to make participation in our project a harassment-free experience for everyone.

## Our Standards

Examples of behavior that contributes to creating a positive environment include:
- Using welcoming and inclusive language
- Being respectful of differing viewpoints
- Gracefully accepting constructive criticism
- Focusing on what is best for the community

## Enforcement

Instances of abusive, harassing, or otherwise unacceptable behavior may be reported.
All complaints will be reviewed and investigated.
"#
    .to_string()
}

pub fn ci_workflow(_intent: &Intent) -> String {
    r#"# Purpose: GitHub Actions CI workflow
name: CI

on:
  push:
    branches: [main]
  pull_request:
    branches: [main]

jobs:
  build:
    runs-on: ubuntu-latest

    steps:
      - uses: actions/checkout@v4

      - name: Setup Node.js
        uses: actions/setup-node@v4
        with:
          node-version: '20'
          cache: 'npm'

      - name: Install dependencies
        run: npm ci

      - name: Lint
        run: npm run lint

      - name: Build
        run: npm run build

      - name: Test
        run: npm run test --if-present
"#
    .to_string()
}

pub fn export_script(intent: &Intent) -> String {
    fill(
        r#"// Purpose: Export project as ZIP file
const fs = require('fs');
const path = require('path');
const archiver = require('archiver');

const projectName = '{{slug}}';
const outputPath = path.join(__dirname, '..', `${projectName}.zip`);

const output = fs.createWriteStream(outputPath);
const archive = archiver('zip', { zlib: { level: 9 } });

output.on('close', () => {
  console.log(`Exported ${archive.pointer()} bytes to ${projectName}.zip`);
});

archive.on('error', (err) => {
  throw err;
});

archive.pipe(output);

// Add files
archive.glob('**/*', {
  cwd: path.join(__dirname, '..'),
  ignore: ['node_modules/**', '*.zip', '.git/**'],
});

archive.finalize();
"#,
        &[("slug", &SlugUtils::slugify(&intent.site_name))],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parse::parse_prompt;

    #[test]
    fn readme_itemizes_sections_theme_and_color() {
        let intent = parse_prompt("a dark site for 'Nimbus' with pricing, color #10B981");
        let body = readme(&intent);
        assert!(body.contains("# Nimbus"));
        assert!(body.contains("`#10B981`"));
        assert!(body.contains("Current theme: `dark`"));
        assert!(body.contains("- Nav"));
        assert!(body.contains("- Pricing"));
        assert!(body.contains("- Footer"));
        assert!(body.contains("nimbus/"));
    }

    #[test]
    fn license_names_site_and_year() {
        let intent = parse_prompt("site for 'Nimbus'");
        let body = license(&intent);
        assert!(body.starts_with("MIT License"));
        assert!(body.contains(&format!("Copyright (c) {} Nimbus", Utc::now().year())));
    }

    #[test]
    fn export_script_targets_slugged_archive() {
        let intent = parse_prompt("site for 'Sunny Side Bakery'");
        let body = export_script(&intent);
        assert!(body.contains("const projectName = 'sunny-side-bakery';"));
        assert!(body.contains("level: 9"));
    }
}
