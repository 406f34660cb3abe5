//! Helper-file templates: class-name joiner, image fetching with
//! gradient fallback, and the dark-mode hook. Content is nearly static;
//! only lightly parameterized.

use crate::core::intent::Intent;

pub fn cn(_intent: &Intent) -> String {
    r#"// Purpose: Classname utility for conditional styling
export function cn(...classes: (string | boolean | undefined | null)[]): string {
  return classes.filter(Boolean).join(' ')
}
"#
    .to_string()
}

pub fn images(_intent: &Intent) -> String {
    r#"// Purpose: Image utilities with Unsplash fallback to gradients
const UNSPLASH_KEY = import.meta.env.VITE_UNSPLASH_ACCESS_KEY

export interface ImageResult {
  url: string
  alt: string
  photographer?: string
  source: 'unsplash' | 'pexels' | 'placeholder'
}

export async function getImage(query: string): Promise<ImageResult> {
  // If Unsplash key is available, fetch from API
  if (UNSPLASH_KEY) {
    try {
      const response = await fetch(
        `https://api.unsplash.com/photos/random?query=${encodeURIComponent(query)}&client_id=${UNSPLASH_KEY}`
      )
      if (response.ok) {
        const data = await response.json()
        return {
          url: data.urls.regular,
          alt: data.alt_description || query,
          photographer: data.user.name,
          source: 'unsplash',
        }
      }
    } catch (error) {
      console.warn('Unsplash API unavailable, using placeholder')
    }
  }

  // Fallback to gradient placeholder
  return getPlaceholderImage(query)
}

export function getPlaceholderImage(query: string): ImageResult {
  // Generate a unique gradient based on query
  const hash = query.split('').reduce((acc, char) => acc + char.charCodeAt(0), 0)
  const hue1 = hash % 360
  const hue2 = (hue1 + 40) % 360

  return {
    url: `data:image/svg+xml,<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 800 600"><defs><linearGradient id="g" x1="0%25" y1="0%25" x2="100%25" y2="100%25"><stop offset="0%25" style="stop-color:hsl(${hue1},70%25,50%25)"/><stop offset="100%25" style="stop-color:hsl(${hue2},70%25,40%25)"/></linearGradient></defs><rect fill="url(%23g)" width="800" height="600"/></svg>`,
    alt: query,
    source: 'placeholder',
  }
}

export function getGradientBg(seed: string): string {
  const hash = seed.split('').reduce((acc, char) => acc + char.charCodeAt(0), 0)
  const hue1 = hash % 360
  const hue2 = (hue1 + 40) % 360
  return `linear-gradient(135deg, hsl(${hue1}, 70%, 50%), hsl(${hue2}, 70%, 40%))`
}
"#
    .to_string()
}

pub fn use_theme(_intent: &Intent) -> String {
    r#"// Purpose: Theme hook for dark/light mode toggle
import { useState, useEffect } from 'react'

export function useTheme() {
  const [isDark, setIsDark] = useState(() => {
    if (typeof window !== 'undefined') {
      const stored = localStorage.getItem('theme')
      if (stored) return stored === 'dark'
      return window.matchMedia('(prefers-color-scheme: dark)').matches
    }
    return false
  })

  useEffect(() => {
    const root = document.documentElement
    if (isDark) {
      root.classList.add('dark')
      localStorage.setItem('theme', 'dark')
    } else {
      root.classList.remove('dark')
      localStorage.setItem('theme', 'light')
    }
  }, [isDark])

  const toggle = () => setIsDark(prev => !prev)

  return { isDark, toggle }
}
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parse::parse_prompt;

    #[test]
    fn helpers_are_intent_independent() {
        let a = parse_prompt("a dark saas site");
        let b = parse_prompt("a bright bakery page");
        assert_eq!(cn(&a), cn(&b));
        assert_eq!(images(&a), images(&b));
        assert_eq!(use_theme(&a), use_theme(&b));
    }

    #[test]
    fn image_helper_always_has_gradient_fallback() {
        let body = images(&parse_prompt("anything"));
        assert!(body.contains("getPlaceholderImage"));
        assert!(body.contains("linear-gradient"));
    }
}
