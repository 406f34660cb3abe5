//! Utility helpers organized by small, focused structs.
//! All functions are associated fns to keep call sites
//! ergonomic, testable, and discoverable.

/// Site-name slug helpers
pub struct SlugUtils;

impl SlugUtils
{
    /// Lowercase a display name and join whitespace runs
    /// with dashes: `"My Site"` -> `"my-site"`
    pub fn slugify(name: &str) -> String
    {
        // Collapse all whitespace runs into single dashes
        name.to_lowercase()
            .split_whitespace()
            .collect::<Vec<&str>>()
            .join("-")
    }

    /// Compact form with whitespace removed entirely,
    /// used for synthesized email addresses
    pub fn compact(name: &str) -> String
    {
        // Strip whitespace, keep everything else as-is
        name.to_lowercase()
            .split_whitespace()
            .collect::<Vec<&str>>()
            .concat()
    }
}

/// Display-text helpers
pub struct TextUtils;

impl TextUtils
{
    /// First character of a name, used for logo badges.
    /// Falls back to an empty string for empty input.
    pub fn initial(name: &str) -> String
    {
        // charAt(0) semantics: first char only
        name.chars()
            .next()
            .map(|c| c.to_string())
            .unwrap_or_default()
    }

    /// Uppercase the first character, leave the rest
    pub fn capitalize(word: &str) -> String
    {
        let mut chars = word.chars();

        match chars.next()
        {
            Some(first) =>
            {
                first
                    .to_uppercase()
                    .collect::<String>()
                    + chars.as_str()
            }
            None => String::new(),
        }
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn slugify_collapses_whitespace()
    {
        // Multiple spaces become a single dash
        assert_eq!(SlugUtils::slugify("My  Awesome   Site"), "my-awesome-site");

        // Already-compact names pass through lowercased
        assert_eq!(SlugUtils::slugify("CloudSync"), "cloudsync");
    }

    #[test]
    fn compact_strips_whitespace()
    {
        assert_eq!(SlugUtils::compact("My Site"), "mysite");
    }

    #[test]
    fn initial_takes_first_char()
    {
        assert_eq!(TextUtils::initial("Acme"), "A");
        assert_eq!(TextUtils::initial(""), "");
    }

    #[test]
    fn capitalize_first_char_only()
    {
        assert_eq!(TextUtils::capitalize("pricing"), "Pricing");
        assert_eq!(TextUtils::capitalize(""), "");
    }
}
