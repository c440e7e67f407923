//! URL-safe identifiers for entries.
//!
//! [`slugify`] is a pure function of the name. [`SlugRegistry`] owns the set
//! of slugs handed out during one generation run and appends `-2`, `-3`, ...
//! on collision. Each run builds its own registry.

use std::collections::HashSet;

/// Slug used when a name has no ASCII alphanumeric content.
pub const FALLBACK_SLUG: &str = "roll";

const SEPARATOR: char = '-';

/// Derive the base slug for `name`.
///
/// ASCII letters are lower-cased, every maximal run of characters outside
/// `[a-zA-Z0-9]` becomes one `-`, and separators are trimmed from both ends.
pub fn slugify(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut pending_separator = false;

    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_separator && !out.is_empty() {
                out.push(SEPARATOR);
            }
            out.push(ch.to_ascii_lowercase());
            pending_separator = false;
        } else {
            pending_separator = true;
        }
    }

    if out.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        out
    }
}

/// Slugs assigned so far in one generation run.
#[derive(Debug, Default, Clone)]
pub struct SlugRegistry {
    used: HashSet<String>,
}

impl SlugRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign a unique slug for `name` and register it.
    pub fn assign(&mut self, name: &str) -> String {
        let base = slugify(name);
        let mut slug = base.clone();
        let mut counter = 2;

        while self.used.contains(&slug) {
            slug = format!("{}{}{}", base, SEPARATOR, counter);
            counter += 1;
        }

        self.used.insert(slug.clone());
        slug
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.used.contains(slug)
    }

    pub fn len(&self) -> usize {
        self.used.len()
    }

    pub fn is_empty(&self) -> bool {
        self.used.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_lowercases_and_collapses_separators() {
        assert_eq!(slugify("Roll Café"), "roll-caf");
        assert_eq!(slugify("Roll  Café!!"), "roll-caf");
        assert_eq!(slugify("Cinnamon---Bun  Bar"), "cinnamon-bun-bar");
        assert_eq!(slugify("  -Leading and trailing- "), "leading-and-trailing");
    }

    #[test]
    fn test_slugify_keeps_digits() {
        assert_eq!(slugify("Bakery 123"), "bakery-123");
    }

    #[test]
    fn test_slugify_falls_back_without_ascii_alphanumerics() {
        assert_eq!(slugify(""), FALLBACK_SLUG);
        assert_eq!(slugify("!!!"), FALLBACK_SLUG);
        assert_eq!(slugify("肉桂捲"), FALLBACK_SLUG);
    }

    #[test]
    fn test_slugify_mixed_scripts() {
        assert_eq!(slugify("肉桂捲 Cinnamon 肉桂"), "cinnamon");
        assert_eq!(slugify("Fika 肉桂 Roll"), "fika-roll");
    }

    #[test]
    fn test_collisions_get_incrementing_suffix() {
        let mut registry = SlugRegistry::new();
        assert_eq!(registry.assign("Roll Café"), "roll-caf");
        assert_eq!(registry.assign("Roll  Café!!"), "roll-caf-2");
        assert_eq!(registry.assign("ROLL CAF"), "roll-caf-3");
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_suffix_skips_taken_numbers() {
        let mut registry = SlugRegistry::new();
        assert_eq!(registry.assign("Roll 2"), "roll-2");
        assert_eq!(registry.assign("Roll"), "roll");
        assert_eq!(registry.assign("Roll"), "roll-3");
    }

    #[test]
    fn test_fallback_slugs_are_unique() {
        let mut registry = SlugRegistry::new();
        assert_eq!(registry.assign("肉桂捲"), "roll");
        assert_eq!(registry.assign("肉桂小舖"), "roll-2");
    }

    #[test]
    fn test_assignment_is_deterministic() {
        let names = ["A B", "a-b", "Other", "A  B"];

        let run = |names: &[&str]| {
            let mut registry = SlugRegistry::new();
            names.iter().map(|n| registry.assign(n)).collect::<Vec<_>>()
        };

        let first = run(&names);
        assert_eq!(first, run(&names));
        assert_eq!(first, vec!["a-b", "a-b-2", "other", "a-b-3"]);
    }

    #[test]
    fn test_registry_records_assigned_slugs() {
        let mut registry = SlugRegistry::new();
        assert!(registry.is_empty());
        registry.assign("Fika");
        assert!(registry.contains("fika"));
        assert!(!registry.contains("fika-2"));
    }
}
