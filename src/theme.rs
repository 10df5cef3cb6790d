//! Color-increment theme registry.
//!
//! Loads the bundled `themes.json` (embedded at compile time) and provides
//! named, ordered RGB lists. A theme drives Origin's per-series color
//! increment when imported into a graph; the files are read-only resources,
//! never generated at runtime.

use crate::figure::Rgb;
use log::error;
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::HashMap;

/// Embedded themes.json content
const THEMES_JSON: &str = include_str!("../themes.json");

/// Global theme registry, initialized lazily on first access
pub static THEME_REGISTRY: Lazy<ThemeRegistry> = Lazy::new(|| {
    ThemeRegistry::from_json(THEMES_JSON).unwrap_or_else(|e| {
        error!("failed to load themes.json: {e}");
        ThemeRegistry::default()
    })
});

/// Default theme name
pub const DEFAULT_THEME: &str = "Classic";

/// A single theme definition from themes.json
#[derive(Debug, Clone, Deserialize)]
pub struct ColorTheme {
    pub name: String,
    /// Ordered hex color strings (`#RRGGBB`).
    pub colors: Vec<String>,
}

impl ColorTheme {
    /// Get a color by index (wraps around when the list is exhausted)
    pub fn color(&self, index: usize) -> Rgb {
        if self.colors.is_empty() {
            return Rgb::new(128, 128, 128);
        }
        let idx = index % self.colors.len();
        parse_hex_color(&self.colors[idx]).unwrap_or(Rgb::new(128, 128, 128))
    }

    /// All colors as RGB values, in increment order
    pub fn colors_rgb(&self) -> Vec<Rgb> {
        self.colors
            .iter()
            .filter_map(|hex| parse_hex_color(hex))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

/// Registry of all bundled themes
#[derive(Debug, Clone, Default)]
pub struct ThemeRegistry {
    /// Themes by lowercase name for case-insensitive lookup
    themes: HashMap<String, ColorTheme>,
    /// Theme names in file order (for listing)
    names: Vec<String>,
}

impl ThemeRegistry {
    /// Load themes from a JSON string
    pub fn from_json(json: &str) -> Result<Self, String> {
        let definitions: Vec<ColorTheme> =
            serde_json::from_str(json).map_err(|e| format!("failed to parse themes JSON: {e}"))?;

        let mut registry = Self::default();
        for def in definitions {
            registry.names.push(def.name.clone());
            registry.themes.insert(def.name.to_lowercase(), def);
        }
        Ok(registry)
    }

    /// Get a theme by name (case-insensitive)
    pub fn get(&self, name: &str) -> Option<&ColorTheme> {
        self.themes.get(&name.to_lowercase())
    }

    /// Get the default theme
    pub fn default_theme(&self) -> Option<&ColorTheme> {
        self.get(DEFAULT_THEME)
    }

    /// List all theme names
    pub fn names(&self) -> &[String] {
        &self.names
    }
}

/// Parse a hex color string to RGB
///
/// Supports `#RRGGBB` and `#RRGGBBAA` (alpha ignored), with or without the
/// leading `#`.
fn parse_hex_color(hex: &str) -> Option<Rgb> {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 && hex.len() != 8 {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

    Some(Rgb::new(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#FF0000"), Some(Rgb::new(255, 0, 0)));
        assert_eq!(parse_hex_color("1F77B4"), Some(Rgb::new(31, 119, 180)));
        assert_eq!(parse_hex_color("#440154FF"), Some(Rgb::new(68, 1, 84)));
        assert_eq!(parse_hex_color("#FFF"), None);
        assert_eq!(parse_hex_color("GGGGGG"), None);
    }

    #[test]
    fn test_registry_loads_bundled_themes() {
        let registry = &*THEME_REGISTRY;
        assert!(registry.names().contains(&"Classic".to_string()));
        assert!(registry.names().contains(&"Pyplot".to_string()));
        assert!(registry.names().contains(&"Grayscale".to_string()));

        let classic = registry.default_theme().unwrap();
        assert!(!classic.is_empty());
        assert_eq!(classic.color(0), Rgb::new(0, 0, 0));
    }

    #[test]
    fn test_case_insensitive_lookup() {
        assert!(THEME_REGISTRY.get("pyplot").is_some());
        assert!(THEME_REGISTRY.get("PYPLOT").is_some());
        assert!(THEME_REGISTRY.get("nonexistent").is_none());
    }

    #[test]
    fn test_color_wrapping() {
        let theme = THEME_REGISTRY.get("Grayscale").unwrap();
        let len = theme.len();
        assert_eq!(theme.color(0), theme.color(len));
    }

    #[test]
    fn test_pyplot_cycle_order() {
        let theme = THEME_REGISTRY.get("Pyplot").unwrap();
        assert_eq!(theme.color(0), Rgb::new(31, 119, 180));
        assert_eq!(theme.color(1), Rgb::new(255, 127, 14));
    }
}
