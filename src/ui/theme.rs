//! Chrome themes for headings, rules and tables.
//!
//! A theme colors everything *around* the pills: section headings, separator
//! rules, table borders and the sample listings. Pill colors are fixed by
//! category and are never themed.
//!
//! # Built-in Themes
//!
//! - `default`: cyan headings, grey rules, light cyan table borders
//! - `mono`: white and grey only
//!
//! # TOML Format
//!
//! Colors are basic names (`cyan`, `grey`, ...) or hex strings.
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! heading_fg = "cyan"
//! rule_fg = "grey"
//! border_fg = "#d7ffff"
//! index_fg = "green"
//! value_fg = "yellow"
//! emphasis_fg = "#d7005f"
//! female_fg = "#d75f87"
//! male_fg = "blue"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::domain::error::{PillboxError, Result};
use crate::ui::style::Color;

/// Named color scheme for console chrome.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all chrome elements.
    pub colors: ThemeColors,
}

/// Color definitions for chrome elements.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Section headings.
    pub heading_fg: Color,
    /// Separator rules.
    pub rule_fg: Color,
    /// Table borders.
    pub border_fg: Color,

    /// Row indices in sample listings.
    pub index_fg: Color,
    /// Values in sample listings.
    pub value_fg: Color,
    /// Sub-headings inside a section.
    pub emphasis_fg: Color,

    /// Female gender marker.
    pub female_fg: Color,
    /// Male gender marker.
    pub male_fg: Color,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// # Returns
    ///
    /// - `Some(Theme)` if the theme name is recognized
    /// - `None` if the theme name is unknown
    ///
    /// # Example
    ///
    /// ```rust
    /// use pillbox::ui::Theme;
    ///
    /// let theme = Theme::from_name("mono").unwrap();
    /// assert_eq!(theme.name, "mono");
    /// assert!(Theme::from_name("neon").is_none());
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "default" => include_str!("../../themes/default.toml"),
            "mono" => include_str!("../../themes/mono.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`PillboxError::Theme`] if:
    /// - The file cannot be read (file not found, permission denied, etc.)
    /// - The TOML content cannot be parsed (invalid syntax, missing fields, bad colors)
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            PillboxError::Theme(format!("failed to read theme file {}: {e}", path.display()))
        })?;

        toml::from_str(&contents)
            .map_err(|e| PillboxError::Theme(format!("failed to parse theme TOML: {e}")))
    }
}

impl Default for Theme {
    /// Returns the built-in `default` theme.
    ///
    /// # Panics
    ///
    /// Panics if the built-in theme fails to parse (covered by tests).
    fn default() -> Self {
        Self::from_name("default").expect("built-in default theme should always parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn built_in_themes_parse() {
        let theme = Theme::default();
        assert_eq!(theme.name, "default");
        assert_eq!(theme.colors.rule_fg, Color::Grey);
        assert_eq!(theme.colors.heading_fg, Color::Cyan);

        let mono = Theme::from_name("mono");
        assert!(mono.is_some());
    }

    #[test]
    fn loads_theme_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let contents = include_str!("../../themes/default.toml").replace("\"default\"", "\"custom\"");
        file.write_all(contents.as_bytes()).unwrap();

        let theme = Theme::from_file(file.path()).unwrap();
        assert_eq!(theme.name, "custom");
        assert_eq!(theme.colors.border_fg, Color::Rgb(0xd7, 0xff, 0xff));
    }

    #[test]
    fn missing_file_is_theme_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Theme::from_file(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, PillboxError::Theme(_)));
    }

    #[test]
    fn bad_color_is_theme_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let contents = include_str!("../../themes/mono.toml").replace("\"grey\"", "\"sparkly\"");
        file.write_all(contents.as_bytes()).unwrap();

        let err = Theme::from_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("Theme error"));
    }
}
