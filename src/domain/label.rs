//! Label domain model.
//!
//! A [`Label`] is the unit rendered as a capsule-shaped pill: an immutable
//! piece of text tagged with a semantic [`Category`]. The category decides the
//! color pairing through a fixed lookup table; nothing else can influence it.
//!
//! | Category | Foreground | Background |
//! |----------|------------|------------|
//! | Success  | White      | Green      |
//! | Warning  | Black      | Yellow     |
//! | Error    | White      | Red        |
//! | Info     | White      | Blue       |
//! | Default  | White      | Grey       |

use std::fmt;

use crate::ui::style::{Color, Style};

/// Semantic tag deciding the color pairing of a [`Label`].
///
/// Parsing from a string never fails: anything unrecognized becomes
/// [`Category::Default`].
///
/// # Examples
///
/// ```
/// use pillbox::Category;
///
/// assert_eq!(Category::from("warning"), Category::Warning);
/// assert_eq!(Category::from("WARN"), Category::Warning);
/// assert_eq!(Category::from("purple"), Category::Default);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    Success,
    Warning,
    Error,
    Info,
    #[default]
    Default,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Self; 5] = [
        Self::Success,
        Self::Warning,
        Self::Error,
        Self::Info,
        Self::Default,
    ];

    /// Returns the `(foreground, background)` style for this category.
    #[must_use]
    pub const fn style(self) -> Style {
        match self {
            Self::Success => Style::new(Color::White, Color::Green),
            Self::Warning => Style::new(Color::Black, Color::Yellow),
            Self::Error => Style::new(Color::White, Color::Red),
            Self::Info => Style::new(Color::White, Color::Blue),
            Self::Default => Style::new(Color::White, Color::Grey),
        }
    }

    /// Lowercase name used in configuration and logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Info => "info",
            Self::Default => "default",
        }
    }
}

impl From<&str> for Category {
    fn from(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "success" | "ok" => Self::Success,
            "warning" | "warn" => Self::Warning,
            "error" | "err" => Self::Error,
            "info" => Self::Info,
            _ => Self::Default,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable text plus category, with its display style derived once.
///
/// Construction accepts any string, including the empty string.
///
/// # Examples
///
/// ```
/// use pillbox::{Category, Label};
/// use pillbox::ui::style::Color;
///
/// let label = Label::new("OK", Category::Info);
/// assert_eq!(label.style().fg, Some(Color::White));
/// assert_eq!(label.style().bg, Some(Color::Blue));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    text: String,
    category: Category,
    style: Style,
}

impl Label {
    #[must_use]
    pub fn new(text: impl Into<String>, category: Category) -> Self {
        Self {
            text: text.into(),
            category,
            style: category.style(),
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }

    /// Full `(foreground, background)` style of the capsule body.
    #[must_use]
    pub const fn style(&self) -> Style {
        self.style
    }

    /// Style of the end caps: the body background used as foreground, with
    /// no background of its own.
    #[must_use]
    pub const fn cap_style(&self) -> Style {
        self.style.inverse()
    }

    /// Number of characters in the text.
    #[must_use]
    pub fn text_len(&self) -> usize {
        self.text.chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Category::Success, Color::White, Color::Green)]
    #[case(Category::Warning, Color::Black, Color::Yellow)]
    #[case(Category::Error, Color::White, Color::Red)]
    #[case(Category::Info, Color::White, Color::Blue)]
    #[case(Category::Default, Color::White, Color::Grey)]
    fn category_maps_to_fixed_colors(
        #[case] category: Category,
        #[case] fg: Color,
        #[case] bg: Color,
    ) {
        let label = Label::new("x", category);
        assert_eq!(label.style(), Style::new(fg, bg));
    }

    #[rstest]
    #[case("")]
    #[case("purple")]
    #[case("  ")]
    #[case("succes")]
    fn unrecognized_names_fall_back_to_default(#[case] name: &str) {
        let category = Category::from(name);
        assert_eq!(category, Category::Default);
        assert_eq!(category.style(), Style::new(Color::White, Color::Grey));
    }

    #[test]
    fn names_parse_case_insensitively() {
        assert_eq!(Category::from(" Success "), Category::Success);
        assert_eq!(Category::from("ERR"), Category::Error);
        assert_eq!(Category::from("Info"), Category::Info);
    }

    #[test]
    fn display_round_trips_through_from() {
        for category in Category::ALL {
            assert_eq!(Category::from(category.to_string().as_str()), category);
        }
    }

    #[test]
    fn cap_style_uses_background_as_foreground() {
        let label = Label::new("x", Category::Warning);
        let cap = label.cap_style();
        assert_eq!(cap.fg, Some(Color::Yellow));
        assert_eq!(cap.bg, None);
    }

    #[test]
    fn text_len_counts_characters() {
        assert_eq!(Label::new("", Category::Info).text_len(), 0);
        assert_eq!(Label::new("héllo", Category::Info).text_len(), 5);
    }
}
