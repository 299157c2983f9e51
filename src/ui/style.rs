//! Colors, styles and ANSI escape sequence generation.
//!
//! A [`Style`] is an optional foreground, an optional background and a bold
//! flag. Styles are plain `Copy` values; they know how to turn themselves into
//! an SGR escape sequence but never touch an output stream.
//!
//! # Example
//!
//! ```rust
//! use pillbox::ui::style::{Color, Style};
//!
//! let style = Style::new(Color::White, Color::Blue);
//! assert_eq!(style.to_ansi(), "\u{1b}[37;44m");
//! assert_eq!(Style::plain().to_ansi(), "");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::PillboxError;

/// ANSI reset escape sequence (`\x1b[0m`).
pub const RESET: &str = "\u{001b}[0m";

/// A terminal color.
///
/// Named colors map to the basic 16-color SGR palette. [`Color::Rgb`] emits a
/// 24-bit sequence. Colors parse from names (`"grey"`, `"gray"`, `"blue"`) or
/// hex strings (`"#cdd6f4"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    Grey,
    Rgb(u8, u8, u8),
}

impl Color {
    /// SGR parameters selecting this color as foreground.
    fn fg_code(self) -> String {
        match self {
            Self::Black => "30".to_string(),
            Self::Red => "31".to_string(),
            Self::Green => "32".to_string(),
            Self::Yellow => "33".to_string(),
            Self::Blue => "34".to_string(),
            Self::Magenta => "35".to_string(),
            Self::Cyan => "36".to_string(),
            Self::White => "37".to_string(),
            Self::Grey => "90".to_string(),
            Self::Rgb(r, g, b) => format!("38;2;{r};{g};{b}"),
        }
    }

    /// SGR parameters selecting this color as background.
    fn bg_code(self) -> String {
        match self {
            Self::Black => "40".to_string(),
            Self::Red => "41".to_string(),
            Self::Green => "42".to_string(),
            Self::Yellow => "43".to_string(),
            Self::Blue => "44".to_string(),
            Self::Magenta => "45".to_string(),
            Self::Cyan => "46".to_string(),
            Self::White => "47".to_string(),
            Self::Grey => "100".to_string(),
            Self::Rgb(r, g, b) => format!("48;2;{r};{g};{b}"),
        }
    }

    /// Parses a six-digit hex color, with or without the leading `#`.
    fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }

        let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
        let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
        let b = u8::from_str_radix(&digits[4..6], 16).ok()?;

        Some(Self::Rgb(r, g, b))
    }
}

impl FromStr for Color {
    type Err = PillboxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        let color = match name.as_str() {
            "black" => Self::Black,
            "red" => Self::Red,
            "green" => Self::Green,
            "yellow" => Self::Yellow,
            "blue" => Self::Blue,
            "magenta" => Self::Magenta,
            "cyan" => Self::Cyan,
            "white" => Self::White,
            "grey" | "gray" => Self::Grey,
            _ => return Self::from_hex(&name).ok_or_else(|| PillboxError::Color(s.to_string())),
        };
        Ok(color)
    }
}

impl TryFrom<String> for Color {
    type Error = PillboxError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Black => f.write_str("black"),
            Self::Red => f.write_str("red"),
            Self::Green => f.write_str("green"),
            Self::Yellow => f.write_str("yellow"),
            Self::Blue => f.write_str("blue"),
            Self::Magenta => f.write_str("magenta"),
            Self::Cyan => f.write_str("cyan"),
            Self::White => f.write_str("white"),
            Self::Grey => f.write_str("grey"),
            Self::Rgb(r, g, b) => write!(f, "#{r:02x}{g:02x}{b:02x}"),
        }
    }
}

/// Foreground, background and weight applied to a run of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Style {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub bold: bool,
}

impl Style {
    /// A style with both colors set.
    #[must_use]
    pub const fn new(fg: Color, bg: Color) -> Self {
        Self {
            fg: Some(fg),
            bg: Some(bg),
            bold: false,
        }
    }

    /// A style with only a foreground color.
    #[must_use]
    pub const fn foreground(fg: Color) -> Self {
        Self {
            fg: Some(fg),
            bg: None,
            bold: false,
        }
    }

    /// The unstyled style.
    #[must_use]
    pub const fn plain() -> Self {
        Self {
            fg: None,
            bg: None,
            bold: false,
        }
    }

    #[must_use]
    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// The background becomes the foreground and the background is cleared.
    #[must_use]
    pub const fn inverse(self) -> Self {
        Self {
            fg: self.bg,
            bg: None,
            bold: false,
        }
    }

    #[must_use]
    pub const fn is_plain(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && !self.bold
    }

    /// Builds the SGR escape sequence for this style, or an empty string for
    /// the plain style.
    #[must_use]
    pub fn to_ansi(&self) -> String {
        if self.is_plain() {
            return String::new();
        }

        let mut codes = Vec::with_capacity(3);
        if self.bold {
            codes.push("1".to_string());
        }
        if let Some(fg) = self.fg {
            codes.push(fg.fg_code());
        }
        if let Some(bg) = self.bg {
            codes.push(bg.bg_code());
        }

        format!("\u{001b}[{}m", codes.join(";"))
    }
}
