//! Styled text fragments, the atomic unit of rendered output.

use unicode_width::UnicodeWidthStr;

use crate::ui::style::Style;

/// A run of text carrying one style, or a line break.
///
/// Renderables produce sequences of segments; the [`Console`](crate::ui::console::Console)
/// paints them. Host renderables express multi-line output with
/// [`Segment::line_break`] and keep `'\n'` out of their text. A label is the
/// exception: it accepts any string and emits it verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    text: String,
    style: Style,
    line_break: bool,
}

impl Segment {
    #[must_use]
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
            line_break: false,
        }
    }

    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, Style::plain())
    }

    /// Unstyled padding of `width` spaces.
    #[must_use]
    pub fn padding(width: usize) -> Self {
        Self::plain(" ".repeat(width))
    }

    #[must_use]
    pub fn line_break() -> Self {
        Self {
            text: "\n".to_string(),
            style: Style::plain(),
            line_break: true,
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub const fn style(&self) -> Style {
        self.style
    }

    #[must_use]
    pub const fn is_line_break(&self) -> bool {
        self.line_break
    }

    /// Number of terminal cells the text occupies (zero for line breaks).
    #[must_use]
    pub fn cell_len(&self) -> usize {
        if self.line_break {
            0
        } else {
            self.text.width()
        }
    }
}

/// Splits a flat segment stream into lines at each line break.
///
/// Trailing line breaks do not produce an extra empty line.
#[must_use]
pub fn split_lines(segments: impl IntoIterator<Item = Segment>) -> Vec<Vec<Segment>> {
    let mut lines = Vec::new();
    let mut current = Vec::new();
    let mut pending = false;

    for segment in segments {
        if segment.is_line_break() {
            lines.push(std::mem::take(&mut current));
            pending = false;
        } else {
            current.push(segment);
            pending = true;
        }
    }

    if pending {
        lines.push(current);
    }

    lines
}

/// Total cell width of a line of segments.
#[must_use]
pub fn line_width(line: &[Segment]) -> usize {
    line.iter().map(Segment::cell_len).sum()
}
