//! Horizontal separator line.
//!
//! A rule stretches across the full width it is given. Box-drawing `─` is
//! used when Unicode is available, `-` otherwise. An optional title is
//! centered on the line:
//!
//! ```text
//! ──────────── Samples ────────────
//! ```

use unicode_width::UnicodeWidthStr;

use crate::ui::renderable::{Measurement, RenderOptions, Renderable, Segments};
use crate::ui::segment::Segment;
use crate::ui::style::Style;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Rule {
    title: Option<String>,
    style: Style,
}

impl Rule {
    #[must_use]
    pub fn new(style: Style) -> Self {
        Self { title: None, style }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    const fn line_char(options: &RenderOptions) -> char {
        if options.unicode() {
            '─'
        } else {
            '-'
        }
    }
}

impl Renderable for Rule {
    fn measure(&self, _options: &RenderOptions, max_width: usize) -> Measurement {
        Measurement::new(1, max_width.max(1))
    }

    fn render<'a>(&'a self, options: &RenderOptions, max_width: usize) -> Segments<'a> {
        let width = max_width.max(1);
        let line = Self::line_char(options);

        let Some(title) = self.title.as_deref() else {
            return Box::new(std::iter::once(Segment::new(
                line.to_string().repeat(width),
                self.style,
            )));
        };

        let label = format!(" {title} ");
        let label_len = label.width();
        // Need at least one line cell on each side.
        if label_len + 2 > width {
            return Box::new(std::iter::once(Segment::new(
                line.to_string().repeat(width),
                self.style,
            )));
        }

        let left = (width - label_len) / 2;
        let right = width - label_len - left;
        Box::new(
            [
                Segment::new(line.to_string().repeat(left), self.style),
                Segment::plain(label),
                Segment::new(line.to_string().repeat(right), self.style),
            ]
            .into_iter(),
        )
    }
}
