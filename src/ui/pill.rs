//! Capsule-shaped rendering of a [`Label`].
//!
//! With Unicode available the label is drawn between two rounded half-circle
//! glyphs from the powerline private-use range, colored with the label
//! background so the body reads as a pill:
//!
//! ```text
//!  OK   ->   U+E0B6 " OK " U+E0B4
//! ```
//!
//! Without Unicode the caps become plain padding inside the colored body, so
//! the width is the same in both modes: `text + 4`.

use crate::domain::label::Label;
use crate::ui::renderable::{Measurement, RenderOptions, Renderable, Segments};
use crate::ui::segment::Segment;

/// Left rounded end cap.
pub const LEFT_CAP: char = '\u{E0B6}';

/// Right rounded end cap.
pub const RIGHT_CAP: char = '\u{E0B4}';

/// Two padding cells plus two cap cells.
const CHROME_WIDTH: usize = 4;

impl Renderable for Label {
    fn measure(&self, _options: &RenderOptions, _max_width: usize) -> Measurement {
        Measurement::fixed(self.text_len() + CHROME_WIDTH)
    }

    fn render<'a>(&'a self, options: &RenderOptions, _max_width: usize) -> Segments<'a> {
        Box::new(PillSegments {
            label: self,
            unicode: options.unicode(),
            next: 0,
        })
    }
}

/// Lazy segment stream for one pill.
///
/// Yields three segments in Unicode mode, one otherwise.
#[derive(Debug, Clone)]
pub struct PillSegments<'a> {
    label: &'a Label,
    unicode: bool,
    next: u8,
}

impl Iterator for PillSegments<'_> {
    type Item = Segment;

    fn next(&mut self) -> Option<Segment> {
        let segment = match (self.unicode, self.next) {
            (true, 0) => Segment::new(LEFT_CAP.to_string(), self.label.cap_style()),
            (true, 1) => Segment::new(format!(" {} ", self.label.text()), self.label.style()),
            (true, 2) => Segment::new(RIGHT_CAP.to_string(), self.label.cap_style()),
            (false, 0) => Segment::new(format!("  {}  ", self.label.text()), self.label.style()),
            _ => return None,
        };
        self.next += 1;
        Some(segment)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let total = if self.unicode { 3 } else { 1 };
        let remaining = total - usize::from(self.next).min(total);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for PillSegments<'_> {}
