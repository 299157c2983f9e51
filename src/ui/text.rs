//! Styled plain text.
//!
//! Unlike a pill, text is flexible: it reports its longest word as the
//! minimum width and wraps on spaces when given less room than its full
//! length. Words wider than the available width are split. Embedded `'\n'`
//! starts a new line. Widths are terminal cells, so wide characters count
//! twice.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::ui::renderable::{Measurement, RenderOptions, Renderable, Segments};
use crate::ui::segment::Segment;
use crate::ui::style::Style;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    content: String,
    style: Style,
}

impl Text {
    #[must_use]
    pub fn new(content: impl Into<String>, style: Style) -> Self {
        Self {
            content: content.into(),
            style,
        }
    }

    #[must_use]
    pub fn plain(content: impl Into<String>) -> Self {
        Self::new(content, Style::plain())
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    fn source_lines(&self) -> impl Iterator<Item = &str> {
        self.content.split('\n')
    }

    /// Breaks the content into lines no wider than `width` cells.
    fn wrap(&self, width: usize) -> Vec<String> {
        let width = width.max(1);
        let mut lines = Vec::new();
        for source in self.source_lines() {
            if source.width() <= width {
                lines.push(source.to_string());
            } else {
                wrap_line(source, width, &mut lines);
            }
        }
        lines
    }
}

/// Cuts `word` into pieces of at most `width` cells. A single character wider
/// than `width` still gets a piece of its own.
fn split_word(word: &str, width: usize) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut piece = String::new();
    let mut piece_width = 0;

    for ch in word.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if piece_width + ch_width > width && !piece.is_empty() {
            pieces.push(std::mem::take(&mut piece));
            piece_width = 0;
        }
        piece.push(ch);
        piece_width += ch_width;
    }

    pieces.push(piece);
    pieces
}

fn wrap_line(source: &str, width: usize, lines: &mut Vec<String>) {
    let mut current = String::new();
    let mut current_width = 0;

    for word in source.split(' ') {
        let mut pieces = split_word(word, width);
        let last = pieces.pop().unwrap_or_default();

        for piece in pieces {
            if current_width > 0 {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            lines.push(piece);
        }

        let word_width = last.width();
        let needed = if current_width == 0 { word_width } else { current_width + 1 + word_width };
        if needed > width && current_width > 0 {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }
        if current_width > 0 {
            current.push(' ');
            current_width += 1;
        }
        current.push_str(&last);
        current_width += word_width;
    }

    lines.push(current);
}

impl Renderable for Text {
    fn measure(&self, _options: &RenderOptions, _max_width: usize) -> Measurement {
        let longest_word = self
            .source_lines()
            .flat_map(|line| line.split(' '))
            .map(UnicodeWidthStr::width)
            .max()
            .unwrap_or(0);
        let widest_line = self.source_lines().map(UnicodeWidthStr::width).max().unwrap_or(0);
        Measurement::new(longest_word, widest_line)
    }

    fn render<'a>(&'a self, _options: &RenderOptions, max_width: usize) -> Segments<'a> {
        let style = self.style;
        let lines = self.wrap(max_width);
        let count = lines.len();
        Box::new(lines.into_iter().enumerate().flat_map(move |(index, line)| {
            let text = Segment::new(line, style);
            if index + 1 < count {
                vec![text, Segment::line_break()]
            } else {
                vec![text]
            }
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::segment::split_lines;

    fn render_lines(text: &Text, width: usize) -> Vec<String> {
        split_lines(text.render(&RenderOptions::default(), width))
            .into_iter()
            .map(|line| line.iter().map(Segment::text).collect())
            .collect()
    }

    #[test]
    fn measure_uses_longest_word_and_full_length() {
        let text = Text::plain("tiny enormous");
        assert_eq!(text.measure(&RenderOptions::default(), 5), Measurement::new(8, 13));
    }

    #[test]
    fn fits_on_one_line() {
        assert_eq!(render_lines(&Text::plain("hello there"), 11), vec!["hello there"]);
    }

    #[test]
    fn wraps_on_spaces() {
        assert_eq!(
            render_lines(&Text::plain("the quick brown fox"), 10),
            vec!["the quick", "brown fox"]
        );
    }

    #[test]
    fn splits_long_words() {
        assert_eq!(render_lines(&Text::plain("abcdefgh ij"), 3), vec!["abc", "def", "gh", "ij"]);
    }

    #[test]
    fn empty_text_renders_one_empty_segment() {
        let segments: Vec<_> = Text::plain("").render(&RenderOptions::default(), 0).collect();
        assert_eq!(segments, vec![Segment::plain("")]);
    }

    #[test]
    fn wide_characters_count_two_cells() {
        let text = Text::plain("日本語 ok");
        assert_eq!(text.measure(&RenderOptions::default(), 80), Measurement::new(6, 9));
        assert_eq!(render_lines(&text, 6), vec!["日本語", "ok"]);
        assert_eq!(render_lines(&Text::plain("日本語"), 4), vec!["日本", "語"]);
    }

    #[test]
    fn wide_character_in_single_cell_still_renders() {
        assert_eq!(render_lines(&Text::plain("日本"), 1), vec!["日", "本"]);
    }

    #[test]
    fn newlines_become_line_breaks() {
        let text = Text::plain("first line\nsecond");
        assert_eq!(text.measure(&RenderOptions::default(), 80), Measurement::new(6, 10));

        let segments: Vec<_> = text.render(&RenderOptions::default(), 80).collect();
        assert_eq!(
            segments,
            vec![Segment::plain("first line"), Segment::line_break(), Segment::plain("second")]
        );
        assert!(segments.iter().all(|s| s.is_line_break() || !s.text().contains('\n')));
    }

    #[test]
    fn newlines_and_wrapping_combine() {
        assert_eq!(
            render_lines(&Text::plain("aa bb\ncc"), 3),
            vec!["aa", "bb", "cc"]
        );
    }
}
