//! Painting segment streams onto an output sink.
//!
//! [`Console`] is the host end of the render pipeline: it hands its
//! [`RenderOptions`] and width to any [`Renderable`], then writes the
//! resulting segments to an [`io::Write`], wrapping styled runs in SGR escape
//! sequences when the surface understands ANSI and writing bare text when it
//! does not.
//!
//! # Example
//!
//! ```rust
//! use pillbox::ui::{Capabilities, Console, RenderOptions, Theme};
//! use pillbox::{Category, Label};
//!
//! let options = RenderOptions::new(Capabilities { unicode: false, ansi: false });
//! let mut console = Console::new(Vec::new(), options, 40, Theme::default());
//! console.write(&Label::new("OK", Category::Success))?;
//!
//! assert_eq!(String::from_utf8_lossy(&console.into_inner()), "  OK  \n");
//! # Ok::<(), pillbox::PillboxError>(())
//! ```

use std::io::{self, Write};

use crate::domain::error::Result;
use crate::domain::label::{Category, Label};
use crate::ui::renderable::{RenderOptions, Renderable};
use crate::ui::rule::Rule;
use crate::ui::segment::Segment;
use crate::ui::style::{Style, RESET};
use crate::ui::table::{Justify, Table, TableBorder};
use crate::ui::text::Text;
use crate::ui::theme::Theme;

/// Renders renderables to a writer at a fixed width.
pub struct Console<W: Write> {
    out: W,
    options: RenderOptions,
    width: usize,
    theme: Theme,
}

impl<W: Write> Console<W> {
    #[must_use]
    pub const fn new(out: W, options: RenderOptions, width: usize, theme: Theme) -> Self {
        Self {
            out,
            options,
            width,
            theme,
        }
    }

    #[must_use]
    pub const fn options(&self) -> &RenderOptions {
        &self.options
    }

    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub const fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Consumes the console and returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Renders `renderable` at the console width and ends the output with a
    /// newline.
    ///
    /// # Errors
    ///
    /// Returns [`PillboxError::Io`](crate::PillboxError::Io) if writing fails.
    pub fn write(&mut self, renderable: &dyn Renderable) -> Result<()> {
        let segments = renderable.render(&self.options, self.width);
        let ended_with_break = self.write_segments(segments)?;
        if !ended_with_break {
            self.out.write_all(b"\n")?;
        }
        self.out.flush()?;
        Ok(())
    }

    /// Writes segments as-is. Returns whether the last segment was a line
    /// break.
    ///
    /// # Errors
    ///
    /// Returns [`PillboxError::Io`](crate::PillboxError::Io) if writing fails.
    pub fn write_segments(&mut self, segments: impl IntoIterator<Item = Segment>) -> Result<bool> {
        let mut ended_with_break = false;
        let mut count = 0usize;

        for segment in segments {
            self.paint(&segment)?;
            ended_with_break = segment.is_line_break();
            count += 1;
        }

        tracing::trace!(segments = count, ansi = self.options.capabilities.ansi, "painted segments");
        Ok(ended_with_break)
    }

    fn paint(&mut self, segment: &Segment) -> io::Result<()> {
        let style = segment.style();
        if segment.is_line_break() || !self.options.capabilities.ansi || style.is_plain() {
            return self.out.write_all(segment.text().as_bytes());
        }

        write!(self.out, "{}{}{RESET}", style.to_ansi(), segment.text())
    }

    /// Writes an empty line.
    ///
    /// # Errors
    ///
    /// Returns [`PillboxError::Io`](crate::PillboxError::Io) if writing fails.
    pub fn blank_line(&mut self) -> Result<()> {
        self.out.write_all(b"\n")?;
        Ok(())
    }

    /// Writes a single line of styled text.
    ///
    /// # Errors
    ///
    /// Returns [`PillboxError::Io`](crate::PillboxError::Io) if writing fails.
    pub fn line(&mut self, text: impl Into<String>, style: Style) -> Result<()> {
        self.write(&Text::new(text, style))
    }

    /// Writes several styled fragments on one line.
    ///
    /// # Errors
    ///
    /// Returns [`PillboxError::Io`](crate::PillboxError::Io) if writing fails.
    pub fn spans(&mut self, spans: &[(&str, Style)]) -> Result<()> {
        let segments: Vec<Segment> = spans
            .iter()
            .map(|(text, style)| Segment::new(*text, *style))
            .collect();
        self.write_segments(segments)?;
        self.blank_line()
    }

    /// Shows `text` as a centered Info pill followed by a blank line.
    ///
    /// # Errors
    ///
    /// Returns [`PillboxError::Io`](crate::PillboxError::Io) if writing fails.
    pub fn window_title(&mut self, text: &str) -> Result<()> {
        tracing::debug!(title = %text, "writing window title");
        self.centered_pill(Label::new(text, Category::Info))?;
        self.blank_line()
    }

    /// Shows an exit hint as an Info pill after a blank line.
    ///
    /// The pill shares a centered borderless row with an empty cell, so it
    /// sits slightly left of center. Reading the key press is left to the
    /// caller.
    ///
    /// # Errors
    ///
    /// Returns [`PillboxError::Io`](crate::PillboxError::Io) if writing fails.
    pub fn exit_prompt(&mut self, text: &str) -> Result<()> {
        self.blank_line()?;
        let table = Table::new()
            .border(TableBorder::None)
            .justify(Justify::Center)
            .add_column("")
            .add_column("")
            .add_row([
                Box::new(Label::new(text, Category::Info)) as Box<dyn Renderable>,
                Box::new(Text::plain("")),
            ]);
        self.write(&table)
    }

    fn centered_pill(&mut self, label: Label) -> Result<()> {
        let table = Table::new()
            .border(TableBorder::None)
            .justify(Justify::Center)
            .add_column("")
            .add_row([Box::new(label) as Box<dyn Renderable>]);
        self.write(&table)
    }

    /// Writes a section heading in the theme heading color, then a blank line.
    ///
    /// # Errors
    ///
    /// Returns [`PillboxError::Io`](crate::PillboxError::Io) if writing fails.
    pub fn heading(&mut self, name: &str) -> Result<()> {
        let style = Style::foreground(self.theme.colors.heading_fg);
        self.line(name, style)?;
        self.blank_line()
    }

    /// Writes a full-width separator rule in the theme rule color.
    ///
    /// # Errors
    ///
    /// Returns [`PillboxError::Io`](crate::PillboxError::Io) if writing fails.
    pub fn line_separator(&mut self) -> Result<()> {
        let rule = Rule::new(Style::foreground(self.theme.colors.rule_fg));
        self.write(&rule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::renderable::Capabilities;
    use crate::ui::style::Color;

    fn console(unicode: bool, ansi: bool, width: usize) -> Console<Vec<u8>> {
        Console::new(
            Vec::new(),
            RenderOptions::new(Capabilities { unicode, ansi }),
            width,
            Theme::default(),
        )
    }

    fn output(console: Console<Vec<u8>>) -> String {
        String::from_utf8(console.into_inner()).unwrap()
    }

    #[test]
    fn paints_pill_with_ansi() {
        let mut console = console(true, true, 80);
        console.write(&Label::new("OK", Category::Info)).unwrap();
        assert_eq!(
            output(console),
            "\u{1b}[34m\u{E0B6}\u{1b}[0m\u{1b}[37;44m OK \u{1b}[0m\u{1b}[34m\u{E0B4}\u{1b}[0m\n"
        );
    }

    #[test]
    fn plain_surface_gets_bare_text() {
        let mut console = console(false, false, 80);
        console.write(&Label::new("OK", Category::Error)).unwrap();
        assert_eq!(output(console), "  OK  \n");
    }

    #[test]
    fn window_title_is_centered() {
        let mut console = console(false, false, 20);
        console.window_title("Home").unwrap();
        // cell is 8 + 2 padding wide, centered in 20
        assert_eq!(output(console), "        Home   \n\n");
    }

    #[test]
    fn exit_prompt_sits_left_of_center() {
        let mut console = console(false, false, 20);
        console.exit_prompt("Bye").unwrap();
        // pill cell 9 plus empty cell 2, centered in 20
        assert_eq!(output(console), "\n       Bye     \n");
    }

    #[test]
    fn line_separator_spans_width() {
        let mut console = console(true, true, 3);
        console.line_separator().unwrap();
        assert_eq!(output(console), "\u{1b}[90m───\u{1b}[0m\n");
    }

    #[test]
    fn heading_uses_theme_color() {
        let mut console = console(true, true, 40);
        console.heading("decimal_examples").unwrap();
        assert_eq!(output(console), "\u{1b}[36mdecimal_examples\u{1b}[0m\n\n");
    }

    #[test]
    fn spans_share_a_line() {
        let mut console = console(false, true, 40);
        console
            .spans(&[("0", Style::foreground(Color::Green)), (": ", Style::plain())])
            .unwrap();
        assert_eq!(output(console), "\u{1b}[32m0\u{1b}[0m: \n");
    }
}
