//! Column layout host for renderable cells.
//!
//! A [`Table`] holds `Box<dyn Renderable>` cells, so pills, text and rules can
//! share a row without the table knowing their concrete types. Layout works
//! purely through [`Renderable::measure`]:
//!
//! 1. Each column takes the widest `max` measurement among its cells.
//! 2. If the table is wider than the available space, the widest columns are
//!    shrunk one cell at a time, never below their `min` measurement. Fixed
//!    leaves such as pills therefore keep their width.
//! 3. Every cell is rendered at its column width and padded to it.
//! 4. The whole table is justified inside `max_width`.
//!
//! # Example
//!
//! ```rust
//! use pillbox::ui::table::{Justify, Table, TableBorder};
//! use pillbox::ui::Renderable;
//! use pillbox::{Category, Label};
//!
//! let table = Table::new()
//!     .border(TableBorder::Rounded)
//!     .justify(Justify::Left)
//!     .add_column("Status")
//!     .add_row(vec![Box::new(Label::new("OK", Category::Success)) as Box<dyn Renderable>]);
//!
//! assert_eq!(table.row_count(), 1);
//! ```

use crate::ui::renderable::{Measurement, RenderOptions, Renderable, Segments};
use crate::ui::segment::{line_width, split_lines, Segment};
use crate::ui::style::Style;
use crate::ui::text::Text;

/// Horizontal padding on each side of a cell.
const CELL_PADDING: usize = 1;

/// Border drawing style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableBorder {
    None,
    #[default]
    Rounded,
    Ascii,
}

/// Placement of the table within the available width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Justify {
    #[default]
    Left,
    Center,
    Right,
}

/// Glyphs for one border style.
struct BorderGlyphs {
    top_left: char,
    top_mid: char,
    top_right: char,
    mid_left: char,
    mid_mid: char,
    mid_right: char,
    bottom_left: char,
    bottom_mid: char,
    bottom_right: char,
    horizontal: char,
    vertical: char,
}

static ROUNDED: BorderGlyphs = BorderGlyphs {
    top_left: '╭',
    top_mid: '┬',
    top_right: '╮',
    mid_left: '├',
    mid_mid: '┼',
    mid_right: '┤',
    bottom_left: '╰',
    bottom_mid: '┴',
    bottom_right: '╯',
    horizontal: '─',
    vertical: '│',
};

static ASCII: BorderGlyphs = BorderGlyphs {
    top_left: '+',
    top_mid: '+',
    top_right: '+',
    mid_left: '+',
    mid_mid: '+',
    mid_right: '+',
    bottom_left: '+',
    bottom_mid: '+',
    bottom_right: '+',
    horizontal: '-',
    vertical: '|',
};

/// A grid of renderable cells.
pub struct Table {
    headers: Vec<Text>,
    rows: Vec<Vec<Box<dyn Renderable>>>,
    border: TableBorder,
    border_style: Style,
    header_style: Style,
    justify: Justify,
    title: Option<Text>,
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}

impl Table {
    #[must_use]
    pub fn new() -> Self {
        Self {
            headers: Vec::new(),
            rows: Vec::new(),
            border: TableBorder::default(),
            border_style: Style::plain(),
            header_style: Style::plain().bold(),
            justify: Justify::default(),
            title: None,
        }
    }

    #[must_use]
    pub const fn border(mut self, border: TableBorder) -> Self {
        self.border = border;
        self
    }

    #[must_use]
    pub const fn border_style(mut self, style: Style) -> Self {
        self.border_style = style;
        self
    }

    /// Style applied to headers added after this call.
    #[must_use]
    pub const fn header_style(mut self, style: Style) -> Self {
        self.header_style = style;
        self
    }

    #[must_use]
    pub const fn justify(mut self, justify: Justify) -> Self {
        self.justify = justify;
        self
    }

    #[must_use]
    pub fn title(mut self, title: Text) -> Self {
        self.title = Some(title);
        self
    }

    /// Appends a column. An empty header is allowed; the header row is only
    /// drawn when at least one header has text.
    #[must_use]
    pub fn add_column(mut self, header: impl Into<String>) -> Self {
        self.headers.push(Text::new(header, self.header_style));
        self
    }

    /// Appends a row. Missing cells are left blank; cells beyond the column
    /// count are dropped.
    #[must_use]
    pub fn add_row(mut self, cells: impl IntoIterator<Item = Box<dyn Renderable>>) -> Self {
        self.push_row(cells);
        self
    }

    /// Non-consuming form of [`Table::add_row`].
    pub fn push_row(&mut self, cells: impl IntoIterator<Item = Box<dyn Renderable>>) {
        let mut row: Vec<Box<dyn Renderable>> = cells.into_iter().collect();
        if row.len() > self.headers.len() {
            tracing::warn!(
                cells = row.len(),
                columns = self.headers.len(),
                "dropping table cells beyond column count"
            );
            row.truncate(self.headers.len());
        }
        self.rows.push(row);
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    fn show_headers(&self) -> bool {
        self.headers.iter().any(|header| !header.content().is_empty())
    }

    fn glyphs(&self, options: &RenderOptions) -> Option<&'static BorderGlyphs> {
        match self.border {
            TableBorder::None => None,
            TableBorder::Rounded if options.unicode() => Some(&ROUNDED),
            TableBorder::Rounded | TableBorder::Ascii => Some(&ASCII),
        }
    }

    /// Cells that take part in the layout of `column`.
    fn column_cells(&self, column: usize) -> impl Iterator<Item = &dyn Renderable> {
        let header = self
            .show_headers()
            .then(|| &self.headers[column] as &dyn Renderable);
        header.into_iter().chain(
            self.rows
                .iter()
                .filter_map(move |row| row.get(column).map(|cell| cell.as_ref() as &dyn Renderable)),
        )
    }

    fn column_measurements(&self, options: &RenderOptions, max_width: usize) -> Vec<Measurement> {
        (0..self.headers.len())
            .map(|column| {
                self.column_cells(column)
                    .map(|cell| cell.measure(options, max_width))
                    .fold(Measurement::fixed(0), |acc, m| {
                        Measurement::new(acc.min.max(m.min), acc.max.max(m.max))
                    })
            })
            .collect()
    }

    /// Cells used by borders and padding, excluding cell content.
    fn chrome_width(&self, options: &RenderOptions) -> usize {
        let columns = self.headers.len();
        let borders = if self.glyphs(options).is_some() { columns + 1 } else { 0 };
        columns * CELL_PADDING * 2 + borders
    }

    fn column_widths(&self, options: &RenderOptions, max_width: usize) -> Vec<usize> {
        let measurements = self.column_measurements(options, max_width);
        let mut widths: Vec<usize> = measurements.iter().map(|m| m.max).collect();
        let chrome = self.chrome_width(options);

        let mut total = widths.iter().sum::<usize>() + chrome;
        while total > max_width {
            let shrinkable = widths
                .iter()
                .enumerate()
                .filter(|(index, width)| **width > measurements[*index].min)
                .max_by_key(|(_, width)| **width)
                .map(|(index, _)| index);
            let Some(index) = shrinkable else {
                break;
            };
            widths[index] -= 1;
            total -= 1;
        }

        widths
    }

    fn border_line(
        glyphs: &BorderGlyphs,
        widths: &[usize],
        (left, mid, right): (char, char, char),
    ) -> String {
        let mut line = String::new();
        line.push(left);
        for (index, width) in widths.iter().enumerate() {
            if index > 0 {
                line.push(mid);
            }
            line.extend(std::iter::repeat(glyphs.horizontal).take(width + CELL_PADDING * 2));
        }
        line.push(right);
        line
    }

    /// Renders one row of cells into padded lines.
    fn row_lines(
        &self,
        cells: &[&dyn Renderable],
        widths: &[usize],
        options: &RenderOptions,
    ) -> Vec<Vec<Segment>> {
        let rendered: Vec<Vec<Vec<Segment>>> = widths
            .iter()
            .enumerate()
            .map(|(column, width)| {
                cells
                    .get(column)
                    .map_or_else(Vec::new, |cell| split_lines(cell.render(options, *width)))
            })
            .collect();
        let height = rendered.iter().map(Vec::len).max().unwrap_or(0).max(1);
        let glyphs = self.glyphs(options);

        (0..height)
            .map(|line_index| {
                let mut line = Vec::new();
                for (column, width) in widths.iter().enumerate() {
                    if let Some(glyphs) = glyphs {
                        line.push(Segment::new(glyphs.vertical.to_string(), self.border_style));
                    }
                    line.push(Segment::padding(CELL_PADDING));
                    let content = rendered[column].get(line_index).cloned().unwrap_or_default();
                    let used = line_width(&content);
                    line.extend(content);
                    line.push(Segment::padding(width.saturating_sub(used) + CELL_PADDING));
                }
                if let Some(glyphs) = glyphs {
                    line.push(Segment::new(glyphs.vertical.to_string(), self.border_style));
                }
                line
            })
            .collect()
    }

    fn layout(&self, options: &RenderOptions, max_width: usize) -> Vec<Vec<Segment>> {
        if self.headers.is_empty() {
            return Vec::new();
        }

        let widths = self.column_widths(options, max_width);
        let glyphs = self.glyphs(options);
        let table_width = widths.iter().sum::<usize>() + self.chrome_width(options);
        let mut lines: Vec<Vec<Segment>> = Vec::new();

        if let Some(title) = &self.title {
            for mut line in split_lines(title.render(options, table_width)) {
                let offset = table_width.saturating_sub(line_width(&line)) / 2;
                line.insert(0, Segment::padding(offset));
                lines.push(line);
            }
        }

        if let Some(glyphs) = glyphs {
            let top = Self::border_line(glyphs, &widths, (glyphs.top_left, glyphs.top_mid, glyphs.top_right));
            lines.push(vec![Segment::new(top, self.border_style)]);
        }

        if self.show_headers() {
            let headers: Vec<&dyn Renderable> =
                self.headers.iter().map(|header| header as &dyn Renderable).collect();
            lines.extend(self.row_lines(&headers, &widths, options));
            if let Some(glyphs) = glyphs {
                let separator =
                    Self::border_line(glyphs, &widths, (glyphs.mid_left, glyphs.mid_mid, glyphs.mid_right));
                lines.push(vec![Segment::new(separator, self.border_style)]);
            }
        }

        for row in &self.rows {
            let cells: Vec<&dyn Renderable> = row.iter().map(|cell| cell.as_ref() as &dyn Renderable).collect();
            lines.extend(self.row_lines(&cells, &widths, options));
        }

        if let Some(glyphs) = glyphs {
            let bottom = Self::border_line(
                glyphs,
                &widths,
                (glyphs.bottom_left, glyphs.bottom_mid, glyphs.bottom_right),
            );
            lines.push(vec![Segment::new(bottom, self.border_style)]);
        }

        let offset = match self.justify {
            Justify::Left => 0,
            Justify::Center => max_width.saturating_sub(table_width) / 2,
            Justify::Right => max_width.saturating_sub(table_width),
        };
        if offset > 0 {
            for line in &mut lines {
                line.insert(0, Segment::padding(offset));
            }
        }

        lines
    }
}

impl Renderable for Table {
    fn measure(&self, options: &RenderOptions, max_width: usize) -> Measurement {
        let measurements = self.column_measurements(options, max_width);
        let chrome = self.chrome_width(options);
        Measurement::new(
            measurements.iter().map(|m| m.min).sum::<usize>() + chrome,
            measurements.iter().map(|m| m.max).sum::<usize>() + chrome,
        )
    }

    fn render<'a>(&'a self, options: &RenderOptions, max_width: usize) -> Segments<'a> {
        let lines = self.layout(options, max_width);
        Box::new(lines.into_iter().flat_map(|mut line| {
            line.push(Segment::line_break());
            line
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::label::{Category, Label};
    use crate::ui::renderable::Capabilities;

    fn options(unicode: bool) -> RenderOptions {
        RenderOptions::new(Capabilities { unicode, ansi: false })
    }

    fn plain_lines(table: &Table, unicode: bool, width: usize) -> Vec<String> {
        split_lines(table.render(&options(unicode), width))
            .into_iter()
            .map(|line| line.iter().map(Segment::text).collect())
            .collect()
    }

    fn text(content: &str) -> Box<dyn Renderable> {
        Box::new(Text::plain(content))
    }

    #[test]
    fn rounded_table_with_headers() {
        let table = Table::new()
            .add_column("Id")
            .add_column("Name")
            .add_row(vec![text("1"), text("Ada")]);

        assert_eq!(
            plain_lines(&table, true, 80),
            vec![
                "╭────┬──────╮",
                "│ Id │ Name │",
                "├────┼──────┤",
                "│ 1  │ Ada  │",
                "╰────┴──────╯",
            ]
        );
    }

    #[test]
    fn rounded_degrades_to_ascii_without_unicode() {
        let table = Table::new().add_column("A").add_row(vec![text("x")]);
        assert_eq!(
            plain_lines(&table, false, 80),
            vec!["+---+", "| A |", "+---+", "| x |", "+---+"]
        );
    }

    #[test]
    fn borderless_centered_pill() {
        let table = Table::new()
            .border(TableBorder::None)
            .justify(Justify::Center)
            .add_column("")
            .add_row(vec![Box::new(Label::new("Home", Category::Info)) as Box<dyn Renderable>]);

        let lines = split_lines(table.render(&options(true), 20));
        assert_eq!(lines.len(), 1);
        // pill is 8 wide, padded cell is 10, centered in 20
        assert_eq!(lines[0][0].text(), "     ");
        assert_eq!(lines[0][2].text(), "\u{E0B6}");
        assert_eq!(line_width(&lines[0]), 15);
    }

    #[test]
    fn pills_keep_width_when_space_is_short() {
        let table = Table::new()
            .border(TableBorder::None)
            .add_column("")
            .add_column("")
            .add_row(vec![
                Box::new(Label::new("fixed", Category::Warning)) as Box<dyn Renderable>,
                text("some words to wrap"),
            ]);

        let lines = plain_lines(&table, false, 20);
        assert!(lines.len() > 1);
        assert!(lines[0].starts_with("   fixed   "));
    }

    #[test]
    fn measure_adds_chrome() {
        let table = Table::new().add_column("abc").add_row(vec![text("a b")]);
        let m = table.measure(&options(true), 80);
        assert_eq!(m, Measurement::new(3 + 2 + 2, 3 + 2 + 2));
    }

    #[test]
    fn extra_cells_are_dropped_and_missing_cells_blank() {
        let mut table = Table::new().add_column("A").add_column("B");
        table.push_row(vec![text("1"), text("2"), text("3")]);
        table.push_row(vec![text("only")]);
        let lines = plain_lines(&table, false, 80);
        assert_eq!(lines[3], "| 1    | 2 |");
        assert_eq!(lines[4], "| only |   |");
    }

    #[test]
    fn title_is_centered_over_table() {
        let table = Table::new()
            .title(Text::plain("T"))
            .add_column("abc")
            .add_row(vec![text("x")]);
        let lines = plain_lines(&table, false, 80);
        assert_eq!(lines[0], "   T");
        assert_eq!(lines[1], "+-----+");
    }

    #[test]
    fn wide_characters_keep_borders_aligned() {
        let table = Table::new()
            .add_column("Name")
            .add_row(vec![text("日本語")])
            .add_row(vec![text("abc")]);

        let lines = split_lines(table.render(&options(true), 80));
        let rendered: Vec<String> = lines
            .iter()
            .map(|line| line.iter().map(Segment::text).collect())
            .collect();
        assert_eq!(
            rendered,
            vec![
                "╭────────╮",
                "│ Name   │",
                "├────────┤",
                "│ 日本語 │",
                "│ abc    │",
                "╰────────╯",
            ]
        );
        assert!(lines.iter().all(|line| line_width(line) == 10));
    }

    #[test]
    fn multi_line_text_cell_grows_row_height() {
        let table = Table::new()
            .border(TableBorder::Ascii)
            .add_column("A")
            .add_row(vec![text("one\ntwo")]);
        assert_eq!(
            plain_lines(&table, false, 80),
            vec!["+-----+", "| A   |", "+-----+", "| one |", "| two |", "+-----+"]
        );
    }

    #[test]
    fn no_columns_renders_nothing() {
        assert_eq!(Table::new().render(&options(true), 80).count(), 0);
    }
}
