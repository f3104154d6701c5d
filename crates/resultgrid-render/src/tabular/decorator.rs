//! Box-drawn rendering of a resolved table.
//!
//! The [`Renderer`] turns a [`Table`] and its [`Layout`] into the lines of a
//! bordered grid:
//!
//! ```text
//! ┏━━━━━━━━━━━━━━━━━━━━━━━━┓
//! ┃Results: //item         ┃
//! ┣━━━━┳━━━┳━━━━━━━━━━━━━━━┫
//! ┃Line┃Tag┃Result         ┃
//! ┣━━━━╋━━━╋━━━━━━━━━━━━━━━┫
//! ┃3   ┃a  ┃first          ┃
//! ┗━━━━┻━━━┻━━━━━━━━━━━━━━━┛
//! ```
//!
//! Every line is exactly the viewport width. Border junctions are derived
//! from the visible columns on each call.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::resolve::{Layout, Table};
use super::util::{display_width, fit, fit_line};

/// Border style for table decoration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    /// ASCII borders: +, -, |
    Ascii,
    /// Light Unicode box-drawing characters: ┌, ─, ┐, │, └, ┘, ├, ┼, ┤, ┬, ┴
    Light,
    /// Heavy Unicode box-drawing characters: ┏, ━, ┓, ┃, ┗, ┛, ┣, ╋, ┫, ┳, ┻
    #[default]
    Heavy,
    /// Double-line Unicode box-drawing: ╔, ═, ╗, ║, ╚, ╝, ╠, ╬, ╣, ╦, ╩
    Double,
    /// Rounded corners with light lines: ╭, ─, ╮, │, ╰, ╯, ├, ┼, ┤, ┬, ┴
    Rounded,
}

impl BorderStyle {
    fn chars(&self) -> BorderChars {
        match self {
            BorderStyle::Ascii => BorderChars {
                horizontal: '-',
                vertical: '|',
                top_left: '+',
                top_right: '+',
                bottom_left: '+',
                bottom_right: '+',
                left_t: '+',
                cross: '+',
                right_t: '+',
                top_t: '+',
                bottom_t: '+',
            },
            BorderStyle::Light => BorderChars {
                horizontal: '─',
                vertical: '│',
                top_left: '┌',
                top_right: '┐',
                bottom_left: '└',
                bottom_right: '┘',
                left_t: '├',
                cross: '┼',
                right_t: '┤',
                top_t: '┬',
                bottom_t: '┴',
            },
            BorderStyle::Heavy => BorderChars {
                horizontal: '━',
                vertical: '┃',
                top_left: '┏',
                top_right: '┓',
                bottom_left: '┗',
                bottom_right: '┛',
                left_t: '┣',
                cross: '╋',
                right_t: '┫',
                top_t: '┳',
                bottom_t: '┻',
            },
            BorderStyle::Double => BorderChars {
                horizontal: '═',
                vertical: '║',
                top_left: '╔',
                top_right: '╗',
                bottom_left: '╚',
                bottom_right: '╝',
                left_t: '╠',
                cross: '╬',
                right_t: '╣',
                top_t: '╦',
                bottom_t: '╩',
            },
            BorderStyle::Rounded => BorderChars {
                horizontal: '─',
                vertical: '│',
                top_left: '╭',
                top_right: '╮',
                bottom_left: '╰',
                bottom_right: '╯',
                left_t: '├',
                cross: '┼',
                right_t: '┤',
                top_t: '┬',
                bottom_t: '┴',
            },
        }
    }
}

/// Box-drawing characters for a border style.
#[derive(Clone, Copy, Debug)]
struct BorderChars {
    horizontal: char,
    vertical: char,
    top_left: char,
    top_right: char,
    bottom_left: char,
    bottom_right: char,
    left_t: char,
    cross: char,
    right_t: char,
    top_t: char,
    bottom_t: char,
}

/// Type of horizontal rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LineType {
    /// Opens the column grid below the caption.
    Open,
    /// Separates the header from the body.
    Middle,
    Bottom,
}

/// A visible column as it will be drawn.
#[derive(Clone, Debug, PartialEq, Eq)]
struct DrawnColumn<'a> {
    index: usize,
    title: &'a str,
    width: usize,
}

/// Draws a table into fixed-width lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Renderer {
    width: usize,
    border: BorderStyle,
}

impl Renderer {
    /// Creates a renderer for a viewport `width` display columns wide.
    pub fn new(width: usize) -> Self {
        Renderer {
            width,
            border: BorderStyle::default(),
        }
    }

    /// Set the border style.
    pub fn border(mut self, border: BorderStyle) -> Self {
        self.border = border;
        self
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Renders the caption, header, one line per row and the footer.
    pub fn render(&self, table: &Table, layout: &Layout, caption: &str) -> Vec<String> {
        let chars = self.border.chars();
        let columns = self.fit_columns(table, layout);
        let inner = self.width.saturating_sub(2);

        let mut lines = Vec::with_capacity(table.rows().len() + 6);
        lines.push(edge(
            chars.top_left,
            &horizontal(chars.horizontal, inner),
            chars.top_right,
        ));
        lines.push(edge(chars.vertical, &fit(caption, inner), chars.vertical));
        lines.push(self.rule(&columns, LineType::Open, &chars));
        lines.push(self.cells_line(
            columns.iter().map(|c| (Some(c.title), c.width)),
            inner,
            &chars,
        ));
        lines.push(self.rule(&columns, LineType::Middle, &chars));

        for row in table.rows() {
            lines.push(self.cells_line(
                columns.iter().map(|c| (row.cell(c.index), c.width)),
                inner,
                &chars,
            ));
        }

        lines.push(self.rule(&columns, LineType::Bottom, &chars));

        lines
            .into_iter()
            .map(|line| {
                if display_width(&line) == self.width {
                    line
                } else {
                    fit_line(&line, self.width)
                }
            })
            .collect()
    }

    /// Visible columns with their widths adjusted so borders plus cells span
    /// the viewport exactly.
    ///
    /// Surplus space goes to the last visible column. When the columns are
    /// too wide, they are narrowed from the right.
    fn fit_columns<'a>(&self, table: &'a Table, layout: &Layout) -> Vec<DrawnColumn<'a>> {
        let mut columns: Vec<DrawnColumn<'a>> = layout
            .visible_indices()
            .into_iter()
            .filter_map(|index| {
                table.columns().get(index).map(|column| DrawnColumn {
                    index,
                    title: column.title.as_str(),
                    width: layout.width(index),
                })
            })
            .collect();

        if columns.is_empty() {
            return columns;
        }

        let target = self.width.saturating_sub(columns.len() + 1);
        let used: usize = columns.iter().map(|c| c.width).sum();

        if used < target {
            if let Some(last) = columns.last_mut() {
                last.width += target - used;
            }
        } else if used > target {
            warn!(
                used,
                target,
                viewport = self.width,
                "columns narrowed to fit the viewport"
            );
            let mut excess = used - target;
            for column in columns.iter_mut().rev() {
                let take = excess.min(column.width);
                column.width -= take;
                excess -= take;
                if excess == 0 {
                    break;
                }
            }
        }

        columns
    }

    /// Horizontal rule with junctions at the column boundaries.
    fn rule(&self, columns: &[DrawnColumn<'_>], line_type: LineType, chars: &BorderChars) -> String {
        let (left, joint, right) = match line_type {
            LineType::Open => (chars.left_t, chars.top_t, chars.right_t),
            LineType::Middle => (chars.left_t, chars.cross, chars.right_t),
            LineType::Bottom => (chars.bottom_left, chars.bottom_t, chars.bottom_right),
        };

        if columns.is_empty() {
            return edge(left, &horizontal(chars.horizontal, self.width.saturating_sub(2)), right);
        }

        let body = columns
            .iter()
            .map(|c| horizontal(chars.horizontal, c.width))
            .collect::<Vec<_>>()
            .join(&joint.to_string());
        edge(left, &body, right)
    }

    /// One line of cells separated by vertical bars. Absent cells render
    /// blank.
    fn cells_line<'c, I>(&self, cells: I, inner: usize, chars: &BorderChars) -> String
    where
        I: ExactSizeIterator<Item = (Option<&'c str>, usize)>,
    {
        if cells.len() == 0 {
            return edge(chars.vertical, &" ".repeat(inner), chars.vertical);
        }

        let body = cells
            .map(|(content, width)| fit(content.unwrap_or(""), width))
            .collect::<Vec<_>>()
            .join(&chars.vertical.to_string());
        edge(chars.vertical, &body, chars.vertical)
    }
}

fn horizontal(c: char, width: usize) -> String {
    std::iter::repeat_n(c, width).collect()
}

fn edge(left: char, body: &str, right: char) -> String {
    format!("{}{}{}", left, body, right)
}
