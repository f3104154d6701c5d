//! Width resolution algorithm for result tables.
//!
//! [`Table::build`] runs three passes over the rows: measure the widest cell
//! of every column, mark columns that received at least one cell as visible,
//! then allocate widths. Pinned columns take their natural width first, every
//! visible column reserves room for its title, and the remaining free space is
//! handed out one column at a time, round-robin in declaration order, to the
//! columns that still want more.
//!
//! A column wants more space while it is narrower than its widest cell or
//! below its `expand_target_pct` share of the table. The second condition
//! alone can push a column past its content width; that is how the last
//! column ends up filling the viewport.

use tracing::{debug, warn};

use super::row::Row;
use super::types::Column;
use super::util::display_width;
use crate::record::ResultRecord;

/// Computed geometry of one column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ColumnLayout {
    /// At least one row populated this column.
    pub visible: bool,
    /// Display width of the widest cell.
    pub max_data_width: usize,
    /// Allocated width in display columns. Zero for hidden columns.
    pub width: usize,
}

/// Resolved widths for all columns of a table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layout {
    columns: Vec<ColumnLayout>,
    total_width: usize,
    distributed: usize,
}

impl Layout {
    /// Geometry of the column at `index`.
    pub fn column(&self, index: usize) -> Option<&ColumnLayout> {
        self.columns.get(index)
    }

    pub fn columns(&self) -> &[ColumnLayout] {
        &self.columns
    }

    /// Width of the column at `index`; zero for hidden or unknown columns.
    pub fn width(&self, index: usize) -> usize {
        self.columns.get(index).map_or(0, |c| c.width)
    }

    /// Widths of all columns in declaration order.
    pub fn widths(&self) -> Vec<usize> {
        self.columns.iter().map(|c| c.width).collect()
    }

    /// Indices of the visible columns in declaration order.
    pub fn visible_indices(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .filter(|(_, c)| c.visible)
            .map(|(i, _)| i)
            .collect()
    }

    /// Sum of the visible column widths.
    pub fn total(&self) -> usize {
        self.columns
            .iter()
            .filter(|c| c.visible)
            .map(|c| c.width)
            .sum()
    }

    /// The content width the layout was computed for.
    pub fn total_width(&self) -> usize {
        self.total_width
    }

    /// Units of free space handed out by the round-robin pass.
    pub fn distributed(&self) -> usize {
        self.distributed
    }
}

/// Columns and rows of one results table.
///
/// # Example
///
/// ```rust
/// use resultgrid_render::tabular::{Column, Table};
/// use resultgrid_render::{Field, ResultRecord};
///
/// let mut table = Table::new(
///     20,
///     vec![
///         Column::pinned(Field::Line, "Line"),
///         Column::new(Field::Result, "Result").expand_to(100),
///     ],
/// );
/// table.add_records(&[ResultRecord::element(12, "a", "hello")]);
///
/// let layout = table.build();
/// assert_eq!(layout.widths(), vec![4, 16]);
/// ```
#[derive(Clone, Debug)]
pub struct Table {
    total_width: usize,
    columns: Vec<Column>,
    rows: Vec<Row>,
}

impl Table {
    /// Creates an empty table. `total_width` is the content width, i.e. the
    /// viewport width minus borders and column delimiters.
    pub fn new(total_width: usize, columns: Vec<Column>) -> Self {
        Table {
            total_width,
            columns,
            rows: Vec::new(),
        }
    }

    /// Projects each record onto the columns and appends the resulting rows.
    pub fn add_records<'a, I>(&mut self, records: I)
    where
        I: IntoIterator<Item = &'a ResultRecord>,
    {
        for record in records {
            let row = Row::project(&self.columns, record);
            self.add_row(row);
        }
    }

    /// Appends a row. Rows without any populated cell are dropped.
    pub fn add_row(&mut self, row: Row) {
        if !row.is_empty() {
            self.rows.push(row);
        }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn total_width(&self) -> usize {
        self.total_width
    }

    /// Computes column visibility and widths.
    ///
    /// Building never mutates the table, so repeated calls return identical
    /// layouts.
    pub fn build(&self) -> Layout {
        let mut columns = self.measure();
        let reserved = self.reserve(&mut columns);

        if reserved > self.total_width {
            warn!(
                reserved,
                total_width = self.total_width,
                "pinned columns exceed the available width"
            );
        }

        let free = self.total_width.saturating_sub(reserved);
        let distributed = self.distribute(&mut columns, free);

        let layout = Layout {
            columns,
            total_width: self.total_width,
            distributed,
        };
        debug!(
            widths = ?layout.widths(),
            total_width = self.total_width,
            distributed,
            rows = self.rows.len(),
            "resolved column widths"
        );
        layout
    }

    /// Measures the widest cell of each column and infers visibility.
    fn measure(&self) -> Vec<ColumnLayout> {
        (0..self.columns.len())
            .map(|i| {
                let mut layout = ColumnLayout::default();
                for cell in self.rows.iter().filter_map(|r| r.cell(i)) {
                    layout.visible = true;
                    layout.max_data_width = layout.max_data_width.max(display_width(cell));
                }
                layout
            })
            .collect()
    }

    /// Gives pinned columns their natural width and every other visible
    /// column room for its title. Returns the space used.
    fn reserve(&self, layouts: &mut [ColumnLayout]) -> usize {
        let mut used = 0;
        for (column, layout) in self.columns.iter().zip(layouts.iter_mut()) {
            if !layout.visible {
                continue;
            }
            layout.width = if column.contractible {
                column.title_width()
            } else {
                layout.max_data_width.max(column.title_width())
            };
            used += layout.width;
        }
        used
    }

    /// Hands out `free` one unit per column per pass. Stops when the space
    /// runs out or a full pass finds no taker.
    fn distribute(&self, layouts: &mut [ColumnLayout], mut free: usize) -> usize {
        let mut distributed = 0;
        while free > 0 {
            let mut assigned = false;
            for (column, layout) in self.columns.iter().zip(layouts.iter_mut()) {
                if free == 0 {
                    break;
                }
                if self.wants_more_space(column, layout) {
                    layout.width += 1;
                    free -= 1;
                    distributed += 1;
                    assigned = true;
                }
            }
            if !assigned {
                break;
            }
        }
        distributed
    }

    fn wants_more_space(&self, column: &Column, layout: &ColumnLayout) -> bool {
        layout.visible
            && (layout.width < layout.max_data_width
                || column.below_target(layout.width, self.total_width))
    }
}
