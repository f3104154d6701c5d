//! Records projected onto a column set.

use super::types::Column;
use super::util::flatten;
use crate::record::ResultRecord;

/// A record projected onto a table's columns.
///
/// Holds one cell per column, in column order. A `None` cell means the record
/// has no such field; it is rendered blank and does not make the column
/// visible.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Row {
    cells: Vec<Option<String>>,
}

impl Row {
    /// Projects `record` onto `columns`. Fields the record has but no column
    /// asks for are ignored. Cell text is flattened onto one line.
    pub fn project(columns: &[Column], record: &ResultRecord) -> Self {
        Row {
            cells: columns
                .iter()
                .map(|c| record.field(c.field).map(|v| flatten(&v)))
                .collect(),
        }
    }

    #[cfg(test)]
    pub(crate) fn from_cells(cells: Vec<Option<String>>) -> Self {
        Row { cells }
    }

    /// Cell for the column at `index`, if populated.
    pub fn cell(&self, index: usize) -> Option<&str> {
        self.cells.get(index).and_then(|c| c.as_deref())
    }

    /// Number of populated cells.
    pub fn populated(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// True if no cell is populated.
    pub fn is_empty(&self) -> bool {
        self.populated() == 0
    }
}
