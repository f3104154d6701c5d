//! Column schema types.
//!
//! A [`Column`] is an immutable description: which record field it shows,
//! its title, and how it competes for space. Computed widths live in
//! [`Layout`](super::Layout), never on the column itself.

use super::util::display_width;
use crate::record::Field;

/// One column of a results table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Column {
    /// Record field this column reads.
    pub field: Field,
    /// Label shown in the header row.
    pub title: String,
    /// Contractible columns may be narrower than their content. Pinned
    /// (non-contractible) columns are always at least as wide as their
    /// widest cell.
    pub contractible: bool,
    /// Share of the table width, in percent, this column keeps growing
    /// towards while free space remains.
    pub expand_target_pct: u8,
}

impl Column {
    /// Creates a contractible column with no expansion target.
    pub fn new(field: Field, title: impl Into<String>) -> Self {
        Column {
            field,
            title: title.into(),
            contractible: true,
            expand_target_pct: 0,
        }
    }

    /// Creates a column that is sized to fit its content and never shrinks.
    pub fn pinned(field: Field, title: impl Into<String>) -> Self {
        Column {
            contractible: false,
            ..Column::new(field, title)
        }
    }

    /// Sets the expansion target, capped at 100%.
    pub fn expand_to(mut self, pct: u8) -> Self {
        self.expand_target_pct = pct.min(100);
        self
    }

    /// Display width of the title.
    pub fn title_width(&self) -> usize {
        display_width(&self.title)
    }

    /// Whether a column at `width` is below its share of `total_width`.
    pub(crate) fn below_target(&self, width: usize, total_width: usize) -> bool {
        width * 100 < usize::from(self.expand_target_pct) * total_width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_column_is_contractible() {
        let col = Column::new(Field::Tag, "Tag");
        assert!(col.contractible);
        assert_eq!(col.expand_target_pct, 0);
        assert_eq!(col.title_width(), 3);
    }

    #[test]
    fn pinned_column_is_not_contractible() {
        let col = Column::pinned(Field::Line, "Line").expand_to(5);
        assert!(!col.contractible);
        assert_eq!(col.expand_target_pct, 5);
        assert_eq!(col.field, Field::Line);
    }

    #[test]
    fn expand_target_is_capped() {
        let col = Column::new(Field::Result, "").expand_to(250);
        assert_eq!(col.expand_target_pct, 100);
    }

    #[test]
    fn below_target_compares_percentages() {
        let col = Column::new(Field::Tag, "Tag").expand_to(25);
        // 25% of 46 is 11.5
        assert!(col.below_target(11, 46));
        assert!(!col.below_target(12, 46));
    }

    #[test]
    fn zero_total_is_never_below_target() {
        let col = Column::new(Field::Result, "").expand_to(100);
        assert!(!col.below_target(0, 0));
    }
}
