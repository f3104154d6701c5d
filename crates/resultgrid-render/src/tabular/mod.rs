//! Width-adaptive, box-drawn tables.
//!
//! The pieces, leaf first:
//!
//! - [`Column`]: immutable schema entry (field, title, sizing policy)
//! - [`Row`]: a record projected onto the columns, one optional cell each
//! - [`Table`]: columns plus rows; [`Table::build`] resolves a [`Layout`]
//! - [`Renderer`]: draws a table and its layout into fixed-width lines
//!
//! ## Sizing Policy
//!
//! - Pinned columns ([`Column::pinned`]) are never narrower than their widest
//!   cell or their title
//! - Contractible columns ([`Column::new`]) reserve their title width and
//!   grow from there
//! - [`Column::expand_to`] sets the share of the table a column keeps growing
//!   towards while free space remains
//!
//! ## Truncation
//!
//! Cells wider than their column keep their first `width - 3` columns and end
//! in `...`:
//!
//! ```rust
//! use resultgrid_render::tabular::{display_width, fit};
//!
//! let cell = fit("a rather long value", 10);
//! assert_eq!(cell, "a rathe...");
//! assert_eq!(display_width(&fit("short", 10)), 10);
//! ```

mod decorator;
mod resolve;
mod row;
mod types;
mod util;

pub use decorator::{BorderStyle, Renderer};
pub use resolve::{ColumnLayout, Layout, Table};
pub use row::Row;
pub use types::Column;
pub use util::{clip, display_width, fit, flatten, pad_right, truncate_end, ELLIPSIS};
