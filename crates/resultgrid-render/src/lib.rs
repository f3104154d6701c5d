//! # Resultgrid Render - Adaptive Result Tables
//!
//! `resultgrid-render` lays out query results in a box-drawn table that fits a
//! fixed-width viewport exactly. It decides which columns to show, how wide
//! each one is, and how overlong cells are cut.
//!
//! ## Core Concepts
//!
//! - [`ResultRecord`]: one match from the query backend (element, attribute,
//!   text node, scalar, parse error or the empty-result marker)
//! - [`Schema`]: the column set chosen from the shape of the results
//! - [`tabular::Table`]: columns and rows; resolves an immutable
//!   [`tabular::Layout`]
//! - [`tabular::Renderer`]: draws the bordered grid
//! - [`ResultsView`]: all of the above in one step
//!
//! ## Quick Start
//!
//! ```rust
//! use resultgrid_render::{render_results, ResultRecord};
//!
//! let records = vec![
//!     ResultRecord::element(3, "item", "first"),
//!     ResultRecord::attribute(7, "item", "id", "42"),
//! ];
//!
//! let lines = render_results(48, "//item", records);
//! assert!(lines[1].contains("Results: //item"));
//! assert!(lines[3].contains("Line"));
//! assert!(lines.iter().all(|l| l.chars().count() == 48));
//! ```
//!
//! ## Degenerate Input
//!
//! Nothing here returns an error. A parse failure becomes a one-row error
//! table, an empty result list becomes a "No results found." row, and a
//! viewport too narrow for the pinned columns yields narrowed, truncated
//! cells rather than a panic.

mod classify;
mod record;
pub mod tabular;

pub use classify::{
    classify, render_results, ResultsView, Schema, ViewOptions, DEFAULT_CAPTION_PREFIX,
};
pub use record::{Attribute, Field, RecordKind, ResultRecord, NO_RESULTS_MESSAGE};
