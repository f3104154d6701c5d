//! # Resultgrid - Search Results on a Display Surface
//!
//! `resultgrid` connects a query backend to a host display surface and keeps
//! a box-drawn results table up to date. Layout and drawing live in
//! [`resultgrid_render`]; this crate adds the session around them:
//!
//! - [`QueryEngine`]: the backend boundary (parse text, evaluate expressions)
//! - [`SearchCache`]: single-slot cache of the last parsed text
//! - [`Surface`]: named line buffers with a width, implemented in memory by
//!   [`MemorySurface`]
//! - [`Session`]: search, render, write back; redraw on resize
//! - [`Config`]: YAML configuration and viewport width resolution
//!
//! ## Example
//!
//! ```rust
//! use resultgrid::{Config, Diagnostic, MemorySurface, QueryEngine, Session};
//! use resultgrid::render::ResultRecord;
//!
//! struct Lines;
//!
//! impl QueryEngine for Lines {
//!     type Document = Vec<String>;
//!
//!     fn parse(&self, text: &str) -> Result<Vec<String>, Diagnostic> {
//!         Ok(text.lines().map(str::to_string).collect())
//!     }
//!
//!     fn evaluate(&self, doc: &Vec<String>, query: &str) -> Result<Vec<ResultRecord>, Diagnostic> {
//!         Ok(doc
//!             .iter()
//!             .enumerate()
//!             .filter(|(_, l)| l.contains(query))
//!             .map(|(i, l)| ResultRecord::element(i as u32 + 1, "line", l.as_str()))
//!             .collect())
//!     }
//! }
//!
//! let surface = MemorySurface::new()
//!     .with_buffer("notes.txt", 80, "alpha\nbeta\nalphabet")
//!     .with_buffer("results", 40, "");
//!
//! let mut session = Session::new(Lines, surface, Config::default());
//! session.search("notes.txt", "alpha").unwrap();
//!
//! let lines = session.surface().lines("results").unwrap();
//! assert!(lines[1].contains("Results: alpha"));
//! assert_eq!(lines.len(), 8);
//! ```

pub mod config;
mod engine;
mod error;
mod session;
mod surface;

pub use config::Config;
pub use engine::{Diagnostic, Evaluation, QueryEngine, SearchCache};
pub use error::{Error, Result};
pub use session::{PreviousSearch, Session};
pub use surface::{Buffer, MemorySurface, Surface};

/// Re-export of the layout and rendering crate.
pub use resultgrid_render as render;

/// Renders an evaluation outcome with the presentation settings of `config`.
pub fn render_evaluation(
    config: &Config,
    width: usize,
    query: &str,
    evaluation: Evaluation,
) -> Vec<String> {
    render::ResultsView::with_options(
        width,
        query,
        evaluation.into_records(),
        &config.view_options(),
    )
    .lines()
}
