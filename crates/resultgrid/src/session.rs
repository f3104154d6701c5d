//! A search session bound to a display surface.

use resultgrid_render::ResultsView;
use tracing::{debug, info};

use crate::config::Config;
use crate::engine::{QueryEngine, SearchCache};
use crate::error::{Error, Result};
use crate::surface::Surface;

/// The last search that was written to the results surface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreviousSearch {
    pub source: String,
    pub query: String,
}

/// Runs searches against one surface and writes the rendered tables back.
///
/// The session remembers the last successful search so it can redraw the
/// results when the results window changes width.
pub struct Session<E: QueryEngine, S: Surface> {
    cache: SearchCache<E>,
    surface: S,
    config: Config,
    previous: Option<PreviousSearch>,
}

impl<E: QueryEngine, S: Surface> Session<E, S> {
    pub fn new(engine: E, surface: S, config: Config) -> Self {
        Session {
            cache: SearchCache::new(engine),
            surface,
            config,
            previous: None,
        }
    }

    /// Evaluates `query` against the text of the `source` surface and
    /// replaces the results surface with the rendered table.
    pub fn search(&mut self, source: &str, query: &str) -> Result<()> {
        let text = self
            .surface
            .read(source)
            .ok_or_else(|| Error::UnknownSurface(source.to_string()))?;

        let records = self.cache.search(&text, query);
        debug!(source, query, records = records.len(), "search finished");

        let target = &self.config.results_surface;
        let width = self
            .surface
            .width(target)
            .ok_or_else(|| Error::UnknownSurface(target.clone()))?;
        let view = ResultsView::with_options(width, query, records, &self.config.view_options());
        let lines = view.lines();
        info!(
            schema = ?view.schema(),
            width,
            lines = lines.len(),
            "writing results"
        );
        self.surface.replace_lines(target, lines)?;

        self.previous = Some(PreviousSearch {
            source: source.to_string(),
            query: query.to_string(),
        });
        Ok(())
    }

    /// Redraws the previous search, if any, at the current width.
    ///
    /// Returns whether anything was redrawn.
    pub fn window_resized(&mut self) -> Result<bool> {
        let Some(previous) = self.previous.clone() else {
            return Ok(false);
        };
        self.search(&previous.source, &previous.query)?;
        Ok(true)
    }

    pub fn previous(&self) -> Option<&PreviousSearch> {
        self.previous.as_ref()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn cache(&self) -> &SearchCache<E> {
        &self.cache
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }
}
