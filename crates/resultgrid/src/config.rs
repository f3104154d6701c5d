//! Session configuration.
//!
//! Configuration is read from YAML; every key is optional:
//!
//! ```yaml
//! results_surface: results
//! caption_prefix: "Results: "
//! border: heavy
//! fallback_width: 80
//! ```
//!
//! The viewport width is resolved separately by [`Config::resolve_width`]:
//! explicit request, then `RESULTGRID_WIDTH`, then the terminal width, then
//! `fallback_width`.

use std::path::Path;

use resultgrid_render::tabular::BorderStyle;
use resultgrid_render::{ViewOptions, DEFAULT_CAPTION_PREFIX};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{Error, Result};

/// Environment variable overriding the viewport width.
pub const WIDTH_ENV: &str = "RESULTGRID_WIDTH";

/// Default name of the surface results are written to.
pub const DEFAULT_RESULTS_SURFACE: &str = "results";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Surface that receives the rendered table.
    pub results_surface: String,
    /// Text placed before the query in the caption line.
    pub caption_prefix: String,
    pub border: BorderStyle,
    /// Width used when nothing else determines one.
    pub fallback_width: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            results_surface: DEFAULT_RESULTS_SURFACE.to_string(),
            caption_prefix: DEFAULT_CAPTION_PREFIX.to_string(),
            border: BorderStyle::default(),
            fallback_width: 80,
        }
    }
}

impl Config {
    /// Parses a YAML document. An empty document yields the defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Config::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Reads a YAML configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|e| Error::read(path, e))?;
        Self::from_yaml(&yaml)
    }

    pub fn view_options(&self) -> ViewOptions {
        ViewOptions {
            caption_prefix: self.caption_prefix.clone(),
            border: self.border,
        }
    }

    /// Picks the viewport width: `requested`, then the environment, then the
    /// terminal, then `fallback_width`.
    pub fn resolve_width(&self, requested: Option<usize>) -> usize {
        requested
            .or_else(width_from_env)
            .or_else(terminal_width)
            .unwrap_or(self.fallback_width)
    }
}

/// Reads [`WIDTH_ENV`]. Unparseable values are ignored with a warning.
pub fn width_from_env() -> Option<usize> {
    let raw = std::env::var(WIDTH_ENV).ok()?;
    match raw.trim().parse() {
        Ok(width) => Some(width),
        Err(_) => {
            warn!(value = %raw, "ignoring invalid {}", WIDTH_ENV);
            None
        }
    }
}

/// Gets the current terminal width, or None if not available.
pub(crate) fn terminal_width() -> Option<usize> {
    terminal_size::terminal_size().map(|(w, _)| w.0 as usize)
}
