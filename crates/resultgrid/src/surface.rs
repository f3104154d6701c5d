//! Display surfaces: named line buffers with a known width.
//!
//! A host (an editor, a terminal pane) implements [`Surface`] to let a
//! [`Session`](crate::Session) read the searched text and write the rendered
//! table back. [`MemorySurface`] keeps everything in memory.

use crate::error::{Error, Result};

/// A host that exposes named, line-oriented buffers.
pub trait Surface {
    /// Width in display columns of the window showing `name`.
    fn width(&self, name: &str) -> Option<usize>;

    /// Full text of `name`, lines joined with `\n`.
    fn read(&self, name: &str) -> Option<String>;

    /// Replaces every line of `name`.
    fn replace_lines(&mut self, name: &str, lines: Vec<String>) -> Result<()>;
}

/// One named buffer of a [`MemorySurface`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Buffer {
    pub name: String,
    pub width: usize,
    pub lines: Vec<String>,
}

/// In-memory [`Surface`].
///
/// Names resolve by exact match first, then by suffix, since hosts often
/// report buffers by full path.
///
/// ```rust
/// use resultgrid::{MemorySurface, Surface};
///
/// let surface = MemorySurface::new().with_buffer("/tmp/doc.xml", 80, "<a/>");
/// assert_eq!(surface.read("doc.xml").as_deref(), Some("<a/>"));
/// assert_eq!(surface.width("doc.xml"), Some(80));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemorySurface {
    buffers: Vec<Buffer>,
}

impl MemorySurface {
    pub fn new() -> Self {
        MemorySurface::default()
    }

    /// Adds a buffer holding `text`, displayed `width` columns wide.
    pub fn with_buffer(mut self, name: impl Into<String>, width: usize, text: &str) -> Self {
        self.add_buffer(name, width, text);
        self
    }

    /// Adds a buffer, replacing any buffer with the same name.
    pub fn add_buffer(&mut self, name: impl Into<String>, width: usize, text: &str) {
        let name = name.into();
        self.buffers.retain(|b| b.name != name);
        self.buffers.push(Buffer {
            name,
            width,
            lines: text.lines().map(str::to_string).collect(),
        });
    }

    pub fn buffer(&self, name: &str) -> Option<&Buffer> {
        self.position(name).map(|i| &self.buffers[i])
    }

    pub fn lines(&self, name: &str) -> Option<&[String]> {
        self.buffer(name).map(|b| b.lines.as_slice())
    }

    /// Changes the display width of `name`.
    pub fn resize(&mut self, name: &str, width: usize) -> Result<()> {
        let index = self
            .position(name)
            .ok_or_else(|| Error::UnknownSurface(name.to_string()))?;
        self.buffers[index].width = width;
        Ok(())
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.buffers
            .iter()
            .position(|b| b.name == name)
            .or_else(|| self.buffers.iter().position(|b| b.name.ends_with(name)))
    }
}

impl Surface for MemorySurface {
    fn width(&self, name: &str) -> Option<usize> {
        self.buffer(name).map(|b| b.width)
    }

    fn read(&self, name: &str) -> Option<String> {
        self.buffer(name).map(|b| b.lines.join("\n"))
    }

    fn replace_lines(&mut self, name: &str, lines: Vec<String>) -> Result<()> {
        let index = self
            .position(name)
            .ok_or_else(|| Error::UnknownSurface(name.to_string()))?;
        self.buffers[index].lines = lines;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_joined_lines() {
        let surface = MemorySurface::new().with_buffer("doc", 40, "<a>\n  <b/>\n</a>");
        assert_eq!(surface.read("doc").as_deref(), Some("<a>\n  <b/>\n</a>"));
        assert_eq!(surface.lines("doc").map(|l| l.len()), Some(3));
    }

    #[test]
    fn exact_name_beats_suffix() {
        let surface = MemorySurface::new()
            .with_buffer("/work/results", 30, "long")
            .with_buffer("results", 50, "short");
        assert_eq!(surface.width("results"), Some(50));
        assert_eq!(surface.width("work/results"), Some(30));
    }

    #[test]
    fn unknown_surface() {
        let mut surface = MemorySurface::new();
        assert_eq!(surface.read("missing"), None);
        assert!(matches!(
            surface.replace_lines("missing", vec![]),
            Err(Error::UnknownSurface(name)) if name == "missing"
        ));
        assert!(surface.resize("missing", 10).is_err());
    }

    #[test]
    fn replace_lines_overwrites() {
        let mut surface = MemorySurface::new().with_buffer("out", 20, "old\nlines");
        surface
            .replace_lines("out", vec!["new".to_string()])
            .unwrap();
        assert_eq!(surface.lines("out"), Some(&["new".to_string()][..]));
    }

    #[test]
    fn add_buffer_replaces_same_name() {
        let mut surface = MemorySurface::new().with_buffer("out", 20, "a");
        surface.add_buffer("out", 30, "b");
        assert_eq!(surface.width("out"), Some(30));
        assert_eq!(surface.read("out").as_deref(), Some("b"));
    }

    #[test]
    fn resize_changes_width() {
        let mut surface = MemorySurface::new().with_buffer("out", 20, "");
        surface.resize("out", 64).unwrap();
        assert_eq!(surface.width("out"), Some(64));
    }
}
