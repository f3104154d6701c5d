//! Width-aware text helpers used by the layout and the renderer.
//!
//! All measurements are in terminal display columns, so CJK and other wide
//! glyphs count as 2 and combining marks count as 0.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Marker appended to cell content that had to be cut.
pub const ELLIPSIS: &str = "...";

/// Returns the display width of a string in terminal columns.
///
/// # Example
///
/// ```rust
/// use resultgrid_render::tabular::display_width;
///
/// assert_eq!(display_width("hello"), 5);
/// assert_eq!(display_width("日本"), 4);
/// ```
pub fn display_width(s: &str) -> usize {
    s.width()
}

/// Pads a string with trailing spaces up to `width` display columns.
///
/// Strings already at or beyond `width` are returned unchanged.
pub fn pad_right(s: &str, width: usize) -> String {
    let current = display_width(s);
    if current >= width {
        return s.to_string();
    }
    let mut out = String::with_capacity(s.len() + (width - current));
    out.push_str(s);
    out.extend(std::iter::repeat_n(' ', width - current));
    out
}

/// Keeps the longest prefix of `s` whose display width is at most `width`.
///
/// No marker is added. A wide glyph that would straddle the limit is dropped,
/// so the result may be one column narrower than `width`.
pub fn clip(s: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out
}

/// Truncates `s` to at most `width` display columns, ending in `marker`.
///
/// If `s` already fits it is returned unchanged. When the column is narrower
/// than the marker itself, the marker is clipped instead.
///
/// # Example
///
/// ```rust
/// use resultgrid_render::tabular::truncate_end;
///
/// assert_eq!(truncate_end("Hello World", 8, "..."), "Hello...");
/// assert_eq!(truncate_end("Hello", 8, "..."), "Hello");
/// assert_eq!(truncate_end("Hello World", 2, "..."), "..");
/// ```
pub fn truncate_end(s: &str, width: usize, marker: &str) -> String {
    if display_width(s) <= width {
        return s.to_string();
    }
    let marker_width = display_width(marker);
    if width <= marker_width {
        return clip(marker, width);
    }
    let mut out = clip(s, width - marker_width);
    out.push_str(marker);
    out
}

/// Replaces every control character (newlines, tabs, carriage returns) with
/// a space, so the text occupies a single line of predictable width.
///
/// ```rust
/// use resultgrid_render::tabular::flatten;
///
/// assert_eq!(flatten("<a>\n\thello\r\n</a>"), "<a>  hello  </a>");
/// ```
pub fn flatten(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}

/// Fits `s` into exactly `width` display columns.
///
/// Control characters become spaces first. Overlong content is cut with
/// [`ELLIPSIS`]; short content is padded. A zero width yields an empty
/// string.
pub fn fit(s: &str, width: usize) -> String {
    pad_right(&truncate_end(&flatten(s), width, ELLIPSIS), width)
}

/// Clips or pads a whole line to exactly `width` display columns, without a
/// marker.
pub(crate) fn fit_line(s: &str, width: usize) -> String {
    pad_right(&clip(s, width), width)
}
