//! Schema selection and the end-to-end results view.
//!
//! The shape of the result list alone decides the columns: a failed parse
//! shows a single error column, an empty list shows a placeholder row, and
//! anything else uses the line/tag/result grid. The renderer never needs to
//! know which case it is drawing.

use tracing::debug;

use crate::record::{Field, ResultRecord};
use crate::tabular::{BorderStyle, Column, Layout, Renderer, Table};

/// Default text placed before the query in the caption line.
pub const DEFAULT_CAPTION_PREFIX: &str = "Results: ";

/// The column set used to display a result list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Schema {
    /// A single error column filling the table.
    Error,
    /// A single result column holding the "no results" placeholder.
    Empty,
    /// Line, tag and result columns.
    Matches,
}

impl Schema {
    /// Picks the schema for `records`. Errors win over everything else.
    pub fn detect(records: &[ResultRecord]) -> Self {
        if records.iter().any(ResultRecord::is_error) {
            Schema::Error
        } else if records.is_empty() {
            Schema::Empty
        } else {
            Schema::Matches
        }
    }

    pub fn columns(&self) -> Vec<Column> {
        match self {
            Schema::Error => vec![Column::pinned(Field::Error, "Parse Error").expand_to(100)],
            Schema::Empty => vec![Column::new(Field::Result, "").expand_to(100)],
            Schema::Matches => vec![
                Column::pinned(Field::Line, "Line").expand_to(5),
                Column::new(Field::Tag, "Tag").expand_to(25),
                Column::new(Field::Result, "Result").expand_to(70),
            ],
        }
    }
}

/// Picks the schema and substitutes the records it displays: the first
/// error for [`Schema::Error`], the placeholder for [`Schema::Empty`].
pub fn classify(records: Vec<ResultRecord>) -> (Schema, Vec<ResultRecord>) {
    let schema = Schema::detect(&records);
    let records = match schema {
        Schema::Error => records.into_iter().filter(ResultRecord::is_error).take(1).collect(),
        Schema::Empty => vec![ResultRecord::NoResults],
        Schema::Matches => records,
    };
    debug!(?schema, records = records.len(), "classified results");
    (schema, records)
}

/// Presentation settings for [`ResultsView`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewOptions {
    pub caption_prefix: String,
    pub border: BorderStyle,
}

impl Default for ViewOptions {
    fn default() -> Self {
        ViewOptions {
            caption_prefix: DEFAULT_CAPTION_PREFIX.to_string(),
            border: BorderStyle::default(),
        }
    }
}

/// A classified, laid-out result list ready to render.
///
/// # Example
///
/// ```rust
/// use resultgrid_render::{ResultRecord, ResultsView, Schema};
///
/// let view = ResultsView::new(40, "//missing", vec![]);
/// assert_eq!(view.schema(), Schema::Empty);
///
/// let lines = view.lines();
/// assert!(lines[5].contains("No results found."));
/// assert!(lines.iter().all(|l| l.chars().count() == 40));
/// ```
#[derive(Clone, Debug)]
pub struct ResultsView {
    schema: Schema,
    table: Table,
    layout: Layout,
    caption: String,
    renderer: Renderer,
}

impl ResultsView {
    /// Lays out `records` for a viewport `width` columns wide, captioned with
    /// `query`.
    pub fn new(width: usize, query: &str, records: Vec<ResultRecord>) -> Self {
        Self::with_options(width, query, records, &ViewOptions::default())
    }

    pub fn with_options(
        width: usize,
        query: &str,
        records: Vec<ResultRecord>,
        options: &ViewOptions,
    ) -> Self {
        let (schema, records) = classify(records);
        let columns = schema.columns();

        // Outer borders plus one delimiter between each pair of columns.
        let total_width = width.saturating_sub(columns.len() + 1);

        let mut table = Table::new(total_width, columns);
        table.add_records(&records);
        let layout = table.build();

        ResultsView {
            schema,
            table,
            layout,
            caption: format!("{}{}", options.caption_prefix, query),
            renderer: Renderer::new(width).border(options.border),
        }
    }

    pub fn schema(&self) -> Schema {
        self.schema
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }

    /// Renders the view. Each line is exactly the viewport width.
    pub fn lines(&self) -> Vec<String> {
        self.renderer.render(&self.table, &self.layout, &self.caption)
    }
}

/// Classifies, lays out and renders `records` in one call.
pub fn render_results(width: usize, query: &str, records: Vec<ResultRecord>) -> Vec<String> {
    ResultsView::new(width, query, records).lines()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tabular::display_width;

    #[test]
    fn errors_take_priority() {
        let records = vec![
            ResultRecord::element(1, "a", "x"),
            ResultRecord::parse_error("first"),
            ResultRecord::parse_error("second"),
        ];
        let (schema, records) = classify(records);
        assert_eq!(schema, Schema::Error);
        assert_eq!(records, vec![ResultRecord::parse_error("first")]);
    }

    #[test]
    fn empty_list_gets_placeholder() {
        let (schema, records) = classify(vec![]);
        assert_eq!(schema, Schema::Empty);
        assert_eq!(records, vec![ResultRecord::NoResults]);
    }

    #[test]
    fn matches_pass_through() {
        let input = vec![ResultRecord::element(1, "a", "x")];
        let (schema, records) = classify(input.clone());
        assert_eq!(schema, Schema::Matches);
        assert_eq!(records, input);
    }

    #[test]
    fn match_schema_columns() {
        let columns = Schema::Matches.columns();
        let titles: Vec<&str> = columns.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["Line", "Tag", "Result"]);
        assert!(!columns[0].contractible);
        assert!(columns[1].contractible && columns[2].contractible);
        assert_eq!(
            columns.iter().map(|c| c.expand_target_pct).collect::<Vec<_>>(),
            vec![5, 25, 70]
        );
    }

    #[test]
    fn error_view_spans_width() {
        let view = ResultsView::new(40, "//a[", vec![ResultRecord::parse_error("bad input")]);
        assert_eq!(view.schema(), Schema::Error);
        assert_eq!(view.table().rows().len(), 1);
        assert_eq!(view.layout().widths(), vec![38]);

        let lines = view.lines();
        assert_eq!(lines.len(), 7);
        assert!(lines[1].starts_with("┃Results: //a["));
        assert!(lines[3].starts_with("┃Parse Error "));
        assert!(lines[5].starts_with("┃bad input "));
    }

    #[test]
    fn empty_view_shows_placeholder() {
        let view = ResultsView::new(40, "//none", vec![]);
        assert_eq!(view.layout().widths(), vec![38]);

        let lines = view.lines();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[5], format!("┃{:<38}┃", "No results found."));
    }

    #[test]
    fn three_matches_share_space() {
        let records = vec![
            ResultRecord::element(3, "a", "alpha"),
            ResultRecord::element(10, "b", "beta"),
            ResultRecord::element(21, "c", "gamma"),
        ];
        let view = ResultsView::new(50, "//*", records);
        let widths = view.layout().widths();

        assert!(widths[0] >= 2);
        assert_eq!(widths, vec![4, 12, 30]);
        assert!(widths[2] > widths[1]);

        let lines = view.lines();
        assert_eq!(lines.len(), 9);
        for line in &lines {
            assert_eq!(display_width(line), 50);
        }
    }

    #[test]
    fn missing_tag_renders_blank() {
        let records = vec![
            ResultRecord::element(3, "a", "alpha"),
            ResultRecord::Element {
                line: Some(4),
                tag: None,
                text: Some("beta".into()),
                attributes: vec![],
            },
        ];
        let view = ResultsView::new(50, "//*", records);
        assert_eq!(view.table().rows()[1].cell(1), None);

        let lines = view.lines();
        let tag_cell = lines[6].split('┃').nth(2).unwrap();
        assert_eq!(tag_cell.trim(), "");
        assert!(!lines[6].contains("None"));
    }

    #[test]
    fn custom_caption_and_border() {
        let options = ViewOptions {
            caption_prefix: "XPath: ".into(),
            border: BorderStyle::Ascii,
        };
        let view = ResultsView::with_options(30, "//a", vec![], &options);
        let lines = view.lines();
        assert_eq!(view.caption(), "XPath: //a");
        assert!(lines[0].starts_with('+'));
        assert!(lines[1].starts_with("|XPath: //a"));
    }

    #[test]
    fn render_is_deterministic() {
        let records = vec![
            ResultRecord::element(3, "a", "alpha"),
            ResultRecord::attribute(3, "a", "id", "1"),
        ];
        assert_eq!(
            render_results(60, "//a", records.clone()),
            render_results(60, "//a", records)
        );
    }

    #[test]
    fn multiline_text_stays_on_one_line() {
        let records = vec![
            ResultRecord::element(3, "a", "\n    hello\n  "),
            ResultRecord::element(4, "a", "x\ty"),
        ];
        let lines = render_results(40, "//a\n[1]", records);

        assert_eq!(lines.len(), 8);
        for line in &lines {
            assert!(!line.contains(|c: char| c.is_control()), "line: {:?}", line);
            assert_eq!(display_width(line), 40);
        }
        assert!(lines[1].contains("Results: //a [1]"));
        assert!(lines[5].contains("     hello"));
        assert!(lines[6].contains("x y"));
    }
}
