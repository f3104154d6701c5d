//! Property-based tests for layout and rendering.

use proptest::prelude::*;
use resultgrid_render::tabular::{display_width, fit, ELLIPSIS};
use resultgrid_render::{render_results, Attribute, ResultRecord, ResultsView};

// ============================================================================
// Strategies
// ============================================================================

fn text_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[ -~]{0,80}",
        "[ -~\t\n\r]{0,80}",
        "[a-zà-ü日本語]{0,20}",
    ]
}

fn record_strategy() -> impl Strategy<Value = ResultRecord> {
    prop_oneof![
        (
            prop::option::of(1u32..1_000_000),
            prop::option::of("[a-z]{1,15}"),
            prop::option::of(text_strategy()),
            prop::collection::vec(("[a-z]{1,6}", "[a-z0-9]{0,8}"), 0..3),
        )
            .prop_map(|(line, tag, text, attrs)| ResultRecord::Element {
                line,
                tag,
                text,
                attributes: attrs
                    .into_iter()
                    .map(|(n, v)| Attribute::new(n, v))
                    .collect(),
            }),
        (1u32..10_000, "[a-z]{1,8}", "[a-z]{1,8}", text_strategy())
            .prop_map(|(line, tag, name, value)| ResultRecord::attribute(line, tag, name, value)),
        text_strategy().prop_map(|value| ResultRecord::Scalar { value }),
        text_strategy().prop_map(|message| ResultRecord::parse_error(message)),
    ]
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// Every rendered line is exactly the viewport width.
    #[test]
    fn lines_match_viewport_width(
        records in prop::collection::vec(record_strategy(), 0..12),
        width in 0usize..160,
        query in "[ -~\t\n]{0,40}",
    ) {
        let lines = render_results(width, &query, records);
        for line in &lines {
            prop_assert_eq!(display_width(line), width, "line: {:?}", line);
            prop_assert!(!line.contains(|c: char| c.is_control()), "line: {:?}", line);
        }
    }

    /// Visible widths never exceed the content width unless the reserved
    /// minimums alone already do.
    #[test]
    fn layout_fits_content_width(
        records in prop::collection::vec(record_strategy(), 0..12),
        width in 0usize..160,
    ) {
        let view = ResultsView::new(width, "q", records);
        let table = view.table();
        let layout = view.layout();

        let reserved: usize = table
            .columns()
            .iter()
            .zip(layout.columns())
            .filter(|(_, l)| l.visible)
            .map(|(c, l)| if c.contractible { c.title_width() } else { l.max_data_width.max(c.title_width()) })
            .sum();

        prop_assert!(layout.total() <= table.total_width().max(reserved));
    }

    /// Building twice yields the same layout.
    #[test]
    fn layout_is_idempotent(
        records in prop::collection::vec(record_strategy(), 0..12),
        width in 0usize..160,
    ) {
        let view = ResultsView::new(width, "q", records);
        prop_assert_eq!(view.table().build(), view.layout().clone());
    }

    /// An overlong cell keeps its prefix and ends in the marker.
    #[test]
    fn truncation_keeps_prefix(
        s in "[ -~]{1,100}",
        width in 3usize..60,
    ) {
        prop_assume!(s.len() > width);
        let cell = fit(&s, width);
        prop_assert_eq!(display_width(&cell), width);
        prop_assert!(cell.ends_with(ELLIPSIS));
        prop_assert_eq!(&cell[..width - 3], &s[..width - 3]);
    }

    /// Short cells are padded, never cut.
    #[test]
    fn short_cells_are_padded(
        s in "[ -~]{0,30}",
        extra in 0usize..20,
    ) {
        let width = s.len() + extra;
        let cell = fit(&s, width);
        prop_assert_eq!(display_width(&cell), width);
        prop_assert!(cell.starts_with(s.as_str()));
    }
}
